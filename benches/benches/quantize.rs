//! Benchmark suite for palette quantization and sheet slicing
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use agon_benches::{generate_gradient, generate_sheet};
use agon_types::palette::{AGON_PALETTE, Color};
use agon_types::quantize::{Transparency, quantize_rgba};
use agon_types::sheet::{ExtractOptions, extract_frames, scan_layout};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark the single-color nearest entry search
fn bench_nearest_index(c: &mut Criterion) {
	let mut group = c.benchmark_group("palette_nearest");

	let probes = [
		("exact", Color::new(170, 85, 255)),
		("near", Color::new(160, 90, 240)),
		("white", Color::new(254, 254, 254)),
	];
	for (name, color) in probes {
		group.bench_with_input(BenchmarkId::new("nearest_index", name), &color, |b, color| {
			b.iter(|| black_box(AGON_PALETTE.nearest_index(black_box(*color))));
		});
	}

	group.finish();
}

/// Benchmark whole-image quantization at sprite and screen sizes
fn bench_quantize(c: &mut Criterion) {
	let mut group = c.benchmark_group("quantize_rgba");

	for (width, height) in [(16, 16), (64, 64), (320, 240)] {
		let image = generate_gradient(width, height);
		group.throughput(Throughput::Elements((width * height) as u64));
		group.bench_with_input(
			BenchmarkId::from_parameter(format!("{width}x{height}")),
			&image,
			|b, image| {
				b.iter(|| quantize_rgba(black_box(image), &AGON_PALETTE, Transparency::AlphaZeroToIndex0));
			},
		);
	}

	group.finish();
}

/// Benchmark layout scanning and frame extraction
fn bench_sheet(c: &mut Criterion) {
	let mut group = c.benchmark_group("sheet");
	let sheet = generate_sheet(4, 12, 16, 4);
	let options = ExtractOptions {
		rows: 4,
		transparent: None,
	};

	group.bench_function("scan_layout", |b| {
		b.iter(|| black_box(scan_layout(black_box(&sheet), None)));
	});
	group.bench_function("extract_frames", |b| {
		b.iter(|| black_box(extract_frames(black_box(&sheet), &options)));
	});

	group.finish();
}

criterion_group!(benches, bench_nearest_index, bench_quantize, bench_sheet);
criterion_main!(benches);
