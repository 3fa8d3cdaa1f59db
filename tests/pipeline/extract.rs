//! Spritesheet extraction flow

use std::fs;

use agon_rs::prelude::*;
use image::Rgba;

use crate::{FRAME, GAP, array_body, synthetic_sheet};

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[test_log::test]
fn two_by_three_sheet_in_memory() {
	let sheet = synthetic_sheet(2, 3, CLEAR);
	let layout = scan_layout(&sheet, None);

	assert_eq!(layout.top(), 0);
	assert_eq!(layout.row_height(), FRAME);
	assert!(!layout.is_fallback_height());
	assert_eq!(layout.columns().len(), 3);
	for (i, column) in layout.columns().iter().enumerate() {
		let x0 = i as u32 * (FRAME + GAP);
		assert_eq!(*column, FrameBox::new(x0, 0, x0 + FRAME, FRAME));
	}

	let options = ExtractOptions {
		rows: 2,
		transparent: None,
	};
	let frames = extract_frames(&sheet, &options);
	assert_eq!(frames.len(), 6);
	assert!(frames.iter().all(|f| f.image().dimensions() == (FRAME, FRAME)));
	assert_eq!(frames.iter().filter(|f| f.row() == 1).count(), 3);
}

#[test_log::test]
fn marker_background_is_remapped() {
	let marker = Color::new(51, 51, 51);
	let sheet = synthetic_sheet(2, 3, Rgba([51, 51, 51, 255]));
	let options = ExtractOptions {
		rows: 2,
		transparent: Some(marker),
	};

	let frames = extract_frames(&sheet, &options);
	assert_eq!(frames.len(), 6);

	// Second-row frames start on the separator rows, which are marker colored.
	let lower = frames.iter().find(|f| f.row() == 1 && f.column() == 0).unwrap();
	assert_eq!(*lower.image().get_pixel(0, 0), Rgba([51, 51, 51, 0]));
	assert!(lower.image().pixels().all(|p| p.0[..3] != [51, 51, 51] || p.0[3] == 0));

	let indices = lower.quantize(Palette::agon(), Transparency::for_marker(options.transparent));
	assert_eq!(indices.get(0, 0), Some(0));
	assert_eq!(indices.get(0, 2), Some(4));
}

#[test_log::test]
fn sheet_to_directory() {
	let dir = tempfile::tempdir().unwrap();
	let sheet_path = dir.path().join("sheet.png");
	synthetic_sheet(2, 3, Rgba([51, 51, 51, 255])).save(&sheet_path).unwrap();

	let job = ExtractJob {
		sheet: sheet_path,
		output_dir: dir.path().join("frames"),
		prefix: "mario_frame".to_string(),
		options: ExtractOptions {
			rows: 2,
			transparent: Some(Color::new(51, 51, 51)),
		},
		emit_headers: true,
	};
	let report = extract_sheet_to_dir(&job).unwrap();

	assert_eq!(report.frames.len(), 6);
	assert_eq!(report.headers.len(), 6);
	assert_eq!(report.frames[4], job.output_dir.join("mario_frame_1_1.png"));

	let frame = image::open(&report.frames[0]).unwrap().to_rgba8();
	assert_eq!(frame.dimensions(), (FRAME, FRAME));

	let text = fs::read_to_string(job.output_dir.join("mario_frame_0_2.h")).unwrap();
	assert!(text.starts_with("#ifndef MARIO_FRAME_0_2_H\n"));
	assert!(text.contains("#define MARIO_FRAME_0_2_WIDTH  16"));
	assert!(text.contains("#define MARIO_FRAME_0_2_HEIGHT 16"));
	assert!(text.contains("static const uint8_t mario_frame_0_2_data[] = {"));
	let body = array_body(&text);
	assert_eq!(body.len(), 16);
	assert!(body.iter().all(|line| line.matches("0x03").count() == 16));
}

#[test_log::test]
fn headers_can_be_skipped() {
	let dir = tempfile::tempdir().unwrap();
	let sheet_path = dir.path().join("sheet.png");
	synthetic_sheet(1, 2, CLEAR).save(&sheet_path).unwrap();

	let job = ExtractJob {
		sheet: sheet_path,
		output_dir: dir.path().join("out"),
		prefix: "f".to_string(),
		options: ExtractOptions {
			rows: 1,
			transparent: None,
		},
		emit_headers: false,
	};
	let report = extract_sheet_to_dir(&job).unwrap();
	assert_eq!(report.frames.len(), 2);
	assert!(report.headers.is_empty());
	assert!(!job.output_dir.join("f_0_0.h").exists());
}

#[test_log::test]
fn missing_sheet_is_reported() {
	let dir = tempfile::tempdir().unwrap();
	let job = ExtractJob {
		sheet: dir.path().join("missing.png"),
		output_dir: dir.path().join("out"),
		prefix: "f".to_string(),
		options: ExtractOptions::default(),
		emit_headers: true,
	};
	let err = extract_sheet_to_dir(&job).unwrap_err();
	assert!(err.is_input_not_found());
	assert!(!job.output_dir.exists());
}
