//! End-to-end tests for `agon-rs` conversion flows

use agon_rs::prelude::*;
use image::{Rgba, RgbaImage};

mod convert;
mod extract;

/// Frame size of the synthetic sheet
pub(crate) const FRAME: u32 = 16;
/// Horizontal gap between frames
pub(crate) const GAP: u32 = 4;
/// Blank rows between frame rows
pub(crate) const SEPARATOR: u32 = 2;

/// Builds a sheet with `rows` x `columns` solid frames on `background`.
///
/// Frame `(r, c)` is filled with AGON palette entry `r * columns + c + 1`.
pub(crate) fn synthetic_sheet(rows: u32, columns: u32, background: Rgba<u8>) -> RgbaImage {
	let width = columns * FRAME + (columns - 1) * GAP;
	let height = rows * FRAME + (rows - 1) * SEPARATOR;
	let mut sheet = RgbaImage::from_pixel(width, height, background);

	for row in 0..rows {
		for column in 0..columns {
			let color = AGON_PALETTE.get((row * columns + column + 1) as u8);
			let x0 = column * (FRAME + GAP);
			let y0 = row * (FRAME + SEPARATOR);
			for y in y0..y0 + FRAME {
				for x in x0..x0 + FRAME {
					sheet.put_pixel(x, y, Rgba([color.r, color.g, color.b, 255]));
				}
			}
		}
	}
	sheet
}

/// Lines of the array initializer body of a generated header.
pub(crate) fn array_body(header: &str) -> Vec<String> {
	header
		.lines()
		.skip_while(|l| !l.starts_with("static const uint8_t"))
		.skip(1)
		.take_while(|l| *l != "};")
		.map(str::to_string)
		.collect()
}
