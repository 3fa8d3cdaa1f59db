//! Frame boundary detection.

use std::fmt;

use image::{Rgba, RgbaImage};

use crate::palette::Color;

/// Row height used when the sheet has no fully transparent row below the first
/// frame row.
pub const DEFAULT_ROW_HEIGHT: u32 = 16;

/// Returns `true` when `pixel` counts as background: alpha 0, or RGB equal to
/// the marker.
#[inline]
pub fn is_transparent(pixel: Rgba<u8>, marker: Option<Color>) -> bool {
	let [r, g, b, a] = pixel.0;
	a == 0 || marker.is_some_and(|m| m == Color::new(r, g, b))
}

/// Half-open pixel rectangle `[start_x, end_x) x [start_y, end_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameBox {
	/// Left edge (inclusive)
	pub start_x: u32,
	/// Top edge (inclusive)
	pub start_y: u32,
	/// Right edge (exclusive)
	pub end_x: u32,
	/// Bottom edge (exclusive)
	pub end_y: u32,
}

impl FrameBox {
	/// Creates a new box.
	pub const fn new(start_x: u32, start_y: u32, end_x: u32, end_y: u32) -> Self {
		Self {
			start_x,
			start_y,
			end_x,
			end_y,
		}
	}

	/// Box width.
	#[inline]
	pub const fn width(&self) -> u32 {
		self.end_x.saturating_sub(self.start_x)
	}

	/// Box height.
	#[inline]
	pub const fn height(&self) -> u32 {
		self.end_y.saturating_sub(self.start_y)
	}

	/// The same columns moved down by `dy` pixels.
	#[inline]
	pub const fn offset_y(&self, dy: u32) -> Self {
		Self::new(self.start_x, self.start_y + dy, self.end_x, self.end_y + dy)
	}
}

impl fmt::Display for FrameBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})-({}, {})", self.start_x, self.start_y, self.end_x, self.end_y)
	}
}

/// A frame position on a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCell {
	/// Frame row (0-based)
	pub row: u32,
	/// Frame column (0-based)
	pub column: u32,
	/// Pixel rectangle on the sheet
	pub bounds: FrameBox,
}

/// Geometry inferred from a spritesheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SheetLayout {
	top: u32,
	row_height: u32,
	fallback_height: bool,
	columns: Vec<FrameBox>,
}

impl SheetLayout {
	/// Top edge of the first frame row.
	#[inline]
	pub fn top(&self) -> u32 {
		self.top
	}

	/// Vertical pitch between frame rows.
	#[inline]
	pub fn row_height(&self) -> u32 {
		self.row_height
	}

	/// Whether [`DEFAULT_ROW_HEIGHT`] was used because no blank row was found.
	#[inline]
	pub fn is_fallback_height(&self) -> bool {
		self.fallback_height
	}

	/// Frame boxes of the first frame row, left to right.
	#[inline]
	pub fn columns(&self) -> &[FrameBox] {
		&self.columns
	}

	/// Returns `true` when no frame was found.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	/// Bottom edge of the last of `rows` frame rows.
	pub fn bottom(&self, rows: u32) -> u32 {
		self.top + rows * self.row_height
	}

	/// Frame cells for the first `rows` rows, reusing the column spans of the
	/// first row at `top + row * row_height`.
	pub fn cells(&self, rows: u32) -> Vec<FrameCell> {
		let mut cells = Vec::with_capacity(rows as usize * self.columns.len());
		for row in 0..rows {
			let dy = row * self.row_height;
			for (column, bounds) in self.columns.iter().enumerate() {
				cells.push(FrameCell {
					row,
					column: column as u32,
					bounds: bounds.offset_y(dy),
				});
			}
		}
		cells
	}
}

fn row_is_transparent(sheet: &RgbaImage, y: u32, marker: Option<Color>) -> bool {
	(0..sheet.width()).all(|x| is_transparent(*sheet.get_pixel(x, y), marker))
}

/// Scans a sheet for its frame layout.
///
/// The first row holding a non-transparent pixel is the top edge. The row
/// height is the distance to the next fully transparent row, or
/// [`DEFAULT_ROW_HEIGHT`] if there is none. Columns are the non-transparent
/// runs along the top row. Sheets with no opaque pixel produce an empty layout.
pub fn scan_layout(sheet: &RgbaImage, marker: Option<Color>) -> SheetLayout {
	let (width, height) = sheet.dimensions();

	let Some(top) = (0..height).find(|&y| !row_is_transparent(sheet, y, marker)) else {
		return SheetLayout::default();
	};

	let (row_height, fallback_height) = match (top..height).find(|&y| row_is_transparent(sheet, y, marker)) {
		Some(y) => (y - top, false),
		None => (DEFAULT_ROW_HEIGHT, true),
	};

	let mut columns = Vec::new();
	let mut x = 0;
	while x < width {
		while x < width && is_transparent(*sheet.get_pixel(x, top), marker) {
			x += 1;
		}
		if x >= width {
			break;
		}
		let start_x = x;
		while x < width && !is_transparent(*sheet.get_pixel(x, top), marker) {
			x += 1;
		}
		columns.push(FrameBox::new(start_x, top, x, top + row_height));
	}

	SheetLayout {
		top,
		row_height,
		fallback_height,
		columns,
	}
}
