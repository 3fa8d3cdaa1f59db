//! Frame cropping and transparency remapping.

use std::fmt;

use image::{GenericImageView, Rgba, RgbaImage};
use log::{debug, warn};

use super::layout::{FrameBox, FrameCell, SheetLayout, scan_layout};
use crate::palette::{Color, Palette};
use crate::quantize::{IndexBuffer, Transparency, quantize_rgba};

/// Options controlling frame extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
	/// Number of frame rows to cut
	pub rows: u32,
	/// RGB treated as background and made fully transparent in the frames
	pub transparent: Option<Color>,
}

impl Default for ExtractOptions {
	fn default() -> Self {
		Self {
			rows: 2,
			transparent: None,
		}
	}
}

/// One frame cut from a spritesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
	cell: FrameCell,
	image: RgbaImage,
}

impl Frame {
	/// Frame row (0-based).
	#[inline]
	pub fn row(&self) -> u32 {
		self.cell.row
	}

	/// Frame column (0-based).
	#[inline]
	pub fn column(&self) -> u32 {
		self.cell.column
	}

	/// Source rectangle on the sheet.
	#[inline]
	pub fn bounds(&self) -> FrameBox {
		self.cell.bounds
	}

	/// Cropped pixels.
	#[inline]
	pub fn image(&self) -> &RgbaImage {
		&self.image
	}

	/// Consumes the frame, returning its pixels.
	pub fn into_image(self) -> RgbaImage {
		self.image
	}

	/// File stem of the form `<prefix>_<row>_<column>`.
	pub fn file_stem(&self, prefix: &str) -> String {
		format!("{}_{}_{}", prefix, self.cell.row, self.cell.column)
	}

	/// Quantizes the frame.
	pub fn quantize(&self, palette: &Palette, transparency: Transparency) -> IndexBuffer {
		quantize_rgba(&self.image, palette, transparency)
	}
}

impl fmt::Display for Frame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Frame[{}, {}] {}x{} at {}",
			self.cell.row,
			self.cell.column,
			self.image.width(),
			self.image.height(),
			self.cell.bounds
		)
	}
}

/// Crops `bounds` out of `sheet`.
///
/// The result always has the box's size; parts of the box that lie outside the
/// sheet are transparent black.
pub fn crop_frame(sheet: &RgbaImage, bounds: FrameBox) -> RgbaImage {
	let mut frame = RgbaImage::new(bounds.width(), bounds.height());
	let end_x = bounds.end_x.min(sheet.width());
	let end_y = bounds.end_y.min(sheet.height());
	if bounds.start_x >= end_x || bounds.start_y >= end_y {
		return frame;
	}

	let view = sheet.view(bounds.start_x, bounds.start_y, end_x - bounds.start_x, end_y - bounds.start_y);
	for (x, y, pixel) in view.pixels() {
		frame.put_pixel(x, y, pixel);
	}
	frame
}

/// Sets alpha to 0 on every pixel whose RGB equals `marker`, whatever its
/// current alpha. Returns the number of pixels touched.
pub fn remap_transparent(image: &mut RgbaImage, marker: Color) -> usize {
	let mut count = 0;
	for pixel in image.pixels_mut() {
		let [r, g, b, _] = pixel.0;
		if Color::new(r, g, b) == marker {
			*pixel = Rgba([r, g, b, 0]);
			count += 1;
		}
	}
	count
}

/// Slices a spritesheet into frames.
///
/// Geometry comes from [`scan_layout`]. Irregular sheets are not rejected; they
/// produce whatever the scan finds.
pub fn extract_frames(sheet: &RgbaImage, options: &ExtractOptions) -> Vec<Frame> {
	let layout = scan_layout(sheet, options.transparent);
	cut_frames(sheet, &layout, options)
}

/// Cuts the frames of an already scanned `layout` out of `sheet`.
pub fn cut_frames(sheet: &RgbaImage, layout: &SheetLayout, options: &ExtractOptions) -> Vec<Frame> {
	if layout.is_empty() {
		warn!("No opaque pixels found on sheet, nothing to extract");
		return Vec::new();
	}

	debug!(
		"Sheet layout: top {}, row height {}, {} columns",
		layout.top(),
		layout.row_height(),
		layout.columns().len()
	);
	if layout.is_fallback_height() {
		warn!("No blank separator row found, assuming a row height of {}", layout.row_height());
	}
	if layout.bottom(options.rows) > sheet.height() {
		warn!(
			"{} rows of height {} extend past the sheet bottom ({} > {})",
			options.rows,
			layout.row_height(),
			layout.bottom(options.rows),
			sheet.height()
		);
	}

	layout
		.cells(options.rows)
		.into_iter()
		.map(|cell| {
			let mut image = crop_frame(sheet, cell.bounds);
			if let Some(marker) = options.transparent {
				remap_transparent(&mut image, marker);
			}
			Frame {
				cell,
				image,
			}
		})
		.collect()
}
