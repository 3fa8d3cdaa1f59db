//! Nearest-color quantization of images onto a [`Palette`].

use image::{DynamicImage, Rgba, RgbaImage};

use crate::palette::{Color, Palette};

/// How a pixel's alpha channel affects quantization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transparency {
	/// Alpha is discarded and every pixel is quantized.
	#[default]
	Ignore,
	/// Fully transparent pixels (alpha 0) become index 0 without a palette
	/// search. Everything else is quantized, including pixels that still match a
	/// transparent marker color.
	AlphaZeroToIndex0,
}

impl Transparency {
	/// Policy used for frames cut from a sheet: alpha-aware when the sheet has a
	/// transparent marker, plain otherwise.
	pub fn for_marker(marker: Option<Color>) -> Self {
		if marker.is_some() {
			Self::AlphaZeroToIndex0
		} else {
			Self::Ignore
		}
	}

	/// Maps one pixel to its palette index under this policy.
	#[inline]
	pub fn index_of(self, palette: &Palette, pixel: Rgba<u8>) -> u8 {
		let [r, g, b, a] = pixel.0;
		match self {
			Self::AlphaZeroToIndex0 if a == 0 => 0,
			_ => palette.nearest_index(Color::new(r, g, b)),
		}
	}
}

/// Flat row-major buffer of palette indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexBuffer {
	width: u32,
	height: u32,
	indices: Vec<u8>,
}

impl IndexBuffer {
	/// Wraps raw indices. Returns `None` when `indices.len() != width * height`.
	pub fn from_raw(width: u32, height: u32, indices: Vec<u8>) -> Option<Self> {
		if indices.len() as u64 != width as u64 * height as u64 {
			return None;
		}
		Some(Self {
			width,
			height,
			indices,
		})
	}

	/// Width in pixels.
	#[inline]
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Height in pixels.
	#[inline]
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Number of entries.
	#[inline]
	pub fn len(&self) -> usize {
		self.indices.len()
	}

	/// Returns `true` for a zero-sized buffer.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.indices.is_empty()
	}

	/// Palette indices in row-major order.
	#[inline]
	pub fn indices(&self) -> &[u8] {
		&self.indices
	}

	/// Index at `(x, y)`, or `None` when out of bounds.
	pub fn get(&self, x: u32, y: u32) -> Option<u8> {
		if x >= self.width || y >= self.height {
			return None;
		}
		self.indices.get((y as usize) * (self.width as usize) + x as usize).copied()
	}

	/// Consumes the buffer and returns the raw indices.
	pub fn into_vec(self) -> Vec<u8> {
		self.indices
	}
}

/// Quantizes an RGBA image pixel by pixel.
pub fn quantize_rgba(image: &RgbaImage, palette: &Palette, transparency: Transparency) -> IndexBuffer {
	let indices = image.pixels().map(|px| transparency.index_of(palette, *px)).collect();
	IndexBuffer {
		width: image.width(),
		height: image.height(),
		indices,
	}
}

/// Quantizes any decoded image. The image is converted to RGBA first.
pub fn quantize_image(
	image: &DynamicImage,
	palette: &Palette,
	transparency: Transparency,
) -> IndexBuffer {
	match image {
		DynamicImage::ImageRgba8(rgba) => quantize_rgba(rgba, palette, transparency),
		other => quantize_rgba(&other.to_rgba8(), palette, transparency),
	}
}
