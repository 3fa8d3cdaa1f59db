//! AGON VDP palette support.
//!
//! The VDP exposes a fixed 64-color palette built from two bits per channel.
//! Every channel takes one of the levels `0, 85, 170, 255`, and entries are
//! ordered with red as the most significant digit, then green, then blue.

use std::fmt;
use std::fmt::Write as _;

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

/// RGB color representation.
///
/// Serialized as a three-element array (`[r, g, b]`), which keeps configuration
/// files short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
}

impl Color {
	/// Creates a new RGB color.
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self {
			r,
			g,
			b,
		}
	}

	/// Creates a new grayscale color.
	pub const fn gray(value: u8) -> Self {
		Self::new(value, value, value)
	}

	/// Returns the color as a 24-bit `0xRRGGBB` value.
	pub const fn to_rgb24(&self) -> u32 {
		((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
	}

	/// Creates a color from a 24-bit `0xRRGGBB` value. The top byte is ignored.
	pub const fn from_rgb24(rgb: u32) -> Self {
		Self {
			r: ((rgb >> 16) & 0xFF) as u8,
			g: ((rgb >> 8) & 0xFF) as u8,
			b: (rgb & 0xFF) as u8,
		}
	}

	/// Squared Euclidean distance between two colors in RGB space.
	#[inline]
	pub const fn distance_squared(&self, other: &Color) -> u32 {
		let dr = self.r as i32 - other.r as i32;
		let dg = self.g as i32 - other.g as i32;
		let db = self.b as i32 - other.b as i32;
		(dr * dr + dg * dg + db * db) as u32
	}

	/// Returns the components as an array.
	pub const fn to_array(self) -> [u8; 3] {
		[self.r, self.g, self.b]
	}
}

impl From<[u8; 3]> for Color {
	fn from(value: [u8; 3]) -> Self {
		Self::new(value[0], value[1], value[2])
	}
}

impl From<Color> for [u8; 3] {
	fn from(value: Color) -> Self {
		value.to_array()
	}
}

impl From<Rgb<u8>> for Color {
	fn from(value: Rgb<u8>) -> Self {
		Self::from(value.0)
	}
}

impl From<Color> for Rgb<u8> {
	fn from(value: Color) -> Self {
		Rgb(value.to_array())
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
	}
}

/// Number of entries in the AGON palette.
pub const PALETTE_SIZE: usize = 64;

/// The AGON VDP palette, as listed in `agon_palette.h`.
pub static AGON_PALETTE: Palette = Palette::new(
	"AGON-64",
	[
		Color::new(0, 0, 0),
		Color::new(0, 0, 85),
		Color::new(0, 0, 170),
		Color::new(0, 0, 255),
		Color::new(0, 85, 0),
		Color::new(0, 85, 85),
		Color::new(0, 85, 170),
		Color::new(0, 85, 255),
		Color::new(0, 170, 0),
		Color::new(0, 170, 85),
		Color::new(0, 170, 170),
		Color::new(0, 170, 255),
		Color::new(0, 255, 0),
		Color::new(0, 255, 85),
		Color::new(0, 255, 170),
		Color::new(0, 255, 255),
		Color::new(85, 0, 0),
		Color::new(85, 0, 85),
		Color::new(85, 0, 170),
		Color::new(85, 0, 255),
		Color::new(85, 85, 0),
		Color::new(85, 85, 85),
		Color::new(85, 85, 170),
		Color::new(85, 85, 255),
		Color::new(85, 170, 0),
		Color::new(85, 170, 85),
		Color::new(85, 170, 170),
		Color::new(85, 170, 255),
		Color::new(85, 255, 0),
		Color::new(85, 255, 85),
		Color::new(85, 255, 170),
		Color::new(85, 255, 255),
		Color::new(170, 0, 0),
		Color::new(170, 0, 85),
		Color::new(170, 0, 170),
		Color::new(170, 0, 255),
		Color::new(170, 85, 0),
		Color::new(170, 85, 85),
		Color::new(170, 85, 170),
		Color::new(170, 85, 255),
		Color::new(170, 170, 0),
		Color::new(170, 170, 85),
		Color::new(170, 170, 170),
		Color::new(170, 170, 255),
		Color::new(170, 255, 0),
		Color::new(170, 255, 85),
		Color::new(170, 255, 170),
		Color::new(170, 255, 255),
		Color::new(255, 0, 0),
		Color::new(255, 0, 85),
		Color::new(255, 0, 170),
		Color::new(255, 0, 255),
		Color::new(255, 85, 0),
		Color::new(255, 85, 85),
		Color::new(255, 85, 170),
		Color::new(255, 85, 255),
		Color::new(255, 170, 0),
		Color::new(255, 170, 85),
		Color::new(255, 170, 170),
		Color::new(255, 170, 255),
		Color::new(255, 255, 0),
		Color::new(255, 255, 85),
		Color::new(255, 255, 170),
		Color::new(255, 255, 255),
	],
);

/// A fixed 64-entry color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	name: &'static str,
	colors: [Color; PALETTE_SIZE],
}

impl Palette {
	/// Number of swatch cells per row in [`Palette::swatch`] and GIMP exports.
	pub const COLUMNS: u32 = 16;

	/// Creates a palette from its entries.
	pub const fn new(name: &'static str, colors: [Color; PALETTE_SIZE]) -> Self {
		Self {
			name,
			colors,
		}
	}

	/// Returns the AGON VDP palette.
	#[inline]
	pub fn agon() -> &'static Palette {
		&AGON_PALETTE
	}

	/// Palette name.
	#[inline]
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Gets a color by index.
	///
	/// # Panics
	///
	/// Panics if `index` is 64 or larger.
	#[inline]
	pub fn get(&self, index: u8) -> Color {
		self.colors[index as usize]
	}

	/// Returns a reference to the color array.
	#[inline]
	pub fn colors(&self) -> &[Color; PALETTE_SIZE] {
		&self.colors
	}

	/// Returns an iterator over palette colors with indices.
	pub fn iter_indexed(&self) -> impl Iterator<Item = (u8, &Color)> {
		self.colors.iter().enumerate().map(|(i, c)| (i as u8, c))
	}

	/// Finds the index of the closest palette entry.
	///
	/// On equal distances the entry with the lower index wins.
	#[inline]
	pub fn nearest_index(&self, color: Color) -> u8 {
		self.nearest_index_with_distance(color).0
	}

	/// Like [`Palette::nearest_index`], also returning the squared distance.
	pub fn nearest_index_with_distance(&self, color: Color) -> (u8, u32) {
		let mut best = 0u8;
		let mut best_distance = u32::MAX;
		for (index, entry) in self.iter_indexed() {
			let distance = color.distance_squared(entry);
			if distance < best_distance {
				best = index;
				best_distance = distance;
				if distance == 0 {
					break;
				}
			}
		}
		(best, best_distance)
	}

	/// Renders the palette in GIMP `.gpl` format.
	pub fn to_gpl(&self) -> String {
		let mut out = String::with_capacity(64 + PALETTE_SIZE * 24);
		out.push_str("GIMP Palette\n");
		let _ = writeln!(out, "Name: {}", self.name);
		let _ = writeln!(out, "Columns: {}", Self::COLUMNS);
		out.push_str("#\n");
		for (index, color) in self.iter_indexed() {
			let _ = writeln!(out, "{:3} {:3} {:3}\tIndex {}", color.r, color.g, color.b, index);
		}
		out
	}

	/// Renders a swatch image with one `cell` x `cell` square per entry,
	/// [`Palette::COLUMNS`] entries per row.
	pub fn swatch(&self, cell: u32) -> RgbImage {
		let cell = cell.max(1);
		let rows = (PALETTE_SIZE as u32).div_ceil(Self::COLUMNS);
		RgbImage::from_fn(Self::COLUMNS * cell, rows * cell, |x, y| {
			let index = (y / cell) * Self::COLUMNS + x / cell;
			self.colors[index as usize].into()
		})
	}
}

impl fmt::Display for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} palette: {} colors", self.name, PALETTE_SIZE)
	}
}

impl std::ops::Index<u8> for Palette {
	type Output = Color;

	fn index(&self, index: u8) -> &Self::Output {
		&self.colors[index as usize]
	}
}
