//! Prelude module for `agon_types`.
//!
//! This module provides a convenient way to import commonly used types and functions.
//!
//! # Examples
//!
//! ```
//! use agon_types::prelude::*;
//!
//! let white = Color::new(255, 255, 255);
//! assert_eq!(Palette::agon().nearest_index(white), 63);
//! ```

#[doc(inline)]
pub use crate::ConvertError;

#[doc(inline)]
pub use crate::convert::{
	ConvertReport, ExtractJob, ExtractReport, convert_image_file, default_output_path,
	default_var_name, extract_sheet_to_dir, open_image,
};

#[doc(inline)]
pub use crate::header::{CHeader, sanitize_identifier};

#[doc(inline)]
pub use crate::palette::{AGON_PALETTE, Color, PALETTE_SIZE, Palette};

#[doc(inline)]
pub use crate::quantize::{IndexBuffer, Transparency, quantize_image, quantize_rgba};

#[doc(inline)]
pub use crate::sheet::{
	DEFAULT_ROW_HEIGHT, ExtractOptions, Frame, FrameBox, FrameCell, SheetLayout, extract_frames,
	scan_layout,
};
