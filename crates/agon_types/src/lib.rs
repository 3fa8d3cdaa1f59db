//! This crate provides the palette, quantizer and spritesheet support for the `agon-rs` project.
//!
//! # Modules
//!
//! - **palette**: the fixed 64-color AGON VDP palette and nearest-color lookup
//! - **quantize**: image to palette index conversion
//! - **header**: C header emission for index buffers
//! - **sheet**: spritesheet frame detection and cropping
//! - **convert**: file-level flows combining the above
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use agon_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let image = image::open("sprite.png")?;
//! let buffer = quantize_image(&image, Palette::agon(), Transparency::Ignore);
//! CHeader::new("sprite", &buffer).save("sprite.h")?;
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use agon_types::palette::{AGON_PALETTE, Color};
//!
//! assert_eq!(AGON_PALETTE.nearest_index(Color::new(250, 250, 250)), 63);
//! ```

mod error;

pub mod convert;
pub mod header;
pub mod palette;
pub mod quantize;
pub mod sheet;

/// `use agon_types::prelude::*;` to import commonly used items.
pub mod prelude;

pub use error::ConvertError;
