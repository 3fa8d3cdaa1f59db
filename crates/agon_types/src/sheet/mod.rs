//! Spritesheet slicing.
//!
//! Frames are found by scanning for runs of non-transparent pixels. A pixel is
//! transparent when its alpha is 0 or when it matches an optional marker color,
//! for sheets drawn on a flat background instead of real alpha.
//!
//! # Layout Heuristic
//!
//! - The first row with an opaque pixel is the top of the first frame row.
//! - The row height is the distance from there to the next fully transparent
//!   row. Without such a row it falls back to [`DEFAULT_ROW_HEIGHT`].
//! - Opaque runs along that top row become the frame columns.
//! - Later rows reuse the same columns at `top + row * row_height`.
//!
//! The row pitch ignores separator rows, so sheets whose frame rows are divided
//! by blank lines drift by the separator height on every row after the first.
//! Sheets without any blank row get the fallback height whatever their real
//! frame size is. Both are accepted limitations of the scan.
//!
//! # Example
//!
//! ```no_run
//! use agon_types::palette::Color;
//! use agon_types::sheet::{ExtractOptions, extract_frames};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sheet = image::open("mariobros-spritesheet.png")?.to_rgba8();
//! let options = ExtractOptions {
//!     rows: 2,
//!     transparent: Some(Color::new(51, 51, 51)),
//! };
//!
//! for frame in extract_frames(&sheet, &options) {
//!     frame.image().save(format!("{}.png", frame.file_stem("mario_frame")))?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod frame;
pub mod layout;

pub use frame::{ExtractOptions, Frame, crop_frame, cut_frames, extract_frames, remap_transparent};
pub use layout::{DEFAULT_ROW_HEIGHT, FrameBox, FrameCell, SheetLayout, is_transparent, scan_layout};
