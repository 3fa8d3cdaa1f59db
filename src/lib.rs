#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `agon-rs` converts images and spritesheets into palette-indexed C headers for the AGON VDP.
//!
//! The library side lives in [`agon_types`] and is re-exported here. The package also ships
//! three command-line tools:
//!
//! - `agon_image_converter`: one image to one C header
//! - `agon_extract_frames`: slice a spritesheet into PNG frames and headers
//! - `agon_palette`: export the 64-color palette for image editors
pub use agon_types::*;
