//! Error types for image conversion and sheet extraction.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when converting images or slicing spritesheets
#[derive(Debug, Error)]
pub enum ConvertError {
	/// The input image does not exist
	#[error("Image file not found at {}", .0.display())]
	InputNotFound(PathBuf),

	/// Decoding or encoding failed
	#[error(transparent)]
	Image(#[from] image::ImageError),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl ConvertError {
	/// Returns `true` for [`ConvertError::InputNotFound`].
	pub fn is_input_not_found(&self) -> bool {
		matches!(self, Self::InputNotFound(_))
	}
}
