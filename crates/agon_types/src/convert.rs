//! File-level conversion flows.
//!
//! These wrap the pure pieces ([`crate::quantize`], [`crate::header`],
//! [`crate::sheet`]) with image decoding and file output.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};
use log::{debug, info};

use crate::error::ConvertError;
use crate::header::CHeader;
use crate::palette::Palette;
use crate::quantize::{Transparency, quantize_image};
use crate::sheet::{ExtractOptions, SheetLayout, cut_frames, scan_layout};

/// Opens and decodes an image, mapping a missing file to
/// [`ConvertError::InputNotFound`].
pub fn open_image(path: &Path) -> Result<DynamicImage, ConvertError> {
	let reader = ImageReader::open(path).map_err(|e| match e.kind() {
		ErrorKind::NotFound => ConvertError::InputNotFound(path.to_path_buf()),
		_ => ConvertError::IOError(e),
	})?;
	Ok(reader.with_guessed_format()?.decode()?)
}

/// Default header path: the input with its extension replaced by `.h`.
pub fn default_output_path(input: &Path) -> PathBuf {
	input.with_extension("h")
}

/// Default variable name: the input file stem followed by `_data`.
pub fn default_var_name(input: &Path) -> String {
	let stem = input.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
	format!("{stem}_data")
}

/// Outcome of [`convert_image_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
	/// Header file written
	pub output: PathBuf,
	/// Identifier used in the header
	pub name: String,
	/// Image width
	pub width: u32,
	/// Image height
	pub height: u32,
}

/// Converts one image into a C header of AGON palette indices.
///
/// Alpha is ignored. Nothing is written when the input is missing.
pub fn convert_image_file(
	input: &Path,
	output: &Path,
	name: &str,
) -> Result<ConvertReport, ConvertError> {
	let image = open_image(input)?;
	debug!("Decoded {} ({}x{})", input.display(), image.width(), image.height());

	let buffer = quantize_image(&image, Palette::agon(), Transparency::Ignore);
	let header = CHeader::new(name, &buffer);
	header.save(output)?;
	info!("Converted {} to {}", input.display(), output.display());

	Ok(ConvertReport {
		output: output.to_path_buf(),
		name: header.name().to_string(),
		width: buffer.width(),
		height: buffer.height(),
	})
}

/// A spritesheet extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractJob {
	/// Spritesheet image
	pub sheet: PathBuf,
	/// Directory receiving frame files (created if missing)
	pub output_dir: PathBuf,
	/// File name prefix for the frames
	pub prefix: String,
	/// Scan and cropping options
	pub options: ExtractOptions,
	/// Also write a C header next to every frame PNG
	pub emit_headers: bool,
}

/// Outcome of [`extract_sheet_to_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractReport {
	/// Geometry found on the sheet
	pub layout: SheetLayout,
	/// Frame PNG files written, in row-major frame order
	pub frames: Vec<PathBuf>,
	/// Header files written, in the same order
	pub headers: Vec<PathBuf>,
}

/// Slices a spritesheet into PNG frames and, optionally, C headers.
///
/// Frames are saved as `<prefix>_<row>_<column>.png`. Headers use the file stem
/// as variable name and map fully transparent pixels to index 0 when the job
/// has a transparent marker.
pub fn extract_sheet_to_dir(job: &ExtractJob) -> Result<ExtractReport, ConvertError> {
	let sheet = open_image(&job.sheet)?.to_rgba8();
	std::fs::create_dir_all(&job.output_dir)?;

	let layout = scan_layout(&sheet, job.options.transparent);
	let transparency = Transparency::for_marker(job.options.transparent);
	let mut frames = Vec::new();
	let mut headers = Vec::new();

	for frame in cut_frames(&sheet, &layout, &job.options) {
		let stem = frame.file_stem(&job.prefix);
		let png_path = job.output_dir.join(format!("{stem}.png"));
		frame.image().save(&png_path)?;
		debug!("Saved {} to {}", frame, png_path.display());

		if job.emit_headers {
			let header_path = png_path.with_extension("h");
			let buffer = frame.quantize(Palette::agon(), transparency);
			CHeader::new(&stem, &buffer).save(&header_path)?;
			info!("Converted {} to {}", png_path.display(), header_path.display());
			headers.push(header_path);
		}
		frames.push(png_path);
	}

	info!("Extracted {} frames from {}", frames.len(), job.sheet.display());
	Ok(ExtractReport {
		layout,
		frames,
		headers,
	})
}
