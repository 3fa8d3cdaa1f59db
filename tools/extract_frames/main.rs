//! AGON spritesheet frame extractor
//!
//! Slices a spritesheet into one PNG per frame and converts every frame into an
//! AGON palette C header.
//!
//! # Settings
//!
//! There are no command-line flags. Built-in defaults target the Mario Bros.
//! sheet and can be overridden, in increasing priority, by:
//!
//! - an `agon_extract.toml` file in the working directory
//! - `AGON_EXTRACT_*` environment variables
//!
//! ```toml
//! sheet = "mariobros-spritesheet.png"
//! output_dir = "mario_frames"
//! rows = 2
//! transparent = [51, 51, 51]
//! prefix = "mario_frame"
//! emit_headers = true
//! ```
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin agon_extract_frames
//! AGON_EXTRACT_ROWS=4 AGON_EXTRACT_SHEET=luigi.png cargo run --bin agon_extract_frames
//! ```

use std::path::PathBuf;

use agon_rs::prelude::*;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;

/// Settings file looked up in the working directory (extension optional).
const SETTINGS_FILE: &str = "agon_extract";

/// Environment variable prefix.
const ENV_PREFIX: &str = "AGON_EXTRACT";

const DEFAULT_SHEET: &str = "mariobros-spritesheet.png";
const DEFAULT_OUTPUT_DIR: &str = "mario_frames";
const DEFAULT_ROWS: u32 = 2;
const DEFAULT_TRANSPARENT: Color = Color::new(51, 51, 51);
const DEFAULT_PREFIX: &str = "mario_frame";

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Settings {
	sheet: PathBuf,
	output_dir: PathBuf,
	rows: u32,
	transparent: Option<Color>,
	prefix: String,
	emit_headers: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			sheet: PathBuf::from(DEFAULT_SHEET),
			output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
			rows: DEFAULT_ROWS,
			transparent: Some(DEFAULT_TRANSPARENT),
			prefix: DEFAULT_PREFIX.to_string(),
			emit_headers: true,
		}
	}
}

impl Settings {
	fn load() -> Result<Self> {
		let settings = config::Config::builder()
			.add_source(config::File::with_name(SETTINGS_FILE).required(false))
			.add_source(
				config::Environment::with_prefix(ENV_PREFIX)
					.try_parsing(true)
					.list_separator(",")
					.with_list_parse_key("transparent"),
			)
			.build()
			.context("Failed to read extractor settings")?;
		settings.try_deserialize().context("Invalid extractor settings")
	}

	fn into_job(self) -> ExtractJob {
		ExtractJob {
			sheet: self.sheet,
			output_dir: self.output_dir,
			prefix: self.prefix,
			options: ExtractOptions {
				rows: self.rows,
				transparent: self.transparent,
			},
			emit_headers: self.emit_headers,
		}
	}
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let settings = Settings::load()?;
	debug!("Settings: {settings:?}");
	let job = settings.into_job();

	match extract_sheet_to_dir(&job) {
		Ok(report) => {
			let layout = &report.layout;
			info!(
				"Sheet layout: top {}, row height {}{}, {} columns",
				layout.top(),
				layout.row_height(),
				if layout.is_fallback_height() {
					" (fallback)"
				} else {
					""
				},
				layout.columns().len()
			);
			if report.headers.is_empty() {
				for png in &report.frames {
					println!("Saved {}", png.display());
				}
			}
			for (png, header) in report.frames.iter().zip(&report.headers) {
				println!("Converted {} to {}", png.display(), header.display());
			}
			Ok(())
		}
		Err(err @ ConvertError::InputNotFound(_)) => {
			println!("Error: {err}");
			Ok(())
		}
		Err(err) => {
			Err(err).with_context(|| format!("Failed to extract frames from {}", job.sheet.display()))
		}
	}
}
