//! AGON image converter
//!
//! Converts an image into a C header holding one AGON palette index per pixel.
//!
//! # Usage
//!
//! ```bash
//! # Writes sprite.h with a `sprite_data_data` array
//! cargo run --bin agon_image_converter -- sprite.png
//!
//! # Explicit output path and variable name
//! cargo run --bin agon_image_converter -- sprite.png -o include/mario.h -n mario
//! ```

use std::path::PathBuf;

use agon_rs::prelude::*;
use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(name = "agon_image_converter")]
#[command(author = "agon-rs project")]
#[command(version)]
#[command(about = "Convert image to AGON VDP C header", long_about = None)]
struct Cli {
	/// Input image file (e.g. sprite.png)
	#[arg(value_name = "INPUT")]
	input: PathBuf,

	/// Output C header file (defaults to the input with a `.h` extension)
	#[arg(short, long, value_name = "OUTPUT")]
	output: Option<PathBuf>,

	/// Variable name for the data array (defaults to `<input stem>_data`)
	#[arg(short, long, value_name = "NAME")]
	name: Option<String>,

	/// Show verbose output
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	let level = if cli.verbose {
		"debug"
	} else {
		"info"
	};
	env_logger::init_from_env(env_logger::Env::default().default_filter_or(level));

	let output = cli.output.unwrap_or_else(|| default_output_path(&cli.input));
	let name = cli.name.unwrap_or_else(|| default_var_name(&cli.input));
	debug!("Converting {} -> {} as `{}`", cli.input.display(), output.display(), name);

	match convert_image_file(&cli.input, &output, &name) {
		Ok(report) => {
			println!("Successfully converted {} to {}", cli.input.display(), report.output.display());
			Ok(())
		}
		Err(err @ ConvertError::InputNotFound(_)) => {
			println!("Error: {err}");
			Ok(())
		}
		Err(err) => Err(err).with_context(|| format!("Failed to convert {}", cli.input.display())),
	}
}
