//! AGON palette exporter
//!
//! Writes the 64-color AGON palette as a GIMP palette (`.gpl`), so images can be
//! drawn with the exact colors the converter maps to, and optionally as a PNG
//! swatch.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin agon_palette
//! cargo run --bin agon_palette -- -o palettes/AGON-64.gpl --swatch palettes/agon.png
//! ```

use std::fs;
use std::path::PathBuf;

use agon_rs::prelude::*;
use anyhow::{Context, Result};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(name = "agon_palette")]
#[command(author = "agon-rs project")]
#[command(version)]
#[command(about = "Export the AGON VDP 64-color palette", long_about = None)]
struct Cli {
	/// Output GIMP palette file
	#[arg(short, long, value_name = "OUTPUT", default_value = "AGON-64.gpl")]
	output: PathBuf,

	/// Also write a PNG swatch to this path
	#[arg(short, long, value_name = "SWATCH")]
	swatch: Option<PathBuf>,

	/// Swatch cell size in pixels
	#[arg(long, value_name = "PIXELS", default_value_t = 8)]
	cell: u32,
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
	let cli = Cli::parse();
	let palette = Palette::agon();

	fs::write(&cli.output, palette.to_gpl())
		.with_context(|| format!("Failed to write {}", cli.output.display()))?;
	info!("Wrote {} to {}", palette, cli.output.display());

	if let Some(path) = cli.swatch {
		palette
			.swatch(cli.cell)
			.save(&path)
			.with_context(|| format!("Failed to write swatch {}", path.display()))?;
		info!("Wrote swatch to {}", path.display());
	}

	Ok(())
}
