//! Image converter flow

use std::fs;

use agon_rs::prelude::*;
use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::array_body;

#[test_log::test]
fn single_pixel_header() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("dot.png");
	// (0, 85, 85) is palette entry 5.
	RgbImage::from_pixel(1, 1, Rgb([0, 85, 85])).save(&input).unwrap();

	let output = default_output_path(&input);
	let name = default_var_name(&input);
	let report = convert_image_file(&input, &output, &name).unwrap();

	assert_eq!(report.output, dir.path().join("dot.h"));
	assert_eq!((report.width, report.height), (1, 1));

	let text = fs::read_to_string(&output).unwrap();
	assert!(text.starts_with("#ifndef DOT_DATA_H\n#define DOT_DATA_H\n"));
	assert!(text.contains("#define DOT_DATA_WIDTH  1"));
	assert!(text.contains("#define DOT_DATA_HEIGHT 1"));
	assert!(text.contains("static const uint8_t dot_data_data[] = {"));
	assert_eq!(array_body(&text), vec!["    0x05".to_string()]);
	assert!(text.ends_with("#endif // DOT_DATA\n"));
}

#[test_log::test]
fn buffer_covers_every_pixel() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("gradient.png");
	let image = RgbaImage::from_fn(20, 3, |x, y| Rgba([(x * 13) as u8, (y * 120) as u8, 77, 255]));
	image.save(&input).unwrap();

	let output = dir.path().join("gradient.h");
	convert_image_file(&input, &output, "gradient").unwrap();

	let text = fs::read_to_string(&output).unwrap();
	let body = array_body(&text);
	let entries: Vec<u8> = body
		.iter()
		.flat_map(|line| line.split(','))
		.map(str::trim)
		.filter(|e| !e.is_empty())
		.map(|e| u8::from_str_radix(e.trim_start_matches("0x"), 16).unwrap())
		.collect();

	assert_eq!(entries.len(), 60);
	assert!(entries.iter().all(|&i| i < 64));
	// 60 entries wrap into 3 full lines and one of 12.
	assert_eq!(body.len(), 4);
	assert_eq!(body[3].matches("0x").count(), 12);

	let expected = quantize_image(&image::DynamicImage::ImageRgba8(image), Palette::agon(), Transparency::Ignore);
	assert_eq!(entries, expected.indices());
}

#[test_log::test]
fn alpha_is_ignored_by_the_converter() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("ghost.png");
	RgbaImage::from_pixel(2, 1, Rgba([255, 255, 255, 0])).save(&input).unwrap();

	let output = dir.path().join("ghost.h");
	convert_image_file(&input, &output, "ghost").unwrap();
	let text = fs::read_to_string(&output).unwrap();
	assert_eq!(array_body(&text), vec!["    0x3F, 0x3F".to_string()]);
}

#[test_log::test]
fn missing_input_writes_nothing() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("nope.png");
	let output = default_output_path(&input);

	let err = convert_image_file(&input, &output, "nope_data").unwrap_err();
	assert!(matches!(err, ConvertError::InputNotFound(ref p) if *p == input));
	assert!(err.to_string().starts_with("Image file not found at"));
	assert!(!output.exists());
}

#[test_log::test]
fn undecodable_input_is_an_error() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("broken.png");
	fs::write(&input, b"definitely not an image").unwrap();

	let err = convert_image_file(&input, &dir.path().join("broken.h"), "broken").unwrap_err();
	assert!(matches!(err, ConvertError::Image(_)));
}

#[test_log::test]
fn names_with_dashes_are_sanitized() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("mario-small.png");
	RgbImage::from_pixel(1, 1, Rgb([0, 0, 0])).save(&input).unwrap();

	let report = convert_image_file(&input, &default_output_path(&input), &default_var_name(&input)).unwrap();
	assert_eq!(report.name, "mario_small_data");
	let text = fs::read_to_string(&report.output).unwrap();
	assert!(text.contains("#define MARIO_SMALL_DATA_WIDTH  1"));
}
