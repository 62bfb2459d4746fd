//! File reading and writing helpers with error context attached.

use anyhow::{Context, Result};
use image::DynamicImage;
use std::path::Path;

pub fn read_image(path: &Path) -> Result<DynamicImage> {
	image::open(path).with_context(|| format!("failed to read image {}", path.display()))
}

pub fn write_image(image: &DynamicImage, path: &Path) -> Result<()> {
	image
		.save(path)
		.with_context(|| format!("failed to write image {}", path.display()))
}
