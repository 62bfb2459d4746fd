//! Conversions between decoded `image` buffers and the dense n-dimensional
//! arrays the flooding engines work on.
//!
//! Image rows map onto the first axis, columns onto the second, so a
//! `width × height` raster becomes a buffer of shape `[height, width]` in
//! row-major order. 8 and 16 bit grayscale values are taken verbatim; other
//! color types are converted to luma first (scalars) or split into channel
//! vectors (multi-channel).

use anyhow::{Result, bail, ensure};
use floodmark_core::NdImage;
use image::{DynamicImage, ImageBuffer, Luma};

/// Converts an image to a scalar buffer. Grayscale values are kept verbatim;
/// anything else is reduced to 8 bit luma first.
pub fn image_to_scalars(image: &DynamicImage) -> NdImage<f64> {
	let shape = vec![image.height() as usize, image.width() as usize];
	let data = match image {
		DynamicImage::ImageLuma8(img) => img.pixels().map(|p| f64::from(p[0])).collect(),
		DynamicImage::ImageLuma16(img) => img.pixels().map(|p| f64::from(p[0])).collect(),
		_ => image.to_luma8().pixels().map(|p| f64::from(p[0])).collect(),
	};
	NdImage { shape, data }
}

/// Converts an image to per-pixel channel vectors (red, green, blue), with
/// any alpha channel dropped. 16 bit sources keep their full range.
pub fn image_to_vectors(image: &DynamicImage) -> NdImage<Vec<f64>> {
	let shape = vec![image.height() as usize, image.width() as usize];
	let data = match image {
		DynamicImage::ImageLuma16(_) | DynamicImage::ImageLumaA16(_) | DynamicImage::ImageRgb16(_) | DynamicImage::ImageRgba16(_) => {
			image
				.to_rgb16()
				.pixels()
				.map(|p| p.0.iter().map(|&v| f64::from(v)).collect())
				.collect()
		}
		_ => image
			.to_rgb8()
			.pixels()
			.map(|p| p.0.iter().map(|&v| f64::from(v)).collect())
			.collect(),
	};
	NdImage { shape, data }
}

/// Converts a marker image to labels. Only 8 and 16 bit grayscale sources are
/// accepted: a lossy color conversion could silently merge or invent labels.
pub fn image_to_markers(image: &DynamicImage) -> Result<NdImage<u32>> {
	let shape = vec![image.height() as usize, image.width() as usize];
	let data = match image {
		DynamicImage::ImageLuma8(img) => img.pixels().map(|p| u32::from(p[0])).collect(),
		DynamicImage::ImageLuma16(img) => img.pixels().map(|p| u32::from(p[0])).collect(),
		_ => bail!("marker image must be 8 or 16 bit grayscale, not {:?}", image.color()),
	};
	Ok(NdImage { shape, data })
}

/// Encodes a 2-D label buffer as a 16 bit grayscale image. Fails when a
/// label does not fit into 16 bits.
pub fn labels_to_image(labels: &NdImage<u32>) -> Result<DynamicImage> {
	ensure!(
		labels.ndim() == 2,
		"can only encode 2-dimensional label images, got shape {:?}",
		labels.shape
	);
	let (height, width) = (labels.shape[0], labels.shape[1]);

	if let Some(&label) = labels.data.iter().find(|&&l| l > u32::from(u16::MAX)) {
		bail!("label {label} does not fit the 16 bit output format");
	}

	let mut buffer = ImageBuffer::<Luma<u16>, Vec<u16>>::new(width as u32, height as u32);
	for (pixel, &label) in buffer.pixels_mut().zip(labels.data.iter()) {
		pixel[0] = label as u16;
	}
	Ok(DynamicImage::ImageLuma16(buffer))
}
