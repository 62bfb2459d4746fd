use anyhow::Result;
use floodmark_core::{Algorithm, Connectivity, EuclideanDist, WatershedOptions, watershed};
use floodmark_image::{image_to_markers, image_to_vectors, labels_to_image, read_image, write_image};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// multi-channel input image
	#[arg(long, short = 'i', value_name = "FILE")]
	input: PathBuf,

	/// marker image (8 or 16 bit grayscale, 0 = unmarked)
	#[arg(long, short = 'm', value_name = "FILE")]
	markers: PathBuf,

	/// output label image (16 bit grayscale)
	#[arg(long, short = 'o', value_name = "FILE")]
	output: PathBuf,

	/// keep watershed lines (label 0) in the output
	#[arg(long, short = 'l', display_order = 2)]
	mark_lines: bool,

	/// use the full 3ⁿ−1 neighbourhood instead of faces only
	#[arg(long, display_order = 2)]
	fully_connected: bool,

	/// flooding engine
	#[arg(long, value_enum, default_value_t = Algorithm::Meyer, display_order = 2)]
	algorithm: Algorithm,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::info!(
		"segmenting {} (multi-channel) from markers {}",
		arguments.input.display(),
		arguments.markers.display()
	);

	let input = image_to_vectors(&read_image(&arguments.input)?);
	let markers = image_to_markers(&read_image(&arguments.markers)?)?;

	let options = WatershedOptions {
		algorithm: arguments.algorithm,
		connectivity: if arguments.fully_connected {
			Connectivity::Full
		} else {
			Connectivity::Face
		},
		mark_lines: arguments.mark_lines,
	};

	let labels = watershed(&input, &markers, &EuclideanDist, &options)?;

	write_image(&labels_to_image(&labels)?, &arguments.output)?;
	log::info!("wrote labels to {}", arguments.output.display());

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use anyhow::Result;
	use assert_fs::TempDir;
	use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

	#[test]
	fn colour_edge_splits_the_basins() -> Result<()> {
		let temp_dir = TempDir::new()?;

		// constant red channel; the green channel jumps at x == 6
		let input = RgbImage::from_fn(12, 8, |x, _| Rgb([100, if x < 6 { 0 } else { 200 }, 0]));
		let mut markers = GrayImage::new(12, 8);
		markers.put_pixel(1, 4, Luma([1]));
		markers.put_pixel(10, 4, Luma([2]));

		let input_path = temp_dir.path().join("input.png").display().to_string();
		let markers_path = temp_dir.path().join("markers.png").display().to_string();
		let output_path = temp_dir.path().join("labels.png").display().to_string();
		input.save(&input_path)?;
		markers.save(&markers_path)?;

		run_command(vec![
			"floodmark",
			"segment-multi",
			"-i",
			&input_path,
			"-m",
			&markers_path,
			"-o",
			&output_path,
		])?;

		let image = image::open(&output_path)?;
		let labels: Vec<u32> = match image {
			DynamicImage::ImageLuma16(img) => img.pixels().map(|p| u32::from(p[0])).collect(),
			other => panic!("expected 16 bit grayscale output, got {:?}", other.color()),
		};

		assert!(labels.iter().all(|&l| l == 1 || l == 2));
		assert_eq!(labels[4 * 12 + 1], 1);
		assert_eq!(labels[4 * 12 + 4], 1);
		assert_eq!(labels[4 * 12 + 8], 2);
		assert_eq!(labels[4 * 12 + 10], 2);
		Ok(())
	}

	#[test]
	fn rejects_colour_marker_images() -> Result<()> {
		let temp_dir = TempDir::new()?;
		let input = RgbImage::new(4, 4);
		let markers = RgbImage::new(4, 4);

		let input_path = temp_dir.path().join("input.png").display().to_string();
		let markers_path = temp_dir.path().join("markers.png").display().to_string();
		let output_path = temp_dir.path().join("labels.png").display().to_string();
		input.save(&input_path)?;
		markers.save(&markers_path)?;

		let err = run_command(vec![
			"floodmark",
			"segment-multi",
			"-i",
			&input_path,
			"-m",
			&markers_path,
			"-o",
			&output_path,
		])
		.unwrap_err()
		.to_string();
		assert!(err.starts_with("marker image must be 8 or 16 bit grayscale"));
		Ok(())
	}
}
