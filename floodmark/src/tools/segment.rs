use anyhow::Result;
use floodmark_core::{AbsDiff, Algorithm, Connectivity, NeighbourValue, WatershedOptions, watershed};
use floodmark_image::{
	gaussian_gradient, image_to_markers, image_to_scalars, labels_to_image, morphological_gradient, read_image,
	write_image,
};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// input image (reduced to grayscale if needed)
	#[arg(long, short = 'i', value_name = "FILE")]
	input: PathBuf,

	/// marker image (8 or 16 bit grayscale, 0 = unmarked)
	#[arg(long, short = 'm', value_name = "FILE")]
	markers: PathBuf,

	/// output label image (16 bit grayscale)
	#[arg(long, short = 'o', value_name = "FILE")]
	output: PathBuf,

	/// scale of the gradient precomputation: sigma of the gaussian, or the
	/// radius in pixels with --morph-grad; 0 floods the raw values
	#[arg(long, short = 's', value_name = "FLOAT", default_value_t = 1.0, display_order = 1)]
	scale: f64,

	/// use a morphological gradient instead of the gaussian one
	#[arg(long, short = 'g', display_order = 1)]
	morph_grad: bool,

	/// flood the raw intensities under an absolute-difference cost,
	/// skipping the gradient precomputation entirely
	#[arg(long, display_order = 1)]
	dissimilarity: bool,

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
		"segmenting {} from markers {}",
		arguments.input.display(),
		arguments.markers.display()
	);

	let input = image_to_scalars(&read_image(&arguments.input)?);
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

	let labels = if arguments.dissimilarity {
		watershed(&input, &markers, &AbsDiff, &options)?
	} else {
		let gradient = if arguments.scale > 0.0 {
			if arguments.morph_grad {
				morphological_gradient(&input, arguments.scale as usize)?
			} else {
				gaussian_gradient(&input, arguments.scale)?
			}
		} else {
			log::info!("no gradient precomputation, flooding the raw values");
			input.clone()
		};
		watershed(&gradient, &markers, &NeighbourValue, &options)?
	};

	write_image(&labels_to_image(&labels)?, &arguments.output)?;
	log::info!("wrote labels to {}", arguments.output.display());

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use anyhow::Result;
	use assert_fs::TempDir;
	use image::{DynamicImage, GrayImage, Luma};

	fn write_fixtures(dir: &TempDir) -> Result<(String, String)> {
		// two flat basins separated by a sharp vertical edge
		let input = GrayImage::from_fn(16, 16, |x, _| Luma([if x < 8 { 20u8 } else { 220 }]));
		let mut markers = GrayImage::new(16, 16);
		markers.put_pixel(2, 8, Luma([1]));
		markers.put_pixel(13, 8, Luma([2]));

		let input_path = dir.path().join("input.png").display().to_string();
		let markers_path = dir.path().join("markers.png").display().to_string();
		input.save(&input_path)?;
		markers.save(&markers_path)?;
		Ok((input_path, markers_path))
	}

	fn read_labels(path: &str) -> Result<Vec<u32>> {
		let image = image::open(path)?;
		Ok(match image {
			DynamicImage::ImageLuma16(img) => img.pixels().map(|p| u32::from(p[0])).collect(),
			other => panic!("expected 16 bit grayscale output, got {:?}", other.color()),
		})
	}

	#[test]
	fn dissimilarity_splits_the_basins_at_the_edge() -> Result<()> {
		let temp_dir = TempDir::new()?;
		let (input, markers) = write_fixtures(&temp_dir)?;
		let output = temp_dir.path().join("labels.png").display().to_string();

		run_command(vec![
			"floodmark",
			"segment",
			"--dissimilarity",
			"-i",
			&input,
			"-m",
			&markers,
			"-o",
			&output,
		])?;

		let labels = read_labels(&output)?;
		// no lines requested, so every pixel belongs to one of the basins
		assert!(labels.iter().all(|&l| l == 1 || l == 2));
		// left half flooded from marker 1, right half from marker 2
		assert_eq!(labels[8 * 16 + 2], 1);
		assert_eq!(labels[8 * 16 + 7], 1);
		assert_eq!(labels[8 * 16 + 8], 2);
		assert_eq!(labels[8 * 16 + 13], 2);
		Ok(())
	}

	#[test]
	fn marked_lines_leave_the_boundary_unlabelled() -> Result<()> {
		let temp_dir = TempDir::new()?;
		let (input, markers) = write_fixtures(&temp_dir)?;
		let output = temp_dir.path().join("labels.png").display().to_string();

		run_command(vec![
			"floodmark",
			"segment",
			"--dissimilarity",
			"--mark-lines",
			"-i",
			&input,
			"-m",
			&markers,
			"-o",
			&output,
		])?;

		let labels = read_labels(&output)?;
		assert!(labels.iter().any(|&l| l == 0));
		assert!(labels.iter().any(|&l| l == 1));
		assert!(labels.iter().any(|&l| l == 2));
		Ok(())
	}

	#[test]
	fn gradient_path_with_ift_engine() -> Result<()> {
		let temp_dir = TempDir::new()?;
		let (input, markers) = write_fixtures(&temp_dir)?;
		let output = temp_dir.path().join("labels.png").display().to_string();

		run_command(vec![
			"floodmark",
			"segment",
			"--algorithm",
			"ift",
			"--scale",
			"1.5",
			"-i",
			&input,
			"-m",
			&markers,
			"-o",
			&output,
		])?;

		let labels = read_labels(&output)?;
		assert!(labels.iter().all(|&l| l == 1 || l == 2));
		Ok(())
	}

	#[test]
	fn morphological_gradient_path() -> Result<()> {
		let temp_dir = TempDir::new()?;
		let (input, markers) = write_fixtures(&temp_dir)?;
		let output = temp_dir.path().join("labels.png").display().to_string();

		run_command(vec![
			"floodmark",
			"segment",
			"--morph-grad",
			"--scale",
			"2",
			"-i",
			&input,
			"-m",
			&markers,
			"-o",
			&output,
		])?;

		let labels = read_labels(&output)?;
		assert_eq!(labels[8 * 16 + 2], 1);
		assert_eq!(labels[8 * 16 + 13], 2);
		Ok(())
	}

	#[test]
	fn missing_input_fails() {
		let temp_dir = TempDir::new().unwrap();
		let output = temp_dir.path().join("labels.png").display().to_string();
		let result = run_command(vec![
			"floodmark",
			"segment",
			"-i",
			"/no/such/input.png",
			"-m",
			"/no/such/markers.png",
			"-o",
			&output,
		]);
		assert!(result.is_err());
	}
}
