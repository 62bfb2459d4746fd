//! The watershed driver binding an engine, a cost function and the image
//! buffers together.
//!
//! # Examples
//!
//! ```
//! use floodmark_core::{AbsDiff, NdImage, WatershedOptions, watershed};
//!
//! let input = NdImage::from_vec(&[5], vec![5.0, 5.0, 5.0, 5.0, 5.0]).unwrap();
//! let markers = NdImage::from_vec(&[5], vec![1u32, 0, 0, 0, 2]).unwrap();
//! let output = watershed(&input, &markers, &AbsDiff, &WatershedOptions::default()).unwrap();
//! assert_eq!(output.data, vec![1, 1, 0, 2, 2]);
//! ```

use super::{fill_lines, ift, meyer};
use crate::cost::CostFunction;
use crate::lattice::Lattice;
use crate::types::{Algorithm, Label, NdImage, WatershedOptions};
use anyhow::{Result, ensure};

/// Floods `input` from the non-zero components of `markers` and returns the
/// resulting label image. Fails when the two shapes differ.
pub fn watershed<T, L, C>(
	input: &NdImage<T>,
	markers: &NdImage<L>,
	cost: &C,
	options: &WatershedOptions,
) -> Result<NdImage<L>>
where
	L: Label,
	C: CostFunction<T>,
{
	ensure!(
		input.shape == markers.shape,
		"marker image shape {:?} does not match input image shape {:?}",
		markers.shape,
		input.shape
	);

	let lattice = Lattice::new(&input.shape, options.connectivity);
	log::debug!(
		"flooding {} pixels ({} algorithm, {} connectivity)",
		lattice.pixel_count(),
		options.algorithm,
		options.connectivity
	);

	let mut output = match options.algorithm {
		Algorithm::Meyer => meyer::flood_meyer(input, markers, &lattice, cost),
		Algorithm::Ift => ift::flood_ift(input, markers, &lattice, cost),
	};

	if !options.mark_lines {
		fill_lines::fill_lines(input, &mut output, &lattice, cost);
	}

	let lines = output.data.iter().filter(|&&l| l == L::background()).count();
	log::debug!("flooding finished, {} watershed pixels remain", lines);

	Ok(output)
}
