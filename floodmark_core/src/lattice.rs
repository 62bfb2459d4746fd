//! This module defines [`Lattice`], the n-dimensional index arithmetic behind
//! the flooding engines: linear/tuple coordinate conversion and neighbour
//! enumeration under a [`Connectivity`] mode.
//!
//! Neighbour enumeration order is deterministic: offsets are generated in
//! lexicographic order over `{-1,0,+1}ⁿ` (per axis `-1 < 0 < +1`), the centre
//! is excluded, and [`Connectivity::Face`] keeps only offsets touching a
//! single axis. Neighbours falling outside the grid are skipped. Tie-breaking
//! downstream relies on this order staying fixed.
//!
//! # Examples
//!
//! ```
//! use floodmark_core::{Connectivity, Lattice};
//!
//! let lattice = Lattice::new(&[3, 3], Connectivity::Face);
//! let mut neighbours = Vec::new();
//! lattice.neighbours_into(4, &mut neighbours); // centre pixel
//! assert_eq!(neighbours, vec![1, 3, 5, 7]);
//! lattice.neighbours_into(0, &mut neighbours); // corner pixel
//! assert_eq!(neighbours, vec![1, 3]);
//! ```

use crate::types::Connectivity;
use itertools::Itertools;

pub struct Lattice {
	shape: Vec<usize>,
	strides: Vec<usize>,
	offsets: Vec<Vec<isize>>,
	linear_offsets: Vec<isize>,
}

impl Lattice {
	pub fn new(shape: &[usize], connectivity: Connectivity) -> Lattice {
		assert!(!shape.is_empty(), "lattice needs at least one axis");

		// row-major strides, last axis fastest
		let mut strides = vec![1usize; shape.len()];
		for axis in (0..shape.len() - 1).rev() {
			strides[axis] = strides[axis + 1] * shape[axis + 1];
		}

		let offsets: Vec<Vec<isize>> = (0..shape.len())
			.map(|_| -1isize..=1)
			.multi_cartesian_product()
			.filter(|offset| {
				let moved = offset.iter().filter(|&&o| o != 0).count();
				match connectivity {
					Connectivity::Face => moved == 1,
					Connectivity::Full => moved > 0,
				}
			})
			.collect();

		let linear_offsets: Vec<isize> = offsets
			.iter()
			.map(|offset| {
				offset
					.iter()
					.zip(strides.iter())
					.map(|(&o, &s)| o * s as isize)
					.sum()
			})
			.collect();

		Lattice {
			shape: shape.to_vec(),
			strides,
			offsets,
			linear_offsets,
		}
	}

	pub fn ndim(&self) -> usize {
		self.shape.len()
	}

	pub fn shape(&self) -> &[usize] {
		&self.shape
	}

	pub fn pixel_count(&self) -> usize {
		self.shape.iter().product()
	}

	/// The number of offsets in the neighbourhood (2n for face, 3ⁿ−1 for full).
	pub fn degree(&self) -> usize {
		self.offsets.len()
	}

	/// Decodes a linear index into its coordinate tuple.
	pub fn coords_of(&self, index: usize) -> Vec<usize> {
		let mut coords = Vec::with_capacity(self.shape.len());
		let mut rest = index;
		for &stride in &self.strides {
			coords.push(rest / stride);
			rest %= stride;
		}
		coords
	}

	/// Encodes a coordinate tuple into its linear index.
	pub fn index_of(&self, coords: &[usize]) -> usize {
		coords.iter().zip(self.strides.iter()).map(|(&c, &s)| c * s).sum()
	}

	/// Whether a signed coordinate tuple lies inside the grid.
	pub fn is_inside(&self, coords: &[isize]) -> bool {
		coords
			.iter()
			.zip(self.shape.iter())
			.all(|(&c, &d)| c >= 0 && (c as usize) < d)
	}

	/// Collects the in-grid neighbours of `index` into `out` (cleared first),
	/// in the fixed enumeration order.
	pub fn neighbours_into(&self, index: usize, out: &mut Vec<usize>) {
		out.clear();
		let coords = self.coords_of(index);
		'offsets: for (offset, &linear) in self.offsets.iter().zip(self.linear_offsets.iter()) {
			for (axis, &o) in offset.iter().enumerate() {
				let c = coords[axis] as isize + o;
				if c < 0 || c as usize >= self.shape[axis] {
					continue 'offsets;
				}
			}
			out.push((index as isize + linear) as usize);
		}
	}
}
