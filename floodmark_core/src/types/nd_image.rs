//! This module defines [`NdImage`], a dense rectangular n-dimensional buffer
//! with a canonical row-major linear indexing (last axis fastest). It is the
//! container for input values, marker labels and output labels alike.
//!
//! # Examples
//!
//! ```
//! use floodmark_core::NdImage;
//!
//! let image = NdImage::from_fn(&[2, 3], |c| (c[0] * 10 + c[1]) as u8);
//! assert_eq!(image.pixel_count(), 6);
//! assert_eq!(image.data, vec![0, 1, 2, 10, 11, 12]);
//! assert_eq!(*image.get(&[1, 2]), 12);
//! ```

use anyhow::{Result, ensure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdImage<T> {
	/// The extent of each axis, outermost first.
	pub shape: Vec<usize>,
	/// The pixel values in row-major order (last axis fastest).
	pub data: Vec<T>,
}

impl<T> NdImage<T> {
	/// Wraps an existing buffer, verifying that its length matches the shape.
	pub fn from_vec(shape: &[usize], data: Vec<T>) -> Result<NdImage<T>> {
		let expected = shape.iter().product::<usize>();
		ensure!(
			data.len() == expected,
			"buffer holds {} values, but shape {:?} requires {}",
			data.len(),
			shape,
			expected
		);
		Ok(NdImage {
			shape: shape.to_vec(),
			data,
		})
	}

	/// Builds an image by evaluating `f` at every coordinate tuple, in linear order.
	pub fn from_fn(shape: &[usize], mut f: impl FnMut(&[usize]) -> T) -> NdImage<T> {
		let count = shape.iter().product::<usize>();
		let mut coords = vec![0usize; shape.len()];
		let mut data = Vec::with_capacity(count);
		for _ in 0..count {
			data.push(f(&coords));
			for axis in (0..shape.len()).rev() {
				coords[axis] += 1;
				if coords[axis] < shape[axis] {
					break;
				}
				coords[axis] = 0;
			}
		}
		NdImage {
			shape: shape.to_vec(),
			data,
		}
	}

	pub fn ndim(&self) -> usize {
		self.shape.len()
	}

	/// Total number of pixels; the product of all axis extents.
	pub fn pixel_count(&self) -> usize {
		self.shape.iter().product()
	}

	/// Converts a coordinate tuple to its linear index. Panics when out of range.
	pub fn index_of(&self, coords: &[usize]) -> usize {
		assert_eq!(coords.len(), self.shape.len(), "coordinate rank mismatch");
		let mut index = 0;
		for (axis, &c) in coords.iter().enumerate() {
			assert!(c < self.shape[axis], "coordinate {:?} outside shape {:?}", coords, self.shape);
			index = index * self.shape[axis] + c;
		}
		index
	}

	pub fn get(&self, coords: &[usize]) -> &T {
		&self.data[self.index_of(coords)]
	}

	pub fn set(&mut self, coords: &[usize], value: T) {
		let index = self.index_of(coords);
		self.data[index] = value;
	}
}

impl<T: Clone> NdImage<T> {
	/// Creates an image of the given shape with every pixel set to `value`.
	pub fn new_filled(shape: &[usize], value: T) -> NdImage<T> {
		NdImage {
			shape: shape.to_vec(),
			data: vec![value; shape.iter().product()],
		}
	}
}
