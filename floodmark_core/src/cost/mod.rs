//! Dissimilarity functions turning a pair of adjacent pixel values into a
//! flooding [`Priority`].
//!
//! A cost function must be pure and deterministic, return non-negative
//! values, and satisfy `cost(a, a) == 0` for the difference-based variants.
//! The engines hold a reference to one functor for the whole run; anything
//! implementing [`CostFunction`] works, including closures over captured
//! state, as long as it stays deterministic.

use crate::types::Priority;
use num_traits::AsPrimitive;

/// The pluggable edge weight `c(centre, neighbour)` between adjacent pixels.
pub trait CostFunction<T: ?Sized> {
	fn cost(&self, centre: &T, neighbour: &T) -> Priority;
}

/// Absolute difference `|neighbour − centre|` of scalar pixels, the classical
/// morphological dissimilarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsDiff;

impl<T: Copy + AsPrimitive<f64>> CostFunction<T> for AbsDiff {
	fn cost(&self, centre: &T, neighbour: &T) -> Priority {
		Priority((neighbour.as_() - centre.as_()).abs())
	}
}

/// The neighbour's own value, ignoring the centre. Flooding a precomputed
/// gradient image with this cost gives the conventional watershed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighbourValue;

impl<T: Copy + AsPrimitive<f64>> CostFunction<T> for NeighbourValue {
	fn cost(&self, _centre: &T, neighbour: &T) -> Priority {
		Priority(neighbour.as_())
	}
}

/// Euclidean distance `‖neighbour − centre‖₂` between multi-channel pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanDist;

impl CostFunction<Vec<f64>> for EuclideanDist {
	fn cost(&self, centre: &Vec<f64>, neighbour: &Vec<f64>) -> Priority {
		debug_assert_eq!(centre.len(), neighbour.len(), "channel count mismatch");
		let sum: f64 = centre.iter().zip(neighbour.iter()).map(|(a, b)| (b - a) * (b - a)).sum();
		Priority(sum.sqrt())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(3.0, 7.5, 4.5)]
	#[case(7.5, 3.0, 4.5)]
	#[case(2.25, 2.25, 0.0)]
	fn abs_diff(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
		assert_eq!(AbsDiff.cost(&a, &b), Priority(expected));
	}

	#[test]
	fn abs_diff_on_integers() {
		assert_eq!(AbsDiff.cost(&3u8, &10u8), Priority(7.0));
		assert_eq!(AbsDiff.cost(&10u16, &3u16), Priority(7.0));
	}

	#[test]
	fn neighbour_value_ignores_centre() {
		assert_eq!(NeighbourValue.cost(&100.0, &4.0), Priority(4.0));
		assert_eq!(NeighbourValue.cost(&0.0, &4.0), Priority(4.0));
	}

	#[test]
	fn euclidean_dist() {
		let a = vec![0.0, 0.0];
		let b = vec![3.0, 4.0];
		assert_eq!(EuclideanDist.cost(&a, &b), Priority(5.0));
		assert_eq!(EuclideanDist.cost(&b, &b), Priority(0.0));
	}
}
