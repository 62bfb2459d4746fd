//! The optional post-pass replacing watershed-line pixels.
//!
//! A single sweep in linear order: every pixel still carrying the reserved
//! label `0` takes the label of the neighbour it is most similar to under
//! the run's cost function, ties broken by neighbourhood enumeration order.
//! The sweep works in place, and the chosen neighbour's label may itself be
//! `0` when nothing labelled is adjacent; the pass does not iterate.

use crate::cost::CostFunction;
use crate::lattice::Lattice;
use crate::types::{Label, NdImage, Priority};

pub fn fill_lines<T, L, C>(input: &NdImage<T>, output: &mut NdImage<L>, lattice: &Lattice, cost: &C)
where
	L: Label,
	C: CostFunction<T>,
{
	let mut neighbours = Vec::with_capacity(lattice.degree());
	for index in 0..lattice.pixel_count() {
		if output.data[index] != L::background() {
			continue;
		}
		lattice.neighbours_into(index, &mut neighbours);
		let mut best = Priority::INFINITY;
		let mut label = L::background();
		for &n in &neighbours {
			let step = cost.cost(&input.data[index], &input.data[n]);
			if step < best {
				best = step;
				label = output.data[n];
			}
		}
		output.data[index] = label;
	}
}
