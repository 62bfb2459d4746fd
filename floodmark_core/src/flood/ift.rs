//! Image foresting transform flooding.
//!
//! Every pixel carries a mutable path cost: the maximum edge weight along its
//! current best path from a marker (a bottleneck criterion). Cheaper paths
//! overwrite earlier labellings until the pixel is popped and finalized.
//! Because a pixel's priority never falls below the priority of the
//! neighbour that discovered it, pops happen in globally monotone order and
//! the result is a shortest-path forest under the bottleneck metric.
//!
//! Queue keys carry an insertion counter next to the cost, so equal costs
//! resolve in FIFO order and plateau partitions are deterministic.

use crate::cost::CostFunction;
use crate::lattice::Lattice;
use crate::progress::get_progress_bar;
use crate::queue::{AddressableQueue, QueueKey};
use crate::types::{Label, NdImage, Priority};

pub fn flood_ift<T, L, C>(input: &NdImage<T>, markers: &NdImage<L>, lattice: &Lattice, cost: &C) -> NdImage<L>
where
	L: Label,
	C: CostFunction<T>,
{
	let count = lattice.pixel_count();
	let mut output = vec![L::background(); count];
	let mut path_cost = vec![Priority::INFINITY; count];
	let mut done = vec![false; count];
	let mut queue = AddressableQueue::new();
	let mut time: u64 = 0;
	let mut neighbours = Vec::with_capacity(lattice.degree());
	let mut progress = get_progress_bar("flooding (ift)", count as u64);

	// markers start with cost zero; only those bordering unmarked pixels
	// have work to do, the rest are final immediately
	for index in 0..count {
		let marker = markers.data[index];
		if marker == L::background() {
			continue;
		}
		output[index] = marker;
		path_cost[index] = Priority::ZERO;
		lattice.neighbours_into(index, &mut neighbours);
		if neighbours.iter().any(|&n| markers.data[n] == L::background()) {
			queue.insert_or_update(
				index,
				QueueKey {
					priority: Priority::ZERO,
					time,
				},
			);
			time += 1;
		} else {
			done[index] = true;
			progress.inc(1);
		}
	}

	// relaxation
	while let Some((_, index)) = queue.pop_min() {
		done[index] = true;
		progress.inc(1);
		let current = path_cost[index];
		let label = output[index];
		lattice.neighbours_into(index, &mut neighbours);
		for &n in &neighbours {
			if done[n] {
				continue;
			}
			let step = cost.cost(&input.data[index], &input.data[n]);
			let relaxed = current.max(step);
			if relaxed < path_cost[n] {
				path_cost[n] = relaxed;
				output[n] = label;
				queue.insert_or_update(
					n,
					QueueKey {
						priority: relaxed,
						time,
					},
				);
				time += 1;
			}
		}
	}
	progress.finish();

	NdImage {
		shape: lattice.shape().to_vec(),
		data: output,
	}
}
