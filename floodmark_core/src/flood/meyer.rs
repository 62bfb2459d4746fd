//! Meyer-style marker flooding on a hierarchical queue.
//!
//! The queue is keyed by the dissimilarity between a pixel and the neighbour
//! that proposed it. Each pixel is labelled at most once; a pixel whose
//! labelled neighbours carry two distinct labels becomes a watershed-line
//! pixel and keeps the reserved label `0` for good. Duplicate queue entries
//! are expected: whoever pops a pixel first decides, later entries are
//! recognized as stale because the pixel is no longer unlabelled.
//!
//! A watershed decision is equally permanent without extra bookkeeping:
//! labels are never removed, so re-inspecting a collision pixel re-observes
//! the collision.

use crate::cost::CostFunction;
use crate::lattice::Lattice;
use crate::progress::get_progress_bar;
use crate::queue::HierarchicalQueue;
use crate::types::{Label, NdImage, Priority};

pub fn flood_meyer<T, L, C>(input: &NdImage<T>, markers: &NdImage<L>, lattice: &Lattice, cost: &C) -> NdImage<L>
where
	L: Label,
	C: CostFunction<T>,
{
	let count = lattice.pixel_count();
	let mut output = vec![L::background(); count];
	let mut queue: HierarchicalQueue<Priority> = HierarchicalQueue::new();
	let mut neighbours = Vec::with_capacity(lattice.degree());
	let mut progress = get_progress_bar("flooding (meyer)", count as u64);

	// first stage: copy the markers to the output and seed the queue with
	// every unmarked neighbour of a marker. Priorities depend on the pixel
	// pair, so the same neighbour may enter the queue several times.
	for index in 0..count {
		let marker = markers.data[index];
		if marker == L::background() {
			continue;
		}
		output[index] = marker;
		progress.inc(1);
		lattice.neighbours_into(index, &mut neighbours);
		for &n in &neighbours {
			if markers.data[n] == L::background() {
				queue.push(cost.cost(&input.data[index], &input.data[n]), n);
			}
		}
	}

	// flooding
	while let Some((_, mut bucket)) = queue.pop_bucket() {
		while let Some(index) = bucket.pop_front() {
			// skip if already labelled (stale duplicate entry)
			if output[index] != L::background() {
				continue;
			}

			// a single distinct label among the neighbours claims the pixel,
			// two distinct labels leave it on the watershed line
			lattice.neighbours_into(index, &mut neighbours);
			let mut label = L::background();
			let mut collision = false;
			for &n in &neighbours {
				let o = output[n];
				if o != L::background() {
					if label != L::background() && o != label {
						collision = true;
						break;
					}
					label = o;
				}
			}
			progress.inc(1);
			if collision {
				continue;
			}

			output[index] = label;
			for &n in &neighbours {
				if output[n] == L::background() {
					let step = cost.cost(&input.data[index], &input.data[n]);
					if step <= Priority::ZERO {
						// zero-cost step on a plateau: stay in the bucket
						// being drained so FIFO order carries across flats
						bucket.push_back(n);
					} else {
						queue.push(step, n);
					}
				}
			}
		}
	}
	progress.finish();

	NdImage {
		shape: lattice.shape().to_vec(),
		data: output,
	}
}
