//! This module defines [`AddressableQueue`], the value-addressable priority
//! queue used by the image foresting transform.
//!
//! Unlike [`super::HierarchicalQueue`], the queue holds at most one live
//! entry per pixel index, and an entry can be removed or relocated when a
//! cheaper path to its pixel is found. Two cross-indexed maps implement this:
//! one ordered by key for `pop_min`, one by index for the reverse lookup.
//!
//! Keys are `(priority, insertion time)` pairs compared lexicographically, so
//! entries with equal priority leave the queue in insertion order.

use crate::types::Priority;
use std::collections::{BTreeMap, HashMap};

/// The composite queue key: bottleneck cost, then insertion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueueKey {
	pub priority: Priority,
	pub time: u64,
}

#[derive(Debug, Default)]
pub struct AddressableQueue {
	by_key: BTreeMap<QueueKey, usize>,
	by_index: HashMap<usize, QueueKey>,
}

impl AddressableQueue {
	pub fn new() -> AddressableQueue {
		AddressableQueue::default()
	}

	/// Inserts `index`, or relocates its live entry when `key` carries a
	/// strictly smaller priority. Equal or larger priorities are a no-op.
	/// Returns whether the queue changed.
	pub fn insert_or_update(&mut self, index: usize, key: QueueKey) -> bool {
		if let Some(&current) = self.by_index.get(&index) {
			if key.priority >= current.priority {
				return false;
			}
			self.by_key.remove(&current);
		}
		self.by_key.insert(key, index);
		self.by_index.insert(index, key);
		true
	}

	/// Removes the live entry for `index`, returning its key.
	pub fn remove(&mut self, index: usize) -> Option<QueueKey> {
		let key = self.by_index.remove(&index)?;
		self.by_key.remove(&key);
		Some(key)
	}

	/// Removes and returns the entry with the minimum key.
	pub fn pop_min(&mut self) -> Option<(QueueKey, usize)> {
		let (key, index) = self.by_key.pop_first()?;
		self.by_index.remove(&index);
		Some((key, index))
	}

	pub fn is_empty(&self) -> bool {
		self.by_key.is_empty()
	}

	pub fn len(&self) -> usize {
		self.by_key.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(priority: f64, time: u64) -> QueueKey {
		QueueKey {
			priority: Priority(priority),
			time,
		}
	}

	#[test]
	fn pops_in_key_order() {
		let mut queue = AddressableQueue::new();
		queue.insert_or_update(0, key(2.0, 0));
		queue.insert_or_update(1, key(1.0, 1));
		queue.insert_or_update(2, key(3.0, 2));

		assert_eq!(queue.pop_min().unwrap().1, 1);
		assert_eq!(queue.pop_min().unwrap().1, 0);
		assert_eq!(queue.pop_min().unwrap().1, 2);
		assert!(queue.pop_min().is_none());
	}

	#[test]
	fn equal_priorities_leave_fifo() {
		let mut queue = AddressableQueue::new();
		queue.insert_or_update(7, key(1.0, 0));
		queue.insert_or_update(3, key(1.0, 1));
		queue.insert_or_update(9, key(1.0, 2));

		let order: Vec<usize> = std::iter::from_fn(|| queue.pop_min()).map(|(_, i)| i).collect();
		assert_eq!(order, vec![7, 3, 9]);
	}

	#[test]
	fn update_relocates_only_when_cheaper() {
		let mut queue = AddressableQueue::new();
		queue.insert_or_update(5, key(4.0, 0));

		// worse or equal priority: ignored, even with a fresh time stamp
		assert!(!queue.insert_or_update(5, key(4.0, 1)));
		assert!(!queue.insert_or_update(5, key(9.0, 2)));
		assert_eq!(queue.len(), 1);

		// strictly better: relocated
		assert!(queue.insert_or_update(5, key(2.0, 3)));
		assert_eq!(queue.len(), 1);
		let (popped, index) = queue.pop_min().unwrap();
		assert_eq!(index, 5);
		assert_eq!(popped, key(2.0, 3));
	}

	#[test]
	fn remove_erases_by_index() {
		let mut queue = AddressableQueue::new();
		queue.insert_or_update(1, key(1.0, 0));
		queue.insert_or_update(2, key(2.0, 1));

		assert_eq!(queue.remove(1), Some(key(1.0, 0)));
		assert_eq!(queue.remove(1), None);
		assert_eq!(queue.len(), 1);
		assert_eq!(queue.pop_min().unwrap().1, 2);
	}

	#[test]
	fn at_most_one_entry_per_index() {
		let mut queue = AddressableQueue::new();
		queue.insert_or_update(0, key(5.0, 0));
		queue.insert_or_update(0, key(3.0, 1));
		queue.insert_or_update(0, key(1.0, 2));
		assert_eq!(queue.len(), 1);
		assert_eq!(queue.pop_min().unwrap().0, key(1.0, 2));
		assert!(queue.is_empty());
	}
}
