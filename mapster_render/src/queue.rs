//! Back-to-front ordering of shapes.
//!
//! Shapes leave the queue by ascending draw order. Shapes with the same draw order leave in the
//! order they were pushed.

use crate::{DrawOrder, shapes::Shape};
use std::{
	cmp::{Ordering, Reverse},
	collections::BinaryHeap,
};

struct Entry {
	order: DrawOrder,
	seq: u64,
	shape: Box<dyn Shape>,
}

impl Entry {
	fn key(&self) -> (DrawOrder, u64) {
		(self.order, self.seq)
	}
}

impl PartialEq for Entry {
	fn eq(&self, other: &Self) -> bool {
		self.key() == other.key()
	}
}

impl Eq for Entry {}

impl PartialOrd for Entry {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Entry {
	fn cmp(&self, other: &Self) -> Ordering {
		self.key().cmp(&other.key())
	}
}

#[derive(Default)]
pub struct RenderQueue {
	heap: BinaryHeap<Reverse<Entry>>,
	next_seq: u64,
}

impl RenderQueue {
	pub fn new() -> RenderQueue {
		RenderQueue::default()
	}

	/// Adds `shape` with its own draw order.
	pub fn push(&mut self, shape: Box<dyn Shape>) {
		let order = shape.draw_order();
		self.push_with_order(shape, order);
	}

	pub fn push_with_order(&mut self, shape: Box<dyn Shape>, order: DrawOrder) {
		let seq = self.next_seq;
		self.next_seq += 1;
		self.heap.push(Reverse(Entry { order, seq, shape }));
	}

	/// Removes the shape with the lowest draw order, the earliest pushed one among equals.
	pub fn pop_min(&mut self) -> Option<Box<dyn Shape>> {
		self.heap.pop().map(|Reverse(entry)| entry.shape)
	}

	pub fn peek_order(&self) -> Option<DrawOrder> {
		self.heap.peek().map(|Reverse(entry)| entry.order)
	}

	pub fn len(&self) -> usize {
		self.heap.len()
	}

	pub fn is_empty(&self) -> bool {
		self.heap.is_empty()
	}

	/// Moves all shapes of `other` behind the shapes of this queue.
	///
	/// Among equal draw orders, the shapes of `other` come after every shape already in `self`, in
	/// the order they were pushed into `other`.
	pub fn append(&mut self, other: RenderQueue) {
		let offset = self.next_seq;
		self.next_seq += other.next_seq;
		self.heap.extend(other.heap.into_iter().map(|Reverse(mut entry)| {
			entry.seq += offset;
			Reverse(entry)
		}));
	}

	/// Drains the queue in drawing order.
	pub fn drain_ordered(&mut self) -> impl Iterator<Item = Box<dyn Shape>> + '_ {
		std::iter::from_fn(|| self.pop_min())
	}
}

impl std::fmt::Debug for RenderQueue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RenderQueue").field("len", &self.len()).finish()
	}
}
