//! Indexed Binary Min-Heap for Graph Search
//!
//! This crate provides an array-backed binary min-heap specialized for
//! A*-style pathfinding: the frontier of a graph search needs enqueue,
//! dequeue-minimum, arbitrary removal, and in-place priority update in
//! O(log n), plus O(1) membership testing.
//!
//! The indexing trick is an embedded back-reference: each node carries a
//! slot tag recording its current 1-based position in the heap's backing
//! array (0 meaning "not enqueued"), so membership and position lookup
//! are a field read instead of a hash-map probe.
//!
//! # Features
//!
//! - **O(1) `contains`**: the slot tag doubles as the membership flag
//! - **O(log n) `update_priority`**: one parent comparison decides the
//!   sift direction, so a cheaper path to a frontier node is a single
//!   logarithmic fix-up
//! - **O(log n) `remove`**: any live node can be evicted, not just the
//!   minimum
//! - **Checked contract**: capacity overflows, duplicate enqueues, and
//!   stale handles are reported as [`HeapError`] values instead of
//!   silently corrupting the structure
//!
//! # Example
//!
//! ```rust
//! use indexed_min_heap::{HeapItem, HeapLink, IndexedMinHeap, NodeRef};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! struct Frontier {
//!     name: &'static str,
//!     link: HeapLink<u32>,
//! }
//!
//! impl HeapItem for Frontier {
//!     type Priority = u32;
//!
//!     fn priority(&self) -> u32 { self.link.priority() }
//!     fn set_priority(&mut self, p: u32) { self.link.set_priority(p) }
//!     fn slot(&self) -> usize { self.link.slot() }
//!     fn set_slot(&mut self, slot: usize) { self.link.set_slot(slot) }
//! }
//!
//! let mut heap = IndexedMinHeap::with_capacity(8);
//! let a: NodeRef<Frontier> =
//!     Rc::new(RefCell::new(Frontier { name: "a", link: HeapLink::new(0) }));
//! heap.enqueue(&a, 5)?;
//! assert!(heap.contains(&a));
//! assert_eq!(heap.dequeue().unwrap().borrow().name, "a");
//! # Ok::<(), indexed_min_heap::HeapError>(())
//! ```

pub mod indexed_binary;
pub mod traits;

// Re-export the main types for convenience
pub use indexed_binary::{IndexedMinHeap, NodeRef};
pub use traits::{HeapError, HeapItem, HeapLink, NOT_IN_HEAP};
