//! Indexed binary min-heap
//!
//! An array-backed binary min-heap whose entries carry their own position
//! tag, giving O(1) membership testing and O(log n) removal and priority
//! update on top of the classic O(log n) enqueue/dequeue. This is the
//! shape of priority queue A*-style graph searches want: the frontier is
//! the set of live entries, and finding a cheaper path to an already
//! discovered node is a single `update_priority` call rather than a scan.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `enqueue`         | O(log n)   |
//! | `dequeue`         | O(log n)   |
//! | `peek`            | O(1)       |
//! | `contains`        | O(1)       |
//! | `remove`          | O(log n)   |
//! | `update_priority` | O(log n)   |
//! | `clear`           | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_min_heap::{HeapItem, HeapLink, IndexedMinHeap, NodeRef};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! struct Waypoint {
//!     id: u32,
//!     link: HeapLink<u32>,
//! }
//!
//! impl HeapItem for Waypoint {
//!     type Priority = u32;
//!
//!     fn priority(&self) -> u32 { self.link.priority() }
//!     fn set_priority(&mut self, p: u32) { self.link.set_priority(p) }
//!     fn slot(&self) -> usize { self.link.slot() }
//!     fn set_slot(&mut self, slot: usize) { self.link.set_slot(slot) }
//! }
//!
//! fn waypoint(id: u32) -> NodeRef<Waypoint> {
//!     Rc::new(RefCell::new(Waypoint { id, link: HeapLink::new(0) }))
//! }
//!
//! let mut heap = IndexedMinHeap::with_capacity(16);
//! let a = waypoint(1);
//! let b = waypoint(2);
//!
//! heap.enqueue(&a, 10)?;
//! heap.enqueue(&b, 3)?;
//! assert!(heap.contains(&a));
//!
//! // A cheaper path to `a` was found
//! heap.update_priority(&a, 1)?;
//!
//! let min = heap.dequeue().unwrap();
//! assert_eq!(min.borrow().id, 1);
//! assert!(!heap.contains(&a));
//! # Ok::<(), indexed_min_heap::HeapError>(())
//! ```

use crate::traits::{HeapError, HeapItem, NOT_IN_HEAP};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a caller-owned heap node
pub type NodeRef<N> = Rc<RefCell<N>>;

/// An indexed binary min-heap over caller-owned nodes
///
/// The backing array is 1-indexed (index 0 is never occupied) so that a
/// node's slot tag can double as its membership flag: slot 0 means "not
/// enqueued". Storage is sized once at construction; enqueueing past
/// capacity is reported as [`HeapError::CapacityExceeded`] rather than
/// reallocating.
///
/// All contract violations are checked and reported: enqueueing a live
/// node, or removing/updating a node that is not live in *this* heap,
/// returns an error instead of corrupting the structure. The checks are
/// O(1) slot-tag and pointer-identity comparisons, so the documented
/// complexities hold.
///
/// Ties between equal priorities are broken arbitrarily (the left child
/// is preferred during sift-down, nothing more). Callers that need a
/// reproducible order must fold a secondary key into the priority type.
#[derive(Debug)]
pub struct IndexedMinHeap<N: HeapItem> {
    /// 1-indexed backing array; `storage[0]` is the sentinel slot
    storage: Vec<Option<NodeRef<N>>>,
    /// Number of live entries, occupying `storage[1..=len]`
    len: usize,
}

impl<N: HeapItem> IndexedMinHeap<N> {
    /// Creates a heap able to hold up to `max_nodes` concurrently-live
    /// entries
    ///
    /// Size this to the maximum frontier the search space can produce;
    /// the heap never grows.
    pub fn with_capacity(max_nodes: usize) -> Self {
        IndexedMinHeap {
            storage: vec![None; max_nodes + 1],
            len: 0,
        }
    }

    /// Returns the number of live entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap holds no live entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the maximum number of concurrently-live entries
    pub fn capacity(&self) -> usize {
        self.storage.len() - 1
    }

    /// Empties the heap, detaching every live node
    ///
    /// Every live node's slot tag is reset, so `contains` reports false
    /// for previously-enqueued nodes and node objects can be pooled and
    /// reused across searches.
    pub fn clear(&mut self) {
        for entry in &mut self.storage {
            if let Some(node) = entry.take() {
                node.borrow_mut().set_slot(NOT_IN_HEAP);
            }
        }
        self.len = 0;
    }

    /// Returns true if `node` is currently live in this heap
    ///
    /// A node is live when its slot tag points at an occupied index of
    /// this heap's storage that holds this very node. The identity check
    /// makes the node-heap affinity explicit: a node enqueued in a
    /// different heap, or one whose slot was never reset, does not pass.
    pub fn contains(&self, node: &NodeRef<N>) -> bool {
        let slot = node.borrow().slot();
        slot != NOT_IN_HEAP
            && slot <= self.len
            && self.storage[slot]
                .as_ref()
                .map_or(false, |held| Rc::ptr_eq(held, node))
    }

    /// Enqueues `node` with the given priority
    ///
    /// The node's priority field is overwritten, the node is appended at
    /// the end of the array, and sifted up.
    ///
    /// # Errors
    /// [`HeapError::CapacityExceeded`] if the heap is full,
    /// [`HeapError::DuplicateEnqueue`] if the node is already live here.
    pub fn enqueue(&mut self, node: &NodeRef<N>, priority: N::Priority) -> Result<(), HeapError> {
        if self.len == self.capacity() {
            return Err(HeapError::CapacityExceeded);
        }
        if self.contains(node) {
            return Err(HeapError::DuplicateEnqueue);
        }
        node.borrow_mut().set_priority(priority);
        self.len += 1;
        self.sift_up(self.len, Rc::clone(node));
        Ok(())
    }

    /// Returns the minimum-priority node without removing it
    pub fn peek(&self) -> Option<NodeRef<N>> {
        self.storage.get(1).and_then(|entry| entry.clone())
    }

    /// Removes and returns the minimum-priority node
    ///
    /// The returned node's slot tag is reset. The last entry moves to
    /// the root and sifts down. Returns `None` on an empty heap.
    pub fn dequeue(&mut self) -> Option<NodeRef<N>> {
        if self.len == 0 {
            return None;
        }
        let min = self.storage[1].take()?;
        min.borrow_mut().set_slot(NOT_IN_HEAP);
        let last = self.storage[self.len].take();
        self.len -= 1;
        if let Some(last) = last {
            self.sift_down(1, last);
        }
        Some(min)
    }

    /// Removes `node` from anywhere in the heap
    ///
    /// The node swaps with the last live entry, the count shrinks, and
    /// the moved entry re-heapifies in whichever direction its new
    /// position demands. The removed node's slot tag is reset.
    ///
    /// # Errors
    /// [`HeapError::StaleHandle`] if the node is not live in this heap.
    pub fn remove(&mut self, node: &NodeRef<N>) -> Result<(), HeapError> {
        if !self.contains(node) {
            return Err(HeapError::StaleHandle);
        }
        let idx = node.borrow().slot();
        if let Some(removed) = self.storage[idx].take() {
            removed.borrow_mut().set_slot(NOT_IN_HEAP);
        }
        // When `node` was the last entry this take yields None and no
        // re-heapify is needed.
        let last = self.storage[self.len].take();
        self.len -= 1;
        if let Some(last) = last {
            self.reheapify(idx, last);
        }
        Ok(())
    }

    /// Overwrites the priority of a live node and restores heap order
    ///
    /// Direction is decided once: strictly lower than the parent sifts
    /// up, anything else sifts down (a no-op when already placed).
    ///
    /// # Errors
    /// [`HeapError::StaleHandle`] if the node is not live in this heap.
    pub fn update_priority(
        &mut self,
        node: &NodeRef<N>,
        new_priority: N::Priority,
    ) -> Result<(), HeapError> {
        if !self.contains(node) {
            return Err(HeapError::StaleHandle);
        }
        let idx = node.borrow().slot();
        node.borrow_mut().set_priority(new_priority);
        if let Some(moving) = self.storage[idx].take() {
            self.reheapify(idx, moving);
        }
        Ok(())
    }

    /// Unordered dump of all live node handles, for diagnostics
    ///
    /// Iteration order carries no guarantee whatsoever.
    #[cfg(any(test, debug_assertions))]
    pub fn live_nodes(&self) -> Vec<NodeRef<N>> {
        self.storage[1..=self.len].iter().flatten().cloned().collect()
    }

    /// Panics unless the heap property, the slot bijection, and the
    /// empty-suffix invariant all hold
    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) {
        for i in 1..=self.len {
            let node = self.storage[i].as_ref().expect("occupied prefix has a hole");
            assert_eq!(node.borrow().slot(), i, "slot tag out of sync at index {i}");
            if i > 1 {
                let parent = self.storage[i / 2].as_ref().expect("parent slot is empty");
                assert!(
                    parent.borrow().priority() <= node.borrow().priority(),
                    "heap property violated at index {i}"
                );
            }
        }
        for entry in &self.storage[self.len + 1..] {
            assert!(entry.is_none(), "stale entry beyond len");
        }
    }

    /// Re-heapifies the displaced `node` into the hole at `idx` after a
    /// priority update or a removal swap
    fn reheapify(&mut self, idx: usize, node: NodeRef<N>) {
        let lower_than_parent = idx > 1
            && self.storage[idx / 2]
                .as_ref()
                .map_or(false, |p| node.borrow().priority() < p.borrow().priority());
        if lower_than_parent {
            self.sift_up(idx, node);
        } else {
            self.sift_down(idx, node);
        }
    }

    /// Moves `node` toward the root from the hole at `idx` while its
    /// priority is strictly lower than its parent's, then writes it once
    /// at its final position
    fn sift_up(&mut self, mut idx: usize, node: NodeRef<N>) {
        let priority = node.borrow().priority();
        while idx > 1 {
            let parent_idx = idx / 2;
            let parent_greater = self.storage[parent_idx]
                .as_ref()
                .map_or(false, |p| p.borrow().priority() > priority);
            if !parent_greater {
                break;
            }
            let parent = self.storage[parent_idx].take();
            if let Some(p) = &parent {
                p.borrow_mut().set_slot(idx);
            }
            self.storage[idx] = parent;
            idx = parent_idx;
        }
        node.borrow_mut().set_slot(idx);
        self.storage[idx] = Some(node);
    }

    /// Moves `node` toward the leaves from the hole at `idx` while either
    /// child's priority is strictly lower, promoting the lower child
    /// (left preferred on ties), then writes it once at its final
    /// position
    fn sift_down(&mut self, mut idx: usize, node: NodeRef<N>) {
        let priority = node.borrow().priority();
        loop {
            let left = idx * 2;
            if left > self.len {
                break;
            }
            let right = left + 1;
            let mut child_idx = left;
            if right <= self.len {
                let right_lower = match (&self.storage[left], &self.storage[right]) {
                    (Some(l), Some(r)) => r.borrow().priority() < l.borrow().priority(),
                    _ => false,
                };
                if right_lower {
                    child_idx = right;
                }
            }
            let child_lower = self.storage[child_idx]
                .as_ref()
                .map_or(false, |c| c.borrow().priority() < priority);
            if !child_lower {
                break;
            }
            let child = self.storage[child_idx].take();
            if let Some(c) = &child {
                c.borrow_mut().set_slot(idx);
            }
            self.storage[idx] = child;
            idx = child_idx;
        }
        node.borrow_mut().set_slot(idx);
        self.storage[idx] = Some(node);
    }
}
