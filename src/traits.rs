//! The node contract and error type for the indexed heap
//!
//! This module provides:
//!
//! - [`HeapItem`]: the trait a node type must implement so the heap can
//!   read and write its priority and its current slot tag
//! - [`HeapLink`]: an embeddable struct storing both fields, so node
//!   types implement [`HeapItem`] by one-line delegation
//! - [`HeapError`]: reported contract violations
//!
//! The slot tag is what makes the heap "indexed": instead of a separate
//! position-lookup map, every node records its own 1-based position in the
//! heap's backing array (0 meaning "not enqueued"). The heap is the only
//! writer of the tag while the node is live.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap already holds `capacity` live entries
    CapacityExceeded,
    /// The node is already live in this heap
    DuplicateEnqueue,
    /// The node is not live in this heap (never enqueued, already
    /// dequeued or removed, or enqueued in a different heap)
    StaleHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::CapacityExceeded => {
                write!(f, "heap is at capacity, cannot enqueue")
            }
            HeapError::DuplicateEnqueue => {
                write!(f, "node is already enqueued in this heap")
            }
            HeapError::StaleHandle => {
                write!(f, "node is not live in this heap")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Slot value meaning "not enqueued in any heap"
pub const NOT_IN_HEAP: usize = 0;

/// Contract between the heap and caller-owned node types
///
/// The heap needs exactly two things from a node: its sort key and a
/// mutable slot tag recording where the node currently sits in the
/// backing array. Everything else on the node (coordinates, parent
/// pointers, payload) is the caller's business.
///
/// The slot tag is meaningful only relative to the single heap instance
/// that last enqueued the node. Once enqueued, the caller must not write
/// the tag; reusing a pooled node with a fresh heap requires resetting
/// its link first (see [`HeapLink::reset`]).
///
/// # Example
///
/// ```rust
/// use indexed_min_heap::{HeapItem, HeapLink};
///
/// struct FrontierNode {
///     x: i32,
///     y: i32,
///     link: HeapLink<u32>,
/// }
///
/// impl HeapItem for FrontierNode {
///     type Priority = u32;
///
///     fn priority(&self) -> u32 { self.link.priority() }
///     fn set_priority(&mut self, p: u32) { self.link.set_priority(p) }
///     fn slot(&self) -> usize { self.link.slot() }
///     fn set_slot(&mut self, slot: usize) { self.link.set_slot(slot) }
/// }
/// ```
pub trait HeapItem {
    /// The sort key type. Ties are broken arbitrarily; callers needing a
    /// deterministic order must pack a secondary key into this type.
    type Priority: Ord + Copy;

    /// Current sort key
    fn priority(&self) -> Self::Priority;

    /// Overwrites the sort key; called by the heap on enqueue and
    /// priority update
    fn set_priority(&mut self, priority: Self::Priority);

    /// Current 1-based position in the heap, or [`NOT_IN_HEAP`]
    fn slot(&self) -> usize;

    /// Writes the slot tag; reserved for the heap while the node is live
    fn set_slot(&mut self, slot: usize);
}

/// Embeddable storage for a node's heap bookkeeping
///
/// Holds the slot tag and the priority together so that node types can
/// implement [`HeapItem`] by delegating each accessor to an embedded
/// `HeapLink` field.
#[derive(Debug, Clone, Copy)]
pub struct HeapLink<P> {
    slot: usize,
    priority: P,
}

impl<P: Ord + Copy> HeapLink<P> {
    /// Creates a link that is not attached to any heap
    pub fn new(priority: P) -> Self {
        HeapLink {
            slot: NOT_IN_HEAP,
            priority,
        }
    }

    /// Current sort key
    pub fn priority(&self) -> P {
        self.priority
    }

    /// Overwrites the sort key
    pub fn set_priority(&mut self, priority: P) {
        self.priority = priority;
    }

    /// Current 1-based heap position, or [`NOT_IN_HEAP`]
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Writes the slot tag
    pub fn set_slot(&mut self, slot: usize) {
        self.slot = slot;
    }

    /// Detaches the link from whatever heap last owned it
    ///
    /// Required before reusing a pooled node with a different heap
    /// instance.
    pub fn reset(&mut self) {
        self.slot = NOT_IN_HEAP;
    }
}
