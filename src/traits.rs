//! Common traits for priority queues
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`PriorityQueue`]: the contract every backend implements
//! - [`AddressableQueue`]: adds stable handles and in-place priority increase
//!
//! Both backends are max-heaps under their comparator: `top` and `pop` deal
//! with the element that no other element is "more extreme" than, where
//! extremity is decided by [`Compare::less`](crate::compare::Compare::less).

use crate::compare::Compare;

/// Error type for handle-based operations
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The new value is less extreme than the value it replaces
    #[error("new value is less extreme than the current value")]
    PriorityNotIncreased,
    /// The handle does not refer to a live element of this heap
    #[error("handle is no longer valid (element was removed or belongs to another heap)")]
    InvalidHandle,
}

/// A handle to an element in an addressable queue
///
/// Handles are cheap to copy and compare. A handle is tied to the queue that
/// issued it and to a single element; it stops being valid when that element
/// is popped.
pub trait Handle: Copy + Eq + std::fmt::Debug {}

/// Base trait for priority queues
///
/// # Example
///
/// ```rust
/// use rust_priority_queues::PriorityQueue;
/// use rust_priority_queues::binary::BinaryHeap;
///
/// let mut heap = BinaryHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.top(), Some(&3));
/// assert_eq!(heap.pop(), Some(3));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait PriorityQueue<T> {
    /// The ordering this queue was built with
    type Comparator: Compare<T>;

    /// Creates an empty queue ordered by `compare`
    fn with_comparator(compare: Self::Comparator) -> Self;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) for the binary heap, O(1) for the pairing heap.
    fn push(&mut self, value: T);

    /// Returns the most extreme element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn top(&self) -> Option<&T>;

    /// Removes and returns the most extreme element
    ///
    /// # Time Complexity
    /// O(log n) for the binary heap, amortized O(log n) for the pairing heap.
    fn pop(&mut self) -> Option<T>;

    /// Restores heap order after the effective priorities of stored elements
    /// changed behind the queue's back
    ///
    /// # Time Complexity
    /// O(n)
    fn update_priorities(&mut self);
}

/// Extended queue trait with stable handles
///
/// # Example
///
/// ```rust
/// use rust_priority_queues::{AddressableQueue, PriorityQueue};
/// use rust_priority_queues::pairing::PairingHeap;
///
/// let mut heap = PairingHeap::new();
/// let handle = heap.add_node(10);
/// heap.push(20);
/// heap.push(5);
/// heap.update_elt(&handle, 25).unwrap();
/// assert_eq!(heap.top(), Some(&25));
/// ```
pub trait AddressableQueue<T>: PriorityQueue<T> {
    /// The handle type for this queue
    type Handle: Handle;

    /// Inserts an element, returning a handle that stays valid until the
    /// element is popped
    fn add_node(&mut self, value: T) -> Self::Handle;

    /// Replaces the element behind `handle` with a value at least as extreme
    ///
    /// # Errors
    /// - [`HeapError::InvalidHandle`] if the handle's element is gone or the
    ///   handle came from another queue
    /// - [`HeapError::PriorityNotIncreased`] if `new_value` is less extreme
    ///   than the current element
    ///
    /// On error the queue is left unchanged.
    fn update_elt(&mut self, handle: &Self::Handle, new_value: T) -> Result<(), HeapError>;

    /// Returns the element behind `handle`, if it is still live
    fn get(&self, handle: &Self::Handle) -> Option<&T>;
}
