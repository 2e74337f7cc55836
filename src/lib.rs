//! Comparator-ordered priority queues for Rust
//!
//! This crate provides two interchangeable priority queue backends behind one
//! trait, [`PriorityQueue`]:
//!
//! - **Binary Heap**: array-backed; O(log n) push and pop, O(n) bulk repair
//! - **Pairing Heap**: arena-backed tree; O(1) push, O(log n) amortized pop,
//!   and stable handles for in-place priority increase ([`AddressableQueue`])
//!
//! Ordering is injected through [`Compare`](compare::Compare). The default
//! [`MaxComparator`](compare::MaxComparator) puts the largest element on top.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queues::{AddressableQueue, PriorityQueue};
//! use rust_priority_queues::pairing::PairingHeap;
//!
//! let mut heap = PairingHeap::new();
//! let handle = heap.add_node(5);
//! heap.push(3);
//! heap.push(8);
//! heap.update_elt(&handle, 10).unwrap();
//! assert_eq!(heap.top(), Some(&10));
//! ```

pub mod binary;
pub mod compare;
pub mod pairing;
pub mod traits;

// Re-export the main traits for convenience
pub use traits::{AddressableQueue, HeapError, PriorityQueue};
