//! Orderings for priority queues
//!
//! Every queue in this crate is parameterized by a [`Compare`] implementation
//! rather than by `Ord` directly. `less(a, b)` answers "is `a` less extreme
//! than `b`?", and the queue's top is the maximal element under that
//! predicate. With [`MaxComparator`] (the default) this is a max-heap, the
//! same convention as `std::collections::BinaryHeap`.
//!
//! Any `Fn(&T, &T) -> bool` closure is also a comparator:
//!
//! ```rust
//! use rust_priority_queues::binary::BinaryHeap;
//! use rust_priority_queues::PriorityQueue;
//!
//! // Largest magnitude on top
//! let mut heap = BinaryHeap::with_comparator(|a: &i32, b: &i32| a.abs() < b.abs());
//! heap.push(3);
//! heap.push(-7);
//! heap.push(5);
//! assert_eq!(heap.top(), Some(&-7));
//! ```

/// A strict weak ordering used to decide which element is more extreme
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` is less extreme than `b`, i.e. `b` belongs closer
    /// to the top of the queue
    fn less(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Natural ordering; the largest element is on top
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxComparator;

impl<T: Ord + ?Sized> Compare<T> for MaxComparator {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Reverse natural ordering; the smallest element is on top
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinComparator;

impl<T: Ord + ?Sized> Compare<T> for MinComparator {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }
}

/// Flips another comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.0.less(b, a)
    }
}
