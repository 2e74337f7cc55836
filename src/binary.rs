//! Binary Heap implementation
//!
//! A straightforward array-backed binary heap ordered by an injected
//! [`Compare`]. It implements the base [`PriorityQueue`] trait only: elements
//! are relocated freely inside the backing vector, so no handles are handed
//! out. Use [`PairingHeap`](crate::pairing::PairingHeap) when elements need to
//! be addressed after insertion.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity |
//! |---------------------|------------|
//! | `push`              | O(log n)   |
//! | `pop`               | O(log n)   |
//! | `top`               | O(1)       |
//! | `update_priorities` | O(n)       |
//! | `from_iter_with`    | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queues::PriorityQueue;
//! use rust_priority_queues::binary::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! for v in [5, 3, 8, 1, 9, 2] {
//!     heap.push(v);
//! }
//!
//! assert_eq!(heap.pop(), Some(9));
//! assert_eq!(heap.pop(), Some(8));
//! assert_eq!(heap.top(), Some(&5));
//! ```

use std::fmt;

use crate::compare::{Compare, MaxComparator};
use crate::traits::PriorityQueue;

/// An array-backed binary heap
///
/// The element for which no other stored element is more extreme under `C`
/// sits at index 0.
#[derive(Clone)]
pub struct BinaryHeap<T, C = MaxComparator> {
    /// Heap-ordered storage; the parent of index `k` is `(k - 1) / 2`
    data: Vec<T>,
    compare: C,
}

impl<T: Ord> BinaryHeap<T, MaxComparator> {
    /// Creates an empty max-heap using the natural ordering of `T`
    pub fn new() -> Self {
        Self::with_comparator(MaxComparator)
    }
}

impl<T: Ord> Default for BinaryHeap<T, MaxComparator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `compare`
    pub fn with_comparator(compare: C) -> Self {
        Self {
            data: Vec::new(),
            compare,
        }
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, compare: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Returns the comparator this heap orders by
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Iterates over the stored elements in storage order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates mutably over the stored elements in storage order
    ///
    /// Changing an element's priority through this iterator breaks heap order
    /// until [`update_priorities`](PriorityQueue::update_priorities) is called.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning its storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Builds a heap from `iter` in O(n) by bulk-loading and then heapifying
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, compare: C) -> Self {
        let mut heap = Self {
            data: iter.into_iter().collect(),
            compare,
        };
        heap.heapify();
        heap
    }

    /// Consumes the heap, returning its elements most extreme first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = PriorityQueue::pop(&mut self) {
            sorted.push(value);
        }
        sorted
    }

    fn heapify(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.compare.less(&self.data[parent], &self.data[index]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < len && self.compare.less(&self.data[largest], &self.data[left]) {
                largest = left;
            }
            if right < len && self.compare.less(&self.data[largest], &self.data[right]) {
                largest = right;
            }

            if largest != index {
                self.data.swap(index, largest);
                index = largest;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for BinaryHeap<T, C> {
    type Comparator = C;

    fn with_comparator(compare: C) -> Self {
        BinaryHeap::with_comparator(compare)
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    fn top(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }

    fn update_priorities(&mut self) {
        tracing::trace!(len = self.data.len(), "rebuilding binary heap order");
        self.heapify();
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            PriorityQueue::push(self, value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}
