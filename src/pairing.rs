//! Pairing Heap implementation
//!
//! A pairing heap is a heap-ordered multi-way tree with:
//! - O(1) insert
//! - O(log n) amortized pop
//! - o(log n) amortized priority increase through a handle
//!
//! Every structural change is expressed through a single O(1) primitive,
//! `meld`, which links the less extreme of two roots as the first child of
//! the other.
//!
//! Nodes live in a [`SlotMap`] arena and never move once created, so the
//! handle returned by [`add_node`](AddressableQueue::add_node) keeps naming
//! the same element across any number of pops, melds and rebuilds. Arena keys
//! are generational: a handle whose element was popped is rejected instead of
//! aliasing whatever reuses the slot. Each heap also carries a process-unique
//! id, so handles are never accepted by a clone or by an unrelated heap.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queues::{AddressableQueue, PriorityQueue};
//! use rust_priority_queues::pairing::PairingHeap;
//!
//! let mut heap = PairingHeap::new();
//! let handle = heap.add_node(10);
//! heap.push(20);
//! heap.push(5);
//!
//! heap.update_elt(&handle, 25).unwrap();
//! assert_eq!(heap.top(), Some(&25));
//! assert_eq!(heap.pop(), Some(25));
//! assert_eq!(heap.pop(), Some(20));
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use slotmap::{new_key_type, SlotMap};

use crate::compare::{Compare, MaxComparator};
use crate::traits::{AddressableQueue, Handle, HeapError, PriorityQueue};

new_key_type! {
    /// Arena key of a pairing heap node
    struct NodeKey;
}

static NEXT_HEAP_ID: AtomicU64 = AtomicU64::new(0);

fn next_heap_id() -> u64 {
    NEXT_HEAP_ID.fetch_add(1, Ordering::Relaxed)
}

/// Handle to an element in a Pairing heap
///
/// Valid from [`add_node`](AddressableQueue::add_node) until the element is
/// popped, and only against the heap that issued it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PairingHandle {
    heap: u64,
    node: NodeKey,
}

impl Handle for PairingHandle {}

struct Node<T> {
    element: T,
    /// First child
    child: Option<NodeKey>,
    /// Next node in the parent's child list
    sibling: Option<NodeKey>,
    /// Set while attached; only consulted by `update_elt`
    parent: Option<NodeKey>,
}

impl<T> Node<T> {
    fn new(element: T) -> Self {
        Self {
            element,
            child: None,
            sibling: None,
            parent: None,
        }
    }
}

/// Pairing Heap
///
/// # Example
///
/// ```rust
/// use rust_priority_queues::{AddressableQueue, PriorityQueue};
/// use rust_priority_queues::compare::MinComparator;
/// use rust_priority_queues::pairing::PairingHeap;
///
/// let mut heap = PairingHeap::with_comparator(MinComparator);
/// let handle = heap.add_node(50);
/// heap.push(10);
/// heap.update_elt(&handle, 1).unwrap();
/// assert_eq!(heap.top(), Some(&1));
/// ```
pub struct PairingHeap<T, C = MaxComparator> {
    nodes: SlotMap<NodeKey, Node<T>>,
    root: Option<NodeKey>,
    compare: C,
    id: u64,
}

impl<T: Ord> PairingHeap<T, MaxComparator> {
    /// Creates an empty max-heap using the natural ordering of `T`
    pub fn new() -> Self {
        Self::with_comparator(MaxComparator)
    }
}

impl<T: Ord> Default for PairingHeap<T, MaxComparator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> PairingHeap<T, C> {
    /// Creates an empty heap ordered by `compare`
    pub fn with_comparator(compare: C) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
            compare,
            id: next_heap_id(),
        }
    }

    /// Creates an empty heap with arena room for `capacity` nodes
    pub fn with_capacity_and_comparator(capacity: usize, compare: C) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
            root: None,
            compare,
            id: next_heap_id(),
        }
    }

    /// Returns the comparator this heap orders by
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Returns a mutable reference to the element behind `handle`
    ///
    /// Changing the element's priority this way breaks heap order until
    /// [`update_priorities`](PriorityQueue::update_priorities) is called. For
    /// a single increase prefer [`update_elt`](AddressableQueue::update_elt).
    pub fn get_mut(&mut self, handle: &PairingHandle) -> Option<&mut T> {
        let key = self.resolve(handle)?;
        self.nodes.get_mut(key).map(|node| &mut node.element)
    }

    /// Iterates over the stored elements in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes.values().map(|node| &node.element)
    }

    /// Iterates mutably over the stored elements in arbitrary order
    ///
    /// Follow priority changes made through this iterator with
    /// [`update_priorities`](PriorityQueue::update_priorities).
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.nodes.values_mut().map(|node| &mut node.element)
    }

    /// Removes every element; all outstanding handles become invalid
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    fn resolve(&self, handle: &PairingHandle) -> Option<NodeKey> {
        (handle.heap == self.id && self.nodes.contains_key(handle.node)).then_some(handle.node)
    }

    /// Clears a node's sibling and parent links, returning its old sibling
    fn detach(&mut self, key: NodeKey) -> Option<NodeKey> {
        let node = &mut self.nodes[key];
        node.parent = None;
        node.sibling.take()
    }

    /// Splices `key` out of `parent`'s child list
    fn cut(&mut self, key: NodeKey, parent: NodeKey) {
        let next = self.detach(key);

        if self.nodes[parent].child == Some(key) {
            self.nodes[parent].child = next;
            return;
        }

        let mut prev = self.nodes[parent].child;
        while let Some(p) = prev {
            if self.nodes[p].sibling == Some(key) {
                self.nodes[p].sibling = next;
                return;
            }
            prev = self.nodes[p].sibling;
        }
        debug_assert!(false, "node missing from its parent's child list");
    }
}

impl<T, C: Compare<T>> PairingHeap<T, C> {
    /// Builds a heap holding every element of `iter`
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, compare: C) -> Self {
        let iter = iter.into_iter();
        let mut heap = Self::with_capacity_and_comparator(iter.size_hint().0, compare);
        heap.extend(iter);
        heap
    }

    /// Links two parentless, sibling-free roots, returning the winner
    ///
    /// The less extreme root becomes the winner's first child.
    fn meld(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        let (winner, loser) = if self.compare.less(&self.nodes[a].element, &self.nodes[b].element) {
            (b, a)
        } else {
            (a, b)
        };

        let first_child = self.nodes[winner].child;
        let node = &mut self.nodes[loser];
        node.sibling = first_child;
        node.parent = Some(winner);
        self.nodes[winner].child = Some(loser);
        winner
    }

    /// Two-pass pairing of a detached child list
    ///
    /// Adjacent pairs are melded left to right, then the results are folded
    /// right to left into a single tree.
    fn merge_pairs(&mut self, first: NodeKey) -> Option<NodeKey> {
        let mut pairs = Vec::new();
        let mut current = Some(first);

        while let Some(a) = current {
            match self.detach(a) {
                Some(b) => {
                    current = self.detach(b);
                    pairs.push(self.meld(a, b));
                }
                None => {
                    pairs.push(a);
                    current = None;
                }
            }
        }

        pairs.into_iter().rev().reduce(|acc, tree| self.meld(tree, acc))
    }

    /// Pushes clones of every element of `self` into `target`, breadth first
    fn copy_into(&self, target: &mut Self)
    where
        T: Clone,
    {
        let Some(root) = self.root else {
            return;
        };

        let mut pending = VecDeque::with_capacity(self.nodes.len());
        pending.push_back(root);
        while let Some(key) = pending.pop_front() {
            let node = &self.nodes[key];
            pending.extend(node.child);
            pending.extend(node.sibling);
            target.add_node(node.element.clone());
        }
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for PairingHeap<T, C> {
    type Comparator = C;

    fn with_comparator(compare: C) -> Self {
        PairingHeap::with_comparator(compare)
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, value: T) {
        self.add_node(value);
    }

    fn top(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[root].element)
    }

    fn pop(&mut self) -> Option<T> {
        let root = self.root.take()?;
        let node = self.nodes.remove(root)?;

        if let Some(first_child) = node.child {
            self.root = self.merge_pairs(first_child);
        }

        Some(node.element)
    }

    fn update_priorities(&mut self) {
        let Some(root) = self.root else {
            return;
        };
        tracing::trace!(len = self.nodes.len(), "rebuilding pairing heap order");

        let mut pending = VecDeque::with_capacity(self.nodes.len());
        pending.push_back(root);
        let mut rebuilt = None;

        while let Some(key) = pending.pop_front() {
            let node = &mut self.nodes[key];
            pending.extend(node.child.take());
            pending.extend(node.sibling.take());
            node.parent = None;

            rebuilt = Some(match rebuilt {
                Some(acc) => self.meld(acc, key),
                None => key,
            });
        }

        self.root = rebuilt;
    }
}

impl<T, C: Compare<T>> AddressableQueue<T> for PairingHeap<T, C> {
    type Handle = PairingHandle;

    fn add_node(&mut self, value: T) -> PairingHandle {
        let node = self.nodes.insert(Node::new(value));
        let root = match self.root {
            Some(root) => self.meld(root, node),
            None => node,
        };
        self.root = Some(root);

        PairingHandle {
            heap: self.id,
            node,
        }
    }

    fn update_elt(&mut self, handle: &PairingHandle, new_value: T) -> Result<(), HeapError> {
        let Some(key) = self.resolve(handle) else {
            tracing::debug!(?handle, "update_elt with a stale or foreign handle");
            return Err(HeapError::InvalidHandle);
        };

        if self.compare.less(&new_value, &self.nodes[key].element) {
            tracing::debug!(?handle, "update_elt would lower the element's priority");
            return Err(HeapError::PriorityNotIncreased);
        }

        self.nodes[key].element = new_value;

        // Only the root is parentless
        let Some(parent) = self.nodes[key].parent else {
            return Ok(());
        };

        if self.compare.less(&self.nodes[parent].element, &self.nodes[key].element) {
            self.cut(key, parent);
            if let Some(root) = self.root {
                self.root = Some(self.meld(root, key));
            }
        }

        Ok(())
    }

    fn get(&self, handle: &PairingHandle) -> Option<&T> {
        let key = self.resolve(handle)?;
        self.nodes.get(key).map(|node| &node.element)
    }
}

impl<T: Clone, C: Compare<T> + Clone> Clone for PairingHeap<T, C> {
    fn clone(&self) -> Self {
        tracing::trace!(len = self.nodes.len(), "cloning pairing heap");
        let mut copy = Self::with_capacity_and_comparator(self.nodes.len(), self.compare.clone());
        self.copy_into(&mut copy);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        tracing::trace!(len = source.nodes.len(), "cloning pairing heap in place");
        self.clear();
        self.compare = source.compare.clone();
        self.id = next_heap_id();
        source.copy_into(self);
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PairingHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C: Compare<T>> Extend<T> for PairingHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_node(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for PairingHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}
