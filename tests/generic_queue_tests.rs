//! Generic tests for every PriorityQueue implementation
//!
//! The helpers below only use the trait interface, so the same scenarios run
//! against both backends. Addressable scenarios run against the pairing heap.

use rust_priority_queues::binary::BinaryHeap;
use rust_priority_queues::compare::{MaxComparator, MinComparator};
use rust_priority_queues::pairing::PairingHeap;
use rust_priority_queues::{AddressableQueue, HeapError, PriorityQueue};

use std::cell::RefCell;
use std::rc::Rc;

fn max_queue<H: PriorityQueue<i32, Comparator = MaxComparator>>() -> H {
    H::with_comparator(MaxComparator)
}

fn drain<T, H: PriorityQueue<T>>(heap: &mut H) -> Vec<T> {
    let mut out = Vec::with_capacity(heap.len());
    while let Some(value) = heap.pop() {
        out.push(value);
    }
    out
}

/// Test that an empty queue behaves correctly
fn test_empty_queue<H: PriorityQueue<i32, Comparator = MaxComparator>>() {
    let mut heap: H = max_queue();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.top(), None);
    assert_eq!(heap.pop(), None);
    heap.update_priorities();
    assert!(heap.is_empty());
}

/// push 5,3,8,1,9,2 with the natural ordering pops 9,8,5,3,2,1
fn test_max_ordering<H: PriorityQueue<i32, Comparator = MaxComparator>>() {
    let mut heap: H = max_queue();
    let mut max = i32::MIN;
    for v in [5, 3, 8, 1, 9, 2] {
        heap.push(v);
        max = max.max(v);
        assert_eq!(heap.top(), Some(&max));
    }

    assert_eq!(heap.len(), 6);
    assert_eq!(drain(&mut heap), vec![9, 8, 5, 3, 2, 1]);
    assert!(heap.is_empty());
}

/// Three equal elements come back three times
fn test_all_equal<H: PriorityQueue<i32, Comparator = MaxComparator>>() {
    let mut heap: H = max_queue();
    for v in [4, 4, 4] {
        heap.push(v);
    }

    assert_eq!(heap.len(), 3);
    assert_eq!(heap.pop(), Some(4));
    assert_eq!(heap.pop(), Some(4));
    assert_eq!(heap.pop(), Some(4));
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), None);
}

/// len tracks k pushes minus j pops
fn test_len_tracking<H: PriorityQueue<i32, Comparator = MaxComparator>>() {
    let mut heap: H = max_queue();
    for i in 0..50 {
        heap.push(i % 7);
    }
    for j in 1..=20 {
        heap.pop();
        assert_eq!(heap.len(), 50 - j);
    }
    assert!(!heap.is_empty());
}

/// top is stable across repeated calls
fn test_top_idempotent<H: PriorityQueue<i32, Comparator = MaxComparator>>() {
    let mut heap: H = max_queue();
    heap.push(2);
    heap.push(11);
    heap.push(6);

    for _ in 0..5 {
        assert_eq!(heap.top(), Some(&11));
    }
    assert_eq!(heap.len(), 3);
}

/// Interleaved pushes and pops
fn test_alternating_operations<H: PriorityQueue<i32, Comparator = MaxComparator>>() {
    let mut heap: H = max_queue();
    for i in 0..100 {
        heap.push(i);
        heap.push(1000 - i);
        assert_eq!(heap.pop(), Some(1000 - i));
    }
    assert_eq!(drain(&mut heap), (0..100).rev().collect::<Vec<_>>());
}

/// Negative and extreme values order correctly
fn test_extreme_values<H: PriorityQueue<i32, Comparator = MaxComparator>>() {
    let mut heap: H = max_queue();
    for v in [0, i32::MIN, -5, i32::MAX, 17, -5] {
        heap.push(v);
    }
    assert_eq!(drain(&mut heap), vec![i32::MAX, 17, 0, -5, -5, i32::MIN]);
}

/// update_priorities repairs order after the comparator's key data changed
fn test_update_priorities_external_keys<H>()
where
    H: PriorityQueue<usize>,
    H::Comparator: From<Rc<RefCell<Vec<i32>>>>,
{
    let keys = Rc::new(RefCell::new(vec![10, 20, 30, 40, 50, 60]));
    let mut heap = H::with_comparator(H::Comparator::from(Rc::clone(&keys)));
    for node in 0..6 {
        heap.push(node);
    }
    assert_eq!(heap.top(), Some(&5));

    // Reverse every key behind the queue's back
    for k in keys.borrow_mut().iter_mut() {
        *k = -*k;
    }
    heap.update_priorities();

    assert_eq!(drain(&mut heap), vec![0, 1, 2, 3, 4, 5]);
}

/// Comparator that reads priorities from shared external storage
#[derive(Clone)]
struct ByKey(Rc<RefCell<Vec<i32>>>);

impl From<Rc<RefCell<Vec<i32>>>> for ByKey {
    fn from(keys: Rc<RefCell<Vec<i32>>>) -> Self {
        ByKey(keys)
    }
}

impl rust_priority_queues::compare::Compare<usize> for ByKey {
    fn less(&self, a: &usize, b: &usize) -> bool {
        let keys = self.0.borrow();
        keys[*a] < keys[*b]
    }
}

macro_rules! queue_test {
    ($name:ident, $heap:ty, $func:ident) => {
        #[test]
        fn $name() {
            $func::<$heap>();
        }
    };
}

macro_rules! define_queue_tests {
    (
        $heap_type:ident,
        $test_empty:ident, $test_max_ordering:ident, $test_all_equal:ident,
        $test_len_tracking:ident, $test_top_idempotent:ident, $test_alternating:ident,
        $test_extreme_values:ident, $test_external_keys:ident
    ) => {
        queue_test!($test_empty, $heap_type<i32>, test_empty_queue);
        queue_test!($test_max_ordering, $heap_type<i32>, test_max_ordering);
        queue_test!($test_all_equal, $heap_type<i32>, test_all_equal);
        queue_test!($test_len_tracking, $heap_type<i32>, test_len_tracking);
        queue_test!($test_top_idempotent, $heap_type<i32>, test_top_idempotent);
        queue_test!($test_alternating, $heap_type<i32>, test_alternating_operations);
        queue_test!($test_extreme_values, $heap_type<i32>, test_extreme_values);
        queue_test!($test_external_keys, $heap_type<usize, ByKey>, test_update_priorities_external_keys);
    };
}

define_queue_tests!(
    BinaryHeap,
    test_binary_empty, test_binary_max_ordering, test_binary_all_equal,
    test_binary_len_tracking, test_binary_top_idempotent, test_binary_alternating,
    test_binary_extreme_values, test_binary_external_keys
);

define_queue_tests!(
    PairingHeap,
    test_pairing_empty, test_pairing_max_ordering, test_pairing_all_equal,
    test_pairing_len_tracking, test_pairing_top_idempotent, test_pairing_alternating,
    test_pairing_extreme_values, test_pairing_external_keys
);

#[test]
fn test_from_range_all_equal() {
    let mut binary = BinaryHeap::from_iter_with([4, 4, 4], MaxComparator);
    let mut pairing = PairingHeap::from_iter_with([4, 4, 4], MaxComparator);

    assert_eq!(binary.len(), 3);
    assert_eq!(pairing.len(), 3);
    assert_eq!(drain(&mut binary), vec![4, 4, 4]);
    assert_eq!(drain(&mut pairing), vec![4, 4, 4]);
    assert!(binary.is_empty());
    assert!(pairing.is_empty());
}

#[test]
fn test_min_comparator_both_backends() {
    let values = [5, 3, 8, 1, 9, 2];
    let mut binary = BinaryHeap::from_iter_with(values, MinComparator);
    let mut pairing = PairingHeap::from_iter_with(values, MinComparator);

    assert_eq!(drain(&mut binary), vec![1, 2, 3, 5, 8, 9]);
    assert_eq!(drain(&mut pairing), vec![1, 2, 3, 5, 8, 9]);
}

#[test]
fn test_pairing_update_elt_end_to_end() {
    let mut heap = PairingHeap::new();
    let h = heap.add_node(10);
    heap.push(20);
    heap.push(5);

    heap.update_elt(&h, 25).unwrap();
    assert_eq!(heap.top(), Some(&25));
    assert_eq!(drain(&mut heap), vec![25, 20, 5]);
}

#[test]
fn test_pairing_update_elt_as_if_always_inserted() {
    let values = [14, 3, 27, 8, 19, 1, 30, 6];

    let mut updated = PairingHeap::new();
    let handles: Vec<_> = values.iter().map(|&v| updated.add_node(v)).collect();
    updated.pop();
    updated.update_elt(&handles[1], 22).unwrap();
    updated.update_elt(&handles[5], 40).unwrap();

    let mut reference = PairingHeap::new();
    for v in [14, 22, 27, 8, 19, 40] {
        reference.push(v);
    }
    reference.push(6);

    assert_eq!(drain(&mut updated), drain(&mut reference));
}

#[test]
fn test_pairing_handles_survive_pops() {
    let mut heap = PairingHeap::new();
    let handles: Vec<_> = (0..30).map(|i| heap.add_node(i * 10)).collect();

    for _ in 0..10 {
        heap.pop();
    }

    // The ten largest are gone
    for h in &handles[20..] {
        assert_eq!(heap.get(h), None);
        assert_eq!(heap.update_elt(h, 1000), Err(HeapError::InvalidHandle));
    }
    for (i, h) in handles[..20].iter().enumerate() {
        assert_eq!(heap.get(h), Some(&(i as i32 * 10)));
    }

    heap.update_elt(&handles[0], 500).unwrap();
    assert_eq!(heap.pop(), Some(500));
}

#[test]
fn test_pairing_clone_independence() {
    let mut original = PairingHeap::from_iter_with([7, 2, 9, 4], MaxComparator);
    let mut copy = original.clone();

    copy.push(50);
    assert_eq!(copy.pop(), Some(50));
    assert_eq!(copy.pop(), Some(9));
    copy.clear();

    assert_eq!(original.len(), 4);
    assert_eq!(original.top(), Some(&9));
    assert_eq!(drain(&mut original), vec![9, 7, 4, 2]);
}

#[test]
fn test_heap_error_display() {
    assert_eq!(
        HeapError::PriorityNotIncreased.to_string(),
        "new value is less extreme than the current value"
    );
    assert!(HeapError::InvalidHandle.to_string().starts_with("handle is no longer valid"));
}
