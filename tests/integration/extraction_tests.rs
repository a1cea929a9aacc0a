//! Extraction order, validation and round-trip behavior through the public API.

use frontier_heap::{HeapConfig, HeapError, HeapMode, IndexedHeap};

fn priorities() -> [i32; 6] {
    [5, 3, 8, 1, 9, 2]
}

#[test]
fn min_heap_pops_ascending() {
    let mut heap = IndexedHeap::with_mode(HeapMode::Min);
    heap.try_extend(priorities()).unwrap();

    let mut popped = Vec::new();
    while let Some(p) = heap.pop() {
        popped.push(p);
    }
    assert_eq!(popped, vec![1, 2, 3, 5, 8, 9]);
    assert_eq!(heap.peek(), None);
}

#[test]
fn max_heap_pops_descending() {
    let mut heap = IndexedHeap::with_mode(HeapMode::Max);
    heap.try_extend(priorities()).unwrap();
    assert_eq!(heap.peek(), Some(&9));
    assert_eq!(heap.into_sorted_vec(), vec![9, 8, 5, 3, 2, 1]);
}

#[test]
fn numeric_strings_are_ordered_by_value() {
    let mut heap: IndexedHeap<String> = IndexedHeap::new();
    for s in ["10", "9", "100", "-1"] {
        heap.insert(s.to_string()).unwrap();
    }
    assert_eq!(heap.pop().as_deref(), Some("-1"));
    assert_eq!(heap.pop().as_deref(), Some("9"));
    assert_eq!(heap.pop().as_deref(), Some("10"));
    assert_eq!(heap.pop().as_deref(), Some("100"));
}

#[test]
fn nan_priority_leaves_size_unchanged() {
    #[derive(Debug)]
    struct Job {
        id: u32,
        cost: f64,
    }

    let mut heap = IndexedHeap::with_extractors(
        HeapMode::Min,
        |j: &Job| j.cost,
        |j: &Job| j.id,
    );
    heap.insert(Job { id: 1, cost: 2.0 }).unwrap();
    heap.insert(Job { id: 2, cost: 1.0 }).unwrap();

    let result = heap.insert(Job { id: 3, cost: f64::NAN });
    assert!(matches!(result, Err(HeapError::InvalidPriority { .. })));
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.peek().map(|j| j.id), Some(2));
}

#[test]
fn infinite_priorities_are_accepted() {
    let mut heap = IndexedHeap::with_extractors(
        HeapMode::Min,
        |p: &(u8, f64)| p.1,
        |p: &(u8, f64)| p.0,
    );
    heap.insert((0, f64::INFINITY)).unwrap();
    heap.insert((1, 3.0)).unwrap();
    heap.insert((2, f64::NEG_INFINITY)).unwrap();

    let order: Vec<u8> = heap.into_sorted_vec().into_iter().map(|p| p.0).collect();
    assert_eq!(order, vec![2, 1, 0]);
}

#[test]
fn equal_priorities_all_come_out() {
    let mut heap = IndexedHeap::with_extractors(
        HeapMode::Max,
        |p: &(char, i32)| f64::from(p.1),
        |p: &(char, i32)| p.0,
    );
    heap.try_extend([('a', 1), ('b', 1), ('c', 1), ('d', 2)])
        .unwrap();

    assert_eq!(heap.pop().map(|p| p.0), Some('d'));
    // ties come out in unspecified order
    let mut rest: Vec<char> = heap.into_sorted_vec().into_iter().map(|p| p.0).collect();
    rest.sort_unstable();
    assert_eq!(rest, vec!['a', 'b', 'c']);
}

#[test]
fn configured_heap_round_trip() {
    let config = HeapConfig::default()
        .mode(HeapMode::Max)
        .initial_capacity(128);
    let mut heap = IndexedHeap::from_config(
        config,
        |x: &u64| *x as f64,
        |x: &u64| *x,
    )
    .unwrap();

    heap.try_extend((0..100).map(|i| (i * 37) % 101)).unwrap();
    assert_eq!(heap.len(), 100);

    let drained = heap.into_sorted_vec();
    assert_eq!(drained.len(), 100);
    assert!(drained.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn backing_sequence_is_a_copy() {
    let mut heap = IndexedHeap::new();
    heap.try_extend([4, 1, 3]).unwrap();

    let mut copy = heap.to_vec();
    copy.clear();
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.iter().count(), 3);
    assert_eq!(heap.iter().next(), Some(&1));
}
