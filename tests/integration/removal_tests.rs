//! Removal by identity through the public API.

use frontier_heap::{HeapMode, IndexedHeap};

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    id: char,
    priority: f64,
}

fn entry(id: char, priority: f64) -> Entry {
    Entry { id, priority }
}

fn by_priority(e: &Entry) -> f64 {
    e.priority
}

fn by_id(e: &Entry) -> char {
    e.id
}

fn populated(mode: HeapMode) -> IndexedHeap<Entry, fn(&Entry) -> f64, fn(&Entry) -> char> {
    let mut heap = IndexedHeap::with_extractors(
        mode,
        by_priority as fn(&Entry) -> f64,
        by_id as fn(&Entry) -> char,
    );
    for (id, p) in [('a', 5.0), ('b', 1.0), ('c', 9.0), ('d', 3.0), ('e', 7.0)] {
        heap.insert(entry(id, p)).unwrap();
    }
    heap
}

#[test]
fn removing_c_leaves_b_d_a_e() {
    let mut heap = populated(HeapMode::Min);
    assert_eq!(heap.remove(&entry('c', 9.0)).unwrap(), Some(entry('c', 9.0)));

    let mut order = Vec::new();
    while let Some(e) = heap.pop() {
        order.push((e.id, e.priority));
    }
    assert_eq!(order, vec![('b', 1.0), ('d', 3.0), ('a', 5.0), ('e', 7.0)]);
}

#[test]
fn removing_absent_identity_changes_nothing() {
    let mut heap = populated(HeapMode::Min);
    let before = heap.to_vec();

    assert_eq!(heap.remove(&entry('z', 0.0)).unwrap(), None);
    assert_eq!(heap.len(), 5);
    assert_eq!(heap.to_vec(), before);
}

#[test]
fn removing_root_matches_pop() {
    let mut a = populated(HeapMode::Max);
    let mut b = populated(HeapMode::Max);

    let root = a.peek().cloned().unwrap();
    assert_eq!(a.remove(&root).unwrap(), b.pop());
    assert_eq!(a.to_vec(), b.to_vec());
}

#[test]
fn positions_track_every_element_after_removal() {
    let mut heap = populated(HeapMode::Min);
    heap.remove_by_id(&'b');
    heap.remove_by_id(&'e');

    for (slot, e) in heap.iter().enumerate() {
        assert_eq!(heap.position_of(&e.id), Some(slot));
    }
    assert_eq!(heap.position_of(&'b'), None);
    assert_eq!(heap.position_of(&'e'), None);
}

#[test]
fn removed_identity_can_be_reinserted() {
    let mut heap = populated(HeapMode::Min);
    let mut a = heap.remove_by_id(&'a').unwrap();
    a.priority = 0.0;
    heap.insert(a).unwrap();

    assert_eq!(heap.peek().map(|e| e.id), Some('a'));
    assert_eq!(heap.len(), 5);
}

#[test]
fn size_law_over_mixed_operations() {
    let mut heap = IndexedHeap::new();
    let mut inserted = 0;
    let mut removed = 0;

    for i in 0..50_u32 {
        heap.insert(i * 37 % 101).unwrap();
        inserted += 1;
        if i % 3 == 0 && heap.pop().is_some() {
            removed += 1;
        }
        if i % 7 == 0 && heap.remove(&(i + 1)).unwrap().is_some() {
            removed += 1;
        }
        assert_eq!(heap.len(), inserted - removed);
    }
}
