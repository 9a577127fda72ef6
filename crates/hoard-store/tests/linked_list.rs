//! Integration tests: linked chains built across the arena/store boundary.
//!
//! Exercises the full surface the way a driver does: allocate, link,
//! traverse, exhaust, reset, and recover from corrupted pointers.

use hoard_arena::{Addr, ArenaError, MemoryArena};
use hoard_store::{NodeStore, StoreError, NODE_SIZE};

#[test]
fn build_and_walk_a_three_node_list() {
    let mut arena = MemoryArena::new(128);
    let mut store = NodeStore::new(&mut arena);

    let n1 = store.create_node(10).unwrap();
    let n2 = store.create_node(20).unwrap();
    let n3 = store.create_node(30).unwrap();
    store.set_next(n1, n2).unwrap();
    store.set_next(n2, n3).unwrap();

    assert_eq!(store.next(n1).unwrap(), n2);
    assert_eq!(store.next(n2).unwrap(), n3);
    assert_eq!(store.next(n3).unwrap(), Addr::NULL);

    let walked: Result<Vec<i32>, StoreError> = store.values(n1).collect();
    assert_eq!(walked.unwrap(), vec![10, 20, 30]);
    assert_eq!(store.arena().used(), 3 * NODE_SIZE);
}

#[test]
fn relinking_reroutes_the_chain() {
    let mut arena = MemoryArena::new(128);
    let mut store = NodeStore::new(&mut arena);

    let n1 = store.create_node(1).unwrap();
    let n2 = store.create_node(2).unwrap();
    let n3 = store.create_node(3).unwrap();
    store.set_next(n1, n2).unwrap();
    store.set_next(n2, n3).unwrap();

    // Splice n2 out.
    store.set_next(n1, n3).unwrap();
    let walked: Result<Vec<i32>, StoreError> = store.values(n1).collect();
    assert_eq!(walked.unwrap(), vec![1, 3]);
}

#[test]
fn store_fills_the_arena_then_reports_exhaustion() {
    let mut arena = MemoryArena::new(4 * NODE_SIZE);
    let mut store = NodeStore::new(&mut arena);

    for i in 0..4 {
        store.create_node(i).unwrap();
    }
    assert_eq!(store.arena().remaining(), 0);

    let err = store.create_node(4).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Arena(ArenaError::OutOfMemory {
            requested: 8,
            available: 0,
            ..
        })
    ));
}

#[test]
fn reset_invalidates_previously_valid_nodes() {
    let mut arena = MemoryArena::new(64);
    let node = {
        let mut store = NodeStore::new(&mut arena);
        store.create_node(7).unwrap()
    };

    arena.reset();

    let store = NodeStore::new(&mut arena);
    // The address was valid before the reset; now nothing is allocated.
    assert!(matches!(
        store.value(node),
        Err(StoreError::InvalidPointer { .. })
    ));
}

#[test]
fn traversal_surfaces_a_corrupted_next_pointer() {
    let mut arena = MemoryArena::new(64);
    let (n1, n2) = {
        let mut store = NodeStore::new(&mut arena);
        let n1 = store.create_node(1).unwrap();
        let n2 = store.create_node(2).unwrap();
        store.set_next(n1, n2).unwrap();
        (n1, n2)
    };

    // Corrupt n2's next field behind the store's back with a raw write:
    // the write itself is in-bounds, but a node at 9 would straddle the
    // allocated boundary (9 + 8 > 16).
    arena.put_i32(n2.offset(4), 9).unwrap();

    let store = NodeStore::new(&mut arena);
    let items: Vec<Result<i32, StoreError>> = store.values(n1).collect();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Ok(1));
    assert_eq!(items[1], Ok(2));
    assert!(matches!(
        items[2],
        Err(StoreError::InvalidPointer { pointer: 9, .. })
    ));
}

#[test]
fn aligned_nodes_interleave_with_raw_allocations() {
    let mut arena = MemoryArena::new(128);
    arena.alloc(3).unwrap();

    let mut store = NodeStore::new(&mut arena);
    let aligned = store.create_node_aligned(42, 4).unwrap();
    assert_eq!(aligned, Addr(4));
    assert_eq!(store.arena().alignment_waste(), 1);
    assert_eq!(store.arena().used(), 12);

    // A second aligned node needs no padding.
    let next = store.create_node_aligned(43, 4).unwrap();
    assert_eq!(next, Addr(12));
    assert_eq!(store.arena().alignment_waste(), 1);
}

#[test]
fn node_fields_use_the_arena_wire_encoding() {
    let mut arena = MemoryArena::new(32);
    {
        let mut store = NodeStore::new(&mut arena);
        let node = store.create_node(0x12345678).unwrap();
        assert_eq!(node, Addr(0));
    }
    // Value field is big-endian; next field holds -1 as all-ones.
    assert_eq!(arena.raw_byte(0), Some(0x12));
    assert_eq!(arena.raw_byte(1), Some(0x34));
    assert_eq!(arena.raw_byte(2), Some(0x56));
    assert_eq!(arena.raw_byte(3), Some(0x78));
    for i in 4..8 {
        assert_eq!(arena.raw_byte(i), Some(0xFF));
    }
}
