//! Errors command - trigger each error kind and display its diagnostics.
//!
//! Every failure is caught and reported; none of them aborts the
//! process.

use anyhow::Result;
use hoard_arena::{Addr, ArenaError, MemoryArena};
use hoard_store::{NodeStore, StoreError};

/// Run the errors command.
pub fn run() -> Result<()> {
    out_of_memory();
    println!();
    invalid_address();
    println!();
    invalid_pointer();
    println!();
    null_next_is_legal();
    Ok(())
}

fn out_of_memory() {
    println!("Out of memory:");
    let mut arena = MemoryArena::new(10);
    let _ = arena.alloc(5);
    match arena.alloc(6) {
        Err(ArenaError::OutOfMemory {
            requested,
            available,
            capacity,
            offset,
        }) => {
            println!("  Requested: {requested} bytes");
            println!("  Available: {available} bytes");
            println!("  Capacity: {capacity} bytes");
            println!("  Current offset: {offset}");
        }
        other => println!("  Unexpected outcome: {other:?}"),
    }
}

fn invalid_address() {
    println!("Invalid address:");
    let mut arena = MemoryArena::new(20);
    let _ = arena.alloc(10);
    match arena.get_i32(Addr(15)) {
        Err(ArenaError::InvalidAddress {
            address,
            bytes_needed,
            allocated_boundary,
            capacity,
        }) => {
            println!("  Address attempted: {address}");
            println!("  Bytes needed: {bytes_needed}");
            println!("  Allocated boundary: {allocated_boundary}");
            println!("  Capacity: {capacity}");
        }
        other => println!("  Unexpected outcome: {other:?}"),
    }
}

fn invalid_pointer() {
    println!("Invalid pointer:");
    let mut arena = MemoryArena::new(20);
    let mut store = NodeStore::new(&mut arena);
    let node = match store.create_node(10) {
        Ok(n) => n,
        Err(e) => {
            println!("  Setup failed: {e}");
            return;
        }
    };
    match store.set_next(node, Addr(99999)) {
        Err(StoreError::InvalidPointer {
            pointer,
            node_size,
            allocated_boundary,
            capacity,
        }) => {
            println!("  Invalid pointer: {pointer}");
            println!("  Node size: {node_size}");
            println!("  Allocated boundary: {allocated_boundary}");
            println!("  Capacity: {capacity}");
        }
        other => println!("  Unexpected outcome: {other:?}"),
    }
}

fn null_next_is_legal() {
    println!("Null next pointer (always legal):");
    let mut arena = MemoryArena::new(20);
    let mut store = NodeStore::new(&mut arena);
    let outcome = (|| {
        let node = store.create_node(10)?;
        store.set_next(node, Addr::NULL)?;
        store.next(node)
    })();
    match outcome {
        Ok(next) => {
            println!("  Successfully set next pointer to {}", Addr::NULL);
            println!("  Node's next: {next}");
        }
        Err(e) => println!("  Unexpected error: {e}"),
    }
}
