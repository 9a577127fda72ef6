//! Nodes command - build and traverse a linked list living in the arena.

use anyhow::Result;
use hoard_arena::MemoryArena;
use hoard_store::NodeStore;

/// Run the nodes command.
pub fn run(capacity: usize) -> Result<()> {
    let mut arena = MemoryArena::new(capacity);
    let mut store = NodeStore::new(&mut arena);

    println!("Creating 3 nodes:");
    let node1 = store.create_node(10)?;
    let node2 = store.create_node(20)?;
    let node3 = store.create_node(30)?;

    println!("  Node 1 address: {node1}, value: {}", store.value(node1)?);
    println!("  Node 2 address: {node2}, value: {}", store.value(node2)?);
    println!("  Node 3 address: {node3}, value: {}", store.value(node3)?);
    println!("  Node size: {} bytes", store.node_size());

    println!();
    println!("Forming linked list:");
    store.set_next(node1, node2)?;
    store.set_next(node2, node3)?;
    println!("  Node 1 -> Node 2 -> Node 3");
    println!("  Node 1's next pointer: {}", store.next(node1)?);
    println!("  Node 2's next pointer: {}", store.next(node2)?);
    println!("  Node 3's next pointer: {}", store.next(node3)?);

    println!();
    print!("Traversing list:  ");
    for value in store.values(node1) {
        print!("{} ", value?);
    }
    println!();

    println!();
    println!("Aligned node creation:");
    arena.reset();
    arena.alloc(3)?;
    let mut store = NodeStore::new(&mut arena);
    let aligned = store.create_node_aligned(42, 4)?;
    println!("  After allocating 3 bytes, created aligned node at: {aligned}");
    println!(
        "  Alignment waste: {} bytes",
        store.arena().alignment_waste()
    );

    Ok(())
}
