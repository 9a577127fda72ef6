//! Alloc command - basic bump allocation, usage accounting, and reset.

use anyhow::Result;
use hoard_arena::MemoryArena;

/// Run the alloc command.
pub fn run(capacity: usize) -> Result<()> {
    let mut arena = MemoryArena::new(capacity);

    let a = arena.alloc(4)?;
    let b = arena.alloc(4)?;
    let c = arena.alloc(4)?;

    println!("Allocated 3 blocks of 4 bytes each:");
    println!("  Address of a: {a}");
    println!("  Address of b: {b}");
    println!("  Address of c: {c}");
    println!("  Total capacity: {}", arena.capacity());
    println!("  Used: {}", arena.used());
    println!("  Remaining: {}", arena.remaining());

    arena.reset();
    let d = arena.alloc(4)?;
    println!();
    println!("After reset, allocated d at address: {d}");
    println!("  Used after reset: {}", arena.used());

    Ok(())
}
