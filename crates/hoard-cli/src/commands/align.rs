//! Align command - aligned allocation, waste accounting, and the
//! align() helper.

use anyhow::Result;
use hoard_arena::MemoryArena;

/// Run the align command.
pub fn run(capacity: usize) -> Result<()> {
    let mut arena = MemoryArena::new(capacity);

    println!("Allocating 3 bytes (unaligned):");
    let addr1 = arena.alloc(3)?;
    println!("  Address: {addr1}");
    println!("  Alignment waste so far: {}", arena.alignment_waste());

    println!();
    println!("Allocating 4 bytes with 4-byte alignment:");
    let addr2 = arena.alloc_aligned(4, 4)?;
    println!("  Address: {addr2} (aligned to 4-byte boundary)");
    println!("  Alignment waste: {} bytes", arena.alignment_waste());
    println!("  Used: {}", arena.used());

    println!();
    println!("Allocating another 4 bytes with 4-byte alignment:");
    let addr3 = arena.alloc_aligned(4, 4)?;
    println!("  Address: {addr3} (already aligned, no waste)");
    println!("  Alignment waste: {} bytes", arena.alignment_waste());
    println!("  Used: {}", arena.used());

    println!();
    println!("align() helper:");
    for addr in [0, 1, 3, 4, 5, 7, 8] {
        println!("  align({addr}, 4) = {}", arena.align(addr, 4));
    }

    Ok(())
}
