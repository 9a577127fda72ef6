//! Demo command - run every demonstration in sequence.

use anyhow::Result;

use super::{align, alloc, endian, errors, nodes};

/// Run the demo command.
pub fn run() -> Result<()> {
    println!("Test 1: Basic Allocation");
    alloc::run(128)?;
    println!();

    println!("Test 2: Memory Alignment");
    align::run(128)?;
    println!();

    println!("Test 3: Node Store");
    nodes::run(128)?;
    println!();

    println!("Test 4: Error Diagnostics");
    errors::run()?;
    println!();

    println!("Test 5: Big-Endian Integer Encoding");
    endian::run("0x12345678")?;
    println!();

    println!("=== ALL TESTS COMPLETE ===");
    Ok(())
}
