//! Endian command - show the big-endian wire encoding of a stored value.

use anyhow::{Context, Result};
use hoard_arena::MemoryArena;

/// Run the endian command.
pub fn run(value: &str) -> Result<()> {
    let value = parse_i32(value)
        .with_context(|| format!("not a 32-bit integer: {value}"))?;

    let mut arena = MemoryArena::new(128);
    let addr = arena.alloc(4)?;
    arena.put_i32(addr, value)?;

    println!("Storing value: {value:#010x} at address {addr}");
    println!("Byte representation (big-endian):");
    for i in 0..4 {
        let index = addr.0 as usize + i;
        // raw_byte is in range: the four bytes were just allocated.
        let byte = arena.raw_byte(index).unwrap_or_default();
        println!("  memory[{index}] = {byte:#04x}");
    }

    let reconstructed = arena.get_i32(addr)?;
    println!("Reconstructed value: {reconstructed:#010x}");
    println!("Match: {}", value == reconstructed);

    Ok(())
}

/// Parse a decimal or `0x`-prefixed hexadecimal 32-bit integer.
fn parse_i32(s: &str) -> Option<i32> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok().map(|v| v as i32)
    } else {
        s.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex() {
        assert_eq!(parse_i32("42"), Some(42));
        assert_eq!(parse_i32("-7"), Some(-7));
        assert_eq!(parse_i32("0x12345678"), Some(0x12345678));
        assert_eq!(parse_i32("0xFFFFFFFF"), Some(-1));
        assert_eq!(parse_i32("zebra"), None);
    }
}
