//! The fixed-capacity bump arena.
//!
//! [`MemoryArena`] owns a zero-filled byte buffer and a high-water
//! offset that only advances (or snaps back to zero on [`reset`]).
//! Bytes below the offset are allocated and accessible; bytes above it
//! are rejected by every typed accessor even though they sit inside the
//! raw buffer.
//!
//! [`reset`]: MemoryArena::reset

use crate::addr::Addr;
use crate::error::ArenaError;

/// A fixed-capacity byte region with monotonic bump allocation.
///
/// The buffer is allocated once at construction and never resized.
/// Allocation advances an offset; there is no per-allocation free.
/// [`reset`] reclaims the whole region at once without touching the
/// buffer contents — stale bytes are masked by the offset invariant,
/// not erased.
///
/// Multi-byte accessors use big-endian byte order at every width, so a
/// buffer dump is stable across hosts.
///
/// [`reset`]: MemoryArena::reset
pub struct MemoryArena {
    /// Backing storage. Zero-filled at construction, fixed length.
    memory: Vec<u8>,
    /// Bump pointer: next free byte, and the upper bound of valid access.
    offset: usize,
    /// Padding bytes consumed by aligned allocations since the last reset.
    alignment_waste: usize,
}

impl MemoryArena {
    /// Create an arena with a zero-filled buffer of exactly `capacity` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds `i32::MAX`, since addresses are
    /// 32-bit signed offsets.
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity <= i32::MAX as usize,
            "arena capacity must fit in a 32-bit signed address"
        );
        Self {
            memory: vec![0; capacity],
            offset: 0,
            alignment_waste: 0,
        }
    }

    /// Bump-allocate `size` bytes, returning the address of the block.
    ///
    /// A zero-byte request succeeds and returns the current offset
    /// without advancing it. On failure the arena is unchanged.
    pub fn alloc(&mut self, size: usize) -> Result<Addr, ArenaError> {
        let end = self
            .offset
            .checked_add(size)
            .filter(|&end| end <= self.memory.len())
            .ok_or_else(|| ArenaError::OutOfMemory {
                requested: size,
                available: self.remaining(),
                capacity: self.capacity(),
                offset: self.offset,
            })?;
        let start = self.offset;
        self.offset = end;
        Ok(Addr(start as i32))
    }

    /// Round `addr` up to the next multiple of `alignment`.
    ///
    /// An `alignment` of zero means "no alignment" and returns `addr`
    /// unchanged.
    pub fn align(&self, addr: usize, alignment: usize) -> usize {
        if alignment == 0 {
            return addr;
        }
        match addr % alignment {
            0 => addr,
            rem => addr + (alignment - rem),
        }
    }

    /// Bump-allocate `size` bytes starting at an `alignment`-byte boundary.
    ///
    /// Padding inserted to reach the boundary is charged to the
    /// [`alignment_waste`] counter. On out-of-memory the reported
    /// `available` and `offset` reflect the pre-alignment state rather
    /// than the post-padding shortfall; callers that need the exact
    /// shortfall must account for the padding themselves.
    ///
    /// [`alignment_waste`]: MemoryArena::alignment_waste
    pub fn alloc_aligned(&mut self, size: usize, alignment: usize) -> Result<Addr, ArenaError> {
        let aligned = self.align(self.offset, alignment);
        let end = aligned
            .checked_add(size)
            .filter(|&end| end <= self.memory.len())
            .ok_or_else(|| ArenaError::OutOfMemory {
                requested: size,
                available: self.remaining(),
                capacity: self.capacity(),
                offset: self.offset,
            })?;
        self.alignment_waste += aligned - self.offset;
        self.offset = end;
        Ok(Addr(aligned as i32))
    }

    /// Reset the bump pointer and waste counter to zero.
    ///
    /// All previous allocations become invalid. The buffer is NOT
    /// zeroed; stale bytes become unreachable through the checked
    /// accessors until re-allocated.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.alignment_waste = 0;
    }

    /// Total buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.memory.len()
    }

    /// Bytes currently allocated (the high-water offset).
    pub fn used(&self) -> usize {
        self.offset
    }

    /// Bytes remaining before the arena is full.
    pub fn remaining(&self) -> usize {
        self.memory.len() - self.offset
    }

    /// Padding bytes consumed by aligned allocations since the last reset.
    pub fn alignment_waste(&self) -> usize {
        self.alignment_waste
    }

    /// Zero the waste counter without resetting the arena.
    pub fn reset_alignment_waste(&mut self) {
        self.alignment_waste = 0;
    }

    /// Check that `[addr, addr + bytes_needed)` lies entirely within the
    /// allocated region.
    ///
    /// Every typed accessor calls this before touching the buffer, so a
    /// failed access never partially writes.
    pub fn check_addr(&self, addr: Addr, bytes_needed: usize) -> Result<(), ArenaError> {
        if addr.0 >= 0 && (addr.0 as usize) + bytes_needed <= self.offset {
            Ok(())
        } else {
            Err(ArenaError::InvalidAddress {
                address: addr.0,
                bytes_needed,
                allocated_boundary: self.offset,
                capacity: self.capacity(),
            })
        }
    }

    /// Write a signed 8-bit value at `addr`.
    pub fn put_i8(&mut self, addr: Addr, value: i8) -> Result<(), ArenaError> {
        self.write_bytes(addr, value.to_be_bytes())
    }

    /// Read a signed 8-bit value at `addr`.
    pub fn get_i8(&self, addr: Addr) -> Result<i8, ArenaError> {
        self.read_bytes(addr).map(i8::from_be_bytes)
    }

    /// Write a signed 16-bit value at `addr`, big-endian.
    pub fn put_i16(&mut self, addr: Addr, value: i16) -> Result<(), ArenaError> {
        self.write_bytes(addr, value.to_be_bytes())
    }

    /// Read a signed 16-bit value at `addr`, big-endian.
    pub fn get_i16(&self, addr: Addr) -> Result<i16, ArenaError> {
        self.read_bytes(addr).map(i16::from_be_bytes)
    }

    /// Write a signed 32-bit value at `addr`, big-endian.
    pub fn put_i32(&mut self, addr: Addr, value: i32) -> Result<(), ArenaError> {
        self.write_bytes(addr, value.to_be_bytes())
    }

    /// Read a signed 32-bit value at `addr`, big-endian.
    pub fn get_i32(&self, addr: Addr) -> Result<i32, ArenaError> {
        self.read_bytes(addr).map(i32::from_be_bytes)
    }

    /// Write a signed 64-bit value at `addr`, big-endian.
    pub fn put_i64(&mut self, addr: Addr, value: i64) -> Result<(), ArenaError> {
        self.write_bytes(addr, value.to_be_bytes())
    }

    /// Read a signed 64-bit value at `addr`, big-endian.
    pub fn get_i64(&self, addr: Addr) -> Result<i64, ArenaError> {
        self.read_bytes(addr).map(i64::from_be_bytes)
    }

    /// Read a raw buffer byte WITHOUT the allocated-boundary check.
    ///
    /// Diagnostics only: lets callers dump the wire encoding of bytes
    /// they just wrote (or inspect stale data past the offset). Returns
    /// `None` past the buffer's capacity. For checked access use
    /// [`get_i8`].
    ///
    /// [`get_i8`]: MemoryArena::get_i8
    pub fn raw_byte(&self, index: usize) -> Option<u8> {
        self.memory.get(index).copied()
    }

    fn write_bytes<const N: usize>(&mut self, addr: Addr, bytes: [u8; N]) -> Result<(), ArenaError> {
        self.check_addr(addr, N)?;
        let start = addr.0 as usize;
        self.memory[start..start + N].copy_from_slice(&bytes);
        Ok(())
    }

    fn read_bytes<const N: usize>(&self, addr: Addr) -> Result<[u8; N], ArenaError> {
        self.check_addr(addr, N)?;
        let start = addr.0 as usize;
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.memory[start..start + N]);
        Ok(buf)
    }
}
