//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// An allocation request exceeds the arena's remaining capacity.
    OutOfMemory {
        /// Number of bytes requested.
        requested: usize,
        /// Bytes remaining before the request.
        available: usize,
        /// Total buffer capacity.
        capacity: usize,
        /// High-water offset at the time of the request.
        offset: usize,
    },
    /// A read or write touched bytes outside the allocated region.
    InvalidAddress {
        /// The offending address.
        address: i32,
        /// Width of the attempted access in bytes.
        bytes_needed: usize,
        /// Upper limit of valid addresses (the current high-water offset).
        allocated_boundary: usize,
        /// Total buffer capacity.
        capacity: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory {
                requested,
                available,
                capacity,
                offset,
            } => {
                write!(
                    f,
                    "out of memory: requested {requested} bytes, {available} available \
                     (capacity {capacity}, offset {offset})"
                )
            }
            Self::InvalidAddress {
                address,
                bytes_needed,
                allocated_boundary,
                capacity,
            } => {
                write!(
                    f,
                    "invalid memory access: address {address} with {bytes_needed} bytes needed, \
                     but allocated boundary is {allocated_boundary} (capacity {capacity})"
                )
            }
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_memory_message_carries_all_fields() {
        let e = ArenaError::OutOfMemory {
            requested: 6,
            available: 5,
            capacity: 10,
            offset: 5,
        };
        let msg = e.to_string();
        assert!(msg.contains("requested 6"));
        assert!(msg.contains("5 available"));
        assert!(msg.contains("capacity 10"));
        assert!(msg.contains("offset 5"));
    }

    #[test]
    fn invalid_address_message_carries_all_fields() {
        let e = ArenaError::InvalidAddress {
            address: 15,
            bytes_needed: 4,
            allocated_boundary: 10,
            capacity: 20,
        };
        let msg = e.to_string();
        assert!(msg.contains("address 15"));
        assert!(msg.contains("4 bytes needed"));
        assert!(msg.contains("boundary is 10"));
        assert!(msg.contains("capacity 20"));
    }
}
