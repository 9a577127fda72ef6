//! Node-store error types.

use std::error::Error;
use std::fmt;

use hoard_arena::ArenaError;

/// Errors that can occur during node-store operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A non-null address does not denote a fully-allocated node.
    InvalidPointer {
        /// The offending pointer value.
        pointer: i32,
        /// Size of a node record in bytes.
        node_size: usize,
        /// Upper limit of valid addresses (the arena's high-water offset).
        allocated_boundary: usize,
        /// The arena's total capacity.
        capacity: usize,
    },
    /// An underlying arena failure, propagated unchanged.
    Arena(ArenaError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPointer {
                pointer,
                node_size,
                allocated_boundary,
                capacity,
            } => {
                write!(
                    f,
                    "invalid node pointer {pointer}: a {node_size}-byte node must lie below \
                     the allocated boundary {allocated_boundary} (capacity {capacity})"
                )
            }
            Self::Arena(e) => write!(f, "{e}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            Self::InvalidPointer { .. } => None,
        }
    }
}

impl From<ArenaError> for StoreError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pointer_message_carries_all_fields() {
        let e = StoreError::InvalidPointer {
            pointer: 99999,
            node_size: 8,
            allocated_boundary: 8,
            capacity: 20,
        };
        let msg = e.to_string();
        assert!(msg.contains("99999"));
        assert!(msg.contains("8-byte"));
        assert!(msg.contains("boundary 8"));
        assert!(msg.contains("capacity 20"));
    }

    #[test]
    fn arena_errors_wrap_with_source() {
        let inner = ArenaError::OutOfMemory {
            requested: 8,
            available: 4,
            capacity: 16,
            offset: 12,
        };
        let e: StoreError = inner.clone().into();
        assert_eq!(e, StoreError::Arena(inner));
        assert!(Error::source(&e).is_some());
    }
}
