//! The node store: 8-byte linked records over a borrowed arena.

use hoard_arena::{Addr, MemoryArena};

use crate::error::StoreError;

/// Size of a node record in bytes: a 32-bit value plus a 32-bit next
/// pointer.
pub const NODE_SIZE: usize = 8;

/// Byte offset of the value field within a node.
const VALUE_OFFSET: usize = 0;

/// Byte offset of the next-pointer field within a node.
const NEXT_OFFSET: usize = 4;

/// A store of fixed 8-byte records allocated from a borrowed
/// [`MemoryArena`], linked into singly-linked chains by arena address.
///
/// The store owns no memory of its own: node storage lives in the
/// arena's buffer, and the store cannot outlive its borrow. Addresses
/// act as pointers, with [`Addr::NULL`] as the chain terminator. A
/// non-null pointer is valid only while the 8 bytes at it lie below the
/// arena's allocated boundary; [`MemoryArena::reset`] therefore
/// invalidates every outstanding node at once.
pub struct NodeStore<'a> {
    arena: &'a mut MemoryArena,
}

impl<'a> NodeStore<'a> {
    /// Create a store over the given arena.
    pub fn new(arena: &'a mut MemoryArena) -> Self {
        Self { arena }
    }

    /// Read-only access to the underlying arena, for usage and waste
    /// inspection.
    pub fn arena(&self) -> &MemoryArena {
        self.arena
    }

    /// Allocate a node with the given value and a null next pointer.
    ///
    /// Arena exhaustion propagates unchanged.
    pub fn create_node(&mut self, value: i32) -> Result<Addr, StoreError> {
        let addr = self.arena.alloc(NODE_SIZE)?;
        self.init_node(addr, value)?;
        Ok(addr)
    }

    /// Allocate a node starting at an `alignment`-byte boundary.
    pub fn create_node_aligned(&mut self, value: i32, alignment: usize) -> Result<Addr, StoreError> {
        let addr = self.arena.alloc_aligned(NODE_SIZE, alignment)?;
        self.init_node(addr, value)?;
        Ok(addr)
    }

    /// Read a node's value.
    pub fn value(&self, addr: Addr) -> Result<i32, StoreError> {
        self.check_node_ptr(addr)?;
        Ok(self.arena.get_i32(addr.offset(VALUE_OFFSET))?)
    }

    /// Overwrite a node's value.
    pub fn set_value(&mut self, addr: Addr, value: i32) -> Result<(), StoreError> {
        self.check_node_ptr(addr)?;
        self.arena.put_i32(addr.offset(VALUE_OFFSET), value)?;
        Ok(())
    }

    /// Read a node's next pointer ([`Addr::NULL`] if it has none).
    pub fn next(&self, addr: Addr) -> Result<Addr, StoreError> {
        self.check_node_ptr(addr)?;
        Ok(Addr(self.arena.get_i32(addr.offset(NEXT_OFFSET))?))
    }

    /// Link `addr`'s next pointer to `next_addr`.
    ///
    /// Both pointers are validated; [`Addr::NULL`] is always a legal
    /// `next_addr` (it unlinks the rest of the chain).
    pub fn set_next(&mut self, addr: Addr, next_addr: Addr) -> Result<(), StoreError> {
        self.check_node_ptr(addr)?;
        self.check_node_ptr(next_addr)?;
        self.arena.put_i32(addr.offset(NEXT_OFFSET), next_addr.0)?;
        Ok(())
    }

    /// Check that `ptr` is null or denotes a fully-allocated node.
    ///
    /// Valid iff `ptr` is [`Addr::NULL`], or `ptr >= 0` and the 8 bytes
    /// at `ptr` lie entirely below the arena's allocated boundary.
    pub fn check_node_ptr(&self, ptr: Addr) -> Result<(), StoreError> {
        if ptr.is_null() || (ptr.0 >= 0 && ptr.0 as usize + NODE_SIZE <= self.arena.used()) {
            Ok(())
        } else {
            Err(StoreError::InvalidPointer {
                pointer: ptr.0,
                node_size: NODE_SIZE,
                allocated_boundary: self.arena.used(),
                capacity: self.arena.capacity(),
            })
        }
    }

    /// Iterate the values of the chain starting at `head`, in link order.
    ///
    /// An empty iterator for a null head. Each address is validated
    /// before it is dereferenced, so a corrupted next pointer surfaces
    /// as an `Err` item and ends the iteration.
    ///
    /// Only well-defined for acyclic, null-terminated chains: there is
    /// no cycle detection, and a chain containing a cycle iterates
    /// without end.
    pub fn values(&self, head: Addr) -> Values<'_> {
        Values {
            store: self,
            current: head,
        }
    }

    /// Size of a node record in bytes.
    pub fn node_size(&self) -> usize {
        NODE_SIZE
    }

    fn init_node(&mut self, addr: Addr, value: i32) -> Result<(), StoreError> {
        self.arena.put_i32(addr.offset(VALUE_OFFSET), value)?;
        self.arena.put_i32(addr.offset(NEXT_OFFSET), Addr::NULL.0)?;
        Ok(())
    }
}

/// Lazy iterator over the values of a node chain.
///
/// Produced by [`NodeStore::values`]. Yields `Err` once and then stops
/// if a visited address fails validation.
pub struct Values<'s> {
    store: &'s NodeStore<'s>,
    current: Addr,
}

impl Iterator for Values<'_> {
    type Item = Result<i32, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_null() {
            return None;
        }
        let addr = self.current;
        match self.store.value(addr).and_then(|v| {
            let next = self.store.next(addr)?;
            Ok((v, next))
        }) {
            Ok((value, next)) => {
                self.current = next;
                Some(Ok(value))
            }
            Err(e) => {
                // Fuse after an error: the rest of the chain is unreachable.
                self.current = Addr::NULL;
                Some(Err(e))
            }
        }
    }
}
