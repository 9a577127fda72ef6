//! The [`Addr`] newtype: arena offsets acting as pointers.

use std::fmt;

/// A byte offset into a [`MemoryArena`], used as an allocation handle
/// and as a linked-structure "pointer".
///
/// Addresses are plain integers, never native references — every
/// dereference goes through the arena's bounds-checked accessors, so a
/// stale or fabricated `Addr` is rejected rather than read through.
/// The value is signed because `-1` ([`Addr::NULL`]) is the null-pointer
/// sentinel and must round-trip through the same 32-bit fields nodes
/// store in raw bytes.
///
/// An `Addr` is only meaningful against the arena that issued it; the
/// type does not track which arena that was.
///
/// [`MemoryArena`]: crate::MemoryArena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Addr(pub i32);

impl Addr {
    /// The null-pointer sentinel, `Addr(-1)`.
    pub const NULL: Addr = Addr(-1);

    /// Whether this address is the null sentinel.
    pub fn is_null(self) -> bool {
        self == Self::NULL
    }

    /// This address plus a byte delta, for addressing a field within a
    /// record.
    pub fn offset(self, bytes: usize) -> Addr {
        Addr(self.0 + bytes as i32)
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Addr {
    fn from(v: i32) -> Self {
        Self(v)
    }
}
