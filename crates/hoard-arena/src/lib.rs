//! Fixed-capacity bump allocation over a raw byte buffer.
//!
//! A [`MemoryArena`] owns a single zero-filled byte buffer and hands out
//! integer addresses from a monotonically advancing offset. There is no
//! per-allocation free: the arena only grows or is wholesale [`reset`].
//! Multi-byte values are stored big-endian and every read or write is
//! bounds-checked against the allocated region, not the raw capacity.
//!
//! Addresses are the [`Addr`] newtype rather than native references, so
//! linked structures can live inside the buffer using plain offsets as
//! pointers (see the `hoard-store` crate).
//!
//! [`reset`]: MemoryArena::reset

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod addr;
pub mod arena;
pub mod error;

// Public re-exports for the primary API surface.
pub use addr::Addr;
pub use arena::MemoryArena;
pub use error::ArenaError;
