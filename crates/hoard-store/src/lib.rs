//! Fixed-size linked-list records stored inside an arena.
//!
//! A [`NodeStore`] lays 8-byte records out in a borrowed
//! [`MemoryArena`] and links them into singly-linked chains using arena
//! addresses as pointers, with [`Addr::NULL`] terminating a chain.
//! Every pointer is validated against the arena's allocated boundary
//! before it is dereferenced.
//!
//! [`MemoryArena`]: hoard_arena::MemoryArena
//! [`Addr::NULL`]: hoard_arena::Addr::NULL

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::{NodeStore, Values, NODE_SIZE};
