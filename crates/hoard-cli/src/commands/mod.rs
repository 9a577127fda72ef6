//! CLI command implementations.

pub mod align;
pub mod alloc;
pub mod demo;
pub mod endian;
pub mod errors;
pub mod nodes;
