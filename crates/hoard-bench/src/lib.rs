//! Benchmark-only crate; see the `benches/` directory.
