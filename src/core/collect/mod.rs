//! First traversal pass: import collection.
//!
//! Builds the per-file `ImportMap` that the styling-factory detector reads.

pub mod imports;

pub use imports::{ImportCollector, ImportMap, resolve_imports};
