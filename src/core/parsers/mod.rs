//! Source parsers.
//!
//! - `source`: JSX/TSX/JS/TS source parser (uses swc for AST generation)

pub mod source;

pub use source::{grammar_for, parse_source};
