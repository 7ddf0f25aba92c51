//! Core extraction engine.
//!
//! ## Module Structure
//!
//! - `data`: Input and output record types
//! - `parsers`: swc-based source parser with per-dialect grammar profiles
//! - `collect`: Import collection (first traversal pass)
//! - `detect`: Styling-factory detection from collected imports
//! - `extract`: Styled declaration matching (second traversal pass)
//! - `sanitize`: Name and value sanitizers
//! - `prefilter`: Regex import check used for corpus listings
//! - `pipeline`: Per-file and per-corpus driver

pub mod collect;
pub mod data;
pub mod detect;
pub mod extract;
pub mod parsers;
pub mod pipeline;
pub mod prefilter;
pub mod sanitize;

pub use data::{Declaration, Dialect, OutputRecord, SourceRecord};
pub use pipeline::{Extraction, ExtractionStats, FileExtraction, Pipeline};
