//! Core data types shared by the extraction pipeline.
//!
//! ## Module Structure
//!
//! - `source`: Corpus input types (SourceRecord, Dialect)
//! - `record`: Extraction results (Declaration, OutputRecord)

pub mod record;
pub mod source;

pub use record::{Declaration, OutputRecord};
pub use source::{Dialect, SourceRecord};
