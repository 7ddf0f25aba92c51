//! Styledset - styled-component dataset extractor
//!
//! Styledset scans a corpus of JSX/TSX files, finds declarations like
//! ``const Title = styled.h1`font-size: 2em;` `` bound to a known styling
//! library (styled-components, emotion, linaria), and emits a JSON dataset of
//! `{name, element, style text}` records with normalized names and values.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (parser, traversal passes, sanitizers, pipeline)
//! - `corpus`: Corpus stores (SQLite database, archive directory)
//! - `issues`: Non-fatal per-file problems
//! - `output`: Dataset serialization

pub mod cli;
pub mod config;
pub mod core;
pub mod corpus;
pub mod issues;
pub mod output;
