//! Corpus collaborators.
//!
//! A corpus yields one row per source file. Rows are pushed to a visitor in
//! store order; a row that cannot be decoded is reported as an
//! [`UnreadableRow`] and iteration continues. Only failing to open the store
//! at all is an error.
//!
//! ## Implementations
//!
//! - `sqlite`: a `files(repo, path, language, content)` table
//! - `archive`: unpacked repositories laid out as `<root>/<owner>/<repo>/...`

pub mod archive;
pub mod sqlite;

use anyhow::Result;

pub use archive::ArchiveCorpus;
pub use sqlite::SqliteCorpus;

use crate::{core::data::SourceRecord, issues::UnreadableRow};

/// One row delivered by a corpus scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusRow {
    Record(SourceRecord),
    Unreadable(UnreadableRow),
}

impl CorpusRow {
    pub fn unreadable(location: impl Into<String>, reason: impl ToString) -> Self {
        CorpusRow::Unreadable(UnreadableRow {
            location: location.into(),
            reason: reason.to_string(),
        })
    }
}

/// A sequential, read-only source of markup-capable (`jsx`/`tsx`) files.
pub trait Corpus {
    /// Human-readable description for reports (e.g. the database path).
    fn describe(&self) -> String;

    /// Deliver every row to `visit`, one at a time, in store order.
    fn scan(&self, visit: &mut dyn FnMut(CorpusRow)) -> Result<()>;
}
