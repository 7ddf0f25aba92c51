//! Non-fatal problems encountered during a run.
//!
//! None of these abort the run. They are collected so the CLI can report
//! how much of the corpus was lost, and print details under `--verbose`.

use std::fmt;

/// A corpus file that could not be parsed with its grammar profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub repo: String,
    pub path: String,
    pub message: String,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}: {}", self.repo, self.path, self.message)
    }
}

/// A corpus row that could not be turned into a source record
/// (unknown dialect, undecodable content, unreadable file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableRow {
    pub location: String,
    pub reason: String,
}

impl fmt::Display for UnreadableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.reason)
    }
}

/// Any per-file problem, for uniform reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    ParseFailure(ParseFailure),
    UnreadableRow(UnreadableRow),
}

impl Issue {
    pub fn kind(&self) -> &'static str {
        match self {
            Issue::ParseFailure(_) => "parse-error",
            Issue::UnreadableRow(_) => "unreadable",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::ParseFailure(issue) => write!(f, "{}", issue),
            Issue::UnreadableRow(issue) => write!(f, "{}", issue),
        }
    }
}

impl From<ParseFailure> for Issue {
    fn from(issue: ParseFailure) -> Self {
        Issue::ParseFailure(issue)
    }
}

impl From<UnreadableRow> for Issue {
    fn from(issue: UnreadableRow) -> Self {
        Issue::UnreadableRow(issue)
    }
}
