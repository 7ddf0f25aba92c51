pub mod context;
pub mod extract;
pub mod files;
pub mod init;

use std::path::PathBuf;

use crate::{core::ExtractionStats, issues::Issue};

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Files(FilesSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    /// Description of the corpus that was scanned.
    pub corpus: String,
    /// Where the dataset was written.
    pub output: PathBuf,
    /// Number of records written.
    pub record_count: usize,
    pub stats: ExtractionStats,
}

#[derive(Debug)]
pub struct FilesSummary {
    /// `repo::path` of every file importing a styling library.
    pub files: Vec<String>,
    pub files_scanned: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a styledset command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Per-file problems that did not stop the command.
    pub issues: Vec<Issue>,
}
