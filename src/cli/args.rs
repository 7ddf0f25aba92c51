//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Run the extraction pipeline over a corpus and write the dataset
//! - `files`: List corpus files that import a styling library
//! - `init`: Write a default `.styledsetrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Files(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Where to read source files from. Exactly one is required.
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct CorpusArgs {
    /// SQLite database with a `files(repo, path, language, content)` table
    #[arg(long, value_name = "FILE")]
    pub db: Option<PathBuf>,

    /// Directory of unpacked repositories laid out as <owner>/<repo>/...
    #[arg(long, value_name = "DIR")]
    pub archives: Option<PathBuf>,
}

/// Common arguments shared by corpus commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output file (overrides config file)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct FilesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract styled-component declarations into a JSON dataset
    Extract(ExtractCommand),
    /// List corpus files importing a styling library
    Files(FilesCommand),
    /// Initialize a new .styledsetrc.json configuration file
    Init,
}
