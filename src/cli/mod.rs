//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `commands`: command handlers producing a `CommandResult`
//! - `report`: printing of results and issues
//! - `exit_status`: process exit codes

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

use std::process::ExitCode;

use anyhow::Result;

pub use args::{Arguments, Command, CommonArgs, CorpusArgs, ExtractCommand, FilesCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(ExitStatus::Success.into())
}
