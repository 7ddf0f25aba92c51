use anyhow::Result;

use super::{CommandResult, CommandSummary, FilesSummary, context::RunContext};
use crate::cli::args::FilesCommand;

pub fn files(cmd: FilesCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.common)?;

    let listing = ctx.pipeline().list_styled_files(ctx.corpus.as_ref())?;

    Ok(CommandResult {
        summary: CommandSummary::Files(FilesSummary {
            files: listing.files,
            files_scanned: listing.files_scanned,
        }),
        issues: listing.issues,
    })
}
