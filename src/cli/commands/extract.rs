use anyhow::Result;

use super::{CommandResult, CommandSummary, ExtractSummary, context::RunContext};
use crate::{cli::args::ExtractCommand, output::write_records};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.common)?;
    let output = ctx.output_path(cmd.out.as_ref());

    if ctx.verbose {
        eprintln!("Scanning corpus: {}", ctx.corpus.describe());
    }

    let extraction = ctx.pipeline().run(ctx.corpus.as_ref())?;

    write_records(&output, &extraction.records)?;

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            corpus: ctx.corpus.describe(),
            output,
            record_count: extraction.records.len(),
            stats: extraction.stats,
        }),
        issues: extraction.issues,
    })
}
