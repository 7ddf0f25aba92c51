use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::Pipeline,
    corpus::{ArchiveCorpus, Corpus, SqliteCorpus},
};

/// Everything a corpus command needs: merged config and the opened corpus.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (e.g. `--out`)
/// 2. `.styledsetrc.json`, searched upward from the working directory
/// 3. Built-in defaults
pub struct RunContext {
    pub config: Config,
    pub verbose: bool,
    pub corpus: Box<dyn Corpus>,
}

impl RunContext {
    /// Load configuration and open the corpus.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the corpus is missing.
    /// Nothing has been processed at that point.
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let verbose = common.verbose;

        let cwd = env::current_dir().context("Failed to read working directory")?;
        let config_result = load_config(&cwd)?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .styledsetrc.json found, using default configuration");
        }
        let config = config_result.config;

        let corpus: Box<dyn Corpus> = match (&common.corpus.db, &common.corpus.archives) {
            (Some(db), _) => Box::new(SqliteCorpus::open(db)?),
            (None, Some(dir)) => Box::new(ArchiveCorpus::open(dir, &config.ignores)?),
            (None, None) => anyhow::bail!("No corpus given. Use --db or --archives."),
        };

        Ok(Self {
            config,
            verbose,
            corpus,
        })
    }

    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.config.styling_modules.clone())
    }

    /// Output path: CLI `--out` > config `output`.
    pub fn output_path(&self, cli_out: Option<&PathBuf>) -> PathBuf {
        cli_out
            .cloned()
            .unwrap_or_else(|| PathBuf::from(&self.config.output))
    }
}
