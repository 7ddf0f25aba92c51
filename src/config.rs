use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::detect::DEFAULT_STYLING_MODULES;

pub const CONFIG_FILE_NAME: &str = ".styledsetrc.json";

/// Paths skipped when scanning an archive directory.
pub const DEFAULT_IGNORES: &[&str] = &["**/node_modules/**", "**/dist/**"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Styling-library modules, in detection priority order.
    #[serde(default = "default_styling_modules")]
    pub styling_modules: Vec<String>,
    /// Dataset output file.
    #[serde(default = "default_output")]
    pub output: String,
    /// Glob patterns skipped in archive corpora.
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
}

fn default_styling_modules() -> Vec<String> {
    DEFAULT_STYLING_MODULES.iter().map(|s| s.to_string()).collect()
}

fn default_output() -> String {
    "./out/styled-components.json".to_string()
}

fn default_ignores() -> Vec<String> {
    DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            styling_modules: default_styling_modules(),
            output: default_output(),
            ignores: default_ignores(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `stylingModules` is empty or any pattern in
    /// `ignores` is an invalid glob.
    pub fn validate(&self) -> Result<()> {
        if self.styling_modules.is_empty() {
            bail!("'stylingModules' must list at least one module");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
