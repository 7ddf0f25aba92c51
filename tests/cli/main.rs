use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use serde_json::Value;
use tempfile::TempDir;

mod extract;
mod files;
mod init;

const BIN_NAME: &str = "styledset";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop the config file search at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    /// Write a source file into the archive corpus at `archives/<repo>/<path>`.
    pub fn write_archive_file(&self, repo: &str, path: &str, content: &str) -> Result<()> {
        self.write_file(&format!("archives/{}/{}", repo, path), content)
    }

    /// Create a SQLite corpus at `path` with the given `(repo, path, language, content)` rows.
    pub fn write_db(&self, path: &str, rows: &[(&str, &str, &str, &str)]) -> Result<()> {
        let conn = rusqlite::Connection::open(self.project_dir.join(path))?;
        conn.execute(
            "CREATE TABLE files (repo TEXT, path TEXT, language TEXT, content TEXT)",
            [],
        )?;
        for row in rows {
            conn.execute(
                "INSERT INTO files (repo, path, language, content) VALUES (?1, ?2, ?3, ?4)",
                [row.0, row.1, row.2, row.3],
            )?;
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for stable output
        cmd
    }

    pub fn extract_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("extract");
        cmd
    }

    pub fn files_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("files");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    /// Read a written dataset as a JSON array.
    pub fn read_dataset(&self, path: &str) -> Result<Vec<Value>> {
        let content = self.read_file(path)?;
        let value: Value = serde_json::from_str(&content).context("Dataset should be valid JSON")?;
        Ok(value
            .as_array()
            .context("Dataset should be a JSON array")?
            .clone())
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
