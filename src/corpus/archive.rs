use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use walkdir::WalkDir;

use super::{Corpus, CorpusRow};
use crate::core::data::{Dialect, SourceRecord};

/// Directory depth of a file directly inside `<root>/<owner>/<repo>/`.
const MIN_FILE_DEPTH: usize = 3;

/// Corpus of unpacked repositories laid out as `<root>/<owner>/<repo>/...`.
///
/// - `repo` is `owner/repo`
/// - `path` is the `/`-separated path inside the repository
/// - `language` comes from the file extension; only `jsx`/`tsx` are yielded
///
/// Files are visited sorted by name so runs are reproducible.
pub struct ArchiveCorpus {
    root: PathBuf,
    ignores: Vec<Pattern>,
}

impl ArchiveCorpus {
    /// Open an archive directory.
    ///
    /// `ignores` are glob patterns matched against `owner/repo/path`.
    ///
    /// # Errors
    ///
    /// Fails when `root` is not a directory or a pattern is invalid.
    pub fn open(root: &Path, ignores: &[String]) -> Result<Self> {
        if !root.is_dir() {
            bail!("Archive directory not found: {}", root.display());
        }

        let ignores = ignores
            .iter()
            .map(|p| {
                Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            root: root.to_path_buf(),
            ignores,
        })
    }

    fn is_ignored(&self, relative: &str) -> bool {
        self.ignores.iter().any(|p| p.matches(relative))
    }
}

impl Corpus for ArchiveCorpus {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn scan(&self, visit: &mut dyn FnMut(CorpusRow)) -> Result<()> {
        let walker = WalkDir::new(&self.root)
            .min_depth(MIN_FILE_DEPTH)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    let location = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| self.describe());
                    visit(CorpusRow::unreadable(location, e));
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(language) = markup_dialect(entry.path()) else {
                continue;
            };
            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let segments: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            if self.is_ignored(&segments.join("/")) {
                continue;
            }

            let repo = segments[..2].join("/");
            let path = segments[2..].join("/");

            match fs::read(entry.path()).map(String::from_utf8) {
                Ok(Ok(content)) => visit(CorpusRow::Record(SourceRecord {
                    repo,
                    path,
                    language,
                    content,
                })),
                Ok(Err(e)) => visit(CorpusRow::unreadable(format!("{}::{}", repo, path), e)),
                Err(e) => visit(CorpusRow::unreadable(format!("{}::{}", repo, path), e)),
            }
        }

        Ok(())
    }
}

fn markup_dialect(path: &Path) -> Option<Dialect> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(Dialect::from_extension)
        .filter(Dialect::is_markup)
}
