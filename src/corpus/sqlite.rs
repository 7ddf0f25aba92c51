use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rusqlite::{Connection, OpenFlags};

use super::{Corpus, CorpusRow};
use crate::core::data::{Dialect, SourceRecord};

/// Rows of the markup-capable dialects (`jsx`, `tsx`).
const MARKUP_FILES_QUERY: &str =
    "SELECT repo, path, language, content FROM files WHERE language LIKE '%x'";

/// Corpus stored in a SQLite database with a
/// `files(repo TEXT, path TEXT, language TEXT, content TEXT)` table.
pub struct SqliteCorpus {
    path: PathBuf,
    conn: Connection,
}

impl SqliteCorpus {
    /// Open the database read-only.
    ///
    /// # Errors
    ///
    /// Fails when the file does not exist or is not a SQLite database.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            bail!("Corpus database not found: {}", path.display());
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open corpus database: {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            conn,
        })
    }
}

impl Corpus for SqliteCorpus {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn scan(&self, visit: &mut dyn FnMut(CorpusRow)) -> Result<()> {
        let mut stmt = self
            .conn
            .prepare(MARKUP_FILES_QUERY)
            .with_context(|| format!("Failed to query `files` table in {}", self.describe()))?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2),
                row.get::<_, String>(3),
            ))
        })?;

        for row in rows {
            let (repo, path, language, content) = match row {
                Ok(row) => row,
                Err(e) => {
                    visit(CorpusRow::unreadable("files", e));
                    continue;
                }
            };
            let location = format!("{}::{}", repo, path);

            let language = match language
                .map_err(anyhow::Error::from)
                .and_then(|l| l.parse::<Dialect>())
            {
                Ok(language) => language,
                Err(e) => {
                    visit(CorpusRow::unreadable(location, e));
                    continue;
                }
            };
            let content = match content {
                Ok(content) => content,
                Err(e) => {
                    visit(CorpusRow::unreadable(location, e));
                    continue;
                }
            };

            visit(CorpusRow::Record(SourceRecord {
                repo,
                path,
                language,
                content,
            }));
        }

        Ok(())
    }
}
