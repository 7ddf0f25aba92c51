use std::{fmt, str::FromStr};

use anyhow::{Result, bail};

/// Source-file flavor of a corpus row.
///
/// Selects the grammar profile used by the parser: dialects containing `ts`
/// get type annotations plus JSX, the rest get JSX only. Plain script
/// dialects are still parsed with JSX enabled, since React codebases commonly
/// put markup in `.js` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Jsx,
    Tsx,
    Js,
    Ts,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Jsx => "jsx",
            Dialect::Tsx => "tsx",
            Dialect::Js => "js",
            Dialect::Ts => "ts",
        }
    }

    /// True when the dialect name carries the type-annotation marker (`ts`).
    pub fn is_typed(&self) -> bool {
        self.as_str().contains("ts")
    }

    /// True for the markup-capable family (`jsx`, `tsx`).
    ///
    /// This is the upstream corpus filter: names ending in `x`.
    pub fn is_markup(&self) -> bool {
        self.as_str().ends_with('x')
    }

    /// Dialect for a file extension, if it is one of the four known ones.
    pub fn from_extension(ext: &str) -> Option<Self> {
        ext.parse().ok()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "jsx" => Ok(Dialect::Jsx),
            "tsx" => Ok(Dialect::Tsx),
            "js" => Ok(Dialect::Js),
            "ts" => Ok(Dialect::Ts),
            other => bail!("Unknown source dialect: \"{}\"", other),
        }
    }
}

/// One file from the corpus. Read-only input to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub repo: String,
    pub path: String,
    pub language: Dialect,
    pub content: String,
}

impl SourceRecord {
    pub fn new(
        repo: impl Into<String>,
        path: impl Into<String>,
        language: Dialect,
        content: impl Into<String>,
    ) -> Self {
        Self {
            repo: repo.into(),
            path: path.into(),
            language,
            content: content.into(),
        }
    }

    /// `repo::path`, the prefix shared by every record id from this file.
    pub fn location(&self) -> String {
        format!("{}::{}", self.repo, self.path)
    }
}
