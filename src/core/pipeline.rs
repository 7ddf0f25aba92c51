//! Pipeline driver.
//!
//! For each corpus row, strictly one after another:
//!
//! 1. parse the source with the dialect's grammar profile
//! 2. collect imports and detect the styling factory
//! 3. match styled declarations
//! 4. sanitize name and value, dropping whitespace-only values
//! 5. append an [`OutputRecord`]
//!
//! A file that fails to parse is recorded as a [`ParseFailure`] and skipped;
//! the run continues. Records keep corpus order, then source order within a
//! file.

use anyhow::Result;

use crate::{
    core::{
        collect::resolve_imports,
        data::{Declaration, OutputRecord, SourceRecord},
        detect::{DEFAULT_STYLING_MODULES, detect_styling_factory},
        extract::match_declarations,
        parsers::parse_source,
        prefilter::imports_styling_factory,
        sanitize::{sanitize_name, sanitize_value},
    },
    corpus::{Corpus, CorpusRow},
    issues::{Issue, ParseFailure},
};

/// Matched declarations of one file, before sanitizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDeclarations {
    /// Local name of the detected styling factory.
    pub factory: Option<String>,
    pub declarations: Vec<Declaration>,
}

/// Output of processing one file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileExtraction {
    pub factory: Option<String>,
    pub records: Vec<OutputRecord>,
    /// Declarations dropped because their template text was blank.
    pub empty_values: usize,
}

/// Counters for a full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractionStats {
    /// Source records delivered by the corpus.
    pub files_scanned: usize,
    /// Files that parsed successfully.
    pub files_parsed: usize,
    /// Files with a detected styling factory.
    pub files_with_factory: usize,
    /// Declarations matched before value sanitizing.
    pub declarations: usize,
    /// Declarations dropped for blank template text.
    pub empty_values: usize,
}

/// Result of a full corpus run.
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<OutputRecord>,
    pub issues: Vec<Issue>,
    pub stats: ExtractionStats,
}

impl Extraction {
    pub fn parse_failure_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| matches!(i, Issue::ParseFailure(_)))
            .count()
    }

    pub fn unreadable_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| matches!(i, Issue::UnreadableRow(_)))
            .count()
    }
}

/// Files whose text imports a styling factory (no parsing involved).
#[derive(Debug, Default)]
pub struct StyledFileListing {
    /// `repo::path` of every matching file, in corpus order.
    pub files: Vec<String>,
    pub files_scanned: usize,
    pub issues: Vec<Issue>,
}

/// The extraction pipeline, configured with the known styling modules.
#[derive(Debug, Clone)]
pub struct Pipeline {
    styling_modules: Vec<String>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(DEFAULT_STYLING_MODULES.iter().map(|s| s.to_string()).collect())
    }
}

impl Pipeline {
    /// `styling_modules` are checked in order by the factory detector.
    pub fn new(styling_modules: Vec<String>) -> Self {
        Self { styling_modules }
    }

    pub fn styling_modules(&self) -> &[String] {
        &self.styling_modules
    }

    /// Parse a file and run both traversal passes.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the source is malformed for its dialect.
    pub fn extract_declarations(&self, source: &SourceRecord) -> Result<FileDeclarations> {
        let module = parse_source(&source.content, &source.path, source.language)?;

        let imports = resolve_imports(&module);
        let factory = detect_styling_factory(&imports, &self.styling_modules);
        let declarations = match_declarations(&module, factory).collect();

        Ok(FileDeclarations {
            factory: factory.map(str::to_string),
            declarations,
        })
    }

    /// Extract the output records of one file.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the source is malformed for its dialect.
    pub fn process(&self, source: &SourceRecord) -> Result<FileExtraction> {
        let FileDeclarations {
            factory,
            declarations,
        } = self.extract_declarations(source)?;

        let mut extraction = FileExtraction {
            factory,
            ..Default::default()
        };

        for declaration in declarations {
            let Some(value) = sanitize_value(&declaration.value) else {
                extraction.empty_values += 1;
                continue;
            };
            let name_t = sanitize_name(&declaration.name);
            extraction
                .records
                .push(OutputRecord::new(source, declaration, name_t, value));
        }

        Ok(extraction)
    }

    /// Run the pipeline over a whole corpus.
    ///
    /// # Errors
    ///
    /// Only fails when the corpus itself cannot be read. Per-file problems
    /// are collected in [`Extraction::issues`].
    pub fn run(&self, corpus: &dyn Corpus) -> Result<Extraction> {
        let mut result = Extraction::default();

        corpus.scan(&mut |row| match row {
            CorpusRow::Record(source) => self.run_one(&source, &mut result),
            CorpusRow::Unreadable(row) => result.issues.push(row.into()),
        })?;

        Ok(result)
    }

    fn run_one(&self, source: &SourceRecord, result: &mut Extraction) {
        result.stats.files_scanned += 1;

        match self.process(source) {
            Ok(extraction) => {
                result.stats.files_parsed += 1;
                if extraction.factory.is_some() {
                    result.stats.files_with_factory += 1;
                }
                result.stats.declarations += extraction.records.len() + extraction.empty_values;
                result.stats.empty_values += extraction.empty_values;
                result.records.extend(extraction.records);
            }
            Err(e) => result.issues.push(
                ParseFailure {
                    repo: source.repo.clone(),
                    path: source.path.clone(),
                    message: e.to_string(),
                }
                .into(),
            ),
        }
    }

    /// List corpus files that textually import a styling factory.
    pub fn list_styled_files(&self, corpus: &dyn Corpus) -> Result<StyledFileListing> {
        let mut listing = StyledFileListing::default();

        corpus.scan(&mut |row| match row {
            CorpusRow::Record(source) => {
                listing.files_scanned += 1;
                if imports_styling_factory(&source.content, &self.styling_modules) {
                    listing.files.push(source.location());
                }
            }
            CorpusRow::Unreadable(row) => listing.issues.push(row.into()),
        })?;

        Ok(listing)
    }
}
