use serde::{Deserialize, Serialize};

use super::SourceRecord;

/// A matched `const Name = styled.el`...`` declarator, before sanitizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Declared identifier, as written in source.
    pub name: String,
    /// Member property of the tag, e.g. `div` in `styled.div`.
    pub el: String,
    /// Static template text with interpolations dropped.
    pub value: String,
}

/// One row of the emitted dataset.
///
/// `id` is `repo::path::name_o` and is not unique: two declarations with the
/// same name in one file produce the same id. Deduplication is left to the
/// consumer of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub id: String,
    pub repo: String,
    pub path: String,
    /// Original declared name.
    pub name_o: String,
    /// Tokenized name (`StyledIconButton` -> `icon-button`).
    pub name_t: String,
    pub el: String,
    /// Sanitized style text. Never empty.
    pub value: String,
}

impl OutputRecord {
    pub fn new(
        source: &SourceRecord,
        declaration: Declaration,
        name_t: String,
        value: String,
    ) -> Self {
        Self {
            id: format!("{}::{}", source.location(), declaration.name),
            repo: source.repo.clone(),
            path: source.path.clone(),
            name_o: declaration.name,
            name_t,
            el: declaration.el,
            value,
        }
    }
}
