//! Second traversal pass: styled declaration matching.

pub mod declarations;

pub use declarations::{DeclarationCollector, match_declarations};
