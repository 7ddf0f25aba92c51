//! Styling-factory detection.
//!
//! Decides which local identifier stands for the styling factory of a file,
//! given its [`ImportMap`].
//!
//! The lookup is a heuristic: a known module qualifies only when one of its
//! bindings is literally named `styled`, and the factory is then taken to be
//! the *first* binding imported from that module. An import that only binds
//! the factory under another name (`import css from "@emotion/styled"`) is
//! not detected.

use crate::core::collect::ImportMap;

/// Known styling-library modules, in priority order.
pub const DEFAULT_STYLING_MODULES: &[&str] =
    &["styled-components", "@emotion/styled", "linaria/react"];

/// Binding name that marks a module import as styling-factory usage.
pub const FACTORY_SIGNAL: &str = "styled";

/// Return the local name of the styling factory, if any known module qualifies.
///
/// `modules` is checked in order; the first module whose bindings contain
/// [`FACTORY_SIGNAL`] wins.
pub fn detect_styling_factory<'a, S: AsRef<str>>(
    imports: &'a ImportMap,
    modules: &[S],
) -> Option<&'a str> {
    modules.iter().find_map(|module| {
        let bindings = imports.get(module.as_ref())?;
        if bindings.iter().any(|b| b == FACTORY_SIGNAL) {
            bindings.first().map(String::as_str)
        } else {
            None
        }
    })
}
