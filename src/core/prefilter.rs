//! Textual import check, without parsing.
//!
//! Used to size a corpus quickly: a file "uses" a styling library when one of
//! its `import ... from "<module>"` statements names `styled` among the
//! imported bindings. This is cheaper and looser than the AST path (it also
//! fires on commented-out imports) and only feeds the `files` listing.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::detect::FACTORY_SIGNAL;

// Capture group 1: the binding clause between `import` and `from`
// Capture group 3: the module specifier
static IMPORT_STATEMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"import([ \n\t]*(?:[^ \n\t\{\}]+[ \n\t]*,?)?(?:[ \n\t]*\{(?:[ \n\t]*[^ \n\t"'\{\}]+[ \n\t]*,?)+\})?[ \n\t]*)from[ \n\t]*(['"])([^'"\n]+)['"]"#,
    )
    .unwrap()
});

/// Does `source` contain an import binding `binding` from module `from`?
pub fn contains_import_statement(source: &str, binding: &str, from: &str) -> bool {
    IMPORT_STATEMENT_REGEX.captures_iter(source).any(|caps| {
        let clause = caps.get(1).map_or("", |m| m.as_str());
        let module = caps.get(3).map_or("", |m| m.as_str());
        module == from && binds(clause, binding)
    })
}

/// Does `source` import `styled` from any of `modules`?
pub fn imports_styling_factory<S: AsRef<str>>(source: &str, modules: &[S]) -> bool {
    modules
        .iter()
        .any(|m| contains_import_statement(source, FACTORY_SIGNAL, m.as_ref()))
}

fn binds(clause: &str, binding: &str) -> bool {
    clause
        .split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .any(|token| token == binding)
}
