use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, GLOBALS, Globals, SourceMap, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax, error::Error};

use crate::core::data::Dialect;

/// Grammar profile for a dialect.
///
/// Dialects carrying the `ts` marker get TypeScript with TSX enabled;
/// everything else gets ECMAScript with JSX enabled.
pub fn grammar_for(dialect: Dialect) -> Syntax {
    if dialect.is_typed() {
        Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        })
    } else {
        Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        })
    }
}

/// Parse one source file into a module AST.
///
/// The parse is strict: recoverable errors the parser reports alongside a
/// module are treated as failures too, so a file is either fully understood
/// or skipped.
pub fn parse_source(code: &str, file_path: &str, dialect: Dialect) -> Result<Module> {
    let source_map: Arc<SourceMap> = Default::default();

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(
            FileName::Real(file_path.into()).into(),
            code.to_string(),
        );

        let mut parser = Parser::new(
            grammar_for(dialect),
            StringInput::from(&*source_file),
            None,
        );

        let module = parser
            .parse_module()
            .map_err(|e| describe_error(&source_map, &e))?;

        if let Some(e) = parser.take_errors().into_iter().next() {
            return Err(describe_error(&source_map, &e));
        }

        Ok(module)
    })
}

fn describe_error(source_map: &SourceMap, error: &Error) -> anyhow::Error {
    let loc = source_map.lookup_char_pos(error.span().lo);
    anyhow!(
        "syntax error at {}:{}: {}",
        loc.line,
        loc.col_display + 1,
        error.kind().msg()
    )
}
