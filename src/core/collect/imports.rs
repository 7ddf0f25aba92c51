use std::collections::HashMap;

use swc_ecma_ast::{ImportDecl, ImportSpecifier, Module};
use swc_ecma_visit::{Visit, VisitWith};

/// Module specifier -> local binding names, in declaration order.
///
/// ```typescript
/// import styled, { css as cx } from "styled-components";
/// // "styled-components" => ["styled", "cx"]
/// ```
pub type ImportMap = HashMap<String, Vec<String>>;

/// Collects every `import` declaration of a module into an [`ImportMap`].
///
/// Default, named and namespace specifiers are flattened to their local
/// name. When the same specifier is imported by several declarations the
/// last declaration replaces the earlier ones.
#[derive(Debug, Default)]
pub struct ImportCollector {
    pub imports: ImportMap,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visit for ImportCollector {
    fn visit_import_decl(&mut self, node: &ImportDecl) {
        let Some(module_path) = node.src.value.as_str() else {
            return;
        };

        let locals = node
            .specifiers
            .iter()
            .map(|specifier| match specifier {
                ImportSpecifier::Named(named) => named.local.sym.to_string(),
                ImportSpecifier::Default(default) => default.local.sym.to_string(),
                ImportSpecifier::Namespace(ns) => ns.local.sym.to_string(),
            })
            .collect();

        self.imports.insert(module_path.to_string(), locals);
    }
}

/// Collect the imports of a parsed module.
pub fn resolve_imports(module: &Module) -> ImportMap {
    let mut collector = ImportCollector::new();
    module.visit_with(&mut collector);
    collector.imports
}
