//! Matches `const Name = factory.el`...`` declarators.
//!
//! A declarator is selected when:
//! - its binding is a plain identifier,
//! - its initializer is a tagged template,
//! - the tag is a non-computed member access `<object>.<property>`,
//! - `<object>` is an identifier equal to the styling factory.
//!
//! Interpolations (`${...}`) in the template do not disqualify a match;
//! they contribute no text to the value.

use swc_ecma_ast::{Expr, MemberProp, Module, Pat, TaggedTpl, VarDeclarator};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::data::Declaration;

/// Visitor collecting styled declarations in pre-order.
pub struct DeclarationCollector<'a> {
    factory: &'a str,
    pub declarations: Vec<Declaration>,
}

impl<'a> DeclarationCollector<'a> {
    pub fn new(factory: &'a str) -> Self {
        Self {
            factory,
            declarations: Vec::new(),
        }
    }

    fn check_declarator(&mut self, node: &VarDeclarator) {
        let Pat::Ident(binding) = &node.name else {
            return;
        };
        let Some(init) = &node.init else {
            return;
        };
        let Expr::TaggedTpl(tagged) = &**init else {
            return;
        };
        let Some(el) = self.styled_element(tagged) else {
            return;
        };

        let value: String = tagged.tpl.quasis.iter().map(|q| q.raw.as_str()).collect();

        self.declarations.push(Declaration {
            name: binding.id.sym.to_string(),
            el,
            value,
        });
    }

    /// Element name of a `factory.el` tag, or None for any other tag shape.
    fn styled_element(&self, tagged: &TaggedTpl) -> Option<String> {
        let Expr::Member(member) = &*tagged.tag else {
            return None;
        };
        let Expr::Ident(object) = &*member.obj else {
            return None;
        };
        if object.sym.as_str() != self.factory {
            return None;
        }
        match &member.prop {
            MemberProp::Ident(prop) => Some(prop.sym.to_string()),
            _ => None,
        }
    }
}

impl Visit for DeclarationCollector<'_> {
    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        self.check_declarator(node);
        node.visit_children_with(self);
    }
}

/// Styled declarations of a module, in source encounter order.
///
/// Returns an empty sequence without traversing when no factory was detected.
pub fn match_declarations(
    module: &Module,
    factory: Option<&str>,
) -> std::vec::IntoIter<Declaration> {
    let Some(factory) = factory else {
        return Vec::new().into_iter();
    };

    let mut collector = DeclarationCollector::new(factory);
    module.visit_with(&mut collector);
    collector.declarations.into_iter()
}
