//! AST visitor for lint rule execution.

use crate::context::{AncestorEntry, LintContext};
use crate::rule::Rule;
use fluentlint_ast::{ElementNode, ExpressionContainer, JsxChild, JsxRoot};

/// Visit the AST and run all rules
pub struct LintVisitor<'a, 'ctx, 'rules> {
    ctx: &'ctx mut LintContext<'a>,
    rules: &'rules [Box<dyn Rule>],
}

impl<'a, 'ctx, 'rules> LintVisitor<'a, 'ctx, 'rules> {
    /// Create a new visitor
    #[inline]
    pub fn new(ctx: &'ctx mut LintContext<'a>, rules: &'rules [Box<dyn Rule>]) -> Self {
        Self { ctx, rules }
    }

    /// Visit the root node and traverse the AST
    pub fn visit_root(&mut self, root: &JsxRoot) {
        for rule in self.rules.iter() {
            self.ctx.current_rule = rule.meta().name;
            rule.check_root(self.ctx, root);
        }

        for child in root.children.iter() {
            self.visit_child(child);
        }
    }

    fn visit_child(&mut self, node: &JsxChild) {
        match node {
            JsxChild::Element(el) => self.visit_element(el),
            JsxChild::Expression(container) => self.visit_expression(container),
            JsxChild::Text(_) => {}
        }
    }

    fn visit_element(&mut self, el: &ElementNode) {
        self.ctx
            .push_ancestor(AncestorEntry::element(el.tag.as_str()));

        for rule in self.rules.iter() {
            self.ctx.current_rule = rule.meta().name;
            rule.check_element(self.ctx, el);
        }

        for child in el.children.iter() {
            self.visit_child(child);
        }

        self.ctx.pop_ancestor();
    }

    /// Descend into elements embedded in a `{…}` child.
    ///
    /// The container itself goes on the ancestor stack as a non-element
    /// entry, so ancestry checks see the expression boundary.
    fn visit_expression(&mut self, container: &ExpressionContainer) {
        let elements = container.expression.elements();
        if elements.is_empty() {
            return;
        }

        self.ctx.push_ancestor(AncestorEntry::Expression);
        for el in elements {
            self.visit_element(el);
        }
        self.ctx.pop_ancestor();
    }
}
