//! Cross-reference id index.
//!
//! One pass over the parsed tree collects every literal `id` value and every
//! literal `htmlFor` value. Labelling checks then answer `aria-labelledby` /
//! `aria-describedby` / `htmlFor` association queries against the two sets
//! without rescanning the source.

use compact_str::CompactString;
use fluentlint_ast::{AttributeValue, ElementNode, Expression, JsxChild, JsxRoot};
use rustc_hash::FxHashSet;

/// Declared `id` and `htmlFor` values for one file
#[derive(Debug, Default)]
pub struct IdIndex {
    ids: FxHashSet<CompactString>,
    html_fors: FxHashSet<CompactString>,
}

impl IdIndex {
    /// Build the index from a parsed tree
    pub fn build(root: &JsxRoot) -> Self {
        let mut index = Self::default();
        for child in &root.children {
            index.collect_child(child);
        }
        index
    }

    fn collect_child(&mut self, child: &JsxChild) {
        match child {
            JsxChild::Element(el) => self.collect_element(el),
            JsxChild::Expression(container) => {
                for el in container.expression.elements() {
                    self.collect_element(el);
                }
            }
            JsxChild::Text(_) => {}
        }
    }

    fn collect_element(&mut self, el: &ElementNode) {
        for attr in &el.attributes {
            let value = match &attr.value {
                Some(AttributeValue::Literal(t)) => Some(t.content.as_str()),
                Some(AttributeValue::Expression(e)) => match &e.expression {
                    Expression::StringLiteral(s) => Some(s.as_str()),
                    _ => None,
                },
                None => None,
            };
            let Some(value) = value else { continue };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if attr.name == "id" {
                self.ids.insert(value.into());
            } else if attr.name == "htmlFor" {
                self.html_fors.insert(value.into());
            }
        }

        // Elements embedded in attribute expressions declare ids too
        for attr in &el.attributes {
            if let Some(AttributeValue::Expression(e)) = &attr.value {
                for embedded in e.expression.elements() {
                    self.collect_element(embedded);
                }
            }
        }

        for child in &el.children {
            self.collect_child(child);
        }
    }

    /// Whether a literal `id` with this exact value is declared
    #[inline]
    pub fn has_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Whether a literal `htmlFor` with this exact value is declared
    #[inline]
    pub fn has_html_for(&self, id: &str) -> bool {
        self.html_fors.contains(id)
    }

    /// Whether ANY whitespace-separated token of `value` matches a declared id
    #[inline]
    pub fn declares_any_token(&self, value: &str) -> bool {
        value.split_whitespace().any(|token| self.ids.contains(token))
    }
}
