//! Text content detection.

use fluentlint_ast::{ElementNode, Expression, JsxChild};

/// Whether an element has visible text content of its own.
///
/// Only direct children are inspected; text inside nested elements does not
/// count. A dynamic child (`{label}`, `{t("save")}`) is assumed to render
/// text.
pub fn has_text_content(element: &ElementNode) -> bool {
    element.children.iter().any(|child| match child {
        JsxChild::Text(t) => !t.content.trim().is_empty(),
        JsxChild::Expression(container) => match &container.expression {
            Expression::StringLiteral(s) => !s.trim().is_empty(),
            Expression::Identifier(_) | Expression::Call(_) => true,
            _ => false,
        },
        JsxChild::Element(_) => false,
    })
}
