//! Attribute inspection.

use fluentlint_ast::{Attribute, AttributeValue, ElementNode, Expression};

/// Look up an attribute by exact name
#[inline]
pub fn get_attribute<'a>(element: &'a ElementNode, name: &str) -> Option<&'a Attribute> {
    element.attribute(name)
}

/// Whether the attribute is present at all, regardless of value
#[inline]
pub fn has_attribute(element: &ElementNode, name: &str) -> bool {
    element.has_attribute(name)
}

/// The attribute's value as a statically known string, if it has one.
///
/// Covers quoted literals and `{"…"}` string-literal expressions.
pub fn resolved_string<'a>(element: &'a ElementNode, name: &str) -> Option<&'a str> {
    match &element.attribute(name)?.value {
        Some(AttributeValue::Literal(t)) => Some(t.content.as_str()),
        Some(AttributeValue::Expression(container)) => match &container.expression {
            Expression::StringLiteral(s) => Some(s.as_str()),
            _ => None,
        },
        None => None,
    }
}

/// Whether the attribute is present with a non-empty resolved value.
///
/// Emptiness is judged per value type: strings must have non-whitespace
/// content, booleans and numbers always count (`{false}` and `{0}` included),
/// collections count when they have entries, and the bare shorthand
/// (`disabled`) is a boolean `true`. Values that cannot be resolved
/// statically count as absent.
pub fn has_non_empty_attribute(element: &ElementNode, name: &str) -> bool {
    let Some(attribute) = element.attribute(name) else {
        return false;
    };
    match &attribute.value {
        // JSX boolean shorthand
        None => true,
        Some(AttributeValue::Literal(t)) => !t.content.trim().is_empty(),
        Some(AttributeValue::Expression(container)) => match &container.expression {
            Expression::StringLiteral(s) => !s.trim().is_empty(),
            Expression::BooleanLiteral(_) | Expression::NumberLiteral(_) => true,
            Expression::ArrayLiteral(len) | Expression::ObjectLiteral(len) => *len > 0,
            Expression::Element(_) | Expression::Mixed { .. } => true,
            Expression::NullLiteral
            | Expression::Identifier(_)
            | Expression::Call(_)
            | Expression::Raw(_) => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluentlint_ast::JsxChild;
    use fluentlint_parser::Parser;

    fn first_element(source: &str) -> ElementNode {
        let (root, _) = Parser::new(source).parse();
        match root.children.into_iter().next() {
            Some(JsxChild::Element(el)) => *el,
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_attribute() {
        let el = first_element("<Checkbox />");
        assert!(!has_non_empty_attribute(&el, "label"));
    }

    #[test]
    fn test_string_values() {
        assert!(has_non_empty_attribute(
            &first_element(r#"<Checkbox label="Accept" />"#),
            "label"
        ));
        assert!(!has_non_empty_attribute(
            &first_element(r#"<Checkbox label="" />"#),
            "label"
        ));
        assert!(!has_non_empty_attribute(
            &first_element(r#"<Checkbox label="   " />"#),
            "label"
        ));
        assert!(!has_non_empty_attribute(
            &first_element(r#"<Checkbox label={""} />"#),
            "label"
        ));
    }

    #[test]
    fn test_boolean_and_number_always_count() {
        assert!(has_non_empty_attribute(
            &first_element("<Checkbox label={false} />"),
            "label"
        ));
        assert!(has_non_empty_attribute(
            &first_element("<Checkbox label={0} />"),
            "label"
        ));
    }

    #[test]
    fn test_bare_shorthand_is_true() {
        let el = first_element("<Checkbox label />");
        assert!(has_non_empty_attribute(&el, "label"));
    }

    #[test]
    fn test_collections() {
        assert!(!has_non_empty_attribute(
            &first_element("<X items={[]} />"),
            "items"
        ));
        assert!(has_non_empty_attribute(
            &first_element("<X items={[1, 2]} />"),
            "items"
        ));
        assert!(!has_non_empty_attribute(
            &first_element("<X style={{}} />"),
            "style"
        ));
        assert!(has_non_empty_attribute(
            &first_element("<X style={{ color: red }} />"),
            "style"
        ));
    }

    #[test]
    fn test_unresolvable_counts_as_absent() {
        assert!(!has_non_empty_attribute(
            &first_element("<Checkbox label={label} />"),
            "label"
        ));
        assert!(!has_non_empty_attribute(
            &first_element(r#"<Checkbox label={t("x")} />"#),
            "label"
        ));
        assert!(!has_non_empty_attribute(
            &first_element("<Checkbox label={null} />"),
            "label"
        ));
    }

    #[test]
    fn test_resolved_string() {
        assert_eq!(
            resolved_string(&first_element(r#"<X id="a" />"#), "id"),
            Some("a")
        );
        assert_eq!(
            resolved_string(&first_element(r#"<X id={"a"} />"#), "id"),
            Some("a")
        );
        assert_eq!(resolved_string(&first_element("<X id={a} />"), "id"), None);
        assert_eq!(resolved_string(&first_element("<X />"), "id"), None);
    }
}
