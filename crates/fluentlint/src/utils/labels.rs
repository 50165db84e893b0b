//! Aria cross-reference checks against the [`IdIndex`].

use crate::ids::IdIndex;
use crate::utils::props;
use fluentlint_ast::ElementNode;

/// Whether `aria-labelledby` resolves to a declared id.
///
/// The value is a whitespace-separated token list and any one match counts.
pub fn has_associated_labelled_by(element: &ElementNode, ids: &IdIndex) -> bool {
    references_declared_id(element, "aria-labelledby", ids)
}

/// Whether `aria-describedby` resolves to a declared id
pub fn has_associated_described_by(element: &ElementNode, ids: &IdIndex) -> bool {
    references_declared_id(element, "aria-describedby", ids)
}

/// Whether the element's own `id` is targeted by some `htmlFor`
pub fn has_label_with_html_for(element: &ElementNode, ids: &IdIndex) -> bool {
    props::resolved_string(element, "id")
        .map(str::trim)
        .is_some_and(|id| !id.is_empty() && ids.has_html_for(id))
}

fn references_declared_id(element: &ElementNode, attribute: &str, ids: &IdIndex) -> bool {
    props::resolved_string(element, attribute)
        .is_some_and(|value| !value.trim().is_empty() && ids.declares_any_token(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluentlint_ast::JsxChild;
    use fluentlint_parser::Parser;

    fn parse(source: &str) -> (Vec<ElementNode>, IdIndex) {
        let (root, _) = Parser::new(source).parse();
        let ids = IdIndex::build(&root);
        let elements = root
            .children
            .into_iter()
            .filter_map(|c| match c {
                JsxChild::Element(el) => Some(*el),
                _ => None,
            })
            .collect();
        (elements, ids)
    }

    #[test]
    fn test_labelled_by_resolves() {
        let (els, ids) = parse(r#"<Label id="x">Name</Label><Input aria-labelledby="x" />"#);
        assert!(has_associated_labelled_by(&els[1], &ids));
    }

    #[test]
    fn test_labelled_by_missing_target() {
        let (els, ids) = parse(r#"<Label id="x">Name</Label><Input aria-labelledby="y" />"#);
        assert!(!has_associated_labelled_by(&els[1], &ids));
    }

    #[test]
    fn test_labelled_by_any_token() {
        let (els, ids) = parse(r#"<Label id="x">Name</Label><Input aria-labelledby="missing x" />"#);
        assert!(has_associated_labelled_by(&els[1], &ids));
    }

    #[test]
    fn test_labelled_by_dynamic_value_is_unresolved() {
        let (els, ids) = parse(r#"<Label id="x">Name</Label><Input aria-labelledby={refId} />"#);
        assert!(!has_associated_labelled_by(&els[1], &ids));
    }

    #[test]
    fn test_described_by() {
        let (els, ids) = parse(r#"<span id="hint">Hint</span><ProgressBar aria-describedby="hint" />"#);
        assert!(has_associated_described_by(&els[1], &ids));
        assert!(!has_associated_labelled_by(&els[1], &ids));
    }

    #[test]
    fn test_html_for_association() {
        let (els, ids) = parse(r#"<Label htmlFor="agree">Agree</Label><Checkbox id="agree" />"#);
        assert!(has_label_with_html_for(&els[1], &ids));
    }

    #[test]
    fn test_html_for_no_match() {
        let (els, ids) = parse(r#"<Label htmlFor="other">Agree</Label><Checkbox id="agree" />"#);
        assert!(!has_label_with_html_for(&els[1], &ids));
    }
}
