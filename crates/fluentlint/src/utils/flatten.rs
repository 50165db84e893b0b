//! Descendant flattening.

use fluentlint_ast::{ElementNode, JsxChild};

/// All descendant elements of `element` in pre-order, root excluded.
///
/// Elements embedded in `{…}` children are traversed into; text and
/// non-element expression content is dropped.
pub fn flatten_children(element: &ElementNode) -> Vec<&ElementNode> {
    let mut out = Vec::new();
    collect(element, &mut out);
    out
}

fn collect<'a>(element: &'a ElementNode, out: &mut Vec<&'a ElementNode>) {
    for child in &element.children {
        match child {
            JsxChild::Element(el) => {
                out.push(el);
                collect(el, out);
            }
            JsxChild::Expression(container) => {
                for el in container.expression.elements() {
                    out.push(el);
                    collect(el, out);
                }
            }
            JsxChild::Text(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluentlint_parser::Parser;

    fn first_element(source: &str) -> ElementNode {
        let (root, _) = Parser::new(source).parse();
        match root.children.into_iter().next() {
            Some(JsxChild::Element(el)) => *el,
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_preorder_descendants() {
        let el = first_element("<div><a><b /></a><c /></div>");
        let tags: Vec<_> = flatten_children(&el).iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, ["a", "b", "c"]);
    }

    #[test]
    fn test_root_excluded_and_no_duplicates() {
        let el = first_element("<div><a /><a /></div>");
        let flattened = flatten_children(&el);
        assert_eq!(flattened.len(), 2);
        assert!(flattened.iter().all(|e| e.tag != "div"));
        // Two distinct nodes, not one node twice
        assert!(!std::ptr::eq(flattened[0], flattened[1]));
    }

    #[test]
    fn test_traverses_expression_children() {
        let el = first_element("<div>{open && <Panel><Icon /></Panel>}</div>");
        let tags: Vec<_> = flatten_children(&el).iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, ["Panel", "Icon"]);
    }

    #[test]
    fn test_empty() {
        let el = first_element("<div>text only</div>");
        assert!(flatten_children(&el).is_empty());
    }
}
