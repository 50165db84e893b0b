//! Labelled image and labelled child detection.

use crate::ids::IdIndex;
use crate::utils::flatten::flatten_children;
use crate::utils::labels;
use crate::utils::props;
use fluentlint_ast::{AttributeValue, ElementNode, Expression};

/// Tags recognized as images for descendant labelling purposes
const IMAGE_TAGS: [&str; 4] = ["Image", "Avatar", "img", "svg"];

/// Whether `aria-hidden` is present and truthy.
///
/// The bare shorthand and any value other than a literal `false` count.
fn is_aria_hidden(element: &ElementNode) -> bool {
    let Some(attribute) = element.attribute("aria-hidden") else {
        return false;
    };
    match &attribute.value {
        None => true,
        Some(AttributeValue::Literal(t)) => t.content.trim() != "false",
        Some(AttributeValue::Expression(container)) => match &container.expression {
            Expression::BooleanLiteral(b) => *b,
            Expression::StringLiteral(s) => s.trim() != "false",
            _ => true,
        },
    }
}

/// Whether the image is marked decorative: hidden from the accessibility
/// tree, carrying an explicitly empty `alt`, or an alt-bearing tag with no
/// `alt` at all. An svg has no `alt` contract, so absence suppresses only
/// the alt-bearing tags.
fn is_suppressed(element: &ElementNode) -> bool {
    if is_aria_hidden(element) {
        return true;
    }
    match props::resolved_string(element, "alt") {
        Some(alt) => alt.trim().is_empty(),
        None => matches!(element.tag.as_str(), "img" | "Image" | "Avatar"),
    }
}

/// Whether any descendant is an image carrying its own accessible name.
///
/// Suppressed (decorative) images never count, and an image with no `alt`
/// at all is not labelled.
pub fn has_labelled_child_image(element: &ElementNode) -> bool {
    flatten_children(element).into_iter().any(|descendant| {
        IMAGE_TAGS.contains(&descendant.tag.as_str())
            && !is_suppressed(descendant)
            && ["title", "alt", "aria-label", "aria-labelledby"]
                .iter()
                .any(|name| props::has_non_empty_attribute(descendant, name))
    })
}

/// Whether any descendant provides an accessible name for its parent:
/// a labelled image, a titled svg, a `role="img"` element with a name, an
/// icon component, or anything with `aria-label`/`title`/a resolvable
/// `aria-labelledby`.
pub fn has_labelled_child(element: &ElementNode, ids: &IdIndex) -> bool {
    flatten_children(element)
        .into_iter()
        .any(|descendant| is_labelled_element(descendant, ids))
}

fn is_labelled_element(element: &ElementNode, ids: &IdIndex) -> bool {
    let tag = element.tag.as_str();

    if matches!(tag, "img" | "Image" | "Avatar") && props::has_non_empty_attribute(element, "alt") {
        return true;
    }

    if tag == "svg"
        && (props::has_non_empty_attribute(element, "title")
            || props::has_non_empty_attribute(element, "aria-label")
            || labels::has_associated_labelled_by(element, ids))
    {
        return true;
    }

    if props::resolved_string(element, "role").map(str::trim) == Some("img")
        && (props::has_non_empty_attribute(element, "aria-label")
            || labels::has_associated_labelled_by(element, ids))
    {
        return true;
    }

    if tag.to_ascii_lowercase().contains("icon") {
        return true;
    }

    props::has_non_empty_attribute(element, "aria-label")
        || props::has_non_empty_attribute(element, "title")
        || labels::has_associated_labelled_by(element, ids)
}
