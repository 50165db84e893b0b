//! Ancestor chain classification.
//!
//! The chain is the visitor's ancestor stack for the element being checked,
//! ordered root first. The two walk policies differ on purpose: wrapper
//! detection scans the whole chain, tooltip detection gives up at the first
//! non-element ancestor.

use crate::context::AncestorEntry;

/// Whether any ancestor is a `Field` component (exact, case-sensitive)
pub fn has_field_parent(ancestors: &[AncestorEntry]) -> bool {
    ancestors
        .iter()
        .any(|entry| entry.tag() == Some("Field"))
}

/// Whether any ancestor is a label element (`label` or `Label`)
pub fn is_inside_label_tag(ancestors: &[AncestorEntry]) -> bool {
    ancestors
        .iter()
        .any(|entry| entry.tag().is_some_and(|tag| tag.eq_ignore_ascii_case("label")))
}

/// Whether a `Tooltip` wraps the element, walking nearest ancestor outward.
///
/// An expression-container ancestor ends the walk: a Tooltip on the far side
/// of one is not detected.
pub fn has_tooltip_parent(ancestors: &[AncestorEntry]) -> bool {
    for entry in ancestors.iter().rev() {
        match entry {
            AncestorEntry::Element { tag } if tag == "Tooltip" => return true,
            AncestorEntry::Element { .. } => {}
            AncestorEntry::Expression => return false,
        }
    }
    false
}
