//! checkbox-needs-labelling
//!
//! A `<Checkbox>` with no label renders as a bare box; screen reader users
//! hear only "checkbox". Accepts a label prop, a Field or label wrapper,
//! or an htmlFor / aria-labelledby association.

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "checkbox-needs-labelling",
    description: "Require Checkbox components to have an accessible label",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["Checkbox"],
    label_props: &["label"],
    strategies: LabelStrategies::LABEL_PROPS
        .union(LabelStrategies::FIELD_PARENT)
        .union(LabelStrategies::WRAPPING_LABEL)
        .union(LabelStrategies::HTML_FOR)
        .union(LabelStrategies::ARIA_LABELLEDBY),
};

pub fn checkbox_needs_labelling() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "Checkbox must have an accessible label",
        "Add a label prop, wrap it in a Field or label, or associate it via htmlFor or aria-labelledby",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;
    use crate::rule::RuleRegistry;

    fn create_linter() -> Linter {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(checkbox_needs_labelling()));
        Linter::with_registry(registry)
    }

    #[test]
    fn test_valid_with_label_prop() {
        let linter = create_linter();
        let result = linter.lint_source(r#"<Checkbox label="Accept terms" />"#, "test.tsx");
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_valid_inside_field() {
        let linter = create_linter();
        let result = linter.lint_source(r#"<Field label="Options"><Checkbox /></Field>"#, "test.tsx");
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_valid_wrapped_in_label() {
        let linter = create_linter();
        let result = linter.lint_source("<label>Accept<Checkbox /></label>", "test.tsx");
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_valid_with_html_for() {
        let linter = create_linter();
        let result = linter.lint_source(
            r#"<Label htmlFor="agree">Agree</Label><Checkbox id="agree" />"#,
            "test.tsx",
        );
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_valid_with_aria_labelledby() {
        let linter = create_linter();
        let result = linter.lint_source(
            r#"<Label id="l1">Agree</Label><Checkbox aria-labelledby="l1" />"#,
            "test.tsx",
        );
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_invalid_bare() {
        let linter = create_linter();
        let result = linter.lint_source("<Checkbox />", "test.tsx");
        assert_eq!(result.error_count, 1);
    }

    #[test]
    fn test_invalid_empty_label() {
        let linter = create_linter();
        let result = linter.lint_source(r#"<Checkbox label="" />"#, "test.tsx");
        assert_eq!(result.error_count, 1);
    }

    #[test]
    fn test_invalid_labelledby_without_target() {
        let linter = create_linter();
        let result = linter.lint_source(r#"<Checkbox aria-labelledby="nope" />"#, "test.tsx");
        assert_eq!(result.error_count, 1);
    }
}
