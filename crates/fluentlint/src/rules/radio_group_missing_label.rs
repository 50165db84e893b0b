//! radio-group-missing-label

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "radio-group-missing-label",
    description: "Require RadioGroup components to have an accessible label",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["RadioGroup"],
    label_props: &["label", "aria-label"],
    strategies: LabelStrategies::LABEL_PROPS
        .union(LabelStrategies::FIELD_PARENT)
        .union(LabelStrategies::HTML_FOR)
        .union(LabelStrategies::ARIA_LABELLEDBY),
};

pub fn radio_group_missing_label() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "RadioGroup must have an accessible label",
        "Add a label or aria-label prop, wrap it in a Field, or associate it via htmlFor or aria-labelledby",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;
    use crate::rule::RuleRegistry;

    fn create_linter() -> Linter {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(radio_group_missing_label()));
        Linter::with_registry(registry)
    }

    #[test]
    fn test_valid_with_aria_labelledby() {
        let linter = create_linter();
        let result = linter.lint_source(
            r#"<Label id="g">Size</Label><RadioGroup aria-labelledby="g"><Radio label="S" /></RadioGroup>"#,
            "test.tsx",
        );
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_invalid_bare() {
        let linter = create_linter();
        let result = linter.lint_source(r#"<RadioGroup><Radio label="S" /></RadioGroup>"#, "test.tsx");
        assert_eq!(result.error_count, 1);
    }
}
