//! radio-button-missing-label

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "radio-button-missing-label",
    description: "Require Radio components to have an accessible label",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["Radio"],
    label_props: &["label"],
    strategies: LabelStrategies::LABEL_PROPS
        .union(LabelStrategies::FIELD_PARENT)
        .union(LabelStrategies::ARIA_LABELLEDBY),
};

pub fn radio_button_missing_label() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "Radio must have an accessible label",
        "Add a label prop, wrap it in a Field, or associate it via aria-labelledby",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;
    use crate::rule::RuleRegistry;

    fn create_linter() -> Linter {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(radio_button_missing_label()));
        Linter::with_registry(registry)
    }

    #[test]
    fn test_valid_with_label() {
        let linter = create_linter();
        let result = linter.lint_source(r#"<Radio value="a" label="Option A" />"#, "test.tsx");
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_invalid_bare() {
        let linter = create_linter();
        let result = linter.lint_source(r#"<Radio value="a" />"#, "test.tsx");
        assert_eq!(result.error_count, 1);
    }
}
