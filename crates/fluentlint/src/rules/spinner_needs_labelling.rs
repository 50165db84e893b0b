//! spinner-needs-labelling

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "spinner-needs-labelling",
    description: "Require Spinner components to have an accessible label",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["Spinner"],
    label_props: &["label", "aria-label"],
    strategies: LabelStrategies::LABEL_PROPS.union(LabelStrategies::ARIA_LABELLEDBY),
};

pub fn spinner_needs_labelling() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "Spinner must have an accessible label",
        "Add a label or aria-label prop, or associate it via aria-labelledby",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;
    use crate::rule::RuleRegistry;

    fn create_linter() -> Linter {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(spinner_needs_labelling()));
        Linter::with_registry(registry)
    }

    #[test]
    fn test_valid_with_label() {
        let linter = create_linter();
        let result = linter.lint_source(r#"<Spinner label="Loading" />"#, "test.tsx");
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_invalid_bare() {
        let linter = create_linter();
        let result = linter.lint_source("<Spinner />", "test.tsx");
        assert_eq!(result.error_count, 1);
    }

    #[test]
    fn test_field_parent_does_not_count() {
        let linter = create_linter();
        let result = linter.lint_source("<Field><Spinner /></Field>", "test.tsx");
        assert_eq!(result.error_count, 1);
    }
}
