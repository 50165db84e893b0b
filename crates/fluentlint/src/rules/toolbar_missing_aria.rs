//! toolbar-missing-aria

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "toolbar-missing-aria",
    description: "Require Toolbar components to have an aria label",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["Toolbar"],
    label_props: &["aria-label"],
    strategies: LabelStrategies::LABEL_PROPS.union(LabelStrategies::ARIA_LABELLEDBY),
};

pub fn toolbar_missing_aria() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "Toolbar must have an aria label",
        "Add an aria-label prop or associate it via aria-labelledby",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;
    use crate::rule::RuleRegistry;

    fn create_linter() -> Linter {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(toolbar_missing_aria()));
        Linter::with_registry(registry)
    }

    #[test]
    fn test_valid_with_aria_label() {
        let linter = create_linter();
        let result =
            linter.lint_source(r#"<Toolbar aria-label="Formatting"><ToolbarButton /></Toolbar>"#, "test.tsx");
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_invalid_without_label() {
        let linter = create_linter();
        let result = linter.lint_source("<Toolbar><ToolbarButton /></Toolbar>", "test.tsx");
        assert_eq!(result.error_count, 1);
    }
}
