//! breadcrumb-needs-labelling
//!
//! A Breadcrumb is a navigation landmark; without a name it is announced
//! as an anonymous "navigation".

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "breadcrumb-needs-labelling",
    description: "Require Breadcrumb components to have an aria label",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["Breadcrumb"],
    label_props: &["aria-label"],
    strategies: LabelStrategies::LABEL_PROPS.union(LabelStrategies::ARIA_LABELLEDBY),
};

pub fn breadcrumb_needs_labelling() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "Breadcrumb must have an aria label",
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
        registry.register(Box::new(breadcrumb_needs_labelling()));
        Linter::with_registry(registry)
    }

    #[test]
    fn test_valid_with_aria_label() {
        let linter = create_linter();
        let result = linter.lint_source(
            r#"<Breadcrumb aria-label="Site path"><BreadcrumbItem>Home</BreadcrumbItem></Breadcrumb>"#,
            "test.tsx",
        );
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_valid_with_aria_labelledby() {
        let linter = create_linter();
        let result = linter.lint_source(
            r#"<h2 id="crumbs">You are here</h2><Breadcrumb aria-labelledby="crumbs" />"#,
            "test.tsx",
        );
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_invalid_without_label() {
        let linter = create_linter();
        let result = linter.lint_source(
            "<Breadcrumb><BreadcrumbItem>Home</BreadcrumbItem></Breadcrumb>",
            "test.tsx",
        );
        assert_eq!(result.error_count, 1);
    }

    #[test]
    fn test_invalid_empty_aria_label() {
        let linter = create_linter();
        let result = linter.lint_source(r#"<Breadcrumb aria-label="" />"#, "test.tsx");
        assert_eq!(result.error_count, 1);
    }
}
