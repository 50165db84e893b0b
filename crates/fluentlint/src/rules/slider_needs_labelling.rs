//! slider-needs-labelling

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "slider-needs-labelling",
    description: "Require Slider components to have an accessible label",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["Slider"],
    label_props: &["label", "aria-label"],
    strategies: LabelStrategies::LABEL_PROPS
        .union(LabelStrategies::FIELD_PARENT)
        .union(LabelStrategies::HTML_FOR)
        .union(LabelStrategies::ARIA_LABELLEDBY),
};

pub fn slider_needs_labelling() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "Slider must have an accessible label",
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
        registry.register(Box::new(slider_needs_labelling()));
        Linter::with_registry(registry)
    }

    #[test]
    fn test_valid_with_aria_label() {
        let linter = create_linter();
        let result = linter.lint_source(r#"<Slider aria-label="Volume" />"#, "test.tsx");
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_valid_with_html_for() {
        let linter = create_linter();
        let result = linter.lint_source(
            r#"<Label htmlFor="vol">Volume</Label><Slider id="vol" />"#,
            "test.tsx",
        );
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_invalid_bare() {
        let linter = create_linter();
        let result = linter.lint_source("<Slider min={0} max={100} />", "test.tsx");
        assert_eq!(result.error_count, 1);
    }

    #[test]
    fn test_wrapping_label_does_not_count() {
        // Unlike Checkbox, Slider does not accept a wrapping label
        let linter = create_linter();
        let result = linter.lint_source("<label>Volume<Slider /></label>", "test.tsx");
        assert_eq!(result.error_count, 1);
    }
}
