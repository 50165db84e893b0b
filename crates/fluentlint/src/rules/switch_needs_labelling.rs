//! switch-needs-labelling

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "switch-needs-labelling",
    description: "Require Switch components to have an accessible label",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["Switch"],
    label_props: &["label"],
    strategies: LabelStrategies::LABEL_PROPS
        .union(LabelStrategies::FIELD_PARENT)
        .union(LabelStrategies::WRAPPING_LABEL)
        .union(LabelStrategies::HTML_FOR)
        .union(LabelStrategies::ARIA_LABELLEDBY),
};

pub fn switch_needs_labelling() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "Switch must have an accessible label",
        "Add a label prop, wrap it in a Field or label, or associate it via htmlFor or aria-labelledby",
    )
}
