//! combobox-needs-labelling

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "combobox-needs-labelling",
    description: "Require Combobox components to have an accessible label",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["Combobox"],
    label_props: &["label", "aria-label"],
    strategies: LabelStrategies::LABEL_PROPS
        .union(LabelStrategies::FIELD_PARENT)
        .union(LabelStrategies::WRAPPING_LABEL)
        .union(LabelStrategies::HTML_FOR)
        .union(LabelStrategies::ARIA_LABELLEDBY),
};

pub fn combobox_needs_labelling() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "Combobox must have an accessible label",
        "Add a label or aria-label prop, wrap it in a Field or label, or associate it via htmlFor or aria-labelledby",
    )
}
