//! compound-button-needs-labelling

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "compound-button-needs-labelling",
    description: "Require icon-only CompoundButton components to have an accessible name",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["CompoundButton"],
    label_props: &["title", "aria-label", "secondaryContent"],
    strategies: LabelStrategies::TEXT_CONTENT
        .union(LabelStrategies::LABEL_PROPS)
        .union(LabelStrategies::ARIA_LABELLEDBY)
        .union(LabelStrategies::LABELLED_CHILD),
};

pub fn compound_button_needs_labelling() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "CompoundButton without text content must have an accessible name",
        "Add text content, a title, aria-label, or secondaryContent prop, or associate it via aria-labelledby",
    )
}
