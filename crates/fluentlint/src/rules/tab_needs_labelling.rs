//! tab-needs-labelling

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "tab-needs-labelling",
    description: "Require icon-only Tab components to have an accessible name",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["Tab"],
    label_props: &["aria-label"],
    strategies: LabelStrategies::TEXT_CONTENT
        .union(LabelStrategies::LABEL_PROPS)
        .union(LabelStrategies::LABELLED_CHILD)
        .union(LabelStrategies::TOOLTIP_PARENT),
};

pub fn tab_needs_labelling() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "Tab without text content must have an accessible name",
        "Add text content, an aria-label prop, or wrap the Tab in a Tooltip",
    )
}
