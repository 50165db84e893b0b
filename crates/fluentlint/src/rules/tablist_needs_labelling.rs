//! tablist-needs-labelling

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "tablist-needs-labelling",
    description: "Require TabList components to have an accessible name",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["TabList"],
    label_props: &["aria-label"],
    strategies: LabelStrategies::LABEL_PROPS.union(LabelStrategies::ARIA_LABELLEDBY),
};

pub fn tablist_needs_labelling() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "TabList must have an accessible name",
        "Add an aria-label prop or associate the TabList via aria-labelledby",
    )
}
