//! avatar-needs-name

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "avatar-needs-name",
    description: "Require Avatar components to have a name or accessible label",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["Avatar"],
    label_props: &["name", "aria-label"],
    strategies: LabelStrategies::LABEL_PROPS.union(LabelStrategies::ARIA_LABELLEDBY),
};

pub fn avatar_needs_name() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "Avatar must have a name or accessible label",
        "Add a name or aria-label prop, or associate the Avatar via aria-labelledby",
    )
}
