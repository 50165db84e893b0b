//! link-missing-labelling

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "link-missing-labelling",
    description: "Require Link components without text content to have an accessible name",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["Link"],
    label_props: &["aria-label"],
    strategies: LabelStrategies::TEXT_CONTENT
        .union(LabelStrategies::LABEL_PROPS)
        .union(LabelStrategies::ARIA_LABELLEDBY)
        .union(LabelStrategies::LABELLED_CHILD),
};

pub fn link_missing_labelling() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "Link without text content must have an accessible name",
        "Add text content, an aria-label prop, or a labelled image child",
    )
}
