//! menu-item-needs-labelling

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "menu-item-needs-labelling",
    description: "Require icon-only MenuItem components to have an accessible name",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["MenuItem"],
    label_props: &["aria-label"],
    strategies: LabelStrategies::TEXT_CONTENT
        .union(LabelStrategies::LABEL_PROPS)
        .union(LabelStrategies::LABELLED_CHILD)
        .union(LabelStrategies::TOOLTIP_PARENT),
};

pub fn menu_item_needs_labelling() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "MenuItem without text content must have an accessible name",
        "Add text content, an aria-label prop, or wrap the MenuItem in a Tooltip",
    )
}
