//! dialogsurface-needs-aria

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "dialogsurface-needs-aria",
    description: "Require DialogSurface components to have an accessible name and description",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["DialogSurface"],
    label_props: &["aria-label"],
    strategies: LabelStrategies::LABEL_PROPS
        .union(LabelStrategies::ARIA_LABELLEDBY)
        .union(LabelStrategies::ARIA_DESCRIBEDBY),
};

pub fn dialog_surface_needs_aria() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "DialogSurface must have an accessible name",
        "Add an aria-label prop, or point aria-labelledby or aria-describedby at the DialogTitle or DialogContent id",
    )
}
