//! progressbar-needs-labelling
//!
//! A ProgressBar has no inline label prop; its accessible name and
//! description come from a Field wrapper or aria cross-references.

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "progressbar-needs-labelling",
    description: "Require ProgressBar components to be labelled or described",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["ProgressBar"],
    label_props: &[],
    strategies: LabelStrategies::FIELD_PARENT
        .union(LabelStrategies::HTML_FOR)
        .union(LabelStrategies::ARIA_LABELLEDBY)
        .union(LabelStrategies::ARIA_DESCRIBEDBY),
};

pub fn progressbar_needs_labelling() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "ProgressBar must be labelled or described",
        "Wrap it in a Field, or associate it via htmlFor, aria-labelledby, or aria-describedby",
    )
}
