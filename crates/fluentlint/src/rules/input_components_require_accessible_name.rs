//! input-components-require-accessible-name

use crate::diagnostic::Severity;
use crate::policy::{LabelStrategies, LabellingPolicy, PolicyRule};
use crate::rule::{RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "input-components-require-accessible-name",
    description: "Require text input components to have an accessible name",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

const POLICY: LabellingPolicy = LabellingPolicy {
    targets: &["Input", "Textarea", "SearchBox", "TimePicker", "DatePicker"],
    label_props: &["aria-label"],
    strategies: LabelStrategies::LABEL_PROPS
        .union(LabelStrategies::FIELD_PARENT)
        .union(LabelStrategies::WRAPPING_LABEL)
        .union(LabelStrategies::HTML_FOR)
        .union(LabelStrategies::ARIA_LABELLEDBY),
};

pub fn input_components_require_accessible_name() -> PolicyRule {
    PolicyRule::new(
        &META,
        POLICY,
        "Input component must have an accessible name",
        "Wrap the input in a Field or Label, add an aria-label prop, or associate a Label via htmlFor",
    )
}
