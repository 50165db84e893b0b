//! Labelling policy engine.
//!
//! Most rules in this crate say the same thing: "component X needs an
//! accessible name, obtainable these ways". A [`LabellingPolicy`] captures
//! the component targets, the inline label props, and the set of accepted
//! strategies; [`PolicyRule`] turns one into a [`Rule`]. The per-rule
//! modules are thin declarations on top of this.

use bitflags::bitflags;

use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, Severity};
use crate::ids::IdIndex;
use crate::rule::{Rule, RuleMeta};
use crate::utils::{ancestry, images, labels, props, text};
use fluentlint_ast::ElementNode;

bitflags! {
    /// Ways an element can obtain an accessible name
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LabelStrategies: u16 {
        /// A `Field` ancestor labels its control
        const FIELD_PARENT     = 1 << 0;
        /// One of the policy's inline label props is non-empty
        const LABEL_PROPS      = 1 << 1;
        /// A `label`/`Label` ancestor wraps the element
        const WRAPPING_LABEL   = 1 << 2;
        /// The element's `id` is targeted by some `htmlFor`
        const HTML_FOR         = 1 << 3;
        /// `aria-labelledby` resolves to a declared id
        const ARIA_LABELLEDBY  = 1 << 4;
        /// `aria-describedby` resolves to a declared id
        const ARIA_DESCRIBEDBY = 1 << 5;
        /// A descendant carries the name (icon, image, titled element)
        const LABELLED_CHILD   = 1 << 6;
        /// A `Tooltip` directly wraps the element
        const TOOLTIP_PARENT   = 1 << 7;
        /// The element has visible text content of its own
        const TEXT_CONTENT     = 1 << 8;
    }
}

/// A labelling requirement for a set of component targets
#[derive(Debug, Clone, Copy)]
pub struct LabellingPolicy {
    /// Component names this policy applies to (exact match)
    pub targets: &'static [&'static str],
    /// Props accepted as inline labels when LABEL_PROPS is set
    pub label_props: &'static [&'static str],
    /// Accepted labelling strategies
    pub strategies: LabelStrategies,
}

impl LabellingPolicy {
    /// Whether this policy applies to the given tag
    #[inline]
    pub fn applies_to(&self, tag: &str) -> bool {
        self.targets.contains(&tag)
    }
}

/// Whether the element satisfies any enabled strategy.
///
/// Evaluation short-circuits in a fixed order, cheapest checks first, so a
/// satisfied element costs one predicate and a failing element costs at most
/// one pass over each enabled strategy.
pub fn evaluate(
    policy: &LabellingPolicy,
    element: &ElementNode,
    ancestors: &[crate::context::AncestorEntry],
    ids: &IdIndex,
) -> bool {
    let strategies = policy.strategies;

    if strategies.contains(LabelStrategies::FIELD_PARENT) && ancestry::has_field_parent(ancestors) {
        return true;
    }
    if strategies.contains(LabelStrategies::TEXT_CONTENT) && text::has_text_content(element) {
        return true;
    }
    if strategies.contains(LabelStrategies::LABEL_PROPS)
        && policy
            .label_props
            .iter()
            .any(|prop| props::has_non_empty_attribute(element, prop))
    {
        return true;
    }
    if strategies.contains(LabelStrategies::WRAPPING_LABEL)
        && ancestry::is_inside_label_tag(ancestors)
    {
        return true;
    }
    if strategies.contains(LabelStrategies::HTML_FOR)
        && labels::has_label_with_html_for(element, ids)
    {
        return true;
    }
    if strategies.contains(LabelStrategies::ARIA_LABELLEDBY)
        && labels::has_associated_labelled_by(element, ids)
    {
        return true;
    }
    if strategies.contains(LabelStrategies::ARIA_DESCRIBEDBY)
        && labels::has_associated_described_by(element, ids)
    {
        return true;
    }
    if strategies.contains(LabelStrategies::TOOLTIP_PARENT) && ancestry::has_tooltip_parent(ancestors)
    {
        return true;
    }
    if strategies.contains(LabelStrategies::LABELLED_CHILD)
        && images::has_labelled_child(element, ids)
    {
        return true;
    }

    false
}

/// A [`Rule`] enforcing one [`LabellingPolicy`]
pub struct PolicyRule {
    meta: &'static RuleMeta,
    policy: LabellingPolicy,
    message: &'static str,
    help: &'static str,
}

impl PolicyRule {
    /// Bind a policy to rule metadata and messages.
    ///
    /// An empty strategy set could never pass, so it is rejected as a
    /// construction defect.
    pub fn new(
        meta: &'static RuleMeta,
        policy: LabellingPolicy,
        message: &'static str,
        help: &'static str,
    ) -> Self {
        debug_assert!(
            !policy.strategies.is_empty(),
            "labelling policy for {} has no strategies",
            meta.name
        );
        Self {
            meta,
            policy,
            message,
            help,
        }
    }

    /// The bound policy
    #[inline]
    pub fn policy(&self) -> &LabellingPolicy {
        &self.policy
    }
}

impl Rule for PolicyRule {
    fn meta(&self) -> &'static RuleMeta {
        self.meta
    }

    fn strategies(&self) -> Option<LabelStrategies> {
        Some(self.policy.strategies)
    }

    fn check_element(&self, ctx: &mut LintContext<'_>, element: &ElementNode) {
        if !self.policy.applies_to(&element.tag) {
            return;
        }
        if evaluate(&self.policy, element, ctx.ancestors(), ctx.ids()) {
            return;
        }

        let diagnostic = match self.meta.default_severity {
            Severity::Error => LintDiagnostic::error(
                self.meta.name,
                self.message,
                element.loc.start.offset,
                element.loc.end.offset,
            ),
            Severity::Warning => LintDiagnostic::warn(
                self.meta.name,
                self.message,
                element.loc.start.offset,
                element.loc.end.offset,
            ),
        };
        ctx.report(diagnostic.with_help(self.help));
    }
}
