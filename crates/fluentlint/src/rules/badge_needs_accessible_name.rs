//! badge-needs-accessible-name

use crate::context::LintContext;
use crate::diagnostic::{Fix, LintDiagnostic, Severity, TextEdit};
use crate::rule::{Rule, RuleCategory, RuleMeta};
use crate::utils::{props, text};
use fluentlint_ast::{AttributeValue, ElementNode, Expression};

static META: RuleMeta = RuleMeta {
    name: "badge-needs-accessible-name",
    description: "Require Badge components to have an accessible name",
    category: RuleCategory::Labelling,
    fixable: true,
    default_severity: Severity::Error,
};

pub struct BadgeNeedsAccessibleName;

/// The icon element of `icon={<SendIcon />}`, when the prop holds exactly
/// one embedded element
fn icon_element(element: &ElementNode) -> Option<&ElementNode> {
    match &element.attribute("icon")?.value {
        Some(AttributeValue::Expression(container)) => match &container.expression {
            Expression::Element(icon) => Some(icon),
            _ => None,
        },
        _ => None,
    }
}

impl Rule for BadgeNeedsAccessibleName {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_element(&self, ctx: &mut LintContext<'_>, element: &ElementNode) {
        if element.tag != "Badge" {
            return;
        }
        if text::has_text_content(element) || props::has_non_empty_attribute(element, "aria-label")
        {
            return;
        }
        let icon = icon_element(element);
        if icon.is_some_and(|icon| props::has_non_empty_attribute(icon, "aria-label")) {
            return;
        }

        let mut diagnostic = LintDiagnostic::error(
            ctx.current_rule,
            "Badge must have an accessible name",
            element.loc.start.offset,
            element.loc.end.offset,
        )
        .with_help("Add text content or an aria-label to the Badge or its icon");

        // Unlabelled icon elements get an insertion point for the label
        if let Some(icon) = icon {
            if !icon.has_attribute("aria-label") {
                diagnostic = diagnostic.with_fix(Fix::new(
                    "Add an aria-label to the Badge icon",
                    TextEdit::insert(icon.tag_loc.end.offset, " aria-label=\"\""),
                ));
            }
        }

        ctx.report(diagnostic);
    }
}
