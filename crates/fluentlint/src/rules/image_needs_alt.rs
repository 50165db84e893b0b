//! image-needs-alt

use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rule::{Rule, RuleCategory, RuleMeta};
use crate::utils::props;
use fluentlint_ast::{AttributeValue, ElementNode, Expression};

static META: RuleMeta = RuleMeta {
    name: "image-needs-alt",
    description: "Require Image components to have alternative text or be marked decorative",
    category: RuleCategory::Labelling,
    fixable: false,
    default_severity: Severity::Error,
};

pub struct ImageNeedsAlt;

/// Whether `aria-hidden` is present and truthy (bare shorthand included)
fn is_hidden(element: &ElementNode) -> bool {
    let Some(attribute) = element.attribute("aria-hidden") else {
        return false;
    };
    match &attribute.value {
        None => true,
        Some(AttributeValue::Literal(t)) => t.content.trim() != "false",
        Some(AttributeValue::Expression(container)) => match &container.expression {
            Expression::BooleanLiteral(b) => *b,
            Expression::StringLiteral(s) => s.trim() != "false",
            _ => true,
        },
    }
}

impl Rule for ImageNeedsAlt {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_element(&self, ctx: &mut LintContext<'_>, element: &ElementNode) {
        if !matches!(element.tag.as_str(), "Image" | "img") {
            return;
        }
        if is_hidden(element) {
            return;
        }
        if ["alt", "aria-label", "title"]
            .iter()
            .any(|name| props::has_non_empty_attribute(element, name))
        {
            return;
        }
        ctx.error_with_help(
            "Image must have alternative text",
            &element.loc,
            "Add an alt prop, or mark a decorative image with aria-hidden",
        );
    }
}
