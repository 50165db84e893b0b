//! accordion-item-needs-header-and-panel

use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rule::{Rule, RuleCategory, RuleMeta};
use fluentlint_ast::{ElementNode, JsxChild};

static META: RuleMeta = RuleMeta {
    name: "accordion-item-needs-header-and-panel",
    description: "Require AccordionItem to contain exactly one header and one panel",
    category: RuleCategory::Structure,
    fixable: false,
    default_severity: Severity::Error,
};

pub struct AccordionItemNeedsHeaderAndPanel;

impl Rule for AccordionItemNeedsHeaderAndPanel {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_element(&self, ctx: &mut LintContext<'_>, element: &ElementNode) {
        if element.tag != "AccordionItem" {
            return;
        }

        let mut headers = 0usize;
        let mut panels = 0usize;
        let mut others = 0usize;
        for child in &element.children {
            let JsxChild::Element(child) = child else {
                continue;
            };
            match child.tag.as_str() {
                "AccordionHeader" => headers += 1,
                "AccordionPanel" => panels += 1,
                _ => others += 1,
            }
        }

        if headers != 1 || panels != 1 || others != 0 {
            ctx.error_with_help(
                "AccordionItem must have exactly one AccordionHeader and one AccordionPanel",
                &element.loc,
                "Give each AccordionItem an AccordionHeader followed by an AccordionPanel",
            );
        }
    }
}
