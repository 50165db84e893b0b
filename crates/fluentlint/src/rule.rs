//! Rule trait and registry for lint rules.

use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::policy::LabelStrategies;
use fluentlint_ast::{ElementNode, JsxRoot};

/// Rule category for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Naming and labelling rules for interactive components
    Labelling,
    /// Structural rules (required children, required attributes)
    Structure,
}

/// Rule metadata
pub struct RuleMeta {
    /// Rule name (e.g., "checkbox-needs-labelling")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Rule category
    pub category: RuleCategory,
    /// Whether rule is auto-fixable
    pub fixable: bool,
    /// Default severity
    pub default_severity: Severity,
}

/// Rule trait for implementing lint rules
///
/// Rules implement visitor-like methods that are called during AST traversal.
/// Each method receives a mutable reference to LintContext for reporting diagnostics.
pub trait Rule: Send + Sync {
    /// Get rule metadata
    fn meta(&self) -> &'static RuleMeta;

    /// The labelling strategy set, for policy-driven rules
    fn strategies(&self) -> Option<LabelStrategies> {
        None
    }

    /// Run on the root node (called once per file)
    #[allow(unused_variables)]
    fn check_root(&self, ctx: &mut LintContext<'_>, root: &JsxRoot) {}

    /// Called when entering an element node
    #[allow(unused_variables)]
    fn check_element(&self, ctx: &mut LintContext<'_>, element: &ElementNode) {}
}

/// Registry holding all enabled lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Create registry with all built-in rules enabled
    pub fn with_recommended() -> Self {
        let mut registry = Self::new();

        // ============================================
        // Form control labelling (Error)
        // ============================================
        // Controls whose accessible name comes from a label prop, a Field
        // or label wrapper, or an aria cross-reference.

        registry.register(Box::new(crate::rules::checkbox_needs_labelling()));
        registry.register(Box::new(crate::rules::switch_needs_labelling()));
        registry.register(Box::new(crate::rules::slider_needs_labelling()));
        registry.register(Box::new(crate::rules::spin_button_needs_labelling()));
        registry.register(Box::new(crate::rules::spinner_needs_labelling()));
        registry.register(Box::new(crate::rules::combobox_needs_labelling()));
        registry.register(Box::new(crate::rules::dropdown_needs_labelling()));
        registry.register(Box::new(crate::rules::progressbar_needs_labelling()));
        registry.register(Box::new(crate::rules::radio_button_missing_label()));
        registry.register(Box::new(crate::rules::radio_group_missing_label()));
        registry.register(Box::new(
            crate::rules::input_components_require_accessible_name(),
        ));

        // ============================================
        // Landmark and container labelling (Error)
        // ============================================

        registry.register(Box::new(crate::rules::breadcrumb_needs_labelling()));
        registry.register(Box::new(crate::rules::toolbar_missing_aria()));
        registry.register(Box::new(crate::rules::tablist_needs_labelling()));
        registry.register(Box::new(crate::rules::dialog_surface_needs_aria()));

        // ============================================
        // Content-labelled components (Error)
        // ============================================
        // Components that usually get their name from visible content, with
        // icon-only usages caught through child and tooltip inspection.

        registry.register(Box::new(crate::rules::tab_needs_labelling()));
        registry.register(Box::new(crate::rules::menu_item_needs_labelling()));
        registry.register(Box::new(crate::rules::compound_button_needs_labelling()));
        registry.register(Box::new(crate::rules::link_missing_labelling()));
        registry.register(Box::new(crate::rules::avatar_needs_name()));

        // ============================================
        // Structural rules
        // ============================================

        registry.register(Box::new(crate::rules::AccordionItemNeedsHeaderAndPanel));
        registry.register(Box::new(crate::rules::BadgeNeedsAccessibleName));
        registry.register(Box::new(crate::rules::ImageNeedsAlt));

        registry
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_recommended()
    }
}
