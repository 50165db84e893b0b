//! # fluentlint
//!
//! Accessibility linter for Fluent UI React JSX.
//!
//! Fluent UI components render their own DOM, so generic JSX a11y tooling
//! misses them: a `Checkbox` gets its accessible name from a `label` prop or
//! an enclosing `Field`, a `Tab` from its text content or a wrapping
//! `Tooltip`, a `Badge` from its icon's `aria-label`. fluentlint knows the
//! labelling contract of each component and flags usages no screen reader can
//! name.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fluentlint::{format_results, Linter, OutputFormat};
//!
//! let linter = Linter::new();
//! let source = r#"<Checkbox label="Accept terms" />"#;
//! let result = linter.lint_source(source, "form.tsx");
//!
//! if result.has_errors() {
//!     let output = format_results(
//!         &[result],
//!         &[("form.tsx".to_string(), source.to_string())],
//!         OutputFormat::Text,
//!     );
//!     println!("{}", output);
//! }
//! ```
//!
//! ## Rules
//!
//! ### Form control labelling
//! - `checkbox-needs-labelling` - Checkbox needs a label, Field, or aria reference
//! - `switch-needs-labelling` - Switch needs a label, Field, or aria reference
//! - `slider-needs-labelling` - Slider needs a label or aria reference
//! - `spin-button-needs-labelling` - SpinButton needs a label or aria reference
//! - `spinner-needs-labelling` - Spinner needs a label or aria-labelledby
//! - `combobox-needs-labelling` - Combobox needs a label, Field, or aria reference
//! - `dropdown-needs-labelling` - Dropdown needs a label, Field, or aria reference
//! - `progressbar-needs-labelling` - ProgressBar needs a Field or aria reference
//! - `radio-button-missing-label` - Radio needs a label, Field, or aria-labelledby
//! - `radio-group-missing-label` - RadioGroup needs a label or aria reference
//! - `input-components-require-accessible-name` - Input, Textarea, SearchBox,
//!   TimePicker and DatePicker need a label association
//!
//! ### Landmark and container labelling
//! - `breadcrumb-needs-labelling` - Breadcrumb needs an aria label
//! - `toolbar-missing-aria` - Toolbar needs an aria label
//! - `tablist-needs-labelling` - TabList needs an aria label
//! - `dialogsurface-needs-aria` - DialogSurface needs an aria name or description
//!
//! ### Content-labelled components
//! - `tab-needs-labelling` - icon-only Tab needs an accessible name
//! - `menu-item-needs-labelling` - icon-only MenuItem needs an accessible name
//! - `compound-button-needs-labelling` - icon-only CompoundButton needs an accessible name
//! - `link-missing-labelling` - Link without text needs an accessible name
//! - `avatar-needs-name` - Avatar needs a name or aria label
//!
//! ### Structural rules
//! - `accordion-item-needs-header-and-panel` - AccordionItem needs exactly one header and panel
//! - `badge-needs-accessible-name` - Badge needs text, an aria-label, or a labelled icon (fixable)
//! - `image-needs-alt` - Image needs alt text or aria-hidden

mod config;
mod context;
mod diagnostic;
mod ids;
mod linter;
pub mod output;
mod policy;
mod rule;
pub mod rules;
pub mod utils;
mod visitor;

pub use config::{ConfigError, LintConfig, RuleSetting};
pub use context::{AncestorEntry, LintContext};
pub use diagnostic::{Fix, Label, LintDiagnostic, LintSummary, Severity, TextEdit};
pub use ids::IdIndex;
pub use linter::{LintResult, Linter};
pub use output::{format_results, format_summary, OutputFormat};
pub use policy::{LabelStrategies, LabellingPolicy, PolicyRule};
pub use rule::{Rule, RuleCategory, RuleMeta, RuleRegistry};

/// Lint a JSX source fragment with the recommended rules
///
/// This is a convenience function for simple use cases.
/// For more control, use `Linter::new()` directly.
pub fn lint(source: &str, filename: &str) -> LintResult {
    Linter::new().lint_source(source, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_function() {
        let result = lint("<Checkbox />", "test.tsx");
        assert!(result.has_errors());
    }

    #[test]
    fn test_lint_valid_source() {
        let result = lint(
            r#"<Field label="Accept"><Checkbox /></Field>"#,
            "test.tsx",
        );
        assert!(!result.has_errors());
    }
}
