//! Lint context for rule execution.

use crate::config::LintConfig;
use crate::diagnostic::{LintDiagnostic, Severity};
use crate::ids::IdIndex;
use compact_str::CompactString;
use fluentlint_ast::SourceLocation;
use rustc_hash::{FxHashMap, FxHashSet};

/// One entry in the ancestor chain the visitor maintains.
///
/// Expression containers get their own entry so ancestry checks that stop at
/// the first non-element ancestor see the chain as it really nests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AncestorEntry {
    /// An enclosing element, by tag name
    Element { tag: CompactString },
    /// An enclosing `{…}` expression container
    Expression,
}

impl AncestorEntry {
    #[inline]
    pub fn element(tag: impl Into<CompactString>) -> Self {
        Self::Element { tag: tag.into() }
    }

    /// The element tag, if this entry is an element
    #[inline]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element { tag } => Some(tag.as_str()),
            Self::Expression => None,
        }
    }
}

/// Lint context provides utilities for rules during execution.
pub struct LintContext<'a> {
    /// Source code being linted
    pub source: &'a str,
    /// Filename for diagnostics
    pub filename: &'a str,
    /// Cross-reference index for the file being linted
    ids: &'a IdIndex,
    /// Collected diagnostics (pre-allocated capacity)
    diagnostics: Vec<LintDiagnostic>,
    /// Current rule name (set by visitor before calling rule methods)
    pub current_rule: &'static str,
    /// Ancestor stack; the entry on top is the element being checked
    ancestor_stack: Vec<AncestorEntry>,
    /// Optional allow-list of rule names
    enabled_rules: Option<FxHashSet<String>>,
    /// Per-rule severity overrides from config
    severity_overrides: FxHashMap<String, Severity>,
    /// Rules switched off by config
    disabled_rules: FxHashSet<String>,
    /// Cached error count for fast access
    error_count: usize,
    /// Cached warning count for fast access
    warning_count: usize,
}

impl<'a> LintContext<'a> {
    /// Initial capacity for diagnostics vector
    const INITIAL_DIAGNOSTICS_CAPACITY: usize = 16;
    /// Initial capacity for ancestor stack
    const INITIAL_STACK_CAPACITY: usize = 32;

    /// Create a new lint context
    #[inline]
    pub fn new(source: &'a str, filename: &'a str, ids: &'a IdIndex) -> Self {
        Self {
            source,
            filename,
            ids,
            diagnostics: Vec::with_capacity(Self::INITIAL_DIAGNOSTICS_CAPACITY),
            current_rule: "",
            ancestor_stack: Vec::with_capacity(Self::INITIAL_STACK_CAPACITY),
            enabled_rules: None,
            severity_overrides: FxHashMap::default(),
            disabled_rules: FxHashSet::default(),
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Set the allow-list of enabled rules (if None, all rules are enabled)
    #[inline]
    pub fn set_enabled_rules(&mut self, rules: Option<FxHashSet<String>>) {
        self.enabled_rules = rules;
    }

    /// Apply per-rule severity settings from a config
    pub fn set_config(&mut self, config: &LintConfig) {
        for (name, setting) in &config.rules {
            match setting.severity() {
                Some(severity) => {
                    self.severity_overrides.insert(name.clone(), severity);
                }
                None => {
                    self.disabled_rules.insert(name.clone());
                }
            }
        }
    }

    /// The cross-reference index for this file
    #[inline]
    pub fn ids(&self) -> &IdIndex {
        self.ids
    }

    /// Ancestors of the element currently being checked, root first
    #[inline]
    pub fn ancestors(&self) -> &[AncestorEntry] {
        let len = self.ancestor_stack.len();
        &self.ancestor_stack[..len.saturating_sub(1)]
    }

    /// Push an entry onto the ancestor stack
    #[inline]
    pub fn push_ancestor(&mut self, entry: AncestorEntry) {
        self.ancestor_stack.push(entry);
    }

    /// Pop the top ancestor stack entry
    #[inline]
    pub fn pop_ancestor(&mut self) -> Option<AncestorEntry> {
        self.ancestor_stack.pop()
    }

    /// Whether a rule is allowed to report
    #[inline]
    pub fn is_rule_active(&self, rule_name: &str) -> bool {
        if self.disabled_rules.contains(rule_name) {
            return false;
        }
        match &self.enabled_rules {
            Some(set) => set.contains(rule_name),
            None => true,
        }
    }

    /// Report a lint diagnostic.
    ///
    /// Disabled rules are dropped here; severity overrides from config are
    /// applied here so rules stay severity-agnostic.
    pub fn report(&mut self, mut diagnostic: LintDiagnostic) {
        if !self.is_rule_active(diagnostic.rule_name) {
            return;
        }
        if let Some(&severity) = self.severity_overrides.get(diagnostic.rule_name) {
            diagnostic.severity = severity;
        }
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }

    /// Report an error at a location
    #[inline]
    pub fn error(&mut self, message: impl Into<CompactString>, loc: &SourceLocation) {
        self.report(LintDiagnostic::error(
            self.current_rule,
            message,
            loc.start.offset,
            loc.end.offset,
        ));
    }

    /// Report a warning at a location
    #[inline]
    pub fn warn(&mut self, message: impl Into<CompactString>, loc: &SourceLocation) {
        self.report(LintDiagnostic::warn(
            self.current_rule,
            message,
            loc.start.offset,
            loc.end.offset,
        ));
    }

    /// Report an error with help message
    #[inline]
    pub fn error_with_help(
        &mut self,
        message: impl Into<CompactString>,
        loc: &SourceLocation,
        help: impl Into<CompactString>,
    ) {
        self.report(
            LintDiagnostic::error(self.current_rule, message, loc.start.offset, loc.end.offset)
                .with_help(help),
        );
    }

    /// Report a warning with help message
    #[inline]
    pub fn warn_with_help(
        &mut self,
        message: impl Into<CompactString>,
        loc: &SourceLocation,
        help: impl Into<CompactString>,
    ) {
        self.report(
            LintDiagnostic::warn(self.current_rule, message, loc.start.offset, loc.end.offset)
                .with_help(help),
        );
    }

    /// Get collected diagnostics
    #[inline]
    pub fn into_diagnostics(self) -> Vec<LintDiagnostic> {
        self.diagnostics
    }

    /// Get reference to collected diagnostics
    #[inline]
    pub fn diagnostics(&self) -> &[LintDiagnostic] {
        &self.diagnostics
    }

    /// Get the error count (cached, O(1))
    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Get the warning count (cached, O(1))
    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }
}
