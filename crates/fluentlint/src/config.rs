//! Linter configuration.
//!
//! A config is a JSON table mapping rule names to a severity setting, the
//! same shape an ESLint `rules` block takes:
//!
//! ```json
//! { "rules": { "checkbox-needs-labelling": "warn", "image-needs-alt": "off" } }
//! ```

use crate::diagnostic::Severity;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-rule severity setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetting {
    Error,
    Warn,
    Off,
}

impl RuleSetting {
    /// The reporting severity, or `None` when the rule is off
    #[inline]
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Self::Error => Some(Severity::Error),
            Self::Warn => Some(Severity::Warning),
            Self::Off => None,
        }
    }
}

/// Lint configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintConfig {
    /// Rule name to severity setting
    #[serde(default)]
    pub rules: FxHashMap<String, RuleSetting>,
}

/// Configuration load error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid lint config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LintConfig {
    /// Parse a config from its JSON form
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set a rule's severity
    pub fn set(&mut self, rule: impl Into<String>, setting: RuleSetting) -> &mut Self {
        self.rules.insert(rule.into(), setting);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config = LintConfig::from_json(
            r#"{ "rules": { "checkbox-needs-labelling": "warn", "image-needs-alt": "off" } }"#,
        )
        .unwrap();
        assert_eq!(
            config.rules.get("checkbox-needs-labelling"),
            Some(&RuleSetting::Warn)
        );
        assert_eq!(config.rules.get("image-needs-alt"), Some(&RuleSetting::Off));
    }

    #[test]
    fn test_empty_config() {
        let config = LintConfig::from_json("{}").unwrap();
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_invalid_setting_is_an_error() {
        assert!(LintConfig::from_json(r#"{ "rules": { "x": "loud" } }"#).is_err());
    }

    #[test]
    fn test_setting_severity() {
        assert_eq!(RuleSetting::Error.severity(), Some(Severity::Error));
        assert_eq!(RuleSetting::Warn.severity(), Some(Severity::Warning));
        assert_eq!(RuleSetting::Off.severity(), None);
    }
}
