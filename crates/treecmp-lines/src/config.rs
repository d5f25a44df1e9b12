//! Serializable ignore-rule configuration.
//!
//! ```toml
//! builtin_rules = true
//!
//! [[rules]]
//! name = "soa-refresh"
//! pattern = '^\d+\s*;\s*refresh$'
//! anchored = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RuleError, RuleResult};
use crate::rules::{PatternRule, RuleSet};

/// An injectable list of ignore rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Whether the built-in `serial` and `uuid-txt` rules are included.
    pub builtin_rules: bool,
    /// Additional rules, evaluated after the built-ins in listed order.
    pub rules: Vec<RuleSpec>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            builtin_rules: true,
            rules: Vec::new(),
        }
    }
}

/// One configured regular-expression rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub name: String,
    pub pattern: String,
    /// Require the pattern to match the whole trimmed line.
    #[serde(default)]
    pub anchored: bool,
}

impl RuleSpec {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, anchored: bool) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            anchored,
        }
    }
}

impl RulesConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> RuleResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: &Path) -> RuleResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| RuleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Compile the configured rules into a [`RuleSet`].
    pub fn build(&self) -> RuleResult<RuleSet> {
        let mut set = if self.builtin_rules {
            RuleSet::builtin()
        } else {
            RuleSet::empty()
        };
        for spec in &self.rules {
            let rule = PatternRule::new(spec.name.clone(), &spec.pattern, spec.anchored)?;
            set.push(Box::new(rule));
        }
        tracing::debug!(rules = ?set.names().collect::<Vec<_>>(), "ignore rules compiled");
        Ok(set)
    }
}
