//! Ignore rules: lines whose variation between copies is noise.
//!
//! A [`RuleSet`] is an ordered list of named [`IgnoreRule`]s. Rules see the
//! UTF-8-decoded, trimmed line; lines that fail to decode are never ignored.

use std::fmt;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::error::{RuleError, RuleResult};

/// DNS zone serial counter, e.g. `2024010101 ; serial`. Matched against the
/// whole trimmed line.
pub const SERIAL_PATTERN: &str = r"^\s*\d+\s*;\s*serial\s*$";

/// Auto-generated record identifier, e.g.
/// `version 3 TXT 0f8fad5b-d9cb-469f-a165-70867728950e`. Searched anywhere in
/// the line.
pub const UUID_TXT_PATTERN: &str =
    r"version\s+\d+\s+TXT\s+[0-9a-f]{8}-([0-9a-f]{4}-){3}[0-9a-f]{12}";

static SERIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    case_insensitive(SERIAL_PATTERN).expect("built-in serial pattern compiles")
});

static UUID_TXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    case_insensitive(UUID_TXT_PATTERN).expect("built-in uuid pattern compiles")
});

fn case_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// A named matcher for lines that must be excluded from comparison.
pub trait IgnoreRule: Send + Sync + fmt::Debug {
    /// Short identifier used in logs and configuration.
    fn name(&self) -> &str;

    /// Whether the trimmed line should be ignored.
    fn matches(&self, line: &str) -> bool;
}

/// A case-insensitive regular expression rule.
#[derive(Clone, Debug)]
pub struct PatternRule {
    name: String,
    regex: Regex,
}

impl PatternRule {
    /// Compile a rule. With `anchored`, the pattern must match the entire
    /// trimmed line; otherwise it may match anywhere.
    pub fn new(name: impl Into<String>, pattern: &str, anchored: bool) -> RuleResult<Self> {
        let name = name.into();
        let source = if anchored {
            format!("^(?:{pattern})$")
        } else {
            pattern.to_string()
        };
        let regex = case_insensitive(&source).map_err(|source| RuleError::InvalidPattern {
            name: name.clone(),
            source,
        })?;
        Ok(Self { name, regex })
    }

    /// The built-in `serial` rule.
    pub fn serial() -> Self {
        Self {
            name: "serial".to_string(),
            regex: SERIAL_RE.clone(),
        }
    }

    /// The built-in `uuid-txt` rule.
    pub fn uuid_txt() -> Self {
        Self {
            name: "uuid-txt".to_string(),
            regex: UUID_TXT_RE.clone(),
        }
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl IgnoreRule for PatternRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// Ordered collection of ignore rules. Defaults to the built-in rules.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Box<dyn IgnoreRule>>,
}

impl RuleSet {
    /// A rule set that ignores nothing.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The `serial` and `uuid-txt` rules, in that order.
    pub fn builtin() -> Self {
        Self::empty()
            .with_rule(PatternRule::serial())
            .with_rule(PatternRule::uuid_txt())
    }

    pub fn with_rule(mut self, rule: impl IgnoreRule + 'static) -> Self {
        self.push(Box::new(rule));
        self
    }

    pub fn push(&mut self, rule: Box<dyn IgnoreRule>) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name())
    }

    /// Name of the first rule that ignores this raw line, if any.
    pub fn matching_rule(&self, line: &[u8]) -> Option<&str> {
        let text = std::str::from_utf8(line).ok()?.trim();
        self.rules
            .iter()
            .find(|rule| rule.matches(text))
            .map(|rule| rule.name())
    }

    /// Whether this raw line is excluded from fingerprinting and diffing.
    pub fn should_ignore(&self, line: &[u8]) -> bool {
        self.matching_rule(line).is_some()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_line_is_ignored() {
        let rules = RuleSet::builtin();
        assert!(rules.should_ignore(b"2024010101 ; serial\n"));
        assert!(rules.should_ignore(b"\t\t2024010101;serial"));
        assert!(rules.should_ignore(b"  9 ; SERIAL  \r\n"));
        assert_eq!(rules.matching_rule(b"1 ; Serial"), Some("serial"));
    }

    #[test]
    fn serial_must_be_whole_line() {
        let rules = RuleSet::builtin();
        assert!(!rules.should_ignore(b"2024010101 ; serial number"));
        assert!(!rules.should_ignore(b"@ IN SOA ns1 ( 2024010101 ; serial"));
        assert!(!rules.should_ignore(b"abc ; serial"));
    }

    #[test]
    fn uuid_record_is_ignored_anywhere_in_line() {
        let rules = RuleSet::builtin();
        let line = b"_meta IN TXT \"x\" version 12 TXT 0F8FAD5B-D9CB-469F-A165-70867728950E\n";
        assert!(rules.should_ignore(line));
        assert_eq!(rules.matching_rule(line), Some("uuid-txt"));
    }

    #[test]
    fn malformed_uuid_is_kept() {
        let rules = RuleSet::builtin();
        assert!(!rules.should_ignore(b"version 1 TXT 0f8fad5b-d9cb-469f-a165"));
        assert!(!rules.should_ignore(b"version TXT 0f8fad5b-d9cb-469f-a165-70867728950e"));
    }

    #[test]
    fn binary_lines_are_never_ignored() {
        let mut rules = RuleSet::builtin();
        rules.push(Box::new(PatternRule::new("all", ".*", false).unwrap()));
        assert!(!rules.should_ignore(b"12 ; serial\xff"));
        assert!(rules.should_ignore(b"anything"));
    }

    #[test]
    fn empty_set_ignores_nothing() {
        let rules = RuleSet::empty();
        assert!(rules.is_empty());
        assert!(!rules.should_ignore(b"1 ; serial"));
    }

    #[test]
    fn anchored_custom_rule() {
        let rule = PatternRule::new("ttl", r"\$TTL\s+\d+", true).unwrap();
        assert!(rule.matches("$ttl 3600"));
        assert!(!rule.matches("$TTL 3600 ; comment"));

        let search = PatternRule::new("ttl", r"\$TTL\s+\d+", false).unwrap();
        assert!(search.matches("$TTL 3600 ; comment"));
    }

    #[test]
    fn invalid_pattern_reports_rule_name() {
        let err = PatternRule::new("broken", "(unclosed", false).unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { ref name, .. } if name == "broken"));
    }

    #[test]
    fn builtin_order() {
        let rules = RuleSet::default();
        let names: Vec<_> = rules.names().collect();
        assert_eq!(names, vec!["serial", "uuid-txt"]);
    }
}
