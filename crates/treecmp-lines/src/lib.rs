//! Line pipeline for treecmp.
//!
//! Everything that decides what a "line" is and whether it counts lives
//! here, so the fingerprint fast path and the multiset slow path share one
//! implementation.
//!
//! # Key Types
//!
//! - [`normalize_line`] -- Whitespace canonicalization of one line
//! - [`IgnoreRule`] / [`RuleSet`] -- Named matchers for noise lines
//! - [`RulesConfig`] -- Serializable, injectable rule list
//! - [`LinePipeline`] / [`ComparableLines`] -- Classify, split, filter, normalize
//! - [`LineMultiset`] -- Normalized line -> occurrence count
//! - [`render_line`] -- Terminal-safe display of a single line

pub mod config;
pub mod content;
pub mod display;
pub mod error;
pub mod multiset;
pub mod normalize;
pub mod rules;

pub use config::{RuleSpec, RulesConfig};
pub use content::{split_lines, ComparableLines, LinePipeline};
pub use display::{render_line, render_line_with_width, MAX_DISPLAY_CHARS};
pub use error::{RuleError, RuleResult};
pub use multiset::LineMultiset;
pub use normalize::{normalize_line, normalize_str};
pub use rules::{IgnoreRule, PatternRule, RuleSet, SERIAL_PATTERN, UUID_TXT_PATTERN};
