//! Classification and line extraction shared by fingerprinting and diffing.
//!
//! [`LinePipeline::comparable_lines`] is the single place that decides
//! text-versus-binary, splits lines, drops ignored lines and normalizes the
//! rest. The fingerprint and the line multiset of a file are both derived from
//! its output, which keeps the two comparisons in agreement.

use std::borrow::Cow;
use std::sync::Arc;

use treecmp_types::ContentKind;

use crate::multiset::LineMultiset;
use crate::normalize::normalize_line;
use crate::rules::RuleSet;

/// Iterator over the lines of a byte buffer.
///
/// A line ends after `\n`, `\r\n`, or a lone `\r`; the terminator stays
/// attached. A trailing line without terminator is yielded as-is.
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    rest: &'a [u8],
}

/// Split `bytes` into lines, keeping terminators.
pub fn split_lines(bytes: &[u8]) -> Lines<'_> {
    Lines { rest: bytes }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.rest.is_empty() {
            return None;
        }
        let end = match self.rest.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) if self.rest[i] == b'\r' && self.rest.get(i + 1) == Some(&b'\n') => i + 2,
            Some(i) => i + 1,
            None => self.rest.len(),
        };
        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}

/// A file's content reduced to what takes part in comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComparableLines<'a> {
    /// Surviving normalized lines, in file order.
    Text(Vec<Cow<'a, [u8]>>),
    /// The raw content, treated as one opaque line.
    Binary(&'a [u8]),
}

impl<'a> ComparableLines<'a> {
    pub fn kind(&self) -> ContentKind {
        match self {
            ComparableLines::Text(_) => ContentKind::Text,
            ComparableLines::Binary(_) => ContentKind::Binary,
        }
    }

    /// Normalized lines in byte-lexicographic order. A binary file yields
    /// its whole content as the single element.
    pub fn sorted(&self) -> Vec<&[u8]> {
        match self {
            ComparableLines::Text(lines) => {
                let mut sorted: Vec<&[u8]> = lines.iter().map(|l| &**l).collect();
                sorted.sort_unstable();
                sorted
            }
            ComparableLines::Binary(raw) => vec![*raw],
        }
    }

    /// Occurrence counts of each comparable line.
    pub fn to_multiset(&self) -> LineMultiset {
        match self {
            ComparableLines::Text(lines) => lines.iter().map(|l| &**l).collect(),
            ComparableLines::Binary(raw) => std::iter::once(*raw).collect(),
        }
    }
}

/// Classifies content and applies ignore rules and normalization.
#[derive(Clone, Debug)]
pub struct LinePipeline {
    rules: Arc<RuleSet>,
}

impl LinePipeline {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Reduce raw file content to its comparable lines.
    ///
    /// Content that is not valid UTF-8 as a whole takes the binary path; ignore
    /// rules and normalization only ever apply to text.
    pub fn comparable_lines<'a>(&self, content: &'a [u8]) -> ComparableLines<'a> {
        if std::str::from_utf8(content).is_err() {
            return ComparableLines::Binary(content);
        }

        let mut kept = Vec::new();
        for line in split_lines(content) {
            if let Some(rule) = self.rules.matching_rule(line) {
                tracing::trace!(rule, "ignoring line");
                continue;
            }
            kept.push(normalize_line(line));
        }
        ComparableLines::Text(kept)
    }

    /// Shorthand for `comparable_lines(content).to_multiset()`.
    pub fn multiset(&self, content: &[u8]) -> LineMultiset {
        self.comparable_lines(content).to_multiset()
    }
}

impl Default for LinePipeline {
    fn default() -> Self {
        Self::new(Arc::new(RuleSet::builtin()))
    }
}
