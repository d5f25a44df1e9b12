use std::collections::BTreeMap;
use std::fmt;

use colored::Colorize;
use serde::Serialize;
use treecmp_diff::{LineMultisetDiff, TreeDiffResult};
use treecmp_index::ScanWarning;
use treecmp_lines::render_line;

/// Human-readable report. Sections with nothing to show are omitted.
pub struct TextReport<'a>(pub &'a TreeDiffResult);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        if !result.added.is_empty() {
            writeln!(f, "{} ({})", "Added files".green().bold(), result.added.len())?;
            for path in &result.added {
                writeln!(f, "  {} {}", "+".green(), path)?;
            }
        }

        if !result.removed.is_empty() {
            writeln!(f, "{} ({})", "Removed files".red().bold(), result.removed.len())?;
            for path in &result.removed {
                writeln!(f, "  {} {}", "-".red(), path)?;
            }
        }

        if !result.modified.is_empty() {
            writeln!(f, "{} ({})", "Modified files".yellow().bold(), result.modified.len())?;
            for path in result.modified.keys() {
                writeln!(f, "  {} {}", "*".yellow(), path)?;
            }
            for (path, diff) in &result.modified {
                writeln!(f)?;
                writeln!(f, "{} {}", "Differences in".bold(), path.bold())?;
                write_file_diff(f, diff)?;
            }
        }

        if !result.common.is_empty() {
            if !result.is_identical() {
                writeln!(f)?;
            }
            writeln!(f, "{} ({})", "Unchanged files".bold(), result.common.len())?;
        }

        if !result.skipped.is_empty() {
            writeln!(f, "{} ({})", "Skipped files".dimmed(), result.skipped.len())?;
            for path in &result.skipped {
                writeln!(f, "  {} {}", "?".dimmed(), path)?;
            }
        }

        if !result.warnings.is_empty() {
            writeln!(f, "{} ({})", "Warnings".red(), result.warnings.len())?;
            for warning in &result.warnings {
                writeln!(f, "  {} {}", "!".red(), warning)?;
            }
        }

        if result.is_identical() {
            writeln!(f, "{} No differences.", "✓".green().bold())?;
        }
        Ok(())
    }
}

fn write_file_diff(f: &mut fmt::Formatter<'_>, diff: &LineMultisetDiff) -> fmt::Result {
    if !diff.only_in_first.is_empty() {
        writeln!(f, "  Lines only in the first tree:")?;
        for (line, count) in &diff.only_in_first {
            writeln!(f, "    {} '{}'{}", "-".red(), render_line(line), times(*count))?;
        }
    }
    if !diff.only_in_second.is_empty() {
        writeln!(f, "  Lines only in the second tree:")?;
        for (line, count) in &diff.only_in_second {
            writeln!(f, "    {} '{}'{}", "+".green(), render_line(line), times(*count))?;
        }
    }
    if !diff.count_mismatch.is_empty() {
        writeln!(f, "  Line count differences:")?;
        for (line, (first, second)) in &diff.count_mismatch {
            writeln!(
                f,
                "    {} '{}': first {} vs second {}",
                "~".yellow(),
                render_line(line),
                first,
                second
            )?;
        }
    }
    Ok(())
}

fn times(count: usize) -> String {
    if count > 1 {
        format!(" (x{count})")
    } else {
        String::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    identical: bool,
    added: Vec<&'a str>,
    removed: Vec<&'a str>,
    modified: BTreeMap<&'a str, JsonFileDiff>,
    common: Vec<&'a str>,
    skipped: Vec<&'a str>,
    warnings: &'a [ScanWarning],
}

#[derive(Serialize)]
struct JsonFileDiff {
    only_in_first: Vec<JsonLine>,
    only_in_second: Vec<JsonLine>,
    count_mismatch: Vec<JsonMismatch>,
}

#[derive(Serialize)]
struct JsonLine {
    line: String,
    count: usize,
}

#[derive(Serialize)]
struct JsonMismatch {
    line: String,
    first: usize,
    second: usize,
}

impl From<&LineMultisetDiff> for JsonFileDiff {
    fn from(diff: &LineMultisetDiff) -> Self {
        let lines = |map: &BTreeMap<Vec<u8>, usize>| {
            map.iter()
                .map(|(line, count)| JsonLine { line: render_line(line), count: *count })
                .collect()
        };
        Self {
            only_in_first: lines(&diff.only_in_first),
            only_in_second: lines(&diff.only_in_second),
            count_mismatch: diff
                .count_mismatch
                .iter()
                .map(|(line, (first, second))| JsonMismatch {
                    line: render_line(line),
                    first: *first,
                    second: *second,
                })
                .collect(),
        }
    }
}

/// Machine-readable report. Lines are rendered the same way as in text output.
pub fn render_json(result: &TreeDiffResult) -> serde_json::Result<String> {
    let report = JsonReport {
        identical: result.is_identical(),
        added: result.added.iter().map(String::as_str).collect(),
        removed: result.removed.iter().map(String::as_str).collect(),
        modified: result
            .modified
            .iter()
            .map(|(path, diff)| (path.as_str(), JsonFileDiff::from(diff)))
            .collect(),
        common: result.common.iter().map(String::as_str).collect(),
        skipped: result.skipped.iter().map(String::as_str).collect(),
        warnings: &result.warnings,
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeDiffResult {
        let mut result = TreeDiffResult::new();
        result.added.insert("new.txt".into());
        result.removed.insert("old.txt".into());
        result.common.insert("same.txt".into());

        let mut diff = LineMultisetDiff::default();
        diff.only_in_first.insert(b"gone".to_vec(), 1);
        diff.only_in_second.insert(b"fresh".to_vec(), 3);
        diff.count_mismatch.insert(b"x".to_vec(), (2, 1));
        result.modified.insert("zone.txt".into(), diff);

        result
            .warnings
            .push(ScanWarning::new("/a/locked", "permission denied"));
        result
    }

    #[test]
    fn text_lists_every_section() {
        colored::control::set_override(false);
        let text = TextReport(&sample()).to_string();

        assert!(text.contains("Added files (1)\n  + new.txt\n"));
        assert!(text.contains("Removed files (1)\n  - old.txt\n"));
        assert!(text.contains("Modified files (1)\n  * zone.txt\n"));
        assert!(text.contains("Differences in zone.txt"));
        assert!(text.contains("Lines only in the first tree:\n    - 'gone'\n"));
        assert!(text.contains("Lines only in the second tree:\n    + 'fresh' (x3)\n"));
        assert!(text.contains("~ 'x': first 2 vs second 1"));
        assert!(text.contains("Unchanged files (1)"));
        assert!(text.contains("! /a/locked: permission denied"));
        assert!(!text.contains("No differences"));
    }

    #[test]
    fn identical_result_says_so() {
        colored::control::set_override(false);
        let mut result = TreeDiffResult::new();
        result.common.insert("a".into());
        let text = TextReport(&result).to_string();
        assert!(text.starts_with("Unchanged files (1)\n"));
        assert!(text.contains("No differences."));
        assert!(!text.contains("Added"));
    }

    #[test]
    fn json_renders_lines_as_text() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["identical"], false);
        assert_eq!(value["added"], serde_json::json!(["new.txt"]));
        let zone = &value["modified"]["zone.txt"];
        assert_eq!(zone["only_in_first"][0]["line"], "gone");
        assert_eq!(zone["only_in_second"][0]["count"], 3);
        assert_eq!(zone["count_mismatch"][0]["first"], 2);
        assert_eq!(zone["count_mismatch"][0]["second"], 1);
        assert_eq!(value["warnings"][0]["path"], "/a/locked");
    }
}
