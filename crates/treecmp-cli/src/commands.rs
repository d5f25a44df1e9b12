use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use treecmp_diff::{compare_directories, TreeDiffResult};
use treecmp_lines::{RuleSpec, RulesConfig};

use crate::cli::{Cli, OutputFormat};
use crate::report;

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let result = compare(&cli)?;
    if cli.exit_code && !result.is_identical() {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

/// Compare the two directories and print the report.
fn compare(cli: &Cli) -> anyhow::Result<TreeDiffResult> {
    let rules = rules_config(cli)?
        .build()
        .context("failed to compile ignore rules")?;

    let result = compare_directories(&cli.first, &cli.second, Arc::new(rules))?;

    match cli.format {
        OutputFormat::Text => print!("{}", report::TextReport(&result)),
        OutputFormat::Json => println!("{}", report::render_json(&result)?),
    }
    Ok(result)
}

/// The rules file (or defaults) with command-line overrides applied.
fn rules_config(cli: &Cli) -> anyhow::Result<RulesConfig> {
    let mut config = match &cli.config {
        Some(path) => RulesConfig::load(path)
            .with_context(|| format!("failed to load rules from {}", path.display()))?,
        None => RulesConfig::default(),
    };

    if cli.no_builtin_rules {
        config.builtin_rules = false;
    }
    for (i, pattern) in cli.ignore.iter().enumerate() {
        config
            .rules
            .push(RuleSpec::new(format!("cli-{}", i + 1), pattern.clone(), false));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("treecmp").chain(args.iter().copied())).unwrap()
    }

    fn arg(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn flags_extend_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        std::fs::write(
            &path,
            "[[rules]]\nname = \"stamp\"\npattern = 'generated \\d+'\n",
        )
        .unwrap();

        let cli = parse(&[
            "a",
            "b",
            "--config",
            arg(&path),
            "--ignore",
            "^;",
            "--no-builtin-rules",
        ]);

        let config = rules_config(&cli).unwrap();
        assert!(!config.builtin_rules);
        let names: Vec<_> = config.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["stamp", "cli-1"]);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = parse(&["a", "b", "--config", "/nonexistent/rules.toml"]);
        let err = rules_config(&cli).unwrap_err();
        assert!(err.to_string().contains("failed to load rules"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let cli = parse(&[arg(dir.path()), arg(&missing)]);
        let err = compare(&cli).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn cli_ignore_rule_hides_difference() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        std::fs::write(a.path().join("f"), "x\n; built 2024-01-01\n").unwrap();
        std::fs::write(b.path().join("f"), "x\n; built 2024-03-09\n").unwrap();

        let strict = compare(&parse(&[arg(a.path()), arg(b.path())])).unwrap();
        assert!(!strict.is_identical());

        let relaxed = compare(&parse(&[
            arg(a.path()),
            arg(b.path()),
            "--ignore",
            r"^; built \d{4}",
            "--format",
            "json",
        ]))
        .unwrap();
        assert!(relaxed.is_identical());
    }
}
