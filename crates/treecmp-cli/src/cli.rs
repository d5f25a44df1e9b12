use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "treecmp",
    about = "Compare two directory trees, ignoring formatting and noise lines",
    version,
)]
pub struct Cli {
    /// First (reference) directory
    pub first: PathBuf,
    /// Second directory, compared against the first
    pub second: PathBuf,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with ignore rules
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Extra ignore rule, searched anywhere in a line (repeatable)
    #[arg(long = "ignore", value_name = "REGEX")]
    pub ignore: Vec<String>,

    /// Do not apply the built-in serial and uuid rules
    #[arg(long)]
    pub no_builtin_rules: bool,

    /// Exit with status 1 when the trees differ
    #[arg(long)]
    pub exit_code: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_directories() {
        let cli = Cli::try_parse_from(["treecmp", "/a", "/b"]).unwrap();
        assert_eq!(cli.first, PathBuf::from("/a"));
        assert_eq!(cli.second, PathBuf::from("/b"));
        assert!(matches!(cli.format, OutputFormat::Text));
        assert!(cli.ignore.is_empty());
        assert!(!cli.exit_code);
    }

    #[test]
    fn parses_rule_flags() {
        let cli = Cli::try_parse_from([
            "treecmp",
            "/a",
            "/b",
            "--ignore",
            "^;",
            "--ignore",
            "stamp",
            "--no-builtin-rules",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.ignore, vec!["^;", "stamp"]);
        assert!(cli.no_builtin_rules);
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn requires_two_directories() {
        assert!(Cli::try_parse_from(["treecmp", "/a"]).is_err());
    }
}
