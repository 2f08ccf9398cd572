use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `gamri` binary.
#[derive(Debug, Parser)]
#[command(
    name = "gamri",
    version,
    about = "gamri - audit-violation case analytics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "gamri",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "overview",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Overview));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["gamri", "categories", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Categories));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["gamri", "--format", "xml", "overview"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn search_keyword_is_optional() {
        let cli = Cli::try_parse_from(["gamri", "search", "--category", "💎 자본 (Equity)"])
            .expect("cli should parse");
        let Commands::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.keyword, None);
        assert_eq!(args.category.as_deref(), Some("💎 자본 (Equity)"));
    }

    #[test]
    fn ask_takes_filters_and_dry_run() {
        let cli = Cli::try_parse_from([
            "gamri",
            "ask",
            "재고 실사 유의점은?",
            "--keyword",
            "재고",
            "--dry-run",
        ])
        .expect("cli should parse");
        let Commands::Ask(args) = cli.command else {
            panic!("expected ask");
        };
        assert_eq!(args.keyword.as_deref(), Some("재고"));
        assert!(args.dry_run);
    }

    #[test]
    fn show_takes_search_filters() {
        let cli = Cli::try_parse_from([
            "gamri",
            "show",
            "[📦 재고자산 (Inventory)] 가나 - 재고자산",
            "--keyword",
            "은닉",
        ])
        .expect("cli should parse");
        let Commands::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.keyword.as_deref(), Some("은닉"));
        assert_eq!(args.category, None);
    }

    #[test]
    fn action_detail_describes_search() {
        let cli = Cli::try_parse_from(["gamri", "search", "횡령", "--category", "A"])
            .expect("cli should parse");
        assert_eq!(cli.command.action_name(), "search");
        assert_eq!(cli.command.action_detail().as_deref(), Some("횡령 in A"));
    }

    #[test]
    fn taxonomy_is_not_recorded() {
        let cli = Cli::try_parse_from(["gamri", "taxonomy", "--schema"]).expect("cli should parse");
        assert!(!cli.command.records_activity());
        let cli = Cli::try_parse_from(["gamri", "activity"]).expect("cli should parse");
        assert!(cli.command.records_activity());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["gamri", "--project", "/tmp/demo", "overview"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.project.as_deref(), Some("/tmp/demo"));
    }
}
