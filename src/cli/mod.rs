//! CLI command parsing and execution.

use std::io::Write;

use clap::{Parser, Subcommand};

use crate::version::{VersionInfo, human_version};

/// Verstamp - print the build-stamped version of this binary.
#[derive(Parser)]
#[command(name = "verstamp")]
#[command(about = "Print the build-stamped version of this binary")]
#[command(version = human_version())]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the composite version string.
    Show {
        /// Print all fields as JSON.
        #[arg(short, long)]
        json: bool,
    },
}

impl Cli {
    /// Log filter directive for the requested verbosity.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Execute the parsed command, writing its output to `out`.
pub fn run(cli: &Cli, info: &VersionInfo, out: &mut impl Write) -> anyhow::Result<()> {
    let json = matches!(cli.command, Some(Commands::Show { json: true }));
    tracing::debug!(json, "rendering version");

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(info)?)?;
    } else {
        writeln!(out, "{info}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn render(args: &[&str], info: &VersionInfo) -> String {
        let cli = Cli::parse_from(args);
        let mut out = Vec::new();
        run(&cli, info, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn cli_parses_no_args() {
        let cli = Cli::parse_from(["verstamp"]);
        assert_eq!(cli.verbose, 0);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = Cli::parse_from(["verstamp", "-v"]);
        assert_eq!(cli.log_filter(), "info");

        let cli = Cli::parse_from(["verstamp", "-vv"]);
        assert_eq!(cli.log_filter(), "debug");

        let cli = Cli::parse_from(["verstamp", "-vvvv"]);
        assert_eq!(cli.verbose, 4);
        assert_eq!(cli.log_filter(), "trace");
    }

    #[test]
    fn cli_parses_show_json() {
        let cli = Cli::parse_from(["verstamp", "show", "--json"]);
        assert!(matches!(cli.command, Some(Commands::Show { json: true })));

        let cli = Cli::parse_from(["verstamp", "show"]);
        assert!(matches!(cli.command, Some(Commands::Show { json: false })));
    }

    #[test]
    fn cli_verbose_is_global() {
        let cli = Cli::parse_from(["verstamp", "show", "-v"]);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn cli_version_flag_uses_human_version() {
        let err = Cli::try_parse_from(["verstamp", "--version"])
            .err()
            .expect("--version should short-circuit parsing");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert_eq!(err.to_string(), format!("verstamp {}\n", human_version()));
    }

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_prints_human_version() {
        let info = VersionInfo::new("demo", "0.8.0a", "abc1234");
        assert_eq!(render(&["verstamp"], &info), "demo v0.8.0a (abc1234)\n");
        assert_eq!(render(&["verstamp", "show"], &info), "demo v0.8.0a (abc1234)\n");
    }

    #[test]
    fn run_prints_empty_segments() {
        let info = VersionInfo::new("", "0.8.0a", "");
        assert_eq!(render(&["verstamp", "show"], &info), " v0.8.0a ()\n");
    }

    #[test]
    fn run_prints_json() {
        let info = VersionInfo::new("demo", "0.8.0a", "abc1234");
        let out = render(&["verstamp", "show", "--json"], &info);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["human"], "demo v0.8.0a (abc1234)");
        assert_eq!(value["revision"], "abc1234");
    }
}
