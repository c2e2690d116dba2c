//! CLI argument parsing for goallist

use clap::Parser;
use std::path::PathBuf;

/// GoalList - single-screen terminal goal list
#[derive(Parser, Debug)]
#[command(name = "gl")]
#[command(author, version, about = "Single-screen terminal goal list", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["gl", "-c", "goals.yml", "--log-level", "debug"]);
        assert_eq!(cli.config, Some(PathBuf::from("goals.yml")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_parse_no_flags() {
        let cli = Cli::parse_from(["gl"]);
        assert!(cli.config.is_none());
        assert!(cli.log_level.is_none());
    }
}
