//! Command-line and environment options.
use std::path::PathBuf;

use clap::Parser;

/// Run a tactics scenario headlessly and print what every actor did.
///
/// Each flag falls back to its environment variable when omitted.
#[derive(Parser, Clone, Debug, Default, PartialEq, Eq)]
#[command(name = "tactics")]
#[command(about = "Turn-based tactics simulation", long_about = None)]
#[command(version)]
pub struct CliOptions {
    /// RON scenario file (default: built-in arena)
    #[arg(long, env = "TACTICS_SCENARIO")]
    pub scenario: Option<PathBuf>,

    /// TOML config file (default: built-in tunables)
    #[arg(long, env = "TACTICS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Rounds to run, still capped by `max_turns`
    #[arg(long, env = "TACTICS_TURNS")]
    pub turns: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let options = CliOptions::try_parse_from([
            "tactics",
            "--scenario",
            "duel.ron",
            "--turns",
            "12",
        ])
        .unwrap();

        assert_eq!(options.scenario, Some(PathBuf::from("duel.ron")));
        assert_eq!(options.config, None);
        assert_eq!(options.turns, Some(12));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(CliOptions::try_parse_from(["tactics", "--turns"]).is_err());
        assert!(CliOptions::try_parse_from(["tactics", "--turns", "many"]).is_err());
        assert!(CliOptions::try_parse_from(["tactics", "--fast"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        CliOptions::command().debug_assert();
    }
}
