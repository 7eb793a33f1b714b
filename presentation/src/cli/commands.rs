//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for party-launcher
#[derive(Parser, Debug)]
#[command(name = "party-launcher")]
#[command(author, version, about = "Launch one worker process per protocol party")]
#[command(long_about = r#"
Party Launcher starts every party of a distributed protocol run on this machine.

The number of parties is 4 * l, where l is read from the JSON config file.
Party <id> runs in the background as:

  RUST_LOG=info <BIN> --id <id> -c <CONFIG> -i <INPUT>/worker_<id>

with stdout and stderr written to worker_<id>.log. Every command is printed
before it is started. Workers are not waited on.

Launcher settings are loaded from (in priority order):
1. PARTY_LAUNCHER_* environment variables
2. --settings <path>             Explicit settings file
3. ./party-launcher.toml         Project-level settings
4. ~/.config/party-launcher/config.toml   Global settings

Example:
  party-launcher config.json ./target/release/client ./inputs
  party-launcher --dry-run config.json ./client ./inputs
"#)]
pub struct Cli {
    /// The config file (JSON, with the scale parameter `l`)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// The worker executable
    #[arg(value_name = "BIN")]
    pub bin: PathBuf,

    /// Input directory with one worker_<id> subdirectory per party
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Print the commands without starting any worker
    #[arg(long)]
    pub dry_run: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to launcher settings file
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Disable loading of launcher settings files and environment overrides
    #[arg(long, conflicts_with = "settings")]
    pub no_settings: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positionals_in_order() {
        let cli = Cli::try_parse_from(["party-launcher", "c.json", "./client", "inputs"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("c.json"));
        assert_eq!(cli.bin, PathBuf::from("./client"));
        assert_eq!(cli.input, PathBuf::from("inputs"));
        assert!(!cli.dry_run);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_all_positionals_required() {
        assert!(Cli::try_parse_from(["party-launcher", "c.json", "./client"]).is_err());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "party-launcher",
            "-vv",
            "--dry-run",
            "--settings",
            "run.toml",
            "c.json",
            "client",
            "in",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.settings, Some(PathBuf::from("run.toml")));
    }

    #[test]
    fn test_settings_conflicts_with_no_settings() {
        let result = Cli::try_parse_from([
            "party-launcher",
            "--settings",
            "run.toml",
            "--no-settings",
            "c.json",
            "client",
            "in",
        ]);
        assert!(result.is_err());
    }
}
