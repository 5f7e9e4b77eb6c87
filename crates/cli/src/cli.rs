use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Reconcile a virtual pinball table catalogue against its content folders.
#[derive(Parser, Debug)]
#[command(name = "pinrecon", version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file. Built-in defaults are used when absent.
    #[arg(long, global = true, env = "PINRECON_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify every file of an inventory against its games.
    Scan {
        /// JSON file with `games` and `files` arrays.
        #[arg(value_name = "INVENTORY")]
        inventory: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Match the games of an external feed against the inventory's games.
    Import {
        #[arg(value_name = "INVENTORY")]
        inventory: PathBuf,

        /// JSON array of feed games.
        #[arg(value_name = "FEED")]
        feed: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show how a name and a file name are normalized and scored.
    Match {
        /// Canonical name, e.g. "Medieval Madness (Williams 1997)".
        name: String,
        /// File name or path.
        file: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan() {
        let cli = Cli::try_parse_from(["pinrecon", "scan", "inventory.json", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Scan { inventory, format } => {
                assert_eq!(inventory, PathBuf::from("inventory.json"));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_match_with_config() {
        let cli = Cli::try_parse_from([
            "pinrecon",
            "match",
            "--config",
            "pinrecon.toml",
            "Medieval Madness",
            "Medieval Madness (Williams 1997).vpx",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("pinrecon.toml")));
        assert!(matches!(cli.command, Commands::Match { .. }));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
