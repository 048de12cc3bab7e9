//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod run;
pub mod show;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cw_core::comment::CommentStore;
use cw_core::config::Config;
use cw_core::seed::SeedData;
use std::path::{Path, PathBuf};

/// comment-widget - nested comment threads with votes, replies and edits
#[derive(Debug, Parser)]
#[command(name = "comment-widget")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse and edit the thread in the terminal
    Run(run::RunArgs),

    /// Print the thread
    Show(show::ShowArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Where the thread comes from and who is looking at it
#[derive(Debug, Clone, Default, Args)]
pub struct SeedArgs {
    /// Seed JSON file (defaults to config, then the built-in demo thread)
    #[arg(long, short)]
    pub seed: Option<PathBuf>,

    /// Act as this user
    #[arg(long, short)]
    pub user: Option<String>,
}

impl SeedArgs {
    /// Load the seed and build a store for the resolved current user
    pub fn load_store(&self, config: &Config) -> Result<CommentStore> {
        let path = self.seed.as_deref().or(config.seed.path.as_deref());
        let seed = SeedData::load_or_builtin(path).context("Failed to load comments")?;
        let user = config.resolve_current_user(self.user.as_deref(), &seed);
        let store = seed.into_store(user)?;
        Ok(store)
    }
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so its logs go to a file
    let log_file = match cli.command {
        Commands::Run(_) => Some(Config::data_dir().join("comment-widget.log")),
        _ => None,
    };
    setup_logging(cli.verbose, log_file.as_deref());

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Run(args) => run::execute(args, load_config(config_path)?),
        Commands::Show(args) => show::execute(args, load_config(config_path)?),
        Commands::Config(cmd) => config::execute(cmd, config_path),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::load_or_default(path).context("Failed to load configuration")
}

fn setup_logging(verbosity: u8, log_file: Option<&Path>) {
    use std::sync::Mutex;
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = path
                .parent()
                .map_or(Ok(()), std::fs::create_dir_all)
                .and_then(|_| {
                    std::fs::OpenOptions::new()
                        .create(true)
                        .append(true)
                        .open(path)
                });
            match file {
                Ok(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
                // Writing to stderr would garble the TUI
                Err(_) => builder.with_writer(std::io::sink).init(),
            }
        }
        None => builder.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["comment-widget", "show", "-vv", "--no-color"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Commands::Show(_)));
    }

    #[test]
    fn test_seed_args_builtin() {
        let store = SeedArgs::default().load_store(&Config::default()).unwrap();
        assert_eq!(store.current_user().username, "juliusomo");
        assert_eq!(store.unit_count(), 4);
    }

    #[test]
    fn test_seed_args_user_override() {
        let args = SeedArgs {
            seed: None,
            user: Some("amyrobson".to_string()),
        };
        let store = args.load_store(&Config::default()).unwrap();
        assert_eq!(store.current_user().username, "amyrobson");
    }

    #[test]
    fn test_seed_args_missing_file() {
        let args = SeedArgs {
            seed: Some(PathBuf::from("/nonexistent/seed.json")),
            user: None,
        };
        assert!(args.load_store(&Config::default()).is_err());
    }
}
