//! Config command
//!
//! Manage comment-widget configuration.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use cw_core::config::Config;
use std::path::{Path, PathBuf};

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, path: Option<&Path>) -> Result<()> {
    let path = config_path(path);
    match cmd {
        ConfigCommand::Show => show_config(&path),
        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommand::Init { force } => init_config(&path, force),
    }
}

fn config_path(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .unwrap_or_else(Config::default_path)
}

fn show_config(path: &Path) -> Result<()> {
    use colored::Colorize;

    if !path.exists() {
        eprintln!(
            "{} No configuration at {}; showing defaults. Run '{}' to create one.",
            "⚠".yellow(),
            path.display(),
            "comment-widget config init".cyan()
        );
    }

    let config = Config::load_or_default(Some(path))
        .with_context(|| format!("Failed to read {}", path.display()))?;

    println!("{}", "Configuration:".bold().underline());
    println!("{}", path.display().to_string().dimmed());
    println!();
    println!("{}", config.to_toml()?);
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    use colored::Colorize;

    if path.exists() && !force {
        bail!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_override() {
        let path = config_path(Some(Path::new("custom.toml")));
        assert_eq!(path, PathBuf::from("custom.toml"));
        assert!(config_path(None).ends_with("config.toml"));
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        init_config(&path, false).unwrap();
        assert!(init_config(&path, false).is_err());
        init_config(&path, true).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
    }
}
