//! Show command
//!
//! Print the thread as text or JSON.

use super::SeedArgs;
use anyhow::{Context, Result};
use clap::Args;
use cw_core::config::Config;
use cw_core::export::{ExportFormat, ExportOptions};
use std::io::Write;

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub seed: SeedArgs,

    /// Output format (plain, json)
    #[arg(long, short, default_value = "plain", value_parser = parse_format)]
    pub format: ExportFormat,

    /// Use compact format (for JSON)
    #[arg(long)]
    pub compact: bool,
}

fn parse_format(s: &str) -> std::result::Result<ExportFormat, String> {
    s.parse::<ExportFormat>().map_err(|e| e.to_string())
}

/// Execute the show command
pub fn execute(args: ShowArgs, config: Config) -> Result<()> {
    let store = args.seed.load_store(&config)?;
    let exporter = args.format.exporter(&export_options(&args, &config));
    let output = exporter
        .export(&store)
        .with_context(|| format!("Failed to export as {}", exporter.format_name()))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        writeln!(stdout)?;
    }
    Ok(())
}

fn export_options(args: &ShowArgs, config: &Config) -> ExportOptions {
    ExportOptions {
        indent: usize::from(config.ui.reply_indent),
        compact: args.compact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("json").unwrap(), ExportFormat::Json);
        assert_eq!(parse_format("TEXT").unwrap(), ExportFormat::Plain);
        assert!(parse_format("xml").unwrap_err().contains("xml"));
    }

    #[test]
    fn test_export_options_from_flags_and_config() {
        let mut config = Config::default();
        config.ui.reply_indent = 2;
        let args = ShowArgs {
            seed: SeedArgs::default(),
            format: ExportFormat::Json,
            compact: true,
        };

        let options = export_options(&args, &config);
        assert_eq!(options.indent, 2);
        assert!(options.compact);
    }
}
