//! Run command
//!
//! Browse the thread in the terminal UI.

use super::SeedArgs;
use anyhow::Result;
use clap::Args;
use cw_core::config::Config;
use cw_core::CommentWidget;
use cw_ui::{App, RenderConfig, Theme};
use std::time::Duration;

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub seed: SeedArgs,
}

/// Execute the run command
pub fn execute(args: RunArgs, config: Config) -> Result<()> {
    use colored::Colorize;

    let store = args.seed.load_store(&config)?;
    let widget = CommentWidget::new(store);

    let mut app = App::new(widget, render_config(&config))?
        .with_tick_rate(Duration::from_millis(config.ui.tick_rate_ms.max(1)));
    app.run()?;

    let store = app.widget().store();
    let comments = store.len();
    let replies = store.unit_count() - comments;
    let user = store.current_user().username.clone();

    // Restore the terminal before printing
    drop(app);

    println!(
        "{} {} comments, {} replies (as @{})",
        "✓".green(),
        comments,
        replies,
        user.cyan()
    );
    Ok(())
}

fn render_config(config: &Config) -> RenderConfig {
    RenderConfig {
        theme: Theme::from_name(&config.ui.theme),
        reply_indent: config.ui.reply_indent,
    }
}
