pub mod cli;
pub mod config;
pub mod database;
pub mod discord;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod http;
pub mod retry;
pub mod services;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use colored::Colorize;
use log::{error, info, warn};

use crate::cli::Command;
use crate::config::AppConfig;
use crate::errors::StatsError;
use crate::services::{Scheduler, StatsCycle};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

/// Logs panics from any thread through the logger instead of bare stderr
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        error!("Unhandled panic: {}", info);
    }));
}

/// One-line report for a command that ended in an error, causes included
pub fn failure_summary(err: &anyhow::Error) -> String {
    format!("Command failed: {err:#}")
}

pub fn handle_run(interval: Option<u64>) -> Result<()> {
    let config = load_config()?.with_interval(interval)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let cycle = Arc::new(StatsCycle::new(config)?);
        let (scheduler, handle) = Scheduler::new(Duration::from_secs(cycle.interval_secs()));

        tokio::spawn(async move {
            if handle.stop_on_interrupt(tokio::signal::ctrl_c).await {
                warn!("Interrupted again, exiting without waiting for the current step");
                std::process::exit(130);
            }
        });

        info!("Bot starting...");
        scheduler
            .run(move || {
                let cycle = Arc::clone(&cycle);
                async move { cycle.run().await }
            })
            .await;
        Ok(())
    })
}

pub fn handle_once() -> Result<()> {
    let config = load_config()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let cycle = StatsCycle::new(config)?;
        cycle.run().await?;
        info!("Update cycle completed");
        Ok(())
    })
}

pub fn handle_preview() -> Result<()> {
    let config = load_config()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let cycle = StatsCycle::new(config)?;
        let rendered = cycle.preview().await?;

        print_section("Players", rendered.players.as_deref());
        print_section("Fractions", rendered.factions.as_deref());
        Ok(())
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}

fn load_config() -> Result<AppConfig, StatsError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(StatsError::startup(format!("Failed to read .env file: {e}")));
        }
    }
    AppConfig::from_env()
}

fn print_section(title: &str, body: Option<&str>) {
    println!("{}", format!("=== {} ===", title).bold().yellow());
    match body {
        Some(text) => println!("{}\n", text),
        None => println!("{}\n", "(nothing to report)".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_failure_summary_names_command_and_cause() {
        let err = Err::<(), _>(StatsError::startup("DISCORD_WEBHOOK_PLAYERS is not set"))
            .context("Failed to load configuration")
            .unwrap_err();

        let summary = failure_summary(&err);

        assert_eq!(
            summary,
            "Command failed: Failed to load configuration: startup failed: DISCORD_WEBHOOK_PLAYERS is not set"
        );
    }
}
