use anyhow::Result;

use economy_stats_bot::cli::Command;
use economy_stats_bot::{
    failure_summary, handle_completions, handle_once, handle_preview, handle_run,
    install_panic_hook, interpret,
};

fn main() {
    setup_logging();
    install_panic_hook();
    parse_and_execute().unwrap_or_else(|e| {
        log::error!("{}", failure_summary(&e));
        log::error!("{e:?}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init_timed!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Run { interval } => handle_run(*interval),
        Command::Once => handle_once(),
        Command::Preview => handle_preview(),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
