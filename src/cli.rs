use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Posts game-server economy leaderboards to Discord webhooks")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Post both leaderboards on a fixed interval until interrupted
    Run {
        /// Seconds between cycles (overrides STATS_UPDATE_INTERVAL_SECS)
        #[arg(short, long)]
        interval: Option<u64>,
    },
    /// Run a single cycle and exit
    Once,
    /// Print both leaderboards without posting them
    Preview,
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
