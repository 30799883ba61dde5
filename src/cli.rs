use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "standings cache refresher")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Rebuild the standings cache snapshot from the upstream source
    Refresh {
        /// Run a single refresh cycle and exit (used to pre-warm the cache)
        #[arg(long)]
        once: bool,
    },
}
