mod output;
mod poll;
mod settings;
mod watch;

use clap::{Parser, Subcommand};

pub use self::{poll::PollArgs, watch::WatchArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: poll the inverter periodically and print every update.
    #[clap(name = "watch")]
    Watch(Box<WatchArgs>),

    /// Poll the inverter once and print the reading.
    #[clap(name = "poll")]
    Poll(Box<PollArgs>),
}
