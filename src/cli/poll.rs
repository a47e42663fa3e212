use std::time::Instant;

use clap::Parser;

use crate::{
    api::inverter,
    cli::{output::OutputFormat, settings::SettingsArgs},
    poller::Poller,
    prelude::*,
    settings::Settings,
};

#[derive(Parser)]
pub struct PollArgs {
    #[clap(flatten)]
    pub settings: SettingsArgs,

    #[clap(long, value_enum, default_value_t)]
    format: OutputFormat,
}

impl PollArgs {
    pub fn run(self) -> Result {
        let now = Instant::now();
        let mut poller = Poller::new(Settings::from(self.settings), inverter::Client::connect, now);
        let snapshot = poller.poll_now(now).context("failed to poll the inverter")?;
        self.format.print(&snapshot)
    }
}
