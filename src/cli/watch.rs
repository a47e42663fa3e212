use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread::sleep,
    time::{Duration, Instant},
};

use clap::Parser;
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};

use crate::{
    api::inverter,
    cli::{output::OutputFormat, settings::SettingsArgs},
    poller::{Poller, Tick},
    prelude::*,
    settings::Settings,
};

#[derive(Parser)]
pub struct WatchArgs {
    #[clap(flatten)]
    pub settings: SettingsArgs,

    /// Scheduler tick period.
    #[clap(long, env = "TICK_PERIOD", default_value = "200ms")]
    tick: humantime::Duration,

    #[clap(long, value_enum, default_value_t)]
    format: OutputFormat,
}

impl WatchArgs {
    pub fn run(self) -> Result {
        let should_terminate = Arc::new(AtomicBool::new(false));
        signal_hook::flag::register(SIGINT, Arc::clone(&should_terminate))?;
        signal_hook::flag::register(SIGTERM, Arc::clone(&should_terminate))?;
        let should_reload = Arc::new(AtomicBool::new(false));
        signal_hook::flag::register(SIGHUP, Arc::clone(&should_reload))?;

        let tick_period: Duration = self.tick.into();
        let settings = Settings::from(self.settings);
        let mut poller = Poller::new(settings, inverter::Client::connect, Instant::now());
        match poller.url_status() {
            Ok(()) => info!(url = %poller.settings().url, "watching…"),
            Err(error) => warn!("{error}, polling is parked"),
        }

        let mut countdown = Countdown::default();
        while !should_terminate.load(Ordering::Relaxed) {
            if should_reload.swap(false, Ordering::Relaxed) {
                Self::reload(&mut poller, self.format)?;
            }
            match poller.tick(Instant::now()) {
                Tick::Waiting { seconds_until_next_update }
                | Tick::Parked { seconds_until_next_update } => {
                    countdown.report(seconds_until_next_update);
                }
                Tick::Updated(snapshot) => self.format.print(&snapshot)?,
                Tick::Failed(_) => {
                    // Non-fatal, the poller has logged it already.
                }
            }
            sleep(tick_period);
        }

        info!(state = ?poller.state(), "cleaning up…");
        Ok(())
    }

    /// Apply the settings from the environment, and show the re-derived earnings.
    fn reload(poller: &mut Poller<inverter::Client>, format: OutputFormat) -> Result {
        info!("reloading the settings…");
        match SettingsArgs::reload_from_env() {
            Ok(update) => {
                if poller.apply(update, Instant::now()).is_ok()
                    && let Some(snapshot) = poller.snapshot()
                {
                    format.print(&snapshot)?;
                }
            }
            Err(error) => warn!("failed to reload the settings: {error:#}"),
        }
        Ok(())
    }
}

/// User-facing countdown until the next update.
#[derive(Default)]
struct Countdown(Option<u64>);

impl Countdown {
    /// Report the value when it changes, and tell whether it did.
    fn report(&mut self, seconds_until_next_update: u64) -> bool {
        if self.0 == Some(seconds_until_next_update) {
            return false;
        }
        info!(seconds_until_next_update, "next update in");
        self.0 = Some(seconds_until_next_update);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StatusPage;

    struct Unreachable;

    impl StatusPage for Unreachable {
        fn fetch(&self) -> Result<String, crate::error::AcquisitionError> {
            unreachable!("the URL is invalid")
        }
    }

    #[test]
    fn countdown_reported_once_per_change() {
        let mut countdown = Countdown::default();
        assert!(countdown.report(11));
        assert!(!countdown.report(11));
        assert!(countdown.report(10));
    }

    #[test]
    fn countdown_reported_while_parked() {
        let start = Instant::now();
        let settings = Settings::builder().url("not-a-url").build();
        let mut poller = Poller::new(settings, |_, _| Unreachable, start);
        let mut countdown = Countdown::default();

        let mut n_reports = 0;
        for second in 0..=22 {
            match poller.tick(start + Duration::from_secs(second)) {
                Tick::Waiting { seconds_until_next_update }
                | Tick::Parked { seconds_until_next_update } => {
                    n_reports += usize::from(countdown.report(seconds_until_next_update));
                }
                tick => panic!("unexpected tick: {tick:?}"),
            }
        }
        assert_eq!(n_reports, 23);
    }
}
