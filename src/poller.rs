//! Single-threaded polling scheduler driven by explicit ticks.

use std::time::{Duration, Instant};

use chrono::Local;

use crate::{
    api::StatusPage,
    earnings::DerivedEarnings,
    error::{ConfigurationError, PollError},
    prelude::*,
    reading::InverterReading,
    settings::{InverterUrl, Settings, SettingsUpdate},
    snapshot::Snapshot,
    webdata::WebData,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PollState {
    /// Waiting for the next poll.
    Idle,

    /// Request in flight.
    Polling,

    /// Fresh reading available.
    Updated,

    /// The last poll failed.
    Error,
}

#[must_use]
#[derive(Debug)]
pub enum Tick {
    Waiting { seconds_until_next_update: u64 },

    /// The poll is due but the URL is invalid.
    Parked { seconds_until_next_update: u64 },

    Updated(Snapshot),

    Failed(PollError),
}

type Connect<S> = Box<dyn Fn(InverterUrl, &Settings) -> S>;

/// Application context: settings, the page source, and the latest derived values.
pub struct Poller<S> {
    settings: Settings,
    connect: Connect<S>,
    source: Result<S, ConfigurationError>,
    state: PollState,
    reading: Option<InverterReading>,
    earnings: DerivedEarnings,
    last_poll_started_at: Instant,

    #[cfg(test)]
    transitions: Vec<PollState>,
}

impl<S: StatusPage> Poller<S> {
    /// Applying new settings brings the next poll this close.
    const APPLY_DELAY: Duration = Duration::from_secs(3);

    /// The first poll happens one interval after `now`.
    pub fn new(
        settings: Settings,
        connect: impl Fn(InverterUrl, &Settings) -> S + 'static,
        now: Instant,
    ) -> Self {
        let connect: Connect<S> = Box::new(connect);
        let source = Self::connect_with(&connect, &settings);
        Self {
            settings,
            connect,
            source,
            state: PollState::Idle,
            reading: None,
            earnings: DerivedEarnings::default(),
            last_poll_started_at: now,
            #[cfg(test)]
            transitions: Vec::new(),
        }
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub const fn state(&self) -> PollState {
        self.state
    }

    /// Validation result of the configured URL.
    pub fn url_status(&self) -> Result<(), &ConfigurationError> {
        self.source.as_ref().map(|_| ())
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.reading
            .as_ref()
            .map(|reading| Snapshot::new(self.settings.url.trim(), reading, self.earnings))
    }

    /// Countdown as shown to the user, zero when the poll is due.
    pub fn seconds_until_next_update(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.last_poll_started_at).as_secs();
        (self.settings.polling_interval.as_secs() + 1).saturating_sub(elapsed)
    }

    /// Advance the scheduler: poll once the elapsed time exceeds the interval.
    pub fn tick(&mut self, now: Instant) -> Tick {
        let seconds_until_next_update = self.seconds_until_next_update(now);
        if seconds_until_next_update != 0 {
            return Tick::Waiting { seconds_until_next_update };
        }
        if let Err(error) = &self.source {
            warn!("polling is parked: {error}");
            self.last_poll_started_at = now;
            return Tick::Parked { seconds_until_next_update: self.seconds_until_next_update(now) };
        }
        match self.poll_now(now) {
            Ok(snapshot) => Tick::Updated(snapshot),
            Err(error) => Tick::Failed(error),
        }
    }

    /// Poll immediately and restart the countdown.
    ///
    /// An invalid URL fails right away and leaves both the state and the countdown as they are.
    pub fn poll_now(&mut self, now: Instant) -> Result<Snapshot, PollError> {
        if let Err(error) = &self.source {
            return Err(error.clone().into());
        }
        self.last_poll_started_at = now;
        self.transition(PollState::Polling);
        let result = self.poll();
        match &result {
            Ok(_) => self.transition(PollState::Updated),
            Err(error) => {
                warn!(kind = %error.kind(), "poll failed: {error}");
                self.transition(PollState::Error);
            }
        }
        self.transition(PollState::Idle);
        result
    }

    /// Apply a change from the settings surface.
    ///
    /// The earnings are re-derived with the new price right away, and the next poll is scheduled
    /// shortly after the change. An invalid URL parks the polling until a valid one is applied.
    pub fn apply(&mut self, update: SettingsUpdate, now: Instant) -> Result<(), ConfigurationError> {
        self.settings.apply(update);
        self.source = Self::connect_with(&self.connect, &self.settings);
        if let Some(reading) = &self.reading
            && let Err(error) = self.earnings.update(reading, self.settings.price)
        {
            warn!("failed to re-derive the earnings: {error:#}");
        }
        self.last_poll_started_at = now
            .checked_sub(self.settings.polling_interval.saturating_sub(Self::APPLY_DELAY))
            .unwrap_or(now);
        match &self.source {
            Ok(_) => {
                info!(url = %self.settings.url, "settings applied");
                Ok(())
            }
            Err(error) => {
                warn!("settings applied, but polling is parked: {error}");
                Err(error.clone())
            }
        }
    }

    fn poll(&mut self) -> Result<Snapshot, PollError> {
        let source = self.source.as_ref().map_err(Clone::clone)?;
        let page = source.fetch()?;
        let web_data = WebData::parse(&page)?;
        debug!(?web_data, "parsed");
        let reading = InverterReading::from_web_data(&web_data, Local::now())?;
        self.earnings.update(&reading, self.settings.price)?;
        info!(
            serial = %reading.serial,
            power = %reading.power,
            energy_today = %reading.energy_today,
            energy_total = %reading.energy_total,
            earnings_now = ?self.earnings.now,
            "updated",
        );
        let snapshot = Snapshot::new(self.settings.url.trim(), &reading, self.earnings);
        self.reading = Some(reading);
        Ok(snapshot)
    }

    fn connect_with(connect: &Connect<S>, settings: &Settings) -> Result<S, ConfigurationError> {
        settings.inverter_url().map(|url| connect(url, settings))
    }

    fn transition(&mut self, to: PollState) {
        trace!(from = ?self.state, to = ?to, "transition");
        #[cfg(test)]
        self.transitions.push(to);
        self.state = to;
    }
}
