use chrono::{DateTime, Local};
use serde::Serialize;

use crate::{earnings::DerivedEarnings, quantity::cost::Cost, reading::InverterReading};

/// What the presentation layer shows after a successful poll.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub url: String,
    pub serial: String,
    pub power: String,
    pub energy_today: String,
    pub energy_total: String,
    pub uptime: String,

    /// Rounded to cents.
    pub earnings_now: Cost,

    /// Rounded to whole units.
    pub earnings_today: Cost,

    /// Rounded to whole units.
    pub earnings_total: Cost,

    pub fetched_at: DateTime<Local>,
}

impl Snapshot {
    pub fn new(url: impl Into<String>, reading: &InverterReading, earnings: DerivedEarnings) -> Self {
        Self {
            url: url.into(),
            serial: reading.serial.clone(),
            power: reading.power.clone(),
            energy_today: reading.energy_today.clone(),
            energy_total: reading.energy_total.clone(),
            uptime: reading.uptime.clone(),
            earnings_now: earnings.now.round_to_cents(),
            earnings_today: earnings.today.round_to_units(),
            earnings_total: earnings.total.round_to_units(),
            fetched_at: reading.fetched_at,
        }
    }
}
