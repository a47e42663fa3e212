use chrono::{DateTime, Local};

use crate::{error::ExtractionError, webdata::WebData};

/// Snapshot of the status page fields, kept as the device reports them.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InverterReading {
    pub serial: String,

    /// Instantaneous power in watts.
    pub power: String,

    /// Energy produced today in kilowatt-hours.
    pub energy_today: String,

    /// Lifetime energy in kilowatt-hours.
    pub energy_total: String,

    /// Vendor-specific uptime.
    pub uptime: String,

    pub fetched_at: DateTime<Local>,
}

impl InverterReading {
    pub const SERIAL: &str = "webdata_sn";
    pub const POWER: &str = "webdata_now_p";
    pub const ENERGY_TODAY: &str = "webdata_today_e";
    pub const ENERGY_TOTAL: &str = "webdata_total_e";
    pub const UPTIME: &str = "webdata_utime";

    pub fn from_web_data(
        web_data: &WebData,
        fetched_at: DateTime<Local>,
    ) -> Result<Self, ExtractionError> {
        Ok(Self {
            serial: web_data.require(Self::SERIAL)?.to_string(),
            power: web_data.require(Self::POWER)?.to_string(),
            energy_today: web_data.require(Self::ENERGY_TODAY)?.to_string(),
            energy_total: web_data.require(Self::ENERGY_TOTAL)?.to_string(),
            uptime: web_data.require(Self::UPTIME)?.to_string(),
            fetched_at,
        })
    }
}
