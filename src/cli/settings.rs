use std::env;

use clap::Parser;

use crate::{
    prelude::*,
    quantity::price::KilowattHourPrice,
    settings::{Settings, SettingsUpdate},
};

#[derive(Parser)]
pub struct SettingsArgs {
    /// Status page URL, polling stays parked while it is invalid.
    #[clap(long, env = "INVERTER_URL", default_value = Settings::DEFAULT_URL)]
    pub url: String,

    /// Basic Auth username.
    #[clap(long, env = "INVERTER_USERNAME", default_value = "admin")]
    pub username: String,

    /// Basic Auth password.
    #[clap(long, env = "INVERTER_PASSWORD", default_value = "admin", hide_env_values = true)]
    pub password: String,

    /// Time between the polls, also used as the request timeout.
    #[clap(long, env = "POLLING_INTERVAL", default_value = "10s")]
    pub polling_interval: humantime::Duration,

    #[clap(long = "price-per-kwh", env = "PRICE_PER_KWH", default_value = "0.41")]
    pub price: KilowattHourPrice,
}

impl From<SettingsArgs> for Settings {
    fn from(args: SettingsArgs) -> Self {
        Self::builder()
            .url(args.url)
            .username(args.username)
            .password(args.password)
            .polling_interval(args.polling_interval.into())
            .price(args.price)
            .build()
    }
}

impl SettingsArgs {
    /// Re-read `.env` and collect the settings present in the environment.
    pub fn reload_from_env() -> Result<SettingsUpdate> {
        let _ = dotenvy::dotenv_override();
        let polling_interval = env::var("POLLING_INTERVAL")
            .ok()
            .map(|interval| interval.parse::<humantime::Duration>())
            .transpose()
            .context("invalid `POLLING_INTERVAL`")?;
        let price = env::var("PRICE_PER_KWH")
            .ok()
            .map(|price| price.trim().parse::<KilowattHourPrice>())
            .transpose()
            .context("invalid `PRICE_PER_KWH`")?;
        Ok(SettingsUpdate {
            url: env::var("INVERTER_URL").ok(),
            username: env::var("INVERTER_USERNAME").ok(),
            password: env::var("INVERTER_PASSWORD").ok(),
            polling_interval: polling_interval.map(Into::into),
            price,
        })
    }
}
