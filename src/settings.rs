use std::{
    fmt::{Display, Formatter},
    str::FromStr,
    time::Duration,
};

use bon::Builder;
use url::Url;

use crate::{error::ConfigurationError, quantity::price::KilowattHourPrice};

/// Session-only polling settings.
#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct Settings {
    #[builder(into, default = Settings::DEFAULT_URL.to_owned())]
    pub url: String,

    #[builder(into, default = "admin".to_owned())]
    pub username: String,

    #[builder(into, default = "admin".to_owned())]
    pub password: String,

    /// Also serves as the request timeout.
    #[builder(default = Settings::DEFAULT_POLLING_INTERVAL)]
    pub polling_interval: Duration,

    #[builder(default = KilowattHourPrice::DEFAULT)]
    pub price: KilowattHourPrice,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Settings {
    pub const DEFAULT_URL: &str = "http://192.168.178.50/status.html";
    pub const DEFAULT_POLLING_INTERVAL: Duration = Duration::from_secs(10);

    pub fn inverter_url(&self) -> Result<InverterUrl, ConfigurationError> {
        self.url.parse()
    }

    /// Merge the update into the settings.
    pub fn apply(&mut self, update: SettingsUpdate) {
        if let Some(url) = update.url {
            self.url = url;
        }
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(password) = update.password {
            self.password = password;
        }
        if let Some(polling_interval) = update.polling_interval {
            self.polling_interval = polling_interval;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
    }
}

/// Runtime change from the settings surface, unset fields are kept as is.
#[must_use]
#[derive(Clone, Debug, Default, Builder)]
pub struct SettingsUpdate {
    #[builder(into)]
    pub url: Option<String>,

    #[builder(into)]
    pub username: Option<String>,

    #[builder(into)]
    pub password: Option<String>,

    pub polling_interval: Option<Duration>,

    pub price: Option<KilowattHourPrice>,
}

/// Absolute HTTP(S) URL of the inverter status page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InverterUrl(Url);

impl InverterUrl {
    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl FromStr for InverterUrl {
    type Err = ConfigurationError;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        let parsed = Url::parse(url.trim())
            .map_err(|source| ConfigurationError::InvalidUrl { url: url.to_string(), source })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigurationError::UnsupportedScheme {
                url: url.to_string(),
                scheme: parsed.scheme().to_string(),
            });
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(ConfigurationError::MissingHost(url.to_string()));
        }
        Ok(Self(parsed))
    }
}

impl Display for InverterUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_page_url_ok() -> Result<(), ConfigurationError> {
        let url = "http://192.168.1.1/status.html".parse::<InverterUrl>()?;
        assert_eq!(url.as_url().host_str(), Some("192.168.1.1"));
        assert_eq!(url.as_url().path(), "/status.html");
        Ok(())
    }

    #[test]
    fn https_url_ok() {
        assert!("https://inverter.local/status.html".parse::<InverterUrl>().is_ok());
    }

    #[test]
    fn not_a_url_rejected() {
        assert!(matches!(
            "not-a-url".parse::<InverterUrl>(),
            Err(ConfigurationError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn ftp_url_rejected() {
        assert!(matches!(
            "ftp://192.168.1.1/status.html".parse::<InverterUrl>(),
            Err(ConfigurationError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn defaults_ok() {
        let settings = Settings::default();
        assert_eq!(settings.url, Settings::DEFAULT_URL);
        assert_eq!(settings.username, "admin");
        assert_eq!(settings.password, "admin");
        assert_eq!(settings.polling_interval, Duration::from_secs(10));
        assert_eq!(settings.price, KilowattHourPrice(0.41));
        assert!(settings.inverter_url().is_ok());
    }

    #[test]
    fn apply_keeps_unset_fields() {
        let mut settings = Settings::default();
        settings.apply(SettingsUpdate::builder().password("secret").build());
        assert_eq!(settings.password, "secret");
        assert_eq!(settings.username, "admin");
        assert_eq!(settings.url, Settings::DEFAULT_URL);
    }
}
