//! Bosswerk/Deye microinverter embedded web server.

use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use ureq::Agent;

use crate::{
    api::StatusPage,
    error::AcquisitionError,
    prelude::*,
    settings::{InverterUrl, Settings},
};

pub struct Client {
    agent: Agent,
    url: InverterUrl,
    authorization: String,
}

impl Client {
    pub fn new(url: InverterUrl, username: &str, password: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        let authorization = format!("Basic {}", STANDARD.encode(format!("{username}:{password}")));
        Self { agent, url, authorization }
    }

    /// Build the client with the polling interval as the request timeout.
    pub fn connect(url: InverterUrl, settings: &Settings) -> Self {
        Self::new(url, &settings.username, &settings.password, settings.polling_interval)
    }
}

impl StatusPage for Client {
    #[instrument(skip_all, fields(url = %self.url))]
    fn fetch(&self) -> Result<String, AcquisitionError> {
        debug!("requesting the status page…");
        let mut response = self
            .agent
            .get(self.url.as_url().as_str())
            .header("Authorization", &self.authorization)
            .call()?;
        let status = response.status();
        if !status.is_success() {
            return Err(AcquisitionError::Status(status));
        }
        let body = response.body_mut().read_to_string()?;
        debug!(n_bytes = body.len(), "fetched");
        Ok(body)
    }
}
