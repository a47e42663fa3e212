use http::StatusCode;
use thiserror::Error;

/// The settings cannot be used for polling.
#[derive(Clone, Debug, Error)]
pub enum ConfigurationError {
    #[error("`{url}` is an invalid URL: {source}")]
    InvalidUrl {
        url: String,

        #[source]
        source: url::ParseError,
    },

    #[error("`{url}` must use `http` or `https`, not `{scheme}`")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("`{0}` must contain a host")]
    MissingHost(String),
}

#[derive(Debug, Error)]
pub enum AcquisitionError {
    /// Connection refused, timed out, or the body could not be read.
    #[error("failed to request the status page: {0}")]
    Transport(#[from] ureq::Error),

    #[error("the status page responded with `{0}`")]
    Status(StatusCode),
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("line #{line_number} looks like a `webdata` assignment but has no `=`: `{line}`")]
    MissingSeparator { line_number: usize, line: String },

    #[error("the status page does not contain `{0}`")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
#[error("`{field}` is expected to be a number, got `{value}`")]
pub struct DerivationError {
    pub field: &'static str,
    pub value: String,
}

/// Any non-fatal failure of a single poll.
#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Derivation(#[from] DerivationError),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum ErrorKind {
    #[display("invalid configuration")]
    InvalidConfiguration,

    #[display("network failure")]
    NetworkFailure,

    #[display("missing field")]
    MissingField,

    #[display("parse failure")]
    ParseFailure,
}

impl PollError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::InvalidConfiguration,
            Self::Acquisition(_) => ErrorKind::NetworkFailure,
            Self::Extraction(ExtractionError::MissingField(_)) => ErrorKind::MissingField,
            Self::Extraction(ExtractionError::MissingSeparator { .. }) | Self::Derivation(_) => {
                ErrorKind::ParseFailure
            }
        }
    }
}
