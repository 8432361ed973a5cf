use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid debugging endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("debugging endpoint {endpoint} is not reachable")]
    EndpointUnreachable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response from {endpoint}: {reason}")]
    Handshake { endpoint: String, reason: String },

    #[error("browser attach failed")]
    Attach(#[source] chromiumoxide::error::CdpError),

    #[error("navigation failed: {url}")]
    Navigation {
        url: String,
        #[source]
        source: chromiumoxide::error::CdpError,
    },

    #[error("navigation did not settle within {ms}ms: {url}")]
    IdleTimeout { url: String, ms: u64 },

    #[error(transparent)]
    Cdp(#[from] chromiumoxide::error::CdpError),
}
