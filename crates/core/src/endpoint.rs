//! Remote debugging endpoint discovery.
//!
//! A browser started with `--remote-debugging-port` serves its metadata over
//! plain HTTP; `/json/version` advertises the WebSocket URL an attached
//! session actually dials.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Default attach address when none is configured.
pub const DEFAULT_ENDPOINT: &str = "127.0.0.1:9222";

const DISCOVERY_TIMEOUT: Duration = Duration::from_secs(5);

/// `host:port` of a browser exposing remote debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugEndpoint {
    host: String,
    port: u16,
}

/// `/json/version` response subset from the DevTools protocol.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    #[serde(rename = "webSocketDebuggerUrl")]
    pub web_socket_debugger_url: String,
    #[serde(rename = "Browser")]
    pub browser: Option<String>,
}

impl DebugEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Parses `HOST:PORT`, accepting an optional `http://` prefix and a
    /// trailing slash so the address can be pasted straight from a browser
    /// launch log.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.starts_with("https://") {
            return Err(Error::InvalidEndpoint(format!(
                "{input}: remote debugging is served over http, not https"
            )));
        }

        let stripped = trimmed
            .strip_prefix("http://")
            .unwrap_or(trimmed)
            .trim_end_matches('/');

        let (host, port) = stripped
            .rsplit_once(':')
            .ok_or_else(|| Error::InvalidEndpoint(format!("{input}: expected HOST:PORT")))?;
        if host.is_empty() {
            return Err(Error::InvalidEndpoint(format!("{input}: missing host")));
        }
        let port = port
            .parse::<u16>()
            .map_err(|_| Error::InvalidEndpoint(format!("{input}: invalid port")))?;

        Ok(Self::new(host, port))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn version_url(&self) -> String {
        format!("http://{}:{}/json/version", self.host, self.port)
    }

    /// Resolves the browser WebSocket URL via `/json/version`.
    ///
    /// The endpoint must already be listening; nothing is launched or
    /// retried here. Localhost traffic bypasses any configured proxy.
    pub async fn fetch_version(&self) -> Result<VersionInfo> {
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(DISCOVERY_TIMEOUT)
            .build()
            .map_err(|e| Error::Handshake {
                endpoint: self.to_string(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        let response = client.get(self.version_url()).send().await.map_err(|source| {
            Error::EndpointUnreachable {
                endpoint: self.to_string(),
                source,
            }
        })?;

        if !response.status().is_success() {
            return Err(Error::Handshake {
                endpoint: self.to_string(),
                reason: format!("unexpected status {}", response.status()),
            });
        }

        let info: VersionInfo = response.json().await.map_err(|e| Error::Handshake {
            endpoint: self.to_string(),
            reason: format!("malformed /json/version payload: {e}"),
        })?;

        debug!(
            target = "crumb",
            endpoint = %self,
            browser = info.browser.as_deref().unwrap_or("unknown"),
            "resolved debugger url"
        );
        Ok(info)
    }
}

impl Default for DebugEndpoint {
    fn default() -> Self {
        Self::new("127.0.0.1", 9222)
    }
}

impl fmt::Display for DebugEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
