//! Attached CDP session lifecycle.

use chromiumoxide::Page;
use chromiumoxide::browser::Browser;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::endpoint::DebugEndpoint;
use crate::error::{Error, Result};

/// Whether [`Session::first_or_new_page`] reused an open tab or created one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOrigin {
    Reused,
    Created,
}

/// An attached connection to an already-running browser.
///
/// The browser process is externally managed: dropping the session (or
/// calling [`Session::detach`]) closes the WebSocket and nothing else.
/// Nothing here can close or kill the browser itself.
pub struct Session {
    browser: Browser,
    events: JoinHandle<()>,
}

impl Session {
    /// Discovers the WebSocket debugger URL for `endpoint` and attaches.
    pub async fn attach(endpoint: &DebugEndpoint) -> Result<Self> {
        let version = endpoint.fetch_version().await?;
        debug!(target = "crumb", ws = %version.web_socket_debugger_url, "attaching");

        let (browser, mut handler) = Browser::connect(version.web_socket_debugger_url)
            .await
            .map_err(Error::Attach)?;

        // The handler must be polled for the connection to make progress; it
        // carries no command logic and stops on the first transport error.
        let events = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(err) = event {
                    warn!(target = "crumb", error = %err, "event pump stopped");
                    break;
                }
            }
        });

        Ok(Self { browser, events })
    }

    /// Returns the first open page, or creates a blank one when the browser
    /// has none. The ordering is whatever the browser reports.
    pub async fn first_or_new_page(&self) -> Result<(Page, PageOrigin)> {
        if let Some(page) = self.browser.pages().await?.into_iter().next() {
            debug!(target = "crumb", "reusing first open page");
            return Ok((page, PageOrigin::Reused));
        }

        debug!(target = "crumb", "no open pages, creating one");
        let page = self.browser.new_page("about:blank").await?;
        Ok((page, PageOrigin::Created))
    }

    /// URLs of the open pages, in listing order.
    pub async fn page_urls(&self) -> Result<Vec<String>> {
        let mut urls = Vec::new();
        for page in self.browser.pages().await? {
            urls.push(page.url().await?.unwrap_or_else(|| "about:blank".into()));
        }
        Ok(urls)
    }

    /// Drops the connection without touching the browser.
    pub fn detach(self) {
        self.events.abort();
    }
}
