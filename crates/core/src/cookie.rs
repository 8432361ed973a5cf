//! Read-only cookie snapshots.

use chromiumoxide::Page;
use chromiumoxide::cdp::browser_protocol::network;
use serde::Serialize;

use crate::error::Result;

/// One cookie as the page saw it.
///
/// A snapshot taken after navigation; nothing here is ever written back to
/// the browser.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    /// Unix timestamp in seconds; negative for session cookies.
    pub expires: f64,
    pub http_only: bool,
    pub secure: bool,
    pub session: bool,
}

impl CookieRecord {
    /// True when the cookie dies with the browser session.
    pub fn is_session(&self) -> bool {
        self.session || self.expires < 0.0
    }
}

impl From<network::Cookie> for CookieRecord {
    fn from(cookie: network::Cookie) -> Self {
        Self {
            name: cookie.name,
            value: cookie.value,
            domain: cookie.domain,
            path: cookie.path,
            expires: cookie.expires,
            http_only: cookie.http_only,
            secure: cookie.secure,
            session: cookie.session,
        }
    }
}

/// Cookies visible to `page`, in the order the browser returned them.
///
/// An empty vector is a valid result; callers decide how to report it.
pub async fn page_cookies(page: &Page) -> Result<Vec<CookieRecord>> {
    let cookies = page.get_cookies().await?;
    Ok(cookies.into_iter().map(Into::into).collect())
}
