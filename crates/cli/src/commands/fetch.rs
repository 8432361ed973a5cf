//! The cookie-fetch flow: attach, pick a page, navigate, report.
//!
//! Strictly sequential; the first failing step aborts the rest.

use crumb::{DebugEndpoint, IdlePolicy, PageOrigin, Session, goto_and_settle, page_cookies};
use tracing::info;

use crate::error::Result;
use crate::output::{self, OutputFormat};

pub async fn execute(
    endpoint: &DebugEndpoint,
    url: &str,
    timeout_ms: u64,
    disconnect: bool,
    format: OutputFormat,
) -> Result<()> {
    info!(target = "crumb", %url, %endpoint, "fetching cookies");

    if format.is_text() {
        println!("Connecting to browser at {endpoint}...");
    }
    let session = Session::attach(endpoint).await?;

    let (page, origin) = session.first_or_new_page().await?;
    if format.is_text() {
        match origin {
            PageOrigin::Reused => println!("Reusing the first open tab."),
            PageOrigin::Created => println!("No open tabs, created a new one."),
        }
    }

    if format.is_text() {
        println!("Navigating to {url}...");
    }
    let policy = IdlePolicy::with_timeout_ms(timeout_ms);
    goto_and_settle(&page, url, &policy).await?;

    if format.is_text() {
        println!("Page loaded. Reading cookies...");
    }
    let cookies = page_cookies(&page).await?;
    info!(target = "crumb", count = cookies.len(), "cookies read");

    match format {
        OutputFormat::Text => println!("{}", output::render_cookie_report(url, &cookies)),
        OutputFormat::Json => println!("{}", output::render_cookie_json(url, &cookies)?),
    }

    if disconnect {
        session.detach();
        info!(target = "crumb", "detached from browser");
    }

    Ok(())
}
