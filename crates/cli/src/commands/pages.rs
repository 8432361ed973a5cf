//! Lists the pages the browser currently has open.

use crumb::{DebugEndpoint, Session};
use tracing::info;

use crate::error::Result;
use crate::output::{self, OutputFormat};

pub async fn execute(endpoint: &DebugEndpoint, format: OutputFormat) -> Result<()> {
    info!(target = "crumb", %endpoint, "listing pages");

    let session = Session::attach(endpoint).await?;
    let urls = session.page_urls().await?;

    match format {
        OutputFormat::Text => println!("{}", output::render_page_list(&urls)),
        OutputFormat::Json => println!("{}", output::render_page_list_json(&urls)?),
    }

    Ok(())
}
