mod fetch;
mod pages;

use crumb::DebugEndpoint;

use crate::cli::{Cli, Commands};
use crate::error::Result;

pub async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        verbose: _,
        endpoint,
        format,
        command,
    } = cli;

    let endpoint = DebugEndpoint::parse(&endpoint)?;
    let format = format.into();

    match command {
        Commands::Fetch {
            url,
            timeout_ms,
            disconnect,
        } => fetch::execute(&endpoint, &url, timeout_ms, disconnect, format).await,
        Commands::Pages => pages::execute(&endpoint, format).await,
    }
}
