use clap::Parser;
use crumb_cli::{cli::Cli, commands, logging};
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let endpoint = cli.endpoint.clone();
    if let Err(err) = commands::dispatch(cli).await {
        error!(target = "crumb", error = %err, "command failed");
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            error!(target = "crumb", %cause, "caused by");
            source = cause.source();
        }

        let port = endpoint
            .rsplit_once(':')
            .map_or("9222", |(_, port)| port.trim_end_matches('/'));
        eprintln!("Make sure the browser was started with --remote-debugging-port={port}");
        std::process::exit(1);
    }
}
