use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Default target when no URL is given.
pub const DEFAULT_TARGET_URL: &str = "https://www.riffusion.com/";

#[derive(Parser, Debug)]
#[command(name = "crumb")]
#[command(about = "Read cookies from a running Chromium over the DevTools protocol")]
#[command(version)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Remote debugging address of the running browser
    #[arg(
        short,
        long,
        global = true,
        value_name = "HOST:PORT",
        default_value = crumb::DEFAULT_ENDPOINT
    )]
    pub endpoint: String,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum, default_value = "text")]
    pub format: CliOutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI output format (clap-compatible enum)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CliOutputFormat {
    /// Human-readable progress and report
    #[default]
    Text,
    /// Single JSON document on stdout
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Navigate a page to URL and print the cookies it can see
    #[command(alias = "cookies")]
    Fetch {
        /// Target URL
        #[arg(default_value = DEFAULT_TARGET_URL)]
        url: String,

        /// Navigation timeout in milliseconds (load + network idle)
        #[arg(long, value_name = "MS", default_value_t = 30_000)]
        timeout_ms: u64,

        /// Detach from the browser when done instead of leaving the
        /// connection to die with the process
        #[arg(long)]
        disconnect: bool,
    },

    /// List pages currently open in the browser
    Pages,
}
