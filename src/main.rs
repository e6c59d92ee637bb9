//! liftkit - operator toolkit for GameLift fleets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use liftkit::cli::output;
use liftkit::cli::{execute, Cli};
use liftkit::core::constants::LOG_ENV;
use liftkit::error::{ConfigError, DownloadError, Error, RemoteError};

fn main() {
    let cli = Cli::parse();

    // LIFTKIT_LOG wins over --verbose
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("liftkit=debug")
        } else {
            EnvFilter::new("liftkit=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Remote(RemoteError::Client(_)) => {
                Some("configure AWS credentials and a region, e.g. run: aws configure")
            }
            Error::Config(ConfigError::Parse(_) | ConfigError::Invalid(_)) => {
                Some("check liftkit.toml")
            }
            Error::Download(DownloadError::UnsupportedPlatform(_)) => {
                Some("e.g. --platform linux-x64")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
