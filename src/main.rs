//! sakari: send SMS and manage contacts through the Sakari API.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use sakari::{ConfigurationError, RequestError, SakariError, SettingsStore};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, OutputCtx, write_error};

#[tokio::main]
async fn main() -> ExitCode {
    // Values from a local .env become SAKARI_* defaults.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let ctx = OutputCtx::new(cli.json, cli.quiet);
    match run(&cli, &ctx).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            write_error(&err, cli.json);
            ExitCode::from(exit_code(&err))
        }
    }
}

async fn run(cli: &Cli, ctx: &OutputCtx) -> Result<()> {
    let mut settings = match &cli.config {
        Some(path) => SettingsStore::open(path)?,
        None => SettingsStore::open_default()?,
    };
    commands::dispatch(&cli.command, &mut settings, ctx).await
}

/// 2 for missing credentials, 3 for failed requests, 1 otherwise.
fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(err) = err.downcast_ref::<SakariError>() {
        return u8::try_from(err.exit_code()).unwrap_or(1);
    }
    if err.is::<ConfigurationError>() {
        2
    } else if err.is::<RequestError>() {
        3
    } else {
        1
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("sakari=debug")
        } else {
            EnvFilter::new("sakari=warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
