use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use verstamp::{VersionInfo, cli::Cli};

fn main() -> ExitCode {
    // Stamp the process-wide value before anything else can read it
    let info = VersionInfo::current();

    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        product = info.name(),
        version = info.version(),
        revision = info.revision(),
        "starting {info}"
    );

    match verstamp::cli::run(&cli, info, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
