use std::process::ExitCode;

use apicheck_cli::run::run;
use apicheck_types::config::{CheckConfig, Parser as _};
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match CheckConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // usage errors are configuration errors, exit 1 instead of clap's 2
            e.print().ok();
            return ExitCode::FAILURE;
        }
    };

    match run(&config, std::io::stdout()).await {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("Smoke test run failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
