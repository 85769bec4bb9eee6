use std::io::Write;

use apicheck_types::CheckConfig;
use reqwest::Client;
use tracing::{error, info, warn};
use url::Url;

use crate::{
    checks::{build_client, Check, REQUEST_TIMEOUT},
    error::Result,
    report::{CheckResult, Report, Reporter, EXIT_FAILURE},
};

/// Runs all checks against the configured API and returns the process exit status.
/// Missing configuration is reported before any client is created.
pub async fn run<W: Write>(config: &CheckConfig, out: W) -> Result<u8> {
    let mut reporter = Reporter::new(out);
    let api_url = match config.api_url() {
        Ok(url) => url,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            reporter.config_error(&e)?;
            return Ok(EXIT_FAILURE);
        }
    };

    let client = build_client(REQUEST_TIMEOUT)?;
    let report = run_checks(&client, &api_url, &mut reporter).await?;
    Ok(report.exit_status())
}

/// Executes checks one by one. Check failures end up in the report, only
/// output errors are returned.
pub async fn run_checks<W: Write>(
    client: &Client,
    api_url: &Url,
    reporter: &mut Reporter<W>,
) -> Result<Report> {
    reporter.banner(api_url)?;

    let mut report = Report::default();
    for check in Check::ALL {
        reporter.check_started(check)?;
        let outcome = check.execute(client, api_url).await;
        match &outcome {
            Ok(_) => info!("{} passed", check.title()),
            Err(e) => warn!("{} failed: {}", check.title(), e.detail()),
        }
        reporter.check_finished(check, &outcome)?;

        let (passed, created_id) = match outcome {
            Ok(success) => (true, success.created_id),
            Err(_) => (false, None),
        };
        report.push(CheckResult {
            check,
            passed,
            created_id,
        });
    }

    reporter.summary(&report)?;
    Ok(report)
}
