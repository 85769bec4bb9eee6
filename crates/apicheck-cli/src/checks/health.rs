use reqwest::Client;
use tracing::debug;
use url::Url;

use super::{ok_json, CheckSuccess};
use crate::error::CheckError;

pub const EXPECTED_GREETING: &str = "Hello World";

/// `GET /api/` must answer `{"message": "Hello World"}`.
pub async fn check_health(client: &Client, api_url: &Url) -> Result<CheckSuccess, CheckError> {
    debug!("Health check GET {}", api_url);
    let response = client.get(api_url.clone()).send().await?;
    let data = ok_json(response).await?;

    match data.get("message").and_then(|m| m.as_str()) {
        Some(EXPECTED_GREETING) => Ok(CheckSuccess::new("Health check passed")),
        _ => Err(CheckError::UnexpectedBody(data)),
    }
}
