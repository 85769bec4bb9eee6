use reqwest::{
    header::{ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN},
    Client, Method,
};
use tracing::debug;
use url::Url;

use super::CheckSuccess;
use crate::error::CheckError;

/// Response headers a preflight must carry, names are matched case-insensitively.
pub const REQUIRED_CORS_HEADERS: [&str; 3] = [
    "access-control-allow-origin",
    "access-control-allow-methods",
    "access-control-allow-headers",
];

/// Sends a browser-like preflight `OPTIONS /api/`. Status code is not checked,
/// only presence of the allow headers.
pub async fn check_cors_headers(
    client: &Client,
    api_url: &Url,
) -> Result<CheckSuccess, CheckError> {
    debug!("CORS check OPTIONS {}", api_url);
    let response = client
        .request(Method::OPTIONS, api_url.clone())
        .header(ORIGIN, api_url.origin().ascii_serialization())
        .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .send()
        .await?;
    debug!("CORS preflight returned {}", response.status());

    let headers = response.headers();
    let missing: Vec<&'static str> = REQUIRED_CORS_HEADERS
        .into_iter()
        .filter(|name| !headers.contains_key(*name))
        .collect();

    if missing.is_empty() {
        Ok(CheckSuccess::new("CORS headers configured correctly"))
    } else {
        Err(CheckError::MissingHeaders(missing))
    }
}
