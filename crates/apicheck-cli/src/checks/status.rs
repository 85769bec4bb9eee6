use apicheck_types::status::{StatusCheckCreate, TEST_CLIENT_NAME};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use super::{json_type_name, ok_json, CheckSuccess};
use crate::error::CheckError;

const STATUS_PATH: &str = "status";

/// `POST /api/status` must echo the client name and assign `id` and `timestamp`.
pub async fn check_create_status(
    client: &Client,
    api_url: &Url,
) -> Result<CheckSuccess, CheckError> {
    let url = api_url.join(STATUS_PATH)?;
    let payload = StatusCheckCreate::new(TEST_CLIENT_NAME);
    debug!("Create status check POST {} {:?}", url, payload);

    let response = client.post(url).json(&payload).send().await?;
    let data = ok_json(response).await?;

    let name_matches =
        data.get("client_name").and_then(Value::as_str) == Some(payload.client_name.as_str());
    let id = data
        .get("id")
        .filter(|_| name_matches && data.get("timestamp").is_some())
        .map(id_to_string);
    let Some(id) = id else {
        return Err(CheckError::UnexpectedBody(data));
    };
    info!("Created status check {}", id);

    Ok(CheckSuccess::new(format!("Create status check passed (id: {id})")).with_created_id(id))
}

fn id_to_string(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `GET /api/status` must return a JSON array, empty one included.
pub async fn check_list_status(
    client: &Client,
    api_url: &Url,
) -> Result<CheckSuccess, CheckError> {
    let url = api_url.join(STATUS_PATH)?;
    debug!("List status checks GET {}", url);

    let response = client.get(url).send().await?;
    match ok_json(response).await? {
        Value::Array(records) => Ok(CheckSuccess::new(format!(
            "Get status checks passed - Found {} records",
            records.len()
        ))),
        other => Err(CheckError::NotAList(json_type_name(&other))),
    }
}
