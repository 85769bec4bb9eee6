pub mod cors;
pub mod health;
pub mod status;

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use url::Url;

use crate::error::CheckError;

/// Upper bound for every request made by checks.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn build_client(timeout: Duration) -> crate::Result<Client> {
    let client = Client::builder().timeout(timeout).build()?;
    Ok(client)
}

/// Checks in order of execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Health,
    CorsHeaders,
    CreateStatus,
    ListStatus,
}

impl Check {
    pub const ALL: [Check; 4] = [
        Check::Health,
        Check::CorsHeaders,
        Check::CreateStatus,
        Check::ListStatus,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Check::Health => "API Health Check",
            Check::CorsHeaders => "CORS Headers",
            Check::CreateStatus => "Create Status Check",
            Check::ListStatus => "Get Status Checks",
        }
    }

    pub async fn execute(self, client: &Client, api_url: &Url) -> Result<CheckSuccess, CheckError> {
        match self {
            Check::Health => health::check_health(client, api_url).await,
            Check::CorsHeaders => cors::check_cors_headers(client, api_url).await,
            Check::CreateStatus => status::check_create_status(client, api_url).await,
            Check::ListStatus => status::check_list_status(client, api_url).await,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckSuccess {
    pub message: String,
    pub created_id: Option<String>,
}

impl CheckSuccess {
    pub fn new(message: impl Into<String>) -> Self {
        CheckSuccess {
            message: message.into(),
            created_id: None,
        }
    }

    pub fn with_created_id(mut self, id: String) -> Self {
        self.created_id = Some(id);
        self
    }
}

/// Reads the body and requires exactly 200 OK with a JSON payload.
pub(crate) async fn ok_json(response: Response) -> Result<Value, CheckError> {
    let status = response.status();
    let body = response.text().await?;
    if status != StatusCode::OK {
        return Err(CheckError::UnexpectedStatus { status, body });
    }
    serde_json::from_str(&body).map_err(|_| CheckError::InvalidJson { body })
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
