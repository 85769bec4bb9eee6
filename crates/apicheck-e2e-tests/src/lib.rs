use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use anyhow::Result;
use apicheck_types::status::{StatusCheck, StatusCheckCreate};
use axum::{
    Json, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use reqwest::Url;
use serde_json::json;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

/// Behaviour of the fixture API, default is a healthy server.
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    pub greeting: String,
    /// Anything else than 200 makes health answer with this status.
    pub health_status: StatusCode,
    pub cors: bool,
    /// Anything else than 200 makes create fail with this status.
    pub create_status: StatusCode,
    /// Served as is by create instead of the stored record.
    pub create_body: Option<serde_json::Value>,
    pub list_status: StatusCode,
    pub list_as_object: bool,
    /// Raw text returned by list with status 200.
    pub list_raw_body: Option<String>,
    /// Delays health endpoint response.
    pub health_delay: Option<Duration>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig {
            greeting: "Hello World".to_string(),
            health_status: StatusCode::OK,
            cors: true,
            create_status: StatusCode::OK,
            create_body: None,
            list_status: StatusCode::OK,
            list_as_object: false,
            list_raw_body: None,
            health_delay: None,
        }
    }
}

#[derive(Clone)]
struct FixtureState {
    config: Arc<FixtureConfig>,
    records: Arc<Mutex<Vec<StatusCheck>>>,
}

pub struct Fixture {
    pub base_url: Url,
    requests: Arc<AtomicUsize>,
}

impl Fixture {
    /// Number of requests received so far, preflights included.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

pub async fn spawn_fixture(config: FixtureConfig) -> Result<Fixture> {
    let requests = Arc::new(AtomicUsize::new(0));
    let cors = config.cors;
    let state = FixtureState {
        config: Arc::new(config),
        records: Arc::new(Mutex::new(Vec::new())),
    };

    let mut app = Router::new()
        .route("/api/", get(root))
        .route("/api/status", get(list_status).post(create_status))
        .with_state(state);
    if cors {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }
    let app = app.layer(middleware::from_fn_with_state(
        requests.clone(),
        count_requests,
    ));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    debug!("Fixture API listening on {}", addr);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Ok(Fixture {
        base_url: Url::parse(&format!("http://{}", addr))?,
        requests,
    })
}

/// URL of a local port with nothing listening on it.
pub async fn closed_port_url() -> Result<Url> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(Url::parse(&format!("http://{}", addr))?)
}

async fn count_requests(
    State(counter): State<Arc<AtomicUsize>>,
    request: Request,
    next: Next,
) -> Response {
    counter.fetch_add(1, Ordering::SeqCst);
    next.run(request).await
}

async fn root(State(state): State<FixtureState>) -> Response {
    if let Some(delay) = state.config.health_delay {
        tokio::time::sleep(delay).await;
    }
    if state.config.health_status != StatusCode::OK {
        return (state.config.health_status, "Service unavailable").into_response();
    }
    Json(json!({"message": state.config.greeting})).into_response()
}

async fn create_status(
    State(state): State<FixtureState>,
    Json(payload): Json<StatusCheckCreate>,
) -> Response {
    if state.config.create_status != StatusCode::OK {
        return (state.config.create_status, "Internal error").into_response();
    }
    if let Some(body) = &state.config.create_body {
        return Json(body.clone()).into_response();
    }

    let record = StatusCheck {
        id: uuid::Uuid::new_v4().to_string(),
        client_name: payload.client_name,
        timestamp: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default(),
    };
    state.records.lock().unwrap().push(record.clone());
    Json(record).into_response()
}

async fn list_status(State(state): State<FixtureState>) -> Response {
    if state.config.list_status != StatusCode::OK {
        return (state.config.list_status, "Database error").into_response();
    }
    if let Some(body) = &state.config.list_raw_body {
        return (StatusCode::OK, body.clone()).into_response();
    }
    let records = state.records.lock().unwrap().clone();
    if state.config.list_as_object {
        Json(json!({ "items": records })).into_response()
    } else {
        Json(records).into_response()
    }
}
