use std::sync::Arc;

use anyhow::{Error, Result};
use axum::{
    Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{
    clients::health::HealthChecker,
    error::SyncError,
    models::{
        health::HealthStatus,
        page::{NamePage, PageRequest},
        template::{CreateTemplateResponse, TemplateDefinition, TemplateDto, TemplatesResponse},
    },
    sync::TemplateSynchronizer,
};

pub const MIRROR_SYNC_HEADER: &str = "x-mirror-sync";

pub struct AppState {
    pub synchronizer: TemplateSynchronizer,
    pub health_checker: HealthChecker,
}

impl AppState {
    pub fn new(synchronizer: TemplateSynchronizer) -> Self {
        let health_checker = HealthChecker::new(synchronizer.store());
        Self {
            synchronizer,
            health_checker,
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Sync(SyncError),
    NotFound(String),
}

impl From<SyncError> for ApiError {
    fn from(err: SyncError) -> Self {
        ApiError::Sync(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Sync(SyncError::InvalidRequest(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Sync(SyncError::InvalidRequest(rejection.body_text()))
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, details) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "TEMPLATE_NOT_FOUND", None),
            ApiError::Sync(SyncError::InvalidRequest(_)) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", None)
            }
            ApiError::Sync(SyncError::UpstreamUnavailable(_)) => {
                (StatusCode::BAD_GATEWAY, "UPSTREAM_UNAVAILABLE", None)
            }
            ApiError::Sync(SyncError::UpstreamRejected { status, body }) => {
                let status = StatusCode::from_u16(*status)
                    .ok()
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                (status, "UPSTREAM_REJECTED", Some(body.clone()))
            }
            ApiError::Sync(SyncError::Persistence(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "PERSISTENCE_FAILURE", None)
            }
            ApiError::Sync(SyncError::Mapping(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "MAPPING_ERROR", None)
            }
        };

        let message = match &self {
            ApiError::NotFound(name) => format!("Template not found: {}", name),
            ApiError::Sync(e) => e.to_string(),
        };

        if status.is_server_error() {
            error!(code, error = %message, "Template request failed");
        }

        (
            status,
            Json(ErrorResponse {
                error: ErrorBody {
                    code,
                    message,
                    details,
                },
            }),
        )
            .into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let templates = Router::new()
        .route("/create", post(create_template))
        .route("/get-all", get(list_all_templates))
        .route("/names", get(list_template_names))
        .route("/provider/{name}", get(fetch_template_from_provider))
        .route("/{name}", get(get_template_by_name));

    Router::new()
        .nest("/template", templates)
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(port: u16, state: Arc<AppState>) -> Result<(), Error> {
    let app = router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Template service started");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn create_template(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TemplateDefinition>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(definition) = payload?;
    let outcome = state.synchronizer.create(definition).await?;
    let sync_state = outcome.persistence.as_str();

    Ok((
        StatusCode::OK,
        [(MIRROR_SYNC_HEADER, sync_state)],
        Json::<CreateTemplateResponse>(outcome.upstream),
    ))
}

async fn list_all_templates(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TemplatesResponse>, ApiError> {
    Ok(Json(state.synchronizer.list_all().await?))
}

async fn get_template_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<TemplateDto>, ApiError> {
    state
        .synchronizer
        .get_by_name(&name)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(name))
}

async fn fetch_template_from_provider(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<TemplateDto>, ApiError> {
    state
        .synchronizer
        .fetch_from_provider(&name)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(name))
}

async fn list_template_names(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<NamePage>, ApiError> {
    let Query(request) = query?;
    Ok(Json(state.synchronizer.list_names(request).await?))
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_checker.check_all().await;

    let status_code = match health.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}
