// Axum API Server Module
//
// Purpose: REST API for the OpenOA public website. Serves the static content
// catalog (analysis methods, features, documentation, team) and acknowledges
// contact form submissions.
// All routes except `/` and `/openapi.json` live under the configured prefix.

use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Path, State},
    http::{request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};

use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use serde_json::Value;
use std::any::Any;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::lookup::{DocTopic, LookupError};
use crate::models::{
    AnalysisListResponse, AnalysisMethod, ContactMessage, ContactResponse, DocSection,
    FeaturesListResponse, FieldError, HealthResponse, RootResponse, TeamResponse,
};
use crate::notify::{LogSink, NotificationSink};
use crate::openapi::openapi_spec;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub settings: Arc<Settings>,
    pub sink: Arc<dyn NotificationSink>,
    openapi: Arc<Value>,
}

impl AppState {
    /// State with the default log-only notification sink
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        let openapi = openapi_spec(&settings.app_name, &settings.app_version, &settings.api_prefix);
        Self {
            catalog: Arc::new(catalog),
            settings: Arc::new(settings),
            sink: Arc::new(LogSink),
            openapi: Arc::new(openapi),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sink = sink;
        self
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health_check))

        // Analysis methods
        .route("/analysis", get(list_analysis_methods))
        .route("/analysis/:method_id", get(get_analysis_method))

        // Features
        .route("/features", get(list_features))

        // Documentation: overview, installation, schema, citations
        .route("/docs/:topic", get(get_doc_section))
        .route("/team", get(get_team))

        // Contact form
        .route("/contact", post(submit_contact));

    let router = Router::new()
        .route("/", get(root))
        .route("/openapi.json", get(openapi_document));

    // Axum cannot nest at the root, so an empty prefix merges instead
    let prefix = state.settings.api_prefix.clone();
    let router = if prefix.is_empty() {
        router.merge(api)
    } else {
        router.nest(&prefix, api)
    };

    let cors = cors_layer(&state.settings);

    router
        .fallback(route_not_found)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

/// Configured origins plus anything matching the preview-deployment pattern.
/// Credentials are allowed, so methods and headers mirror the request instead
/// of using wildcards.
fn cors_layer(settings: &Arc<Settings>) -> CorsLayer {
    let policy = Arc::clone(settings);
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|origin| policy.origin_allowed(origin))
                    .unwrap_or(false)
            },
        ))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to the {}", state.settings.app_name),
        version: state.settings.app_version.clone(),
        docs: "/openapi.json".to_string(),
    })
}

async fn openapi_document(State(state): State<AppState>) -> Json<Value> {
    Json(state.openapi.as_ref().clone())
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(&state.settings.app_version))
}

async fn list_analysis_methods(State(state): State<AppState>) -> Json<AnalysisListResponse> {
    Json(AnalysisListResponse::new(state.catalog.analysis_methods().to_vec()))
}

async fn get_analysis_method(
    State(state): State<AppState>,
    Path(method_id): Path<String>,
) -> Result<Json<AnalysisMethod>, AppError> {
    tracing::debug!("Fetching analysis method {}", method_id);
    let method = state.catalog.find_analysis_method(&method_id)?;
    Ok(Json(method.clone()))
}

async fn list_features(State(state): State<AppState>) -> Json<FeaturesListResponse> {
    Json(FeaturesListResponse::new(state.catalog.features().to_vec()))
}

async fn get_doc_section(
    State(state): State<AppState>,
    Path(topic): Path<String>,
) -> Result<Json<DocSection>, AppError> {
    let topic: DocTopic = topic.parse()?;
    Ok(Json(state.catalog.doc(topic).clone()))
}

async fn get_team(State(state): State<AppState>) -> Json<TeamResponse> {
    Json(TeamResponse::new(state.catalog.team().to_vec()))
}

/// Validate the body, hand it to the sink, and acknowledge.
///
/// The acknowledgment does not depend on the sink: a failed delivery is
/// logged and the client still sees `success: true`.
async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(body) = payload?;
    let message = ContactMessage::from_json(&body).map_err(AppError::Validation)?;

    if let Err(e) = state.sink.deliver(&message) {
        tracing::warn!("Contact notification from {} not delivered: {}", message.email, e);
    }

    Ok(Json(ContactResponse::acknowledged()))
}

async fn route_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::Internal(detail).into_response()
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Validation(Vec<FieldError>),
    /// Body could not be read as JSON (syntax, content type, size)
    Rejected(String),
    Internal(String),
}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        AppError::NotFound(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::json!({ "detail": msg })),
            AppError::Validation(fields) => {
                let detail: Vec<Value> = fields
                    .iter()
                    .map(|f| {
                        let loc = if f.field == "body" {
                            serde_json::json!(["body"])
                        } else {
                            serde_json::json!(["body", f.field])
                        };
                        serde_json::json!({ "loc": loc, "msg": f.message(), "type": f.reason })
                    })
                    .collect();
                (StatusCode::UNPROCESSABLE_ENTITY, serde_json::json!({ "detail": detail }))
            }
            AppError::Rejected(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, serde_json::json!({ "detail": msg }))
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "detail": "internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
