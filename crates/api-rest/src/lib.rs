//! # API REST
//!
//! REST API implementation for PitchSite.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, status codes, CORS)
//!
//! Uses `pitch-core` for lookup and rendering.

#![warn(rust_2018_idioms)]

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use pitch_core::{ErrorKind, PitchError, PitchService};

/// Path of the website generation endpoint.
pub const GENERATE_WEBSITE_PATH: &str = "/api/generate-website";

/// Application state for the REST API server
#[derive(Clone)]
pub struct AppState {
    pub pitch_service: PitchService,
}

/// Request body of the website generation endpoint.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct GenerateWebsiteReq {
    /// Identifier of the pitch to render.
    #[serde(rename = "pitchId", alias = "pitch_id", default)]
    #[schema(value_type = Option<String>)]
    pub pitch_id: Option<serde_json::Value>,
}

impl GenerateWebsiteReq {
    /// The identifier to look up, or `None` when the caller supplied none.
    ///
    /// `null`, `false`, zero and `""` count as missing. Strings are used verbatim; any other value
    /// is looked up by its JSON text, so `42` selects the pitch whose key is `"42"`.
    pub fn pitch_id(&self) -> Option<String> {
        match self.pitch_id.as_ref()? {
            serde_json::Value::Null | serde_json::Value::Bool(false) => None,
            serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// JSON error payload.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Error response carrying a fixed, caller-safe message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    pub const MISSING_PITCH_ID: ApiError = ApiError {
        status: StatusCode::BAD_REQUEST,
        message: "Pitch ID is required",
    };
    pub const NOT_FOUND: ApiError = ApiError {
        status: StatusCode::NOT_FOUND,
        message: "Pitch not found",
    };
    pub const INTERNAL: ApiError = ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Internal server error",
    };

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl From<&PitchError> for ApiError {
    fn from(err: &PitchError) -> Self {
        match err.kind() {
            ErrorKind::MissingInput => ApiError::MISSING_PITCH_ID,
            ErrorKind::NotFound => ApiError::NOT_FOUND,
            ErrorKind::Internal => ApiError::INTERNAL,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorRes {
                error: self.message.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, generate_website),
    components(schemas(GenerateWebsiteReq, ErrorRes, HealthRes))
)]
pub struct ApiDoc;

/// Builds the complete REST router: API routes, Swagger UI and permissive CORS.
pub fn build_router(pitch_service: PitchService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(GENERATE_WEBSITE_PATH, post(generate_website))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState { pitch_service })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the PitchSite REST API service.
/// This endpoint is used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "PitchSite REST API is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/api/generate-website",
    request_body = GenerateWebsiteReq,
    responses(
        (status = 200, description = "Rendered landing page", body = String, content_type = "text/html"),
        (status = 400, description = "Pitch ID missing", body = ErrorRes),
        (status = 404, description = "Pitch not found", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Render the landing page of a stored pitch
///
/// Reads the pitch named in the request body together with its idea and returns the rendered
/// HTML document.
///
/// The body is parsed by hand: a body that is not a valid request yields the generic 500 payload,
/// not the `Json` extractor's plain-text rejection.
///
/// # Errors
/// - `400 Bad Request` if the identifier is missing, `null`, `false`, `0` or `""`.
/// - `404 Not Found` if no pitch matches or the datastore lookup fails.
/// - `500 Internal Server Error` if the body is not a JSON object.
#[axum::debug_handler]
async fn generate_website(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Html<String>, ApiError> {
    let req: GenerateWebsiteReq = serde_json::from_slice(&body).map_err(|e| {
        let err = PitchError::Deserialization(e);
        tracing::error!("Error generating website: {:?}", err);
        ApiError::from(&err)
    })?;

    match state
        .pitch_service
        .generate_website(req.pitch_id().as_deref())
        .await
    {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            match e.kind() {
                ErrorKind::NotFound => tracing::warn!("Pitch not found: {:?}", e),
                ErrorKind::MissingInput => tracing::debug!("Rejected request: {}", e),
                ErrorKind::Internal => tracing::error!("Error generating website: {:?}", e),
            }
            Err(ApiError::from(&e))
        }
    }
}
