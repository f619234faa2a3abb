//! HTTP request handlers.

use axum::{
    extract::{Path, Query},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use swagger_docs::{DocsError, ErrorResponse};

use crate::api::types::*;

/// Service health.
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Search examples.
///
/// GET /example
#[utoipa::path(
    get,
    path = "/example",
    params(ExampleQuery),
    responses(
        (status = 200, description = "Matching example", body = ExampleResponse)
    ),
    tag = "example"
)]
pub async fn get_example(Query(query): Query<ExampleQuery>) -> Json<ExampleResponse> {
    Json(ExampleResponse {
        hello: query.hello.unwrap_or_else(|| "world".to_string()),
        limit: Some(query.limit),
    })
}

/// Create an example.
///
/// POST /example
#[utoipa::path(
    post,
    path = "/example",
    request_body = ExampleRequest,
    responses(
        (status = 200, description = "Example created", body = ExampleResponse),
        (status = 400, description = "Invalid request")
    ),
    security(
        ("api_key" = [])
    ),
    tag = "example"
)]
pub async fn create_example(Json(request): Json<ExampleRequest>) -> Json<ExampleResponse> {
    tracing::info!(hello = %request.hello, "Example created");

    Json(ExampleResponse {
        hello: request.hello,
        limit: None,
    })
}

/// Echo a path parameter.
///
/// GET /parameters/{id}
#[utoipa::path(
    get,
    path = "/parameters/{id}",
    params(
        ("id" = String, Path, description = "user id")
    ),
    responses(
        (status = 200, description = "Parameter echoed", body = ParameterResponse)
    ),
    tag = "example"
)]
pub async fn get_parameter(Path(id): Path<String>) -> Json<ParameterResponse> {
    Json(ParameterResponse { id })
}

/// Not-found response shared by the router fallback and the docs plugin.
pub fn not_found_response(method: &Method, uri: &Uri) -> Response {
    let err = DocsError::not_found(method, uri.path());
    tracing::debug!(error = %err, "No route matched");
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new(StatusCode::NOT_FOUND, err.to_string())))
        .into_response()
}

/// Router fallback.
pub async fn fallback(method: Method, uri: Uri) -> Response {
    not_found_response(&method, &uri)
}
