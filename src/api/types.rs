//! API request and response types.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ==================== Health ====================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ==================== Example ====================

/// Query parameters for the example search.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExampleQuery {
    /// Free-text filter.
    #[serde(default)]
    pub hello: Option<String>,
    /// Maximum number of results.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    20
}

/// Body accepted by `POST /example`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ExampleRequest {
    /// Greeting to echo back.
    pub hello: String,
    #[serde(default)]
    pub obj: Option<ExampleObject>,
}

/// Nested object within an example request.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ExampleObject {
    pub some: String,
}

/// Response of the example endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExampleResponse {
    pub hello: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

// ==================== Parameters ====================

/// Echo of a path parameter.
#[derive(Debug, Serialize, ToSchema)]
pub struct ParameterResponse {
    /// User id taken from the path.
    pub id: String,
}
