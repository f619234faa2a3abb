//! Route definitions for the API.

use axum::{routing::get, Router};
use swagger_docs::{DocsOptions, DocsResult, SwaggerDocs};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers;

/// Security scheme modifier for OpenAPI.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("apiKey"))),
            );
        }
    }
}

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health_check,
        handlers::get_example,
        handlers::create_example,
        handlers::get_parameter,
    ),
    components(schemas(
        crate::api::types::HealthResponse,
        crate::api::types::ExampleRequest,
        crate::api::types::ExampleObject,
        crate::api::types::ExampleResponse,
        crate::api::types::ParameterResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "example", description = "Example endpoints"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "Swagger Docs Demo API",
        version = "0.1.0",
        description = "Sample service documented by the swagger-docs plugin",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router with the documentation routes mounted.
pub fn build_router(docs: DocsOptions) -> DocsResult<Router> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let docs_routes: Router = SwaggerDocs::with_options(ApiDoc::openapi(), docs)
        .not_found_handler(handlers::not_found_response)
        .into_router()?;

    Ok(Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/example",
            get(handlers::get_example).post(handlers::create_example),
        )
        .route("/parameters/:id", get(handlers::get_parameter))
        // OpenAPI docs
        .merge(docs_routes)
        .fallback(handlers::fallback)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_router() -> Router {
        crate::logging::init_test();
        let docs = DocsOptions {
            base_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/dist").into(),
            ..DocsOptions::default()
        };
        build_router(docs).unwrap()
    }

    async fn send(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap_or_default())
    }

    #[tokio::test]
    async fn test_api_routes_and_docs_share_router() {
        let (status, body) = send(test_router(), "/example?hello=there").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hello"], "there");

        let (status, body) = send(test_router(), "/documentation/json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"].get("/parameters/{id}").is_some());
    }

    #[tokio::test]
    async fn test_not_found_is_consistent() {
        // Router fallback
        let (status, body) = send(test_router(), "/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Route GET:/nowhere not found");

        // Plugin defers to the same handler
        let (status, body) = send(test_router(), "/documentation/static/stuff.css").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["statusCode"], 404);
        assert_eq!(
            body["message"],
            "Route GET:/documentation/static/stuff.css not found"
        );
    }

    #[test]
    fn test_openapi_document_lists_routes() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        assert!(doc["openapi"].as_str().unwrap().starts_with("3."));
        for path in ["/health", "/example", "/parameters/{id}"] {
            assert!(doc["paths"].get(path).is_some(), "missing {path}");
        }
        assert!(doc["paths"]["/example"].get("post").is_some());
        assert!(doc["components"]["securitySchemes"].get("api_key").is_some());
    }
}
