//! Swagger Docs - interactive API documentation for axum services.
//!
//! Serves the bundled Swagger UI, the host's OpenAPI document as JSON and
//! YAML, and the UI's runtime configuration under a configurable prefix.
//!
//! ```no_run
//! use axum::Router;
//! use swagger_docs::SwaggerDocs;
//!
//! # fn build(api: utoipa::openapi::OpenApi) -> swagger_docs::DocsResult<Router> {
//! let docs: Router = SwaggerDocs::new(api)
//!     .route_prefix("/documentation")
//!     .into_router()?;
//! let app = Router::new().merge(docs);
//! # Ok(app)
//! # }
//! ```
//!
//! To mount below an outer prefix, prefer [`SwaggerDocs::nest_into`] over
//! `Router::nest`: it keeps `<outer>/` working when the route prefix is `/`.

pub mod assets;
pub mod error;
pub mod handlers;
pub mod options;
pub mod plugin;
pub mod provider;
pub mod redirect;

pub use assets::{AssetBundle, StaticFile};
pub use error::{DocsError, DocsResult, ErrorResponse};
pub use options::DocsOptions;
pub use plugin::{DocsState, NotFoundHandler, SwaggerDocs};
pub use provider::DocumentationProvider;
pub use redirect::{resolve_redirect, RoutePrefix};
