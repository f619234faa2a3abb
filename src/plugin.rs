//! Plugin registration.
//!
//! [`SwaggerDocs`] validates its options, loads the asset bundle and hands
//! back a [`Router`] the host merges or nests into its own.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    http::{Method, Uri},
    response::Response,
    routing::get,
    Router,
};
use serde_json::{Map, Value};

use crate::assets::AssetBundle;
use crate::error::DocsResult;
use crate::handlers;
use crate::options::{default_ui_config, DocsOptions, COMPUTED_UI_KEYS};
use crate::provider::DocumentationProvider;
use crate::redirect::{resolve_redirect, RoutePrefix};

/// Host-supplied handler for requests the plugin cannot answer.
pub trait NotFoundHandler: Send + Sync + 'static {
    fn not_found(&self, method: &Method, uri: &Uri) -> Response;
}

impl<F> NotFoundHandler for F
where
    F: Fn(&Method, &Uri) -> Response + Send + Sync + 'static,
{
    fn not_found(&self, method: &Method, uri: &Uri) -> Response {
        self(method, uri)
    }
}

/// Rewrites the provider's document before it is encoded.
pub type SpecTransform = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Immutable state shared by every plugin handler.
pub struct DocsState {
    pub prefix: RoutePrefix,
    pub bundle: AssetBundle,
    pub provider: Arc<dyn DocumentationProvider>,
    pub ui_defaults: Map<String, Value>,
    pub ui_config: Map<String, Value>,
    pub init_oauth: Map<String, Value>,
    pub transform: Option<SpecTransform>,
    pub not_found: Option<Arc<dyn NotFoundHandler>>,
}

/// Builder for the documentation routes.
pub struct SwaggerDocs {
    provider: Arc<dyn DocumentationProvider>,
    options: DocsOptions,
    transform: Option<SpecTransform>,
    not_found: Option<Arc<dyn NotFoundHandler>>,
}

impl SwaggerDocs {
    pub fn new(provider: impl DocumentationProvider) -> Self {
        Self::with_options(provider, DocsOptions::default())
    }

    pub fn with_options(provider: impl DocumentationProvider, options: DocsOptions) -> Self {
        Self {
            provider: Arc::new(provider),
            options,
            transform: None,
            not_found: None,
        }
    }

    pub fn route_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.route_prefix = prefix.into();
        self
    }

    pub fn ui_config(mut self, ui_config: Map<String, Value>) -> Self {
        self.options.ui_config = ui_config;
        self
    }

    pub fn init_oauth(mut self, init_oauth: Map<String, Value>) -> Self {
        self.options.init_oauth = init_oauth;
        self
    }

    pub fn base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.options.base_dir = base_dir.into();
        self
    }

    pub fn transform_specification<F>(mut self, transform: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }

    /// Answer unknown files with `handler` instead of the default 404.
    pub fn not_found_handler(mut self, handler: impl NotFoundHandler) -> Self {
        self.not_found = Some(Arc::new(handler));
        self
    }

    /// Validate the options, load the asset bundle and build the routes.
    ///
    /// Fails when the prefix is malformed or the bundle is missing; both
    /// are startup errors the host should not recover from.
    pub fn into_router<S>(self) -> DocsResult<Router<S>>
    where
        S: Clone + Send + Sync + 'static,
    {
        let state = self.into_state()?;
        let prefix = state.prefix.clone();

        tracing::info!(
            route_prefix = %prefix,
            bundle = %state.bundle.root().display(),
            files = state.bundle.len(),
            ui_config_keys = state.ui_config.len(),
            init_oauth = !state.init_oauth.is_empty(),
            custom_not_found = state.not_found.is_some(),
            "Documentation routes registered"
        );

        let mut router: Router<Arc<DocsState>> =
            Router::new().route(prefix.as_str(), get(handlers::redirect));
        if !prefix.is_root() {
            router = router.route(&prefix.join(""), get(handlers::redirect));
        }

        Ok(router
            .route(&prefix.join("static/"), get(handlers::static_index))
            .route(&prefix.join("static/*file"), get(handlers::static_file))
            .route(&prefix.join("json"), get(handlers::openapi_json))
            .route(&prefix.join("yaml"), get(handlers::openapi_yaml))
            .route(&prefix.join("uiConfig"), get(handlers::ui_config))
            .route(&prefix.join("initOAuth"), get(handlers::init_oauth))
            .route(&prefix.join(":file"), get(handlers::unknown_file))
            .with_state(Arc::new(state)))
    }

    /// Mount the routes on `host` below `outer`, as `host.nest(outer, ..)`
    /// would.
    ///
    /// A nested `/` route only answers the bare `outer` path, so with the
    /// root prefix the `outer/` form is registered on the host too.
    pub fn nest_into<S>(self, host: Router<S>, outer: &str) -> DocsResult<Router<S>>
    where
        S: Clone + Send + Sync + 'static,
    {
        let outer = RoutePrefix::parse(outer)?;
        let root_prefix = RoutePrefix::parse(&self.options.route_prefix)?.is_root();
        let docs = self.into_router()?;

        if outer.is_root() {
            return Ok(host.merge(docs));
        }

        let host = host.nest(outer.as_str(), docs);
        if !root_prefix {
            return Ok(host);
        }

        let slash = outer.join("");
        let location = resolve_redirect(&RoutePrefix::root(), &slash);
        tracing::debug!(path = %slash, %location, "Root documentation redirect registered");

        Ok(host.route(
            &slash,
            get(move || std::future::ready(handlers::found(&location))),
        ))
    }

    fn into_state(self) -> DocsResult<DocsState> {
        let prefix = RoutePrefix::parse(&self.options.route_prefix)?;

        for key in COMPUTED_UI_KEYS {
            if self.options.ui_config.contains_key(key) {
                tracing::warn!(key, "uiConfig key is set by the plugin and will be ignored");
            }
        }

        let bundle = AssetBundle::load(&self.options.base_dir)?;

        Ok(DocsState {
            prefix,
            bundle,
            provider: self.provider,
            ui_defaults: default_ui_config(),
            ui_config: self.options.ui_config,
            init_oauth: self.options.init_oauth,
            transform: self.transform,
            not_found: self.not_found,
        })
    }
}
