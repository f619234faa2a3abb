//! HTTP request handlers for the documentation routes.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, OriginalUri, Path, State},
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use crate::assets::StaticFile;
use crate::error::{DocsError, DocsResult};
use crate::options::{merge_ui_config, OAUTH2_REDIRECT_URL, SPEC_URL};
use crate::plugin::DocsState;
use crate::redirect::resolve_redirect;

const YAML_CONTENT_TYPE: &str = "application/x-yaml";

/// 302 with an empty body.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)], "").into_response()
}

/// GET <prefix> and GET <prefix>/
///
/// Redirects to the static index page with a relative `Location`.
pub async fn redirect(State(state): State<Arc<DocsState>>, uri: Uri) -> Response {
    let location = resolve_redirect(&state.prefix, uri.path());
    tracing::debug!(path = %uri.path(), %location, "Redirecting to documentation UI");

    found(&location)
}

/// GET <prefix>/static/
pub async fn static_index(
    State(state): State<Arc<DocsState>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Response {
    match state.bundle.index() {
        Some(file) => serve_file(file),
        None => not_found(&state, &method, &uri),
    }
}

/// GET <prefix>/static/*file
///
/// A path that fails to decode can't name a bundled file either, so it is
/// answered like any other missing file.
pub async fn static_file(
    State(state): State<Arc<DocsState>>,
    file: Result<Path<String>, PathRejection>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Response {
    let file = match file {
        Ok(Path(file)) => file,
        Err(rejection) => {
            tracing::debug!(error = %rejection, path = %uri.path(), "Undecodable static path");
            return not_found(&state, &method, &uri);
        }
    };

    match state.bundle.get(&file) {
        Some(file) => serve_file(file),
        None => {
            tracing::debug!(file = %file, "Static asset not found");
            not_found(&state, &method, &uri)
        }
    }
}

/// GET <prefix>/:file
///
/// Anything directly below the prefix that isn't a known endpoint.
pub async fn unknown_file(
    State(state): State<Arc<DocsState>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Response {
    not_found(&state, &method, &uri)
}

/// GET <prefix>/json
pub async fn openapi_json(State(state): State<Arc<DocsState>>) -> DocsResult<Json<Value>> {
    Ok(Json(document(&state)?))
}

/// GET <prefix>/yaml
pub async fn openapi_yaml(State(state): State<Arc<DocsState>>) -> DocsResult<Response> {
    let yaml = match &state.transform {
        Some(_) => serde_yaml::to_string(&document(&state)?)?,
        None => state.provider.yaml()?,
    };

    Ok(([(header::CONTENT_TYPE, YAML_CONTENT_TYPE)], yaml).into_response())
}

/// GET <prefix>/uiConfig
///
/// `url` and `oauth2RedirectUrl` are relative to the UI page; the browser
/// resolves them, so they hold behind outer prefixes and proxies.
pub async fn ui_config(State(state): State<Arc<DocsState>>) -> Json<Map<String, Value>> {
    Json(merge_ui_config(
        &state.ui_defaults,
        &state.ui_config,
        SPEC_URL,
        OAUTH2_REDIRECT_URL,
    ))
}

/// GET <prefix>/initOAuth
pub async fn init_oauth(State(state): State<Arc<DocsState>>) -> Json<Map<String, Value>> {
    Json(state.init_oauth.clone())
}

fn document(state: &DocsState) -> DocsResult<Value> {
    let document = state.provider.document()?;
    Ok(match &state.transform {
        Some(transform) => transform(document),
        None => document,
    })
}

fn serve_file(file: &StaticFile) -> Response {
    (
        [(header::CONTENT_TYPE, file.content_type)],
        file.contents.clone(),
    )
        .into_response()
}

fn not_found(state: &DocsState, method: &Method, uri: &Uri) -> Response {
    match &state.not_found {
        Some(handler) => handler.not_found(method, uri),
        None => DocsError::not_found(method, uri.path()).into_response(),
    }
}
