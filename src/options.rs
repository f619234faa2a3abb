//! Registration options and UI configuration defaults.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::assets::DEFAULT_BASE_DIR;
use crate::redirect::DEFAULT_ROUTE_PREFIX;

/// Keys of the UI configuration the plugin always sets itself.
pub const COMPUTED_UI_KEYS: [&str; 2] = ["url", "oauth2RedirectUrl"];

/// Document URL, relative to `<prefix>/static/index.html`.
pub const SPEC_URL: &str = "../json";

/// OAuth2 redirect page, relative to `<prefix>/static/index.html`.
pub const OAUTH2_REDIRECT_URL: &str = "./oauth2-redirect.html";

/// Options accepted when registering the plugin.
///
/// Keys may be given in camelCase (`routePrefix`) or snake_case
/// (`route_prefix`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsOptions {
    #[serde(default = "default_route_prefix", alias = "route_prefix")]
    pub route_prefix: String,
    /// Merged over [`default_ui_config`].
    #[serde(default, alias = "ui_config")]
    pub ui_config: Map<String, Value>,
    /// Handed to the UI's `initOAuth` call as-is.
    #[serde(default, rename = "initOAuth", alias = "init_oauth")]
    pub init_oauth: Map<String, Value>,
    /// Directory holding the asset bundle.
    #[serde(default = "default_base_dir", alias = "base_dir")]
    pub base_dir: PathBuf,
}

fn default_route_prefix() -> String {
    DEFAULT_ROUTE_PREFIX.to_string()
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(DEFAULT_BASE_DIR)
}

impl Default for DocsOptions {
    fn default() -> Self {
        Self {
            route_prefix: default_route_prefix(),
            ui_config: Map::new(),
            init_oauth: Map::new(),
            base_dir: default_base_dir(),
        }
    }
}

/// Built-in UI settings. Preset and plugin names are resolved to UI objects
/// by `swagger-initializer.js`.
pub fn default_ui_config() -> Map<String, Value> {
    let defaults = json!({
        "dom_id": "#swagger-ui",
        "deepLinking": true,
        "presets": ["apis", "standalone"],
        "plugins": ["DownloadUrl"],
        "layout": "StandaloneLayout",
    });
    match defaults {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Merge caller settings over the defaults, then pin the document and
/// redirect URLs.
pub fn merge_ui_config(
    defaults: &Map<String, Value>,
    overrides: &Map<String, Value>,
    spec_url: &str,
    oauth2_redirect_url: &str,
) -> Map<String, Value> {
    let mut merged = defaults.clone();
    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged.insert("url".to_string(), Value::String(spec_url.to_string()));
    merged.insert(
        "oauth2RedirectUrl".to_string(),
        Value::String(oauth2_redirect_url.to_string()),
    );
    merged
}
