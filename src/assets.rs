//! The Swagger UI asset bundle.
//!
//! The bundle is the `dist/` folder (HTML, CSS, JS, source maps, icons).
//! It is read once at startup into an immutable table; the set of servable
//! files never changes afterwards. Swagger UI's own distribution files that
//! the folder lacks are taken from the copy vendored by `utoipa-swagger-ui`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Bytes;
use walkdir::WalkDir;

use crate::error::{DocsError, DocsResult};

/// Entry page of the UI. A bundle without it cannot serve anything useful.
pub const INDEX_FILE: &str = "index.html";

/// Default bundle location, relative to the working directory.
pub const DEFAULT_BASE_DIR: &str = "dist";

/// Content type used for extensions missing from the lookup table.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Swagger UI distribution files filled in from the vendored copy.
///
/// `index.html` and `swagger-initializer.js` are never vendored: the pair
/// in `dist/` is what talks to `uiConfig` and `initOAuth`.
pub const VENDOR_FILES: &[&str] = &[
    "swagger-ui.css",
    "swagger-ui.css.map",
    "swagger-ui-bundle.js",
    "swagger-ui-bundle.js.map",
    "swagger-ui-standalone-preset.js",
    "swagger-ui-standalone-preset.js.map",
    "index.css",
    "oauth2-redirect.html",
    "favicon-16x16.png",
    "favicon-32x32.png",
];

/// Map a file extension to its response content type.
///
/// Text types carry an explicit UTF-8 charset, binary types don't.
pub fn content_type_for(path: &str) -> &'static str {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=UTF-8",
        Some("js") => "application/javascript; charset=UTF-8",
        Some("css") => "text/css; charset=UTF-8",
        Some("map") | Some("json") => "application/json; charset=UTF-8",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => DEFAULT_CONTENT_TYPE,
    }
}

/// A single servable file.
#[derive(Debug, Clone)]
pub struct StaticFile {
    /// Path relative to the bundle root, `/`-separated.
    pub relative_path: String,
    /// Absolute location on disk at load time, `None` for vendored files.
    pub absolute_path: Option<PathBuf>,
    pub content_type: &'static str,
    pub contents: Bytes,
}

/// The loaded asset bundle.
#[derive(Debug, Clone)]
pub struct AssetBundle {
    root: PathBuf,
    files: HashMap<String, StaticFile>,
}

impl AssetBundle {
    /// Load every file under `root`, then add the [`VENDOR_FILES`] it lacks.
    ///
    /// Files on disk always win over vendored ones.
    pub fn load(root: impl AsRef<Path>) -> DocsResult<Self> {
        let mut bundle = Self::load_dir(root)?;
        let vendored = bundle.fill_vendor_files();

        tracing::debug!(
            root = %bundle.root.display(),
            files = bundle.files.len(),
            vendored,
            "Asset bundle loaded"
        );

        Ok(bundle)
    }

    /// Load exactly the files under `root`.
    ///
    /// Fails with [`DocsError::MissingAssetBundle`] when the directory is
    /// absent and [`DocsError::MissingAsset`] when it has no `index.html`.
    pub fn load_dir(root: impl AsRef<Path>) -> DocsResult<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(DocsError::MissingAssetBundle(root.to_path_buf()));
        }
        let root = fs::canonicalize(root)?;
        let files = collect_files(&root)?;

        if !files.contains_key(INDEX_FILE) {
            return Err(DocsError::MissingAsset(root.join(INDEX_FILE)));
        }

        Ok(Self { root, files })
    }

    fn fill_vendor_files(&mut self) -> usize {
        let config = Arc::new(utoipa_swagger_ui::Config::new(["../json"]));
        let mut added = 0;

        for name in VENDOR_FILES {
            if self.files.contains_key(*name) {
                continue;
            }
            match utoipa_swagger_ui::serve(name, config.clone()) {
                Ok(Some(file)) => {
                    self.files.insert(
                        name.to_string(),
                        StaticFile {
                            relative_path: name.to_string(),
                            absolute_path: None,
                            content_type: content_type_for(name),
                            contents: Bytes::from(file.bytes.into_owned()),
                        },
                    );
                    added += 1;
                }
                Ok(None) => tracing::debug!(file = name, "Not in the vendored Swagger UI"),
                Err(error) => {
                    tracing::warn!(file = name, %error, "Vendored Swagger UI file unreadable")
                }
            }
        }
        added
    }

    /// Look up a file by its path relative to the bundle root.
    ///
    /// An empty path resolves to `index.html`.
    pub fn get(&self, relative_path: &str) -> Option<&StaticFile> {
        let relative_path = relative_path.trim_start_matches('/');
        if relative_path.is_empty() {
            return self.files.get(INDEX_FILE);
        }
        self.files.get(relative_path)
    }

    pub fn index(&self) -> Option<&StaticFile> {
        self.files.get(INDEX_FILE)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Relative paths of all files, sorted.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.files.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

fn collect_files(root: &Path) -> DocsResult<HashMap<String, StaticFile>> {
    let mut files = HashMap::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let contents = Bytes::from(fs::read(entry.path())?);
        files.insert(
            relative_path.clone(),
            StaticFile {
                content_type: content_type_for(&relative_path),
                relative_path,
                absolute_path: Some(entry.into_path()),
                contents,
            },
        );
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_table() {
        assert_eq!(content_type_for("index.html"), "text/html; charset=UTF-8");
        assert_eq!(
            content_type_for("swagger-ui-bundle.js"),
            "application/javascript; charset=UTF-8"
        );
        assert_eq!(content_type_for("swagger-ui.css"), "text/css; charset=UTF-8");
        assert_eq!(
            content_type_for("swagger-ui.css.map"),
            "application/json; charset=UTF-8"
        );
        assert_eq!(content_type_for("favicon-32x32.png"), "image/png");
        assert_eq!(content_type_for("FAVICON.PNG"), "image/png");
        assert_eq!(content_type_for("LICENSE"), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type_for("archive.tar.gz"), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_load_bundle() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
        fs::create_dir(dir.path().join("img")).unwrap();
        fs::write(dir.path().join("img").join("logo.png"), [0x89, b'P', b'N', b'G']).unwrap();

        let bundle = AssetBundle::load_dir(dir.path()).unwrap();
        assert_eq!(bundle.len(), 3);
        assert_eq!(bundle.paths(), vec!["app.js", "img/logo.png", "index.html"]);

        let logo = bundle.get("img/logo.png").unwrap();
        assert_eq!(logo.content_type, "image/png");
        assert_eq!(logo.contents.as_ref(), &[0x89, b'P', b'N', b'G']);

        // Empty path serves the index page
        assert_eq!(bundle.get("").unwrap().relative_path, INDEX_FILE);
        assert!(bundle.get("../Cargo.toml").is_none());
        assert!(bundle.get("missing.css").is_none());
    }

    #[test]
    fn test_missing_bundle_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = AssetBundle::load(&missing).unwrap_err();
        assert!(matches!(err, DocsError::MissingAssetBundle(path) if path == missing));
    }

    #[test]
    fn test_bundle_without_index() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.js"), "").unwrap();

        let err = AssetBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, DocsError::MissingAsset(_)));
    }

    #[test]
    fn test_shipped_bundle_loads() {
        let bundle = AssetBundle::load(concat!(env!("CARGO_MANIFEST_DIR"), "/dist")).unwrap();
        assert!(bundle.get("swagger-initializer.js").is_some());
        assert!(bundle.get("oauth2-redirect.html").is_some());

        for name in ["swagger-ui.css", "swagger-ui-bundle.js", "swagger-ui-standalone-preset.js"] {
            let file = bundle.get(name).unwrap_or_else(|| panic!("{name} missing"));
            assert!(!file.contents.is_empty(), "{name} is empty");
        }
    }

    #[test]
    fn test_disk_files_win_over_vendored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("index.css"), "body { margin: 0 }").unwrap();

        let bundle = AssetBundle::load(dir.path()).unwrap();
        let css = bundle.get("index.css").unwrap();
        assert_eq!(css.contents.as_ref(), b"body { margin: 0 }");
        assert!(css.absolute_path.is_some());

        let vendored = bundle.get("swagger-ui-bundle.js").unwrap();
        assert!(vendored.absolute_path.is_none());
        assert_eq!(vendored.content_type, "application/javascript; charset=UTF-8");

        // The UI entry pair is never taken from the vendored copy
        assert!(bundle.get("swagger-initializer.js").is_none());
    }
}
