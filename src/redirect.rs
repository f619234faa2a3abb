//! Route prefix handling and redirect resolution.
//!
//! Everything here is independent of how the router is mounted: targets are
//! relative, so an outer prefix added by the host never changes them.

use std::fmt;

use crate::error::{DocsError, DocsResult};

/// Prefix used when none is configured.
pub const DEFAULT_ROUTE_PREFIX: &str = "/documentation";

/// Relative path of the UI entry page below the prefix.
pub const STATIC_INDEX: &str = "static/index.html";

/// A validated, normalized route prefix.
///
/// Always starts with `/` and never ends with one, except for the root `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePrefix(String);

impl RoutePrefix {
    pub fn parse(raw: &str) -> DocsResult<Self> {
        let raw = raw.trim();
        if !raw.starts_with('/') {
            return Err(DocsError::InvalidConfig(format!(
                "routePrefix must start with '/': {raw:?}"
            )));
        }
        if raw.chars().any(|c| c.is_whitespace() || matches!(c, ':' | '*' | '{' | '}')) {
            return Err(DocsError::InvalidConfig(format!(
                "routePrefix contains reserved characters: {raw:?}"
            )));
        }

        let trimmed = raw.trim_end_matches('/');
        if trimmed.contains("//") {
            return Err(DocsError::InvalidConfig(format!(
                "routePrefix contains an empty segment: {raw:?}"
            )));
        }
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, `None` for the root prefix.
    pub fn last_segment(&self) -> Option<&str> {
        if self.is_root() {
            return None;
        }
        self.0.rsplit('/').next()
    }

    /// Join a sub-path onto the prefix without doubling slashes.
    pub fn join(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if self.is_root() {
            format!("/{path}")
        } else {
            format!("{}/{path}", self.0)
        }
    }
}

impl Default for RoutePrefix {
    fn default() -> Self {
        Self(DEFAULT_ROUTE_PREFIX.to_string())
    }
}

impl fmt::Display for RoutePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the relative `Location` for a request that hit the prefix itself.
///
/// `request_path` may carry any outer prefix the host mounted the plugin
/// under; only its trailing slash matters.
pub fn resolve_redirect(prefix: &RoutePrefix, request_path: &str) -> String {
    match prefix.last_segment() {
        Some(segment) if !request_path.ends_with('/') => {
            format!("./{segment}/{STATIC_INDEX}")
        }
        _ => format!("./{STATIC_INDEX}"),
    }
}
