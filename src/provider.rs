//! Source of the OpenAPI document served by the plugin.

use serde_json::Value;

use crate::error::DocsResult;

/// Produces the OpenAPI document describing the host application.
///
/// The plugin never builds documents itself; it only encodes what the
/// provider returns.
pub trait DocumentationProvider: Send + Sync + 'static {
    /// The current document as an in-memory JSON value.
    fn document(&self) -> DocsResult<Value>;

    /// The document serialized as YAML.
    fn yaml(&self) -> DocsResult<String> {
        Ok(serde_yaml::to_string(&self.document()?)?)
    }
}

impl DocumentationProvider for utoipa::openapi::OpenApi {
    fn document(&self) -> DocsResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn yaml(&self) -> DocsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// A pre-built document, e.g. loaded from a file at startup.
impl DocumentationProvider for Value {
    fn document(&self) -> DocsResult<Value> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use utoipa::openapi::{InfoBuilder, OpenApiBuilder};

    #[test]
    fn test_utoipa_document() {
        let api = OpenApiBuilder::new()
            .info(InfoBuilder::new().title("Test API").version("1.2.3").build())
            .build();

        let doc = api.document().unwrap();
        assert!(doc["openapi"].as_str().unwrap().starts_with("3."));
        assert_eq!(doc["info"]["title"], "Test API");

        let yaml: Value = serde_yaml::from_str(&api.yaml().unwrap()).unwrap();
        assert_eq!(yaml["info"]["version"], "1.2.3");
    }

    #[test]
    fn test_static_document_yaml() {
        let doc = json!({"openapi": "3.0.3", "info": {"title": "t", "version": "1"}, "paths": {}});

        let yaml = doc.yaml().unwrap();
        assert!(yaml.contains("openapi: 3.0.3"));
        let parsed: Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, doc);
    }
}
