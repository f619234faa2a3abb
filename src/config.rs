//! Configuration module for the demo host.
//!
//! Loads configuration from YAML files and environment variables.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use swagger_docs::DocsOptions;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Documentation plugin options.
    #[serde(default)]
    pub docs: DocsOptions,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DOCS_*)
    /// 2. config/local.yaml (if exists)
    /// 3. config/default.yaml (if exists)
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(false))
            // Layer on local overrides
            .add_source(File::with_name("config/local").required(false))
            // Layer on environment variables with DOCS_ prefix
            .add_source(
                Environment::with_prefix("DOCS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_yaml_source() {
        let yaml = r#"
server:
  host: 0.0.0.0
  port: 8080
docs:
  route_prefix: /v1/documentation
  init_oauth:
    scopes: [openid, profile]
"#;
        let builder =
            ConfigLoader::builder().add_source(File::from_str(yaml, FileFormat::Yaml));
        let config: Config = builder.build().unwrap().try_deserialize().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.docs.route_prefix, "/v1/documentation");
        assert_eq!(
            config.docs.init_oauth["scopes"],
            serde_json::json!(["openid", "profile"])
        );
        assert!(config.docs.ui_config.is_empty());
    }

    #[test]
    fn test_defaults_without_sources() {
        let config: Config = ConfigLoader::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.docs.route_prefix, "/documentation");
    }
}
