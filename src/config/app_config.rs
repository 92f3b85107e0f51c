use std::time::Duration;

use serde::Deserialize;

use crate::domain::DomainError;
use crate::domain::storage::DEFAULT_PAGE_SIZE;
use crate::infrastructure::cache::InMemoryCacheConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub cache: CacheSettings,
    pub pagination: PaginationConfig,
    /// Load the bundled Northwind sample rows at startup
    pub seed_sample_data: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Bounds for the process-local response cache
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub max_capacity: u64,
    pub time_to_idle_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_page_size: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            cache: CacheSettings::default(),
            pagination: PaginationConfig::default(),
            seed_sample_data: true,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            time_to_idle_secs: None,
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CacheSettings {
    pub fn to_cache_config(&self) -> InMemoryCacheConfig {
        let config = InMemoryCacheConfig::default().with_max_capacity(self.max_capacity);

        match self.time_to_idle_secs {
            Some(secs) => config.with_time_to_idle(Duration::from_secs(secs)),
            None => config,
        }
    }
}

impl AppConfig {
    /// Loads `config/default`, `config/local` and `APP__*` variables, in that order
    pub fn load() -> Result<Self, DomainError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, DomainError> {
        builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| DomainError::configuration(format!("Failed to load configuration: {}", e)))
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server_address(), "0.0.0.0:8080");
        assert_eq!(config.pagination.default_page_size, 10);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{"server": {"port": 9090}, "logging": {"format": "json"}}"#,
        )
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.cache.max_capacity, 10_000);
    }

    fn from_json(document: &str) -> Result<AppConfig, DomainError> {
        AppConfig::from_builder(
            config::Config::builder()
                .add_source(config::File::from_str(document, config::FileFormat::Json)),
        )
    }

    #[test]
    fn test_load_from_source() {
        let config = from_json(r#"{"pagination": {"default_page_size": 25}}"#).unwrap();

        assert_eq!(config.pagination.default_page_size, 25);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_invalid_source_is_configuration_error() {
        let result = from_json(r#"{"server": {"port": "not-a-port"}}"#);

        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_cache_settings_conversion() {
        let settings = CacheSettings {
            max_capacity: 500,
            time_to_idle_secs: Some(30),
        };

        let cache_config = settings.to_cache_config();

        assert_eq!(cache_config.max_capacity, 500);
        assert_eq!(cache_config.time_to_idle, Some(Duration::from_secs(30)));
    }
}
