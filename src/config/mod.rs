mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path).await
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    parse(&config_str)
}

/// Parses and validates a YAML configuration document.
pub fn parse(config_str: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.base_url.trim().is_empty() {
            return Err(Error::config("endpoint.base_url must not be empty"));
        }
        if self.endpoint.query_param.trim().is_empty() {
            return Err(Error::config("endpoint.query_param must not be empty"));
        }
        if self.endpoint.timeout_secs == Some(0) {
            return Err(Error::config("endpoint.timeout_secs must be greater than zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = parse("endpoint:\n  base_url: \"https://example.com/dev\"\n").unwrap();

        assert_eq!(config.endpoint.query_param, "prompt");
        assert_eq!(config.endpoint.query_encoding, QueryEncoding::Raw);
        assert_eq!(config.endpoint.extraction, ResponseExtraction::Body);
        assert!(config.endpoint.send_json_content_type);
        assert_eq!(config.endpoint.timeout_secs, None);
        assert_eq!(config.panel.submit_label, "Submit");
        assert_eq!(config.panel.busy_label, "Summarizing...");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.logs.level, "info");
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        let err = parse("endpoint:\n  base_url: \"\"\n").unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let yaml = "endpoint:\n  base_url: \"https://example.com\"\n  timeout_secs: 0\n";
        assert!(matches!(parse(yaml), Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_endpoint_section_uses_default_endpoint() {
        let config = parse("server:\n  port: 9000\n").unwrap();

        assert_eq!(config.endpoint.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.endpoint.query_param, "prompt");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_endpoint_without_base_url_uses_default() {
        let config = parse("endpoint:\n  extraction: whole\n").unwrap();

        assert_eq!(config.endpoint.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.endpoint.extraction, ResponseExtraction::Whole);
    }

    #[test]
    fn test_empty_document_is_all_defaults() {
        let config = parse("{}").unwrap();
        assert_eq!(config.endpoint.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.panel.title, "Incident Summarization");
    }
}
