use super::MockEndpoint;
use query_panel::{
    config::{
        Config, EndpointConfig, LogsConfig, PanelConfig, QueryEncoding, ResponseExtraction,
        ServerConfig,
    },
    panel::{PanelController, QueryPanel},
};
use std::sync::Arc;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        endpoint: create_test_endpoint_config("https://api.example.com/dev"),
        panel: PanelConfig::default(),
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
    }
}

pub fn create_test_endpoint_config(base_url: &str) -> EndpointConfig {
    EndpointConfig {
        base_url: base_url.to_string(),
        query_param: "prompt".to_string(),
        query_encoding: QueryEncoding::Raw,
        send_json_content_type: true,
        extraction: ResponseExtraction::Body,
        timeout_secs: None,
    }
}

/// Build a controller around `endpoint`, returning the endpoint for inspection
pub fn create_test_controller(
    endpoint: MockEndpoint,
    config: &EndpointConfig,
) -> (PanelController, Arc<MockEndpoint>) {
    let endpoint = Arc::new(endpoint);
    let panel = QueryPanel::new(&PanelConfig::default());
    let controller = PanelController::new(panel, endpoint.clone(), config);
    (controller, endpoint)
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
endpoint:
  base_url: "https://92l8ekt6ul.execute-api.us-west-2.amazonaws.com/dev"
  query_encoding: percent
  extraction: whole
  timeout_secs: 30
panel:
  title: "Incident Summarization"
  busy_label: "Working..."
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"
"#;
