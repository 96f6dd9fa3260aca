use serde::{Deserialize, Serialize};

/// Inference endpoint used when the config does not name one.
pub const DEFAULT_BASE_URL: &str = "https://92l8ekt6ul.execute-api.us-west-2.amazonaws.com/dev";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_query_param")]
    pub query_param: String,
    #[serde(default)]
    pub query_encoding: QueryEncoding,
    #[serde(default = "default_true")]
    pub send_json_content_type: bool,
    #[serde(default)]
    pub extraction: ResponseExtraction,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// How the input text is placed into the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryEncoding {
    /// Appended verbatim after `<param>=`.
    #[default]
    Raw,
    /// Form-urlencoded.
    Percent,
}

/// Which part of the JSON response is shown as output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseExtraction {
    /// The `body` field of a JSON object.
    #[default]
    Body,
    /// The whole payload.
    Whole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_input_label")]
    pub input_label: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_output_label")]
    pub output_label: String,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
    #[serde(default = "default_busy_label")]
    pub busy_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            query_param: default_query_param(),
            query_encoding: QueryEncoding::default(),
            send_json_content_type: default_true(),
            extraction: ResponseExtraction::default(),
            timeout_secs: None,
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            input_label: default_input_label(),
            placeholder: default_placeholder(),
            output_label: default_output_label(),
            submit_label: default_submit_label(),
            busy_label: default_busy_label(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_query_param() -> String {
    "prompt".to_string()
}

fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "Incident Summarization".to_string()
}

fn default_input_label() -> String {
    "Incident Details".to_string()
}

fn default_placeholder() -> String {
    "Paste your case details here...".to_string()
}

fn default_output_label() -> String {
    "Incident Summary".to_string()
}

fn default_submit_label() -> String {
    "Submit".to_string()
}

fn default_busy_label() -> String {
    "Summarizing...".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}
