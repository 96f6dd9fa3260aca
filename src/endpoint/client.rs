use crate::{
    FetchError,
    config::{EndpointConfig, QueryEncoding},
};
use async_trait::async_trait;
use reqwest::{Url, header::CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, warn};

/// Remote inference service answering a single prompt with a JSON payload.
#[async_trait]
pub trait InferenceEndpoint: Send + Sync {
    async fn query(&self, prompt: &str) -> std::result::Result<Value, FetchError>;
}

pub struct HttpEndpoint {
    client: reqwest::Client,
    base_url: String,
    query_param: String,
    query_encoding: QueryEncoding,
    send_json_content_type: bool,
}

impl HttpEndpoint {
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url,
            query_param: config.query_param,
            query_encoding: config.query_encoding,
            send_json_content_type: config.send_json_content_type,
        }
    }

    /// Builds the GET target for `prompt`.
    ///
    /// In raw mode the prompt is concatenated as-is; characters such as `&`
    /// or `#` therefore change the meaning of the URL.
    pub fn request_url(&self, prompt: &str) -> std::result::Result<String, FetchError> {
        match self.query_encoding {
            QueryEncoding::Raw => {
                let separator = if self.base_url.contains('?') { '&' } else { '?' };
                Ok(format!(
                    "{}{}{}={}",
                    self.base_url, separator, self.query_param, prompt
                ))
            }
            QueryEncoding::Percent => {
                let mut url = Url::parse(&self.base_url)
                    .map_err(|e| FetchError::transport(format!("invalid base URL: {e}")))?;
                url.query_pairs_mut().append_pair(&self.query_param, prompt);
                Ok(url.into())
            }
        }
    }
}

#[async_trait]
impl InferenceEndpoint for HttpEndpoint {
    async fn query(&self, prompt: &str) -> std::result::Result<Value, FetchError> {
        let url = self.request_url(prompt)?;
        debug!("Sending inference request ({} prompt bytes)", prompt.len());

        let mut request = self.client.get(&url);
        if self.send_json_content_type {
            request = request.header(CONTENT_TYPE, "application/json");
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Inference endpoint answered with status {}", status);
        }

        let payload: Value = response.json().await?;
        debug!("Received inference response with status {}", status);

        Ok(payload)
    }
}
