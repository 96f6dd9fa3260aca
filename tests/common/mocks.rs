use async_trait::async_trait;
use query_panel::{FetchError, endpoint::InferenceEndpoint};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Mock inference endpoint for testing
#[derive(Debug)]
pub struct MockEndpoint {
    pub responses: Arc<Mutex<Vec<Result<Value, FetchError>>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub started: Arc<Notify>,
    pub release: Option<Arc<Notify>>,
}

impl MockEndpoint {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            started: Arc::new(Notify::new()),
            release: None,
        }
    }

    pub fn with_response(self, response: Value) -> Self {
        self.responses.lock().unwrap().push(Ok(response));
        self
    }

    pub fn with_error(self, error: FetchError) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    /// Holds every query until the returned handle is notified.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let release = Arc::new(Notify::new());
        self.release = Some(release.clone());
        (self, release)
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceEndpoint for MockEndpoint {
    async fn query(&self, prompt: &str) -> Result<Value, FetchError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.started.notify_one();

        if let Some(release) = &self.release {
            release.notified().await;
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(FetchError::transport("No more mock responses available"));
        }

        responses.remove(0)
    }
}

impl Default for MockEndpoint {
    fn default() -> Self {
        Self::new()
    }
}
