use super::state::{PanelView, QueryPanel};
use crate::{
    Error, FetchError, Result,
    config::{EndpointConfig, ResponseExtraction},
    endpoint::{InferenceEndpoint, extract_output},
};
use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};
use tracing::{error, info, warn};

pub type SharedPanel = Arc<Mutex<QueryPanel>>;

/// Drives submissions of one shared panel against an inference endpoint.
#[derive(Clone)]
pub struct PanelController {
    panel: SharedPanel,
    endpoint: Arc<dyn InferenceEndpoint>,
    extraction: ResponseExtraction,
    timeout: Option<Duration>,
}

impl PanelController {
    pub fn new(
        panel: QueryPanel,
        endpoint: Arc<dyn InferenceEndpoint>,
        config: &EndpointConfig,
    ) -> Self {
        Self {
            panel: Arc::new(Mutex::new(panel)),
            endpoint,
            extraction: config.extraction,
            timeout: config.timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn view(&self) -> Result<PanelView> {
        Ok(self.lock()?.view())
    }

    pub fn set_input(&self, text: impl Into<String>) -> Result<PanelView> {
        let mut panel = self.lock()?;
        panel.on_input_change(text);
        Ok(panel.view())
    }

    pub fn cancel(&self) -> Result<PanelView> {
        let mut panel = self.lock()?;
        if panel.cancel()? {
            info!("Cancelled in-flight submission");
        }
        Ok(panel.view())
    }

    /// Runs one submission to completion and returns the resulting view.
    ///
    /// Fails with `InvalidTransition` if a submission is already in flight.
    /// Fetch failures are not errors here; they end up in the output text.
    pub async fn submit(&self) -> Result<PanelView> {
        self.run(None).await
    }

    /// Like `submit`, but first replaces the input with `text` under the same
    /// lock, so the prompt sent is exactly `text`.
    pub async fn submit_input(&self, text: impl Into<String>) -> Result<PanelView> {
        self.run(Some(text.into())).await
    }

    async fn run(&self, input: Option<String>) -> Result<PanelView> {
        let submission = {
            let mut panel = self.lock()?;
            if let Some(text) = input {
                panel.on_input_change(text);
            }
            panel.begin_submit()?
        };
        info!(
            request_id = %submission.request_id,
            "Submitting prompt #{} ({} bytes)",
            submission.sequence,
            submission.prompt.len()
        );

        let mut guard = InFlight {
            panel: &self.panel,
            sequence: submission.sequence,
            armed: true,
        };

        let outcome = self.fetch(&submission.prompt).await;
        match &outcome {
            Ok(_) => info!(request_id = %submission.request_id, "Submission succeeded"),
            Err(e) => error!(request_id = %submission.request_id, "Submission failed: {}", e),
        }

        let mut panel = self.lock()?;
        if !panel.complete(submission.sequence, outcome)? {
            warn!(
                request_id = %submission.request_id,
                "Submission #{} finished after it was superseded",
                submission.sequence
            );
        }
        guard.armed = false;
        Ok(panel.view())
    }

    async fn fetch(&self, prompt: &str) -> std::result::Result<String, FetchError> {
        let call = self.endpoint.query(prompt);
        let payload = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| FetchError::Timeout(limit.as_secs()))??,
            None => call.await?,
        };
        extract_output(self.extraction, &payload)
    }

    fn lock(&self) -> Result<MutexGuard<'_, QueryPanel>> {
        self.panel
            .lock()
            .map_err(|_| Error::internal("panel state lock poisoned"))
    }
}

// Returns the panel to idle if a submission future is dropped mid-flight.
struct InFlight<'a> {
    panel: &'a Mutex<QueryPanel>,
    sequence: u64,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Ok(mut panel) = self.panel.lock() {
            if let Ok(true) = panel.abandon(self.sequence) {
                warn!("Submission #{} dropped before completion", self.sequence);
            }
        }
    }
}
