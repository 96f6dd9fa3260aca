use super::fsm::{PanelEvent, PanelState, PanelStateMachine};
use crate::{FetchError, Result, config::PanelConfig};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

/// Snapshot of the panel as the page renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub input_text: String,
    pub output_text: String,
    pub busy: bool,
    pub submit_enabled: bool,
    pub submit_label: String,
    pub last_completed_at: Option<DateTime<Utc>>,
}

/// One accepted submission. `sequence` identifies it when the result comes back.
#[derive(Debug, Clone)]
pub struct Submission {
    pub sequence: u64,
    pub request_id: Uuid,
    pub prompt: String,
}

pub struct QueryPanel {
    input_text: String,
    output_text: String,
    fsm: PanelStateMachine,
    sequence: u64,
    last_completed_at: Option<DateTime<Utc>>,
    submit_label: String,
    busy_label: String,
}

impl QueryPanel {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            input_text: String::new(),
            output_text: String::new(),
            fsm: PanelStateMachine::new(),
            sequence: 0,
            last_completed_at: None,
            submit_label: config.submit_label.clone(),
            busy_label: config.busy_label.clone(),
        }
    }

    pub fn on_input_change(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn output_text(&self) -> &str {
        &self.output_text
    }

    pub fn state(&self) -> PanelState {
        self.fsm.current_state()
    }

    pub fn is_busy(&self) -> bool {
        self.fsm.is_busy()
    }

    /// Enters the busy state and clears the output. Fails while a submission
    /// is already in flight.
    pub fn begin_submit(&mut self) -> Result<Submission> {
        self.fsm.transition(PanelEvent::Submit)?;
        self.sequence += 1;
        self.output_text.clear();

        Ok(Submission {
            sequence: self.sequence,
            request_id: Uuid::new_v4(),
            prompt: self.input_text.clone(),
        })
    }

    /// Applies the outcome of submission `sequence`. Returns `false` when the
    /// submission is no longer current and the outcome was discarded.
    pub fn complete(
        &mut self,
        sequence: u64,
        outcome: std::result::Result<String, FetchError>,
    ) -> Result<bool> {
        if !self.is_current(sequence) {
            debug!("Discarding stale result for submission #{}", sequence);
            return Ok(false);
        }

        self.output_text = match outcome {
            Ok(text) => text,
            Err(e) => e.display_text(),
        };
        self.last_completed_at = Some(Utc::now());
        self.fsm.transition(PanelEvent::Resolved)?;
        Ok(true)
    }

    /// Returns to idle without touching the output. The in-flight result, if
    /// any, will be discarded when it arrives.
    pub fn cancel(&mut self) -> Result<bool> {
        if !self.is_busy() {
            return Ok(false);
        }
        self.fsm.transition(PanelEvent::Cancelled)?;
        Ok(true)
    }

    /// Releases the busy state for a submission that will never complete.
    pub fn abandon(&mut self, sequence: u64) -> Result<bool> {
        if !self.is_current(sequence) {
            return Ok(false);
        }
        self.fsm.transition(PanelEvent::Abandoned)?;
        Ok(true)
    }

    pub fn view(&self) -> PanelView {
        let busy = self.is_busy();
        PanelView {
            input_text: self.input_text.clone(),
            output_text: self.output_text.clone(),
            busy,
            submit_enabled: !busy,
            submit_label: if busy {
                self.busy_label.clone()
            } else {
                self.submit_label.clone()
            },
            last_completed_at: self.last_completed_at,
        }
    }

    fn is_current(&self, sequence: u64) -> bool {
        self.is_busy() && sequence == self.sequence
    }
}
