use crate::{Error, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

// Panel states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    Idle,
    Busy,
}

// Panel events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    Submit,
    Resolved,
    Cancelled,
    /// The submission was dropped before it resolved.
    Abandoned,
}

pub struct PanelStateMachine {
    state: PanelState,
}

impl PanelStateMachine {
    pub fn new() -> Self {
        Self {
            state: PanelState::Idle,
        }
    }

    pub fn current_state(&self) -> PanelState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == PanelState::Busy
    }

    pub fn transition(&mut self, event: PanelEvent) -> Result<()> {
        let old_state = self.state;
        debug!("🔄 Panel processing event {:?} in state {:?}", event, old_state);

        let new_state = match (old_state, event) {
            (PanelState::Idle, PanelEvent::Submit) => PanelState::Busy,
            (PanelState::Busy, PanelEvent::Resolved)
            | (PanelState::Busy, PanelEvent::Cancelled)
            | (PanelState::Busy, PanelEvent::Abandoned) => PanelState::Idle,
            _ => {
                warn!(
                    "❌ Invalid panel transition from {:?} with event {:?}",
                    old_state, event
                );
                return Err(Error::invalid_transition(
                    format!("{old_state:?}"),
                    format!("{event:?}"),
                ));
            }
        };

        info!(
            "🎯 Panel state transition: {:?} -> {:?} (event: {:?})",
            old_state, new_state, event
        );

        self.state = new_state;
        Ok(())
    }
}

impl Default for PanelStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_initial_state_is_idle() {
        let fsm = PanelStateMachine::new();
        assert_eq!(fsm.current_state(), PanelState::Idle);
        assert!(!fsm.is_busy());
    }

    #[rstest]
    #[case(PanelEvent::Resolved)]
    #[case(PanelEvent::Cancelled)]
    #[case(PanelEvent::Abandoned)]
    fn test_busy_always_returns_to_idle(#[case] exit: PanelEvent) {
        let mut fsm = PanelStateMachine::new();
        fsm.transition(PanelEvent::Submit).unwrap();
        assert!(fsm.is_busy());

        fsm.transition(exit).unwrap();
        assert_eq!(fsm.current_state(), PanelState::Idle);
    }

    #[rstest]
    #[case(PanelEvent::Resolved)]
    #[case(PanelEvent::Cancelled)]
    #[case(PanelEvent::Abandoned)]
    fn test_exit_events_rejected_when_idle(#[case] event: PanelEvent) {
        let mut fsm = PanelStateMachine::new();
        assert!(fsm.transition(event).is_err());
        assert_eq!(fsm.current_state(), PanelState::Idle);
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut fsm = PanelStateMachine::new();
        fsm.transition(PanelEvent::Submit).unwrap();

        let err = fsm.transition(PanelEvent::Submit).unwrap_err();
        assert_eq!(err.to_string(), "Invalid state transition: Busy -> Submit");
        assert_eq!(fsm.current_state(), PanelState::Busy);
    }
}
