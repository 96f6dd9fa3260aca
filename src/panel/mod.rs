mod controller;
pub mod fsm;
mod state;

pub use controller::{PanelController, SharedPanel};
pub use fsm::{PanelEvent, PanelState, PanelStateMachine};
pub use state::{PanelView, QueryPanel, Submission};
