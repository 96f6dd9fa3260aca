pub mod config;
pub mod endpoint;
pub mod error;
pub mod panel;
pub mod server;

pub use error::{Error, FetchError, Result};
