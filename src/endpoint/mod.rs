mod client;
mod extract;

pub use client::{HttpEndpoint, InferenceEndpoint};
pub use extract::extract_output;
