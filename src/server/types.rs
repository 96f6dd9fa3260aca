use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct InputUpdate {
    pub text: String,
}

/// Optional body of a submit request carrying the text to send.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
