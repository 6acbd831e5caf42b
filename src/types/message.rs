use serde::{Deserialize, Serialize};

/// Body of `POST /send`. The `message` key is optional in the JSON; presence
/// is validated by the handler, not the deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct SendRequest {
    pub message: Option<String>,
}

/// Acknowledgment returned by `POST /send`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub status: String,
    pub message: String,
}

impl Ack {
    pub fn success(message: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            status: "error".to_string(),
            message: message.to_string(),
        }
    }
}
