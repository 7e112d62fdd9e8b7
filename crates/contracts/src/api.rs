use serde::{Deserialize, Serialize};

/// Common response envelope for the JSON operation endpoints
/// (`POST /sign_apk/{id}`, `POST /test_ai`).
///
/// `success: false` with an HTTP error status is still a well-formed
/// logical failure, not a transport error, so the client parses the body
/// regardless of status code. Unknown extra fields (`signed_path`,
/// `sample_code`, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStatus {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}
