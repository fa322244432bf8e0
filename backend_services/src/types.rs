use copilot_core::SessionView;
use uuid::Uuid;

#[derive(serde::Deserialize, serde::Serialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
    pub view: SessionView,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub sessions: usize,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
