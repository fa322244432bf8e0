use copilot_core::SessionView;

pub use copilot_core::{DashboardView, RawLogView, TranscriptLine};

#[derive(Clone, PartialEq)]
pub enum ProcessingState {
    Idle,
    Loading,
    Error(String),
}

#[derive(serde::Deserialize)]
pub struct SessionCreated {
    pub session_id: String,
    pub view: SessionView,
}

#[derive(serde::Serialize)]
pub struct SendMessageRequest<'a> {
    pub message: &'a str,
}

#[derive(serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
