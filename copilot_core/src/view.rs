use serde::{Deserialize, Serialize};

use crate::chat::{render_transcript, TranscriptLine};
use crate::dashboard::{render_dashboard, DashboardView};
use crate::session::SessionState;
use crate::sidebar::{render_raw_logs, RawLogView};

pub const PAGE_TITLE: &str = "🛠 Customer Support Copilot";
pub const DASHBOARD_HEADING: &str = "📊 Ticket Dashboard";
pub const CHAT_HEADING: &str = "🤖 Support Agent";

/// Everything the page shows, rebuilt from scratch after each change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub title: String,
    pub dashboard: DashboardView,
    pub transcript: Vec<TranscriptLine>,
    pub raw_logs: Vec<RawLogView>,
}

impl SessionView {
    pub fn render(state: &SessionState) -> Self {
        Self {
            title: PAGE_TITLE.to_string(),
            dashboard: render_dashboard(state.logs()),
            transcript: render_transcript(state.messages()),
            raw_logs: render_raw_logs(state.logs()),
        }
    }
}
