use serde::{Deserialize, Serialize};

use crate::model::LogEntry;
use crate::store::LogStore;

pub const SIDEBAR_HEADER: &str = "Conversation Logs (raw)";

/// A log entry exactly as stored, tagged with its 1-based turn number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLogView {
    pub turn: usize,
    pub entry: LogEntry,
}

impl RawLogView {
    pub fn title(&self) -> String {
        format!("Turn {}:", self.turn)
    }

    pub fn pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.entry).unwrap_or_else(|_| "{}".to_string())
    }
}

pub fn render_raw_logs(logs: &LogStore) -> Vec<RawLogView> {
    logs.iter()
        .enumerate()
        .map(|(index, entry)| RawLogView {
            turn: index + 1,
            entry: entry.clone(),
        })
        .collect()
}
