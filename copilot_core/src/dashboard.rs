use serde::{Deserialize, Serialize};

use crate::model::LogEntry;
use crate::normalize::{display_field, normalize_classification, truncate, DEFAULT_TRUNCATE_LENGTH};
use crate::store::LogStore;

/// Header cells of the ticket table. The escalation flag only drives styling.
pub const DISPLAY_COLUMNS: [&str; 5] = ["Ticket ID", "Topic", "Sentiment", "Priority", "Response"];

pub const EMPTY_DASHBOARD_MESSAGE: &str =
    "No tickets generated yet. Start a conversation to see tickets here!";

/// Background applied to a whole ticket row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStyle {
    /// Light red, the agent wants a human to take over
    Escalated,
    /// Light green
    Routine,
}

impl RowStyle {
    pub fn for_escalation(should_escalate: bool) -> Self {
        if should_escalate {
            RowStyle::Escalated
        } else {
            RowStyle::Routine
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            RowStyle::Escalated => "#ffcccc",
            RowStyle::Routine => "#ccffcc",
        }
    }

    /// Dark text on both backgrounds
    pub fn foreground(self) -> &'static str {
        "black"
    }

    pub fn css(self) -> String {
        format!(
            "background-color: {}; color: {};",
            self.background(),
            self.foreground()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardRow {
    pub ticket_id: String,
    pub topic: String,
    pub sentiment: String,
    pub priority: String,
    pub response: String,
    pub should_escalate: bool,
    pub style: RowStyle,
}

impl DashboardRow {
    pub fn from_entry(entry: &LogEntry) -> Self {
        let classification = entry
            .classification()
            .map(normalize_classification)
            .unwrap_or_default();
        let class_field = |key: &str| display_field(classification.get(key));

        let response = entry
            .assistant_response()
            .map(|text| truncate(text, DEFAULT_TRUNCATE_LENGTH))
            .unwrap_or_default();
        let should_escalate = entry.should_escalate();

        Self {
            ticket_id: display_field(entry.ticket_id()),
            topic: class_field("topic"),
            sentiment: class_field("sentiment"),
            priority: class_field("priority"),
            response,
            should_escalate,
            style: RowStyle::for_escalation(should_escalate),
        }
    }

    /// Visible cell values, in [`DISPLAY_COLUMNS`] order
    pub fn cells(&self) -> [&str; 5] {
        [
            self.ticket_id.as_str(),
            self.topic.as_str(),
            self.sentiment.as_str(),
            self.priority.as_str(),
            self.response.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardView {
    Empty { message: String },
    Table { columns: Vec<String>, rows: Vec<DashboardRow> },
}

/// Project the log store into the ticket table, one row per turn
pub fn render_dashboard(logs: &LogStore) -> DashboardView {
    if logs.is_empty() {
        return DashboardView::Empty {
            message: EMPTY_DASHBOARD_MESSAGE.to_string(),
        };
    }

    DashboardView::Table {
        columns: DISPLAY_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: logs.iter().map(DashboardRow::from_entry).collect(),
    }
}
