use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::normalize::is_truthy;

/// Log keys as written by the agent
pub const TICKET_ID: &str = "Ticket ID";
pub const CLASSIFICATION: &str = "Classification";
pub const ASSISTANT_RESPONSE: &str = "Assistant Response";
pub const CONTENT: &str = "Content";
pub const SHOULD_ESCALATE: &str = "Should Escalate";

/// Stored as the classification when the agent did not provide one
pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One chat message. Fields are read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Structured record of a single turn.
///
/// The agent may attach arbitrary fields, so the entry is kept as an open JSON
/// object. [`LogEntry::from_turn`] is the only place the canonical keys get
/// filled in; after that the entry is never touched again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogEntry(Map<String, Value>);

impl LogEntry {
    /// Wrap an agent fragment as-is, without applying defaults
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Merge the displayed reply into the agent's log fragment and fill in
    /// the keys the dashboard relies on.
    pub fn from_turn(response: &str, fragment: Option<Map<String, Value>>) -> Self {
        let mut fields = fragment.unwrap_or_default();

        fields.insert(
            ASSISTANT_RESPONSE.to_string(),
            Value::String(response.to_string()),
        );
        fields
            .entry(CLASSIFICATION)
            .or_insert_with(|| Value::String(NOT_APPLICABLE.to_string()));
        fields.entry(TICKET_ID).or_insert(Value::Null);

        let escalate = fields.get(SHOULD_ESCALATE).is_some_and(is_truthy);
        fields.insert(SHOULD_ESCALATE.to_string(), Value::Bool(escalate));

        Self(fields)
    }

    pub fn ticket_id(&self) -> Option<&Value> {
        self.0.get(TICKET_ID)
    }

    pub fn classification(&self) -> Option<&Value> {
        self.0.get(CLASSIFICATION)
    }

    /// The reply shown for this turn, falling back to the legacy `Content`
    /// field when `Assistant Response` is missing or null.
    pub fn assistant_response(&self) -> Option<&Value> {
        match self.0.get(ASSISTANT_RESPONSE) {
            Some(Value::Null) | None => self.0.get(CONTENT),
            response => response,
        }
    }

    pub fn should_escalate(&self) -> bool {
        self.0.get(SHOULD_ESCALATE).is_some_and(is_truthy)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}
