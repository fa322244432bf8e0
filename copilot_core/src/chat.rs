use serde::{Deserialize, Serialize};

use crate::model::{Message, Role};
use crate::store::MessageHistory;

pub const INPUT_LABEL: &str = "Enter your message:";
pub const SEND_LABEL: &str = "Send";
pub const BUSY_LABEL: &str = "Agent is thinking...";

/// One rendered line of the chat transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub role: Role,
    pub marker: String,
    pub speaker: String,
    pub content: String,
}

impl TranscriptLine {
    pub fn for_message(message: &Message) -> Self {
        let (marker, speaker) = match message.role() {
            Role::User => ("🧑", "You"),
            Role::Assistant => ("🤖", "Agent"),
        };

        Self {
            role: message.role(),
            marker: marker.to_string(),
            speaker: speaker.to_string(),
            content: message.content().to_string(),
        }
    }
}

/// Oldest message first
pub fn render_transcript(messages: &MessageHistory) -> Vec<TranscriptLine> {
    messages.iter().map(TranscriptLine::for_message).collect()
}
