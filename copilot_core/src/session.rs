use tracing::{debug, warn};

use crate::agent::{Agent, AgentError, AgentResult};
use crate::model::{LogEntry, Message};
use crate::store::{LogStore, MessageHistory};

/// State owned by one interactive session: the chat history and one log
/// entry per completed turn. Both only ever grow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    messages: MessageHistory,
    logs: LogStore,
}

/// A user message that has been recorded and is waiting for the agent
#[derive(Debug, PartialEq, Eq)]
pub struct PendingTurn {
    text: String,
}

impl PendingTurn {
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Blank input, nothing recorded
    Ignored,
    /// Turn finished; `turn` is its 1-based number
    Completed { turn: usize },
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &MessageHistory {
        &self.messages
    }

    pub fn logs(&self) -> &LogStore {
        &self.logs
    }

    /// Record the user's message so it shows up before the agent answers.
    ///
    /// Returns `None` for empty or whitespace-only input, which leaves the
    /// session untouched. The stored text is the raw input, not trimmed.
    pub fn begin_turn(&mut self, input: &str) -> Option<PendingTurn> {
        if input.trim().is_empty() {
            return None;
        }

        self.messages.push(Message::user(input));
        Some(PendingTurn {
            text: input.to_string(),
        })
    }

    /// Record the agent's answer and the normalized log entry for the turn
    pub fn complete_turn(&mut self, _turn: PendingTurn, result: AgentResult) -> &LogEntry {
        let (response, fragment) = result.into_parts();
        let entry = LogEntry::from_turn(&response, fragment);

        self.messages.push(Message::assistant(response));
        self.logs.push(entry)
    }

    /// Run a full turn against `agent`.
    ///
    /// The agent call is the only await point. If it fails, the user's message
    /// stays in the history and no assistant message or log entry is added.
    pub async fn submit(&mut self, agent: &dyn Agent, input: &str) -> Result<TurnOutcome, AgentError> {
        let Some(turn) = self.begin_turn(input) else {
            debug!("Ignoring blank message");
            return Ok(TurnOutcome::Ignored);
        };

        debug!(agent = agent.name(), chars = input.chars().count(), "Sending message to agent");
        let result = match agent.handle_message(turn.text(), true).await {
            Ok(result) => result,
            Err(err) => {
                warn!(agent = agent.name(), error = %err, "Agent call failed");
                return Err(err);
            }
        };

        let entry = self.complete_turn(turn, result);
        debug!(
            ticket_id = ?entry.ticket_id(),
            escalate = entry.should_escalate(),
            "Turn recorded"
        );

        Ok(TurnOutcome::Completed {
            turn: self.logs.len(),
        })
    }
}
