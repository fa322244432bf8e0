//! Boundary to the external support agent.
//!
//! Only the calling contract lives here. Classification, retrieval and
//! escalation decisions happen inside the agent and reach this crate as a
//! reply string plus a possibly partial log fragment.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while talking to the agent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("Agent request failed: {0}")]
    Transport(String),

    #[error("Agent returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Agent reply could not be decoded: {0}")]
    InvalidReply(String),
}

/// What the agent handed back for one message
#[derive(Debug, Clone, PartialEq)]
pub enum AgentResult {
    /// Reply only; older agents never return a log
    Response(String),
    /// Reply plus structured log, which may itself be null
    ResponseWithLog(String, Option<Map<String, Value>>),
}

impl AgentResult {
    /// Split into the reply and the log fragment (bare replies carry none)
    pub fn into_parts(self) -> (String, Option<Map<String, Value>>) {
        match self {
            AgentResult::Response(response) => (response, None),
            AgentResult::ResponseWithLog(response, log) => (response, log),
        }
    }
}

/// JSON shapes accepted from a remote agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgentReply {
    /// `"reply text"`
    Bare(String),
    /// `["reply text", {...}]` or `["reply text", null]`
    Pair(String, Option<Map<String, Value>>),
    /// `{"response": "reply text", "log": {...}}`
    Object {
        response: String,
        #[serde(default)]
        log: Option<Map<String, Value>>,
    },
}

impl From<AgentReply> for AgentResult {
    fn from(reply: AgentReply) -> Self {
        match reply {
            AgentReply::Bare(response) => AgentResult::Response(response),
            AgentReply::Pair(response, log) | AgentReply::Object { response, log } => {
                AgentResult::ResponseWithLog(response, log)
            }
        }
    }
}

/// The single call the dashboard makes into the agent.
///
/// `return_log` asks the agent to also return its structured turn log. Callers
/// must cope with either [`AgentResult`] variant regardless of the flag.
#[async_trait]
pub trait Agent: Send + Sync {
    fn name(&self) -> &str;

    async fn handle_message(&self, text: &str, return_log: bool) -> Result<AgentResult, AgentError>;
}
