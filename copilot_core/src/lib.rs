//! Session bookkeeping and view projections for the customer support copilot.
//!
//! The crate is pure: it owns the per-session message history and ticket log,
//! the normalization applied to whatever the agent hands back, and the
//! projections the frontend renders (dashboard table, chat transcript, raw log
//! sidebar). Talking to an actual agent is left to implementors of [`Agent`].

pub mod agent;
pub mod chat;
pub mod dashboard;
pub mod model;
pub mod normalize;
pub mod session;
pub mod sidebar;
pub mod store;
pub mod view;

pub use agent::{Agent, AgentError, AgentReply, AgentResult};
pub use chat::TranscriptLine;
pub use dashboard::{DashboardRow, DashboardView, RowStyle};
pub use model::{LogEntry, Message, Role};
pub use session::{PendingTurn, SessionState, TurnOutcome};
pub use sidebar::RawLogView;
pub use store::{AppendLog, LogStore, MessageHistory};
pub use view::SessionView;
