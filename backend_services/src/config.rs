use std::{path::PathBuf, time::Duration};

const DEFAULT_SESSION_IDLE_SECS: u64 = 1800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_address: String,
    pub agent_url: String,
    pub static_dir: String,
    pub session_idle_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source, falling back to defaults for missing keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| "127.0.0.1:3000".to_string()),
            agent_url: lookup("AGENT_URL")
                .unwrap_or_else(|| "http://127.0.0.1:8000/handle_message".to_string()),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "dist".to_string()),
            session_idle_secs: lookup("SESSION_IDLE_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SESSION_IDLE_SECS),
        }
    }

    pub fn static_dir(&self) -> PathBuf {
        PathBuf::from(&self.static_dir)
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }
}
