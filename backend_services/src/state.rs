use std::sync::Arc;

use copilot_core::Agent;

use crate::{config::Config, services::SessionRegistry};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: SessionRegistry,
    pub agent: Arc<dyn Agent>,
}

impl AppState {
    pub fn new(config: Config, agent: Arc<dyn Agent>) -> Self {
        Self {
            config: Arc::new(config),
            sessions: SessionRegistry::new(),
            agent,
        }
    }
}
