use std::sync::Arc;
use courrier_core::{Config, PendingSyncStore, SanitizedConfig, TicketRepository};

/// Shared application state
pub struct AppState {
    config: Config,
    tickets: TicketRepository,
    pending_sync: Arc<dyn PendingSyncStore>,
}

impl AppState {
    pub fn new(config: Config, pending_sync: Arc<dyn PendingSyncStore>) -> Self {
        let tickets = TicketRepository::new(&config.engine);
        Self {
            config,
            tickets,
            pending_sync,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn tickets(&self) -> &TicketRepository {
        &self.tickets
    }

    pub fn pending_sync(&self) -> &dyn PendingSyncStore {
        self.pending_sync.as_ref()
    }
}
