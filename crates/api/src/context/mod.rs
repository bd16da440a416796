//! Application context - dependency injection container

use std::sync::Arc;

use flagdesk_core::FlagService;
use flagdesk_domain::Config;
use flagdesk_infra::{InMemoryFlagStore, StaticPrivileges};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub flags: Arc<FlagService>,
    /// Backing store, exposed so operators and tests can seed content.
    pub store: Arc<InMemoryFlagStore>,
    pub privileges: Arc<StaticPrivileges>,
}

impl AppContext {
    /// Wire the in-memory adapters and the flag facade from `config`.
    pub fn new(config: Config) -> Self {
        let privileged = config.moderation.privileged_uids.clone();
        let privileges = Arc::new(StaticPrivileges::new(privileged.iter().copied()));
        let store = Arc::new(InMemoryFlagStore::new(privileged));
        let flags = Arc::new(FlagService::new(store.clone(), privileges.clone()));

        info!(
            privileged = privileges.uids().len(),
            bind_addr = %config.server.bind_addr,
            "application context initialized"
        );

        Self { config, flags, store, privileges }
    }

    /// Drain background work before the process exits.
    pub async fn shutdown(&self) {
        info!("shutting down application context");
        self.flags.shutdown().await;
    }
}
