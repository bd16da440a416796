//! Mock for `PrivilegesPort`

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use flagdesk_core::PrivilegesPort;
use flagdesk_domain::{Result as DomainResult, Uid};

/// Grants privilege to a fixed set of uids and counts lookups.
#[derive(Default)]
pub struct FixedPrivileges {
    privileged: HashSet<Uid>,
    lookups: AtomicUsize,
}

impl FixedPrivileges {
    pub fn new(uids: &[Uid]) -> Self {
        Self { privileged: uids.iter().copied().collect(), lookups: AtomicUsize::new(0) }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PrivilegesPort for FixedPrivileges {
    async fn is_privileged(&self, uid: Uid) -> DomainResult<bool> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.privileged.contains(&uid))
    }
}
