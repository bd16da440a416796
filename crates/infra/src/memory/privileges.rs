//! Static privilege directory

use std::collections::HashSet;

use async_trait::async_trait;
use flagdesk_core::PrivilegesPort;
use flagdesk_domain::{Result, Uid};

/// Administrators and global moderators from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticPrivileges {
    uids: HashSet<Uid>,
}

impl StaticPrivileges {
    pub fn new(uids: impl IntoIterator<Item = Uid>) -> Self {
        Self { uids: uids.into_iter().collect() }
    }

    /// Privileged uids, sorted.
    pub fn uids(&self) -> Vec<Uid> {
        let mut uids: Vec<Uid> = self.uids.iter().copied().collect();
        uids.sort_unstable();
        uids
    }
}

#[async_trait]
impl PrivilegesPort for StaticPrivileges {
    async fn is_privileged(&self, uid: Uid) -> Result<bool> {
        Ok(self.uids.contains(&uid))
    }
}
