//! Port interfaces for user privilege checks
//!
//! These traits define the boundary between the flag facade and the forum's
//! user service. How privilege is computed (admin group, global moderator,
//! category moderator) is the adapter's business.

use async_trait::async_trait;
use flagdesk_domain::{Result, Uid};

/// Trait for moderation privilege lookups
#[async_trait]
pub trait PrivilegesPort: Send + Sync {
    /// Whether `uid` holds moderation authority
    async fn is_privileged(&self, uid: Uid) -> Result<bool>;
}
