//! Session role repository trait.
//!
//! Defines the key-value interface between the hooks and whatever persists
//! the session table.

use std::collections::BTreeMap;

use super::model::SessionRole;
use crate::error::Result;

/// An abstract store mapping session identifiers to their active role.
///
/// # Implementation Notes
///
/// Implementations should handle:
/// - Last-write-wins per session (a `set` fully replaces the prior record)
/// - Concurrent writers from separate processes
/// - Treating an absent store as empty
pub trait SessionRoleRepository: Send + Sync {
    /// Returns the role recorded for `session_id`, if any.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(SessionRole))`: A known role is recorded for the session
    /// - `Ok(None)`: Nothing usable is recorded
    /// - `Err(RoleGateError)`: The store exists but could not be read
    fn get(&self, session_id: &str) -> Result<Option<SessionRole>>;

    /// Records `record` as the active role for `session_id`, replacing any
    /// previous record for that session.
    fn set(&self, session_id: &str, record: SessionRole) -> Result<()>;

    /// Returns every readable record, keyed by session id.
    fn list(&self) -> Result<BTreeMap<String, SessionRole>>;
}
