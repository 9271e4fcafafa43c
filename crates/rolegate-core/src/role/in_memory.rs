//! In-process session role store.

use std::collections::BTreeMap;
use std::sync::Mutex;

use super::model::SessionRole;
use super::repository::SessionRoleRepository;
use crate::error::{Result, RoleGateError};

/// A `SessionRoleRepository` kept entirely in memory.
///
/// Useful for tests and for embedding the hooks in a long-lived process.
#[derive(Debug, Default)]
pub struct InMemorySessionRoleRepository {
    records: Mutex<BTreeMap<String, SessionRole>>,
}

impl InMemorySessionRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, SessionRole>>> {
        self.records
            .lock()
            .map_err(|e| RoleGateError::internal(format!("session table poisoned: {}", e)))
    }
}

impl SessionRoleRepository for InMemorySessionRoleRepository {
    fn get(&self, session_id: &str) -> Result<Option<SessionRole>> {
        Ok(self.records()?.get(session_id).cloned())
    }

    fn set(&self, session_id: &str, record: SessionRole) -> Result<()> {
        self.records()?.insert(session_id.to_string(), record);
        Ok(())
    }

    fn list(&self) -> Result<BTreeMap<String, SessionRole>> {
        Ok(self.records()?.clone())
    }
}
