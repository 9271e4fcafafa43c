//! JSON file-backed session role repository.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rolegate_core::{Result, SessionRole, SessionRoleRepository};

use crate::config::HookConfig;
use crate::dto::{SessionRoleDto, SessionTableDto, decode_entry};
use crate::paths::RoleGatePaths;
use crate::storage::AtomicJsonFile;

/// A `SessionRoleRepository` persisting the session table as one JSON file.
///
/// Writes run under an exclusive lock and replace the file atomically, so
/// concurrent trackers for different sessions never drop each other's
/// records. Reads take no lock.
pub struct JsonSessionRoleRepository {
    file: AtomicJsonFile<SessionTableDto>,
}

impl JsonSessionRoleRepository {
    /// Creates a repository backed by the file at `path`.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Creates the repository for a host working directory, honouring
    /// `<cwd>/.claude/rolegate.toml` when present.
    pub fn for_cwd(cwd: &str) -> Self {
        let paths = RoleGatePaths::for_cwd(cwd);
        let config = HookConfig::load_or_default(&paths.config_file());
        Self::with_path(paths.state_file(&config))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn load_table(&self) -> Result<SessionTableDto> {
        Ok(self.file.load()?.unwrap_or_default())
    }
}

impl SessionRoleRepository for JsonSessionRoleRepository {
    fn get(&self, session_id: &str) -> Result<Option<SessionRole>> {
        let table = self.load_table()?;
        Ok(table
            .get(session_id)
            .and_then(|value| decode_entry(session_id, value)))
    }

    fn set(&self, session_id: &str, record: SessionRole) -> Result<()> {
        let entry = serde_json::to_value(SessionRoleDto::from(&record))?;
        self.file.update(SessionTableDto::new(), |table| {
            table.insert(session_id.to_string(), entry);
        })?;
        tracing::debug!(
            "[Storage] Saved role {} for session '{}' to {}",
            record.role,
            session_id,
            self.path().display()
        );
        Ok(())
    }

    fn list(&self) -> Result<BTreeMap<String, SessionRole>> {
        let table = self.load_table()?;
        Ok(table
            .iter()
            .filter_map(|(session_id, value)| {
                decode_entry(session_id, value).map(|record| (session_id.clone(), record))
            })
            .collect())
    }
}
