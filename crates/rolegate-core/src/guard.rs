//! Write guard.
//!
//! Runs before file write/edit tool calls and keeps document-only roles
//! from touching anything but markdown files.

use std::path::is_separator;
use std::sync::Arc;

use crate::error::Result;
use crate::hook::{HookOutput, ToolUseEvent};
use crate::role::{Role, SessionRoleRepository};

/// The only extension document-only roles may write.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Permission decision for one tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the host proceed. Signalled by emitting nothing.
    Allow,
    /// Block the call.
    Deny { role: Role, reason: String },
}

impl Decision {
    fn deny(role: Role) -> Self {
        Decision::Deny {
            role,
            reason: format!("⛔ Agent of type {} may only write markdown files", role),
        }
    }

    /// The payload to print for this decision, if any.
    pub fn to_output(&self) -> Option<HookOutput> {
        match self {
            Decision::Allow => None,
            Decision::Deny { reason, .. } => Some(HookOutput::deny(reason.clone())),
        }
    }
}

/// Lowercased extension of `file_path` including the leading dot, or an
/// empty string when there is none.
///
/// Only the final component counts, so a trailing separator means no
/// extension. Leading dots of the file name (`.bashrc`, `..md`) never start
/// an extension.
pub fn file_extension(file_path: &str) -> String {
    let name = file_path.rsplit(is_separator).next().unwrap_or("");
    let Some(dot) = name.rfind('.') else {
        return String::new();
    };
    if name[..dot].chars().all(|c| c == '.') {
        return String::new();
    }
    name[dot..].to_lowercase()
}

/// Evaluates tool calls against the session's active role.
pub struct WriteGuard {
    repository: Arc<dyn SessionRoleRepository>,
}

impl WriteGuard {
    pub fn new(repository: Arc<dyn SessionRoleRepository>) -> Self {
        Self { repository }
    }

    /// Decides on one tool call, surfacing repository failures.
    pub fn check(&self, event: &ToolUseEvent) -> Result<Decision> {
        let extension = file_extension(&event.tool_input.file_path);

        if event.session_id.is_empty() {
            return Ok(Decision::Allow);
        }

        let Some(record) = self.repository.get(&event.session_id)? else {
            tracing::debug!("[Guard] No role recorded for session '{}'", event.session_id);
            return Ok(Decision::Allow);
        };

        if record.role.is_document_only() && extension != MARKDOWN_EXTENSION {
            tracing::info!(
                "[Guard] Denying {} on '{}' for session '{}' (role {})",
                event.tool_name,
                event.tool_input.file_path,
                event.session_id,
                record.role
            );
            return Ok(Decision::deny(record.role));
        }

        Ok(Decision::Allow)
    }

    /// Decides on one tool call, failing open.
    ///
    /// Any error from [`WriteGuard::check`] is logged and turned into
    /// [`Decision::Allow`].
    pub fn evaluate(&self, event: &ToolUseEvent) -> Decision {
        match self.check(event) {
            Ok(decision) => decision,
            Err(e) => {
                tracing::warn!("[Guard] Allowing after evaluation error: {}", e);
                Decision::Allow
            }
        }
    }
}
