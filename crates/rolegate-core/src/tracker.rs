//! Session tracker.
//!
//! Runs on every submitted prompt and records which role the session is now
//! talking to.

use std::sync::Arc;

use crate::error::Result;
use crate::hook::PromptEvent;
use crate::role::{Role, SessionRole, SessionRoleRepository};

/// What a single tracker invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    /// The session's role was set (or replaced).
    Assigned(Role),
    /// The prompt invoked no known role.
    NoMatch,
    /// A role was invoked but the event carried no session id.
    NoSession,
}

/// Assigns roles to sessions based on prompt invocations.
pub struct SessionTracker {
    repository: Arc<dyn SessionRoleRepository>,
}

impl SessionTracker {
    pub fn new(repository: Arc<dyn SessionRoleRepository>) -> Self {
        Self { repository }
    }

    /// Processes one prompt event.
    ///
    /// Only an actual assignment touches the repository; the no-op outcomes
    /// never read or write it.
    pub fn track(&self, event: &PromptEvent) -> Result<TrackOutcome> {
        let Some(role) = Role::detect(&event.prompt) else {
            tracing::debug!("[Tracker] No role invocation in prompt");
            return Ok(TrackOutcome::NoMatch);
        };

        if event.session_id.is_empty() {
            tracing::debug!("[Tracker] {} invoked without a session id, skipping", role);
            return Ok(TrackOutcome::NoSession);
        }

        self.repository
            .set(&event.session_id, SessionRole::assign(role, &event.prompt))?;

        tracing::info!(
            "[Tracker] Session '{}' is now using role {}",
            event.session_id,
            role
        );
        Ok(TrackOutcome::Assigned(role))
    }
}
