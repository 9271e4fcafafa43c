//! `rolegate track`: UserPromptSubmit hook.

use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use rolegate_core::{PromptEvent, SessionTracker, TrackOutcome};
use rolegate_infrastructure::JsonSessionRoleRepository;

/// Reads one prompt payload from `input` and records the invoked role.
///
/// Never writes to stdout.
pub fn run(input: impl Read) -> Result<TrackOutcome> {
    let payload = std::io::read_to_string(input).context("reading hook payload")?;
    let event = PromptEvent::from_json(&payload)?;

    let repository = Arc::new(JsonSessionRoleRepository::for_cwd(&event.cwd));
    let outcome = SessionTracker::new(repository)
        .track(&event)
        .context("recording session role")?;
    Ok(outcome)
}
