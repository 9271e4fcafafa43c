//! `rolegate show`: print the session table for a project.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::{Context, Result};
use rolegate_core::SessionRoleRepository;
use rolegate_infrastructure::JsonSessionRoleRepository;
use rolegate_infrastructure::dto::SessionRoleDto;

/// Writes the readable records under `cwd` as pretty JSON, optionally
/// narrowed to one session. A missing session prints `null`.
pub fn run(cwd: &str, session: Option<&str>, mut output: impl Write) -> Result<()> {
    let repository = JsonSessionRoleRepository::for_cwd(cwd);
    let records = repository
        .list()
        .with_context(|| format!("reading {}", repository.path().display()))?;

    let table: BTreeMap<String, SessionRoleDto> = records
        .iter()
        .map(|(session_id, record)| (session_id.clone(), SessionRoleDto::from(record)))
        .collect();

    let rendered = match session {
        Some(session_id) => serde_json::to_string_pretty(&table.get(session_id))?,
        None => serde_json::to_string_pretty(&table)?,
    };
    writeln!(output, "{}", rendered)?;
    Ok(())
}
