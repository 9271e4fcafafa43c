//! `rolegate guard`: PreToolUse hook for write/edit tools.

use std::io::{Read, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use rolegate_core::{Decision, ToolUseEvent, WriteGuard};
use rolegate_infrastructure::JsonSessionRoleRepository;

/// Reads one tool-use payload from `input` and writes a denial to `output`
/// when the session's role may not touch the target file.
///
/// Allowing writes nothing. Repository failures allow.
pub fn run(input: impl Read, mut output: impl Write) -> Result<Decision> {
    let payload = std::io::read_to_string(input).context("reading hook payload")?;
    let event = ToolUseEvent::from_json(&payload)?;

    let repository = Arc::new(JsonSessionRoleRepository::for_cwd(&event.cwd));
    let decision = WriteGuard::new(repository).evaluate(&event);

    if let Some(hook_output) = decision.to_output() {
        let line = serde_json::to_string(&hook_output)?;
        writeln!(output, "{}", line).context("writing decision")?;
        output.flush()?;
    }
    Ok(decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolegate_core::Role;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn project_with(role: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let logs = temp_dir.path().join(".claude/logs");
        fs::create_dir_all(&logs).unwrap();
        fs::write(
            logs.join("active_agents.json"),
            serde_json::json!({
                "s1": {"agent": role, "timestamp": "2026-01-01T00:00:00", "last_prompt": ""}
            })
            .to_string(),
        )
        .unwrap();
        temp_dir
    }

    fn run_guard(temp_dir: &TempDir, session_id: &str, file_path: &str) -> (Decision, String) {
        let input = serde_json::json!({
            "session_id": session_id,
            "tool_name": "Edit",
            "tool_input": {"file_path": file_path},
            "cwd": temp_dir.path().to_string_lossy(),
        })
        .to_string();
        let mut out = Vec::new();
        let decision = run(Cursor::new(input.into_bytes()), &mut out).unwrap();
        (decision, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_denial_is_printed() {
        let temp_dir = project_with("PO");
        let (decision, out) = run_guard(&temp_dir, "s1", "plan.txt");
        assert!(matches!(decision, Decision::Deny { role: Role::Po, .. }));

        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        let specific = &value["hookSpecificOutput"];
        assert_eq!(specific["hookEventName"], "PreToolUse");
        assert_eq!(specific["permissionDecision"], "deny");
        assert!(specific["permissionDecisionReason"].as_str().unwrap().contains("PO"));
    }

    #[test]
    fn test_allow_prints_nothing() {
        let temp_dir = project_with("PO");
        assert_eq!(run_guard(&temp_dir, "s1", "plan.md"), (Decision::Allow, String::new()));

        let temp_dir = project_with("DEV");
        assert_eq!(run_guard(&temp_dir, "s1", "main.py"), (Decision::Allow, String::new()));
        assert_eq!(run_guard(&temp_dir, "s9", "main.py"), (Decision::Allow, String::new()));
    }

    #[test]
    fn test_corrupt_state_prints_nothing() {
        let temp_dir = project_with("PO");
        fs::write(temp_dir.path().join(".claude/logs/active_agents.json"), "nope").unwrap();
        assert_eq!(run_guard(&temp_dir, "s1", "plan.txt"), (Decision::Allow, String::new()));
    }

    #[test]
    fn test_malformed_payload_is_error_and_silent() {
        let mut out = Vec::new();
        assert!(run(Cursor::new(b"42".to_vec()), &mut out).is_err());
        assert!(out.is_empty());
    }
}
