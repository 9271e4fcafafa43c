//! Hook payloads exchanged with the agent host.
//!
//! The host writes one JSON object to the hook's stdin per event and reads
//! an optional JSON object back from stdout. Unknown input fields are
//! ignored, and absent or `null` string fields read as empty.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Event name the host expects on permission decisions.
pub const PRE_TOOL_USE: &str = "PreToolUse";

/// Directory (under the host's cwd) holding hook state and configuration.
pub const HOOK_DIR: &str = ".claude";

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Payload of a submitted user prompt.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptEvent {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub session_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prompt: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cwd: String,
}

/// The subset of a tool's input the write guard looks at.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub file_path: String,
}

/// Payload sent before a tool call runs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolUseEvent {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub session_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cwd: String,
    /// Tool being invoked (e.g. `Write`, `Edit`). Logged only.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tool_name: String,
    #[serde(default)]
    pub tool_input: ToolInput,
}

impl PromptEvent {
    /// Parses a prompt payload from raw JSON.
    pub fn from_json(input: &str) -> crate::Result<Self> {
        serde_json::from_str(input).map_err(|e| crate::RoleGateError::invalid_payload(e.to_string()))
    }
}

impl ToolUseEvent {
    /// Parses a tool-use payload from raw JSON.
    pub fn from_json(input: &str) -> crate::Result<Self> {
        serde_json::from_str(input).map_err(|e| crate::RoleGateError::invalid_payload(e.to_string()))
    }
}

/// `<cwd>/.claude`. An empty cwd resolves relative to the process directory.
pub fn hook_dir(cwd: &str) -> PathBuf {
    Path::new(cwd).join(HOOK_DIR)
}

/// Structured decision written to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: String,
    pub permission_decision: String,
    pub permission_decision_reason: String,
}

impl HookOutput {
    /// A `PreToolUse` denial carrying `reason`.
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: PRE_TOOL_USE.to_string(),
                permission_decision: "deny".to_string(),
                permission_decision_reason: reason.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_event_defaults_missing_and_null_fields() {
        let event = PromptEvent::from_json(r#"{"prompt": null, "hook_event_name": "UserPromptSubmit"}"#)
            .unwrap();
        assert_eq!(event.session_id, "");
        assert_eq!(event.prompt, "");
        assert_eq!(event.cwd, "");
    }

    #[test]
    fn test_tool_use_event_reads_nested_file_path() {
        let event = ToolUseEvent::from_json(
            r#"{"session_id":"s1","tool_name":"Write","tool_input":{"file_path":"/tmp/proj/src/app.py","content":"x"},"cwd":"/tmp/proj"}"#,
        )
        .unwrap();
        assert_eq!(event.session_id, "s1");
        assert_eq!(event.tool_input.file_path, "/tmp/proj/src/app.py");
        assert_eq!(event.cwd, "/tmp/proj");
        assert_eq!(hook_dir(&event.cwd), PathBuf::from("/tmp/proj/.claude"));
    }

    #[test]
    fn test_tool_use_event_without_tool_input() {
        let event = ToolUseEvent::from_json(r#"{"session_id":"s1"}"#).unwrap();
        assert_eq!(event.tool_input.file_path, "");
    }

    #[test]
    fn test_malformed_payload_is_invalid_payload_error() {
        let err = PromptEvent::from_json("not json").unwrap_err();
        assert!(matches!(err, crate::RoleGateError::InvalidPayload(_)));
    }

    #[test]
    fn test_deny_output_shape() {
        let output = HookOutput::deny("no");
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "hookSpecificOutput": {
                    "hookEventName": "PreToolUse",
                    "permissionDecision": "deny",
                    "permissionDecisionReason": "no"
                }
            })
        );
    }
}
