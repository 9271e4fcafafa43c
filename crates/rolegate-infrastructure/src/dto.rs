//! On-disk representation of the session table.
//!
//! ```json
//! {
//!   "<session_id>": {
//!     "agent": "ARCHITECT",
//!     "timestamp": "2026-10-17T09:30:12.123456+02:00",
//!     "last_prompt": "/bmad:agents:architect please design X"
//!   }
//! }
//! ```
//!
//! Entries are kept as raw JSON values so that records this build cannot
//! interpret survive a rewrite by the tracker untouched.

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat};
use rolegate_core::{Role, SessionRole};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// The whole state file: session id to raw entry.
pub type SessionTableDto = BTreeMap<String, serde_json::Value>;

/// One entry of the state file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRoleDto {
    pub agent: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub last_prompt: String,
}

impl From<&SessionRole> for SessionRoleDto {
    fn from(record: &SessionRole) -> Self {
        Self {
            agent: record.role.to_string(),
            timestamp: record
                .assigned_at
                .map(|at| at.to_rfc3339_opts(SecondsFormat::Micros, false))
                .unwrap_or_default(),
            last_prompt: record.last_prompt_excerpt.clone(),
        }
    }
}

impl SessionRoleDto {
    /// Converts to the domain record. `None` if `agent` is not a known role.
    pub fn into_domain(self) -> Option<SessionRole> {
        let role = Role::from_str(&self.agent).ok()?;
        Some(SessionRole {
            role,
            assigned_at: parse_timestamp(&self.timestamp),
            last_prompt_excerpt: self.last_prompt,
        })
    }
}

/// Accepts RFC 3339 timestamps as well as naive ISO-8601 local times.
fn parse_timestamp(value: &str) -> Option<DateTime<Local>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Some(at.with_timezone(&Local));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()?
        .and_local_timezone(Local)
        .earliest()
}

/// Decodes one raw entry, logging why it was skipped if it is unusable.
pub fn decode_entry(session_id: &str, value: &serde_json::Value) -> Option<SessionRole> {
    let dto = match SessionRoleDto::deserialize(value) {
        Ok(dto) => dto,
        Err(e) => {
            tracing::warn!("[Storage] Skipping malformed entry for '{}': {}", session_id, e);
            return None;
        }
    };
    let agent = dto.agent.clone();
    let record = dto.into_domain();
    if record.is_none() {
        tracing::warn!("[Storage] Unknown role '{}' for session '{}'", agent, session_id);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn test_decode_entry() {
        let value = json!({
            "agent": "ARCHITECT",
            "timestamp": "2025-03-01T10:20:30.500000+00:00",
            "last_prompt": "design"
        });
        let record = decode_entry("s1", &value).unwrap();
        assert_eq!(record.role, Role::Architect);
        assert_eq!(record.last_prompt_excerpt, "design");
        assert!(record.assigned_at.is_some());
    }

    #[test]
    fn test_decode_entry_accepts_naive_timestamp() {
        let value = json!({"agent": "PO", "timestamp": "2025-03-01T10:20:30.123456"});
        let at = decode_entry("s1", &value).unwrap().assigned_at.unwrap();
        assert_eq!((at.year(), at.month(), at.day()), (2025, 3, 1));
        assert_eq!((at.hour(), at.minute(), at.second()), (10, 20, 30));
    }

    #[test]
    fn test_decode_entry_tolerates_missing_optional_fields() {
        let record = decode_entry("s1", &json!({"agent": "QA"})).unwrap();
        assert_eq!(record.role, Role::Qa);
        assert!(record.assigned_at.is_none());
        assert_eq!(record.last_prompt_excerpt, "");
    }

    #[test]
    fn test_decode_entry_rejects_unknown_role_and_bad_shape() {
        assert!(decode_entry("s1", &json!({"agent": "po"})).is_none());
        assert!(decode_entry("s1", &json!({"agent": "JANITOR"})).is_none());
        assert!(decode_entry("s1", &json!("PO")).is_none());
        assert!(decode_entry("s1", &json!({"timestamp": "x"})).is_none());
    }

    #[test]
    fn test_dto_from_domain_uses_file_field_names() {
        let record = SessionRole::assign(Role::UxExpert, "agents:ux-expert hi");
        let value = serde_json::to_value(SessionRoleDto::from(&record)).unwrap();
        assert_eq!(value["agent"], "UX-EXPERT");
        assert_eq!(value["last_prompt"], "agents:ux-expert hi");
        assert!(value["timestamp"].as_str().unwrap().contains('T'));
    }
}
