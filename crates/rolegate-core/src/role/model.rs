//! Role domain model.
//!
//! A role is the agent persona a session is currently speaking to. Roles are
//! invoked from a prompt with `agents:<slug>` (optionally namespaced as
//! `/bmad:agents:<slug>`) and recorded per session in the session table.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Namespace prefix accepted in front of a role invocation.
pub const NAMESPACE_PREFIX: &str = "/bmad:";

/// Prefix shared by every role invocation.
pub const INVOCATION_PREFIX: &str = "agents:";

/// Maximum number of characters of the triggering prompt kept on a record.
pub const PROMPT_EXCERPT_LEN: usize = 100;

/// Agent personas that can be assigned to a session.
///
/// Declaration order is the matching order used by the tracker: when a
/// prompt contains more than one invocation, the earliest variant wins.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Role {
    #[serde(rename = "PO")]
    #[strum(serialize = "PO")]
    Po,
    #[serde(rename = "SM")]
    #[strum(serialize = "SM")]
    Sm,
    #[serde(rename = "PM")]
    #[strum(serialize = "PM")]
    Pm,
    #[serde(rename = "ANALYST")]
    #[strum(serialize = "ANALYST")]
    Analyst,
    #[serde(rename = "ARCHITECT")]
    #[strum(serialize = "ARCHITECT")]
    Architect,
    #[serde(rename = "DEV")]
    #[strum(serialize = "DEV")]
    Dev,
    #[serde(rename = "BACKEND")]
    #[strum(serialize = "BACKEND")]
    Backend,
    #[serde(rename = "FRONTEND")]
    #[strum(serialize = "FRONTEND")]
    Frontend,
    #[serde(rename = "QA")]
    #[strum(serialize = "QA")]
    Qa,
    #[serde(rename = "UX-EXPERT")]
    #[strum(serialize = "UX-EXPERT")]
    UxExpert,
    #[serde(rename = "BMAD-MASTER")]
    #[strum(serialize = "BMAD-MASTER")]
    BmadMaster,
    #[serde(rename = "BMAD-ORCHESTRATOR")]
    #[strum(serialize = "BMAD-ORCHESTRATOR")]
    BmadOrchestrator,
}

impl Role {
    /// Lowercase identifier used after `agents:` in a prompt.
    pub fn slug(&self) -> &'static str {
        match self {
            Role::Po => "po",
            Role::Sm => "sm",
            Role::Pm => "pm",
            Role::Analyst => "analyst",
            Role::Architect => "architect",
            Role::Dev => "dev",
            Role::Backend => "backend",
            Role::Frontend => "frontend",
            Role::Qa => "qa",
            Role::UxExpert => "ux-expert",
            Role::BmadMaster => "bmad-master",
            Role::BmadOrchestrator => "bmad-orchestrator",
        }
    }

    /// The bare invocation form, e.g. `agents:po`.
    pub fn invocation(&self) -> String {
        format!("{}{}", INVOCATION_PREFIX, self.slug())
    }

    /// The namespaced invocation form, e.g. `/bmad:agents:po`.
    pub fn namespaced_invocation(&self) -> String {
        format!("{}{}", NAMESPACE_PREFIX, self.invocation())
    }

    /// Whether this role may only create or modify markdown documents.
    ///
    /// This is the only place the document-only subset is defined.
    pub fn is_document_only(&self) -> bool {
        matches!(
            self,
            Role::Po | Role::Sm | Role::Pm | Role::Analyst | Role::Architect | Role::UxExpert
        )
    }

    /// Finds the first role invoked in `prompt`.
    ///
    /// Matching is a case-insensitive substring search for either invocation
    /// form, walking roles in declaration order.
    pub fn detect(prompt: &str) -> Option<Role> {
        let prompt = prompt.to_lowercase();
        Role::iter().find(|role| {
            prompt.contains(&role.invocation()) || prompt.contains(&role.namespaced_invocation())
        })
    }
}

/// The role currently assigned to one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRole {
    /// Assigned role
    pub role: Role,
    /// When the role was last assigned; `None` if the stored value was unreadable
    pub assigned_at: Option<DateTime<Local>>,
    /// First characters of the prompt that triggered the assignment.
    /// Diagnostic only, never used for decisions.
    pub last_prompt_excerpt: String,
}

impl SessionRole {
    /// Creates a record for an assignment happening now.
    pub fn assign(role: Role, prompt: &str) -> Self {
        Self {
            role,
            assigned_at: Some(Local::now()),
            last_prompt_excerpt: excerpt(prompt),
        }
    }
}

/// Truncates a prompt to [`PROMPT_EXCERPT_LEN`] characters.
pub fn excerpt(prompt: &str) -> String {
    prompt.chars().take(PROMPT_EXCERPT_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_names_round_trip_through_strum() {
        for role in Role::iter() {
            let name = role.to_string();
            assert_eq!(Role::from_str(&name).unwrap(), role);
            assert_eq!(name.to_lowercase(), role.slug());
        }
    }

    #[test]
    fn test_role_serde_uses_canonical_name() {
        let json = serde_json::to_string(&Role::UxExpert).unwrap();
        assert_eq!(json, "\"UX-EXPERT\"");
        let role: Role = serde_json::from_str("\"BMAD-ORCHESTRATOR\"").unwrap();
        assert_eq!(role, Role::BmadOrchestrator);
    }

    #[test]
    fn test_document_only_subset() {
        let restricted: Vec<Role> = Role::iter().filter(Role::is_document_only).collect();
        assert_eq!(
            restricted,
            vec![
                Role::Po,
                Role::Sm,
                Role::Pm,
                Role::Analyst,
                Role::Architect,
                Role::UxExpert
            ]
        );
    }

    #[test]
    fn test_detect_bare_and_namespaced() {
        assert_eq!(Role::detect("hey AGENTS:PO, write a story"), Some(Role::Po));
        assert_eq!(
            Role::detect("/bmad:agents:architect please design X"),
            Some(Role::Architect)
        );
        assert_eq!(Role::detect("/BMAD:Agents:UX-Expert"), Some(Role::UxExpert));
    }

    #[test]
    fn test_detect_no_match() {
        assert_eq!(Role::detect(""), None);
        assert_eq!(Role::detect("please refactor the agents module"), None);
        assert_eq!(Role::detect("agents: po"), None);
    }

    #[test]
    fn test_detect_first_role_in_order_wins() {
        // Both invocations present; PO precedes DEV in the table.
        assert_eq!(Role::detect("agents:dev then agents:po"), Some(Role::Po));
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let prompt = "é".repeat(150);
        let cut = excerpt(&prompt);
        assert_eq!(cut.chars().count(), PROMPT_EXCERPT_LEN);

        assert_eq!(excerpt("short"), "short");
    }

    #[test]
    fn test_assign_keeps_raw_case() {
        let record = SessionRole::assign(Role::Dev, "/bmad:agents:dev Fix The Bug");
        assert_eq!(record.role, Role::Dev);
        assert_eq!(record.last_prompt_excerpt, "/bmad:agents:dev Fix The Bug");
        assert!(record.assigned_at.is_some());
    }
}
