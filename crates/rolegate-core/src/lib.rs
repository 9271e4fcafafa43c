//! Core domain for the rolegate hooks.
//!
//! - `role`: the closed set of agent roles and the session table interface
//! - `hook`: payloads read from and written to the agent host
//! - `tracker`: assigns roles to sessions from prompts
//! - `guard`: restricts document-only roles to markdown writes

pub mod error;
pub mod guard;
pub mod hook;
pub mod role;
pub mod tracker;

// Re-export common types
pub use error::{Result, RoleGateError};
pub use guard::{Decision, WriteGuard};
pub use hook::{HookOutput, PromptEvent, ToolUseEvent};
pub use role::{Role, SessionRole, SessionRoleRepository};
pub use tracker::{SessionTracker, TrackOutcome};
