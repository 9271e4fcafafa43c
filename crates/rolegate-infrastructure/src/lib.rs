//! File-backed infrastructure for the rolegate hooks.

pub mod config;
pub mod dto;
pub mod json_session_role_repository;
pub mod paths;
pub mod storage;

pub use crate::config::HookConfig;
pub use crate::json_session_role_repository::JsonSessionRoleRepository;
pub use crate::paths::RoleGatePaths;
