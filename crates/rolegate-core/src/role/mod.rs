//! Role domain module.
//!
//! # Module Structure
//!
//! - `model`: `Role`, `SessionRole` and invocation constants
//! - `repository`: Repository trait for the session table
//! - `in_memory`: Non-persistent repository implementation

mod in_memory;
mod model;
mod repository;

pub use in_memory::InMemorySessionRoleRepository;
pub use model::{
    INVOCATION_PREFIX, NAMESPACE_PREFIX, PROMPT_EXCERPT_LEN, Role, SessionRole, excerpt,
};
pub use repository::SessionRoleRepository;
