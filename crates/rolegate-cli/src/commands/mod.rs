pub mod guard;
pub mod roles;
pub mod show;
pub mod track;
