//! Domain services: authorization checks plus orchestration between the
//! repositories and the HTTP layer. Handlers stay thin; everything that
//! touches more than one table or needs a permission check lives here.

pub mod access;
pub mod auth;
pub mod boards;
pub mod files;
pub mod lists;
pub mod messages;
pub mod notifications;
pub mod tasks;
