//! # Repository Layer
//!
//! Pure business logic over a [`crate::store::DocumentStore`]. Functions
//! here take the store as a generic parameter, operate on Rust types, and
//! return `Result` — no I/O assumptions, no HTTP concerns.
//!
//! - [`projects`]: per-record CRUD with server-assigned ids and date stamps
//! - [`documents`]: whole-document get/replace for skills, profile, settings
//! - [`stats`]: aggregate numbers for the admin dashboard

pub mod documents;
pub mod projects;
pub mod stats;
