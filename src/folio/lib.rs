//! # Folio Architecture
//!
//! Folio is a **UI-agnostic content-management library** for a single-admin
//! portfolio site, with a bundled HTTP server. The library owns all
//! behavior; the server is one client of it.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (server/, wired by main.rs)                     │
//! │  - Routing, session cookie, status codes, JSON envelopes    │
//! │  - The ONLY place that knows about HTTP                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the repositories                        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository Layer (repo/*.rs)                               │
//! │  - Pure business logic: id assignment, stamping, counting   │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DocumentStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, repositories, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes an HTTP environment
//!
//! The same core could serve a CLI, a different web framework, or tests.
//!
//! ## Documents, Not Schemas
//!
//! The managed content (profile, skills, projects, settings) is persisted
//! as opaque JSON documents, rewritten wholesale on every mutation. The
//! only structure the core imposes is defaulting for missing/corrupt files,
//! server-assigned project ids and date stamps, and the counting rules
//! behind the dashboard statistics.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`repo`]: Business logic per document type
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Document names, seed defaults, dashboard stats
//! - [`auth`]: Credential check and session store
//! - [`upload`]: Image upload validation and storage
//! - [`config`]: Configuration management
//! - [`server`]: axum routing, session cookie, and handlers
//! - [`error`]: Error types

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod model;
pub mod repo;
pub mod server;
pub mod store;
pub mod upload;
