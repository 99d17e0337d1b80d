//! # Storage Layer
//!
//! This module defines the storage abstraction for folio documents. The
//! [`DocumentStore`] trait lets the repository layer work against different
//! backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file per document in a
//!   single data directory
//! - [`memory::InMemoryStore`]: in-memory storage for tests, no persistence
//!
//! ## Defaulting
//!
//! `load` never fails on a missing or corrupt file: the caller always gets a
//! usable document, falling back to [`DocName::default_value`]. The settings
//! document is special-cased — its default is written back to storage on the
//! first read so the admin UI and the public site see the same seed.
//!
//! ## Write semantics
//!
//! Documents are rewritten wholesale on every `save`; there is no partial
//! update, no versioning, and no locking at this level. Two concurrent
//! writers race and the later save wins in full. The HTTP layer serializes
//! read-modify-write sequences behind one mutex; any other embedding must
//! provide its own exclusion if it needs it.

use crate::error::Result;
use crate::model::DocName;
use serde_json::Value;

pub mod fs;
pub mod memory;

/// Abstract interface for named JSON document storage.
pub trait DocumentStore {
    /// Load a document, substituting its default when missing or corrupt.
    ///
    /// Takes `&mut self` because loading `DocName::Settings` seeds the
    /// default into storage on first read.
    fn load(&mut self, doc: DocName) -> Result<Value>;

    /// Persist a document, overwriting any previous content.
    fn save(&mut self, doc: DocName, value: &Value) -> Result<()>;
}
