//! # API Facade
//!
//! Thin facade over the repository layer — the single entry point for any
//! UI (the bundled HTTP server, or an embedding application). Dispatches to
//! `repo/*` functions and returns structured `Result` types; no business
//! logic, no I/O formatting, no HTTP concerns.
//!
//! `FolioApi<S: DocumentStore>` is generic over the storage backend:
//! production uses `FolioApi<FileStore>`, tests use
//! `FolioApi<InMemoryStore>`.

use crate::error::Result;
use crate::model::{DashboardStats, DocName};
use crate::repo;
use crate::store::DocumentStore;
use serde_json::Value;

pub struct FolioApi<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> FolioApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_projects(&mut self) -> Result<Vec<Value>> {
        repo::projects::list(&mut self.store)
    }

    pub fn create_project(&mut self, partial: Value) -> Result<Value> {
        repo::projects::create(&mut self.store, partial)
    }

    pub fn update_project(&mut self, id: &str, replacement: Value) -> Result<Value> {
        repo::projects::update(&mut self.store, id, replacement)
    }

    pub fn delete_project(&mut self, id: &str) -> Result<()> {
        repo::projects::delete(&mut self.store, id)
    }

    pub fn get_skills(&mut self) -> Result<Value> {
        repo::documents::get(&mut self.store, DocName::Skills)
    }

    pub fn replace_skills(&mut self, skills: &Value) -> Result<()> {
        repo::documents::replace(&mut self.store, DocName::Skills, skills)
    }

    pub fn get_profile(&mut self) -> Result<Value> {
        repo::documents::get(&mut self.store, DocName::Profile)
    }

    pub fn replace_profile(&mut self, profile: &Value) -> Result<()> {
        repo::documents::replace(&mut self.store, DocName::Profile, profile)
    }

    pub fn get_settings(&mut self) -> Result<Value> {
        repo::documents::get(&mut self.store, DocName::Settings)
    }

    pub fn replace_settings(&mut self, settings: &Value) -> Result<()> {
        repo::documents::replace(&mut self.store, DocName::Settings, settings)
    }

    pub fn dashboard_stats(&mut self) -> Result<DashboardStats> {
        repo::stats::run(&mut self.store)
    }
}
