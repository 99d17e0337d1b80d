use super::DocumentStore;
use crate::error::Result;
use crate::model::DocName;
use serde_json::Value;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    docs: HashMap<DocName, Value>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a document has been written (or seeded) into the store.
    pub fn contains(&self, doc: DocName) -> bool {
        self.docs.contains_key(&doc)
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&mut self, doc: DocName) -> Result<Value> {
        if let Some(value) = self.docs.get(&doc) {
            return Ok(value.clone());
        }
        let default = doc.default_value();
        if doc == DocName::Settings {
            self.docs.insert(doc, default.clone());
        }
        Ok(default)
    }

    fn save(&mut self, doc: DocName, value: &Value) -> Result<()> {
        self.docs.insert(doc, value.clone());
        Ok(())
    }
}
