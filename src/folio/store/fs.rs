use super::DocumentStore;
use crate::error::{FolioError, Result};
use crate::model::DocName;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed document store: one pretty-printed JSON file per document.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn doc_path(&self, doc: DocName) -> PathBuf {
        self.data_dir.join(doc.filename())
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(FolioError::Io)?;
        }
        Ok(())
    }

    fn write_doc(&self, doc: DocName, value: &Value) -> Result<()> {
        self.ensure_dir()?;
        // serde_json pretty-prints with 2-space indent and leaves non-ASCII
        // unescaped, matching the on-disk format the site assets expect.
        let content = serde_json::to_string_pretty(value).map_err(FolioError::Serialization)?;
        fs::write(self.doc_path(doc), content).map_err(FolioError::Io)?;
        Ok(())
    }

    /// Substitute the per-document default. Settings get materialized to
    /// disk immediately so the seed survives the first read.
    fn fall_back(&self, doc: DocName) -> Result<Value> {
        let default = doc.default_value();
        if doc == DocName::Settings {
            self.write_doc(doc, &default)?;
        }
        Ok(default)
    }
}

impl DocumentStore for FileStore {
    fn load(&mut self, doc: DocName) -> Result<Value> {
        let content = match fs::read_to_string(self.doc_path(doc)) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return self.fall_back(doc),
            Err(e) => return Err(FolioError::Io(e)),
        };
        match serde_json::from_str(&content) {
            Ok(value) => Ok(value),
            Err(_) => self.fall_back(doc),
        }
    }

    fn save(&mut self, doc: DocName, value: &Value) -> Result<()> {
        self.write_doc(doc, value)
    }
}
