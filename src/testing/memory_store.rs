//! Test double for `DocumentStore`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::DocumentStore;

/// In-memory implementation of `DocumentStore` for unit tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocumentStore {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    reads: Arc<Mutex<Vec<PathBuf>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.lock().unwrap().insert(path.into(), content.to_string());
        self
    }

    /// Paths passed to `read_document`, in call order.
    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.lock().unwrap().clone()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn read_document(&self, path: &Path) -> Result<String, AppError> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::ConfigFileNotFound(path.display().to_string()))
    }

    fn document_exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}
