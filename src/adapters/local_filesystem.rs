//! `DocumentStore` backed by the local filesystem.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::DocumentStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystemStore;

impl DocumentStore for LocalFilesystemStore {
    fn read_document(&self, path: &Path) -> Result<String, AppError> {
        debug!(path = %path.display(), "reading configuration document");
        fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AppError::ConfigFileNotFound(path.display().to_string()),
            _ => AppError::Io(err),
        })
    }

    fn document_exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
