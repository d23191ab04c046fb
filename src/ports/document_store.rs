//! Read access to configuration documents.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading configuration documents by path.
pub trait DocumentStore {
    /// Read a document as UTF-8 text.
    ///
    /// Implementations report a missing document as
    /// `AppError::ConfigFileNotFound`.
    fn read_document(&self, path: &Path) -> Result<String, AppError>;

    /// Check whether a document exists at `path`.
    fn document_exists(&self, path: &Path) -> bool;
}
