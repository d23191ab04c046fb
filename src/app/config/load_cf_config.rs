//! Model-field configuration loading.

use std::path::Path;

use tracing::info;

use crate::domain::{AppError, ConfigDocument, parse_config_content};
use crate::ports::DocumentStore;

/// Read and validate the model-field configuration at `path`.
pub fn load_cf_config(
    path: &Path,
    store: &impl DocumentStore,
) -> Result<ConfigDocument, AppError> {
    let content = store.read_document(path)?;
    let document = parse_config_content(&content, &path.display().to_string())?;

    info!(
        path = %path.display(),
        groups = document.len(),
        vars = document.variable_count(),
        "loaded model-field configuration"
    );
    Ok(document)
}
