//! Master matching configuration loading.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::load_cf_config;
use crate::domain::match_config::{CfConfigSource, parse_match_content};
use crate::domain::{AppError, MatchConfig};
use crate::ports::DocumentStore;

/// Read the master document at `path`, load the model-field configuration it
/// references, and check the mapping against it.
pub fn load_match_config(
    path: &Path,
    store: &impl DocumentStore,
) -> Result<MatchConfig, AppError> {
    let content = store.read_document(path)?;
    let unresolved = parse_match_content(&content, &path.display().to_string())?;

    let cf = match &unresolved.cf_source {
        CfConfigSource::Inline(document) => document.clone(),
        CfConfigSource::File(reference) => {
            let cf_path = resolve_reference(path, reference, store);
            debug!(reference = %reference, resolved = %cf_path.display(), "loading referenced cf_config");
            load_cf_config(&cf_path, store)?
        }
    };

    let config = unresolved.resolve(cf)?;
    info!(path = %path.display(), entries = config.mapping.len(), "loaded matching configuration");
    Ok(config)
}

/// A reference that does not name an existing document is taken relative to
/// the master document's directory.
fn resolve_reference(master: &Path, reference: &str, store: &impl DocumentStore) -> PathBuf {
    let candidate = PathBuf::from(reference);
    if candidate.is_absolute() || store.document_exists(&candidate) {
        return candidate;
    }
    match master.parent() {
        Some(dir) => dir.join(candidate),
        None => candidate,
    }
}
