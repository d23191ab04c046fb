//! Load a matching configuration and list its entries.

use std::path::Path;

use serde::Serialize;

use crate::app::config::load_match_config;
use crate::domain::AppError;
use crate::ports::DocumentStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingRow {
    pub key: String,
    pub obstype: String,
    pub unit: String,
    pub mw: Option<f64>,
    pub model_column: String,
    pub sources: Vec<MappingSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingSource {
    pub group: String,
    pub variable: String,
    pub name_on_file: String,
    pub scal: f64,
}

pub fn execute(
    path: &Path,
    model_column: &str,
    store: &impl DocumentStore,
) -> Result<Vec<MappingRow>, AppError> {
    let config = load_match_config(path, store)?;

    let mut rows = Vec::with_capacity(config.mapping.len());
    for (key, entry) in &config.mapping {
        let sources = entry
            .cfvars
            .iter()
            .map(|var_key| {
                let (group, spec) = config.variable(var_key)?;
                Ok::<_, AppError>(MappingSource {
                    group: group.to_string(),
                    variable: var_key.clone(),
                    name_on_file: spec.name_on_file.clone(),
                    scal: spec.scal,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        rows.push(MappingRow {
            key: key.clone(),
            obstype: entry.obstype.clone(),
            unit: entry.unit.clone(),
            mw: entry.mw,
            model_column: entry.model_column(model_column),
            sources,
        });
    }
    Ok(rows)
}
