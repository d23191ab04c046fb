//! cfobs: load, validate and query the model-field configuration used to match
//! point observations against GEOS-CF output.
//!
//! A configuration maps group names (e.g. `met`, `chem`) to a data-source
//! template and the variables read from it:
//!
//! ```yaml
//! chem:
//!   template: 'https://opendap.nccs.nasa.gov/dods/gmao/geos-cf/assim/chm_tavg_1hr_g1440x721_v1'
//!   vars:
//!     o3:
//!       name_on_file: 'o3'
//!       scal: 1.0e+9
//! ```

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use chrono::NaiveDateTime;

use adapters::LocalFilesystemStore;

pub use domain::{
    AppError, ConfigDocument, DEFAULT_SCAL, KeyKind, MappingEntry, MatchConfig, TemplateLocation,
    VariableGroup, VariableSpec, parse_config_content,
};

/// Load and validate a model-field configuration file.
pub fn load(path: impl AsRef<Path>) -> Result<ConfigDocument, AppError> {
    app::config::load_cf_config(path.as_ref(), &LocalFilesystemStore)
}

/// Look up a group by name.
pub fn get_group<'a>(
    doc: &'a ConfigDocument,
    group_name: &str,
) -> Result<&'a VariableGroup, AppError> {
    doc.get_group(group_name)
}

/// Look up a variable by group name and variable key.
pub fn get_variable<'a>(
    doc: &'a ConfigDocument,
    group_name: &str,
    var_key: &str,
) -> Result<&'a VariableSpec, AppError> {
    doc.get_variable(group_name, var_key)
}

/// The group's template exactly as written in the configuration.
pub fn resolved_template(group: &VariableGroup) -> &str {
    group.resolved_template()
}

/// The group's template with its date directives rendered for `at`.
pub fn expand_template(group: &VariableGroup, at: &NaiveDateTime) -> Result<String, AppError> {
    group.expand_template(at)
}

/// Load a master matching configuration, following its `configuration_file`
/// reference when present.
pub fn load_match_config(path: impl AsRef<Path>) -> Result<MatchConfig, AppError> {
    app::config::load_match_config(path.as_ref(), &LocalFilesystemStore)
}
