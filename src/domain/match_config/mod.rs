//! Observation-to-model matching configuration.
//!
//! The master document pairs a model-field configuration (`cf_config`) with a
//! `mapping` section telling the matching step which configured variables feed
//! each observation type.

pub mod mapping_entry;
pub mod parse;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::cf_config::{ConfigDocument, VariableSpec};
use crate::domain::{AppError, KeyKind};

pub use mapping_entry::{MappingEntry, PPBV, UNKNOWN_UNIT};
pub use parse::{CfConfigSource, UnresolvedMatchConfig, parse_match_content};

/// Validated master configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchConfig {
    pub cf: ConfigDocument,
    pub mapping: BTreeMap<String, MappingEntry>,
}

impl MatchConfig {
    pub fn entry(&self, key: &str) -> Result<&MappingEntry, AppError> {
        self.mapping
            .get(key)
            .ok_or_else(|| AppError::key_not_found(KeyKind::MappingEntry, key, self.mapping.keys()))
    }

    /// Entries that target the given observation type.
    pub fn entries_for_obstype<'a>(
        &'a self,
        obstype: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a MappingEntry)> + 'a {
        self.mapping
            .iter()
            .filter(move |(_, entry)| entry.obstype == obstype)
            .map(|(key, entry)| (key.as_str(), entry))
    }

    /// Resolve a variable key against every group of the model configuration.
    pub fn variable(&self, var_key: &str) -> Result<(&str, &VariableSpec), AppError> {
        self.cf.find_variable(var_key)
    }
}
