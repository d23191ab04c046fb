use std::collections::BTreeMap;

use serde::Serialize;

use super::group::VariableGroup;
use super::variable::VariableSpec;
use crate::domain::{AppError, KeyKind};

/// Validated model-field configuration: group name to group.
///
/// Built once by the loader and only read afterwards, so a single instance
/// can be shared by reference between consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigDocument {
    groups: BTreeMap<String, VariableGroup>,
}

impl ConfigDocument {
    pub fn new(groups: BTreeMap<String, VariableGroup>) -> Self {
        Self { groups }
    }

    pub fn get_group(&self, group_name: &str) -> Result<&VariableGroup, AppError> {
        self.groups
            .get(group_name)
            .ok_or_else(|| AppError::key_not_found(KeyKind::Group, group_name, self.groups.keys()))
    }

    pub fn get_variable(&self, group_name: &str, var_key: &str) -> Result<&VariableSpec, AppError> {
        self.get_group(group_name)?.variable(var_key)
    }

    /// Look a variable key up across every group.
    ///
    /// Keys are expected to be unique across groups; when they are not, the
    /// group that sorts first wins. See [`Self::groups_defining`].
    pub fn find_variable(&self, var_key: &str) -> Result<(&str, &VariableSpec), AppError> {
        self.groups
            .iter()
            .find_map(|(name, group)| group.vars.get(var_key).map(|spec| (name.as_str(), spec)))
            .ok_or_else(|| {
                let all_keys: Vec<String> =
                    self.groups.values().flat_map(|g| g.vars.keys().cloned()).collect();
                AppError::key_not_found(KeyKind::Variable, var_key, &all_keys)
            })
    }

    /// Names of every group that defines `var_key`, in sorted order.
    pub fn groups_defining(&self, var_key: &str) -> Vec<&str> {
        self.groups
            .iter()
            .filter(|(_, group)| group.vars.contains_key(var_key))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &VariableGroup)> {
        self.groups.iter().map(|(name, group)| (name.as_str(), group))
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn variable_count(&self) -> usize {
        self.groups.values().map(|g| g.vars.len()).sum()
    }
}
