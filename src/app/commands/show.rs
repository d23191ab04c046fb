//! Select part of a model-field configuration for display.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{AppError, ConfigDocument, VariableGroup, VariableSpec};

/// The portion of a document a `show` request resolved to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ShowTarget<'a> {
    Document(&'a ConfigDocument),
    Group { group: &'a str, template: &'a str, vars: &'a BTreeMap<String, VariableSpec> },
    Variable { group: &'a str, variable: &'a str, name_on_file: &'a str, scal: f64 },
}

pub fn execute<'a>(
    document: &'a ConfigDocument,
    group: Option<&'a str>,
    variable: Option<&'a str>,
) -> Result<ShowTarget<'a>, AppError> {
    match (group, variable) {
        (None, _) => Ok(ShowTarget::Document(document)),
        (Some(group_name), None) => {
            let group = document.get_group(group_name)?;
            Ok(group_target(group_name, group))
        }
        (Some(group_name), Some(var_key)) => {
            let spec = document.get_variable(group_name, var_key)?;
            Ok(ShowTarget::Variable {
                group: group_name,
                variable: var_key,
                name_on_file: &spec.name_on_file,
                scal: spec.scal,
            })
        }
    }
}

fn group_target<'a>(name: &'a str, group: &'a VariableGroup) -> ShowTarget<'a> {
    ShowTarget::Group {
        group: name,
        template: group.resolved_template(),
        vars: &group.vars,
    }
}
