//! Pure parse/validate for model-field configuration documents.
//!
//! Parsing happens in two passes: the text is first read as untyped YAML
//! (failures are `ConfigParse`), then walked into typed records (failures are
//! `ConfigSchema`, naming the offending group and variable).

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use super::document::ConfigDocument;
use super::group::VariableGroup;
use super::variable::VariableSpec;
use crate::domain::AppError;

const GROUP_KEYS: &[&str] = &["template", "vars"];
const VARIABLE_KEYS: &[&str] = &["name_on_file", "scal"];

/// Parse and validate configuration text. `origin` names the source in errors.
pub fn parse_config_content(content: &str, origin: &str) -> Result<ConfigDocument, AppError> {
    let root = parse_yaml(content, origin)?;
    parse_config_value(root)
}

/// Read text as untyped YAML, with `<<` merge keys applied.
pub(crate) fn parse_yaml(content: &str, origin: &str) -> Result<Value, AppError> {
    let parse_error = |e: serde_yaml::Error| AppError::ConfigParse {
        path: origin.to_string(),
        details: e.to_string(),
    };
    let mut value: Value = serde_yaml::from_str(content).map_err(parse_error)?;
    value.apply_merge().map_err(parse_error)?;
    Ok(value)
}

/// Validate an already-parsed YAML value.
pub(crate) fn parse_config_value(root: Value) -> Result<ConfigDocument, AppError> {
    let mapping = match root {
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(AppError::schema(format!(
                "top-level value must be a mapping of group names, found {}",
                describe(&other)
            )));
        }
    };

    let mut groups = BTreeMap::new();
    for (key, value) in &mapping {
        let name = key_string(key, "group name")?;
        let group = parse_group(&name, value)?;
        debug!(group = %name, vars = group.vars.len(), "parsed variable group");
        groups.insert(name, group);
    }

    Ok(ConfigDocument::new(groups))
}

fn parse_group(name: &str, value: &Value) -> Result<VariableGroup, AppError> {
    let context = format!("group '{}'", name);
    let fields = Fields::new(&context, value)?;

    let template = fields.required_str("template")?;
    if template.trim().is_empty() {
        return Err(AppError::schema(format!("{}: `template` must not be empty", context)));
    }

    let vars_value = fields.required("vars")?;
    let Value::Mapping(vars_mapping) = vars_value else {
        return Err(AppError::schema(format!(
            "{}: `vars` must be a mapping of variable keys, found {}",
            context,
            describe(vars_value)
        )));
    };
    fields.log_ignored(GROUP_KEYS);

    let mut vars = BTreeMap::new();
    for (key, value) in vars_mapping {
        let var_key = key_string(key, &format!("{} variable key", context))?;
        let spec = parse_variable(name, &var_key, value)?;
        vars.insert(var_key, spec);
    }

    if vars.is_empty() {
        warn!(group = %name, "group defines no variables; nothing will be read from it");
    }

    Ok(VariableGroup { template: template.to_string(), vars })
}

fn parse_variable(group: &str, var_key: &str, value: &Value) -> Result<VariableSpec, AppError> {
    let context = format!("group '{}', variable '{}'", group, var_key);
    let fields = Fields::new(&context, value)?;

    let name_on_file = fields.required_str("name_on_file")?;
    if name_on_file.is_empty() {
        return Err(AppError::schema(format!("{}: `name_on_file` must not be empty", context)));
    }

    let scal = match fields.optional("scal") {
        None => None,
        Some(value) => Some(finite_number(&context, "scal", value)?),
    };
    fields.log_ignored(VARIABLE_KEYS);

    Ok(VariableSpec::new(name_on_file, scal))
}

/// Read a YAML number as a finite `f64`.
pub(crate) fn finite_number(context: &str, key: &str, value: &Value) -> Result<f64, AppError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() => Ok(n),
        Some(n) => Err(AppError::schema(format!("{}: `{}` must be finite, found {}", context, key, n))),
        None => Err(AppError::schema(format!(
            "{}: `{}` must be a number, found {}",
            context,
            key,
            describe(value)
        ))),
    }
}

/// Keyed access to a YAML mapping with schema errors scoped to `context`.
pub(crate) struct Fields<'a> {
    context: &'a str,
    mapping: &'a Mapping,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(context: &'a str, value: &'a Value) -> Result<Self, AppError> {
        match value {
            Value::Mapping(mapping) => Ok(Self { context, mapping }),
            other => Err(AppError::schema(format!(
                "{}: expected a mapping, found {}",
                context,
                describe(other)
            ))),
        }
    }

    pub(crate) fn optional(&self, key: &str) -> Option<&'a Value> {
        self.mapping.get(key)
    }

    pub(crate) fn required(&self, key: &str) -> Result<&'a Value, AppError> {
        self.optional(key).ok_or_else(|| {
            AppError::schema(format!("{}: missing required key `{}`", self.context, key))
        })
    }

    pub(crate) fn required_str(&self, key: &str) -> Result<&'a str, AppError> {
        let value = self.required(key)?;
        value.as_str().ok_or_else(|| {
            AppError::schema(format!(
                "{}: `{}` must be a string, found {}",
                self.context,
                key,
                describe(value)
            ))
        })
    }

    pub(crate) fn optional_str(&self, key: &str) -> Result<Option<&'a str>, AppError> {
        match self.optional(key) {
            None => Ok(None),
            Some(value) => value.as_str().map(Some).ok_or_else(|| {
                AppError::schema(format!(
                    "{}: `{}` must be a string, found {}",
                    self.context,
                    key,
                    describe(value)
                ))
            }),
        }
    }

    /// Debug-log keys outside `known`; they are tolerated for compatibility
    /// with files that carry consumer-specific annotations.
    pub(crate) fn log_ignored(&self, known: &[&str]) {
        let ignored: Vec<String> = self
            .mapping
            .keys()
            .filter(|k| !k.as_str().is_some_and(|k| known.contains(&k)))
            .map(|k| k.as_str().map(str::to_string).unwrap_or_else(|| format!("{:?}", k)))
            .collect();
        if !ignored.is_empty() {
            debug!(context = self.context, ?ignored, "ignoring unrecognized keys");
        }
    }
}

pub(crate) fn key_string(key: &Value, what: &str) -> Result<String, AppError> {
    key.as_str()
        .map(str::to_string)
        .ok_or_else(|| AppError::schema(format!("{} must be a string, found {}", what, describe(key))))
}

pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
