use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::Serialize;
use url::Url;

use super::template;
use super::variable::VariableSpec;
use crate::domain::{AppError, KeyKind};

/// A collection of model variables read from one data source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableGroup {
    pub template: String,
    pub vars: BTreeMap<String, VariableSpec>,
}

/// Where a group's template points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "location", rename_all = "snake_case")]
pub enum TemplateLocation {
    /// Network endpoint, typically an OPeNDAP aggregation.
    Remote(Url),
    /// File-system path pattern.
    Local(PathBuf),
}

impl TemplateLocation {
    pub fn is_remote(&self) -> bool {
        matches!(self, TemplateLocation::Remote(_))
    }
}

impl VariableGroup {
    /// The template string exactly as written in the document.
    pub fn resolved_template(&self) -> &str {
        &self.template
    }

    /// Template with its date directives rendered for `at`.
    pub fn expand_template(&self, at: &NaiveDateTime) -> Result<String, AppError> {
        template::expand_date_directives(&self.template, at)
    }

    pub fn is_dated(&self) -> bool {
        template::has_date_directives(&self.template)
    }

    pub fn location(&self) -> TemplateLocation {
        match Url::parse(&self.template) {
            // Single-letter schemes are Windows drive prefixes.
            Ok(url) if url.scheme() == "file" => TemplateLocation::Local(PathBuf::from(url.path())),
            Ok(url) if url.scheme().len() > 1 => TemplateLocation::Remote(url),
            _ => TemplateLocation::Local(PathBuf::from(&self.template)),
        }
    }

    pub fn variable(&self, var_key: &str) -> Result<&VariableSpec, AppError> {
        self.vars
            .get(var_key)
            .ok_or_else(|| AppError::key_not_found(KeyKind::Variable, var_key, self.vars.keys()))
    }

    pub fn variable_keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }
}
