//! Resolve or expand a group's template.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::domain::{AppError, ConfigDocument};

const TIMESTAMP_FORMATS: &[&str] =
    &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateOutput {
    pub group: String,
    pub template: String,
    /// Timestamp the template was expanded for, if any.
    pub at: Option<NaiveDateTime>,
}

pub fn execute(
    document: &ConfigDocument,
    group_name: &str,
    at: Option<NaiveDateTime>,
) -> Result<TemplateOutput, AppError> {
    let group = document.get_group(group_name)?;
    let template = match &at {
        Some(at) => group.expand_template(at)?,
        None => group.resolved_template().to_string(),
    };
    Ok(TemplateOutput { group: group_name.to_string(), template, at })
}

/// Parse a command-line timestamp (UTC). A bare date means midnight.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim().trim_end_matches('Z');
    for format in TIMESTAMP_FORMATS {
        if let Ok(at) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(at);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("invalid timestamp '{}': expected YYYY-MM-DDTHH:MM[:SS]", value))
}
