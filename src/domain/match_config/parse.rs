//! Pure parse/validate for the master matching document.

use std::collections::BTreeMap;

use serde_yaml::Value;
use tracing::warn;

use super::MatchConfig;
use super::mapping_entry::{MappingEntry, UNKNOWN_UNIT};
use crate::domain::AppError;
use crate::domain::cf_config::ConfigDocument;
use crate::domain::cf_config::parse::{
    Fields, describe, finite_number, key_string, parse_config_value, parse_yaml,
};

const CONFIGURATION_FILE: &str = "configuration_file";

/// Temperature and surface pressure keys the ug/m3 to ppbv conversion reads.
const CONVERSION_MET_VARS: [&str; 2] = ["t10m", "ps"];

/// Where the model-field configuration of a master document comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum CfConfigSource {
    /// Groups written directly under `cf_config`.
    Inline(ConfigDocument),
    /// `cf_config.configuration_file`, as written (not yet resolved).
    File(String),
}

/// Master document whose mapping has not yet been checked against the model
/// configuration it references.
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedMatchConfig {
    pub cf_source: CfConfigSource,
    pub mapping: BTreeMap<String, MappingEntry>,
}

impl UnresolvedMatchConfig {
    /// Attach the model configuration and check every entry against it.
    ///
    /// Each `cfvars` key must be defined by exactly one group, and `ppbv`
    /// entries need the met variables used for the unit conversion.
    pub fn resolve(self, cf: ConfigDocument) -> Result<MatchConfig, AppError> {
        for (key, entry) in &self.mapping {
            for var_key in &entry.cfvars {
                match cf.groups_defining(var_key).as_slice() {
                    [] => {
                        return Err(AppError::schema(format!(
                            "mapping '{}': cfvars entry '{}' is not a variable of any group in cf_config",
                            key, var_key
                        )));
                    }
                    [_] => {}
                    groups => {
                        return Err(AppError::schema(format!(
                            "mapping '{}': cfvars entry '{}' is defined in more than one group ({})",
                            key,
                            var_key,
                            groups.join(", ")
                        )));
                    }
                }
            }
            if entry.requires_molecular_weight() {
                for met_key in CONVERSION_MET_VARS {
                    if cf.groups_defining(met_key).is_empty() {
                        return Err(AppError::schema(format!(
                            "mapping '{}': unit '{}' requires variable '{}' in cf_config for the conversion",
                            key, entry.unit, met_key
                        )));
                    }
                }
            }
        }
        Ok(MatchConfig { cf, mapping: self.mapping })
    }
}

/// Parse and validate master document text. `origin` names the source in errors.
pub fn parse_match_content(content: &str, origin: &str) -> Result<UnresolvedMatchConfig, AppError> {
    let root = parse_yaml(content, origin)?;
    let fields = Fields::new("master configuration", &root)?;

    let mapping_value = fields.required("mapping")?;
    let cf_value = fields.required("cf_config")?;

    let cf_source = parse_cf_source(cf_value)?;
    let mapping = parse_mapping(mapping_value)?;

    Ok(UnresolvedMatchConfig { cf_source, mapping })
}

fn parse_cf_source(value: &Value) -> Result<CfConfigSource, AppError> {
    let fields = Fields::new("cf_config", value)?;
    match fields.optional_str(CONFIGURATION_FILE)? {
        Some(file) if file.trim().is_empty() => {
            Err(AppError::schema("cf_config: `configuration_file` must not be empty"))
        }
        Some(file) => {
            fields.log_ignored(&[CONFIGURATION_FILE]);
            Ok(CfConfigSource::File(file.to_string()))
        }
        None => Ok(CfConfigSource::Inline(parse_config_value(value.clone())?)),
    }
}

fn parse_mapping(value: &Value) -> Result<BTreeMap<String, MappingEntry>, AppError> {
    let Value::Mapping(entries) = value else {
        return Err(AppError::schema(format!(
            "`mapping` must be a mapping of entry keys, found {}",
            describe(value)
        )));
    };

    let mut mapping = BTreeMap::new();
    for (key, value) in entries {
        let key = key_string(key, "mapping key")?;
        if let Some(entry) = parse_entry(&key, value)? {
            mapping.insert(key, entry);
        }
    }
    Ok(mapping)
}

fn parse_entry(key: &str, value: &Value) -> Result<Option<MappingEntry>, AppError> {
    let context = format!("mapping '{}'", key);
    let fields = Fields::new(&context, value)?;

    let Some(obstype) = fields.optional_str("obstype")? else {
        warn!(entry = %key, "no obstype defined; skipping mapping entry");
        return Ok(None);
    };

    let cfvars = match fields.optional("cfvars") {
        None => {
            warn!(entry = %key, "no cfvars defined; no model data will be matched");
            Vec::new()
        }
        Some(value) => parse_cfvars(&context, value)?,
    };

    let unit = fields.optional_str("unit")?.unwrap_or(UNKNOWN_UNIT).to_string();
    let mw = match fields.optional("mw") {
        None => None,
        Some(value) => {
            let mw = finite_number(&context, "mw", value)?;
            if mw <= 0.0 {
                return Err(AppError::schema(format!("{}: `mw` must be positive, found {}", context, mw)));
            }
            Some(mw)
        }
    };
    let modcol_suffix = fields.optional_str("modcol_suffix")?.unwrap_or_default().to_string();

    let entry = MappingEntry { obstype: obstype.to_string(), cfvars, unit, mw, modcol_suffix };
    if entry.requires_molecular_weight() && entry.mw.is_none() {
        return Err(AppError::schema(format!(
            "{}: unit '{}' requires `mw` for the conversion from mass concentration",
            context, entry.unit
        )));
    }
    Ok(Some(entry))
}

/// `cfvars` is either a single key or a list of keys.
fn parse_cfvars(context: &str, value: &Value) -> Result<Vec<String>, AppError> {
    let invalid = |found: &str| {
        AppError::schema(format!(
            "{}: `cfvars` must be a string or a list of strings, found {}",
            context, found
        ))
    };
    match value {
        Value::String(single) => Ok(vec![single.clone()]),
        Value::Sequence(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(|| invalid(describe(item))))
            .collect(),
        other => Err(invalid(describe(other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<UnresolvedMatchConfig, AppError> {
        parse_match_content(content, "master.yml")
    }

    fn schema_message(content: &str) -> String {
        match parse(content) {
            Err(AppError::ConfigSchema(msg)) => msg,
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn configuration_file_reference_is_kept_verbatim() {
        let parsed =
            parse("cf_config:\n  configuration_file: cf_config.yml\nmapping: {}\n").unwrap();
        assert_eq!(parsed.cf_source, CfConfigSource::File("cf_config.yml".into()));
        assert!(parsed.mapping.is_empty());
    }

    #[test]
    fn inline_cf_config_is_validated() {
        let msg = schema_message("cf_config:\n  met:\n    vars: {}\nmapping: {}\n");
        assert!(msg.contains("group 'met'"));
    }

    #[test]
    fn missing_sections_are_schema_errors() {
        assert!(schema_message("cf_config:\n  configuration_file: a.yml\n").contains("`mapping`"));
        assert!(schema_message("mapping: {}\n").contains("`cf_config`"));
    }

    #[test]
    fn entry_without_obstype_is_skipped() {
        let parsed = parse(
            "cf_config:\n  configuration_file: a.yml\nmapping:\n  o3:\n    cfvars: o3\n  no2:\n    obstype: no2\n    cfvars: no2\n",
        )
        .unwrap();
        assert_eq!(parsed.mapping.keys().collect::<Vec<_>>(), vec!["no2"]);
    }

    #[test]
    fn entry_without_cfvars_is_kept_empty() {
        let parsed =
            parse("cf_config:\n  configuration_file: a.yml\nmapping:\n  pm25:\n    obstype: pm25\n")
                .unwrap();
        let entry = &parsed.mapping["pm25"];
        assert!(entry.cfvars.is_empty());
        assert_eq!(entry.unit, UNKNOWN_UNIT);
        assert_eq!(entry.modcol_suffix, "");
    }

    #[test]
    fn cfvars_accepts_single_key_or_list() {
        let parsed = parse(
            "cf_config:\n  configuration_file: a.yml\nmapping:\n  a:\n    obstype: a\n    cfvars: x\n  b:\n    obstype: b\n    cfvars: [x, y]\n",
        )
        .unwrap();
        assert_eq!(parsed.mapping["a"].cfvars, vec!["x"]);
        assert_eq!(parsed.mapping["b"].cfvars, vec!["x", "y"]);
    }

    #[test]
    fn cfvars_rejects_numbers() {
        let msg = schema_message(
            "cf_config:\n  configuration_file: a.yml\nmapping:\n  a:\n    obstype: a\n    cfvars: [x, 3]\n",
        );
        assert!(msg.contains("found a number"));
    }

    #[test]
    fn ppbv_requires_molecular_weight() {
        let msg = schema_message(
            "cf_config:\n  configuration_file: a.yml\nmapping:\n  o3:\n    obstype: o3\n    cfvars: o3\n    unit: ppbv\n",
        );
        assert!(msg.contains("requires `mw`"));
    }

    #[test]
    fn molecular_weight_must_be_positive() {
        let msg = schema_message(
            "cf_config:\n  configuration_file: a.yml\nmapping:\n  o3:\n    obstype: o3\n    mw: 0\n",
        );
        assert!(msg.contains("must be positive"));
    }

    fn resolve(content: &str) -> Result<MatchConfig, AppError> {
        let parsed = parse(content).unwrap();
        let CfConfigSource::Inline(cf) = parsed.cf_source.clone() else {
            panic!("expected inline cf_config");
        };
        parsed.resolve(cf)
    }

    #[test]
    fn resolve_rejects_cfvars_defined_in_two_groups() {
        let err = resolve(
            "cf_config:\n  chem:\n    template: c\n    vars:\n      o3:\n        name_on_file: O3\n  nrt:\n    template: n\n    vars:\n      o3:\n        name_on_file: O3\nmapping:\n  o3:\n    obstype: o3\n    cfvars: o3\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("more than one group (chem, nrt)"));
    }

    #[test]
    fn resolve_requires_met_variables_for_ppbv() {
        let err = resolve(
            "cf_config:\n  chem:\n    template: c\n    vars:\n      o3:\n        name_on_file: O3\n      ps:\n        name_on_file: PS\nmapping:\n  o3:\n    obstype: o3\n    cfvars: o3\n    unit: ppbv\n    mw: 48.0\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("requires variable 't10m'"));
    }

    #[test]
    fn resolve_accepts_ppbv_with_met_variables() {
        let config = resolve(
            "cf_config:\n  met:\n    template: m\n    vars:\n      ps:\n        name_on_file: PS\n      t10m:\n        name_on_file: T10M\n  chem:\n    template: c\n    vars:\n      o3:\n        name_on_file: O3\nmapping:\n  o3:\n    obstype: o3\n    cfvars: o3\n    unit: ppbv\n    mw: 48.0\n",
        )
        .unwrap();
        assert_eq!(config.entry("o3").unwrap().mw, Some(48.0));
    }

    #[test]
    fn resolve_rejects_unknown_cfvars() {
        let parsed = parse(
            "cf_config:\n  met:\n    template: t\n    vars:\n      ps:\n        name_on_file: PS\nmapping:\n  o3:\n    obstype: o3\n    cfvars: o3\n",
        )
        .unwrap();
        let CfConfigSource::Inline(cf) = parsed.cf_source.clone() else {
            panic!("expected inline cf_config");
        };
        let err = parsed.resolve(cf).unwrap_err();
        assert!(err.to_string().contains("cfvars entry 'o3'"));
    }
}
