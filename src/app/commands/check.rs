//! Validate a model-field configuration and summarize it.

use std::path::Path;

use serde::Serialize;

use crate::app::config::load_cf_config;
use crate::domain::AppError;
use crate::ports::DocumentStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub path: String,
    pub groups: Vec<GroupSummary>,
    pub variable_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub template: String,
    pub remote: bool,
    pub dated: bool,
    pub variables: usize,
}

pub fn execute(path: &Path, store: &impl DocumentStore) -> Result<CheckReport, AppError> {
    let document = load_cf_config(path, store)?;

    let groups = document
        .groups()
        .map(|(name, group)| GroupSummary {
            name: name.to_string(),
            template: group.resolved_template().to_string(),
            remote: group.location().is_remote(),
            dated: group.is_dated(),
            variables: group.vars.len(),
        })
        .collect();

    Ok(CheckReport {
        path: path.display().to_string(),
        groups,
        variable_count: document.variable_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryDocumentStore;

    #[test]
    fn summarizes_each_group() {
        let content = r#"
met:
  template: https://opendap.nccs.nasa.gov/dods/gmao/geos-cf/assim/met_tavg_1hr_g1440x721_x1
  vars:
    ps:
      name_on_file: ps
    t10m:
      name_on_file: t10m
chem:
  template: /data/Y%Y/chm.%Y%m%d_%H30z.nc4
  vars:
    o3:
      name_on_file: O3
"#;
        let store = MemoryDocumentStore::new().with_document("cf.yml", content);
        let report = execute(Path::new("cf.yml"), &store).unwrap();

        assert_eq!(report.variable_count, 3);
        assert_eq!(report.groups.len(), 2);

        let chem = &report.groups[0];
        assert_eq!(chem.name, "chem");
        assert!(!chem.remote);
        assert!(chem.dated);
        assert_eq!(chem.variables, 1);

        let met = &report.groups[1];
        assert!(met.remote);
        assert!(!met.dated);
    }
}
