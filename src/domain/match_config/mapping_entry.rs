use serde::Serialize;

/// Unit label used when an entry does not declare one.
pub const UNKNOWN_UNIT: &str = "unknown";

/// Unit whose conversion from mass concentration needs a molecular weight.
pub const PPBV: &str = "ppbv";

/// How one observation type is matched against configured model variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingEntry {
    /// Observation type key the entry applies to.
    pub obstype: String,
    /// Variable keys whose (scaled) values are summed into the model column.
    pub cfvars: Vec<String>,
    pub unit: String,
    /// Molecular weight in g/mol.
    pub mw: Option<f64>,
    pub modcol_suffix: String,
}

impl MappingEntry {
    /// Column the matched model value is written to, given the base column name.
    pub fn model_column(&self, base: &str) -> String {
        format!("{}{}", base, self.modcol_suffix)
    }

    pub fn requires_molecular_weight(&self) -> bool {
        self.unit == PPBV
    }
}
