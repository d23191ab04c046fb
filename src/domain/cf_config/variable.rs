use serde::Serialize;

/// Multiplier applied when a variable does not declare `scal`.
pub const DEFAULT_SCAL: f64 = 1.0;

/// One model field within a group: the name it carries in the source
/// dataset and the factor applied to raw values after retrieval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableSpec {
    pub name_on_file: String,
    pub scal: f64,
}

impl VariableSpec {
    pub fn new(name_on_file: impl Into<String>, scal: Option<f64>) -> Self {
        Self { name_on_file: name_on_file.into(), scal: scal.unwrap_or(DEFAULT_SCAL) }
    }

    /// Rescale a raw value read from the source dataset.
    pub fn apply_scale(&self, raw: f64) -> f64 {
        raw * self.scal
    }

    /// Whether applying the scale leaves values unchanged.
    pub fn is_unscaled(&self) -> bool {
        self.scal == DEFAULT_SCAL
    }
}
