use serde::{Deserialize, Serialize};

/// One indicator collected from the user and passed to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDefinition {
    /// Name shown in the input form and used as the key of collected values.
    pub display_name: String,
    /// Exact column name the model was fit with.
    pub model_identifier: String,
    pub min: f64,
    pub max: f64,
    /// Decimal places to display. `None` means the default formatting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,
}

impl FeatureDefinition {
    pub fn new(display_name: &str, model_identifier: &str, min: f64, max: f64) -> Self {
        Self {
            display_name: display_name.to_string(),
            model_identifier: model_identifier.to_string(),
            min,
            max,
            precision: None,
        }
    }

    /// Inclusive range check.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp a value into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Format a value for display, honoring `precision` when set.
    pub fn format_value(&self, value: f64) -> String {
        match self.precision {
            Some(p) => format!("{value:.prec$}", prec = p as usize),
            None => value.to_string(),
        }
    }

    /// Human-readable range, e.g. `[0.0000, 0.0100]`.
    pub fn range_label(&self) -> String {
        format!("[{}, {}]", self.format_value(self.min), self.format_value(self.max))
    }
}
