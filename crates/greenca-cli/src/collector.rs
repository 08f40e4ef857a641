//! Input Collector: the only place raw, possibly out-of-range input enters.
//!
//! Every value leaving the collector is finite and inside its field's
//! `[min, max]` (after clamping, when that policy is configured), keyed by
//! display name.

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::Path;

use greenca_core::config::OutOfRangePolicy;
use greenca_core::errors::InputError;
use greenca_core::schema::{FeatureDefinition, FeatureSchema};
use tracing::{debug, warn};

pub struct InputCollector<'a> {
    schema: &'a FeatureSchema,
    policy: OutOfRangePolicy,
}

impl<'a> InputCollector<'a> {
    pub fn new(schema: &'a FeatureSchema, policy: OutOfRangePolicy) -> Self {
        Self { schema, policy }
    }

    /// Find a field by display name, falling back to model identifier.
    pub fn field(&self, name: &str) -> Result<&'a FeatureDefinition, InputError> {
        let schema: &'a FeatureSchema = self.schema;
        schema
            .by_display_name(name)
            .or_else(|| schema.by_identifier(name))
            .ok_or_else(|| InputError::UnknownField {
                name: name.to_string(),
            })
    }

    /// Apply the range policy to one value.
    pub fn accept(&self, def: &FeatureDefinition, value: f64) -> Result<f64, InputError> {
        if !value.is_finite() {
            return Err(InputError::NotANumber {
                name: def.display_name.clone(),
                raw: value.to_string(),
            });
        }
        if def.contains(value) {
            return Ok(value);
        }
        match self.policy {
            OutOfRangePolicy::Reject => Err(InputError::OutOfRange {
                name: def.display_name.clone(),
                value,
                min: def.min,
                max: def.max,
            }),
            OutOfRangePolicy::Clamp => {
                let clamped = def.clamp(value);
                warn!(field = %def.display_name, value, clamped, "value clamped into range");
                Ok(clamped)
            }
        }
    }

    /// Parse `raw` as a number for `def` and apply the range policy.
    pub fn parse_value(&self, def: &FeatureDefinition, raw: &str) -> Result<f64, InputError> {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| InputError::NotANumber {
                name: def.display_name.clone(),
                raw: raw.to_string(),
            })?;
        self.accept(def, value)
    }

    /// Parse `NAME=VALUE`. The value is split at the last `=`.
    pub fn parse_assignment(&self, raw: &str) -> Result<(String, f64), InputError> {
        let (name, value) = raw
            .rsplit_once('=')
            .ok_or_else(|| InputError::MalformedAssignment {
                raw: raw.to_string(),
            })?;
        let def = self.field(name.trim())?;
        let value = self.parse_value(def, value)?;
        Ok((def.display_name.clone(), value))
    }

    /// Collect `NAME=VALUE` assignments. Later assignments win.
    pub fn collect_assignments(
        &self,
        assignments: &[String],
    ) -> Result<HashMap<String, f64>, InputError> {
        let mut values = HashMap::with_capacity(assignments.len());
        for raw in assignments {
            let (name, value) = self.parse_assignment(raw)?;
            values.insert(name, value);
        }
        Ok(values)
    }

    /// Read a flat JSON object or TOML table of field name to number.
    ///
    /// Naming one field twice (by display name and by identifier) is an
    /// error.
    pub fn load_values_file(&self, path: &Path) -> Result<HashMap<String, f64>, InputError> {
        let file_error = |message: String| InputError::ValuesFile {
            path: path.display().to_string(),
            message,
        };
        let content = std::fs::read_to_string(path).map_err(|e| file_error(e.to_string()))?;

        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
        let raw: HashMap<String, f64> = if is_toml {
            toml::from_str(&content).map_err(|e| file_error(e.to_string()))?
        } else {
            serde_json::from_str(&content).map_err(|e| file_error(e.to_string()))?
        };

        // Resolve every name before range checks so a field named both by
        // display name and by identifier is reported regardless of order.
        let mut resolved: HashMap<&str, (&str, &'a FeatureDefinition, f64)> =
            HashMap::with_capacity(raw.len());
        for (name, value) in &raw {
            let def = self.field(name)?;
            if let Some((previous, _, _)) =
                resolved.insert(def.display_name.as_str(), (name.as_str(), def, *value))
            {
                let mut aliases = vec![previous.to_string(), name.clone()];
                aliases.sort();
                return Err(InputError::DuplicateField {
                    name: def.display_name.clone(),
                    aliases,
                });
            }
        }

        let mut values = HashMap::with_capacity(resolved.len());
        for (display_name, (_, def, value)) in resolved {
            values.insert(display_name.to_string(), self.accept(def, value)?);
        }
        debug!(path = %path.display(), count = values.len(), "values file loaded");
        Ok(values)
    }

    /// Prompt for every schema field missing from `values`, in schema order.
    ///
    /// Invalid answers are reported and the field is asked again; end of
    /// input aborts.
    pub fn prompt<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
        values: &mut HashMap<String, f64>,
    ) -> Result<(), InputError> {
        let io = |e: std::io::Error| InputError::Io {
            message: e.to_string(),
        };

        for def in self.schema {
            if values.contains_key(&def.display_name) {
                continue;
            }
            loop {
                write!(writer, "{} {}: ", def.display_name, def.range_label()).map_err(io)?;
                writer.flush().map_err(io)?;

                let mut line = String::new();
                if reader.read_line(&mut line).map_err(io)? == 0 {
                    return Err(InputError::EndOfInput {
                        name: def.display_name.clone(),
                    });
                }
                match self.parse_value(def, &line) {
                    Ok(value) => {
                        values.insert(def.display_name.clone(), value);
                        break;
                    }
                    Err(e) => writeln!(writer, "  {e}").map_err(io)?,
                }
            }
        }
        Ok(())
    }

    /// Schema fields with no collected value, in schema order.
    pub fn missing(&self, values: &HashMap<String, f64>) -> Vec<&'a str> {
        let schema: &'a FeatureSchema = self.schema;
        schema
            .iter()
            .filter(|f| !values.contains_key(&f.display_name))
            .map(|f| f.display_name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_resolves_to_display_name() {
        let schema = FeatureSchema::builtin();
        let collector = InputCollector::new(&schema, OutOfRangePolicy::Reject);
        let (name, value) = collector.parse_assignment("FS_0=2.5").unwrap();
        assert_eq!(name, "Implicit Fossil_Fuel_Subsidies_%GDP");
        assert_eq!(value, 2.5);
    }

    #[test]
    fn display_name_with_space_parses() {
        let schema = FeatureSchema::builtin();
        let collector = InputCollector::new(&schema, OutOfRangePolicy::Reject);
        let (name, _) = collector
            .parse_assignment("Implicit Fossil_Fuel_Subsidies_%GDP = 0.13")
            .unwrap();
        assert_eq!(name, "Implicit Fossil_Fuel_Subsidies_%GDP");
    }

    #[test]
    fn missing_equals_is_malformed() {
        let schema = FeatureSchema::builtin();
        let collector = InputCollector::new(&schema, OutOfRangePolicy::Reject);
        assert!(matches!(
            collector.parse_assignment("EP_0"),
            Err(InputError::MalformedAssignment { .. })
        ));
    }
}
