//! Field definitions: the per-column generation contract.

use crate::error::TemplateError;
use crate::values::{scalar_from_yaml, FieldValue};
use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;

/// Supported field types for mock data generation.
///
/// The enum is closed: a template file naming an unknown type fails to
/// parse, surfacing a configuration error at load time instead of quietly
/// producing null columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Free-form or pattern-hinted text
    String,
    /// Whole numbers, optionally bounded
    Integer,
    /// Floating point numbers, optionally bounded, rounded to 2 decimals
    Float,
    /// true / false
    Boolean,
    /// Calendar date within the past year
    Date,
    /// Synthetic email address
    Email,
    /// Synthetic phone number
    Phone,
    /// Synthetic postal address
    Address,
    /// Synthetic person name
    Name,
}

impl FieldType {
    /// Whether min_value/max_value bounds apply to this type.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Name => "name",
        })
    }
}

/// Defines the structure and constraints for one field in the mock data.
///
/// A `FieldDefinition` is immutable once constructed; the same definition is
/// reused across every record of a generation batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name, unique within a template
    pub name: String,

    /// Field type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Lower bound (inclusive), numeric types only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,

    /// Upper bound (inclusive), numeric types only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,

    /// Allowed literal values; when present, generation picks exclusively
    /// from this list regardless of type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<YamlValue>>,

    /// Format hint for string generation. The generator treats this as a
    /// non-binding hint (it emits arbitrary alphanumeric text, not a value
    /// matching the pattern); the validator applies it as a start-anchored
    /// regex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Whether generated values may be null
    #[serde(default)]
    pub nullable: bool,

    /// Best-effort batch-scoped uniqueness by string representation
    #[serde(default)]
    pub unique: bool,
}

impl FieldDefinition {
    /// Create a new field definition with no constraints.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            min_value: None,
            max_value: None,
            choices: None,
            pattern: None,
            nullable: false,
            unique: false,
        }
    }

    /// Set inclusive numeric bounds.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    /// Restrict generation to a list of literal values.
    pub fn with_choices<I, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<YamlValue>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Attach a pattern hint.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Allow null values.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Request best-effort uniqueness within a batch.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Choices converted to field values, if any.
    pub fn choice_values(&self) -> Option<Vec<FieldValue>> {
        self.choices
            .as_ref()
            .map(|choices| choices.iter().map(scalar_from_yaml).collect())
    }

    /// Verify the definition's internal invariants.
    pub fn check(&self) -> Result<(), TemplateError> {
        if self.name.is_empty() {
            return Err(TemplateError::EmptyFieldName);
        }
        if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
            if min > max {
                return Err(TemplateError::InvalidBounds {
                    name: self.name.clone(),
                    min,
                    max,
                });
            }
        }
        if let Some(choices) = &self.choices {
            if choices.is_empty() {
                return Err(TemplateError::EmptyChoices(self.name.clone()));
            }
            if choices.iter().any(|c| {
                matches!(
                    c,
                    YamlValue::Sequence(_) | YamlValue::Mapping(_) | YamlValue::Tagged(_)
                )
            }) {
                return Err(TemplateError::NonScalarChoice(self.name.clone()));
            }
        }
        Ok(())
    }
}
