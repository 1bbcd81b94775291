//! Advisory validation of generated values against field definitions.
//!
//! The validator is test-facing: generation for constraint-free fields
//! cannot fail these checks, so it is not enforced inline in the generator.

use crate::field::{FieldDefinition, FieldType};
use crate::values::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Validate a value against its field definition. Pure, no side effects.
pub fn validate(value: &FieldValue, def: &FieldDefinition) -> bool {
    if value.is_null() {
        return def.nullable;
    }

    // Choices constrain membership regardless of the declared type.
    if let Some(choices) = def.choice_values() {
        return choices.iter().any(|choice| choice == value);
    }

    match def.field_type {
        FieldType::String => match (&def.pattern, value.as_str()) {
            (Some(pattern), Some(s)) => matches_pattern(pattern, s),
            (Some(_), None) => false,
            (None, _) => true,
        },
        FieldType::Integer | FieldType::Float => match value.as_numeric() {
            Some(v) => within_bounds(v, def),
            None => false,
        },
        FieldType::Email => match value.as_str() {
            Some(s) => EMAIL_RE.is_match(s),
            None => false,
        },
        // Generator output is correct by construction for these.
        FieldType::Boolean | FieldType::Date | FieldType::Phone | FieldType::Address
        | FieldType::Name => true,
    }
}

/// Match a pattern anchored at the start of the string.
fn matches_pattern(pattern: &str, value: &str) -> bool {
    let anchored = if pattern.starts_with('^') {
        pattern.to_string()
    } else {
        format!("^{pattern}")
    };
    match Regex::new(&anchored) {
        Ok(re) => re.is_match(value),
        Err(_) => false,
    }
}

/// Check a numeric value against optional inclusive bounds.
fn within_bounds(value: f64, def: &FieldDefinition) -> bool {
    if let Some(min) = def.min_value {
        if value < min {
            return false;
        }
    }
    if let Some(max) = def.max_value {
        if value > max {
            return false;
        }
    }
    true
}
