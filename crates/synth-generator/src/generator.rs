//! Record generator: per-field value generation across a template.

use crate::generators::{numeric, temporal, text};
use crate::provider::{FakeProvider, FakerProvider};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};
use synth_core::{Batch, FieldDefinition, FieldType, FieldValue, Record, Template};
use tracing::warn;

/// Probability that a nullable field produces null.
pub const NULL_PROBABILITY: f64 = 0.10;

/// Maximum regeneration attempts for a unique field before the colliding
/// value is accepted (uniqueness is best-effort, not guaranteed).
pub const UNIQUE_RETRY_LIMIT: usize = 100;

/// Generator that produces batches of records from a template.
///
/// The generator holds a seeded RNG, so runs with the same seed, template,
/// and provider produce identical batches. It holds no other state across
/// calls; uniqueness tracking is local to a single [`generate`] invocation.
///
/// [`generate`]: RecordGenerator::generate
pub struct RecordGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Provider for realistic personal data (email, name, phone, address)
    provider: Box<dyn FakeProvider>,
}

impl RecordGenerator {
    /// Create a new record generator with the given seed and the default
    /// fake-data provider.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            provider: Box::new(FakerProvider),
        }
    }

    /// Replace the fake-data provider.
    pub fn with_provider(mut self, provider: Box<dyn FakeProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Generate `count` records conforming to `template`.
    ///
    /// Records carry exactly the template's fields in template order. For
    /// fields marked unique, previously emitted string representations are
    /// tracked for the duration of this call; colliding values are
    /// regenerated up to [`UNIQUE_RETRY_LIMIT`] times and then accepted.
    /// An empty template yields `count` empty records.
    pub fn generate(&mut self, template: &Template, count: usize) -> Batch {
        let mut seen: HashMap<&str, HashSet<String>> = template
            .iter()
            .filter(|f| f.unique)
            .map(|f| (f.name.as_str(), HashSet::new()))
            .collect();

        let mut batch = Batch::with_capacity(count);
        for _ in 0..count {
            let mut record = Record::with_capacity(template.len());
            for field in template {
                let mut value = self.generate_value(field);

                if let Some(emitted) = seen.get_mut(field.name.as_str()) {
                    let mut attempts = 0;
                    while emitted.contains(&value.to_string()) && attempts < UNIQUE_RETRY_LIMIT {
                        value = self.generate_value(field);
                        attempts += 1;
                    }
                    let key = value.to_string();
                    if emitted.contains(&key) {
                        warn!(
                            "Field '{}': still colliding after {} attempts, accepting duplicate",
                            field.name, UNIQUE_RETRY_LIMIT
                        );
                    }
                    emitted.insert(key);
                }

                record.insert(field.name.clone(), value);
            }
            batch.push(record);
        }

        batch
    }

    /// Generate one value conforming to a field definition.
    pub fn generate_value(&mut self, field: &FieldDefinition) -> FieldValue {
        if field.nullable && self.rng.gen::<f64>() < NULL_PROBABILITY {
            return FieldValue::Null;
        }

        // Choices take precedence over the declared type.
        if let Some(choices) = field.choice_values() {
            if !choices.is_empty() {
                let idx = self.rng.gen_range(0..choices.len());
                return choices[idx].clone();
            }
        }

        match field.field_type {
            FieldType::String => {
                if field.pattern.is_some() {
                    text::generate_pattern_hint(&mut self.rng)
                } else {
                    let raw = self.provider.text(&mut self.rng);
                    FieldValue::String(text::truncate_chars(raw, text::TEXT_MAX_CHARS))
                }
            }
            FieldType::Integer => {
                numeric::generate_int(&mut self.rng, field.min_value, field.max_value)
            }
            FieldType::Float => {
                numeric::generate_float(&mut self.rng, field.min_value, field.max_value)
            }
            FieldType::Boolean => FieldValue::Bool(self.rng.gen_bool(0.5)),
            FieldType::Date => temporal::generate_recent_date(&mut self.rng),
            FieldType::Email => FieldValue::String(self.provider.email(&mut self.rng)),
            FieldType::Phone => FieldValue::String(self.provider.phone_number(&mut self.rng)),
            FieldType::Address => FieldValue::String(self.provider.address(&mut self.rng)),
            FieldType::Name => FieldValue::String(self.provider.full_name(&mut self.rng)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_core::validate::validate;

    fn users_template() -> Template {
        Template::from_yaml(
            r#"
fields:
  - name: id
    type: integer
    min_value: 1
    max_value: 1000000
    unique: true
  - name: email
    type: email
  - name: age
    type: integer
    min_value: 18
    max_value: 80
  - name: is_active
    type: boolean
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_generates_exact_count_with_template_keys() {
        let template = users_template();
        let mut generator = RecordGenerator::new(42);

        let batch = generator.generate(&template, 25);

        assert_eq!(batch.len(), 25);
        for record in &batch {
            assert_eq!(record.field_names(), template.field_names());
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let template = users_template();

        let batch1 = RecordGenerator::new(42).generate(&template, 10);
        let batch2 = RecordGenerator::new(42).generate(&template, 10);

        assert_eq!(batch1, batch2);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let template = users_template();

        let batch1 = RecordGenerator::new(1).generate(&template, 10);
        let batch2 = RecordGenerator::new(2).generate(&template, 10);

        assert_ne!(batch1, batch2);
    }

    #[test]
    fn test_numeric_bounds_hold() {
        let template = users_template();
        let batch = RecordGenerator::new(42).generate(&template, 200);

        for record in &batch {
            let age = record.get("age").unwrap().as_i64().unwrap();
            assert!((18..=80).contains(&age));
        }
    }

    #[test]
    fn test_non_nullable_fields_never_null() {
        let template = users_template();
        let batch = RecordGenerator::new(42).generate(&template, 200);

        for record in &batch {
            for (_, value) in record.iter() {
                assert!(!value.is_null());
            }
        }
    }

    #[test]
    fn test_nullable_field_produces_some_nulls() {
        let template = Template::from_yaml(
            r#"
fields:
  - name: note
    type: string
    nullable: true
"#,
        )
        .unwrap();

        let batch = RecordGenerator::new(42).generate(&template, 300);
        let nulls = batch
            .iter()
            .filter(|r| r.get("note").unwrap().is_null())
            .count();

        // 10% rate over 300 draws; zero would mean the null path is dead.
        assert!(nulls > 0);
        assert!(nulls < 150);
    }

    #[test]
    fn test_unique_field_no_duplicates_in_small_batch() {
        let template = users_template();
        let batch = RecordGenerator::new(42).generate(&template, 100);

        let ids: HashSet<String> = batch
            .iter()
            .map(|r| r.get("id").unwrap().to_string())
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_unique_exhaustion_accepts_duplicates() {
        // Value space of 2 cannot satisfy 10 unique rows; generation must
        // complete anyway.
        let template = Template::from_yaml(
            r#"
fields:
  - name: flag
    type: boolean
    unique: true
"#,
        )
        .unwrap();

        let batch = RecordGenerator::new(42).generate(&template, 10);
        assert_eq!(batch.len(), 10);
    }

    #[test]
    fn test_choices_respected_for_any_type() {
        let template = Template::from_yaml(
            r#"
fields:
  - name: currency
    type: string
    choices: [USD, EUR, GBP, JPY]
  - name: priority
    type: integer
    choices: [1, 2, 3]
"#,
        )
        .unwrap();

        let batch = RecordGenerator::new(42).generate(&template, 100);
        for record in &batch {
            let currency = record.get("currency").unwrap().as_str().unwrap();
            assert!(["USD", "EUR", "GBP", "JPY"].contains(&currency));

            let priority = record.get("priority").unwrap().as_i64().unwrap();
            assert!((1..=3).contains(&priority));
        }
    }

    #[test]
    fn test_float_field_rounded_in_range() {
        let template = Template::from_yaml(
            r#"
fields:
  - name: amount
    type: float
    min_value: 0.01
    max_value: 10000.0
"#,
        )
        .unwrap();

        let batch = RecordGenerator::new(42).generate(&template, 1000);
        for record in &batch {
            let amount = record.get("amount").unwrap().as_numeric().unwrap();
            assert!((0.01..=10000.0).contains(&amount));
            assert!(((amount * 100.0).round() - amount * 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_template_yields_empty_records() {
        let template = Template::from_yaml("fields: []").unwrap();
        let batch = RecordGenerator::new(42).generate(&template, 3);

        assert_eq!(batch.len(), 3);
        assert!(batch.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_generated_values_pass_validation() {
        let template = users_template();
        let batch = RecordGenerator::new(42).generate(&template, 100);

        for record in &batch {
            for field in &template {
                let value = record.get(&field.name).unwrap();
                assert!(
                    validate(value, field),
                    "value {value:?} failed validation for field '{}'",
                    field.name
                );
            }
        }
    }

    #[test]
    fn test_pattern_hint_yields_alphanumeric_not_conformant() {
        let template = Template::from_yaml(
            r#"
fields:
  - name: txn
    type: string
    pattern: "TRX[0-9]{10}"
"#,
        )
        .unwrap();

        let batch = RecordGenerator::new(42).generate(&template, 10);
        for record in &batch {
            let s = record.get("txn").unwrap().as_str().unwrap();
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_free_text_capped_at_50_chars() {
        let template = Template::from_yaml(
            r#"
fields:
  - name: comment
    type: string
"#,
        )
        .unwrap();

        let batch = RecordGenerator::new(42).generate(&template, 50);
        for record in &batch {
            let s = record.get("comment").unwrap().as_str().unwrap();
            assert!(s.chars().count() <= 50);
        }
    }
}
