//! Core types for the datasynth mock data generator.
//!
//! This crate provides the foundational types shared across the generation
//! and export pipeline:
//!
//! - [`FieldType`] / [`FieldDefinition`] - Per-column generation contract
//! - [`Template`] - Ordered mapping from field name to definition
//! - [`FieldValue`] / [`Record`] / [`Batch`] - Generated value model
//! - [`validate`](validate::validate) - Advisory value-vs-definition check
//! - [`presets`] - Built-in "user data" and "financial data" templates
//!
//! # Architecture
//!
//! ```text
//! synth-core (this crate)
//!    │
//!    ├─── synth-generator  (produces Records from a Template)
//!    │
//!    └─── synth-export     (serializes a Batch to JSON / CSV / XML)
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::{FieldDefinition, FieldType, Template};
//!
//! let template = Template::from_yaml(r#"
//! fields:
//!   - name: id
//!     type: integer
//!     min_value: 1000
//!     max_value: 9999
//!     unique: true
//!   - name: email
//!     type: email
//! "#).unwrap();
//!
//! assert_eq!(template.field_names(), vec!["id", "email"]);
//! assert_eq!(template.get("id").unwrap().field_type, FieldType::Integer);
//! ```

pub mod error;
pub mod field;
pub mod presets;
pub mod template;
pub mod validate;
pub mod values;

// Re-exports for convenience
pub use error::TemplateError;
pub use field::{FieldDefinition, FieldType};
pub use presets::Preset;
pub use template::Template;
pub use values::{Batch, FieldValue, Record};
