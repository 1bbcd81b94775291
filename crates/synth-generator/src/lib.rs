//! Record generation engine for the datasynth mock data generator.
//!
//! This crate provides the [`RecordGenerator`], which produces batches of
//! records conforming to a [`Template`](synth_core::Template). The generator
//! uses a seeded RNG so runs with the same seed and template are
//! reproducible.
//!
//! # Architecture
//!
//! ```text
//! Template (synth-core)
//!        │
//!        ▼
//! ┌───────────────────┐
//! │  RecordGenerator  │
//! │                   │
//! │  - rng (StdRng)   │
//! │  - provider       │──── FakeProvider (email, name, phone, address)
//! └─────────┬─────────┘
//!           │
//!           ▼
//!     Batch = Vec<Record>
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::Template;
//! use synth_generator::RecordGenerator;
//!
//! let template = Template::from_yaml(r#"
//! fields:
//!   - name: age
//!     type: integer
//!     min_value: 18
//!     max_value: 80
//! "#).unwrap();
//!
//! let mut generator = RecordGenerator::new(42);
//! let batch = generator.generate(&template, 10);
//! assert_eq!(batch.len(), 10);
//! ```

pub mod generator;
pub mod generators;
pub mod provider;

// Re-exports for convenience
pub use generator::{RecordGenerator, NULL_PROBABILITY, UNIQUE_RETRY_LIMIT};
pub use provider::{FakeProvider, FakerProvider};
