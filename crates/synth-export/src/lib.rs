//! JSON, CSV, and XML exporters for the datasynth mock data generator.
//!
//! Each exporter implements the [`Exporter`] trait: it can produce a batch
//! (delegating to a shared [`RecordGenerator`](synth_generator::RecordGenerator)
//! so the value distribution is identical regardless of output format) and
//! serialize a batch to a writer or file.
//!
//! # Example
//!
//! ```rust
//! use synth_core::presets;
//! use synth_export::{Exporter, JsonExporter};
//!
//! let template = presets::user_data();
//! let mut exporter = JsonExporter::new(42);
//!
//! let batch = exporter.generate(&template, 5);
//! let mut out = Vec::new();
//! exporter.export(&batch, &mut out).unwrap();
//! assert!(out.starts_with(b"["));
//! ```

mod csv;
mod error;
mod exporter;
mod json;
mod xml;

pub use csv::CsvExporter;
pub use error::ExportError;
pub use exporter::{exporter_for, ExportFormat, Exporter, DEFAULT_BUFFER_SIZE};
pub use json::JsonExporter;
pub use xml::XmlExporter;
