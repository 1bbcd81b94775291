//! JSON export: pretty-printed array of objects.

use crate::error::ExportError;
use crate::exporter::{ExportFormat, Exporter};
use std::io::Write;
use synth_core::{Batch, Template};
use synth_generator::RecordGenerator;

/// Exports batches as a JSON array of objects with 2-space indentation.
///
/// Dates serialize as ISO-8601 strings, nulls as JSON null.
pub struct JsonExporter {
    generator: RecordGenerator,
}

impl JsonExporter {
    /// Create a JSON exporter whose record generator uses the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            generator: RecordGenerator::new(seed),
        }
    }

    /// Create a JSON exporter around an existing record generator.
    pub fn with_generator(generator: RecordGenerator) -> Self {
        Self { generator }
    }
}

impl Exporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn generate(&mut self, template: &Template, count: usize) -> Batch {
        self.generator.generate(template, count)
    }

    fn export(&self, batch: &Batch, writer: &mut dyn Write) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(writer, batch)?;
        Ok(())
    }
}
