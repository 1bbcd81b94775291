//! CSV export: header row from the first record, one line per record.

use crate::error::ExportError;
use crate::exporter::{ExportFormat, Exporter};
use std::io::Write;
use synth_core::{Batch, Template};
use synth_generator::RecordGenerator;

/// Exports batches as RFC-4180-style CSV.
///
/// The header row is taken from the first record's field names in record
/// order. An empty batch produces no output at all, not even headers. Null
/// values render as empty cells.
pub struct CsvExporter {
    generator: RecordGenerator,
}

impl CsvExporter {
    /// Create a CSV exporter whose record generator uses the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            generator: RecordGenerator::new(seed),
        }
    }

    /// Create a CSV exporter around an existing record generator.
    pub fn with_generator(generator: RecordGenerator) -> Self {
        Self { generator }
    }
}

impl Exporter for CsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn generate(&mut self, template: &Template, count: usize) -> Batch {
        self.generator.generate(template, count)
    }

    fn export(&self, batch: &Batch, writer: &mut dyn Write) -> Result<(), ExportError> {
        let Some(first) = batch.first() else {
            return Ok(());
        };

        let headers = first.field_names();
        let mut csv_writer = ::csv::Writer::from_writer(writer);
        csv_writer.write_record(&headers)?;

        for record in batch {
            // Every row supplies a cell for every header column; a missing
            // or null field renders as an empty string.
            let row: Vec<String> = headers
                .iter()
                .map(|&name| {
                    record
                        .get(name)
                        .map(|value| value.to_string())
                        .unwrap_or_default()
                })
                .collect();
            csv_writer.write_record(&row)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_core::Template;

    fn sample_template() -> Template {
        Template::from_yaml(
            r#"
fields:
  - name: name
    type: name
  - name: age
    type: integer
    min_value: 18
    max_value: 100
  - name: email
    type: email
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_header_plus_data_rows() {
        let template = sample_template();
        let mut exporter = CsvExporter::new(42);
        let batch = exporter.generate(&template, 3);

        let mut out = Vec::new();
        exporter.export(&batch, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "name,age,email");
    }

    #[test]
    fn test_age_cells_parse_in_range() {
        let template = sample_template();
        let mut exporter = CsvExporter::new(42);
        let batch = exporter.generate(&template, 3);

        let mut out = Vec::new();
        exporter.export(&batch, &mut out).unwrap();

        let mut reader = ::csv::Reader::from_reader(out.as_slice());
        for row in reader.records() {
            let row = row.unwrap();
            let age: i64 = row[1].parse().unwrap();
            assert!((18..=100).contains(&age));
        }
    }

    #[test]
    fn test_empty_batch_writes_nothing() {
        let exporter = CsvExporter::new(42);
        let mut out = Vec::new();
        exporter.export(&Vec::new(), &mut out).unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn test_null_renders_as_empty_cell() {
        let template = Template::from_yaml(
            r#"
fields:
  - name: id
    type: integer
    min_value: 1
    max_value: 10
  - name: note
    type: string
    nullable: true
"#,
        )
        .unwrap();

        let mut exporter = CsvExporter::new(42);
        let batch = exporter.generate(&template, 200);

        let mut out = Vec::new();
        exporter.export(&batch, &mut out).unwrap();

        let mut reader = ::csv::Reader::from_reader(out.as_slice());
        let mut saw_empty = false;
        for row in reader.records() {
            let row = row.unwrap();
            assert_eq!(row.len(), 2);
            if row[1].is_empty() {
                saw_empty = true;
            }
        }
        assert!(saw_empty, "expected at least one null cell in 200 rows");
    }
}
