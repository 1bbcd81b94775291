//! XML export: `<records>` document with one `<record>` element per row.

use crate::error::ExportError;
use crate::exporter::{ExportFormat, Exporter};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer as XmlWriter;
use std::io::Write;
use synth_core::{Batch, Template};
use synth_generator::RecordGenerator;

/// Exports batches as a pretty-printed XML document.
///
/// Root element is `records`; each row becomes a `record` element with one
/// child element per field (tag = field name). Null renders as an empty
/// element, booleans lowercase, dates ISO-8601; text content is
/// entity-escaped by the writer.
pub struct XmlExporter {
    generator: RecordGenerator,
}

impl XmlExporter {
    /// Create an XML exporter whose record generator uses the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            generator: RecordGenerator::new(seed),
        }
    }

    /// Create an XML exporter around an existing record generator.
    pub fn with_generator(generator: RecordGenerator) -> Self {
        Self { generator }
    }
}

impl Exporter for XmlExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xml
    }

    fn generate(&mut self, template: &Template, count: usize) -> Batch {
        self.generator.generate(template, count)
    }

    fn export(&self, batch: &Batch, writer: &mut dyn Write) -> Result<(), ExportError> {
        let mut xml = XmlWriter::new_with_indent(writer, b' ', 2);

        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml.write_event(Event::Start(BytesStart::new("records")))?;

        for record in batch {
            xml.write_event(Event::Start(BytesStart::new("record")))?;
            for (name, value) in record.iter() {
                let text = value.to_string();
                if text.is_empty() {
                    xml.write_event(Event::Empty(BytesStart::new(name)))?;
                } else {
                    xml.write_event(Event::Start(BytesStart::new(name)))?;
                    xml.write_event(Event::Text(BytesText::new(&text)))?;
                    xml.write_event(Event::End(BytesEnd::new(name)))?;
                }
            }
            xml.write_event(Event::End(BytesEnd::new("record")))?;
        }

        xml.write_event(Event::End(BytesEnd::new("records")))?;
        Ok(())
    }
}
