//! Templates: ordered mappings from field name to field definition.

use crate::error::TemplateError;
use crate::field::FieldDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// An ordered collection of field definitions.
///
/// Declaration order defines output column order for CSV and XML. Field
/// names are unique; lookups go through a cached name index. A template is
/// built once per generation request and never mutated during generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Template {
    /// Field definitions in declaration order
    pub fields: Vec<FieldDefinition>,

    /// Cached field lookup (not serialized)
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Template {
    /// Create a template from a list of field definitions.
    ///
    /// Checks each definition's invariants and rejects duplicate names.
    pub fn new(fields: Vec<FieldDefinition>) -> Result<Self, TemplateError> {
        let mut template = Self {
            fields: Vec::with_capacity(fields.len()),
            index: HashMap::new(),
        };
        for field in fields {
            template.push(field)?;
        }
        Ok(template)
    }

    /// Append a field definition, enforcing name uniqueness.
    pub fn push(&mut self, field: FieldDefinition) -> Result<(), TemplateError> {
        field.check()?;
        if self.index.contains_key(&field.name) {
            return Err(TemplateError::DuplicateField(field.name.clone()));
        }
        self.index.insert(field.name.clone(), self.fields.len());
        self.fields.push(field);
        Ok(())
    }

    /// Parse a template from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, TemplateError> {
        let parsed: Template = serde_yaml::from_str(yaml)?;
        // Re-run construction so the index is rebuilt and every definition
        // is checked.
        Self::new(parsed.fields)
    }

    /// Load a template from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TemplateError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Get a field definition by name.
    pub fn get(&self, name: &str) -> Option<&FieldDefinition> {
        self.index.get(name).and_then(|&idx| self.fields.get(idx))
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Iterate over field definitions in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldDefinition> {
        self.fields.iter()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the template has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a Template {
    type Item = &'a FieldDefinition;
    type IntoIter = std::slice::Iter<'a, FieldDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
