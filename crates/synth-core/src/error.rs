//! Error types for template loading and validation.

/// Error type for template operations.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Error reading a template file
    #[error("Failed to read template file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing template YAML
    #[error("Failed to parse template YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A field was declared with an empty name
    #[error("Field name must not be empty")]
    EmptyFieldName,

    /// Two fields share the same name
    #[error("Duplicate field: {0}")]
    DuplicateField(String),

    /// min_value exceeds max_value
    #[error("Field '{name}': min_value {min} exceeds max_value {max}")]
    InvalidBounds { name: String, min: f64, max: f64 },

    /// choices was declared but holds no values
    #[error("Field '{0}': choices must not be empty")]
    EmptyChoices(String),

    /// choices may only hold scalar literals
    #[error("Field '{0}': choices must be scalar values")]
    NonScalarChoice(String),
}
