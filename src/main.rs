//! Command-line interface for datasynth
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # 100 user records as pretty JSON
//! datasynth generate --preset user-data --format json --count 100 -o users.json
//!
//! # Financial records as CSV with a fixed seed (reproducible)
//! datasynth generate --preset financial-data --format csv --count 500 \
//!   --seed 42 -o transactions.csv
//!
//! # Custom template from a YAML file, exported as XML
//! datasynth generate --template schema.yaml --format xml -o records.xml
//! ```
//!
//! ## Preview
//! ```bash
//! # Print up to 5 sample records to stdout
//! datasynth preview --preset user-data
//! ```
//!
//! ## Validate
//! ```bash
//! # Check a template file and print its field summary
//! datasynth validate --template schema.yaml
//! ```
//!
//! ## Template file format
//! ```yaml
//! fields:
//!   - name: id
//!     type: integer
//!     min_value: 1000
//!     max_value: 9999
//!     unique: true
//!   - name: currency
//!     type: string
//!     choices: [USD, EUR, GBP, JPY]
//!   - name: email
//!     type: email
//!     nullable: true
//! ```

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::Rng;
use std::path::{Path, PathBuf};
use synth_core::{FieldDefinition, Preset, Template};
use synth_export::{exporter_for, ExportFormat, Exporter};
use synth_generator::RecordGenerator;

/// Maximum number of records shown by the preview command.
const PREVIEW_MAX: usize = 5;

#[derive(Parser)]
#[command(name = "datasynth")]
#[command(about = "Generate mock structured records and export them to JSON, CSV, or XML")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate records and export them to a file
    Generate {
        #[command(flatten)]
        source: TemplateSource,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Number of records to generate
        #[arg(long, default_value_t = 10)]
        count: usize,

        /// Output file path (defaults to records.<format>)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Seed for reproducible output; drawn from entropy when omitted
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print a small sample of generated records to stdout as JSON
    Preview {
        #[command(flatten)]
        source: TemplateSource,

        /// Number of records to preview (at most 5)
        #[arg(long, default_value_t = PREVIEW_MAX)]
        count: usize,

        /// Seed for reproducible output; drawn from entropy when omitted
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check a template file and print its field summary
    Validate {
        /// Template YAML file
        #[arg(long)]
        template: PathBuf,
    },
}

/// Where the template comes from: a YAML file or a built-in preset.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct TemplateSource {
    /// Template YAML file
    #[arg(long)]
    template: Option<PathBuf>,

    /// Built-in template
    #[arg(long, value_enum)]
    preset: Option<PresetArg>,
}

/// Built-in template selector.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetArg {
    /// id, username, email, names, join date, active flag
    UserData,
    /// transaction id, amount, currency, date, status, account
    FinancialData,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::UserData => Preset::UserData,
            PresetArg::FinancialData => Preset::FinancialData,
        }
    }
}

/// Export format selector.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Xml,
}

impl From<OutputFormat> for ExportFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Json => ExportFormat::Json,
            OutputFormat::Csv => ExportFormat::Csv,
            OutputFormat::Xml => ExportFormat::Xml,
        }
    }
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            source,
            format,
            count,
            output,
            seed,
        } => {
            if count == 0 {
                anyhow::bail!("record count must be at least 1");
            }
            let template = load_template(&source)?;
            let seed = resolve_seed(seed);
            let format = ExportFormat::from(format);
            let output = output
                .unwrap_or_else(|| PathBuf::from(format!("records.{}", format.extension())));

            let mut exporter = exporter_for(format, seed);
            let batch = exporter.generate(&template, count);
            exporter
                .export_to_file(&batch, &output)
                .with_context(|| format!("Failed to write output file {}", output.display()))?;

            println!(
                "Wrote {} records to {} (seed {})",
                batch.len(),
                output.display(),
                seed
            );
        }

        Commands::Preview {
            source,
            count,
            seed,
        } => {
            let template = load_template(&source)?;
            let seed = resolve_seed(seed);
            let count = count.clamp(1, PREVIEW_MAX);

            let mut generator = RecordGenerator::new(seed);
            let batch = generator.generate(&template, count);
            println!("{}", serde_json::to_string_pretty(&batch)?);
        }

        Commands::Validate { template } => {
            let loaded = load_template_file(&template)?;
            println!("Template OK: {} fields", loaded.len());
            for field in &loaded {
                println!("  {}", describe_field(field));
            }
        }
    }

    Ok(())
}

/// Resolve the template source, rejecting templates with no fields.
fn load_template(source: &TemplateSource) -> anyhow::Result<Template> {
    let template = match (&source.template, source.preset) {
        (Some(path), None) => load_template_file(path)?,
        (None, Some(preset)) => Preset::from(preset).template(),
        // clap's group constraints make these unreachable.
        _ => anyhow::bail!("exactly one of --template or --preset is required"),
    };

    if template.is_empty() {
        anyhow::bail!("template defines no fields; nothing to generate");
    }
    Ok(template)
}

/// Load and check a template YAML file.
fn load_template_file(path: &Path) -> anyhow::Result<Template> {
    Template::from_file(path)
        .with_context(|| format!("Failed to load template from {}", path.display()))
}

/// One-line field summary for the validate command.
fn describe_field(field: &FieldDefinition) -> String {
    let mut notes = Vec::new();
    match (field.min_value, field.max_value) {
        (Some(min), Some(max)) => notes.push(format!("range {min}..={max}")),
        (Some(min), None) => notes.push(format!("min {min}")),
        (None, Some(max)) => notes.push(format!("max {max}")),
        (None, None) => {}
    }
    if let Some(choices) = &field.choices {
        notes.push(format!("{} choices", choices.len()));
    }
    if let Some(pattern) = &field.pattern {
        notes.push(format!("pattern hint '{pattern}'"));
    }
    if field.nullable {
        notes.push("nullable".to_string());
    }
    if field.unique {
        notes.push("unique".to_string());
    }

    if notes.is_empty() {
        format!("{} ({})", field.name, field.field_type)
    } else {
        format!("{} ({}): {}", field.name, field.field_type, notes.join(", "))
    }
}

/// Use the given seed, or draw one from entropy so the run is still
/// reproducible from the printed value.
fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => seed,
        None => {
            let seed = rand::thread_rng().gen();
            tracing::info!("No seed given, using {seed}");
            seed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_args_parse() {
        let cli = Cli::try_parse_from([
            "datasynth",
            "generate",
            "--preset",
            "financial-data",
            "--format",
            "csv",
            "--count",
            "500",
            "--seed",
            "42",
            "-o",
            "out.csv",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate {
                source,
                format,
                count,
                output,
                seed,
            } => {
                assert!(matches!(source.preset, Some(PresetArg::FinancialData)));
                assert!(source.template.is_none());
                assert!(matches!(format, OutputFormat::Csv));
                assert_eq!(count, 500);
                assert_eq!(output, Some(PathBuf::from("out.csv")));
                assert_eq!(seed, Some(42));
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_template_and_preset_conflict() {
        let result = Cli::try_parse_from([
            "datasynth",
            "generate",
            "--template",
            "schema.yaml",
            "--preset",
            "user-data",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_template_source_required() {
        let result = Cli::try_parse_from(["datasynth", "generate"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_preset_template_is_loadable() {
        let source = TemplateSource {
            template: None,
            preset: Some(PresetArg::UserData),
        };
        let template = load_template(&source).unwrap();
        assert_eq!(template.len(), synth_core::presets::user_data().len());
    }

    #[test]
    fn test_empty_template_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        std::fs::write(&path, "fields: []").unwrap();

        let source = TemplateSource {
            template: Some(path),
            preset: None,
        };
        let err = load_template(&source).unwrap_err();
        assert!(err.to_string().contains("no fields"));
    }

    #[test]
    fn test_describe_field_mentions_constraints() {
        let field = synth_core::FieldDefinition::new("amount", synth_core::FieldType::Float)
            .with_range(0.01, 10000.0)
            .nullable();
        let summary = describe_field(&field);

        assert!(summary.contains("amount (float)"));
        assert!(summary.contains("range 0.01..=10000"));
        assert!(summary.contains("nullable"));
    }
}
