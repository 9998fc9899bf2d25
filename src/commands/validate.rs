use colored::Colorize;
use std::path::Path;
use tracing::info;

use osi_validator::ValidateError;
use osi_validator::loader;
use osi_validator::validation::Validator;

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// One JSON object on stdout
    Json,
}

/// Validate one document against `schema_path`, or the bundled schema when
/// none is given. Returns whether the run passed; fatal problems with the
/// inputs are returned as errors before any pass runs.
pub fn validate_command(
    document_path: &Path,
    schema_path: Option<&Path>,
    format: OutputFormat,
) -> Result<bool, ValidateError> {
    loader::ensure_inputs_exist(document_path, schema_path)?;

    let validator = match schema_path {
        Some(path) => {
            info!("Using schema {path:?}");
            Validator::from_schema_file(path)?
        }
        None => Validator::bundled()?,
    };
    let document = loader::load_document(document_path)?;

    info!("Validating {document_path:?}");
    let report = validator.validate(&document);

    let file_name = document_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| document_path.display().to_string());

    match format {
        OutputFormat::Text => {
            print!("{}", report.render_text());
            let status = report.status_line(&file_name);
            if report.passed() {
                println!("{}", status.as_str().green().bold());
            } else {
                println!("{}", status.as_str().red().bold());
            }
        }
        OutputFormat::Json => {
            let json = report
                .to_json(&file_name)
                .map_err(|e| ValidateError::io(document_path, std::io::Error::other(e)))?;
            println!("{json}");
        }
    }

    Ok(report.passed())
}
