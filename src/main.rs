use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::{OutputFormat, validate_command};

#[derive(Parser)]
#[command(
    name = "osi-validate",
    about = "Validate an OSI semantic model: schema, unique names, references and SQL syntax",
    version,
    long_about = None
)]
struct Cli {
    /// Semantic model document (YAML)
    file: PathBuf,

    /// JSON Schema to use instead of the bundled OSI schema
    #[arg(short, long, env = "OSI_SCHEMA")]
    schema: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    // Usage errors exit with 1, help and version with 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    match validate_command(&cli.file, cli.schema.as_deref(), cli.format) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("osi_validator=warn,osi_validate=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("osi_validator=info,osi_validate=info"), // -v: info messages
        _ => EnvFilter::new("osi_validator=debug,osi_validate=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
