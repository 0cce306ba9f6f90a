//! imprint-lint CLI
//!
//! Runs the duplicate label inspection over a JSON project snapshot.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use imprint_lint::{Diagnostic, DuplicateLabelInspection, LintConfig, Project};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "imprint-lint", version, about = "Find duplicate labels and bibliography keys")]
struct Cli {
    /// Project snapshot (JSON)
    #[arg(long, global = true, default_value = "project.json")]
    project: PathBuf,

    /// Inspection config (TOML, or JSON when the extension is .json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the project-wide duplicate set
    Duplicates,
    /// Print diagnostics for one document, or for every document
    Check {
        /// Path of the document to inspect, as recorded in the snapshot
        #[arg(long)]
        file: Option<String>,
        /// Mark diagnostics as coming from a background pass
        #[arg(long)]
        on_the_fly: bool,
    },
}

fn load_config(path: &Path) -> Result<LintConfig, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let config = if path.extension().is_some_and(|ext| ext == "json") {
        LintConfig::from_json(&contents)?
    } else {
        LintConfig::from_toml(&contents)?
    };
    tracing::info!("Loaded inspection config from {:?}", path);
    Ok(config)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LintConfig::default(),
    };
    let project = Project::from_json(&std::fs::read_to_string(&cli.project)?)?;
    let inspection = DuplicateLabelInspection::new(config);

    match cli.command {
        Command::Duplicates => {
            let duplicates = inspection.scan(&project.documents);
            println!("{}", serde_json::to_string_pretty(&duplicates)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { file, on_the_fly } => {
            let duplicates = inspection.scan(&project.documents);
            let diagnostics: Vec<Diagnostic> = match file {
                Some(path) => inspection.emit(project.document(&path)?, &duplicates, on_the_fly),
                None => project
                    .documents
                    .iter()
                    .flat_map(|document| inspection.emit(document, &duplicates, on_the_fly))
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&diagnostics)?);

            if diagnostics.is_empty() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
