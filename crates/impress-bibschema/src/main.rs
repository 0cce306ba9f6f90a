//! impress-bibschema CLI
//!
//! Print the field contract of BibTeX entry types as JSON.

use clap::{Parser, Subcommand};
use impress_bibschema::{all_entry_types, try_lookup};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "impress-bibschema", version, about = "BibTeX entry type schemas")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the schema of a single entry type (e.g. `article` or `@Book`)
    Show { token: String },
    /// List every known entry type
    List {
        /// Print only the tokens, one per line
        #[arg(long)]
        tokens: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Show { token } => {
            let schema = try_lookup(&token)?;
            println!("{}", serde_json::to_string_pretty(schema)?);
        }
        Command::List { tokens: true } => {
            for schema in all_entry_types() {
                println!("{}", schema.token);
            }
        }
        Command::List { tokens: false } => {
            println!("{}", serde_json::to_string_pretty(all_entry_types())?);
        }
    }
    Ok(())
}
