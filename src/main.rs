use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use depscope::export::{self, ExportFormat, ReportData};
use depscope::graph::{DependencyGraph, ScopeKind};
use depscope::parser::manifest;

#[derive(Parser)]
#[command(name = "depscope")]
#[command(version = "0.1.0")]
#[command(about = "Scope-aware dependency graph analyzer for package manifests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a raw scope token
    Classify {
        /// The scope token to classify (case-sensitive)
        token: String,
    },
    /// Analyze a dependency manifest and print a report
    Analyze {
        /// Path to the manifest file
        #[arg(short, long)]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "markdown")]
        format: ExportFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { token } => match ScopeKind::classify(&token) {
            Some(scope) => println!("{} -> {}", token, scope),
            None => bail!("unrecognized dependency scope: '{}'", token),
        },
        Commands::Analyze { path, format } => {
            let parsed = manifest::parse_file(&path)
                .with_context(|| format!("failed to parse manifest at {}", path.display()))?;
            manifest::validate(&parsed)?;

            let classified = manifest::classify_declarations(&parsed)?;
            let graph = DependencyGraph::from_manifest(&parsed)?;

            let data = ReportData::new(
                parsed.coordinates().unwrap_or_else(|| "unknown".to_string()),
                parsed.version.clone().unwrap_or_else(|| "0.0.0".to_string()),
                classified,
                &graph,
            );

            export::export(format, &data, &mut io::stdout())?;
        }
    }

    Ok(())
}
