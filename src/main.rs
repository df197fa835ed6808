use std::path::PathBuf;
use std::process::ExitCode;

use benchplot::{run_analyse, run_plot, AnalysisConfig};
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "benchplot",
    about = "Compare benchmark experiments from CSV output (e.g. Celero)"
)]
struct Cli {
    /// JSON file overriding column roles, metrics and export formatting
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pick a base and comparison experiments, then plot every metric.
    Analyse {
        /// Benchmark CSV file
        file: Option<PathBuf>,
    },

    /// Interactive chart per chart-data CSV (first column is the index).
    Plot {
        /// One or more CSV files
        files: Vec<PathBuf>,
    },
}

fn print_usage() {
    let _ = Cli::command().print_long_help();
    println!(
        "\n  'benchplot' handles files which are outputs from the Celero framework.\n  \
         Experiment and index columns are configured with --config."
    );
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AnalysisConfig::load_json(path)?,
        None => AnalysisConfig::default(),
    };

    match cli.command {
        Some(Commands::Analyse { file: Some(file) }) => {
            if let Err(e) = run_analyse(&file, config) {
                eprintln!("{e}");
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Plot { files }) if !files.is_empty() => {
            println!("benchplot is working");
            run_plot(&files, config)?;
        }
        _ => print_usage(),
    }
    Ok(ExitCode::SUCCESS)
}
