//! Reaction network analysis CLI.
//!
//! Provides the `lambnet` binary with subcommands for working with
//! networks exported by the soup simulator's graph-export command.
//! Currently supports `analyze`, which loads an exported JSON file,
//! validates it, and prints the reaction matrix plus the analysis summary
//! (or the raw analysis as JSON for machine consumption).
//!
//! All computation goes through `lambnet_core`/`lambnet_report`; this
//! binary only does file I/O, flag parsing, and exit-code mapping.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use lambnet_core::{analyze, NetworkModel, NetworkRecord};
use lambnet_report::{render_matrix, render_summary, ReportConfig};

/// Reaction network analysis tools.
#[derive(Parser)]
#[command(name = "lambnet", about = "Reaction network analysis tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Analyze an exported reaction network.
    Analyze {
        /// Path to the exported network JSON file.
        path: PathBuf,

        /// Largest species count for which the reaction matrix is printed.
        #[arg(long, default_value_t = 150)]
        matrix_limit: usize,

        /// Print the analysis result as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            matrix_limit,
            json,
        } => {
            let exit_code = run_analyze(&path, matrix_limit, json);
            process::exit(exit_code);
        }
    }
}

/// Execute the analyze subcommand.
///
/// Returns exit code: 0 = success, 1 = malformed network or JSON,
/// 3 = I/O error.
fn run_analyze(path: &Path, matrix_limit: usize, json: bool) -> i32 {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error: failed to read '{}': {}", path.display(), e);
            return 3;
        }
    };

    let record: NetworkRecord = match serde_json::from_str(&raw) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Error: invalid network file '{}': {}", path.display(), e);
            return 1;
        }
    };

    let model = match NetworkModel::from_record(record) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Error: malformed network in '{}': {}", path.display(), e);
            return 1;
        }
    };

    let analysis = analyze(&model);

    if json {
        // Machine-readable output on stdout
        let rendered = serde_json::to_string_pretty(&analysis).unwrap_or_else(|e| {
            format!("{{\"error\": \"failed to serialize analysis: {}\"}}", e)
        });
        println!("{}", rendered);
        return 0;
    }

    let config = ReportConfig {
        display_ceiling: matrix_limit,
        ..ReportConfig::default()
    };

    println!(
        "Found {} species and {} reactions",
        model.species_count(),
        analysis.total_reactions
    );

    if config.matrix_fits(model.species_count()) {
        match render_matrix(&model) {
            Ok(matrix) => println!("\n{}", matrix),
            Err(e) => eprintln!("Skipping reaction matrix: {}", e),
        }
    } else {
        println!(
            "\nSkipping reaction matrix ({} species is too large)",
            model.species_count()
        );
    }

    println!("\n{}", render_summary(&model, &analysis, &config));
    0
}
