//! Max/Min Selector - CLI
//!
//! Divide-and-conquer min/max selection with recursion-tree diagrams.

use anyhow::Result;
use clap::{Parser, Subcommand};
use maxmin_select::{
    commands::{VerifyConfig, default_dot_path, run_demo, run_select, run_trace, run_verify},
    input::{load_from_file, parse_values},
    output::{
        print_demo_report, print_selection_report, print_trace_report, print_verify_statistics,
    },
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "maxmin_select",
    about = "Simultaneous min/max selection via divide and conquer (~3n/2 comparisons)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the min and max of a sequence
    Select {
        /// Values to select over
        #[arg(value_name = "VALUE", allow_negative_numbers = true)]
        values: Vec<String>,

        /// Load the sequence from a file instead (one value per line)
        #[arg(short, long, conflicts_with = "values")]
        file: Option<PathBuf>,
    },

    /// Trace the recursion and write a Graphviz diagram
    Trace {
        /// Values to select over
        #[arg(value_name = "VALUE", allow_negative_numbers = true)]
        values: Vec<String>,

        /// Load the sequence from a file instead (one value per line)
        #[arg(short, long, conflicts_with = "values")]
        file: Option<PathBuf>,

        /// Where to write the DOT diagram
        #[arg(short, long, default_value = "recursion.dot")]
        output: PathBuf,
    },

    /// Run the canonical demonstration scenarios (default)
    Demo {
        /// Where to write the first scenario's DOT diagram
        #[arg(short, long, default_value = "demo_recursion.dot")]
        output: PathBuf,
    },

    /// Check correctness and comparison bounds on random sequences
    Verify {
        /// Number of random sequences to test
        #[arg(short = 'n', long, default_value = "1000")]
        trials: usize,

        /// Maximum sequence length
        #[arg(short, long, default_value = "64")]
        max_len: usize,

        /// RNG seed for a reproducible sweep
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Resolve the sequence from inline values or a file
fn resolve_values(values: &[String], file: Option<&Path>) -> Result<Vec<i64>> {
    match file {
        Some(path) => load_from_file(path).map_err(|e| anyhow::anyhow!(e)),
        None => {
            if values.is_empty() {
                anyhow::bail!("No values given; pass them inline or with --file");
            }
            parse_values(values).map_err(|e| anyhow::anyhow!(e))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to the demo when no command is given
    let command = cli.command.unwrap_or(Commands::Demo {
        output: default_dot_path(),
    });

    match command {
        Commands::Select { values, file } => run_select_command(&values, file.as_deref()),
        Commands::Trace {
            values,
            file,
            output,
        } => run_trace_command(&values, file.as_deref(), &output),
        Commands::Demo { output } => run_demo_command(&output),
        Commands::Verify {
            trials,
            max_len,
            seed,
        } => {
            run_verify_command(trials, max_len, seed);
            Ok(())
        }
    }
}

fn run_select_command(values: &[String], file: Option<&Path>) -> Result<()> {
    let values = resolve_values(values, file)?;
    let report = run_select(values).map_err(|e| anyhow::anyhow!(e))?;
    print_selection_report(&report);
    Ok(())
}

fn run_trace_command(values: &[String], file: Option<&Path>, output: &Path) -> Result<()> {
    let values = resolve_values(values, file)?;
    let report = run_trace(&values, Some(output)).map_err(|e| anyhow::anyhow!(e))?;
    print_trace_report(&report);
    Ok(())
}

fn run_demo_command(output: &Path) -> Result<()> {
    let report = run_demo(Some(output)).map_err(|e| anyhow::anyhow!(e))?;
    print_demo_report(&report);
    if report.all_passed {
        Ok(())
    } else {
        anyhow::bail!("demo scenarios failed")
    }
}

fn run_verify_command(trials: usize, max_len: usize, seed: Option<u64>) {
    let config = VerifyConfig {
        trials,
        max_len,
        seed,
    };
    let stats = run_verify(&config);
    print_verify_statistics(&stats);
}
