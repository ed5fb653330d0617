//! Word Target Solver - CLI
//!
//! Solves 3×3 Word Target puzzles with a prefix-pruned backtracking search.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_target::{
    commands::{SolveConfig, check_puzzle, run_benchmark, solve_puzzle, write_prefixes},
    core::{Lexicon, PrefixGate},
    output::{print_benchmark_result, print_check_report, print_solve_result},
    wordlists::loader::{embedded_lexicon, load_grid, load_lexicon, load_prefix_gate},
};

#[derive(Parser)]
#[command(
    name = "word_target",
    about = "Word Target solver using prefix-pruned backtracking search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Sorted dictionary file, one word per line (default: embedded list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Sorted prefix table file (default: derived from the dictionary)
    #[arg(short, long, global = true)]
    prefixes: Option<PathBuf>,

    /// Shortest word to report
    #[arg(
        short,
        long,
        global = true,
        default_value = "4",
        value_parser = clap::value_parser!(u8).range(1..=9)
    )]
    min_length: u8,

    /// Log search statistics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle file
    Solve {
        /// Puzzle file: three lines of three letters, centre letter in the middle
        puzzle: PathBuf,

        /// Disable prefix pruning and walk the full search tree
        #[arg(long)]
        no_prune: bool,

        /// Search the nine first-letter subtrees in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Verify that pruning loses no answers on a puzzle
    Check {
        /// Puzzle file
        puzzle: PathBuf,
    },

    /// Measure pruning on random puzzles built from 9-letter words
    Benchmark {
        /// Number of random puzzles
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Seed for reproducible puzzles
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Derive the prefix table from the dictionary
    Prefixes {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Load the dictionary from `path`, or the embedded one
fn load_dictionary(path: Option<&Path>) -> Result<Lexicon> {
    match path {
        Some(path) => Ok(load_lexicon(path)?),
        None => {
            let lexicon = embedded_lexicon();
            info!(words = lexicon.len(), "using embedded dictionary");
            Ok(lexicon)
        }
    }
}

/// Load the prefix table from `path`, or derive it from the dictionary
fn load_gate(path: Option<&Path>, lexicon: &Lexicon) -> Result<PrefixGate> {
    match path {
        Some(path) => Ok(load_prefix_gate(path)?),
        None => {
            let gate = PrefixGate::derive(lexicon);
            info!(prefixes = gate.len(), "derived prefix table");
            Ok(gate)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let lexicon = load_dictionary(cli.dictionary.as_deref())?;
    let min_length = usize::from(cli.min_length);

    match cli.command {
        Commands::Solve {
            puzzle,
            no_prune,
            parallel,
        } => {
            let gate = load_gate(cli.prefixes.as_deref(), &lexicon)?;
            let grid = load_grid(&puzzle)?;
            let config = SolveConfig {
                min_length,
                prune: !no_prune,
                parallel,
            };
            let result = solve_puzzle(&config, &grid, &lexicon, &gate);
            print_solve_result(&result, cli.verbose);
            Ok(())
        }
        Commands::Check { puzzle } => {
            let gate = load_gate(cli.prefixes.as_deref(), &lexicon)?;
            let grid = load_grid(&puzzle)?;
            let report = check_puzzle(&SolveConfig::new(min_length), &grid, &lexicon, &gate);
            print_check_report(&report);
            if !report.passed() {
                bail!(
                    "{} violation(s) found in {}",
                    report.violations.len(),
                    puzzle.display()
                );
            }
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            let gate = load_gate(cli.prefixes.as_deref(), &lexicon)?;
            println!("Running benchmark on {count} random puzzles...");
            let result = run_benchmark(&lexicon, &gate, count, min_length, seed)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_benchmark_result(&result);
            if !result.mismatches.is_empty() {
                bail!("pruning changed the answers on {} puzzle(s)", result.mismatches.len());
            }
            Ok(())
        }
        Commands::Prefixes { output } => {
            let count = match output {
                Some(path) => {
                    let file = fs::File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    write_prefixes(&lexicon, file)
                        .with_context(|| format!("Failed to write {}", path.display()))?
                }
                None => write_prefixes(&lexicon, io::stdout().lock())
                    .context("Failed to write prefixes")?,
            };
            info!(prefixes = count, "wrote prefix table");
            Ok(())
        }
    }
}
