//! Display functions for command results

use super::formatters::{create_progress_bar, grid_rows, plural};
use crate::commands::{BenchmarkResult, CheckReport, SolveResult};
use crate::core::Grid;
use colored::Colorize;

fn print_grid(grid: &Grid) {
    println!("\n{}", "WORD GRID:".bright_cyan().bold());
    for row in grid_rows(grid) {
        println!("   {}", row.bright_yellow().bold());
    }
}

/// Print the result of solving a puzzle
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    print_grid(&result.grid);
    println!("{}", "─".repeat(60).cyan());

    let total = result.solution.len();
    println!(
        "\nFound {} {} with {} letters or more",
        total.to_string().green().bold(),
        plural(total, "result", "results"),
        result.min_length
    );

    for (&len, words) in result.solution.buckets() {
        let heading = format!(
            "Found {} {} with {len} letters:",
            words.len(),
            plural(words.len(), "result", "results")
        );
        if words.is_empty() {
            println!("\n{}", heading.bright_black());
            continue;
        }
        println!("\n{}", heading.bright_cyan().bold());
        for word in words {
            if len == result.grid.letters().len() {
                println!(" - {}", word.bright_yellow().bold());
            } else {
                println!(" - {word}");
            }
        }
    }

    println!();
    println!(
        "Time taken:       {:.2} ms",
        result.duration.as_secs_f64() * 1000.0
    );
    if verbose {
        println!("Pruning:          {}", result.prune_mode);
        println!("Nodes visited:    {}", result.stats.visited);
        println!("Subtrees pruned:  {}", result.stats.pruned);
        println!(
            "Raw matches:      {} ({} unique)",
            result.stats.accepted, total
        );
    }
}

/// Print the result of checking a puzzle
pub fn print_check_report(report: &CheckReport) {
    print_grid(&report.pruned.grid);

    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!(
        "   Pruned:    {:>9} nodes, {} answers, {:.2} ms",
        report.pruned.stats.visited,
        report.pruned.solution.len(),
        report.pruned.duration.as_secs_f64() * 1000.0
    );
    println!(
        "   Full:      {:>9} nodes, {} answers, {:.2} ms",
        report.full.stats.visited,
        report.full.solution.len(),
        report.full.duration.as_secs_f64() * 1000.0
    );

    let pct = report.reduction_percent();
    println!(
        "   Saved:     [{}] {}",
        create_progress_bar(pct, 100.0, 30).green(),
        format!("{pct:.1}%").bright_yellow()
    );

    println!();
    if report.passed() {
        println!(
            "{}",
            "✅ All answers valid, pruning lost nothing".green().bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ {} {}",
                report.violations.len(),
                plural(report.violations.len(), "violation", "violations")
            )
            .red()
            .bold()
        );
        for violation in &report.violations {
            println!("   - {violation}");
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles:          {}", result.puzzles);
    println!("   Seed:             {}", result.seed);
    println!("   Answers found:    {}", result.total_answers);
    println!("   Nodes (pruned):   {}", result.pruned.visited);
    println!("   Nodes (full):     {}", result.full.visited);
    println!(
        "   Time (pruned):    {:.2}s",
        result.pruned_time.as_secs_f64()
    );
    println!("   Time (full):      {:.2}s", result.full_time.as_secs_f64());

    let pct = result.reduction_percent();
    println!("\n📈 {}", "Pruning:".bright_cyan().bold());
    println!(
        "   Nodes saved:  [{}] {}",
        create_progress_bar(pct, 100.0, 40).green(),
        format!("{pct:.1}%").bright_yellow().bold()
    );
    println!(
        "   Speedup:      {}",
        format!("{:.1}x", result.speedup()).bright_yellow()
    );

    println!();
    if result.mismatches.is_empty() {
        println!("{}", "✅ Pruning never changed the answers".green().bold());
    } else {
        println!(
            "{}",
            format!(
                "❌ Pruning changed the answers on {} {}",
                result.mismatches.len(),
                plural(result.mismatches.len(), "puzzle", "puzzles")
            )
            .red()
            .bold()
        );
        for grid in &result.mismatches {
            println!("   - {}", String::from_utf8_lossy(grid.letters()));
        }
    }
}
