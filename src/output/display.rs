//! Display functions for command results

use super::formatters::{comparison_bar, format_values};
use crate::commands::{DemoReport, SelectionReport, TraceReport, VerifyStatistics};
use colored::Colorize;

/// Print the result of a selection
pub fn print_selection_report(report: &SelectionReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Sequence: {}", format_values(&report.values).bright_yellow());
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  Minimum:     {}",
        report.extremes.min().to_string().green().bold()
    );
    println!(
        "  Maximum:     {}",
        report.extremes.max().to_string().green().bold()
    );

    let bar = comparison_bar(report.comparisons, report.naive_comparisons, 30);
    println!(
        "\n  Comparisons: [{}] {} (naive scan: {})",
        bar.green(),
        report.comparisons.to_string().bright_yellow().bold(),
        report.naive_comparisons
    );
    if report.naive_comparisons > 0 {
        let saved = report.naive_comparisons.saturating_sub(report.comparisons);
        let pct = saved as f64 / report.naive_comparisons as f64 * 100.0;
        println!("  Saved:       {saved} comparisons ({pct:.0}%)");
    }
}

/// Print the result of a traced selection
pub fn print_trace_report(report: &TraceReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "RECURSION TRACE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nResult: {} in {} comparisons",
        report.extremes.to_string().bright_yellow().bold(),
        report.comparisons
    );
    println!(
        "Calls: {} ({} base cases), depth {}",
        report.node_count, report.leaf_count, report.depth
    );

    println!("\n{}", report.listing);

    if let Some(path) = &report.dot_path {
        println!("Diagram written to {}", path.display().to_string().green());
        println!("Render it with: dot -Tpng {} -o recursion.png", path.display());
    }
}

/// Print the demonstration outcomes
pub fn print_demo_report(report: &DemoReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DIVIDE-AND-CONQUER MIN/MAX DEMO".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (index, scenario) in report.scenarios.iter().enumerate() {
        let mark = if scenario.passed {
            "✅".to_string()
        } else {
            "❌".to_string()
        };
        println!(
            "\n{mark} Scenario {}: {}",
            index + 1,
            format_values(&scenario.values).bright_yellow()
        );
        println!(
            "   min={}, max={} (expected min={}, max={})",
            scenario.actual.0, scenario.actual.1, scenario.expected.0, scenario.expected.1
        );
    }

    println!("\n{}", "Recursion tree of scenario 1:".bright_cyan().bold());
    println!("\n{}", report.trace.listing);

    if let Some(path) = &report.trace.dot_path {
        println!("Diagram written to {}", path.display().to_string().green());
    }

    println!();
    if report.all_passed {
        println!("{}", "All scenarios passed".green().bold());
    } else {
        println!("{}", "Some scenarios FAILED".red().bold());
    }
}

/// Print verification sweep statistics
pub fn print_verify_statistics(stats: &VerifyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "VERIFICATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Sweep".bright_cyan().bold());
    println!("   Trials:           {}", stats.trials);
    println!("   Seed:             {}", stats.seed);
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());
    println!("   Trials/second:    {:.1}", stats.trials_per_second);

    println!("\n🔍 {}", "Checks".bright_cyan().bold());
    let extremes_line = if stats.extremes_failures == 0 {
        "all matched the naive scan".green()
    } else {
        format!("{} MISMATCHES", stats.extremes_failures).red().bold()
    };
    println!("   Extremes:         {extremes_line}");

    let bound_line = if stats.bound_failures == 0 {
        "all within floor(5n/3) - 2".green()
    } else {
        format!("{} EXCEEDED the bound", stats.bound_failures).red().bold()
    };
    println!("   Comparison bound: {bound_line}");

    let pairing_pct = stats.within_pairing_optimal as f64 / stats.trials as f64 * 100.0;
    println!(
        "   Pairing-optimal:  {:.1}% of trials also met ceil(3n/2) - 2",
        pairing_pct
    );

    println!("\n⚖️  {}", "Comparison economy".bright_cyan().bold());
    println!("   Divide & conquer: {}", stats.total_comparisons);
    println!("   Naive scans:      {}", stats.total_naive_comparisons);
    if stats.total_naive_comparisons > 0 {
        let saved = stats
            .total_naive_comparisons
            .saturating_sub(stats.total_comparisons);
        let pct = saved as f64 / stats.total_naive_comparisons as f64 * 100.0;
        println!(
            "   Saved:            {} ({})",
            saved,
            format!("{pct:.1}%").bright_yellow().bold()
        );
    }

    for failure in &stats.failures {
        println!(
            "\n{} {} expected (min={}, max={}), got (min={}, max={})",
            "MISMATCH:".red().bold(),
            format_values(&failure.values),
            failure.expected.0,
            failure.expected.1,
            failure.actual.0,
            failure.actual.1
        );
    }
}
