use colored::*;

use crate::common::format::{format_count, format_path, format_size, format_size_colored};
use crate::scanner::catalog::CategoryRoots;
use crate::scanner::category::{CacheCategory, CategoryResult};

/// Print analysis results in human-readable format
pub fn print_analysis_results(results: &[CategoryResult], detailed: bool) {
    let total_bytes: u64 = results.iter().map(|r| r.total_bytes).sum();
    let total_items: usize = results.iter().map(|r| r.item_count).sum();

    println!();
    println!("  {} CacheSweep Analysis", "🧹");
    println!("{}", "─".repeat(60).dimmed());
    println!(
        "  {} reclaimable  •  {}",
        format_size_colored(total_bytes),
        format_count(total_items).dimmed()
    );
    println!("{}", "─".repeat(60).dimmed());
    println!();

    if total_items == 0 {
        println!("  {} Nothing found — your Mac is already clean!", "✨");
        println!();
        return;
    }

    for result in results {
        let marker = if result.total_bytes > 0 {
            "●".green()
        } else {
            "○".dimmed()
        };
        println!(
            "  {} {:<24} {:>10}  ({})",
            marker,
            format!("{}", result.category),
            format_size(result.total_bytes),
            format_count(result.item_count).dimmed()
        );

        if detailed {
            for item in &result.items {
                println!(
                    "      {} {:<36} {:>10}",
                    "↳".dimmed(),
                    item.name,
                    format_size(item.size_bytes)
                );
            }
        }
    }

    println!();
    println!("{}", "─".repeat(60).dimmed());
    println!(
        "  {} Run {} to reclaim the space",
        "💡",
        "cachesweep clean <category>".cyan()
    );
    println!();
}

/// Print analysis results as JSON
pub fn print_analysis_json(results: &[CategoryResult]) {
    match serde_json::to_string_pretty(results) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Error: {}", e),
    }
}

/// One line per category: name, bytes, item count
pub fn print_analysis_quiet(results: &[CategoryResult]) {
    for result in results {
        println!(
            "{:?}  {}  {}",
            result.category, result.total_bytes, result.item_count
        );
    }
}

/// Print a clean completion summary
pub fn print_clean_summary(category: CacheCategory, reclaimed: u64) {
    println!();
    println!(
        "  {} Cleaned {} — {} reclaimed",
        "✓".green(),
        format!("{}", category).bold(),
        format_size_colored(reclaimed)
    );
    println!();
}

/// Print the category → roots table
pub fn print_categories(entries: &[(CacheCategory, CategoryRoots)]) {
    println!();
    println!("  {} Cache Categories", "📋");
    println!("{}", "─".repeat(60).dimmed());
    for (category, roots) in entries {
        println!();
        println!("  {}", format!("{}", category).bold());
        for path in &roots.paths {
            println!("    {} {}", "•".dimmed(), format_path(path).dimmed());
        }
    }
    println!();
}

/// Warn that the standard user directories could not be read
pub fn print_permission_warning(hint: &str) {
    println!();
    println!("  {} {}", "⚠".yellow(), hint.yellow());
}
