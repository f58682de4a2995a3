use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use cachesweep::cli::args::{Cli, Commands, OutputFormat};
use cachesweep::cli::output;
use cachesweep::common::context::ScanContext;
use cachesweep::common::format;
use cachesweep::common::permissions;
use cachesweep::engine::{CacheEngine, StateHandle};
use cachesweep::scanner::catalog;
use cachesweep::scanner::category::CacheCategory;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("cachesweep=debug")
            .init();
    }

    let ctx = ScanContext::from_env();
    let engine = CacheEngine::new(ctx.clone());

    if cli.format == OutputFormat::Human && !cli.quiet && !permissions::has_minimum_access(&ctx) {
        output::print_permission_warning(&permissions::permission_hint());
    }

    match cli.command {
        Commands::Analyze { category, detailed } => {
            cmd_analyze(&cli, &engine, category.into(), detailed)
        }

        Commands::Clean { category, yes, dry_run } => {
            cmd_clean(&cli, &engine, category.into(), yes, dry_run)
        }

        Commands::Categories => cmd_categories(&ctx),

        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let shell = match shell {
                cachesweep::cli::args::CompletionShell::Bash => clap_complete::Shell::Bash,
                cachesweep::cli::args::CompletionShell::Zsh => clap_complete::Shell::Zsh,
                cachesweep::cli::args::CompletionShell::Fish => clap_complete::Shell::Fish,
            };
            clap_complete::generate(shell, &mut cmd, "cachesweep", &mut std::io::stdout());
            Ok(())
        }
    }
}

// ─── Analyze ──────────────────────────────────────────────────────────────────

fn cmd_analyze(
    cli: &Cli,
    engine: &CacheEngine,
    category: CacheCategory,
    detailed: bool,
) -> Result<()> {
    let show_progress = !cli.quiet && cli.format == OutputFormat::Human;

    let rx = engine.analyze(category)?;
    let results = wait_with_progress(rx, &engine.state(), show_progress)?;

    match cli.format {
        OutputFormat::Human => output::print_analysis_results(&results, detailed),
        OutputFormat::Json => output::print_analysis_json(&results),
        OutputFormat::Quiet => output::print_analysis_quiet(&results),
    }

    Ok(())
}

// ─── Clean ────────────────────────────────────────────────────────────────────

fn cmd_clean(
    cli: &Cli,
    engine: &CacheEngine,
    category: CacheCategory,
    yes: bool,
    dry_run: bool,
) -> Result<()> {
    let show_progress = !cli.quiet && cli.format == OutputFormat::Human;

    // Show the user what is on the table before deleting (and for dry runs,
    // this is all that happens). The clean itself re-scans regardless.
    if dry_run || !yes {
        let rx = engine.analyze(category)?;
        let results = wait_with_progress(rx, &engine.state(), show_progress)?;

        if cli.format == OutputFormat::Human {
            output::print_analysis_results(&results, false);
        }

        let total_bytes: u64 = results.iter().map(|r| r.total_bytes).sum();
        let total_items: usize = results.iter().map(|r| r.item_count).sum();

        if dry_run {
            match cli.format {
                OutputFormat::Human => println!(
                    "  {} Dry run — would clean {} ({}). No files modified.",
                    "ℹ️",
                    format::format_count(total_items),
                    format::format_size(total_bytes)
                ),
                OutputFormat::Json => {
                    let json = serde_json::json!({
                        "category": category,
                        "dry_run": true,
                        "item_count": total_items,
                        "bytes_reclaimable": total_bytes,
                    });
                    println!("{}", serde_json::to_string_pretty(&json)?);
                }
                OutputFormat::Quiet => println!("{}", total_bytes),
            }
            return Ok(());
        }

        if total_items == 0 {
            return Ok(());
        }

        print!(
            "\n  {} Delete {} ({})? This cannot be undone. [y/N] ",
            "❓",
            format::format_count(total_items),
            format::format_size(total_bytes)
        );
        use std::io::Write;
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("  {} Cancelled", "✗".red());
            return Ok(());
        }
    }

    let rx = engine.clean(category)?;
    let reclaimed = wait_with_progress(rx, &engine.state(), show_progress)?;

    // Earlier analysis results no longer match the disk; drop them so the
    // next analysis starts from a clean slate.
    engine.state().clear_results();

    match cli.format {
        OutputFormat::Human => output::print_clean_summary(category, reclaimed),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "category": category,
                "bytes_reclaimed": reclaimed,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Quiet => println!("{}", reclaimed),
    }

    Ok(())
}

// ─── Categories ───────────────────────────────────────────────────────────────

fn cmd_categories(ctx: &ScanContext) -> Result<()> {
    let entries: Vec<_> = CacheCategory::CONCRETE
        .iter()
        .map(|&c| (c, catalog::category_roots(ctx, c)))
        .collect();
    output::print_categories(&entries);
    Ok(())
}

// ─── Progress rendering ───────────────────────────────────────────────────────

/// Block until the worker's terminal message arrives, feeding a progress bar
/// from published state snapshots along the way.
fn wait_with_progress<T>(rx: Receiver<T>, state: &StateHandle, show_progress: bool) -> Result<T> {
    let pb = if show_progress {
        let pb = ProgressBar::new(100);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {msg}")
                .unwrap()
                .progress_chars("━━░"),
        );
        Some(pb)
    } else {
        None
    };

    loop {
        match rx.recv_timeout(Duration::from_millis(80)) {
            Ok(value) => {
                if let Some(ref pb) = pb {
                    pb.finish_and_clear();
                }
                return Ok(value);
            }
            Err(RecvTimeoutError::Timeout) => {
                if let Some(ref pb) = pb {
                    let snapshot = state.snapshot();
                    pb.set_position((snapshot.progress * 100.0).round() as u64);
                    pb.set_message(format::truncate(&snapshot.current_task, 40));
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                anyhow::bail!("worker terminated before reporting a result")
            }
        }
    }
}
