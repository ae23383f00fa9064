//! Relayout CLI
//!
//! Applies a TOML relocation plan to a layout markup file: locates a
//! marker-delimited block, moves it to the insertion anchor, swaps its
//! wrapper, and relabels sibling lines.

mod cli;
mod error;
mod io;

use clap::Parser;
use colored::Colorize;
use similar::{ChangeTag, TextDiff};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use relayout_engine::{
    Document, RelocationPlan, RelocationReport, Relocator, StepOutcome, StepStatus,
};

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let plan_text = io::read_text(&cli.plan)?;
    let plan = RelocationPlan::from_toml_str(&plan_text)?;
    let relocator = Relocator::new(plan)?;

    let source = io::read_text(&cli.document)?;
    let mut doc = Document::parse(&source);

    // Location failures surface here, before the document is touched.
    let report = relocator.run(&mut doc)?;
    let output = doc.render();

    if cli.dry_run {
        print_diff(&source, &output);
    } else {
        io::write_atomic(&cli.document, &output)?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, cli.dry_run);
    }

    Ok(())
}

fn print_report(report: &RelocationReport, dry_run: bool) {
    if dry_run {
        println!(
            "{} would move block from line {} to line {} (dry run, nothing written)",
            "OK".green().bold(),
            report.moved_from,
            report.moved_to
        );
    } else {
        println!(
            "{} moved block from line {} to line {}",
            "OK".green().bold(),
            report.moved_from,
            report.moved_to
        );
    }
    println!(
        "   removed {} lines, inserted {}, net change {:+}",
        report.lines_removed,
        report.lines_inserted,
        report.net_line_change()
    );
    print_outcome(&report.wrapper);
    for outcome in &report.relabel {
        print_outcome(outcome);
    }
}

fn print_outcome(outcome: &StepOutcome) {
    let status = match outcome.status {
        StepStatus::Applied => "applied".green(),
        StepStatus::Skipped => "skipped".yellow(),
        StepStatus::Partial => "PARTIAL".red().bold(),
    };
    match &outcome.note {
        Some(note) => println!("   {} {} ({})", status, outcome.step.cyan(), note.dimmed()),
        None => println!("   {} {}", status, outcome.step.cyan()),
    }
}

/// Print only the changed lines; the surrounding document stays quiet.
fn print_diff(before: &str, after: &str) {
    let diff = TextDiff::from_lines(before, after);
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => print!("{}", format!("-{}", change.value()).red()),
            ChangeTag::Insert => print!("{}", format!("+{}", change.value()).green()),
            ChangeTag::Equal => {}
        }
    }
}
