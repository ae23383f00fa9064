//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Relayout - Move marker-delimited blocks inside layout markup files
#[derive(Parser, Debug)]
#[command(name = "relayout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The document to transform, rewritten in place
    pub document: PathBuf,

    /// Relocation plan (TOML)
    #[arg(short, long)]
    pub plan: PathBuf,

    /// Show the changes as a diff instead of writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Output the relocation report as JSON for scripting
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
