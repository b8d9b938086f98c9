use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "seqren",
    about = "Batch rename files into a numbered sequence, skipping numbers already in use"
)]
pub struct Args {
    /// Naming rule ending with the starting number (e.g. IMG_1020)
    pub rule: String,

    /// Target folder
    pub path: PathBuf,

    /// Target file extension (e.g. jpg)
    pub ext: String,

    /// Show the planned renames without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the plan as JSON (dry run only)
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
