mod cli;

use clap::Parser;
use cli::Args;
use eyre::Result;
use smart_sequence_rename::{
    Classification, Extension, RenameOutcome, RenamePlan, build_plan, classify_directory,
    execute_plan_with, parse_rule,
};

fn init_tracing(verbose: u8) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_outcome(outcome: &RenameOutcome) {
    let entry = outcome.entry();
    match outcome {
        RenameOutcome::Renamed(_) => {
            println!("Renamed: {} -> {}", entry.source.name, entry.target_name)
        }
        RenameOutcome::Skipped(_) => println!(
            "Warning: Target '{}' already exists. Skipping '{}'.",
            entry.target_name, entry.source.name
        ),
        RenameOutcome::Failed { error, .. } => {
            println!("Error renaming {}: {error}", entry.source.name)
        }
    }
}

fn print_dry_run(plan: &RenamePlan, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
        return Ok(());
    }
    for entry in plan.iter() {
        println!("Would rename: {} -> {}", entry.source.name, entry.target_name);
    }
    println!("Dry run. {} files would be renamed.", plan.len());
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_tracing(args.verbose);

    let rule = parse_rule(&args.rule)?;
    let ext = Extension::parse(&args.ext)?;
    let classification = classify_directory(&args.path, &rule, &ext)?;

    if classification.is_empty() {
        if args.json {
            println!("[]");
        } else {
            println!(
                "No files with extension '{}' found in '{}'.",
                ext.as_str(),
                args.path.display()
            );
        }
        return Ok(());
    }

    let Classification {
        conforming,
        to_rename,
        mut reserved,
    } = classification;

    if !args.json {
        println!("Found {} files to rename.", to_rename.len());
        println!(
            "Found {} files already matching the pattern '{}{}{}'.",
            conforming.len(),
            rule.prefix,
            "X".repeat(rule.pad_width),
            ext.as_str()
        );
    }

    let plan = build_plan(to_rename, &rule, &ext, &mut reserved)?;

    if args.dry_run {
        return print_dry_run(&plan, args.json);
    }

    let report = execute_plan_with(plan, &mut reserved, print_outcome);
    println!("Done. Successfully renamed {} files.", report.renamed());
    tracing::info!(
        renamed = report.renamed(),
        skipped = report.skipped(),
        failed = report.failed(),
        "finished"
    );

    Ok(())
}
