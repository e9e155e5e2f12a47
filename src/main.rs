//! Apple Reminders → Asana CSV Converter - Main Entry Point
//!
//! This is the command-line front end. The actual implementation is in the
//! `reminders_asana` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use reminders_asana::config::{self, CliOverrides, ConfigFile, Defaults};
use reminders_asana::formatting::assignee_display_name;
use reminders_asana::{Converter, Language, logging};
use std::path::PathBuf;
use tracing::{debug, error};

/// Converts Apple Reminders JSON exports to Asana CSV import files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file to convert (bulk export from the Backup Shortcut, or a single reminder)
    #[arg(short, long)]
    file: PathBuf,

    /// Output CSV file [default: asana_import.csv]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Email address for the assignee (e.g. john.doe@company.com)
    #[arg(long)]
    assignee: Option<String>,

    /// Include completed tasks (default: only open tasks)
    #[arg(long, overrides_with = "no_include_completed")]
    include_completed: bool,

    /// Skip completed tasks even if the config file includes them
    #[arg(long, overrides_with = "include_completed")]
    no_include_completed: bool,

    /// Language for Asana field names and values (en, de)
    #[arg(long)]
    asana_language: Option<Language>,

    /// Test run without writing files
    #[arg(long)]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// TOML file with default values for the options above
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    logging::init_logging(args.verbose);

    println!("Apple Reminders → Asana CSV Converter");
    println!("{}", "=".repeat(40));

    if let Err(e) = run(args) {
        error!("{:#}", e);
        println!("\n✗ Conversion failed!");
        std::process::exit(1);
    }
}

/// Last of `--include-completed` / `--no-include-completed` given, if any
fn include_completed_flag(args: &Args) -> Option<bool> {
    if args.include_completed {
        Some(true)
    } else if args.no_include_completed {
        Some(false)
    } else {
        None
    }
}

fn run(args: Args) -> Result<()> {
    let defaults = match &args.config {
        Some(path) => ConfigFile::load(path)?.defaults,
        None => Defaults::default(),
    };

    let include_completed = include_completed_flag(&args);
    let (options, output) = config::resolve(
        &defaults,
        CliOverrides {
            assignee: args.assignee,
            language: args.asana_language,
            include_completed,
            dry_run: args.dry_run,
            output: args.output,
        },
    );

    if options.dry_run {
        println!("[DRY RUN MODE - No files will be written]");
        println!();
    }
    if let Some(ref email) = options.assignee {
        debug!("Assigning tasks to {} <{}>", assignee_display_name(email), email);
    }

    let converter = Converter::new(options);
    let report = converter.convert_file(&args.file, &output)?;

    println!("{}", report);
    println!("\n✓ Conversion successful!");
    if report.output.is_some() && !report.dry_run {
        let priority_field = converter.options().language.priority_header();
        println!("\n💡 Import the CSV into Asana:");
        println!("   1. Create/use an Import project in Asana");
        println!("   2. Add the {} custom field to the project", priority_field);
        println!("   3. Import CSV - subtasks will nest automatically");
    }
    Ok(())
}
