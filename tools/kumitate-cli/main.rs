use clap::Parser;
use itertools::Itertools;
use kumitate::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Parse crafting and construction recipe scripts into a JSON document
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Script files or directories to scan for scripts
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Optional JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON document
    #[arg(short, long)]
    pretty: bool,

    /// Print every parse issue to stderr
    #[arg(long)]
    issues: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let total_start = Instant::now();

    // --- 1. Configuration ---
    let config = match &cli.config {
        Some(path) => KumitateConfig::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load config '{}': {}", path.display(), e))
        }),
        None => KumitateConfig::default(),
    };

    // --- 2. Source Discovery and Loading ---
    let load_start = Instant::now();
    let mut paths = Vec::new();
    for path in &cli.paths {
        if path.is_dir() {
            let found = discover_sources(path, &config.sources)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            paths.extend(found);
        } else {
            paths.push(path.clone());
        }
    }
    let sources = load_sources(&paths).unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let load_duration = load_start.elapsed();

    if sources.is_empty() {
        exit_with_error("No script files matched the given paths.");
    }

    // --- 3. Parsing ---
    let parse_start = Instant::now();
    let parser = ScriptParser::builder().with_config(config.parser).build();
    let report = parser.parse_sources(sources.iter().map(|s| s.text.as_str()));
    let parse_duration = parse_start.elapsed();

    if cli.issues {
        for issue in &report.issues {
            eprintln!("  -> {}", issue);
        }
    }

    let recipe_count = report.recipes.len();
    let construction_count = report.recipes.iter().filter(|r| r.construction).count();
    let issue_count = report.issues.len();

    // --- 4. Output ---
    let document = report.into_document();
    let json = if cli.pretty {
        document.to_json_pretty()
    } else {
        document.to_json()
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize document: {}", e)));

    match &cli.output {
        Some(path) => fs::write(path, json).unwrap_or_else(|e| {
            exit_with_error(&format!("Could not write '{}': {}", path.display(), e))
        }),
        None => println!("{}", json),
    }

    // --- 5. Summary ---
    let total_duration = total_start.elapsed();
    eprintln!("\n--- Parse Summary ---");
    eprintln!(
        "Sources:              {}",
        sources
            .iter()
            .map(|s| s.path.file_name().unwrap_or_default().to_string_lossy())
            .join(", ")
    );
    eprintln!("Recipes:              {}", recipe_count);
    eprintln!("  of which construction: {}", construction_count);
    eprintln!("Issues:               {}", issue_count);
    eprintln!("\n--- Performance Summary ---");
    eprintln!("Source Loading:       {:?}", load_duration);
    eprintln!("Parsing:              {:?}", parse_duration);
    eprintln!("-----------------------------");
    eprintln!("Total Execution:      {:?}", total_duration);
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
