//! Command-line interface for tinker notes
//! This binary parses a notes file and writes it back out in one of the registered formats.
//!
//! Usage:
//!   tinker `<path>` [--flat] [--flatten] [--format `<format>`] [--config `<file>`]
//!   tinker --list-formats
//!
//! Use `-` as the path to read from stdin. Set `RUST_LOG=debug` to see parse summaries.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use tinker_notes::notes::config::{Loader, TinkerConfig};
use tinker_notes::notes::formats::FormatRegistry;
use tinker_notes::notes::{Document, ParseMode};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let matches = Command::new("tinker")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse and re-serialize tinker notes files")
        .arg(
            Arg::new("path")
                .help("Path to the notes file ('-' for stdin)")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("flat")
                .long("flat")
                .help("Parse as a flat document (context headers are errors)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("flatten")
                .long("flatten")
                .help("Turn contexts into '.' notes before writing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'outline', 'json', 'treeviz')"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        process::exit(1);
    });
    let registry = FormatRegistry::from_config(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("Error: a path is required");
        process::exit(1);
    };
    if let Err(message) = handle_convert_command(path, &config, &registry) {
        eprintln!("Error: {}", message);
        process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<TinkerConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("flat") {
        loader = loader.set_override("parse.mode", "flat")?;
    }
    if matches.get_flag("flatten") {
        loader = loader.set_override("output.flatten", true)?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    loader.build()
}

fn read_input(path: &str, mode: ParseMode) -> Result<Document, String> {
    let result = if path == "-" {
        Document::read(io::stdin().lock(), mode)
    } else {
        let file = File::open(path).map_err(|e| format!("cannot open {}: {}", path, e))?;
        Document::read(BufReader::new(file), mode)
    };
    result.map_err(|e| format!("{}: {}", path, e))
}

/// Handle the default command: parse, optionally flatten, serialize
fn handle_convert_command(
    path: &str,
    config: &TinkerConfig,
    registry: &FormatRegistry,
) -> Result<(), String> {
    let format = config.output.format.as_str();
    // Fail before reading the input if the format is unknown
    if !registry.has(format) {
        return Err(format!(
            "unknown format '{}' (available: {})",
            format,
            registry.list_formats().join(", ")
        ));
    }

    let mut doc = read_input(path, config.parse.mode)?;
    if config.output.flatten {
        doc = doc.into_flat();
    }

    let output = registry
        .serialize(&doc, format)
        .map_err(|e| e.to_string())?;
    print!("{}", output);
    Ok(())
}

fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|formatter| formatter.description())
            .unwrap_or("");
        println!("  {}", name);
        println!("    {}", description);
    }
}
