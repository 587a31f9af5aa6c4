//! `sjson` CLI — format, check, inspect, merge and convert sjson documents.
//!
//! ## Usage
//!
//! ```sh
//! # Reformat a document (stdin → stdout)
//! echo '{b:1,a:[x,y]}' | sjson fmt
//!
//! # Validate a save file; exits non-zero with the failing line on error
//! sjson check -i save.sjson
//!
//! # List top-level keys
//! sjson keys -i save.sjson
//!
//! # Layer an overlay document on top of a base document
//! sjson merge base.sjson overlay.sjson -o merged.sjson
//!
//! # Convert to and from strict JSON
//! sjson to-json -i save.sjson
//! sjson from-json -i export.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sjson_core::{json, parse_with, to_string, ParseOptions, Value};
use std::io::{self, Read};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sjson", version, about = "sjson document tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum container nesting depth accepted by the parser
    #[arg(long, global = true, default_value_t = ParseOptions::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and pretty-print a document
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check that a document parses, with nothing after it
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List the top-level keys of an object document
    Keys {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Merge OVERLAY into BASE, overlay keys winning
    Merge {
        /// Base document
        base: String,
        /// Overlay document
        overlay: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Convert sjson to strict JSON
    ToJson {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Convert strict JSON to sjson
    FromJson {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ParseOptions::with_max_depth(cli.max_depth);

    match cli.command {
        Commands::Fmt { input, output } => {
            let doc = read_document(input.as_deref(), &options)?;
            write_output(output.as_deref(), &to_string(&doc))?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            match parse_with(&text, &options.strict()) {
                Ok(doc) => {
                    debug!(entries = doc.size(), "document parsed");
                    println!("ok");
                }
                Err(e) => {
                    eprintln!("{}: {e}", input.as_deref().unwrap_or("<stdin>"));
                    process::exit(1);
                }
            }
        }
        Commands::Keys { input } => {
            let doc = read_document(input.as_deref(), &options)?;
            if !doc.is_object() {
                anyhow::bail!("document is not an object");
            }
            for key in doc.keys() {
                println!("{key}");
            }
        }
        Commands::Merge {
            base,
            overlay,
            output,
        } => {
            let mut merged = read_document(Some(base.as_str()), &options)?;
            let mut layer = read_document(Some(overlay.as_str()), &options)?;
            if !merged.destructive_merge(&mut layer) {
                anyhow::bail!("cannot merge: both documents must be objects (base may be empty)");
            }
            write_output(output.as_deref(), &to_string(&merged))?;
        }
        Commands::ToJson { input, output } => {
            let doc = read_document(input.as_deref(), &options)?;
            let out = json::to_json_string_pretty(&doc).context("Failed to render JSON")?;
            write_output(output.as_deref(), &out)?;
        }
        Commands::FromJson { input, output } => {
            let text = read_input(input.as_deref())?;
            let doc = json::from_json_str(&text).context("Failed to parse JSON input")?;
            write_output(output.as_deref(), &to_string(&doc))?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_document(path: Option<&str>, options: &ParseOptions) -> Result<Value> {
    let text = read_input(path)?;
    parse_with(&text, options)
        .with_context(|| format!("Failed to parse {}", path.unwrap_or("<stdin>")))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
