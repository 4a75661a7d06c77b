//! `value` CLI — sort, compare, and inspect JSON documents under the canonical
//! value order.
//!
//! ## Usage
//!
//! ```sh
//! # Sort the elements of a JSON array (stdin → stdout)
//! echo '[true,"b",3,null,{"a":1},1.5]' | value sort
//!
//! # Sort from file to file, pretty-printed
//! value sort -i items.json -o sorted.json --pretty
//!
//! # Compare two documents; prints less, equal or greater
//! value compare left.json right.json
//!
//! # Print the debug rendering of a document
//! value show -i doc.json
//!
//! # Trace cache rebuilds while sorting
//! value -vv sort -i items.json
//! ```

use std::cmp::Ordering;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use value_core::{List, Value};

#[derive(Parser)]
#[command(
    name = "value",
    version,
    about = "Sort, compare and inspect JSON under the canonical value order"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort the elements of a JSON array by the canonical order
    Sort {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print the sorted JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Compare two JSON documents and print less, equal or greater
    Compare {
        /// Left-hand JSON file
        left: PathBuf,
        /// Right-hand JSON file
        right: PathBuf,
    },
    /// Print the debug rendering of a JSON document
    Show {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Sort {
            input,
            output,
            pretty,
        } => {
            let value = read_value(input.as_deref())?;
            let list = match value {
                Value::List(list) => list,
                other => anyhow::bail!("sort expects a JSON array, got {}", other.kind()),
            };

            let mut items = list.into_items();
            debug!(items = items.len(), "sorting");
            value_core::sort_values(&mut items);

            let sorted = value_core::to_json(&Value::List(List::with_items(items)))
                .context("Failed to convert sorted values to JSON")?;
            let mut text = if pretty {
                serde_json::to_string_pretty(&sorted)?
            } else {
                serde_json::to_string(&sorted)?
            };
            text.push('\n');
            emit(output.as_deref(), &text)?;
        }
        Commands::Compare { left, right } => {
            let lhs = read_value(Some(left.as_path()))?;
            let rhs = read_value(Some(right.as_path()))?;
            let verdict = match lhs.compare(&rhs) {
                Ordering::Less => "less",
                Ordering::Equal => "equal",
                Ordering::Greater => "greater",
            };
            println!("{verdict}");
        }
        Commands::Show { input } => {
            let value = read_value(input.as_deref())?;
            println!("{value}");
        }
    }

    Ok(())
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parse one JSON document from `path`, or from stdin when no path is given.
fn read_value(path: Option<&Path>) -> Result<Value> {
    let (text, source) = match path {
        Some(path) => (
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?,
            path.display().to_string(),
        ),
        None => (
            io::read_to_string(io::stdin().lock()).context("Failed to read from stdin")?,
            "<stdin>".to_string(),
        ),
    };
    debug!(%source, bytes = text.len(), "parsing document");
    value_core::from_json_str(&text).with_context(|| format!("Failed to parse JSON from {source}"))
}

/// Write `text` to `path`, or to stdout when no path is given.
fn emit(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("Failed to write file: {}", path.display())),
        None => io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .context("Failed to write to stdout"),
    }
}
