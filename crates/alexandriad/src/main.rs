//! Command line front end for the alexandria mapping layer.
//!
//! The tool works entirely offline. It validates responses saved from the OpenAlex API and prints
//! the query fragments a transport would send:
//!
//! ```bash
//! # Validate a saved /works response
//! alexandria validate work response.json
//!
//! # Validate a response that was requested without some fields
//! alexandria validate work response.json --exclude concepts,abstract_inverted_index
//!
//! # Print the validated record as JSON
//! alexandria validate author author.json --json
//!
//! # Print a select= fragment
//! alexandria select works --exclude locations --exclude concepts
//!
//! # Print the query string described by a profile
//! alexandria query config/profiles/recent_open_access.toml
//! ```
//!
//! Logging goes to stderr and is controlled with `-v` (repeatable) or `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use alexandria::{
  entity::{Author, EntityKind, Work},
  error::MapperError,
  mapper::Record,
  prelude::*,
  profile::QueryProfile,
  registry::{selectable_fields, AuthorField, Exclusions, WorkField},
};
use clap::{builder::ArgAction, Args, Parser, Subcommand, ValueEnum};
use console::style;
use serde_json::Value;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;

use crate::{commands::*, error::*};

/// Prefix for information messages
static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
static ERROR_PREFIX: &str = "✗ ";
/// Branch character for tree structure
static TREE_BRANCH: &str = "├";
/// Leaf character for tree structure (end of branch)
static TREE_LEAF: &str = "└";

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Offline validation and query building for the OpenAlex API")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(short, long, action = ArgAction::Count, global = true, help = "Increase logging verbosity")]
  verbose: u8,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Entry point for the alexandria CLI application
///
/// Errors are printed to stderr and turn into a non-zero exit status.
fn main() {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let result = match cli.command {
    Commands::Validate(options) => validate(options),
    Commands::Select(options) => select(options),
    Commands::Query(options) => query(options),
  };

  if let Err(e) = result {
    eprintln!("{}{}", style(ERROR_PREFIX).red(), style(&e).red());
    std::process::exit(1);
  }
}
