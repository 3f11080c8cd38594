//! CLI Tooling
//!
//! Command-line front end over `TreeIndex`: loads a dataset, builds one index
//! per invocation and prints query results.

use crate::config::{ConfigLoader, OutputFormat, TreeStoreConfig};
use crate::dataset::{load_records, sample_records};
use crate::error::ApiError;
use crate::format::{format_item, format_records};
use crate::logging::{LogFormat, LogOutput, LoggingConfig};
use crate::tree::TreeIndex;
use crate::types::Identifier;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Treestore CLI - query a tree built from flat parent-referencing records
#[derive(Parser, Debug)]
#[command(name = "treestore")]
#[command(about = "Query a tree built from flat parent-referencing records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dataset file (.json, .yaml or .yml); defaults to the configured dataset, then the sample
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Log output
    #[arg(long, value_enum)]
    pub log_output: Option<LogOutput>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply the logging flags on top of `base`.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.format = format;
        }
        if let Some(output) = self.log_output {
            config.output = output;
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print every record in input order
    All,
    /// Look up one record by id
    Item {
        /// Record id (integer when it parses as one, otherwise a string)
        #[arg(value_parser = parse_identifier)]
        id: Identifier,
    },
    /// Direct children of a record
    Children {
        #[arg(value_parser = parse_identifier)]
        id: Identifier,
    },
    /// All descendants of a record, breadth-first
    AllChildren {
        #[arg(value_parser = parse_identifier)]
        id: Identifier,
    },
    /// Ancestors of a record, nearest first
    AllParents {
        #[arg(value_parser = parse_identifier)]
        id: Identifier,
    },
    /// Run the sample walkthrough against the built-in dataset
    Demo,
}

/// Parse a CLI id through `FromStr`, so `7` becomes `Int(7)` rather than `Str("7")`.
fn parse_identifier(value: &str) -> Result<Identifier, String> {
    value.parse().map_err(|e: Infallible| match e {})
}

/// Load configuration from an explicit file or the default sources.
pub fn load_config(config_path: Option<&Path>) -> Result<TreeStoreConfig, ApiError> {
    match config_path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// CLI execution context: one index, one output format
pub struct CliContext {
    index: TreeIndex,
    format: OutputFormat,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(
        input: Option<PathBuf>,
        config_path: Option<PathBuf>,
        format: Option<OutputFormat>,
    ) -> Result<Self, ApiError> {
        let config = load_config(config_path.as_deref())?;
        Self::with_config(&config, input, format)
    }

    /// Create a context from an already loaded config.
    ///
    /// `input` wins over the configured dataset; with neither, the sample is used.
    pub fn with_config(
        config: &TreeStoreConfig,
        input: Option<PathBuf>,
        format: Option<OutputFormat>,
    ) -> Result<Self, ApiError> {
        let records = match input.or_else(|| config.dataset.clone()) {
            Some(path) => load_records(&path)?,
            None => {
                debug!("No dataset given, using sample records");
                sample_records()
            }
        };

        let index = TreeIndex::new(&records);
        info!(record_count = index.len(), "Tree index ready");

        Ok(Self {
            index,
            format: format.unwrap_or(config.output.format),
        })
    }

    /// Get a reference to the underlying index
    pub fn index(&self) -> &TreeIndex {
        &self.index
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        debug!(?command, "Executing command");
        let index = &self.index;
        match command {
            Commands::All => {
                let records: Vec<_> = index.get_all().iter().collect();
                format_records(&records, self.format)
            }
            Commands::Item { id } => format_item(index.get_item(id), self.format),
            Commands::Children { id } => format_records(&index.get_children(id)?, self.format),
            Commands::AllChildren { id } => {
                format_records(&index.get_all_children(id)?, self.format)
            }
            Commands::AllParents { id } => {
                format_records(&index.get_all_parents(id)?, self.format)
            }
            Commands::Demo => run_demo(self.format),
        }
    }
}

/// The sample walkthrough: every query type against the built-in dataset.
fn run_demo(format: OutputFormat) -> Result<String, ApiError> {
    let index = TreeIndex::new(&sample_records());
    let all: Vec<_> = index.get_all().iter().collect();

    let lines = vec![
        format!("all: {}", format_records(&all, format)?),
        format!("item 7: {}", format_item(index.get_item(&7.into()), format)?),
        format!(
            "children 4: {}",
            format_records(&index.get_children(&4.into())?, format)?
        ),
        format!(
            "children 5: {}",
            format_records(&index.get_children(&5.into())?, format)?
        ),
        format!(
            "children 2: {}",
            format_records(&index.get_children(&2.into())?, format)?
        ),
        format!(
            "all-children 2: {}",
            format_records(&index.get_all_children(&2.into())?, format)?
        ),
        format!(
            "all-parents 7: {}",
            format_records(&index.get_all_parents(&7.into())?, format)?
        ),
    ];

    Ok(lines.join("\n"))
}
