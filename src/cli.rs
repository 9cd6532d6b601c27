//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for linkdesk using clap's derive macros.

use clap::{Parser, Subcommand, ValueEnum};

use crate::directory::SortField;

/// linkdesk - console for a short-link service
#[derive(Parser, Debug)]
#[command(name = "linkdesk")]
#[command(version)]
#[command(about = "Shorten URLs and browse the link directory of a short-link API", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override the API base URL (e.g. http://127.0.0.1:8080)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive console (default)
    #[cfg(feature = "tui")]
    Tui,

    /// Fetch the directory once and print it
    List {
        /// Keep links whose short URL contains this text (case-insensitive)
        #[arg(long)]
        short: Option<String>,

        /// Keep links whose destination contains this text (case-insensitive)
        #[arg(long)]
        dest: Option<String>,

        /// Sort column
        #[arg(long, value_enum, default_value_t = SortArg::Short)]
        sort: SortArg,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Create a short link for a URL
    Shorten {
        /// Destination URL
        url: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Sort column as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Short,
    Destination,
    Clicks,
}

impl From<SortArg> for SortField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Short => SortField::ShortUrl,
            SortArg::Destination => SortField::DestinationUrl,
            SortArg::Clicks => SortField::Clicks,
        }
    }
}
