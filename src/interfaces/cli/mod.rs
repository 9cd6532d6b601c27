//! CLI interface module
//!
//! One-shot commands over the same engine the console uses: a single fetch or
//! a single submission, then exit.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::client::LinkApi;
use crate::errors::LinkdeskError;
use commands::{generate_config, list_links, shorten_url};

#[derive(Debug)]
pub enum CliError {
    /// The API call failed; carries the console's error taxonomy
    Api(LinkdeskError),
    ConfigError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::Api(e) => e.format_simple(),
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::Api(e) => e.format_colored(),
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LinkdeskError> for CliError {
    fn from(err: LinkdeskError) -> Self {
        match err {
            LinkdeskError::Config(msg) => CliError::ConfigError(msg),
            other => CliError::Api(other),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, api: &dyn LinkApi) -> Result<(), CliError> {
    match cmd {
        Commands::List {
            short,
            dest,
            sort,
            desc,
        } => list_links(api, short, dest, sort.into(), desc).await,

        Commands::Shorten { url } => shorten_url(api, url).await,

        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => generate_config(output_path, force),

        #[cfg(feature = "tui")]
        Commands::Tui => unreachable!("TUI handled in main"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_split_out() {
        let err: CliError = LinkdeskError::config("bad base url").into();
        assert!(matches!(err, CliError::ConfigError(_)));
    }

    #[test]
    fn test_api_error_keeps_message() {
        let err: CliError = LinkdeskError::server_error("URL is required").into();
        assert!(err.to_string().contains("URL is required"));
    }
}
