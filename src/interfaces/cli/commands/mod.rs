//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod config_gen;
mod list;
mod shorten;

pub use config_gen::generate_config;
pub use list::{format_table, list_links};
pub use shorten::shorten_url;
