//! linkdesk - a terminal console for a URL shortener service
//!
//! Shortens URLs and browses the service's link directory with live
//! filtering and sorting.
//!
//! # Features
//! - **tui**: Interactive terminal console (default)
//!
//! # Architecture
//! - `directory`: Link records, filter/sort criteria, derivation, display projection
//! - `client`: `LinkApi` trait and its HTTP implementation
//! - `console`: Fetch, submission and copy state machines
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `system`: Logging setup

pub mod cli;
pub mod client;
pub mod config;
pub mod console;
pub mod directory;
pub mod errors;
pub mod interfaces;
pub mod system;
