//! User interfaces: one-shot CLI commands and the interactive console

pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;
