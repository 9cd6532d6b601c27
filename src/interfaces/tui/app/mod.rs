//! TUI application state
//!
//! - state: the `App` struct and screen enums
//! - navigation: row selection and scrolling in the directory table
//! - operations: API requests and their completions, filters, sort, copy

mod navigation;
mod operations;
mod state;

pub use operations::ApiEvent;
pub use state::{App, CurrentScreen, FilterField};
