//! Process-level plumbing

pub mod logging;

pub use logging::{ConsoleSink, init_logging};
