//! Console controllers
//!
//! State machines that sit between the API client and the display: loading
//! the directory, submitting a URL, and the copy affordance. Transitions are
//! plain functions of a `Result`, independent of how the I/O was scheduled.

pub mod clipboard;
pub mod copy;
pub mod fetch;
pub mod submission;

#[cfg(feature = "tui")]
pub use clipboard::SystemClipboard;
pub use clipboard::{Clipboard, MemoryClipboard};
pub use copy::{CopyAffordance, CopyLabel};
pub use fetch::{FetchController, FetchOutcome, FetchStatus};
pub use submission::{SubmissionState, SubmissionWorkflow};
