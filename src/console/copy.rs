//! Copy-to-clipboard affordance
//!
//! Purely cosmetic state: a label that flips to "Copied!" or "Error" and
//! reverts after a fixed delay. Time is passed in so the revert is testable.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::clipboard::Clipboard;
use crate::errors::Result;

pub const COPY_LABEL: &str = "Copy URL";
pub const COPIED_LABEL: &str = "Copied!";
pub const COPY_ERROR_LABEL: &str = "Error";

/// Default revert delay
pub const DEFAULT_REVERT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyLabel {
    #[default]
    Ready,
    Copied,
    Failed,
}

impl CopyLabel {
    pub fn text(self) -> &'static str {
        match self {
            Self::Ready => COPY_LABEL,
            Self::Copied => COPIED_LABEL,
            Self::Failed => COPY_ERROR_LABEL,
        }
    }
}

#[derive(Debug)]
pub struct CopyAffordance {
    label: CopyLabel,
    revert_at: Option<Instant>,
    delay: Duration,
}

impl Default for CopyAffordance {
    fn default() -> Self {
        Self::new(DEFAULT_REVERT_DELAY)
    }
}

impl CopyAffordance {
    pub fn new(delay: Duration) -> Self {
        Self {
            label: CopyLabel::Ready,
            revert_at: None,
            delay,
        }
    }

    pub fn label(&self) -> CopyLabel {
        self.label
    }

    /// Write `text` to the clipboard and show the outcome. Each call restarts
    /// the revert delay, so only the latest pending revert ever fires.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, text: &str, now: Instant) -> Result<()> {
        let result = clipboard.write_text(text);
        match &result {
            Ok(()) => {
                debug!("Copied to clipboard: {}", text);
                self.label = CopyLabel::Copied;
            }
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                self.label = CopyLabel::Failed;
            }
        }
        self.revert_at = Some(now + self.delay);
        result
    }

    /// Revert the label once its deadline has passed. Returns true on the
    /// tick that performed the revert.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.revert_at {
            Some(deadline) if now >= deadline => {
                self.label = CopyLabel::Ready;
                self.revert_at = None;
                true
            }
            _ => false,
        }
    }
}
