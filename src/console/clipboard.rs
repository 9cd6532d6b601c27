//! Clipboard seam
//!
//! Write-only: the console never reads the clipboard back.

use crate::errors::{LinkdeskError, Result};

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard through arboard. The handle is opened per write, so a
/// missing display only fails that one copy.
#[cfg(feature = "tui")]
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(feature = "tui")]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| LinkdeskError::clipboard_failure(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| LinkdeskError::clipboard_failure(e.to_string()))
    }
}

/// In-process clipboard, used when no system clipboard is wanted
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    fail: bool,
}

impl MemoryClipboard {
    /// A clipboard whose every write fails
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(LinkdeskError::clipboard_failure("clipboard unavailable"));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
