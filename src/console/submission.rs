//! Submission workflow: idle → submitting → {success, error}
//!
//! Validation happens locally; only a non-blank URL reaches the API.

use tracing::{debug, info, warn};

use crate::client::LinkApi;
use crate::errors::{LinkdeskError, Result};

/// Shown when the input is empty or whitespace only
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a URL";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success {
        short_url: String,
    },
    Error(String),
}

#[derive(Debug, Default)]
pub struct SubmissionWorkflow {
    input: String,
    state: SubmissionState,
    in_flight: usize,
}

impl SubmissionWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight > 0
    }

    /// The short URL the copy affordance acts on
    pub fn short_url(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Success { short_url } => Some(short_url),
            _ => None,
        }
    }

    /// Text for the result area
    pub fn result_text(&self) -> Option<String> {
        match &self.state {
            SubmissionState::Idle | SubmissionState::Submitting => None,
            SubmissionState::Success { short_url } => Some(format!("Short URL: {}", short_url)),
            SubmissionState::Error(message) => Some(message.clone()),
        }
    }

    /// Validate the input and move to `Submitting`.
    ///
    /// Returns the trimmed URL to send. Blank input moves straight to `Error`
    /// and no request must be issued.
    pub fn begin(&mut self) -> Result<String> {
        let url = self.input.trim();
        if url.is_empty() {
            debug!("Rejected blank submission");
            self.state = SubmissionState::Error(EMPTY_INPUT_MESSAGE.to_string());
            return Err(LinkdeskError::validation(EMPTY_INPUT_MESSAGE));
        }

        let url = url.to_string();
        self.in_flight += 1;
        self.state = SubmissionState::Submitting;
        Ok(url)
    }

    /// Apply a finished request. On success the input is cleared; on failure
    /// it is kept so the user can retry.
    pub fn complete(&mut self, result: Result<String>) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(short_url) => {
                info!("Short link created: {}", short_url);
                self.input.clear();
                self.state = SubmissionState::Success { short_url };
            }
            Err(e) => {
                warn!("Shorten failed: {}", e);
                self.state = SubmissionState::Error(e.message().to_string());
            }
        }
    }

    /// Validate, send, and apply the result in one go.
    pub async fn submit(&mut self, api: &dyn LinkApi) -> Result<()> {
        let url = self.begin()?;
        let result = api.shorten(&url).await;
        let outcome = match &result {
            Ok(_) => Ok(()),
            Err(e) => Err(e.clone()),
        };
        self.complete(result);
        outcome
    }
}
