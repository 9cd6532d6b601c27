//! Fetch controller: idle → loading → {success, error}

use tracing::{debug, warn};

use crate::client::LinkApi;
use crate::directory::{DirectoryStore, LinkRecord};
use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

/// What the caller should do after a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Collection replaced; re-derive and render
    Replaced,
    /// Collection untouched; only the error line changed
    Failed,
}

#[derive(Debug, Default)]
pub struct FetchController {
    status: FetchStatus,
    in_flight: usize,
}

impl FetchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Error line to display, if the last completed load failed
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Start a load: show the loading indicator and hide any previous error.
    pub fn begin(&mut self) {
        self.in_flight += 1;
        self.status = FetchStatus::Loading;
    }

    /// Apply one finished request. Completions are applied in arrival order,
    /// so the last one to arrive decides the final state.
    pub fn complete(
        &mut self,
        result: Result<Vec<LinkRecord>>,
        store: &mut DirectoryStore,
    ) -> FetchOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(records) => {
                debug!("Directory loaded: {} links", records.len());
                store.replace_collection(records);
                self.status = FetchStatus::Success;
                FetchOutcome::Replaced
            }
            Err(e) => {
                warn!("Directory load failed: {}", e);
                self.status = FetchStatus::Error(e.message().to_string());
                FetchOutcome::Failed
            }
        }
    }

    /// One full load against `api`. No retry.
    pub async fn load_all(
        &mut self,
        api: &dyn LinkApi,
        store: &mut DirectoryStore,
    ) -> FetchOutcome {
        self.begin();
        let result = api.list_links().await;
        self.complete(result, store)
    }
}
