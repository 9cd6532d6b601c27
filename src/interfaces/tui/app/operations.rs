//! API requests, completions, and the directory controls
//!
//! Requests run on tokio tasks and report back through the app's channel.
//! The UI loop drains the channel and calls [`App::apply`] for each event,
//! in arrival order.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use super::state::{App, FilterField};
use crate::console::FetchOutcome;
use crate::directory::{FilterUpdate, LinkRecord, SortField};
use crate::errors::Result;

/// A finished API request
#[derive(Debug)]
pub enum ApiEvent {
    Links(Result<Vec<LinkRecord>>),
    Shortened(Result<String>),
}

impl App {
    /// Start a directory load. Repeated presses issue independent requests.
    pub fn request_refresh(&mut self) {
        self.fetch.begin();
        debug!("Directory load started ({} in flight)", self.fetch.in_flight());

        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.list_links().await;
            if events.send(ApiEvent::Links(result)).is_err() {
                debug!("Console closed before the directory load finished");
            }
        });
    }

    /// Validate the URL input and send it. Blank input never reaches the API.
    pub fn request_submit(&mut self) {
        let url = match self.submission.begin() {
            Ok(url) => url,
            Err(e) => {
                self.set_error(e.message().to_string());
                return;
            }
        };
        info!("Submitting URL: {}", url);

        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.shorten(&url).await;
            if events.send(ApiEvent::Shortened(result)).is_err() {
                debug!("Console closed before the shorten request finished");
            }
        });
    }

    /// Apply one completion
    pub fn apply(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Links(result) => match self.fetch.complete(result, &mut self.store) {
                FetchOutcome::Replaced => {
                    self.clamp_selection();
                    self.set_status(format!("Loaded {} links", self.store.len()));
                }
                FetchOutcome::Failed => {
                    let message = self.fetch.error_message().unwrap_or_default().to_string();
                    self.set_error(message);
                }
            },
            ApiEvent::Shortened(result) => {
                let created = result.is_ok();
                self.submission.complete(result);
                match self.submission.result_text() {
                    Some(text) if created => {
                        self.set_status(text);
                        // 新链接出现在目录里需要重新拉取
                        self.request_refresh();
                    }
                    Some(text) => self.set_error(text),
                    None => {}
                }
            }
        }
    }

    /// Select a sort column; the active column toggles direction.
    pub fn select_sort(&mut self, field: SortField) {
        self.store.set_sort(field);
        let sort = self.store.sort();
        self.set_status(format!(
            "Sorted by {} {}",
            sort.field.label(),
            sort.direction.arrow()
        ));
    }

    pub fn focus_filter(&mut self, field: FilterField) {
        self.filter_focus = Some(field);
    }

    pub fn leave_filter(&mut self) {
        self.filter_focus = None;
    }

    /// Current text of a filter input
    pub fn filter_value(&self, field: FilterField) -> &str {
        let filter = self.store.filter();
        match field {
            FilterField::ShortUrl => &filter.short_url,
            FilterField::Destination => &filter.destination,
        }
    }

    pub fn push_filter_char(&mut self, c: char) {
        if let Some(field) = self.filter_focus {
            let mut value = self.filter_value(field).to_string();
            value.push(c);
            self.update_filter(field, value);
        }
    }

    pub fn pop_filter_char(&mut self) {
        if let Some(field) = self.filter_focus {
            let mut value = self.filter_value(field).to_string();
            if value.pop().is_some() {
                self.update_filter(field, value);
            }
        }
    }

    fn update_filter(&mut self, field: FilterField, value: String) {
        let update = match field {
            FilterField::ShortUrl => FilterUpdate::short_url(value),
            FilterField::Destination => FilterUpdate::destination(value),
        };
        self.store.set_filter(update);
        self.clamp_selection();
    }

    /// Copy the last created short URL
    pub fn copy_result(&mut self, now: Instant) {
        let Some(short_url) = self.submission.short_url().map(str::to_string) else {
            return;
        };
        if let Err(e) = self
            .result_copy
            .copy(self.clipboard.as_mut(), &short_url, now)
        {
            self.set_error(e.message().to_string());
        }
    }

    /// Copy the short URL of the highlighted directory row
    pub fn copy_selected_row(&mut self, now: Instant) {
        let Some(short_url) = self.selected_short_url() else {
            return;
        };
        match self.row_copy.copy(self.clipboard.as_mut(), &short_url, now) {
            Ok(()) => self.set_status(format!("Copied {}", short_url)),
            Err(e) => self.set_error(e.message().to_string()),
        }
    }

    /// Advance timers. Returns true when a label changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let result = self.result_copy.tick(now);
        let row = self.row_copy.tick(now);
        result || row
    }
}
