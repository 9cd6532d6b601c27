//! Console controller integration tests
//!
//! Drive the fetch controller, submission workflow and copy affordance
//! against an in-memory `LinkApi`.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use linkdesk::client::LinkApi;
use linkdesk::console::{
    CopyAffordance, CopyLabel, FetchController, FetchOutcome, FetchStatus, MemoryClipboard,
    SubmissionState, SubmissionWorkflow,
};
use linkdesk::directory::{DirectoryStore, LinkRecord};
use linkdesk::errors::{LinkdeskError, Result};

/// Answers with queued results and counts every call
#[derive(Default)]
struct ScriptedApi {
    listings: Mutex<VecDeque<Result<Vec<LinkRecord>>>>,
    shortened: Mutex<VecDeque<Result<String>>>,
    list_calls: AtomicUsize,
    shorten_calls: AtomicUsize,
    last_url: Mutex<Option<String>>,
}

impl ScriptedApi {
    fn with_listings(listings: Vec<Result<Vec<LinkRecord>>>) -> Self {
        Self {
            listings: Mutex::new(listings.into()),
            ..Default::default()
        }
    }

    fn with_shortened(shortened: Vec<Result<String>>) -> Self {
        Self {
            shortened: Mutex::new(shortened.into()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl LinkApi for ScriptedApi {
    async fn list_links(&self) -> Result<Vec<LinkRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.listings
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LinkdeskError::request_failure("no scripted listing")))
    }

    async fn shorten(&self, url: &str) -> Result<String> {
        self.shorten_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_url.lock().unwrap() = Some(url.to_string());
        self.shortened
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LinkdeskError::request_failure("no scripted result")))
    }
}

fn links() -> Vec<LinkRecord> {
    vec![
        LinkRecord::new("http://s/a", "https://example.com", 5),
        LinkRecord::new("http://s/b", "https://rust-lang.org", 3),
    ]
}

#[cfg(test)]
mod fetch_tests {
    use super::*;

    #[tokio::test]
    async fn test_load_replaces_collection() {
        let api = ScriptedApi::with_listings(vec![Ok(links())]);
        let mut store = DirectoryStore::new();
        let mut fetch = FetchController::new();

        let outcome = fetch.load_all(&api, &mut store).await;
        assert_eq!(outcome, FetchOutcome::Replaced);
        assert_eq!(fetch.status(), &FetchStatus::Success);
        assert_eq!(store.records(), links().as_slice());
        assert!(!fetch.is_loading());
    }

    #[tokio::test]
    async fn test_failed_fetch_after_success_keeps_rows() {
        let api = ScriptedApi::with_listings(vec![
            Ok(links()),
            Err(LinkdeskError::server_error("Failed to fetch links")),
        ]);
        let mut store = DirectoryStore::new();
        let mut fetch = FetchController::new();

        fetch.load_all(&api, &mut store).await;
        let before: Vec<String> = store.derive().iter().map(|r| r.short_url.clone()).collect();

        let outcome = fetch.load_all(&api, &mut store).await;
        assert_eq!(outcome, FetchOutcome::Failed);
        assert_eq!(fetch.error_message(), Some("Failed to fetch links"));
        let after: Vec<String> = store.derive().iter().map(|r| r.short_url.clone()).collect();
        assert_eq!(before, after);
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_last_completion_wins() {
        let mut store = DirectoryStore::new();
        let mut fetch = FetchController::new();

        // Two overlapping loads: the first to start finishes last
        fetch.begin();
        fetch.begin();
        assert_eq!(fetch.in_flight(), 2);

        fetch.complete(Ok(vec![LinkRecord::new("new", "x", 1)]), &mut store);
        assert!(fetch.is_loading());
        fetch.complete(Ok(vec![LinkRecord::new("old", "x", 1)]), &mut store);

        assert!(!fetch.is_loading());
        assert_eq!(store.records()[0].short_url, "old");
    }
}

#[cfg(test)]
mod submission_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_input_issues_no_request() {
        let api = ScriptedApi::default();
        let mut workflow = SubmissionWorkflow::new();

        for input in ["", "   ", "\t\n"] {
            workflow.set_input(input);
            let err = workflow.submit(&api).await.unwrap_err();
            assert!(matches!(err, LinkdeskError::Validation(_)));
            assert_eq!(workflow.result_text().as_deref(), Some("Please enter a URL"));
        }
        assert_eq!(api.shorten_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_success_clears_input_and_shows_short_url() {
        let api = ScriptedApi::with_shortened(vec![Ok("http://s/x".to_string())]);
        let mut workflow = SubmissionWorkflow::new();
        workflow.set_input("http://example.com");

        workflow.submit(&api).await.unwrap();
        assert_eq!(workflow.input(), "");
        assert_eq!(
            workflow.result_text().as_deref(),
            Some("Short URL: http://s/x")
        );
        assert_eq!(workflow.short_url(), Some("http://s/x"));
        assert_eq!(
            api.last_url.lock().unwrap().as_deref(),
            Some("http://example.com")
        );
    }

    #[tokio::test]
    async fn test_failure_keeps_input_and_shows_message() {
        let api = ScriptedApi::with_shortened(vec![Err(LinkdeskError::server_error(
            "URL is required",
        ))]);
        let mut workflow = SubmissionWorkflow::new();
        workflow.set_input("not a url");

        assert!(workflow.submit(&api).await.is_err());
        assert_eq!(workflow.input(), "not a url");
        assert_eq!(
            workflow.state(),
            &SubmissionState::Error("URL is required".to_string())
        );
        assert!(workflow.short_url().is_none());
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_is_trimmed() {
        let api = ScriptedApi::with_shortened(vec![Ok("http://s/y".to_string())]);
        let mut workflow = SubmissionWorkflow::new();
        workflow.set_input("  http://example.com/path  ");

        workflow.submit(&api).await.unwrap();
        assert_eq!(
            api.last_url.lock().unwrap().as_deref(),
            Some("http://example.com/path")
        );
    }
}

#[cfg(test)]
mod copy_tests {
    use super::*;

    #[test]
    fn test_revert_fires_once_after_latest_click() {
        let mut clipboard = MemoryClipboard::default();
        let mut copy = CopyAffordance::new(Duration::from_secs(2));
        let t0 = Instant::now();

        copy.copy(&mut clipboard, "http://s/x", t0).unwrap();
        copy.copy(&mut clipboard, "http://s/x", t0 + Duration::from_millis(800))
            .unwrap();

        let mut reverted_at = Vec::new();
        for ms in (0..5000).step_by(50) {
            if copy.tick(t0 + Duration::from_millis(ms)) {
                reverted_at.push(ms);
            }
        }
        assert_eq!(reverted_at, vec![2800]);
        assert_eq!(copy.label(), CopyLabel::Ready);
    }

    #[test]
    fn test_copy_failure_does_not_touch_submission() {
        let mut workflow = SubmissionWorkflow::new();
        workflow.set_input("http://example.com");
        workflow.begin().unwrap();
        workflow.complete(Ok("http://s/x".to_string()));
        let state = workflow.state().clone();

        let mut clipboard = MemoryClipboard::failing();
        let mut copy = CopyAffordance::default();
        let short = workflow.short_url().unwrap().to_string();
        let err = copy.copy(&mut clipboard, &short, Instant::now()).unwrap_err();

        assert!(matches!(err, LinkdeskError::ClipboardFailure(_)));
        assert_eq!(copy.label().text(), "Error");
        assert_eq!(workflow.state(), &state);
    }
}
