//! App state definition and basic state management

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use super::operations::ApiEvent;
use crate::client::LinkApi;
use crate::config::UiConfig;
use crate::console::{Clipboard, CopyAffordance, FetchController, SubmissionWorkflow};
use crate::directory::{DirectoryStore, DirectoryView};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Shorten,
    Directory,
    Help,
    Exiting,
}

impl CurrentScreen {
    /// Tab 切换的下一个主屏幕
    pub fn next_main(self) -> Self {
        match self {
            Self::Shorten => Self::Directory,
            _ => Self::Shorten,
        }
    }

    pub fn is_overlay(self) -> bool {
        matches!(self, Self::Help | Self::Exiting)
    }
}

/// 正在编辑的过滤输入框
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    ShortUrl,
    Destination,
}

impl FilterField {
    pub fn title(self) -> &'static str {
        match self {
            Self::ShortUrl => "Filter by Short URL",
            Self::Destination => "Filter by Destination URL",
        }
    }
}

pub struct App {
    pub(super) api: Arc<dyn LinkApi>,
    pub(super) events: UnboundedSender<ApiEvent>,

    pub current_screen: CurrentScreen,
    /// Main screen to return to when an overlay closes
    pub main_screen: CurrentScreen,

    // Directory
    pub store: DirectoryStore,
    pub fetch: FetchController,
    pub filter_focus: Option<FilterField>,
    pub destination_width: usize,

    // Submission
    pub submission: SubmissionWorkflow,

    // Copy affordances: shorten result and selected directory row
    pub result_copy: CopyAffordance,
    pub row_copy: CopyAffordance,
    pub(super) clipboard: Box<dyn Clipboard>,

    // UI state
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub last_visible_height: usize,
    pub status_message: String,
    pub error_message: String,
}

impl App {
    pub fn new(
        api: Arc<dyn LinkApi>,
        clipboard: Box<dyn Clipboard>,
        events: UnboundedSender<ApiEvent>,
        ui: &UiConfig,
    ) -> App {
        let revert = Duration::from_millis(ui.copy_revert_ms);
        App {
            api,
            events,
            current_screen: CurrentScreen::Shorten,
            main_screen: CurrentScreen::Shorten,
            store: DirectoryStore::new(),
            fetch: FetchController::new(),
            filter_focus: None,
            destination_width: ui.destination_width,
            submission: SubmissionWorkflow::new(),
            result_copy: CopyAffordance::new(revert),
            row_copy: CopyAffordance::new(revert),
            clipboard,
            selected_index: 0,
            scroll_offset: 0,
            last_visible_height: 1,
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    pub fn open_overlay(&mut self, screen: CurrentScreen) {
        if !self.current_screen.is_overlay() {
            self.main_screen = self.current_screen;
        }
        self.current_screen = screen;
    }

    pub fn close_overlay(&mut self) {
        self.current_screen = self.main_screen;
    }

    pub fn switch_main_screen(&mut self) {
        self.filter_focus = None;
        self.current_screen = self.current_screen.next_main();
        self.main_screen = self.current_screen;
    }

    /// Number of rows after filtering
    pub fn display_count(&self) -> usize {
        self.store.derive().len()
    }

    /// Project the current derived sequence for drawing
    pub fn directory_view(&self) -> DirectoryView {
        let derived = self.store.derive();
        DirectoryView::project(&derived, self.store.sort(), self.destination_width)
    }

    /// Short URL of the highlighted row
    pub fn selected_short_url(&self) -> Option<String> {
        self.store
            .derive()
            .get(self.selected_index)
            .map(|record| record.short_url.clone())
    }
}
