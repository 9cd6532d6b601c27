//! Display projection of a derived sequence
//!
//! Terminal-independent: builds the rows and header indicators the table
//! widget draws. A fresh view is projected on every render.

use strum::IntoEnumIterator;

use super::criteria::{SortCriteria, SortField};
use super::model::LinkRecord;

/// 非激活列的排序指示符
pub const INACTIVE_SORT_INDICATOR: &str = "↕";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub field: SortField,
    pub label: &'static str,
    pub indicator: &'static str,
    pub active: bool,
}

impl HeaderView {
    pub fn title(&self) -> String {
        format!("{} {}", self.label, self.indicator)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Text shown in the short URL column
    pub short_url: String,
    /// Where the short URL cell points (the short URL itself)
    pub link_target: String,
    /// Possibly truncated destination
    pub destination: String,
    /// Untruncated destination, for the detail line of the selected row
    pub destination_full: String,
    pub clicks: String,
}

impl RowView {
    fn project(record: &LinkRecord, destination_width: usize) -> Self {
        Self {
            short_url: record.short_url.clone(),
            link_target: record.short_url.clone(),
            destination: truncate(&record.destination_url, destination_width),
            destination_full: record.destination_url.clone(),
            clicks: record.clicks.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryView {
    pub headers: Vec<HeaderView>,
    pub rows: Vec<RowView>,
}

impl DirectoryView {
    pub fn project(
        derived: &[&LinkRecord],
        sort: &SortCriteria,
        destination_width: usize,
    ) -> Self {
        let headers = SortField::iter()
            .map(|field| {
                let active = field == sort.field;
                HeaderView {
                    field,
                    label: field.label(),
                    indicator: if active {
                        sort.direction.arrow()
                    } else {
                        INACTIVE_SORT_INDICATOR
                    },
                    active,
                }
            })
            .collect();

        let rows = derived
            .iter()
            .map(|record| RowView::project(record, destination_width))
            .collect();

        Self { headers, rows }
    }

    pub fn active_header(&self) -> Option<&HeaderView> {
        self.headers.iter().find(|h| h.active)
    }
}

/// Truncate to `width` characters, marking the cut with "...".
pub fn truncate(value: &str, width: usize) -> String {
    if width == 0 || value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width).collect();
    format!("{}...", kept)
}
