//! Filter and sort criteria

use strum::EnumIter;

/// Case-insensitive substring constraints. Empty strings do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub short_url: String,
    pub destination: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.short_url.is_empty() && self.destination.is_empty()
    }

    /// Apply a partial update; fields left as `None` keep their value.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(short_url) = update.short_url {
            self.short_url = short_url;
        }
        if let Some(destination) = update.destination {
            self.destination = destination;
        }
    }
}

/// Partial filter change coming from a single input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub short_url: Option<String>,
    pub destination: Option<String>,
}

impl FilterUpdate {
    pub fn short_url(value: impl Into<String>) -> Self {
        Self {
            short_url: Some(value.into()),
            destination: None,
        }
    }

    pub fn destination(value: impl Into<String>) -> Self {
        Self {
            short_url: None,
            destination: Some(value.into()),
        }
    }
}

/// 排序列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum SortField {
    #[default]
    ShortUrl,
    DestinationUrl,
    Clicks,
}

impl SortField {
    /// Column header label
    pub fn label(self) -> &'static str {
        match self {
            Self::ShortUrl => "Short URL",
            Self::DestinationUrl => "Destination URL",
            Self::Clicks => "Clicks",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Exactly one active column; defaults to short URL ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortCriteria {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortCriteria {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: the active column flips direction, any other column
    /// becomes active in ascending order.
    pub fn select(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.toggled();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }
}
