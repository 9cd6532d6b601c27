//! Link record model

use serde::{Deserialize, Serialize};

/// A short link as listed by the API.
///
/// Records are never mutated after a fetch; the console only re-derives views
/// from them. `short_url` identifies a record within one collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkRecord {
    pub short_url: String,
    pub destination_url: String,
    pub clicks: u64,
}

impl LinkRecord {
    pub fn new(
        short_url: impl Into<String>,
        destination_url: impl Into<String>,
        clicks: u64,
    ) -> Self {
        Self {
            short_url: short_url.into(),
            destination_url: destination_url.into(),
            clicks,
        }
    }
}
