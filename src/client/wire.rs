//! Wire shapes of the short-link HTTP API
//!
//! The listing endpoint names the destination `destiny_url`; that spelling is
//! kept here and nowhere else.

use serde::{Deserialize, Serialize};

use crate::directory::LinkRecord;

pub const SHORTENER_PATH: &str = "v1/shortener";
pub const LINKS_PATH: &str = "v1/links";

/// `POST /v1/shortener` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenRequest {
    pub url: String,
}

/// `POST /v1/shortener` success body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub short_url: String,
}

/// Error body used by the API on non-success statuses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /v1/links` success body. An empty listing may arrive as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinksResponse {
    #[serde(default)]
    pub links: Option<Vec<LinkPayload>>,
}

impl LinksResponse {
    pub fn into_records(self) -> Vec<LinkRecord> {
        self.links
            .unwrap_or_default()
            .into_iter()
            .map(LinkRecord::from)
            .collect()
    }
}

/// One listed link. Missing fields deserialize as empty values rather than
/// failing the whole listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkPayload {
    #[serde(default)]
    pub short_url: String,
    #[serde(default)]
    pub destiny_url: String,
    #[serde(default)]
    pub clicks: u64,
}

impl From<LinkPayload> for LinkRecord {
    fn from(payload: LinkPayload) -> Self {
        LinkRecord {
            short_url: payload.short_url,
            destination_url: payload.destiny_url,
            clicks: payload.clicks,
        }
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Prefers the JSON `error` field; a short plain-text body is used as-is.
/// Any other JSON body carries no usable message.
pub fn error_message_from_body(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        return serde_json::from_value::<ErrorBody>(value)
            .ok()
            .and_then(|parsed| parsed.error)
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
    }

    let text = body.trim();
    if text.is_empty() || text.len() > 200 || text.starts_with('<') {
        None
    } else {
        Some(text.to_string())
    }
}
