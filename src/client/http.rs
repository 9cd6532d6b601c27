//! ureq-backed implementation of [`LinkApi`]
//!
//! ureq is blocking, so every call runs inside `spawn_blocking`.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use ureq::Agent;
use ureq::http::Response;
use url::Url;

use super::wire::{
    LINKS_PATH, LinksResponse, SHORTENER_PATH, ShortenRequest, ShortenResponse,
    error_message_from_body,
};
use super::{FETCH_FAILED, LinkApi, REQUEST_FAILED, SHORTEN_FAILED};
use crate::config::ApiConfig;
use crate::directory::LinkRecord;
use crate::errors::{LinkdeskError, Result};

/// HTTP client for the short-link API
#[derive(Clone)]
pub struct HttpLinkApi {
    agent: Agent,
    links_url: Url,
    shortener_url: Url,
}

impl HttpLinkApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base = normalize_base(config.base_url()?);
        let timeout = (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs));

        // Non-success statuses must come back as responses so the error body
        // can be read.
        let agent: Agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self {
            agent,
            links_url: base.join(LINKS_PATH)?,
            shortener_url: base.join(SHORTENER_PATH)?,
        })
    }

    pub fn links_url(&self) -> &Url {
        &self.links_url
    }

    pub fn shortener_url(&self) -> &Url {
        &self.shortener_url
    }

    fn list_links_sync(agent: &Agent, url: &str) -> Result<Vec<LinkRecord>> {
        let resp = agent.get(url).call().map_err(|e| {
            warn!("GET {} failed: {}", url, e);
            LinkdeskError::request_failure(FETCH_FAILED)
        })?;

        let body: LinksResponse = read_success(resp, url, FETCH_FAILED)?;
        let records = body.into_records();
        debug!("Fetched {} links from {}", records.len(), url);
        Ok(records)
    }

    fn shorten_sync(agent: &Agent, url: &str, target: String) -> Result<String> {
        let payload = ShortenRequest { url: target };
        let resp = agent.post(url).send_json(&payload).map_err(|e| {
            warn!("POST {} failed: {}", url, e);
            LinkdeskError::request_failure(REQUEST_FAILED)
        })?;

        let body: ShortenResponse = read_success(resp, url, SHORTEN_FAILED)?;
        debug!("Shortened {} -> {}", payload.url, body.short_url);
        Ok(body.short_url)
    }
}

#[async_trait]
impl LinkApi for HttpLinkApi {
    async fn list_links(&self) -> Result<Vec<LinkRecord>> {
        let agent = self.agent.clone();
        let url = self.links_url.to_string();
        tokio::task::spawn_blocking(move || Self::list_links_sync(&agent, &url))
            .await
            .map_err(|e| {
                warn!("list_links task failed: {}", e);
                LinkdeskError::request_failure(FETCH_FAILED)
            })?
    }

    async fn shorten(&self, url: &str) -> Result<String> {
        let agent = self.agent.clone();
        let endpoint = self.shortener_url.to_string();
        let target = url.to_string();
        tokio::task::spawn_blocking(move || Self::shorten_sync(&agent, &endpoint, target))
            .await
            .map_err(|e| {
                warn!("shorten task failed: {}", e);
                LinkdeskError::request_failure(REQUEST_FAILED)
            })?
    }
}

/// Decode a success body, or turn a non-success status into `ServerError`.
fn read_success<T: DeserializeOwned>(
    mut resp: Response<ureq::Body>,
    url: &str,
    fallback: &str,
) -> Result<T> {
    let status = resp.status();
    trace!("{} answered {}", url, status);

    if !status.is_success() {
        let body = resp.body_mut().read_to_string().unwrap_or_default();
        let message = error_message_from_body(&body).unwrap_or_else(|| fallback.to_string());
        warn!("{} answered {}: {}", url, status.as_u16(), message);
        return Err(LinkdeskError::server_error(message));
    }

    resp.into_body().read_json::<T>().map_err(|e| {
        warn!("Response from {} could not be decoded: {}", url, e);
        LinkdeskError::serialization(format!("{}: invalid response from server", fallback))
    })
}

/// `Url::join` replaces the last segment unless the path ends with '/'.
fn normalize_base(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}
