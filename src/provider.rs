use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, USER_AGENT};
use url::Url;

use crate::config::ProviderConfig;
use crate::model::{Page, PageBody, Record};

/// Why a page or record query failed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response status ({status}): {message}")]
    Status { status: StatusCode, message: String },
    #[error("malformed response body: {0}")]
    Parse(String),
}

/// Remote source of catalog pages and single records.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// `page` is 1-based.
    async fn fetch_page(&self, page: u32) -> Result<Page, LoadError>;
    async fn fetch_record(&self, id: u64) -> Result<Record, LoadError>;
}

#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl HttpProvider {
    pub fn new(config: ProviderConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|err| anyhow::anyhow!("build catalog http client: {err}"))?;
        Ok(Self { client, config })
    }

    pub fn page_url(&self, page: u32) -> Result<Url, LoadError> {
        let mut url = self.join("character/")?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url)
    }

    pub fn record_url(&self, id: u64) -> Result<Url, LoadError> {
        self.join(&format!("character/{id}"))
    }

    fn join(&self, path: &str) -> Result<Url, LoadError> {
        self.config
            .base_url
            .join(path)
            .map_err(|err| LoadError::Transport(format!("build url for {path}: {err}")))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, LoadError> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, &self.config.user_agent)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| LoadError::Transport(format!("GET {url}: {err}")))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|err| LoadError::Transport(format!("read body of {url}: {err}")))?;
        if !status.is_success() {
            let message = parse_error_message(&raw).unwrap_or_else(|| truncate(&raw, 200));
            return Err(LoadError::Status { status, message });
        }

        serde_json::from_str(&raw).map_err(|err| LoadError::Parse(err.to_string()))
    }
}

#[async_trait]
impl CatalogProvider for HttpProvider {
    async fn fetch_page(&self, page: u32) -> Result<Page, LoadError> {
        let url = self.page_url(page)?;
        let body: PageBody = self.get_json(url).await?;
        Ok(body.into())
    }

    async fn fetch_record(&self, id: u64) -> Result<Record, LoadError> {
        let url = self.record_url(id)?;
        self.get_json(url).await
    }
}

/// The API reports failures as `{"error": "..."}`.
fn parse_error_message(raw_json: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw_json).ok()?;
    let message = value.get("error")?.as_str()?.to_owned();
    Some(message)
}

fn truncate(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_owned(),
    }
}
