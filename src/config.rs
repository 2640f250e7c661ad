use anyhow::Context as _;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";
pub const BASE_URL_ENV: &str = "CATALOG_EXPLORER_BASE_URL";

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: Url,
    pub user_agent: String,
}

impl ProviderConfig {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            user_agent: format!("catalog-explorer/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let raw = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        Self::new(&raw).with_context(|| format!("invalid {BASE_URL_ENV}={raw:?}"))
    }

    /// `--base-url` wins over the environment.
    pub fn resolve(base_url: Option<&str>) -> anyhow::Result<Self> {
        match base_url {
            Some(raw) => Self::new(raw).context("parse --base-url"),
            None => Self::from_env(),
        }
    }
}

/// Parses an http/https base URL and guarantees a trailing slash so that
/// relative joins keep the path prefix.
pub fn parse_base_url(raw: &str) -> anyhow::Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        anyhow::bail!("base url is empty");
    }
    let mut url = Url::parse(raw).with_context(|| format!("parse base url: {raw}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("base url must be http/https: {url}");
    }
    url.set_query(None);
    url.set_fragment(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
