//! Locale file transports: HTTP for a deployed site, a directory for a local checkout.
use std::path::PathBuf;
use async_trait::async_trait;
use reqwest::Url;

use crate::{error::FetchError, lang::Dictionary};

/// Fetch one locale document. `reference` is relative to the current page
/// (`../locales/en.json`) or absolute from the site root (`/locales/en.json`).
#[async_trait]
pub trait LocaleFetcher: Send + Sync {
    async fn fetch(&self, reference: &str) -> Result<Dictionary, FetchError>;
}

/// Decode a fetched body; valid JSON that is not an object is rejected.
pub fn parse_locale(body: &[u8]) -> Result<Dictionary, FetchError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    Dictionary::from_value(value).ok_or(FetchError::NotAMapping)
}

fn resolve(page: &Url, reference: &str) -> Result<Url, FetchError> {
    page.join(reference).map_err(|e| FetchError::InvalidReference { reference: reference.to_string(), reason: e.to_string() })
}

/// Plain unauthenticated GET against the page's origin.
pub struct HttpFetcher {
    client: reqwest::Client,
    page: Url,
}

impl HttpFetcher {
    pub fn new(page: Url) -> Self { Self { client: reqwest::Client::new(), page } }
}

#[async_trait]
impl LocaleFetcher for HttpFetcher {
    async fn fetch(&self, reference: &str) -> Result<Dictionary, FetchError> {
        let url = resolve(&self.page, reference)?;
        let res = self.client.get(url).send().await?;
        let status = res.status();
        if !status.is_success() { return Err(FetchError::Status(status.as_u16())); }
        let body = res.bytes().await?;
        parse_locale(&body)
    }
}

/// Serves a static site from disk. References resolve like URLs against the
/// page path and can never leave `root`.
pub struct DirFetcher {
    root: PathBuf,
    page: Url,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>, page_path: &str) -> Result<Self, FetchError> {
        let origin = Url::parse("http://site.local/").map_err(|e| FetchError::InvalidReference { reference: page_path.to_string(), reason: e.to_string() })?;
        let page = resolve(&origin, page_path)?;
        Ok(Self { root: root.into(), page })
    }

    /// Filesystem path a reference maps to.
    pub fn local_path(&self, reference: &str) -> Result<PathBuf, FetchError> {
        let url = resolve(&self.page, reference)?;
        let mut path = self.root.clone();
        for seg in url.path().split('/').filter(|s| !s.is_empty()) {
            if seg == ".." || seg == "." {
                return Err(FetchError::InvalidReference { reference: reference.to_string(), reason: "path escapes site root".into() });
            }
            path.push(seg);
        }
        Ok(path)
    }
}

#[async_trait]
impl LocaleFetcher for DirFetcher {
    async fn fetch(&self, reference: &str) -> Result<Dictionary, FetchError> {
        let path = self.local_path(reference)?;
        let body = tokio::fs::read(&path).await?;
        parse_locale(&body)
    }
}
