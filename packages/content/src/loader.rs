//! # Data loader
//!
//! All content comes from small JSON files fetched by relative path. Loading goes
//! through the [`DataSource`] trait so the same page logic runs against the real
//! site ([`HttpSource`]) or fixed in-memory content ([`MemorySource`]).
//!
//! [`fetch_json`] fails on transport errors, non-success statuses and malformed
//! JSON. [`safe_load`] wraps it and substitutes a fallback instead: a broken or
//! missing data file must never stop the rest of a page from rendering.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use reqwest::header::CACHE_CONTROL;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why a data file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load {path}: {source}")]
    Http {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to load {path}: HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("failed to load {0}: not found")]
    NotFound(String),
    #[error("failed to parse {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid data URL: {0}")]
    Url(String),
}

/// Something that can hand back the text of a data file by relative path.
pub trait DataSource {
    fn fetch_text(&self, path: &str) -> impl Future<Output = Result<String, LoadError>>;
}

/// Fetches data files over HTTP relative to a base URL, bypassing caches.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: Client,
    base: Url,
}

impl HttpSource {
    /// Create a source resolving paths against `base` (usually the page URL).
    pub fn new(base: &str) -> Result<Self, LoadError> {
        let base = Url::parse(base).map_err(|e| LoadError::Url(e.to_string()))?;
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// GET request for `url` that skips any cached copy.
    ///
    /// Browsers ignore a `Cache-Control` request header when picking a cached
    /// response, so on wasm the fetch itself runs with `cache: "no-store"`.
    fn uncached_get(&self, url: Url) -> RequestBuilder {
        let request = self.client.get(url).header(CACHE_CONTROL, "no-store");
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_cache_no_store();
        request
    }
}

impl DataSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> Result<String, LoadError> {
        let url = self
            .base
            .join(path)
            .map_err(|e| LoadError::Url(e.to_string()))?;

        let response = self
            .uncached_get(url)
            .send()
            .await
            .map_err(|source| LoadError::Http {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| LoadError::Http {
            path: path.to_string(),
            source,
        })
    }
}

/// In-memory data files for tests and offline previews.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a file.
    pub fn with_file(self, path: &str, text: &str) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&self, path: &str, text: &str) {
        if let Ok(mut files) = self.files.lock() {
            files.insert(path.to_string(), text.to_string());
        }
    }
}

impl DataSource for MemorySource {
    async fn fetch_text(&self, path: &str) -> Result<String, LoadError> {
        self.files
            .lock()
            .ok()
            .and_then(|files| files.get(path).cloned())
            .ok_or_else(|| LoadError::NotFound(path.to_string()))
    }
}

/// The data source the UI holds in its app state.
#[derive(Clone, Debug)]
pub enum Source {
    Http(HttpSource),
    Memory(MemorySource),
}

impl DataSource for Source {
    async fn fetch_text(&self, path: &str) -> Result<String, LoadError> {
        match self {
            Source::Http(http) => http.fetch_text(path).await,
            Source::Memory(memory) => memory.fetch_text(path).await,
        }
    }
}

/// Fetch and decode a JSON data file.
pub async fn fetch_json<T, S>(source: &S, path: &str) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    S: DataSource,
{
    let text = source.fetch_text(path).await?;
    serde_json::from_str(&text).map_err(|source| LoadError::Decode {
        path: path.to_string(),
        source,
    })
}

/// Fetch and decode a JSON data file, returning `fallback` on any failure.
pub async fn safe_load<T, S>(source: &S, path: &str, fallback: T) -> T
where
    T: DeserializeOwned,
    S: DataSource,
{
    match fetch_json(source, path).await {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("{e}; using fallback");
            fallback
        }
    }
}
