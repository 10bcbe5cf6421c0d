//! # Instagram scraper
//!
//! Finds the newest public post of an account without an API key:
//!
//! 1. Fetch `https://www.instagram.com/{handle}/` through a text proxy
//!    (`r.jina.ai` by default), which sidesteps the login wall that plain
//!    requests from CI runners hit.
//! 2. Take the first `"shortcode"` value in the page as the newest post.
//! 3. Fetch `https://www.instagram.com/p/{shortcode}/` through the same proxy.
//! 4. Read the OpenGraph image, title and description for the preview.
//!
//! There are no retries or rate limits; this runs a few times a day at most.

use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use thiserror::Error;

use crate::extract;
use crate::settings::RefreshSettings;
use crate::source::{PostSummary, SocialPostSource};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("fetch failed: {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("fetch failed: HTTP {status} :: {url}")]
    Status { url: String, status: u16 },
    #[error("could not find a shortcode on the profile page of {0}")]
    MissingShortcode(String),
    #[error("invalid URL: {0}")]
    Url(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Scrapes public profile and post pages through a text proxy.
#[derive(Clone, Debug)]
pub struct InstagramScraper {
    client: Client,
    proxy_base: String,
    profile_base: Url,
}

impl InstagramScraper {
    pub fn new(settings: &RefreshSettings) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(ScrapeError::Client)?;
        let profile_base =
            Url::parse(&settings.profile_base).map_err(|e| ScrapeError::Url(e.to_string()))?;
        Ok(Self {
            client,
            proxy_base: settings.proxy_base.clone(),
            profile_base,
        })
    }

    /// Profile page URL, e.g. `https://www.instagram.com/handle/`.
    pub fn profile_url(&self, handle: &str) -> Result<Url, ScrapeError> {
        let handle = handle.trim().trim_start_matches('@');
        self.page_url(&[handle])
    }

    /// Post page URL, e.g. `https://www.instagram.com/p/C1abc/`.
    pub fn post_url(&self, shortcode: &str) -> Result<Url, ScrapeError> {
        self.page_url(&["p", shortcode])
    }

    fn page_url(&self, segments: &[&str]) -> Result<Url, ScrapeError> {
        let mut url = self.profile_base.clone();
        url.path_segments_mut()
            .map_err(|_| ScrapeError::Url(self.profile_base.to_string()))?
            .pop_if_empty()
            .extend(segments)
            .push("");
        Ok(url)
    }

    /// The URL actually requested for `url`: routed through the proxy when one is set.
    pub fn proxied(&self, url: &Url) -> String {
        let target = url.as_str();
        if self.proxy_base.is_empty() {
            return target.to_string();
        }
        match target.strip_prefix("http://") {
            Some(rest) => format!("{}https://{rest}", self.proxy_base),
            None => format!("{}{target}", self.proxy_base),
        }
    }

    async fn fetch_text(&self, url: &Url) -> Result<String, ScrapeError> {
        let url = self.proxied(url);
        tracing::debug!("fetching {url}");
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, ACCEPT_HTML)
            .send()
            .await
            .map_err(|source| ScrapeError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| ScrapeError::Http { url, source })
    }

    /// Newest post of `handle`, or the first stage that failed.
    pub async fn latest_post(&self, handle: &str) -> Result<PostSummary, ScrapeError> {
        let profile_html = self.fetch_text(&self.profile_url(handle)?).await?;

        let shortcode = extract::latest_shortcode(&profile_html)
            .ok_or_else(|| ScrapeError::MissingShortcode(handle.to_string()))?;

        let post_url = self.post_url(&shortcode)?;
        let post_html = self.fetch_text(&post_url).await?;
        let og = extract::open_graph(&post_html);

        Ok(PostSummary {
            post_url: post_url.into(),
            image_url: og.image,
            title: og.title,
            description: og.description,
        })
    }
}

impl SocialPostSource for InstagramScraper {
    async fn fetch_latest_post(&self, handle: &str) -> Option<PostSummary> {
        match self.latest_post(handle).await {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::warn!("Instagram scrape failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scraper() -> InstagramScraper {
        InstagramScraper::new(&RefreshSettings::default()).unwrap()
    }

    #[test]
    fn test_profile_url() {
        let url = scraper().profile_url("@bhsteachersassociation").unwrap();
        assert_eq!(url.as_str(), "https://www.instagram.com/bhsteachersassociation/");
    }

    #[test]
    fn test_post_url() {
        let url = scraper().post_url("C1abc").unwrap();
        assert_eq!(url.as_str(), "https://www.instagram.com/p/C1abc/");
    }

    #[test]
    fn test_proxied_url() {
        let scraper = scraper();
        let url = scraper.profile_url("bta").unwrap();
        assert_eq!(
            scraper.proxied(&url),
            "https://r.jina.ai/https://www.instagram.com/bta/"
        );
    }

    #[test]
    fn test_no_proxy() {
        let settings = RefreshSettings {
            proxy_base: String::new(),
            profile_base: "http://localhost:8080/".into(),
            ..Default::default()
        };
        let scraper = InstagramScraper::new(&settings).unwrap();
        let url = scraper.profile_url("bta").unwrap();
        assert_eq!(scraper.proxied(&url), "http://localhost:8080/bta/");
    }

    #[test]
    fn test_invalid_profile_base() {
        let settings = RefreshSettings {
            profile_base: "nope".into(),
            ..Default::default()
        };
        assert!(matches!(
            InstagramScraper::new(&settings),
            Err(ScrapeError::Url(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_proxy_yields_none() {
        let settings = RefreshSettings {
            proxy_base: "http://127.0.0.1:9/".into(),
            ..Default::default()
        };
        let scraper = InstagramScraper::new(&settings).unwrap();
        assert!(scraper.latest_post("bta").await.is_err());
        assert_eq!(scraper.fetch_latest_post("bta").await, None);
    }
}
