//! # Social crate: keeps `data/instagram.json` current
//!
//! The site is static, so the home page cannot ask Instagram for the newest post
//! at render time. Instead a scheduled job runs [`refresh`], which asks a
//! [`SocialPostSource`] for the latest post and writes it to a small JSON file the
//! home page loads like any other data file.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`source`] | The [`SocialPostSource`] capability and its [`PostSummary`] result. |
//! | [`instagram`] | [`InstagramScraper`]: profile page → newest shortcode → post page → OpenGraph tags, fetched through a text proxy. |
//! | [`extract`] | Pattern matching over the fetched markup. |
//! | [`refresh`] | The refresh cycle: compare with the stored record, write only on change. |
//! | [`settings`] | [`RefreshSettings`] from defaults, `instagram.toml` and `IG_*` variables. |
//!
//! ## Failure policy
//!
//! Scraping third-party markup is best-effort. Any failure is logged as a warning
//! and the existing output file is left untouched; the job still exits successfully
//! so a blocked scrape never fails a deploy or degrades a good cached preview.

pub mod extract;
pub mod instagram;
pub mod refresh;
pub mod settings;
pub mod source;

pub use instagram::{InstagramScraper, ScrapeError};
pub use refresh::{refresh, RefreshOutcome};
pub use settings::RefreshSettings;
pub use source::{PostSummary, SocialPostSource};
