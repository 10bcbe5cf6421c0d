//! Update `data/instagram.json` with the latest Instagram post.
//!
//! Meant for a scheduled CI job. Always exits 0: a failed scrape keeps the
//! existing file so a blocked request never breaks a deploy.

use social::{refresh, InstagramScraper, RefreshOutcome, RefreshSettings};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = match RefreshSettings::new() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Invalid settings: {e}. Keeping existing data.");
            return Ok(());
        }
    };

    tracing::info!("IG_HANDLE: {}", settings.handle);
    tracing::info!("OUT_PATH: {}", settings.out_path.display());

    let scraper = match InstagramScraper::new(&settings) {
        Ok(scraper) => scraper,
        Err(e) => {
            tracing::warn!("Instagram update failed: {e}. Keeping existing data.");
            return Ok(());
        }
    };

    match refresh(&scraper, &settings).await {
        RefreshOutcome::Updated(_) | RefreshOutcome::Unchanged => {}
        RefreshOutcome::Skipped => tracing::debug!("refresh skipped"),
    }

    Ok(())
}
