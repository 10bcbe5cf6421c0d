//! # Refresh cycle
//!
//! One pass of the scheduled job:
//!
//! 1. Read the stored record (missing or unreadable counts as empty).
//! 2. Ask the [`SocialPostSource`] for the newest post; `None` ends the pass.
//! 3. Compare post URL and image URL with the stored record; equal ends the pass.
//! 4. Write the new record as pretty JSON through a temporary file.
//!
//! Nothing here returns an error: every failure is logged and reported as
//! [`RefreshOutcome::Skipped`], leaving the stored file exactly as it was.

use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use content::InstagramPost;

use crate::instagram::ScrapeError;
use crate::settings::RefreshSettings;
use crate::source::{PostSummary, SocialPostSource};

#[derive(Clone, Debug, PartialEq)]
pub enum RefreshOutcome {
    /// A new record was written.
    Updated(InstagramPost),
    /// The newest post is the one already stored.
    Unchanged,
    /// Something failed; the stored record was kept.
    Skipped,
}

/// Run one refresh pass for the configured handle and output file.
pub async fn refresh<S: SocialPostSource>(
    source: &S,
    settings: &RefreshSettings,
) -> RefreshOutcome {
    let current = read_record(&settings.out_path);

    let Some(post) = source.fetch_latest_post(&settings.handle).await else {
        tracing::warn!("Instagram update failed. Keeping existing data.");
        return RefreshOutcome::Skipped;
    };

    let next = record_for(&settings.handle, post);
    if is_unchanged(&current, &next) {
        tracing::info!("No change detected. Exiting cleanly.");
        return RefreshOutcome::Unchanged;
    }

    match write_record(&settings.out_path, &next) {
        Ok(()) => {
            tracing::info!("Updated latest Instagram post -> {}", next.post_url);
            RefreshOutcome::Updated(next)
        }
        Err(e) => {
            tracing::warn!(
                "Could not write {}: {e}. Keeping existing data.",
                settings.out_path.display()
            );
            RefreshOutcome::Skipped
        }
    }
}

fn record_for(handle: &str, post: PostSummary) -> InstagramPost {
    InstagramPost {
        instagram_handle: handle.to_string(),
        post_url: post.post_url,
        image_url: post.image_url,
        title: post.title,
        description: post.description,
        last_auto_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

fn is_unchanged(current: &InstagramPost, next: &InstagramPost) -> bool {
    current.post_url == next.post_url && current.image_url == next.image_url
}

/// The stored record, or an empty one if the file is missing or unreadable.
pub fn read_record(path: &Path) -> InstagramPost {
    fs::read_to_string(path)
        .ok()
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_default()
}

/// Write `record` as pretty JSON with a trailing newline, creating parent directories.
pub fn write_record(path: &Path, record: &InstagramPost) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_string_pretty(record)?;
    json.push('\n');

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
