//! Capability interface for "what is the newest post of this account".

use std::future::Future;

/// Preview metadata for a single post.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostSummary {
    pub post_url: String,
    pub image_url: String,
    pub title: String,
    pub description: String,
}

/// Anything that can find the newest post for a handle.
///
/// Implementations swallow and log their own failures; `None` means "no usable
/// answer today" and callers keep whatever they had before.
pub trait SocialPostSource {
    fn fetch_latest_post(&self, handle: &str) -> impl Future<Output = Option<PostSummary>>;
}
