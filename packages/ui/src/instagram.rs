//! Instagram preview card.
//!
//! Shows, in order of preference: the post pinned in `social.json`, the latest
//! post recorded by the refresh job, or a "coming soon" placeholder. The follow
//! button is always there.

use content::embeds::instagram_profile_url;
use content::sanitize::{attr_text, safe_link};
use content::InstagramPost;
use dioxus::prelude::*;

#[component]
pub fn InstagramCard(
    handle: String,
    post: InstagramPost,
    #[props(!optional)] pinned_url: Option<String>,
) -> Element {
    let profile = instagram_profile_url(&handle);
    let handle = handle.trim_start_matches('@').to_string();

    let preview = match pinned_url.as_deref().and_then(safe_link) {
        Some(url) => rsx! {
            a { class: "ig-post", href: "{url}", target: "_blank", rel: "noopener",
                "View the pinned post on Instagram"
            }
        },
        None if !post.is_empty() => {
            let title = if post.title.is_empty() {
                format!("@{handle} on Instagram")
            } else {
                post.title.clone()
            };
            let href = safe_link(&post.post_url).unwrap_or_else(|| profile.clone());
            let image = safe_link(&post.image_url);
            rsx! {
                a { class: "ig-post", href: "{href}", target: "_blank", rel: "noopener",
                    {image.map(|image| rsx! {
                        img { class: "ig-image", src: "{image}", alt: attr_text(&title) }
                    })}
                    b { "{title}" }
                    if !post.description.is_empty() {
                        p { class: "small", "{post.description}" }
                    }
                }
            }
        }
        None => rsx! {
            p { class: "small empty", "Instagram preview coming soon." }
        },
    };

    rsx! {
        div { class: "card instagram",
            h3 { "Instagram" }
            {preview}
            a { class: "btn", href: "{profile}", target: "_blank", rel: "noopener",
                "Follow @{handle}"
            }
        }
    }
}
