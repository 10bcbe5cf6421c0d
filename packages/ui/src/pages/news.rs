use content::NewsItem;
use dioxus::prelude::*;

use crate::hero::{Divider, EmptyState, Hero};

/// All news, newest first.
#[component]
pub fn NewsPage(items: Vec<NewsItem>) -> Element {
    rsx! {
        Hero { pill: "News", title: "News",
            p { "Updates and announcements from the association." }
        }
        Divider { label: "News" }
        section { class: "news-list",
            if items.is_empty() {
                EmptyState { message: "No updates posted yet." }
            }
            for (i, item) in items.iter().enumerate() {
                article { key: "{i}", class: "person news-item",
                    div { class: "info",
                        div { class: "name", "{item.title}" }
                        if !item.date.is_empty() {
                            div { class: "small", "{item.date}" }
                        }
                        if !item.body.is_empty() {
                            p { "{item.body}" }
                        }
                        if !item.tags.is_empty() {
                            div { class: "tags",
                                for tag in item.tags.iter() {
                                    span { key: "{tag}", class: "pill tag", "{tag}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
