use content::listing;
use content::sanitize::safe_link;
use content::ResourceLink;
use dioxus::prelude::*;

use crate::hero::{Divider, EmptyState, Hero};

#[component]
pub fn ResourcesPage(links: Vec<ResourceLink>) -> Element {
    let groups = listing::group_resources(&links);

    rsx! {
        Hero { pill: "Resources", title: "NYSUT & Links",
            p { "Our state and national affiliates, benefits and member services." }
        }
        if groups.is_empty() {
            Divider { label: "Links" }
            EmptyState { message: "No links posted yet." }
        }
        for (category, links) in groups {
            section { key: "{category}", class: "resource-group",
                Divider { label: "{category}" }
                div { class: "staff-grid",
                    for (i, link) in links.iter().enumerate() {
                        div { key: "{i}", class: "person resource",
                            div { class: "info",
                                {match safe_link(&link.url) {
                                    Some(url) => rsx! {
                                        a {
                                            class: "name",
                                            href: "{url}",
                                            target: "_blank",
                                            rel: "noopener",
                                            "{link.title}"
                                        }
                                    },
                                    None => rsx! {
                                        div { class: "name", "{link.title}" }
                                    },
                                }}
                                if !link.description.is_empty() {
                                    p { class: "small", "{link.description}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
