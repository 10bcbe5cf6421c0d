use content::listing;
use content::sanitize::safe_link;
use content::DocumentItem;
use dioxus::prelude::*;

use crate::hero::{Divider, EmptyState, Hero};

#[component]
pub fn DocumentsPage(items: Vec<DocumentItem>) -> Element {
    let groups = listing::group_documents(&items);

    rsx! {
        Hero { pill: "Documents", title: "Documents",
            p { "Contracts, policies and forms. Items marked members only need a union login to open." }
        }
        if groups.is_empty() {
            Divider { label: "Documents" }
            EmptyState { message: "No documents posted yet." }
        }
        for (category, docs) in groups {
            section { key: "{category}", class: "doc-group",
                Divider { label: "{category}" }
                ul { class: "doc-list",
                    for (i, doc) in docs.iter().enumerate() {
                        DocumentRow { key: "{i}", doc: doc.clone() }
                    }
                }
            }
        }
    }
}

/// One document: linked title when it has a URL, members-only badge, note.
#[component]
pub fn DocumentRow(doc: DocumentItem) -> Element {
    let restricted = listing::is_restricted(&doc);
    let link = safe_link(&doc.url);

    rsx! {
        li { class: "doc",
            {match link {
                Some(url) => rsx! {
                    a { href: "{url}", target: "_blank", rel: "noopener",
                        b { "{doc.title}" }
                    }
                },
                None => rsx! {
                    b { "{doc.title}" }
                },
            }}
            if restricted {
                span { class: "pill restricted", "Members only" }
            }
            if !doc.note().is_empty() {
                div { class: "small", "{doc.note()}" }
            }
        }
    }
}
