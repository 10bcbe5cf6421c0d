use content::listing::OfficerCard;
use content::sanitize::{attr_text, safe_link};
use dioxus::prelude::*;

use crate::hero::{Divider, Hero};

#[component]
pub fn OfficersPage(officers: Vec<OfficerCard>) -> Element {
    rsx! {
        Hero { pill: "Leadership", title: "Union Officers",
            p { "Your elected officers. Reach out with questions about the contract or your rights." }
        }
        Divider { label: "Officers" }
        div { class: "staff-grid",
            for (i, officer) in officers.iter().enumerate() {
                div { key: "{i}", class: "person officer",
                    {match officer.photo.as_deref().and_then(safe_link) {
                        Some(photo) => rsx! {
                            img { class: "avatar", src: "{photo}", alt: attr_text(&officer.name) }
                        },
                        None => rsx! {
                            div {
                                class: "avatar initials",
                                aria_hidden: "true",
                                "{officer.initials}"
                            }
                        },
                    }}
                    div { class: "info",
                        div { class: "name", "{officer.name}" }
                        div { class: "small role", "{officer.title}" }
                    }
                }
            }
        }
    }
}
