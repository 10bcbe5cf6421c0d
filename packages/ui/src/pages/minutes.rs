use content::DocumentItem;
use dioxus::prelude::*;

use crate::hero::{Divider, EmptyState, Hero};
use crate::pages::documents::DocumentRow;

#[component]
pub fn MinutesPage(items: Vec<DocumentItem>) -> Element {
    rsx! {
        Hero { pill: "Minutes", title: "Meeting Minutes",
            p { "Approved minutes from association meetings." }
        }
        Divider { label: "Minutes" }
        if items.is_empty() {
            EmptyState { message: "No minutes posted yet." }
        } else {
            ul { class: "doc-list",
                for (i, doc) in items.iter().enumerate() {
                    DocumentRow { key: "{i}", doc: doc.clone() }
                }
            }
        }
    }
}
