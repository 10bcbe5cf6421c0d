use content::sanitize::attr_text;
use dioxus::prelude::*;

/// Page header block: optional pill label, title and free-form body.
#[component]
pub fn Hero(#[props(default)] pill: String, title: String, children: Element) -> Element {
    rsx! {
        section { class: "hero",
            if !pill.is_empty() {
                div { class: "pill-row",
                    span { class: "pill", "{pill}" }
                }
            }
            h2 { "{title}" }
            div { class: "sub", {children} }
        }
    }
}

/// Labelled rule between page sections.
#[component]
pub fn Divider(label: String) -> Element {
    rsx! {
        div { class: "divider", role: "separator", aria_label: attr_text(&label),
            span { class: "dot", aria_hidden: "true" }
            span { class: "label", "{label}" }
            span { class: "dot", aria_hidden: "true" }
        }
    }
}

/// Muted placeholder shown when a list has nothing to show.
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        p { class: "small empty", "{message}" }
    }
}
