use content::NAV_ITEMS;
use dioxus::prelude::*;

use crate::app_state::use_app_state;
use crate::browser;

/// Site navigation with the mobile menu toggle.
///
/// Clicks inside the nav stop propagating so the shell's outside-click
/// handler only sees clicks elsewhere on the page.
#[component]
pub fn Navbar() -> Element {
    let mut state = use_app_state();
    let current = state.route.read().route;
    let menu = *state.menu.read();

    rsx! {
        div {
            class: "nav-wrap",
            onclick: move |evt: MouseEvent| evt.stop_propagation(),
            button {
                r#type: "button",
                class: "menu-toggle",
                aria_label: "Toggle navigation",
                aria_controls: "site-nav",
                aria_expanded: menu.aria_expanded(),
                onclick: move |_| state.menu.write().toggle(),
                span { class: "menu-bar" }
                span { class: "menu-bar" }
                span { class: "menu-bar" }
            }
            nav {
                id: "site-nav",
                class: menu.class(),
                aria_label: "Main",
                for item in NAV_ITEMS {
                    a {
                        key: "{item.route}",
                        href: item.route.href(),
                        class: if item.route == current { "active" } else { "" },
                        onclick: move |_| {
                            state.menu.write().select_link();
                            browser::set_fragment(item.route.id());
                        },
                        "{item.label}"
                    }
                }
            }
        }
    }
}
