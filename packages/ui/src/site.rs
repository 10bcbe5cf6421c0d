//! # Site shell
//!
//! [`Site`] provides the [`AppState`] and lays out the header, navigation and
//! content region. The content region holds one [`RoutedPage`] keyed by the
//! navigation generation, so every navigation (even to the same route) mounts
//! a fresh page that loads its own data.
//!
//! A page only commits what it loaded if its [`RenderTicket`] is still current
//! when the data arrives. Loads for a page the visitor already left are dropped.

use content::{load_page, PageData, RenderTicket};
use dioxus::prelude::*;

use crate::app_state::{use_browser_listeners, use_provide_app_state, AppState};
use crate::browser;
use crate::navbar::Navbar;
use crate::pages::PageView;
use crate::SITE_CSS;

#[component]
pub fn Site(settings: content::SiteSettings) -> Element {
    match use_provide_app_state(settings) {
        Ok(state) => rsx! { Shell { state } },
        Err(message) => {
            tracing::error!("site failed to start: {message}");
            rsx! { BootError { message } }
        }
    }
}

#[component]
fn Shell(state: AppState) -> Element {
    use_browser_listeners(state);
    let mut menu = state.menu;
    let ticket = state.route.read().ticket();
    let settings = state.settings.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: SITE_CSS }
        div {
            class: "site",
            onclick: move |_| {
                let breakpoint = state.breakpoint();
                menu.write().click_outside(browser::viewport_width(), breakpoint);
            },
            header { class: "topbar",
                a { class: "brand", href: "#home",
                    span { class: "badge", "{settings.short_name}" }
                    span { class: "brand-name", "{settings.title}" }
                }
                Navbar {}
            }
            main { id: "app",
                RoutedPage { key: "{ticket.generation}", ticket }
            }
            footer { class: "footer small",
                "© {settings.title}"
            }
        }
    }
}

/// Loads the data for `ticket` and shows it once loaded, if still current.
#[component]
pub fn RoutedPage(ticket: RenderTicket) -> Element {
    let state = use_context::<AppState>();
    let mut loaded = use_signal(|| None::<PageData>);

    use_hook(move || {
        spawn(async move {
            let source = state.source.peek().clone();
            let settings = state.settings.peek().clone();
            let data = load_page(ticket.route, &source, &settings).await;

            if state.route.peek().is_current(ticket) {
                loaded.set(Some(data));
            } else {
                tracing::debug!(
                    "dropping stale render of #{} (generation {})",
                    ticket.route,
                    ticket.generation
                );
            }
        });
    });

    match loaded() {
        Some(data) => {
            let settings = state.settings.read().clone();
            rsx! { PageView { data, settings } }
        }
        None => rsx! {
            div { class: "loading small", aria_busy: "true", "Loading…" }
        },
    }
}

/// Message shown in place of the site when it cannot start.
#[component]
pub fn BootError(message: String) -> Element {
    rsx! {
        main { id: "app",
            section { class: "hero error",
                h2 { "Something went wrong" }
                p { class: "sub", "{message}" }
            }
        }
    }
}
