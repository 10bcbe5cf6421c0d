//! Shared state for the site shell and its pages.

use content::{MenuState, Route, RouteState, SiteSettings, Source};
use dioxus::prelude::*;

use crate::browser;

/// Signals shared through context by every component under [`crate::Site`].
#[derive(Clone, Copy, PartialEq)]
pub struct AppState {
    pub route: Signal<RouteState>,
    pub menu: Signal<MenuState>,
    pub settings: Signal<SiteSettings>,
    pub source: Signal<Source>,
}

impl AppState {
    /// Re-read the location fragment and start a new render generation.
    pub fn sync_route(&mut self) {
        let route = Route::from_fragment(&browser::current_fragment());
        let ticket = self.route.write().navigate(route);
        tracing::debug!("route #{} (generation {})", ticket.route, ticket.generation);
    }

    pub fn breakpoint(&self) -> f64 {
        self.settings.peek().mobile_breakpoint
    }
}

/// Get the shared app state. Panics outside of [`crate::Site`].
pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}

/// Build the app state for `settings` and provide it to child components.
///
/// Fails when no data source can be built, e.g. an invalid `base_url`.
pub fn use_provide_app_state(settings: SiteSettings) -> Result<AppState, String> {
    use_hook(move || {
        let source = browser::data_source(&settings).map_err(|e| e.to_string())?;
        let route = Route::from_fragment(&browser::current_fragment());
        Ok(provide_context(AppState {
            route: Signal::new(RouteState::new(route)),
            menu: Signal::new(MenuState::default()),
            settings: Signal::new(settings),
            source: Signal::new(source),
        }))
    })
}

/// Install the browser listeners once per app.
pub fn use_browser_listeners(state: AppState) {
    use_hook(move || {
        let mut on_hash = state;
        let mut on_escape = state;
        browser::listen(
            move || {
                on_hash.sync_route();
                on_hash.menu.write().select_link();
            },
            move || {
                let breakpoint = on_escape.breakpoint();
                on_escape.menu.write().escape(browser::viewport_width(), breakpoint);
            },
        );
    });
}
