//! # Navigation state
//!
//! ## Render generations
//!
//! Every navigation bumps [`RouteState::generation`]. A page render takes a
//! [`RenderTicket`] when it starts loading; when its data arrives it may only
//! replace the content region if [`RouteState::is_current`] still holds. A slow
//! fetch from a page the visitor already left is dropped instead of overwriting
//! the page they are now on.
//!
//! ## Mobile menu
//!
//! [`MenuState`] is the open/closed toggle of the navigation on small viewports.
//! It opens only through the toggle button. It closes through the toggle, by
//! following any nav link, and (on small viewports only) by clicking outside the
//! nav or pressing Escape. The viewport width is passed in at each interaction.

use crate::routes::Route;

/// Viewports at or below this width (px) use the collapsible menu.
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;

/// Proof that a render was started for a particular navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderTicket {
    pub route: Route,
    pub generation: u64,
}

/// The current route and its navigation generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteState {
    pub route: Route,
    pub generation: u64,
}

impl RouteState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            generation: 1,
        }
    }

    /// Record a navigation (including to the same route) and return its ticket.
    pub fn navigate(&mut self, route: Route) -> RenderTicket {
        self.route = route;
        self.generation = self.generation.wrapping_add(1);
        self.ticket()
    }

    /// Ticket for the navigation currently shown.
    pub fn ticket(&self) -> RenderTicket {
        RenderTicket {
            route: self.route,
            generation: self.generation,
        }
    }

    /// Whether a render started under `ticket` may still commit its output.
    pub fn is_current(&self, ticket: RenderTicket) -> bool {
        self.generation == ticket.generation && self.route == ticket.route
    }
}

/// Open/closed state of the collapsible navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// CSS class for the nav element.
    pub fn class(&self) -> &'static str {
        if self.open {
            "nav open"
        } else {
            "nav"
        }
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn select_link(&mut self) {
        self.open = false;
    }

    pub fn click_outside(&mut self, viewport_width: f64, breakpoint: f64) {
        if is_small_viewport(viewport_width, breakpoint) {
            self.open = false;
        }
    }

    pub fn escape(&mut self, viewport_width: f64, breakpoint: f64) {
        if is_small_viewport(viewport_width, breakpoint) {
            self.open = false;
        }
    }
}

pub fn is_small_viewport(width: f64, breakpoint: f64) -> bool {
    width <= breakpoint
}
