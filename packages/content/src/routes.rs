//! Hash route table.
//!
//! Every page is selected by the URL fragment. Unknown or empty fragments
//! resolve to [`Route::Home`], so `#bogus` renders exactly what `#home` does.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    News,
    Events,
    Documents,
    Minutes,
    Officers,
    Directory,
    Resources,
    Contact,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Home,
        Route::News,
        Route::Events,
        Route::Documents,
        Route::Minutes,
        Route::Officers,
        Route::Directory,
        Route::Resources,
        Route::Contact,
    ];

    /// Resolve a URL fragment such as `#news`, `news` or `#/Staff`.
    pub fn from_fragment(fragment: &str) -> Self {
        let id = fragment.trim();
        let id = id.strip_prefix('#').unwrap_or(id);
        let id = id.strip_prefix('/').unwrap_or(id).to_ascii_lowercase();
        match id.as_str() {
            "news" => Route::News,
            "events" => Route::Events,
            "documents" | "docs" => Route::Documents,
            "minutes" => Route::Minutes,
            "officers" => Route::Officers,
            "directory" | "staff" => Route::Directory,
            "resources" => Route::Resources,
            "contact" => Route::Contact,
            _ => Route::Home,
        }
    }

    /// Canonical fragment identifier (without `#`).
    pub fn id(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::News => "news",
            Route::Events => "events",
            Route::Documents => "documents",
            Route::Minutes => "minutes",
            Route::Officers => "officers",
            Route::Directory => "directory",
            Route::Resources => "resources",
            Route::Contact => "contact",
        }
    }

    /// Link target, e.g. `#news`.
    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::News => "News",
            Route::Events => "Events",
            Route::Documents => "Documents",
            Route::Minutes => "Minutes",
            Route::Officers => "Union Officers",
            Route::Directory => "Staff Directory",
            Route::Resources => "NYSUT & Links",
            Route::Contact => "Contact",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// An entry in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

/// Navigation links, in display order.
pub const NAV_ITEMS: [NavItem; 9] = [
    NavItem {
        route: Route::Home,
        label: "Home",
    },
    NavItem {
        route: Route::News,
        label: "News",
    },
    NavItem {
        route: Route::Events,
        label: "Events",
    },
    NavItem {
        route: Route::Documents,
        label: "Documents",
    },
    NavItem {
        route: Route::Minutes,
        label: "Minutes",
    },
    NavItem {
        route: Route::Officers,
        label: "Union Officers",
    },
    NavItem {
        route: Route::Directory,
        label: "Staff Directory",
    },
    NavItem {
        route: Route::Resources,
        label: "NYSUT & Links",
    },
    NavItem {
        route: Route::Contact,
        label: "Contact",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_fragments() {
        for route in Route::ALL {
            assert_eq!(Route::from_fragment(&route.href()), route);
            assert_eq!(Route::from_fragment(route.id()), route);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Route::from_fragment("#docs"), Route::Documents);
        assert_eq!(Route::from_fragment("#staff"), Route::Directory);
        assert_eq!(Route::from_fragment("#/News"), Route::News);
    }

    #[test]
    fn test_unknown_and_empty_fall_back_to_home() {
        assert_eq!(Route::from_fragment("#bogus"), Route::Home);
        assert_eq!(Route::from_fragment(""), Route::Home);
        assert_eq!(Route::from_fragment("#"), Route::Home);
    }

    #[test]
    fn test_nav_items_cover_every_route() {
        for route in Route::ALL {
            let item = NAV_ITEMS.iter().find(|n| n.route == route).unwrap();
            assert_eq!(item.label, route.label());
        }
    }
}
