//! # Content crate: data model and page logic for the member hub
//!
//! Everything the site knows about its content lives here, independent of how it
//! is rendered. The `ui` crate turns these types into markup; the `social` crate
//! writes the Instagram record that the home page reads back.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Records loaded from `data/*.json` (news, events, documents, staff, resources, officers, social config, Instagram post). Every field is optional and leniently decoded. |
//! | [`loader`] | [`DataSource`] trait with HTTP and in-memory backends, plus [`fetch_json`] / [`safe_load`]. |
//! | [`listing`] | Sorting, filtering and grouping rules applied before rendering. |
//! | [`routes`] | Hash route table and navigation items. |
//! | [`navigation`] | Route generation tokens and the mobile menu state machine. |
//! | [`embeds`] | Calendar, form and Instagram URL builders. |
//! | [`config`] | [`SiteSettings`] parsed from `site.toml`. |
//! | [`pages`] | [`PageData`] and [`load_page`], the per-route data loading. |
//! | [`sanitize`] | Link and attribute-text cleaning for values rendered into HTML attributes. |

pub mod config;
pub mod embeds;
pub mod listing;
pub mod loader;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod routes;
pub mod sanitize;

mod lenient;

pub use config::SiteSettings;
pub use embeds::CalendarMode;
pub use listing::BuildingFilter;
pub use loader::{fetch_json, safe_load, DataSource, HttpSource, LoadError, MemorySource, Source};
pub use models::{
    DocumentItem, EventItem, InstagramPost, NewsItem, OfficerRecord, ResourceLink, SocialConfig,
    StaffMember,
};
pub use navigation::{MenuState, RenderTicket, RouteState};
pub use pages::{load_page, PageData};
pub use routes::{NavItem, Route, NAV_ITEMS};
