//! This crate contains all UI for the member hub: the site shell, the
//! navigation and one component per page.

use dioxus::prelude::*;

pub const SITE_CSS: Asset = asset!("/assets/styling/site.css");

mod app_state;
pub use app_state::{use_app_state, use_browser_listeners, use_provide_app_state, AppState};

pub mod browser;

mod site;
pub use site::{BootError, RoutedPage, Site};

mod navbar;
pub use navbar::Navbar;

mod hero;
pub use hero::{Divider, EmptyState, Hero};

mod calendar;
pub use calendar::CalendarEmbed;

mod instagram;
pub use instagram::InstagramCard;

pub mod pages;
pub use pages::PageView;
