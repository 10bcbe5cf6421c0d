//! One component per route. Each takes already-loaded data as props, so the
//! pages render the same way in the browser and under server-side rendering.
//!
//! Text from data files is escaped by the renderer. Attribute values are not,
//! so links, image sources and alt text from data go through
//! [`content::sanitize`] before they reach an attribute.

use content::{PageData, SiteSettings};
use dioxus::prelude::*;

mod contact;
mod directory;
mod documents;
mod events;
mod home;
mod minutes;
mod news;
mod officers;
mod resources;

pub use contact::ContactPage;
pub use directory::{DirectoryPage, StaffCard};
pub use documents::{DocumentRow, DocumentsPage};
pub use events::EventsPage;
pub use home::HomePage;
pub use minutes::MinutesPage;
pub use news::NewsPage;
pub use officers::OfficersPage;
pub use resources::ResourcesPage;

/// Render the page for loaded route data.
#[component]
pub fn PageView(data: PageData, settings: SiteSettings) -> Element {
    match data {
        PageData::Home(home) => rsx! { HomePage { data: home, settings } },
        PageData::News(items) => rsx! { NewsPage { items } },
        PageData::Events(items, social) => rsx! { EventsPage { items, social, settings } },
        PageData::Documents(items) => rsx! { DocumentsPage { items } },
        PageData::Minutes(items) => rsx! { MinutesPage { items } },
        PageData::Officers(officers) => rsx! { OfficersPage { officers } },
        PageData::Directory(staff) => rsx! { DirectoryPage { staff } },
        PageData::Resources(links) => rsx! { ResourcesPage { links } },
        PageData::Contact => rsx! {
            ContactPage { form_url: settings.contact_form_url.clone() }
        },
    }
}
