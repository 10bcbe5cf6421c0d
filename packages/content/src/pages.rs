//! # Per-page data loading
//!
//! [`load_page`] fetches everything a route needs and returns it as [`PageData`],
//! already sorted for display. Each file is loaded independently through
//! [`safe_load`], so a missing file only empties its own section. Pages that need
//! several files issue the requests concurrently and render once all of them have
//! resolved or fallen back.

use futures::join;

use crate::config::SiteSettings;
use crate::listing::{self, OfficerCard};
use crate::loader::{safe_load, DataSource};
use crate::models::{
    default_officers, DocumentItem, EventItem, InstagramPost, NewsItem, OfficerRecord,
    ResourceLink, SocialConfig, StaffMember,
};
use crate::routes::Route;

/// Items shown in each list on the home page.
pub const HOME_LIST_LEN: usize = 3;

/// Data behind the home page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeData {
    pub latest_news: Vec<NewsItem>,
    pub upcoming_events: Vec<EventItem>,
    pub social: SocialConfig,
    pub instagram: InstagramPost,
}

/// Loaded content for one route.
#[derive(Clone, Debug, PartialEq)]
pub enum PageData {
    Home(HomeData),
    News(Vec<NewsItem>),
    Events(Vec<EventItem>, SocialConfig),
    Documents(Vec<DocumentItem>),
    Minutes(Vec<DocumentItem>),
    Officers(Vec<OfficerCard>),
    Directory(Vec<StaffMember>),
    Resources(Vec<ResourceLink>),
    Contact,
}

impl PageData {
    pub fn route(&self) -> Route {
        match self {
            PageData::Home(_) => Route::Home,
            PageData::News(_) => Route::News,
            PageData::Events(..) => Route::Events,
            PageData::Documents(_) => Route::Documents,
            PageData::Minutes(_) => Route::Minutes,
            PageData::Officers(_) => Route::Officers,
            PageData::Directory(_) => Route::Directory,
            PageData::Resources(_) => Route::Resources,
            PageData::Contact => Route::Contact,
        }
    }
}

/// Load and prepare the data for `route`.
pub async fn load_page<S: DataSource>(
    route: Route,
    source: &S,
    settings: &SiteSettings,
) -> PageData {
    let path = |file: &str| settings.data_path(file);
    match route {
        Route::Home => {
            let (news, events, social, instagram) = (
                path("news.json"),
                path("events.json"),
                path("social.json"),
                path("instagram.json"),
            );
            let (news, events, social, instagram) = join!(
                safe_load(source, &news, Vec::<NewsItem>::new()),
                safe_load(source, &events, Vec::<EventItem>::new()),
                safe_load(source, &social, SocialConfig::default()),
                safe_load(source, &instagram, InstagramPost::default()),
            );
            PageData::Home(HomeData {
                latest_news: listing::latest(&listing::sort_news(news), HOME_LIST_LEN),
                upcoming_events: listing::latest(&listing::sort_events(events), HOME_LIST_LEN),
                social,
                instagram,
            })
        }
        Route::News => {
            let news = safe_load(source, &path("news.json"), Vec::new()).await;
            PageData::News(listing::sort_news(news))
        }
        Route::Events => {
            let (events, social) = (path("events.json"), path("social.json"));
            let (events, social) = join!(
                safe_load(source, &events, Vec::<EventItem>::new()),
                safe_load(source, &social, SocialConfig::default()),
            );
            PageData::Events(listing::sort_events(events), social)
        }
        Route::Documents => {
            PageData::Documents(safe_load(source, &path("documents.json"), Vec::new()).await)
        }
        Route::Minutes => {
            let documents: Vec<DocumentItem> =
                safe_load(source, &path("documents.json"), Vec::new()).await;
            PageData::Minutes(listing::minutes(&documents))
        }
        Route::Officers => {
            let (officers, staff) = (path("officers.json"), path("staff.json"));
            let (officers, staff) = join!(
                safe_load(source, &officers, Vec::<OfficerRecord>::new()),
                safe_load(source, &staff, Vec::<StaffMember>::new()),
            );
            let officers = if officers.is_empty() {
                default_officers()
            } else {
                officers
            };
            PageData::Officers(listing::resolve_officers(&officers, &staff))
        }
        Route::Directory => {
            PageData::Directory(safe_load(source, &path("staff.json"), Vec::new()).await)
        }
        Route::Resources => {
            PageData::Resources(safe_load(source, &path("resources.json"), Vec::new()).await)
        }
        Route::Contact => PageData::Contact,
    }
}
