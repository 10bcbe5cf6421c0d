use content::pages::HomeData;
use content::{Route, SiteSettings};
use dioxus::prelude::*;

use crate::calendar::CalendarEmbed;
use crate::hero::{Divider, Hero};
use crate::instagram::InstagramCard;

#[component]
pub fn HomePage(data: HomeData, settings: SiteSettings) -> Element {
    let settings = settings.with_social(&data.social);
    let pinned_url = data.social.pinned_post_url().map(str::to_string);

    rsx! {
        Hero { pill: "Member hub", title: "{settings.title}",
            p {
                b { "Mission: " }
                "{settings.mission}"
                if !settings.mission_note.is_empty() {
                    " *"
                }
            }
            if !settings.mission_note.is_empty() {
                p {
                    em { "*{settings.mission_note}" }
                }
            }
        }

        Divider { label: "Latest" }

        div { class: "staff-grid",
            div { class: "person",
                div { class: "info",
                    div { class: "name", "Upcoming events" }
                    ul { class: "compact",
                        if data.upcoming_events.is_empty() {
                            li { "No events posted yet." }
                        }
                        for (i, event) in data.upcoming_events.iter().enumerate() {
                            li { key: "{i}",
                                b { "{event.title}" }
                                " — {event.date}"
                                if !event.when().is_empty() {
                                    " ({event.when()})"
                                }
                                if !event.location.is_empty() {
                                    " · {event.location}"
                                }
                            }
                        }
                    }
                    div { class: "small more",
                        a { href: Route::Events.href(), "View all events →" }
                    }
                }
            }
            div { class: "person",
                div { class: "info",
                    div { class: "name", "Latest updates" }
                    ul { class: "compact",
                        if data.latest_news.is_empty() {
                            li { "No updates posted yet." }
                        }
                        for (i, item) in data.latest_news.iter().enumerate() {
                            li { key: "{i}",
                                b { "{item.title}" }
                                " — {item.date}"
                            }
                        }
                    }
                    div { class: "small more",
                        a { href: Route::News.href(), "View all updates →" }
                    }
                }
            }
        }

        Divider { label: "Connect" }

        div { class: "staff-grid",
            div { class: "person",
                div { class: "info",
                    div { class: "name", "Follow us on Instagram" }
                    InstagramCard {
                        handle: settings.instagram_handle.clone(),
                        post: data.instagram.clone(),
                        pinned_url,
                    }
                }
            }
            div { class: "person",
                div { class: "info",
                    div { class: "name", "Union Calendar" }
                    CalendarEmbed {
                        calendar_id: settings.calendar_id.clone(),
                        timezone: settings.calendar_timezone.clone(),
                    }
                }
            }
        }
    }
}
