use content::{EventItem, SiteSettings, SocialConfig};
use dioxus::prelude::*;

use crate::calendar::CalendarEmbed;
use crate::hero::{Divider, Hero};

/// Calendar with Calendar/Agenda tabs above the table of posted events.
#[component]
pub fn EventsPage(items: Vec<EventItem>, social: SocialConfig, settings: SiteSettings) -> Element {
    let settings = settings.with_social(&social);

    rsx! {
        Hero { pill: "Events", title: "Events",
            p { "Meetings, deadlines and union events." }
        }
        Divider { label: "Calendar" }
        CalendarEmbed {
            calendar_id: settings.calendar_id.clone(),
            timezone: settings.calendar_timezone.clone(),
            show_tabs: true,
        }
        Divider { label: "Events" }
        div { class: "person table-card",
            div { class: "info",
                table { class: "table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Title" }
                            th { "When" }
                            th { "Location" }
                            th { "Details" }
                        }
                    }
                    tbody {
                        if items.is_empty() {
                            tr {
                                td { colspan: "5", class: "small", "No events posted yet." }
                            }
                        }
                        for (i, event) in items.iter().enumerate() {
                            tr { key: "{i}",
                                td { "{event.date}" }
                                td {
                                    b { "{event.title}" }
                                }
                                td { "{event.when()}" }
                                td { "{event.location}" }
                                td { "{event.details}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
