use content::listing::{self, ALL_BUILDINGS};
use content::sanitize::{attr_text, safe_link};
use content::{BuildingFilter, StaffMember};
use dioxus::prelude::*;

use crate::hero::{Divider, Hero};

/// Staff directory with name search and building filter.
///
/// Only the result grid and count react to the controls; the staff list itself
/// is loaded once per navigation. Building options carry their index as value,
/// so building names never land in an attribute.
#[component]
pub fn DirectoryPage(staff: Vec<StaffMember>) -> Element {
    let mut search = use_signal(String::new);
    let mut building = use_signal(BuildingFilter::default);

    let term = search();
    let filter = building();
    let buildings = listing::buildings(&staff);
    let choices = buildings.clone();
    let matches = listing::filter_staff(&staff, &term, &filter);
    let count = matches.len();
    let total = staff.len();

    rsx! {
        Hero { pill: "Directory", title: "Staff Directory",
            p { "Find colleagues by name or building." }
        }
        Divider { label: "Staff" }
        div { class: "directory-controls",
            input {
                r#type: "search",
                class: "search",
                placeholder: "Search by name",
                aria_label: "Search staff by name",
                value: "{term}",
                oninput: move |evt| search.set(evt.value()),
            }
            select {
                class: "building-filter",
                aria_label: "Filter by building",
                onchange: move |evt| {
                    let chosen = evt
                        .value()
                        .parse::<usize>()
                        .ok()
                        .and_then(|i| choices.get(i))
                        .map_or(ALL_BUILDINGS, String::as_str);
                    building.set(BuildingFilter::from_value(chosen));
                },
                option {
                    value: ALL_BUILDINGS,
                    selected: filter == BuildingFilter::All,
                    "All buildings"
                }
                for (i, name) in buildings.into_iter().enumerate() {
                    option {
                        key: "{i}",
                        value: "{i}",
                        selected: filter.value() == name,
                        "{name}"
                    }
                }
            }
        }
        p { class: "small result-count", "Showing {count} of {total}" }
        div { class: "staff-grid",
            for (i, member) in matches.into_iter().enumerate() {
                StaffCard { key: "{i}", member: member.clone() }
            }
        }
    }
}

#[component]
pub fn StaffCard(member: StaffMember) -> Element {
    let photo = safe_link(&member.photo);
    let initials = listing::initials(&member.name);
    let alt = attr_text(&member.name);
    let mailto = safe_link(&format!("mailto:{}", member.email.trim()));
    rsx! {
        div { class: "person",
            {match photo {
                Some(photo) => rsx! {
                    img { class: "avatar", src: "{photo}", alt: "{alt}" }
                },
                None => rsx! {
                    div { class: "avatar initials", aria_hidden: "true", "{initials}" }
                },
            }}
            div { class: "info",
                div { class: "name", "{member.name}" }
                if !member.role.is_empty() {
                    div { class: "small role", "{member.role}" }
                }
                if !member.building.is_empty() {
                    div { class: "small", "{member.building}" }
                }
                if !member.email.trim().is_empty() {
                    {match mailto {
                        Some(href) => rsx! {
                            a { class: "small", href: "{href}", "{member.email}" }
                        },
                        None => rsx! {
                            span { class: "small", "{member.email}" }
                        },
                    }}
                }
            }
        }
    }
}
