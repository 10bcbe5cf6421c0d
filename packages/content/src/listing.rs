//! # Listing rules
//!
//! Ordering, filtering and grouping applied to loaded records before they are
//! rendered. Dates are compared as plain strings, so ordering is only meaningful
//! for consistently ISO-formatted dates (`YYYY-MM-DD`). All sorts are stable.

use crate::models::{DocumentItem, EventItem, NewsItem, OfficerRecord, ResourceLink, StaffMember};

/// Value of the building dropdown option that disables the building filter.
///
/// Empty so that no building name, not even `"all"`, collides with it.
pub const ALL_BUILDINGS: &str = "";

/// Category used for resources and documents that don't name one.
pub const GENERAL_CATEGORY: &str = "General";

/// News, newest first.
pub fn sort_news(mut news: Vec<NewsItem>) -> Vec<NewsItem> {
    news.sort_by(|a, b| b.date.cmp(&a.date));
    news
}

/// Events, soonest first.
pub fn sort_events(mut events: Vec<EventItem>) -> Vec<EventItem> {
    events.sort_by(|a, b| a.date.cmp(&b.date));
    events
}

/// First `n` items of an already sorted list.
pub fn latest<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items.iter().take(n).cloned().collect()
}

/// Building selection in the staff directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BuildingFilter {
    #[default]
    All,
    Only(String),
}

impl BuildingFilter {
    /// Parse a dropdown value. The empty [`ALL_BUILDINGS`] sentinel selects everyone.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_BUILDINGS {
            BuildingFilter::All
        } else {
            BuildingFilter::Only(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            BuildingFilter::All => ALL_BUILDINGS,
            BuildingFilter::Only(building) => building,
        }
    }

    fn matches(&self, member: &StaffMember) -> bool {
        match self {
            BuildingFilter::All => true,
            BuildingFilter::Only(building) => member.building == *building,
        }
    }
}

/// Staff whose name contains `term` (case-insensitive) and who are in the selected building.
pub fn filter_staff<'a>(
    staff: &'a [StaffMember],
    term: &str,
    building: &BuildingFilter,
) -> Vec<&'a StaffMember> {
    let term = term.to_lowercase();
    staff
        .iter()
        .filter(|m| m.name.to_lowercase().contains(&term))
        .filter(|m| building.matches(m))
        .collect()
}

/// Distinct, non-empty building names, sorted.
pub fn buildings(staff: &[StaffMember]) -> Vec<String> {
    let mut names: Vec<String> = staff
        .iter()
        .map(|m| m.building.clone())
        .filter(|b| !b.trim().is_empty())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Whether a document is for members only.
pub fn is_restricted(doc: &DocumentItem) -> bool {
    let text = format!("{} {}", doc.category, doc.note()).to_lowercase();
    text.contains("restricted") || text.contains("member")
}

/// Resources grouped by category, categories in order of first appearance.
pub fn group_resources(resources: &[ResourceLink]) -> Vec<(String, Vec<ResourceLink>)> {
    group_by(resources, |r| &r.category)
}

/// Documents grouped by category, categories in order of first appearance.
pub fn group_documents(documents: &[DocumentItem]) -> Vec<(String, Vec<DocumentItem>)> {
    group_by(documents, |d| &d.category)
}

fn group_by<T, F>(items: &[T], category: F) -> Vec<(String, Vec<T>)>
where
    T: Clone,
    F: Fn(&T) -> &String,
{
    let mut groups: Vec<(String, Vec<T>)> = Vec::new();
    for item in items {
        let name = match category(item).trim() {
            "" => GENERAL_CATEGORY.to_string(),
            name => name.to_string(),
        };
        match groups.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, members)) => members.push(item.clone()),
            None => groups.push((name, vec![item.clone()])),
        }
    }
    groups
}

/// Meeting minutes: documents whose category mentions minutes.
pub fn minutes(documents: &[DocumentItem]) -> Vec<DocumentItem> {
    documents
        .iter()
        .filter(|d| d.category.to_lowercase().contains("minutes"))
        .cloned()
        .collect()
}

/// An officer with the photo found for them in the staff directory.
#[derive(Clone, Debug, PartialEq)]
pub struct OfficerCard {
    pub name: String,
    pub title: String,
    pub photo: Option<String>,
    pub initials: String,
}

/// Pair each officer with a staff photo, matching names case- and whitespace-insensitively.
pub fn resolve_officers(officers: &[OfficerRecord], staff: &[StaffMember]) -> Vec<OfficerCard> {
    officers
        .iter()
        .map(|officer| {
            let key = name_key(&officer.name);
            let photo = staff
                .iter()
                .find(|m| !key.is_empty() && name_key(&m.name) == key)
                .map(|m| m.photo.trim().to_string())
                .filter(|p| !p.is_empty());
            OfficerCard {
                name: officer.name.clone(),
                title: officer.title.clone(),
                photo,
                initials: initials(&officer.name),
            }
        })
        .collect()
}

fn name_key(name: &str) -> String {
    name.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Up to two initials from a name, for photo placeholders.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn news(title: &str, date: &str) -> NewsItem {
        NewsItem {
            title: title.into(),
            date: date.into(),
            ..Default::default()
        }
    }

    fn event(title: &str, date: &str) -> EventItem {
        EventItem {
            title: title.into(),
            date: date.into(),
            ..Default::default()
        }
    }

    fn member(name: &str, building: &str) -> StaffMember {
        StaffMember {
            name: name.into(),
            building: building.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_news_descending() {
        let sorted = sort_news(vec![news("A", "2024-01-01"), news("B", "2024-06-01")]);
        let titles: Vec<_> = sorted.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["B", "A"]);
    }

    #[test]
    fn test_sort_events_ascending_and_stable() {
        let sorted = sort_events(vec![
            event("C", "2024-09-10"),
            event("A", "2024-03-01"),
            event("B", "2024-03-01"),
        ]);
        let titles: Vec<_> = sorted.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn test_latest_takes_prefix() {
        let items = vec![1, 2, 3, 4];
        assert_eq!(latest(&items, 3), vec![1, 2, 3]);
        assert_eq!(latest(&items[..1], 3), vec![1]);
    }

    #[test]
    fn test_filter_staff_by_name_and_building() {
        let staff = vec![
            member("Ana Lopez", "Elementary"),
            member("Ben Ward", "High School"),
            member("Lana Ortiz", "High School"),
        ];

        let all = filter_staff(&staff, "", &BuildingFilter::All);
        assert_eq!(all.len(), 3);

        let by_name = filter_staff(&staff, "ANA", &BuildingFilter::All);
        let names: Vec<_> = by_name.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Ana Lopez", "Lana Ortiz"]);

        let high = BuildingFilter::from_value("High School");
        let both = filter_staff(&staff, "ana", &high);
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].name, "Lana Ortiz");
    }

    #[test]
    fn test_filter_staff_is_idempotent() {
        let staff = vec![member("Ana Lopez", "Elementary"), member("Ben Ward", "Elementary")];
        let filter = BuildingFilter::from_value("Elementary");
        let once: Vec<StaffMember> = filter_staff(&staff, "b", &filter)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_staff(&once, "b", &filter);
        assert_eq!(twice.len(), once.len());
        assert_eq!(twice[0], &once[0]);
    }

    #[test]
    fn test_building_filter_sentinel() {
        assert_eq!(BuildingFilter::from_value(ALL_BUILDINGS), BuildingFilter::All);
        assert_eq!(BuildingFilter::All.value(), "");
        assert_eq!(BuildingFilter::from_value("Annex").value(), "Annex");
    }

    #[test]
    fn test_building_named_all_is_selectable() {
        let staff = vec![member("Ana", "all"), member("Ben", "High")];
        let filter = BuildingFilter::from_value("all");
        assert_eq!(filter, BuildingFilter::Only("all".into()));
        let hits = filter_staff(&staff, "", &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ana");
    }

    #[test]
    fn test_buildings_distinct_sorted() {
        let staff = vec![
            member("A", "Middle"),
            member("B", "Elementary"),
            member("C", "Middle"),
            member("D", " "),
        ];
        assert_eq!(buildings(&staff), vec!["Elementary", "Middle"]);
    }

    #[test]
    fn test_is_restricted() {
        let public = DocumentItem {
            title: "Calendar".into(),
            category: "District".into(),
            ..Default::default()
        };
        let by_category = DocumentItem {
            category: "Restricted".into(),
            ..Default::default()
        };
        let by_note = DocumentItem {
            notes: "Members only – log in".into(),
            ..Default::default()
        };
        assert!(!is_restricted(&public));
        assert!(is_restricted(&by_category));
        assert!(is_restricted(&by_note));
    }

    #[test]
    fn test_group_resources_keeps_first_seen_order() {
        let link = |title: &str, category: &str| ResourceLink {
            title: title.into(),
            category: category.into(),
            ..Default::default()
        };
        let groups = group_resources(&[
            link("NYSUT", "State"),
            link("AFT", "National"),
            link("Benefits", "State"),
            link("Misc", ""),
        ]);
        let names: Vec<_> = groups.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["State", "National", GENERAL_CATEGORY]);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_minutes_filter() {
        let docs = vec![
            DocumentItem {
                title: "Sept".into(),
                category: "Meeting Minutes".into(),
                ..Default::default()
            },
            DocumentItem {
                title: "CBA".into(),
                category: "Contract".into(),
                ..Default::default()
            },
        ];
        let found = minutes(&docs);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Sept");
    }

    #[test]
    fn test_resolve_officers_photo_by_name() {
        let officers = vec![
            OfficerRecord::new("Jane  Doe", "President"),
            OfficerRecord::new("Sam Roe", "Treasurer"),
        ];
        let staff = vec![StaffMember {
            name: "jane doe".into(),
            photo: "img/staff/jane.jpg".into(),
            ..Default::default()
        }];
        let cards = resolve_officers(&officers, &staff);
        assert_eq!(cards[0].photo.as_deref(), Some("img/staff/jane.jpg"));
        assert_eq!(cards[1].photo, None);
        assert_eq!(cards[1].initials, "SR");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("ana maria lopez"), "AM");
        assert_eq!(initials(""), "");
    }
}
