//! # Content records
//!
//! Each `data/*.json` file holds a list (or, for the social files, a single object)
//! of the records below. Nothing is validated beyond shape: every field is optional,
//! a missing field decodes to an empty string, and scalar values of the wrong type
//! are turned into text instead of failing the whole file.
//!
//! | File | Record |
//! |------|--------|
//! | `news.json` | [`NewsItem`] |
//! | `events.json` | [`EventItem`] |
//! | `documents.json` | [`DocumentItem`] |
//! | `staff.json` | [`StaffMember`] |
//! | `resources.json` | [`ResourceLink`] |
//! | `officers.json` | [`OfficerRecord`] |
//! | `social.json` | [`SocialConfig`] |
//! | `instagram.json` | [`InstagramPost`] (written by the `refresh-instagram` job) |

use serde::{Deserialize, Serialize};

use crate::lenient;

/// A news post or announcement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub body: String,
    #[serde(deserialize_with = "lenient::strings")]
    pub tags: Vec<String>,
}

/// A scheduled union event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventItem {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub time: String,
    #[serde(deserialize_with = "lenient::string")]
    pub start: String,
    #[serde(deserialize_with = "lenient::string")]
    pub end: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(deserialize_with = "lenient::string")]
    pub details: String,
}

impl EventItem {
    /// Display time: `time` if set, otherwise `start – end`, or whichever of the two is set.
    pub fn when(&self) -> String {
        if !self.time.trim().is_empty() {
            return self.time.trim().to_string();
        }
        match (self.start.trim(), self.end.trim()) {
            ("", "") => String::new(),
            (start, "") => start.to_string(),
            ("", end) => end.to_string(),
            (start, end) => format!("{start} – {end}"),
        }
    }
}

/// A contract, policy or minutes document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentItem {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub category: String,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub note: String,
    #[serde(deserialize_with = "lenient::string")]
    pub notes: String,
}

impl DocumentItem {
    /// The document note, whichever of `note` / `notes` the file used.
    pub fn note(&self) -> &str {
        if self.note.trim().is_empty() {
            &self.notes
        } else {
            &self.note
        }
    }
}

/// A staff directory entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffMember {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub building: String,
    #[serde(deserialize_with = "lenient::string")]
    pub role: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub photo: String,
}

/// An external link on the resources page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceLink {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub category: String,
}

/// A union officer. Photos are looked up in the staff directory by name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficerRecord {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
}

impl OfficerRecord {
    pub fn new(name: &str, title: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
        }
    }
}

/// Built-in officer list used when `officers.json` is missing or empty.
pub fn default_officers() -> Vec<OfficerRecord> {
    vec![
        OfficerRecord::new("Union President", "President"),
        OfficerRecord::new("Union Vice President", "Vice President"),
        OfficerRecord::new("Union Secretary", "Secretary"),
        OfficerRecord::new("Union Treasurer", "Treasurer"),
    ]
}

/// Overrides for the social and calendar embeds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialConfig {
    #[serde(deserialize_with = "lenient::string")]
    pub instagram_handle: String,
    #[serde(deserialize_with = "lenient::string")]
    pub instagram_post_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub post_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub google_calendar_id: String,
}

impl SocialConfig {
    /// The pinned post URL, whichever key the file used.
    pub fn pinned_post_url(&self) -> Option<&str> {
        [&self.instagram_post_url, &self.post_url]
            .into_iter()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }
}

/// Latest Instagram post, as written by the `refresh-instagram` job.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstagramPost {
    #[serde(deserialize_with = "lenient::string")]
    pub instagram_handle: String,
    #[serde(deserialize_with = "lenient::string")]
    pub post_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub image_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub last_auto_updated: String,
}

impl InstagramPost {
    /// A record without a post URL has nothing to preview.
    pub fn is_empty(&self) -> bool {
        self.post_url.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let item: NewsItem = serde_json::from_str(r#"{"title":"A"}"#).unwrap();
        assert_eq!(item.title, "A");
        assert_eq!(item.date, "");
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_scalars_of_wrong_type_become_text() {
        let item: EventItem =
            serde_json::from_str(r#"{"title":2024,"date":null,"location":true}"#).unwrap();
        assert_eq!(item.title, "2024");
        assert_eq!(item.date, "");
        assert_eq!(item.location, "true");
    }

    #[test]
    fn test_single_tag_string() {
        let item: NewsItem = serde_json::from_str(r#"{"tags":"contract"}"#).unwrap();
        assert_eq!(item.tags, vec!["contract".to_string()]);
    }

    #[test]
    fn test_event_when() {
        let mut e = EventItem {
            start: "3:30 PM".into(),
            end: "4:30 PM".into(),
            ..Default::default()
        };
        assert_eq!(e.when(), "3:30 PM – 4:30 PM");
        e.start.clear();
        assert_eq!(e.when(), "4:30 PM");
        e.time = "After school".into();
        assert_eq!(e.when(), "After school");
        assert_eq!(EventItem::default().when(), "");
    }

    #[test]
    fn test_document_note_aliases() {
        let doc: DocumentItem =
            serde_json::from_str(r#"{"title":"CBA","notes":"Members only"}"#).unwrap();
        assert_eq!(doc.note(), "Members only");
    }

    #[test]
    fn test_social_config_post_url_keys() {
        let cfg: SocialConfig =
            serde_json::from_str(r#"{"postUrl":"https://www.instagram.com/p/abc/"}"#).unwrap();
        assert_eq!(cfg.pinned_post_url(), Some("https://www.instagram.com/p/abc/"));
        assert_eq!(SocialConfig::default().pinned_post_url(), None);
    }

    #[test]
    fn test_instagram_post_uses_camel_case() {
        let post = InstagramPost {
            post_url: "https://www.instagram.com/p/abc/".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"postUrl\""));
        assert!(json.contains("\"lastAutoUpdated\""));
    }
}
