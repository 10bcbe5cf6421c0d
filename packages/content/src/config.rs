//! # Site settings (`site.toml`)
//!
//! Static copy and embed defaults for the site. The file is compiled into the web
//! build and parsed at boot; a parse failure is the one error the site shows to
//! visitors instead of degrading.
//!
//! ```toml
//! title = "Bridgehampton Teachers Association"
//! instagram_handle = "bhsteachersassociation"
//! calendar_id = "...@group.calendar.google.com"
//! calendar_timezone = "America/New_York"
//! data_dir = "data"
//! mobile_breakpoint = 768
//! ```
//!
//! Every key is optional. At render time `data/social.json` may further override
//! the Instagram handle and calendar id (see [`SiteSettings::with_social`]).

use serde::{Deserialize, Serialize};

use crate::models::SocialConfig;
use crate::navigation::DEFAULT_MOBILE_BREAKPOINT;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Full name shown in the home hero and header.
    pub title: String,
    /// Short name used in the header badge and page titles.
    pub short_name: String,
    pub mission: String,
    pub mission_note: String,
    pub instagram_handle: String,
    pub calendar_id: String,
    pub calendar_timezone: String,
    pub contact_form_url: String,
    /// Directory (relative to the page) holding the JSON data files.
    pub data_dir: String,
    /// Absolute base URL for data files when not running in a browser.
    pub base_url: Option<String>,
    pub mobile_breakpoint: f64,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "Bridgehampton Teachers Association".into(),
            short_name: "BTA".into(),
            mission: "The BTA is a union of professionals that champions fairness; democracy; \
                      economic opportunity; and high-quality public education, healthcare and \
                      public services for our students, their families and our communities."
                .into(),
            mission_note: "We share the same mission as the United Federation of Teachers.".into(),
            instagram_handle: "bhsteachersassociation".into(),
            calendar_id:
                "7e799d3cb530dec90c54e3e39f608d213d756dda4b474b3bbeb84f08e01278bf@group.calendar.google.com"
                    .into(),
            calendar_timezone: "America/New_York".into(),
            contact_form_url: String::new(),
            data_dir: "data".into(),
            base_url: None,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
        }
    }
}

impl SiteSettings {
    /// The well-known filename for the settings file.
    pub fn filename() -> &'static str {
        "site.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Relative path of a data file, e.g. `data/news.json`.
    pub fn data_path(&self, file: &str) -> String {
        let dir = self.data_dir.trim_matches('/');
        if dir.is_empty() {
            file.to_string()
        } else {
            format!("{dir}/{file}")
        }
    }

    /// Apply the non-empty overrides from `social.json`.
    pub fn with_social(mut self, social: &SocialConfig) -> Self {
        let handle = social.instagram_handle.trim().trim_start_matches('@');
        if !handle.is_empty() {
            self.instagram_handle = handle.to_string();
        }
        let calendar = social.google_calendar_id.trim();
        if !calendar.is_empty() {
            self.calendar_id = calendar.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(SiteSettings::from_toml("").unwrap(), SiteSettings::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = SiteSettings::from_toml(
            "instagram_handle = \"localunion\"\nmobile_breakpoint = 640\n",
        )
        .unwrap();
        assert_eq!(settings.instagram_handle, "localunion");
        assert_eq!(settings.mobile_breakpoint, 640.0);
        assert_eq!(settings.data_dir, "data");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(SiteSettings::from_toml("title = ").is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let settings = SiteSettings {
            base_url: Some("http://localhost:8080/".into()),
            ..Default::default()
        };
        let parsed = SiteSettings::from_toml(&settings.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_data_path() {
        let mut settings = SiteSettings::default();
        assert_eq!(settings.data_path("news.json"), "data/news.json");
        settings.data_dir = "/".into();
        assert_eq!(settings.data_path("news.json"), "news.json");
    }

    #[test]
    fn test_social_overrides() {
        let social = SocialConfig {
            instagram_handle: "@other".into(),
            google_calendar_id: "cal@example.com".into(),
            ..Default::default()
        };
        let settings = SiteSettings::default().with_social(&social);
        assert_eq!(settings.instagram_handle, "other");
        assert_eq!(settings.calendar_id, "cal@example.com");

        let unchanged = SiteSettings::default().with_social(&SocialConfig::default());
        assert_eq!(unchanged, SiteSettings::default());
    }
}
