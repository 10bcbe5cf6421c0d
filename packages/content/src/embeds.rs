//! URLs for the third-party widgets the site embeds as iframes or links.

use reqwest::Url;

const CALENDAR_EMBED_BASE: &str = "https://calendar.google.com/calendar/embed";
const INSTAGRAM_BASE: &str = "https://www.instagram.com/";

/// Display layout of the embedded calendar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CalendarMode {
    #[default]
    Month,
    Agenda,
}

impl CalendarMode {
    fn param(&self) -> &'static str {
        match self {
            CalendarMode::Month => "MONTH",
            CalendarMode::Agenda => "AGENDA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CalendarMode::Month => "Calendar",
            CalendarMode::Agenda => "Agenda",
        }
    }
}

/// Google Calendar embed URL for a calendar id, timezone and layout.
pub fn calendar_embed_url(calendar_id: &str, timezone: &str, mode: CalendarMode) -> String {
    with_params(
        CALENDAR_EMBED_BASE,
        &[
            ("src", calendar_id),
            ("ctz", timezone),
            ("mode", mode.param()),
        ],
    )
}

/// Form URL with the `embedded=true` flag Google Forms needs inside an iframe.
pub fn form_embed_url(form_url: &str) -> String {
    let Ok(mut url) = Url::parse(form_url) else {
        return form_url.to_string();
    };
    if !url.query_pairs().any(|(k, _)| k == "embedded") {
        url.query_pairs_mut().append_pair("embedded", "true");
    }
    url.into()
}

/// Public profile page for an Instagram handle.
pub fn instagram_profile_url(handle: &str) -> String {
    let handle = handle.trim().trim_start_matches('@');
    let Ok(mut url) = Url::parse(INSTAGRAM_BASE) else {
        return INSTAGRAM_BASE.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(handle).push("");
    }
    url.into()
}

fn with_params(base: &str, params: &[(&str, &str)]) -> String {
    match Url::parse_with_params(base, params) {
        Ok(url) => url.into(),
        Err(e) => {
            tracing::warn!("could not build embed URL from {base}: {e}");
            base.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_url_encodes_params() {
        let url = calendar_embed_url(
            "abc@group.calendar.google.com",
            "America/New_York",
            CalendarMode::Agenda,
        );
        assert_eq!(
            url,
            "https://calendar.google.com/calendar/embed?src=abc%40group.calendar.google.com&ctz=America%2FNew_York&mode=AGENDA"
        );
    }

    #[test]
    fn test_calendar_month_mode() {
        let url = calendar_embed_url("id", "UTC", CalendarMode::Month);
        assert!(url.ends_with("mode=MONTH"));
    }

    #[test]
    fn test_form_embed_url() {
        assert_eq!(
            form_embed_url("https://docs.google.com/forms/d/e/X/viewform"),
            "https://docs.google.com/forms/d/e/X/viewform?embedded=true"
        );
        assert_eq!(
            form_embed_url("https://docs.google.com/forms/d/e/X/viewform?embedded=true"),
            "https://docs.google.com/forms/d/e/X/viewform?embedded=true"
        );
        assert_eq!(form_embed_url("not a url"), "not a url");
    }

    #[test]
    fn test_instagram_profile_url() {
        assert_eq!(
            instagram_profile_url("@bhsteachersassociation"),
            "https://www.instagram.com/bhsteachersassociation/"
        );
    }
}
