//! Cleaning for data-file values that end up inside HTML attributes.
//!
//! Text nodes are escaped by the renderer, attribute values are not: server-side
//! rendering writes them between double quotes as-is. Every `href`, `src` or
//! free-text attribute filled from a data file goes through one of these first.

/// URL schemes a data file may link to. Anything without a scheme is a relative path.
const LINK_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// A link target that is safe to put in an `href` or `src`, or `None`.
///
/// Rejects values that could close the attribute (`"`, `<`, `>`, backticks,
/// control characters) and schemes other than http(s) and mailto, so
/// `javascript:` and `data:` links are dropped. Spaces are percent-encoded.
pub fn safe_link(raw: &str) -> Option<String> {
    let link = raw.trim();
    if link.is_empty()
        || link
            .chars()
            .any(|c| c.is_control() || matches!(c, '"' | '<' | '>' | '`'))
    {
        return None;
    }

    let scheme_end = link.find(':');
    let path_start = link.find(['/', '?', '#']);
    if let Some(end) = scheme_end {
        if path_start.map_or(true, |start| end < start) {
            let scheme = link[..end].to_ascii_lowercase();
            if !LINK_SCHEMES.contains(&scheme.as_str()) {
                return None;
            }
        }
    }

    Some(link.replace(' ', "%20"))
}

/// Free text made safe for a double-quoted attribute such as `alt` or `aria-label`.
///
/// Double quotes become single quotes and control characters are dropped.
pub fn attr_text(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| if c == '"' { '\'' } else { c })
        .collect()
}
