//! Pattern matching over scraped Instagram markup.
//!
//! Instagram changes its markup at will, so these scanners look for the few
//! fragments that have stayed put: the `"shortcode":"..."` keys in the embedded
//! JSON of a profile page and the OpenGraph `<meta>` tags of a post page.
//! Attribute names match ASCII case-insensitively.

/// Preview tags of a post page. Missing tags are empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OpenGraph {
    pub image: String,
    pub title: String,
    pub description: String,
}

/// First valid `"shortcode": "..."` value on a profile page.
pub fn latest_shortcode(html: &str) -> Option<String> {
    const KEY: &str = "\"shortcode\"";
    let mut rest = html;
    while let Some(at) = rest.find(KEY) {
        rest = &rest[at + KEY.len()..];
        if let Some(code) = shortcode_value(rest) {
            return Some(code);
        }
    }
    None
}

fn shortcode_value(s: &str) -> Option<String> {
    let s = s.trim_start().strip_prefix(':')?;
    let s = s.trim_start().strip_prefix('"')?;
    let end = s.find('"')?;
    let code = &s[..end];
    let valid = !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    valid.then(|| code.to_string())
}

/// OpenGraph image, title and description, decoded and trimmed.
pub fn open_graph(html: &str) -> OpenGraph {
    let tag = |key: &str| {
        meta_content(html, "property", key)
            .or_else(|| meta_content(html, "name", key))
            .map(|raw| decode_entities(&raw))
            .unwrap_or_default()
    };
    OpenGraph {
        image: tag("og:image"),
        title: tag("og:title"),
        description: tag("og:description"),
    }
}

/// Value of `content="..."` directly following `attr="key"` (whitespace between).
fn meta_content(html: &str, attr: &str, key: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets identical between `lower` and `html`.
    let lower = html.to_ascii_lowercase();
    let needle = format!("{attr}=\"{key}\"").to_ascii_lowercase();
    const CONTENT: &str = "content=\"";

    let mut from = 0;
    while let Some(rel) = lower[from..].find(&needle) {
        let after = from + rel + needle.len();
        from = after;

        let rest = &html[after..];
        let trimmed = rest.trim_start();
        if trimmed.len() == rest.len() {
            continue;
        }
        let at = after + (rest.len() - trimmed.len());
        if !lower[at..].starts_with(CONTENT) {
            continue;
        }
        let start = at + CONTENT.len();
        match html[start..].find('"') {
            Some(0) | None => continue,
            Some(end) => return Some(html[start..start + end].to_string()),
        }
    }
    None
}

/// Decode the handful of entities that appear in OpenGraph values.
pub fn decode_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_shortcode_takes_first() {
        let html = r#"{"edges":[{"node":{"shortcode" : "C1a_b-2","id":"1"}},{"node":{"shortcode":"Zzz"}}]}"#;
        assert_eq!(latest_shortcode(html).as_deref(), Some("C1a_b-2"));
    }

    #[test]
    fn test_latest_shortcode_skips_invalid_values() {
        let html = r#""shortcode":"" ... "shortcode":"has space" ... "shortcode":"Good1""#;
        assert_eq!(latest_shortcode(html).as_deref(), Some("Good1"));
    }

    #[test]
    fn test_latest_shortcode_missing() {
        assert_eq!(latest_shortcode("<html>login required</html>"), None);
        assert_eq!(latest_shortcode(r#""shortcode": 12"#), None);
    }

    #[test]
    fn test_open_graph_property_tags() {
        let html = r#"
            <meta property="og:title" content="BTA on Instagram: &quot;Rally&quot;" />
            <META PROPERTY="og:image" CONTENT="https://cdn.example/img.jpg?a=1&amp;b=2">
            <meta property="og:description"   content="  42 likes &amp; 3 comments ">
        "#;
        let og = open_graph(html);
        assert_eq!(og.title, "BTA on Instagram: \"Rally\"");
        assert_eq!(og.image, "https://cdn.example/img.jpg?a=1&b=2");
        assert_eq!(og.description, "42 likes & 3 comments");
    }

    #[test]
    fn test_open_graph_name_fallback() {
        let html = r#"<meta name="og:image" content="https://cdn.example/x.jpg">"#;
        let og = open_graph(html);
        assert_eq!(og.image, "https://cdn.example/x.jpg");
        assert_eq!(og.title, "");
    }

    #[test]
    fn test_open_graph_requires_whitespace_before_content() {
        let html = r#"<meta property="og:image"content="https://cdn.example/x.jpg">"#;
        assert_eq!(open_graph(html).image, "");
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities(" &lt;b&gt; &#39;x&#39; "), "<b> 'x'");
    }
}
