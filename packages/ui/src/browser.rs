//! Thin wrappers over the browser APIs the site touches.
//!
//! Outside a browser these fall back to fixed values so components can be
//! rendered natively (in tests, for instance): an empty fragment, an infinitely
//! wide viewport and a data source rooted at `base_url` from the settings.

use content::{HttpSource, LoadError, SiteSettings, Source};

#[cfg(not(target_arch = "wasm32"))]
const LOCAL_BASE: &str = "http://localhost:8080/";

/// The current location fragment, including the leading `#`.
pub fn current_fragment() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Point the location fragment at `id`.
pub fn set_fragment(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_hash(id) {
                tracing::warn!("could not set location hash: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

/// Inner width of the window in CSS pixels.
pub fn viewport_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::INFINITY)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        f64::INFINITY
    }
}

/// Data source for the JSON files: relative to the page in a browser,
/// relative to `base_url` (or a local dev server) elsewhere.
pub fn data_source(settings: &SiteSettings) -> Result<Source, LoadError> {
    #[cfg(target_arch = "wasm32")]
    let base = match settings.base_url.clone() {
        Some(base) => base,
        None => web_sys::window()
            .and_then(|w| w.location().href().ok())
            .ok_or_else(|| LoadError::Url("window location is unavailable".into()))?,
    };
    #[cfg(not(target_arch = "wasm32"))]
    let base = settings
        .base_url
        .clone()
        .unwrap_or_else(|| LOCAL_BASE.to_string());

    Ok(Source::Http(HttpSource::new(&base)?))
}

/// Register the window listeners for `hashchange` and the Escape key.
///
/// Listeners live for the lifetime of the page.
#[cfg(target_arch = "wasm32")]
pub fn listen(on_hash: impl FnMut() + 'static, on_escape: impl FnMut() + 'static) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        tracing::warn!("no window; navigation listeners not installed");
        return;
    };

    let mut on_hash = on_hash;
    let hash_cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| on_hash());

    let mut on_escape = on_escape;
    let key_cb = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |evt: web_sys::KeyboardEvent| {
            if evt.key() == "Escape" {
                on_escape();
            }
        },
    );

    if let Err(e) =
        window.add_event_listener_with_callback("hashchange", hash_cb.as_ref().unchecked_ref())
    {
        tracing::warn!("could not listen for hashchange: {e:?}");
    }
    if let Err(e) =
        window.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
    {
        tracing::warn!("could not listen for keydown: {e:?}");
    }

    hash_cb.forget();
    key_cb.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn listen(on_hash: impl FnMut() + 'static, on_escape: impl FnMut() + 'static) {
    let _ = (on_hash, on_escape);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_fallbacks() {
        assert_eq!(current_fragment(), "");
        assert!(viewport_width().is_infinite());
    }

    #[test]
    fn test_data_source_uses_base_url() {
        let settings = SiteSettings {
            base_url: Some("https://union.example/hub/".into()),
            ..Default::default()
        };
        let Source::Http(http) = data_source(&settings).unwrap() else {
            panic!("expected an HTTP source");
        };
        assert_eq!(http.base().as_str(), "https://union.example/hub/");
    }

    #[test]
    fn test_data_source_rejects_bad_base() {
        let settings = SiteSettings {
            base_url: Some("not a url".into()),
            ..Default::default()
        };
        assert!(data_source(&settings).is_err());
    }
}
