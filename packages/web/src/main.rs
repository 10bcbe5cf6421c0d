use content::SiteSettings;
use dioxus::prelude::*;

use ui::{BootError, Site};

/// Site settings compiled into the bundle; edit `site.toml` to rebrand.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    match SiteSettings::from_toml(SITE_TOML) {
        Ok(settings) => {
            tracing::info!("starting {}", settings.short_name);
            rsx! { Site { settings } }
        }
        Err(e) => {
            tracing::error!("invalid {}: {e}", SiteSettings::filename());
            rsx! {
                BootError { message: format!("Could not read {}: {e}", SiteSettings::filename()) }
            }
        }
    }
}
