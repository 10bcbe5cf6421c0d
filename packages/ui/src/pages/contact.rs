use content::embeds::form_embed_url;
use content::sanitize::safe_link;
use dioxus::prelude::*;

use crate::hero::{Divider, EmptyState, Hero};

#[component]
pub fn ContactPage(form_url: String) -> Element {
    let src = safe_link(&form_url).map(|url| form_embed_url(&url));

    rsx! {
        Hero { pill: "Contact", title: "Contact Us",
            p { "Questions, concerns or ideas? Send them to the executive board." }
        }
        Divider { label: "Contact form" }
        {match src {
            Some(src) => rsx! {
                div { class: "form-wrap",
                    iframe {
                        class: "form-frame",
                        title: "Contact form",
                        src: "{src}",
                        width: "100%",
                        height: "900",
                        style: "border:0",
                    }
                }
            },
            None => rsx! {
                EmptyState { message: "The contact form is not available right now." }
            },
        }}
    }
}
