use content::embeds::{calendar_embed_url, CalendarMode};
use dioxus::prelude::*;

/// Google Calendar iframe, optionally with Calendar/Agenda tabs.
#[component]
pub fn CalendarEmbed(
    calendar_id: String,
    timezone: String,
    #[props(default)] show_tabs: bool,
) -> Element {
    let mut mode = use_signal(CalendarMode::default);
    let current = mode();
    let src = calendar_embed_url(&calendar_id, &timezone, current);

    rsx! {
        div { class: "calendar",
            if show_tabs {
                div { class: "tabs", role: "tablist",
                    for option in [CalendarMode::Month, CalendarMode::Agenda] {
                        button {
                            key: "{option.label()}",
                            r#type: "button",
                            role: "tab",
                            class: if option == current { "tab active" } else { "tab" },
                            aria_selected: if option == current { "true" } else { "false" },
                            onclick: move |_| mode.set(option),
                            "{option.label()}"
                        }
                    }
                }
            }
            iframe {
                class: "calendar-frame",
                title: "Union calendar",
                src: "{src}",
                width: "100%",
                height: "600",
                style: "border:0",
            }
        }
    }
}
