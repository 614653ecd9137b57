//! Sticky site navigation with mobile toggle, theme button and settings button.

use dioxus::prelude::*;

use crate::app::context::use_page;
use crate::controller::UiEvent;
use crate::dom::bool_attr;
use crate::scroll::anchor_target;
use crate::site::SECTIONS;

#[component]
pub fn Nav(owner: String) -> Element {
    let page = use_page();
    let state = page.state();
    let nav_class = if state.nav_open {
        "site-nav open"
    } else {
        "site-nav"
    };
    let link_class = |id: &str| {
        if state.is_active_link(&format!("#{id}")) {
            "active".to_string()
        } else {
            String::new()
        }
    };

    rsx! {
        nav { class: nav_class,
            NavLink {
                href: "#about".to_string(),
                label: owner,
                class: "brand".to_string(),
            }
            button {
                class: "nav-toggle",
                r#type: "button",
                "aria-label": "Menu",
                "aria-expanded": bool_attr(state.nav_open),
                onclick: move |_| page.dispatch(UiEvent::NavToggled),
                "☰"
            }
            ul { class: "nav-list",
                for (id, label) in SECTIONS {
                    li { key: "{id}",
                        NavLink {
                            href: format!("#{id}"),
                            label: label.to_string(),
                            class: link_class(id),
                        }
                    }
                }
            }
            div { class: "nav-actions",
                button {
                    id: "theme-toggle",
                    class: "icon-button",
                    r#type: "button",
                    "aria-label": "Basculer le thème",
                    "aria-pressed": bool_attr(state.prefs.dark),
                    onclick: move |_| page.dispatch(UiEvent::ThemeToggled),
                    // Stylesheet shows the glyph matching aria-pressed
                    span { class: "icon-when-light", "aria-hidden": "true", "☾" }
                    span { class: "icon-when-dark", "aria-hidden": "true", "☀" }
                }
                button {
                    id: "open-settings",
                    class: "icon-button",
                    r#type: "button",
                    "aria-label": "Préférences",
                    "aria-controls": "settings-panel",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        page.dispatch(UiEvent::SettingsOpened);
                    },
                    "⚙"
                }
            }
        }
    }
}

/// In-page link that scrolls smoothly below the sticky nav
#[component]
fn NavLink(href: String, label: String, class: String) -> Element {
    let page = use_page();
    let target = href.clone();

    rsx! {
        a {
            class: class,
            href: href,
            "data-scroll": "true",
            onclick: move |evt: MouseEvent| {
                if anchor_target(&target).is_some() {
                    evt.prevent_default();
                    page.dispatch(UiEvent::NavLinkClicked { href: target.clone() });
                }
            },
            "{label}"
        }
    }
}
