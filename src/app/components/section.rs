use dioxus::prelude::*;

use crate::app::context::use_page;
use crate::site::SECTIONS;

/// Page section observed by the scroll spy and the reveal animation
#[component]
pub fn Section(id: String, children: Element) -> Element {
    let page = use_page();
    let revealed = page.state().is_revealed(&id);
    let title = SECTIONS
        .iter()
        .find(|(section, _)| *section == id)
        .map(|(_, label)| *label)
        .unwrap_or_default();

    rsx! {
        section {
            id: "{id}",
            class: if revealed { "section reveal is-visible" } else { "section reveal" },
            "data-section": "true",
            h2 { "{title}" }
            {children}
        }
    }
}
