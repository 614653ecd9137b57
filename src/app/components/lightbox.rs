//! Full-screen image viewer.

use dioxus::prelude::*;

use crate::app::context::use_page;
use crate::controller::UiEvent;
use crate::dom::bool_attr;

/// Closes on backdrop click, the close button or Escape.
/// No image is mounted while closed, so the source is cleared.
#[component]
pub fn Lightbox() -> Element {
    let page = use_page();
    let state = page.state();
    let open = state.lightbox_open();

    rsx! {
        div {
            id: "lightbox",
            class: if open { "lightbox open" } else { "lightbox" },
            role: "dialog",
            "aria-modal": "true",
            "aria-hidden": bool_attr(!open),
            onclick: move |_| page.dispatch(UiEvent::LightboxClosed),

            button {
                class: "lightbox-close icon-button",
                r#type: "button",
                "aria-label": "Fermer",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    page.dispatch(UiEvent::LightboxClosed);
                },
                "×"
            }
            if let Some(image) = state.lightbox {
                img {
                    src: "{image.src}",
                    alt: "{image.alt}",
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                }
            }
        }
    }
}
