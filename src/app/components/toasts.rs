use dioxus::prelude::*;

use crate::app::context::use_page;

/// Transient notices, newest last. Click to dismiss early.
#[component]
pub fn Toasts() -> Element {
    let page = use_page();
    let notices = page.notices();

    rsx! {
        div { class: "toasts", role: "status", "aria-live": "polite",
            for (id, notice) in notices.iter().cloned() {
                div {
                    key: "{id}",
                    class: notice.tone.css_class(),
                    onclick: move |_| page.dismiss(id),
                    "{notice.text}"
                }
            }
        }
    }
}
