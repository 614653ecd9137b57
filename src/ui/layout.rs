//! Document shell for the server-rendered page.

use dioxus::prelude::*;

use super::scripts::{page_script, prefs_body_script, prefs_head_script};

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Browser tab title
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Wraps the page in `<head>`/`<body>`. Stored preferences are projected by
/// inline scripts (the dark marker before first paint, the rest once the
/// page elements exist), then the page script attaches the listeners.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let head_script = prefs_head_script();
    let body_script = prefs_body_script();
    let wiring = page_script();

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title}" }
            link { rel: "stylesheet", href: "/assets/style.css" }
            script { dangerous_inner_html: "{head_script}" }
        }
        body {
            {props.children}
            script { dangerous_inner_html: "{body_script}" }
            script { dangerous_inner_html: "{wiring}" }
        }
    }
}
