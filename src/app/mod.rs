//! Dioxus application: the single portfolio page.
//!
//! [`App`] is the client root launched by the `web` build. The server
//! renders [`Portfolio`] directly with the content from its config.

use dioxus::prelude::*;

pub mod browser;
pub mod components;
pub mod context;

use crate::controller::UiEvent;
use crate::site::SiteContent;
use browser::use_browser_listeners;
use components::{
    ContactPanel, Lightbox, Nav, ProfileCard, ProjectCard, Section, SettingsPanel, Toasts,
};
use context::{use_page, use_page_provider};

/// Client root with the built-in sample content
#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Portfolio" }
        document::Link { rel: "stylesheet", href: "/assets/style.css" }
        Portfolio { content: SiteContent::default() }
    }
}

/// Provides the page context for everything below it
#[component]
pub fn Portfolio(content: SiteContent) -> Element {
    use_page_provider(&content);

    rsx! {
        PortfolioPage { content }
    }
}

#[component]
fn PortfolioPage(content: SiteContent) -> Element {
    let page = use_page();
    use_browser_listeners();
    let settings_open = page.state().settings_open;
    let version = env!("PORTFOLIO_VERSION");

    rsx! {
        div {
            class: "page",
            // Panel and settings button stop propagation, so anything
            // arriving here is outside the panel
            onclick: move |_| {
                if settings_open {
                    page.dispatch(UiEvent::OutsideClicked);
                }
            },

            Nav { owner: content.owner.clone() }
            SettingsPanel {}

            main { class: "container",
                Section { id: "about".to_string(),
                    ProfileCard { owner: content.owner.clone(), tagline: content.tagline.clone() }
                    p { class: "about-text", "{content.about}" }
                }
                Section { id: "projects".to_string(),
                    div { class: "project-grid",
                        for (i, project) in content.projects.iter().enumerate() {
                            ProjectCard { key: "{i}", project: project.clone() }
                        }
                    }
                }
                Section { id: "skills".to_string(),
                    ul { class: "skills",
                        for skill in content.skills.iter() {
                            li { key: "{skill}", "{skill}" }
                        }
                    }
                }
                Section { id: "contact".to_string(),
                    ContactPanel { email: content.email.clone() }
                }
            }

            footer { class: "site-footer",
                small { "{content.owner} · v{version}" }
            }

            Lightbox {}
            Toasts {}
        }
    }
}
