use dioxus::prelude::*;

use crate::app::context::use_page;
use crate::controller::UiEvent;
use crate::site::Project;

#[component]
pub fn ProjectCard(project: Project) -> Element {
    let page = use_page();
    let open = {
        let src = project.image.clone();
        let alt = project.title.clone();
        move |_: MouseEvent| {
            page.dispatch(UiEvent::LightboxOpened {
                src: src.clone(),
                alt: alt.clone(),
            })
        }
    };

    rsx! {
        article { class: "project-card",
            img {
                class: "project-image",
                src: "{project.image}",
                alt: "{project.title}",
                loading: "lazy",
                "data-lightbox-src": "{project.image}",
                "data-lightbox-alt": "{project.title}",
                onclick: open.clone(),
            }
            h3 { "{project.title}" }
            p { "{project.summary}" }
            div { class: "project-actions",
                button {
                    class: "open-lightbox button-secondary",
                    r#type: "button",
                    "data-lightbox-src": "{project.image}",
                    "data-lightbox-alt": "{project.title}",
                    onclick: open,
                    "Voir l'image"
                }
                if let Some(link) = project.link {
                    a { href: "{link}", target: "_blank", rel: "noopener", "Visiter" }
                }
            }
        }
    }
}
