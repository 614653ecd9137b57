//! Profile photo with lightbox, download link and load-failure notice.

use dioxus::prelude::*;

use crate::app::context::use_page;
use crate::controller::UiEvent;
use crate::notice::PHOTO_FAILED;

#[component]
pub fn ProfileCard(owner: String, tagline: String) -> Element {
    let page = use_page();
    let state = page.state();
    let photo = state.photo.clone();

    let photo_class = if state.prefs.avatar_round {
        "profile-photo round"
    } else {
        "profile-photo"
    };
    let alt = format!("Portrait de {owner}");
    // Lightbox shows the largest rendition available
    let zoom_src = photo.full_src.clone().unwrap_or_else(|| photo.src.clone());
    let zoom_attr = zoom_src.clone();
    let preload_src = photo.full_src.clone().unwrap_or_default();

    let open = {
        let alt = alt.clone();
        move |_: MouseEvent| {
            page.dispatch(UiEvent::LightboxOpened {
                src: zoom_src.clone(),
                alt: alt.clone(),
            })
        }
    };

    rsx! {
        div { class: "profile",
            if photo.failed {
                p { class: "inline-notice", role: "alert", "{PHOTO_FAILED}" }
            } else {
                img {
                    class: photo_class,
                    src: "{photo.src}",
                    alt: "{alt}",
                    "data-lightbox-src": "{zoom_attr}",
                    "data-lightbox-alt": "{alt}",
                    onclick: open.clone(),
                    onerror: move |_| page.dispatch(UiEvent::PhotoFailed),
                }
            }
            if !preload_src.is_empty() {
                img {
                    class: "preload",
                    src: "{preload_src}",
                    alt: "",
                    hidden: true,
                    onload: move |_| page.dispatch(UiEvent::FullPhotoLoaded),
                }
            }
            div { class: "profile-text",
                h1 { "{owner}" }
                p { class: "tagline", "{tagline}" }
                div { class: "profile-actions",
                    button {
                        class: "open-lightbox button-secondary",
                        r#type: "button",
                        disabled: photo.failed,
                        "data-lightbox-src": "{zoom_attr}",
                        "data-lightbox-alt": "{alt}",
                        onclick: open,
                        "Agrandir la photo"
                    }
                    a {
                        class: "download",
                        href: "{photo.download_href}",
                        download: "",
                        "Télécharger la photo"
                    }
                }
            }
        }
    }
}
