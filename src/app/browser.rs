//! Window and document listeners that sit outside the component tree.
//!
//! Escape, viewport resizes and section visibility are observed with plain
//! browser listeners. Their callbacks only push [`UiEvent`]s into a channel;
//! a task spawned inside the Dioxus runtime drains it into the page context.

#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::controller::UiEvent;
#[cfg(target_arch = "wasm32")]
use futures::channel::mpsc::UnboundedSender;

/// Attach the page-level listeners once, after the first render
pub fn use_browser_listeners() {
    #[cfg(target_arch = "wasm32")]
    {
        let page = super::context::use_page();
        use_effect(move || {
            let (tx, mut rx) = futures::channel::mpsc::unbounded::<UiEvent>();
            attach(tx);
            spawn(async move {
                use futures::StreamExt;
                while let Some(event) = rx.next().await {
                    page.dispatch(event);
                }
            });
        });
    }
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
fn attach(tx: UnboundedSender<UiEvent>) {
    use wasm_bindgen::{closure::Closure, JsCast};

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let keys = tx.clone();
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |evt: web_sys::KeyboardEvent| {
            if evt.key() == "Escape" {
                let _ = keys.unbounded_send(UiEvent::EscapePressed);
            }
        },
    );
    if document
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        .is_ok()
    {
        on_keydown.forget();
    }

    let resizes = tx.clone();
    let viewport = window.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        if let Some(width) = viewport.inner_width().ok().and_then(|w| w.as_f64()) {
            let _ = resizes.unbounded_send(UiEvent::Resized { width });
        }
    });
    if window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .is_ok()
    {
        on_resize.forget();
    }

    observe_sections(&document, tx);
}

#[cfg(target_arch = "wasm32")]
fn observe_sections(document: &web_sys::Document, tx: UnboundedSender<UiEvent>) {
    use crate::scroll::{REVEAL_THRESHOLD, SCROLLSPY_THRESHOLD};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};

    let Ok(sections) = document.query_selector_all("[data-section]") else {
        return;
    };

    let fallback = tx.clone();
    let on_intersect = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let id = entry.target().id();
                let ratio = entry.intersection_ratio();
                let _ = tx.unbounded_send(UiEvent::SectionVisible {
                    id: id.clone(),
                    ratio,
                });
                let _ = tx.unbounded_send(UiEvent::RevealVisible { id, ratio });
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&js_sys::Array::of2(
        &JsValue::from_f64(REVEAL_THRESHOLD),
        &JsValue::from_f64(SCROLLSPY_THRESHOLD),
    ));

    match web_sys::IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)
    {
        Ok(observer) => {
            for i in 0..sections.length() {
                if let Some(el) = sections.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                    observer.observe(&el);
                }
            }
            on_intersect.forget();
        }
        Err(e) => {
            tracing::debug!("IntersectionObserver unavailable ({:?}), revealing all", e);
            let _ = fallback.unbounded_send(UiEvent::RevealUnsupported {
                ids: crate::site::reveal_ids(),
            });
        }
    }
}
