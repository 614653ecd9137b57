//! Page context shared by every component.
//!
//! Holds the single [`PageController`] for the page plus the bits of state
//! only the view cares about (notices on screen, contact form fields).

use dioxus::prelude::*;

use crate::contact::ContactForm;
use crate::controller::{Effect, PageController, PhotoState, UiEvent, UiState};
use crate::notice::{Notice, NoticeQueue};
use crate::prefs::PreferenceStore;
use crate::scroll::ScrollTarget;
use crate::site::SiteContent;

#[cfg(target_arch = "wasm32")]
pub type PlatformController =
    PageController<crate::prefs::LocalStorage, crate::dom::BrowserDocument>;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformController =
    PageController<crate::prefs::MemoryStorage, crate::dom::MemoryDocument>;

#[derive(Clone, Copy)]
pub struct PageContext {
    controller: Signal<PlatformController>,
    notices: Signal<NoticeQueue>,
    contact: Signal<ContactForm>,
}

impl PageContext {
    /// Current UI state (subscribes the caller)
    pub fn state(&self) -> UiState {
        self.controller.read().state().clone()
    }

    pub fn notices(&self) -> NoticeQueue {
        (self.notices)()
    }

    pub fn contact(&self) -> ContactForm {
        (self.contact)()
    }

    pub fn set_contact_email(&self, email: String) {
        let mut contact = self.contact;
        contact.write().email = email;
    }

    pub fn set_contact_message(&self, message: String) {
        let mut contact = self.contact;
        contact.write().message = message;
    }

    /// Run an event through the controller and carry out what it hands back
    pub fn dispatch(&self, event: UiEvent) {
        let mut controller = self.controller;
        let effects = controller.write().dispatch(event);
        for effect in effects {
            match effect {
                Effect::Notify(notice) => self.notify(notice),
                Effect::ScrollTo(target) => scroll_to(&target),
                Effect::ResetContactForm => {
                    let mut contact = self.contact;
                    contact.set(ContactForm::default());
                }
                // Executed by the controller
                Effect::Persist | Effect::Render => {}
            }
        }
    }

    pub fn dismiss(&self, id: u64) {
        let mut notices = self.notices;
        notices.write().dismiss(id);
    }

    fn notify(&self, notice: Notice) {
        let mut notices = self.notices;
        let duration_ms = notice.duration_ms;
        let id = notices.write().push(notice);
        self.schedule_dismiss(id, duration_ms);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64, duration_ms: u32) {
        let ctx = *self;
        spawn(async move {
            sleep_ms(duration_ms).await;
            ctx.dismiss(id);
        });
    }

    // Server-rendered pages never receive events, so nothing expires there
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64, _duration_ms: u32) {}
}

/// Initialize the page context - call once at the page root
pub fn use_page_provider(content: &SiteContent) {
    let photo = PhotoState::new(content.photo.clone(), content.photo_full.clone());

    let controller = use_signal(move || {
        #[cfg(target_arch = "wasm32")]
        let controller = PageController::new(
            PreferenceStore::new(crate::prefs::LocalStorage),
            crate::dom::BrowserDocument,
            photo,
        );

        // Server render: default record, sections left for the page script
        // to reveal
        #[cfg(not(target_arch = "wasm32"))]
        let controller = PageController::new(
            PreferenceStore::new(crate::prefs::MemoryStorage::new()),
            crate::dom::MemoryDocument::portfolio(),
            photo,
        );

        controller
    });
    let notices = use_signal(NoticeQueue::default);
    let contact = use_signal(ContactForm::default);

    use_context_provider(|| PageContext {
        controller,
        notices,
        contact,
    });

    // Client-side only: re-project once the page elements are mounted
    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            use crate::dom::DomTarget;

            let prefs = controller.peek().state().prefs;
            let mut document = crate::dom::BrowserDocument;
            // Lets the stylesheet hide sections until they are revealed
            document.toggle_class(crate::prefs::Selector::Root, "js", true);
            crate::dom::apply(&prefs, &mut document);
        });
    }
}

/// Get the page context - use in any component
pub fn use_page() -> PageContext {
    use_context::<PageContext>()
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
fn scroll_to(target: &ScrollTarget) {
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let top = match target {
        ScrollTarget::Top => 0.0,
        ScrollTarget::Section(id) => {
            let Some(document) = window.document() else {
                return;
            };
            let Some(section) = document.get_element_by_id(id) else {
                tracing::debug!("No section #{}, not scrolling", id);
                return;
            };
            let nav_height = document
                .query_selector(".site-nav")
                .ok()
                .flatten()
                .and_then(|nav| nav.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|nav| f64::from(nav.offset_height()))
                .unwrap_or(0.0);
            let page_offset = window.page_y_offset().unwrap_or(0.0);
            crate::scroll::section_scroll_top(
                section.get_bounding_client_rect().top(),
                page_offset,
                nav_height,
            )
        }
    };

    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to(target: &ScrollTarget) {
    tracing::trace!("Scroll to {:?} ignored outside the browser", target);
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
