//! Page controller: owns the state, the preference store and the document.
//!
//! Startup is load → render. Each event then runs through [`reduce`], and the
//! controller executes the persistence and render effects itself before
//! handing the rest (notices, scrolling, form reset) back to the caller.

mod event;
mod state;

pub use event::{reduce, Effect, Transition, UiEvent};
pub use state::{LightboxImage, PhotoState, UiState};

use crate::dom::{self, DomTarget};
use crate::prefs::{KeyValueStore, PreferenceStore};

pub struct PageController<S, D> {
    store: PreferenceStore<S>,
    document: D,
    state: UiState,
}

impl<S: KeyValueStore, D: DomTarget> PageController<S, D> {
    /// Load preferences and render them once
    pub fn new(store: PreferenceStore<S>, mut document: D, photo: PhotoState) -> Self {
        let prefs = store.load();
        dom::apply(&prefs, &mut document);
        tracing::debug!(
            "Preferences loaded (dark: {}, avatar_round: {})",
            prefs.dark,
            prefs.avatar_round
        );
        Self {
            store,
            document,
            state: UiState::new(prefs, photo),
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn store(&self) -> &PreferenceStore<S> {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Apply one event. Returns the effects the caller still has to carry out.
    pub fn dispatch(&mut self, event: UiEvent) -> Vec<Effect> {
        tracing::trace!("UI event: {}", event.kind());
        let Transition { state, effects } = reduce(&self.state, event);
        self.state = state;

        let mut remaining = Vec::new();
        for effect in effects {
            match effect {
                Effect::Persist => self.store.save(&self.state.prefs),
                Effect::Render => dom::apply(&self.state.prefs, &mut self.document),
                other => remaining.push(other),
            }
        }
        remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactForm;
    use crate::dom::MemoryDocument;
    use crate::notice::Notice;
    use crate::prefs::{MemoryStorage, Preference, PreferenceRecord, Selector, PREF_KEY};
    use crate::scroll::ScrollTarget;

    type TestController = PageController<MemoryStorage, MemoryDocument>;

    fn controller(storage: MemoryStorage) -> TestController {
        PageController::new(
            PreferenceStore::new(storage),
            MemoryDocument::portfolio(),
            PhotoState::new("/assets/avatar.svg", Some("/assets/avatar-full.svg".into())),
        )
    }

    fn stored(c: &TestController) -> Option<PreferenceRecord> {
        c.store()
            .storage()
            .peek(PREF_KEY)
            .and_then(|raw| serde_json::from_str(raw).ok())
    }

    #[test]
    fn startup_renders_stored_preferences() {
        let c = controller(
            MemoryStorage::new().with_entry(PREF_KEY, r#"{"dark":true,"avatarRound":false}"#),
        );
        assert!(c.state().prefs.dark);
        assert!(c.document().has_class(Selector::Root, "dark"));
        assert!(!c
            .document()
            .has_class(Selector::Class("profile-photo"), "round"));
    }

    #[test]
    fn toggling_dark_updates_record_dom_and_storage() {
        let mut c = controller(MemoryStorage::new());
        assert!(!c.state().prefs.dark);

        let effects = c.dispatch(UiEvent::PreferenceChanged {
            preference: Preference::Dark,
            value: true,
        });

        assert!(c.state().prefs.dark);
        assert!(c.document().has_class(Selector::Root, "dark"));
        assert!(c.document().is_checked(Selector::Id("pref-dark")));
        assert_eq!(stored(&c).map(|r| r.dark), Some(true));
        assert_eq!(effects, vec![Effect::Notify(Notice::info("Mode sombre activé"))]);
    }

    #[test]
    fn reset_restores_defaults_everywhere() {
        let mut c = controller(MemoryStorage::new());
        c.dispatch(UiEvent::ThemeToggled);
        c.dispatch(UiEvent::PreferenceChanged {
            preference: Preference::AvatarRound,
            value: false,
        });

        c.dispatch(UiEvent::PreferencesReset);

        assert_eq!(c.state().prefs, PreferenceRecord::default());
        assert_eq!(stored(&c), Some(PreferenceRecord::default()));

        let mut fresh = MemoryDocument::portfolio();
        dom::apply(&PreferenceRecord::default(), &mut fresh);
        assert_eq!(c.document(), &fresh);
    }

    #[test]
    fn storage_faults_keep_in_memory_record() {
        let mut c = controller(MemoryStorage::unavailable());
        c.dispatch(UiEvent::ThemeToggled);
        assert!(c.state().prefs.dark);
        assert!(c.document().has_class(Selector::Root, "dark"));
        assert_eq!(c.store().storage().peek(PREF_KEY), None);
    }

    #[test]
    fn empty_message_keeps_form_and_reports_error() {
        let mut c = controller(MemoryStorage::new());
        let effects = c.dispatch(UiEvent::ContactSubmitted(ContactForm::new("a@b.com", "")));
        assert_eq!(effects, vec![Effect::Notify(Notice::contact_incomplete())]);
    }

    #[test]
    fn valid_message_resets_form_and_scrolls_top() {
        let mut c = controller(MemoryStorage::new());
        let effects = c.dispatch(UiEvent::ContactSubmitted(ContactForm::new(
            "a@b.com",
            "Bonjour !",
        )));
        assert_eq!(
            effects,
            vec![
                Effect::Notify(Notice::contact_sent()),
                Effect::ResetContactForm,
                Effect::ScrollTo(ScrollTarget::Top),
            ]
        );
    }

    #[test]
    fn lightbox_lifecycle_releases_image() {
        let mut c = controller(MemoryStorage::new());
        c.dispatch(UiEvent::LightboxOpened {
            src: "/assets/avatar-full.svg".into(),
            alt: "Portrait".into(),
        });
        assert!(c.state().lightbox_open());
        assert_eq!(
            c.state().lightbox.as_ref().map(|l| l.src.as_str()),
            Some("/assets/avatar-full.svg")
        );

        c.dispatch(UiEvent::LightboxClosed);
        assert!(!c.state().lightbox_open());
        assert_eq!(c.state().lightbox, None);
    }
}
