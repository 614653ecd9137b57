//! UI events and the pure reducer that maps them onto state and effects.

use crate::contact::ContactForm;
use crate::notice::Notice;
use crate::prefs::{Preference, PreferenceRecord};
use crate::scroll::{self, ScrollTarget, REVEAL_THRESHOLD, SCROLLSPY_THRESHOLD};

use super::state::{LightboxImage, UiState};

/// Everything the page reacts to
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// Mobile nav toggle button
    NavToggled,
    /// In-page nav link (href already known to be an anchor)
    NavLinkClicked { href: String },
    Resized { width: f64 },
    EscapePressed,
    /// Click anywhere outside the settings panel and its button
    OutsideClicked,
    SettingsOpened,
    SettingsClosed,
    /// Settings panel checkbox
    PreferenceChanged { preference: Preference, value: bool },
    /// Header theme button
    ThemeToggled,
    PreferencesReset,
    LightboxOpened { src: String, alt: String },
    LightboxClosed,
    SectionVisible { id: String, ratio: f64 },
    RevealVisible { id: String, ratio: f64 },
    /// No visibility notifications available; show everything
    RevealUnsupported { ids: Vec<String> },
    FullPhotoLoaded,
    PhotoFailed,
    ContactSubmitted(ContactForm),
}

impl UiEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            UiEvent::NavToggled => "nav_toggled",
            UiEvent::NavLinkClicked { .. } => "nav_link_clicked",
            UiEvent::Resized { .. } => "resized",
            UiEvent::EscapePressed => "escape_pressed",
            UiEvent::OutsideClicked => "outside_clicked",
            UiEvent::SettingsOpened => "settings_opened",
            UiEvent::SettingsClosed => "settings_closed",
            UiEvent::PreferenceChanged { .. } => "preference_changed",
            UiEvent::ThemeToggled => "theme_toggled",
            UiEvent::PreferencesReset => "preferences_reset",
            UiEvent::LightboxOpened { .. } => "lightbox_opened",
            UiEvent::LightboxClosed => "lightbox_closed",
            UiEvent::SectionVisible { .. } => "section_visible",
            UiEvent::RevealVisible { .. } => "reveal_visible",
            UiEvent::RevealUnsupported { .. } => "reveal_unsupported",
            UiEvent::FullPhotoLoaded => "full_photo_loaded",
            UiEvent::PhotoFailed => "photo_failed",
            UiEvent::ContactSubmitted(_) => "contact_submitted",
        }
    }
}

/// Side effects requested by the reducer, in execution order
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Write the preference record to storage
    Persist,
    /// Project the preference record onto the DOM
    Render,
    Notify(Notice),
    ScrollTo(ScrollTarget),
    ResetContactForm,
}

/// Result of one reducer step
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: UiState,
    pub effects: Vec<Effect>,
}

/// `(state, event) -> (state, effects)`; performs no I/O.
pub fn reduce(state: &UiState, event: UiEvent) -> Transition {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match event {
        UiEvent::NavToggled => next.nav_open = !next.nav_open,
        UiEvent::NavLinkClicked { href } => {
            if let Some(id) = scroll::anchor_target(&href) {
                next.nav_open = false;
                effects.push(Effect::ScrollTo(ScrollTarget::Section(id.to_string())));
            }
        }
        UiEvent::Resized { width } => {
            if scroll::is_wide_viewport(width) {
                next.nav_open = false;
            }
        }
        UiEvent::EscapePressed => {
            next.nav_open = false;
            next.settings_open = false;
            next.lightbox = None;
        }
        UiEvent::OutsideClicked | UiEvent::SettingsClosed => next.settings_open = false,
        UiEvent::SettingsOpened => next.settings_open = true,
        UiEvent::PreferenceChanged { preference, value } => {
            next.prefs.set(preference, value);
            effects.extend([
                Effect::Persist,
                Effect::Render,
                Effect::Notify(Notice::preference_changed(preference, value)),
            ]);
        }
        UiEvent::ThemeToggled => {
            next.prefs.dark = !next.prefs.dark;
            effects.extend([Effect::Persist, Effect::Render]);
        }
        UiEvent::PreferencesReset => {
            next.prefs = PreferenceRecord::default();
            effects.extend([
                Effect::Persist,
                Effect::Render,
                Effect::Notify(Notice::preferences_reset()),
            ]);
        }
        UiEvent::LightboxOpened { src, alt } => next.lightbox = Some(LightboxImage { src, alt }),
        UiEvent::LightboxClosed => next.lightbox = None,
        UiEvent::SectionVisible { id, ratio } => {
            if ratio >= SCROLLSPY_THRESHOLD {
                next.active_section = Some(id);
            }
        }
        UiEvent::RevealVisible { id, ratio } => {
            if ratio >= REVEAL_THRESHOLD {
                next.revealed.insert(id);
            }
        }
        UiEvent::RevealUnsupported { ids } => next.revealed.extend(ids),
        UiEvent::FullPhotoLoaded => {
            if let Some(full) = &next.photo.full_src {
                next.photo.download_href = full.clone();
            }
        }
        UiEvent::PhotoFailed => next.photo.failed = true,
        UiEvent::ContactSubmitted(form) => match form.validate() {
            Ok(message) => {
                tracing::info!(
                    "Contact message from {} ({} chars) accepted (simulated send)",
                    message.email,
                    message.message.chars().count()
                );
                effects.extend([
                    Effect::Notify(Notice::contact_sent()),
                    Effect::ResetContactForm,
                    Effect::ScrollTo(ScrollTarget::Top),
                ]);
            }
            Err(e) => {
                tracing::debug!("Contact form rejected: {}", e);
                effects.push(Effect::Notify(Notice::contact_incomplete()));
            }
        },
    }

    Transition {
        state: next,
        effects,
    }
}
