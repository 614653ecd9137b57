//! Page state: persisted preferences plus transient UI flags.

use std::collections::BTreeSet;

use crate::prefs::PreferenceRecord;

/// Image shown in the lightbox
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxImage {
    pub src: String,
    pub alt: String,
}

/// Profile photo sources and load outcome
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoState {
    pub src: String,
    /// Larger rendition loaded in the background, if the site has one
    pub full_src: Option<String>,
    /// Target of the download link; upgraded to `full_src` once it loads
    pub download_href: String,
    /// Photo failed to load and is hidden
    pub failed: bool,
}

impl PhotoState {
    pub fn new(src: impl Into<String>, full_src: Option<String>) -> Self {
        let src = src.into();
        Self {
            download_href: src.clone(),
            src,
            full_src,
            failed: false,
        }
    }
}

/// Everything the page renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub prefs: PreferenceRecord,
    pub nav_open: bool,
    pub settings_open: bool,
    pub lightbox: Option<LightboxImage>,
    /// Section whose nav link is highlighted
    pub active_section: Option<String>,
    /// `.reveal` elements that have animated in
    pub revealed: BTreeSet<String>,
    pub photo: PhotoState,
}

impl UiState {
    pub fn new(prefs: PreferenceRecord, photo: PhotoState) -> Self {
        Self {
            prefs,
            nav_open: false,
            settings_open: false,
            lightbox: None,
            active_section: None,
            revealed: BTreeSet::new(),
            photo,
        }
    }

    pub fn lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }

    /// Whether the nav link pointing at `href` is the highlighted one
    pub fn is_active_link(&self, href: &str) -> bool {
        match (&self.active_section, crate::scroll::anchor_target(href)) {
            (Some(active), Some(id)) => active == id,
            _ => false,
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}
