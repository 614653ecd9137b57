//! Display preferences persisted in the browser's local storage.
//!
//! A preference record has two fields:
//! - `dark` - dark theme on the document root
//! - `avatar_round` - rounded profile photo
//!
//! Each field is described once in [`BINDINGS`], which is what both the
//! store (legacy keys) and the DOM applier (targets, markers, controls) read.

pub mod storage;
pub mod store;

use serde::{Deserialize, Serialize};

pub use storage::{KeyValueStore, MemoryStorage, StorageError};
pub use store::PreferenceStore;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

/// Storage slot holding the serialized preference record
pub const PREF_KEY: &str = "portfolio_prefs_v1";

/// Persisted display preferences
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    #[serde(default)]
    pub dark: bool,
    #[serde(default = "default_avatar_round", rename = "avatarRound")]
    pub avatar_round: bool,
}

fn default_avatar_round() -> bool {
    true
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self {
            dark: false,
            avatar_round: default_avatar_round(),
        }
    }
}

impl PreferenceRecord {
    pub fn get(&self, pref: Preference) -> bool {
        match pref {
            Preference::Dark => self.dark,
            Preference::AvatarRound => self.avatar_round,
        }
    }

    pub fn set(&mut self, pref: Preference, value: bool) {
        match pref {
            Preference::Dark => self.dark = value,
            Preference::AvatarRound => self.avatar_round = value,
        }
    }

    /// Copy with one field replaced
    pub fn with(mut self, pref: Preference, value: bool) -> Self {
        self.set(pref, value);
        self
    }
}

/// A single boolean field of [`PreferenceRecord`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preference {
    Dark,
    AvatarRound,
}

impl Preference {
    pub const ALL: [Preference; 2] = [Preference::Dark, Preference::AvatarRound];

    /// Label of the settings panel checkbox
    pub fn label(&self) -> &'static str {
        match self {
            Preference::Dark => "Mode sombre",
            Preference::AvatarRound => "Avatar rond",
        }
    }

    /// Field name in the serialized record
    pub fn json_key(&self) -> &'static str {
        match self {
            Preference::Dark => "dark",
            Preference::AvatarRound => "avatarRound",
        }
    }

    pub fn binding(&self) -> &'static PreferenceBinding {
        match self {
            Preference::Dark => &BINDINGS[0],
            Preference::AvatarRound => &BINDINGS[1],
        }
    }
}

/// Where a preference lives in the DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    /// The `<html>` element
    Root,
    /// Element by id
    Id(&'static str),
    /// First element carrying a class
    Class(&'static str),
}

impl Selector {
    /// CSS selector string for `querySelector`
    pub fn css(&self) -> String {
        match self {
            Selector::Root => ":root".to_string(),
            Selector::Id(id) => format!("#{id}"),
            Selector::Class(class) => format!(".{class}"),
        }
    }
}

/// Declarative description of one persisted preference.
#[derive(Debug)]
pub struct PreferenceBinding {
    pub preference: Preference,
    /// Checkbox in the settings panel mirroring the value
    pub control_id: &'static str,
    /// Button whose `aria-pressed` mirrors the value, if any
    pub pressed_control: Option<&'static str>,
    /// Element receiving the marker class
    pub target: Selector,
    /// Class present when the preference is on
    pub marker: &'static str,
    /// Single-flag keys ("0"/"1") written by older page variants
    pub legacy_keys: &'static [&'static str],
}

pub static BINDINGS: [PreferenceBinding; 2] = [
    PreferenceBinding {
        preference: Preference::Dark,
        control_id: "pref-dark",
        pressed_control: Some("theme-toggle"),
        target: Selector::Root,
        marker: "dark",
        legacy_keys: &[],
    },
    PreferenceBinding {
        preference: Preference::AvatarRound,
        control_id: "pref-avatar-round",
        pressed_control: None,
        target: Selector::Class("profile-photo"),
        marker: "round",
        legacy_keys: &["photoRound", "profileRound"],
    },
];
