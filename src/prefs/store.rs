//! Preference persistence with default fallback.

use super::storage::KeyValueStore;
use super::{PreferenceRecord, BINDINGS, PREF_KEY};

/// Reads and writes the preference record in a single storage slot.
///
/// Storage faults stop here: `load` falls back to defaults and `save`
/// drops the write, leaving the caller's in-memory record authoritative.
#[derive(Debug, Clone)]
pub struct PreferenceStore<S> {
    storage: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Load the stored record, or the default when absent, corrupt or
    /// unreadable. Older single-flag keys seed the record when the slot
    /// itself has never been written.
    pub fn load(&self) -> PreferenceRecord {
        let raw = match self.storage.get(PREF_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("Preference storage unreadable, using defaults: {}", e);
                return PreferenceRecord::default();
            }
        };

        match raw {
            Some(raw) => match serde_json::from_str::<PreferenceRecord>(&raw) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("Ignoring corrupt {} value: {}", PREF_KEY, e);
                    PreferenceRecord::default()
                }
            },
            None => self.load_legacy(),
        }
    }

    /// Persist the record. Faults are logged and swallowed.
    pub fn save(&mut self, record: &PreferenceRecord) {
        let json = match serde_json::to_string(record) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize preferences: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(PREF_KEY, &json) {
            tracing::debug!("Preference write dropped: {}", e);
        }
    }

    fn load_legacy(&self) -> PreferenceRecord {
        let mut record = PreferenceRecord::default();
        for binding in &BINDINGS {
            let flag = binding
                .legacy_keys
                .iter()
                .find_map(|key| self.storage.get(key).ok().flatten().and_then(|v| parse_flag(&v)));
            if let Some(value) = flag {
                tracing::info!(
                    "Migrated legacy {:?} preference into {}",
                    binding.preference,
                    PREF_KEY
                );
                record.set(binding.preference, value);
            }
        }
        record
    }
}

/// Legacy flags are stored as "1" / "0"
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}
