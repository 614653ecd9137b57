//! Transient on-page notices (toasts).

use crate::prefs::Preference;

/// How long a notice stays on screen unless overridden
pub const DEFAULT_NOTICE_MS: u32 = 2600;

/// Inline text replacing a profile photo that failed to load
pub const PHOTO_FAILED: &str = "La photo n'a pas pu être chargée.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NoticeTone {
    #[default]
    Info,
    Error,
}

impl NoticeTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeTone::Info => "toast",
            NoticeTone::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub tone: NoticeTone,
    pub duration_ms: u32,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: NoticeTone::Info,
            duration_ms: DEFAULT_NOTICE_MS,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: NoticeTone::Error,
            duration_ms: DEFAULT_NOTICE_MS,
        }
    }

    /// Confirmation shown after a settings checkbox changes
    pub fn preference_changed(pref: Preference, value: bool) -> Self {
        let text = match (pref, value) {
            (Preference::Dark, true) => "Mode sombre activé",
            (Preference::Dark, false) => "Mode clair activé",
            (Preference::AvatarRound, true) => "Avatar rond activé",
            (Preference::AvatarRound, false) => "Avatar carré activé",
        };
        Self::info(text)
    }

    pub fn preferences_reset() -> Self {
        Self::info("Préférences réinitialisées")
    }

    pub fn contact_incomplete() -> Self {
        Self::error("Merci de compléter l'email et le message")
    }

    pub fn contact_sent() -> Self {
        Self::info("Message envoyé — merci !")
    }
}

/// Notices currently on screen. Each one is dismissed independently when
/// its timer fires, so ids stay stable while others come and go.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeQueue {
    next_id: u64,
    items: Vec<(u64, Notice)>,
}

impl NoticeQueue {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push((id, notice));
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|(item_id, _)| *item_id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &(u64, Notice)> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_messages_follow_new_value() {
        assert_eq!(
            Notice::preference_changed(Preference::Dark, true).text,
            "Mode sombre activé"
        );
        assert_eq!(
            Notice::preference_changed(Preference::AvatarRound, false).text,
            "Avatar carré activé"
        );
    }

    #[test]
    fn contact_errors_use_error_tone() {
        let notice = Notice::contact_incomplete();
        assert_eq!(notice.tone, NoticeTone::Error);
        assert_eq!(notice.duration_ms, DEFAULT_NOTICE_MS);
    }

    #[test]
    fn queue_dismisses_by_id() {
        let mut queue = NoticeQueue::default();
        let first = queue.push(Notice::info("one"));
        let second = queue.push(Notice::info("two"));
        assert_ne!(first, second);

        queue.dismiss(first);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().map(|(id, _)| *id), Some(second));

        // Dismissing twice is harmless
        queue.dismiss(first);
        assert_eq!(queue.len(), 1);
    }
}
