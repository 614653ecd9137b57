//! DOM projection of the preference record.
//!
//! - `DomTarget` - the three mutations the page ever needs (class, attribute, checked)
//! - `MemoryDocument` - in-process element table for SSR and tests
//! - `BrowserDocument` - the live document (wasm only)
//! - `apply` - idempotent record → DOM projection

mod memory;

pub use memory::{ElementState, MemoryDocument};

use crate::prefs::{PreferenceRecord, Selector, BINDINGS};

/// Mutable view of the page. Every method returns `false` when the target
/// element does not exist; callers skip that step and carry on.
pub trait DomTarget {
    fn toggle_class(&mut self, target: Selector, class: &str, on: bool) -> bool;
    fn set_attribute(&mut self, target: Selector, name: &str, value: &str) -> bool;
    fn set_checked(&mut self, target: Selector, checked: bool) -> bool;
}

/// Project `record` onto the document.
///
/// Every step sets an absolute value, so applying the same record again
/// leaves the document unchanged.
pub fn apply(record: &PreferenceRecord, dom: &mut dyn DomTarget) {
    for binding in &BINDINGS {
        let on = record.get(binding.preference);

        if !dom.toggle_class(binding.target, binding.marker, on) {
            tracing::debug!("No {} element, skipping marker", binding.target.css());
        }
        dom.set_checked(Selector::Id(binding.control_id), on);
        if let Some(pressed) = binding.pressed_control {
            dom.set_attribute(Selector::Id(pressed), "aria-pressed", bool_attr(on));
        }
    }
}

/// ARIA boolean attribute value
pub fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

// ============ WASM-only document ============

/// The live `window.document`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDocument;

#[cfg(target_arch = "wasm32")]
impl BrowserDocument {
    fn find(target: Selector) -> Option<web_sys::Element> {
        let document = web_sys::window()?.document()?;
        match target {
            Selector::Root => document.document_element(),
            Selector::Id(id) => document.get_element_by_id(id),
            Selector::Class(_) => document.query_selector(&target.css()).ok().flatten(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl DomTarget for BrowserDocument {
    fn toggle_class(&mut self, target: Selector, class: &str, on: bool) -> bool {
        match Self::find(target) {
            Some(el) => el.class_list().toggle_with_force(class, on).is_ok(),
            None => false,
        }
    }

    fn set_attribute(&mut self, target: Selector, name: &str, value: &str) -> bool {
        match Self::find(target) {
            Some(el) => el.set_attribute(name, value).is_ok(),
            None => false,
        }
    }

    fn set_checked(&mut self, target: Selector, checked: bool) -> bool {
        use wasm_bindgen::JsCast;

        match Self::find(target).and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok()) {
            Some(input) => {
                input.set_checked(checked);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_record_marks_root_and_controls() {
        let mut doc = MemoryDocument::portfolio();
        apply(
            &PreferenceRecord {
                dark: true,
                avatar_round: false,
            },
            &mut doc,
        );

        assert!(doc.has_class(Selector::Root, "dark"));
        assert!(!doc.has_class(Selector::Class("profile-photo"), "round"));
        assert!(doc.is_checked(Selector::Id("pref-dark")));
        assert!(!doc.is_checked(Selector::Id("pref-avatar-round")));
        assert_eq!(
            doc.attribute(Selector::Id("theme-toggle"), "aria-pressed"),
            Some("true")
        );
    }

    #[test]
    fn apply_is_idempotent() {
        for dark in [false, true] {
            for avatar_round in [false, true] {
                let record = PreferenceRecord { dark, avatar_round };

                let mut once = MemoryDocument::portfolio();
                apply(&record, &mut once);

                let mut many = MemoryDocument::portfolio();
                for _ in 0..3 {
                    apply(&record, &mut many);
                }

                assert_eq!(once, many);
            }
        }
    }

    #[test]
    fn apply_overwrites_previous_record() {
        let mut doc = MemoryDocument::portfolio();
        apply(
            &PreferenceRecord {
                dark: true,
                avatar_round: false,
            },
            &mut doc,
        );
        apply(&PreferenceRecord::default(), &mut doc);

        let mut fresh = MemoryDocument::portfolio();
        apply(&PreferenceRecord::default(), &mut fresh);
        assert_eq!(doc, fresh);
    }

    #[test]
    fn missing_elements_are_skipped() {
        // A page variant without a settings panel or theme toggle
        let mut doc = MemoryDocument::new().with_element(Selector::Class("profile-photo"));
        apply(
            &PreferenceRecord {
                dark: true,
                avatar_round: true,
            },
            &mut doc,
        );

        assert!(doc.has_class(Selector::Class("profile-photo"), "round"));
        assert!(!doc.contains(Selector::Id("pref-dark")));
    }
}
