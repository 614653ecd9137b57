//! In-process document used for server rendering and tests.

use std::collections::{BTreeMap, BTreeSet};

use super::DomTarget;
use crate::prefs::{Selector, BINDINGS};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementState {
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    pub checked: bool,
}

/// Elements keyed by CSS selector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    elements: BTreeMap<String, ElementState>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document holding every element the preference bindings touch
    pub fn portfolio() -> Self {
        let mut doc = Self::new();
        for binding in &BINDINGS {
            doc = doc
                .with_element(binding.target)
                .with_element(Selector::Id(binding.control_id));
            if let Some(pressed) = binding.pressed_control {
                doc = doc.with_element(Selector::Id(pressed));
            }
        }
        doc
    }

    pub fn with_element(mut self, selector: Selector) -> Self {
        self.elements.entry(selector.css()).or_default();
        self
    }

    pub fn contains(&self, selector: Selector) -> bool {
        self.elements.contains_key(&selector.css())
    }

    pub fn element(&self, selector: Selector) -> Option<&ElementState> {
        self.elements.get(&selector.css())
    }

    pub fn has_class(&self, selector: Selector, class: &str) -> bool {
        self.element(selector)
            .is_some_and(|el| el.classes.contains(class))
    }

    pub fn attribute(&self, selector: Selector, name: &str) -> Option<&str> {
        self.element(selector)
            .and_then(|el| el.attributes.get(name))
            .map(String::as_str)
    }

    pub fn is_checked(&self, selector: Selector) -> bool {
        self.element(selector).is_some_and(|el| el.checked)
    }

    fn element_mut(&mut self, selector: Selector) -> Option<&mut ElementState> {
        self.elements.get_mut(&selector.css())
    }
}

impl DomTarget for MemoryDocument {
    fn toggle_class(&mut self, target: Selector, class: &str, on: bool) -> bool {
        let Some(el) = self.element_mut(target) else {
            return false;
        };
        if on {
            el.classes.insert(class.to_string());
        } else {
            el.classes.remove(class);
        }
        true
    }

    fn set_attribute(&mut self, target: Selector, name: &str, value: &str) -> bool {
        let Some(el) = self.element_mut(target) else {
            return false;
        };
        el.attributes.insert(name.to_string(), value.to_string());
        true
    }

    fn set_checked(&mut self, target: Selector, checked: bool) -> bool {
        let Some(el) = self.element_mut(target) else {
            return false;
        };
        el.checked = checked;
        true
    }
}
