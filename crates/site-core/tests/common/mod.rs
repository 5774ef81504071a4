// Host-side doubles for the DOM and storage surfaces.

#![allow(dead_code)]
use site_core::{PreferenceStore, StoreError, StyleTarget};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

/// Records style properties and classes the way an element would hold them.
#[derive(Default)]
pub struct RecordingStyle {
    pub props: RefCell<BTreeMap<String, String>>,
    pub classes: RefCell<BTreeSet<String>>,
}

impl RecordingStyle {
    pub fn prop(&self, name: &str) -> Option<String> {
        self.props.borrow().get(name).cloned()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

impl StyleTarget for RecordingStyle {
    fn set_property(&self, name: &str, value: &str) {
        self.props
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn remove_property(&self, name: &str) {
        self.props.borrow_mut().remove(name);
    }

    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }
}

/// In-memory store; `broken` makes every access fail like disabled storage.
#[derive(Default)]
pub struct MemoryStore {
    pub items: RefCell<BTreeMap<String, String>>,
    pub broken: bool,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.broken {
            return Err(StoreError::Unavailable);
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.broken {
            return Err(StoreError::Rejected("QuotaExceededError".to_string()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
