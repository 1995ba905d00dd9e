//! Browser bindings: `window.localStorage` and `document.documentElement`.
//!
//! Requires a browser environment. Every capability falls back to its stub
//! when the corresponding browser object is missing.

use std::rc::Rc;

use crate::env::{NoopStore, NoopSurface, PreferenceEnv, PreferenceStore, RenderSurface};

pub struct LocalStorage(web_sys::Storage);

impl LocalStorage {
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.local_storage().ok().flatten().map(Self)
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = self.0.set_item(key, value);
    }
}

/// The `<html>` element.
pub struct DocumentRoot(web_sys::Element);

impl DocumentRoot {
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document()?.document_element().map(Self)
    }
}

impl RenderSurface for DocumentRoot {
    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn remove_attribute(&self, name: &str) {
        let _ = self.0.remove_attribute(name);
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }
}

impl PreferenceEnv {
    /// Bind to the live page.
    pub fn browser() -> Self {
        let store: Rc<dyn PreferenceStore> = match LocalStorage::from_window() {
            Some(storage) => Rc::new(storage),
            None => Rc::new(NoopStore),
        };
        let surface: Rc<dyn RenderSurface> = match DocumentRoot::from_window() {
            Some(root) => Rc::new(root),
            None => Rc::new(NoopSurface),
        };
        Self { store, surface }
    }
}
