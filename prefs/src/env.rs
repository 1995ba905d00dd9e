//! Injected capabilities: the persisted store and the rendered surface.
//!
//! DESIGN
//! ======
//! Each capability has a no-op stub for contexts without a page (server
//! rendering, tests of unrelated code), an in-memory implementation that
//! records state, and a browser binding behind the `web` feature. Methods
//! take `&self` because one store and one surface are shared by every
//! preference on the page.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

// =============================================================================
// PERSISTED STORE
// =============================================================================

/// External key-value store surviving across page loads.
pub trait PreferenceStore {
    /// Raw stored text for `key`, `None` when absent or unavailable.
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`. Failures are swallowed.
    fn set(&self, key: &str, value: &str);
}

/// Store used when no persisted store exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStore;

impl PreferenceStore for NoopStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}
}

/// In-process keyed map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with the given entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect();
        Self { entries: RefCell::new(map) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

// =============================================================================
// RENDERED SURFACE
// =============================================================================

/// Root node of the displayed document.
pub trait RenderSurface {
    /// `false` when there is no document to reflect onto.
    fn is_attached(&self) -> bool {
        true
    }
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// Surface used outside a rendering context.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSurface;

impl RenderSurface for NoopSurface {
    fn is_attached(&self) -> bool {
        false
    }

    fn set_attribute(&self, _name: &str, _value: &str) {}

    fn remove_attribute(&self, _name: &str) {}

    fn add_class(&self, _class: &str) {}

    fn remove_class(&self, _class: &str) {}
}

/// Attributes and classes of a [`MemorySurface`] at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceSnapshot {
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
}

/// Surface that records its attribute and class state.
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: RefCell<SurfaceSnapshot>,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    #[must_use]
    pub fn snapshot(&self) -> SurfaceSnapshot {
        self.state.borrow().clone()
    }
}

impl RenderSurface for MemorySurface {
    fn set_attribute(&self, name: &str, value: &str) {
        self.state.borrow_mut().attributes.insert(name.to_owned(), value.to_owned());
    }

    fn remove_attribute(&self, name: &str) {
        self.state.borrow_mut().attributes.remove(name);
    }

    fn add_class(&self, class: &str) {
        self.state.borrow_mut().classes.insert(class.to_owned());
    }

    fn remove_class(&self, class: &str) {
        self.state.borrow_mut().classes.remove(class);
    }
}

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// The capabilities a preference needs, shared by every preference on a page.
#[derive(Clone)]
pub struct PreferenceEnv {
    pub store: Rc<dyn PreferenceStore>,
    pub surface: Rc<dyn RenderSurface>,
}

impl PreferenceEnv {
    pub fn new(store: Rc<dyn PreferenceStore>, surface: Rc<dyn RenderSurface>) -> Self {
        Self { store, surface }
    }

    /// Environment with neither a store nor a surface.
    #[must_use]
    pub fn detached() -> Self {
        Self { store: Rc::new(NoopStore), surface: Rc::new(NoopSurface) }
    }
}

impl Default for PreferenceEnv {
    fn default() -> Self {
        Self::detached()
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
