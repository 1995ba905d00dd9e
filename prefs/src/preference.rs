//! A single persisted, two-valued preference.
//!
//! `apply` is the only path that touches the surface, the store and the
//! subscriber list. `set` and `toggle` funnel into it; `load` calls it once
//! with `initial_load = true` so the page reflects the stored value without
//! writing it back.

use std::fmt;
use std::rc::Rc;

use tracing::warn;

use crate::choice::Choice;
use crate::env::{PreferenceEnv, PreferenceStore, RenderSurface};

type Subscriber<T> = Box<dyn FnMut(T)>;

pub struct Preference<T: Choice> {
    current: T,
    store: Rc<dyn PreferenceStore>,
    surface: Rc<dyn RenderSurface>,
    subscribers: Vec<Subscriber<T>>,
}

impl<T: Choice> Preference<T> {
    /// Build from the stored value (or the default) and reflect it onto the
    /// surface.
    pub fn load(env: &PreferenceEnv) -> Self {
        let mut pref = Self {
            current: T::default_value(),
            store: Rc::clone(&env.store),
            surface: Rc::clone(&env.surface),
            subscribers: Vec::new(),
        };
        pref.current = pref.stored().unwrap_or_else(T::default_value);
        pref.apply(pref.current, true);
        pref
    }

    /// Value held in the persisted store, if any and if legal.
    pub fn stored(&self) -> Option<T> {
        let raw = self.store.get(T::STORAGE_KEY)?;
        let parsed = T::parse(&raw);
        if parsed.is_none() {
            warn!(key = T::STORAGE_KEY, value = %raw, "ignoring invalid stored preference");
        }
        parsed
    }

    /// Reflect `value` onto the surface and notify subscribers. Unless this is
    /// the initial load, also persist it and make it the current value.
    ///
    /// Does nothing when the surface is detached.
    pub fn apply(&mut self, value: T, initial_load: bool) {
        if !self.surface.is_attached() {
            return;
        }

        if value.is_default() {
            self.surface.remove_attribute(T::ATTRIBUTE);
        } else {
            self.surface.set_attribute(T::ATTRIBUTE, value.as_str());
        }

        if let Some(class) = value.class_name() {
            for stale in T::ALL.iter().filter_map(|v| v.class_name()) {
                self.surface.remove_class(&stale);
            }
            self.surface.add_class(&class);
        }

        if !initial_load {
            self.store.set(T::STORAGE_KEY, value.as_str());
            self.current = value;
        }

        for notify in &mut self.subscribers {
            notify(value);
        }
    }

    /// Switch to the other value and return the resulting current value.
    pub fn toggle(&mut self) -> T {
        self.apply(self.current.other(), false);
        self.current
    }

    /// Set from raw input. Illegal input is logged and ignored; the returned
    /// value is the current one either way.
    pub fn set(&mut self, raw: &str) -> T {
        match T::parse(raw) {
            Some(value) => self.apply(value, false),
            None => {
                let legal = T::ALL.map(Choice::as_str);
                warn!(
                    key = T::STORAGE_KEY,
                    value = %raw,
                    "invalid preference value, expected '{}' or '{}'",
                    legal[0],
                    legal[1]
                );
            }
        }
        self.current
    }

    #[must_use]
    pub fn current(&self) -> T {
        self.current
    }

    /// Register a listener called with the new value after every `apply`.
    pub fn subscribe(&mut self, listener: impl FnMut(T) + 'static) {
        self.subscribers.push(Box::new(listener));
    }
}

impl<T: Choice> fmt::Debug for Preference<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preference")
            .field("key", &T::STORAGE_KEY)
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "preference_test.rs"]
mod tests;
