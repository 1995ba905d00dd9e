//! Two-valued page preferences (theme, mode) reflected onto the page root.
//!
//! DESIGN
//! ======
//! Each preference is a [`Preference`] over a [`Choice`] type. The cached
//! `current` value is the single source of truth; the rendered surface is a
//! write-only reflection of it and is never read back. Persistence and the
//! surface are injected through [`PreferenceEnv`] so the same code runs in
//! the browser (feature `web`) and on the server, where both capabilities are
//! no-op stubs.
//!
//! Page-assembly code builds one [`PagePreferences`] per page and passes it by
//! reference. There are no process-wide instances.

pub mod choice;
pub mod env;
pub mod preference;
#[cfg(feature = "web")]
pub mod web;

pub use choice::{Choice, Mode, Theme};
pub use env::{MemoryStore, MemorySurface, NoopStore, NoopSurface, PreferenceEnv, PreferenceStore, RenderSurface};
pub use preference::Preference;

/// Page-scoped preference context holding the theme and mode togglers.
pub struct PagePreferences {
    pub theme: Preference<Theme>,
    pub mode: Preference<Mode>,
}

impl PagePreferences {
    /// Load both preferences from the same environment.
    pub fn load(env: &PreferenceEnv) -> Self {
        Self { theme: Preference::load(env), mode: Preference::load(env) }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
