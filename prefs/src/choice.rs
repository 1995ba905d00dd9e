//! Legal values for each preference and how they map onto the page root.

use std::fmt;

/// A setting with exactly two legal values.
///
/// `ALL[0]` is the default value: it is what a fresh page gets when nothing
/// is stored, and it is the value for which [`Choice::ATTRIBUTE`] is absent.
pub trait Choice: Copy + Eq + fmt::Debug + 'static {
    /// Key in the persisted store.
    const STORAGE_KEY: &'static str;
    /// Boolean-style attribute on the root node, present only for `ALL[1]`.
    const ATTRIBUTE: &'static str;
    /// When set, the root node also carries a `<prefix>-<value>` class.
    const CLASS_PREFIX: Option<&'static str>;
    /// Both legal values, default first.
    const ALL: [Self; 2];

    /// Wire/storage representation.
    fn as_str(self) -> &'static str;

    fn default_value() -> Self {
        Self::ALL[0]
    }

    #[must_use]
    fn is_default(self) -> bool {
        self == Self::ALL[0]
    }

    /// The other legal value.
    #[must_use]
    fn other(self) -> Self {
        if self.is_default() { Self::ALL[1] } else { Self::ALL[0] }
    }

    /// Parse a raw string. Only exact matches are legal.
    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == raw)
    }

    /// Root class name for this value, if the choice uses classes.
    fn class_name(self) -> Option<String> {
        Self::CLASS_PREFIX.map(|prefix| format!("{prefix}-{}", self.as_str()))
    }
}

// =============================================================================
// THEME
// =============================================================================

/// Site colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Standard,
    Water,
}

impl Choice for Theme {
    const STORAGE_KEY: &'static str = "theme";
    const ATTRIBUTE: &'static str = "data-theme";
    const CLASS_PREFIX: Option<&'static str> = Some("theme");
    const ALL: [Self; 2] = [Self::Standard, Self::Water];

    fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "default",
            Self::Water => "water",
        }
    }
}

// =============================================================================
// MODE
// =============================================================================

/// Light/dark display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Choice for Mode {
    const STORAGE_KEY: &'static str = "mode";
    const ATTRIBUTE: &'static str = "data-mode";
    const CLASS_PREFIX: Option<&'static str> = None;
    const ALL: [Self; 2] = [Self::Light, Self::Dark];

    fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "choice_test.rs"]
mod tests;
