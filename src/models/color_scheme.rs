//! Color scheme preference with OS-level detection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color scheme for light/dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light backgrounds, dark text
    #[default]
    Light,
    /// Dark backgrounds, light text
    Dark,
}

/// All selectable color schemes, in display order.
pub const COLOR_SCHEMES: [ColorScheme; 2] = [ColorScheme::Light, ColorScheme::Dark];

impl ColorScheme {
    /// Detects the OS color scheme preference.
    ///
    /// Falls back to light when the preference is unspecified or detection
    /// fails, matching the browser default. An explicit query parameter
    /// always overrides this.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Dark => Self::Dark,
            dark_light::Mode::Light | dark_light::Mode::Default => Self::Light,
        }
    }

    /// Parses a query-string value.
    ///
    /// Returns `None` for empty or unrecognized values, which callers treat
    /// as "unspecified" and resolve via [`ColorScheme::detect`].
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The lowercase name used in query strings and CSS classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Capitalized label for UI controls (e.g., "Light").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
