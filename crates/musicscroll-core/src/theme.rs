//! Theme selection for the feed.
//!
//! Each theme maps to a fixed background/accent pair. The accent is used for
//! the main card and panels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Color pair for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    /// Page background.
    pub background: &'static str,
    /// Card and panel color.
    pub accent: &'static str,
}

/// Theme setting for the feed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Deep blue.
    Blue,
    /// Near-black (default).
    #[default]
    Black,
    /// Dark red.
    Red,
}

impl Theme {
    /// Every selectable theme, in the order the settings panel lists them.
    pub const ALL: [Self; 3] = [Self::Blue, Self::Black, Self::Red];

    /// Colors for this theme.
    #[must_use]
    pub const fn palette(self) -> ThemePalette {
        match self {
            Self::Blue => ThemePalette {
                background: "#1e3a8a",
                accent: "#3b82f6",
            },
            Self::Black => ThemePalette {
                background: "#111827",
                accent: "#374151",
            },
            Self::Red => ThemePalette {
                background: "#7f1d1d",
                accent: "#dc2626",
            },
        }
    }

    /// Lowercase name used in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Black => "black",
            Self::Red => "red",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blue => write!(f, "Blue"),
            Self::Black => write!(f, "Black"),
            Self::Red => write!(f, "Red"),
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == name)
            .ok_or_else(|| Error::UnknownTheme(s.to_string()))
    }
}
