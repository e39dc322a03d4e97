//! Light/dark theme and the stroke colors it implies.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// Color theme of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Black outlines on a white background.
    #[default]
    Light,
    /// White outlines on a dark background.
    Dark,
}

impl Theme {
    /// Stroke color for outlines drawn under this theme.
    #[must_use]
    pub fn stroke(self) -> &'static str {
        match self {
            Self::Light => "black",
            Self::Dark => "white",
        }
    }

    /// Fill color for drawn-point markers; matches the stroke so they stay visible.
    #[must_use]
    pub fn marker_fill(self) -> &'static str {
        self.stroke()
    }

    /// Background behind the shapes.
    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Light => "#ffffff",
            Self::Dark => "#1e1e1e",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
