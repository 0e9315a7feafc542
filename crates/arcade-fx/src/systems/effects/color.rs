use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS color string, handed to the surface as a fill style.
///
/// Effects never inspect the color; any value the host backend accepts
/// (`"#ff8800"`, `"rgba(255,0,0,0.5)"`, `"gold"`) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub const WHITE: &'static str = "#ffffff";
    pub const BLACK: &'static str = "#000000";

    pub fn new(css: impl Into<String>) -> Self {
        Color(css.into())
    }

    pub fn white() -> Self {
        Color::new(Self::WHITE)
    }

    pub fn black() -> Self {
        Color::new(Self::BLACK)
    }

    /// `#rrggbb` from 8-bit channels.
    pub fn hex(r: u8, g: u8, b: u8) -> Self {
        Color(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    /// `rgba(r,g,b,a)` with alpha clamped to [0, 1].
    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color(format!("rgba({r},{g},{b},{})", a.clamp(0.0, 1.0)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::white()
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::new(s)
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
