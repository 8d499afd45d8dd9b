//! # Line Colors
//!
//! The fixed palette a wireframe can be drawn in, and the resolver that turns a
//! configured color name into a concrete RGBA value.
//!
//! There are two entry points:
//!
//! - [`LineColor::from_str`](std::str::FromStr) is strict and rejects names outside
//!   the palette. It is used when validating configuration.
//! - [`resolve_color`] is lenient: anything it doesn't recognise is drawn white.
//!
//! ## Usage
//!
//! ```rust
//! use area_of_effect::gfx::color::{resolve_color, LineColor, Rgba};
//!
//! assert_eq!(resolve_color("Red"), Rgba::new(1.0, 0.0, 0.0, 1.0));
//! assert_eq!(resolve_color("Purple"), LineColor::White.rgba());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::visualization::settings::SettingsError;

/// A linear RGBA color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Color as `[r, g, b, a]`, the layout hosts usually upload
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(color: Rgba) -> Self {
        color.to_array()
    }
}

/// The nine colors a wireframe may be drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineColor {
    Black,
    Blue,
    Cyan,
    Gray,
    Green,
    Magenta,
    Red,
    #[default]
    White,
    Yellow,
}

impl LineColor {
    /// Every palette entry, in the order offered to the user
    pub const ALL: [LineColor; 9] = [
        LineColor::Black,
        LineColor::Blue,
        LineColor::Cyan,
        LineColor::Gray,
        LineColor::Green,
        LineColor::Magenta,
        LineColor::Red,
        LineColor::White,
        LineColor::Yellow,
    ];

    /// Case-sensitive display name, as stored in configuration
    pub fn name(self) -> &'static str {
        match self {
            LineColor::Black => "Black",
            LineColor::Blue => "Blue",
            LineColor::Cyan => "Cyan",
            LineColor::Gray => "Gray",
            LineColor::Green => "Green",
            LineColor::Magenta => "Magenta",
            LineColor::Red => "Red",
            LineColor::White => "White",
            LineColor::Yellow => "Yellow",
        }
    }

    /// The concrete color for this palette entry
    pub fn rgba(self) -> Rgba {
        match self {
            LineColor::Black => Rgba::new(0.0, 0.0, 0.0, 1.0),
            LineColor::Blue => Rgba::new(0.0, 0.0, 1.0, 1.0),
            LineColor::Cyan => Rgba::new(0.0, 1.0, 1.0, 1.0),
            LineColor::Gray => Rgba::new(0.5, 0.5, 0.5, 1.0),
            LineColor::Green => Rgba::new(0.0, 1.0, 0.0, 1.0),
            LineColor::Magenta => Rgba::new(1.0, 0.0, 1.0, 1.0),
            LineColor::Red => Rgba::new(1.0, 0.0, 0.0, 1.0),
            LineColor::White => Rgba::new(1.0, 1.0, 1.0, 1.0),
            LineColor::Yellow => Rgba::new(1.0, 1.0, 0.0, 1.0),
        }
    }
}

impl fmt::Display for LineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineColor {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineColor::ALL
            .iter()
            .copied()
            .find(|color| color.name() == s)
            .ok_or_else(|| SettingsError::UnknownColor(s.to_string()))
    }
}

/// Resolve a color name to RGBA, falling back to white for unknown names.
///
/// Matching is exact and case-sensitive. This never fails.
pub fn resolve_color(name: &str) -> Rgba {
    match name.parse::<LineColor>() {
        Ok(color) => color.rgba(),
        Err(_) => {
            log::debug!("Unknown line color '{}', using White", name);
            LineColor::White.rgba()
        }
    }
}
