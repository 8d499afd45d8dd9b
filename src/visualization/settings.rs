//! # Wireframe Settings
//!
//! The user-facing configuration of a session. Storage belongs to the host; this
//! module only holds the values, their defaults and validation.
//!
//! | Section | Key | Default |
//! |---|---|---|
//! | Controls | Refresh | `Keypad7` |
//! | Controls | Remove | `Keypad8` |
//! | Controls | Toggle Auto Update | `Keypad9` |
//! | Preferences | Line Width | `0.2` |
//! | Preferences | Line Color | `Red` |
//! | Preferences | Auto Update | `false` |

use thiserror::Error;

use super::traits::KeyCode;
use crate::gfx::color::LineColor;
use crate::gfx::geometry::WireframeStyle;

/// Errors produced when building or validating settings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("unknown line color '{0}', expected one of Black, Blue, Cyan, Gray, Green, Magenta, Red, White, Yellow")]
    UnknownColor(String),
    #[error("invalid line width {0}, must be finite and not negative")]
    InvalidLineWidth(f32),
}

/// Keys driving a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    /// Rebuild all wireframes
    pub refresh: KeyCode,
    /// Remove all wireframes
    pub remove: KeyCode,
    /// Flip the auto-update flag
    pub toggle_auto_update: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            refresh: KeyCode::Keypad7,
            remove: KeyCode::Keypad8,
            toggle_auto_update: KeyCode::Keypad9,
        }
    }
}

/// Configuration of a wireframe session
#[derive(Debug, Clone, PartialEq)]
pub struct WireframeSettings {
    pub key_bindings: KeyBindings,
    /// Width of wireframe lines
    pub line_width: f32,
    /// Color of wireframe lines
    pub line_color: LineColor,
    /// Rebuild wireframes every tick
    pub auto_update: bool,
}

impl Default for WireframeSettings {
    fn default() -> Self {
        Self {
            key_bindings: KeyBindings::default(),
            line_width: 0.2,
            line_color: LineColor::Red,
            auto_update: false,
        }
    }
}

impl WireframeSettings {
    pub fn with_key_bindings(mut self, key_bindings: KeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }

    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_line_color(mut self, line_color: LineColor) -> Self {
        self.line_color = line_color;
        self
    }

    /// Set the line color from its configured name
    ///
    /// # Arguments
    ///
    /// * `name` - Case-sensitive palette name, e.g. `"Red"`
    ///
    /// # Errors
    ///
    /// [`SettingsError::UnknownColor`] if `name` is not in the palette
    pub fn with_line_color_name(mut self, name: &str) -> Result<Self, SettingsError> {
        self.line_color = name.parse()?;
        Ok(self)
    }

    pub fn with_auto_update(mut self, auto_update: bool) -> Self {
        self.auto_update = auto_update;
        self
    }

    /// Check the values are usable
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            return Err(SettingsError::InvalidLineWidth(self.line_width));
        }
        Ok(())
    }

    /// Stroke used for wireframes built with these settings
    pub fn style(&self) -> WireframeStyle {
        WireframeStyle::new(self.line_width, self.line_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = WireframeSettings::default();

        assert_eq!(settings.key_bindings.refresh, KeyCode::Keypad7);
        assert_eq!(settings.key_bindings.remove, KeyCode::Keypad8);
        assert_eq!(settings.key_bindings.toggle_auto_update, KeyCode::Keypad9);
        assert_eq!(settings.line_width, 0.2);
        assert_eq!(settings.line_color, LineColor::Red);
        assert!(!settings.auto_update);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_line_width_validation() {
        assert_eq!(
            WireframeSettings::default().with_line_width(-1.0).validate(),
            Err(SettingsError::InvalidLineWidth(-1.0))
        );
        assert!(WireframeSettings::default()
            .with_line_width(f32::INFINITY)
            .validate()
            .is_err());
        assert!(WireframeSettings::default()
            .with_line_width(f32::NAN)
            .validate()
            .is_err());
        assert!(WireframeSettings::default().with_line_width(0.0).validate().is_ok());
    }

    #[test]
    fn test_line_color_name() {
        let settings = WireframeSettings::default()
            .with_line_color_name("Cyan")
            .unwrap();
        assert_eq!(settings.line_color, LineColor::Cyan);

        let err = WireframeSettings::default()
            .with_line_color_name("Purple")
            .unwrap_err();
        assert_eq!(err, SettingsError::UnknownColor("Purple".to_string()));
        assert!(err.to_string().contains("Purple"));
    }

    #[test]
    fn test_style_snapshot() {
        let style = WireframeSettings::default()
            .with_line_width(0.5)
            .with_line_color(LineColor::Yellow)
            .style();

        assert_eq!(style.stroke_width, 0.5);
        assert_eq!(style.color, LineColor::Yellow);
    }
}
