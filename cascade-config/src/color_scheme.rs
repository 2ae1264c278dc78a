//! Named color schemes.
//!
//! Color schemes are owned by the global settings record but are serialized
//! through their own JSON shape, separate from the globals object:
//!
//! ```json
//! { "name": "Campbell", "foreground": "#cccccc", "background": "#0c0c0c",
//!   "black": "#0c0c0c", "red": "#c50f1f", ..., "brightWhite": "#f2f2f2" }
//! ```
//!
//! Any color missing from the JSON falls back to the Campbell palette.

use crate::error::SettingsError;
use crate::terminal_settings::TerminalSettings;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A color in RGB format, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_rgb(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse a `#rrggbb` string.
    pub fn from_hex(value: &str) -> Result<Self, SettingsError> {
        let invalid = || SettingsError::InvalidColor {
            value: value.to_string(),
        };

        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let rgb = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        Ok(Self::from_rgb(rgb))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = SettingsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// A named palette: default foreground/background plus the 16 ANSI colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorScheme {
    pub name: String,
    pub foreground: Color,
    pub background: Color,

    // ANSI colors (0-15)
    pub black: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub purple: Color,
    pub cyan: Color,
    pub white: Color,
    pub bright_black: Color,
    pub bright_red: Color,
    pub bright_green: Color,
    pub bright_yellow: Color,
    pub bright_blue: Color,
    pub bright_purple: Color,
    pub bright_cyan: Color,
    pub bright_white: Color,
}

impl ColorScheme {
    /// Create a scheme with the given name and the Campbell palette.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::campbell()
        }
    }

    /// The 16 ANSI colors in index order.
    pub fn table(&self) -> [Color; 16] {
        [
            self.black,
            self.red,
            self.green,
            self.yellow,
            self.blue,
            self.purple,
            self.cyan,
            self.white,
            self.bright_black,
            self.bright_red,
            self.bright_green,
            self.bright_yellow,
            self.bright_blue,
            self.bright_purple,
            self.bright_cyan,
            self.bright_white,
        ]
    }

    /// Get ANSI color by index (0-15). Out-of-range indices yield the foreground.
    pub fn ansi_color(&self, index: u8) -> Color {
        self.table()
            .get(usize::from(index))
            .copied()
            .unwrap_or(self.foreground)
    }

    /// Copy this scheme's colors into a terminal's settings.
    pub fn apply_scheme(&self, settings: &mut TerminalSettings) {
        settings.default_foreground = self.foreground;
        settings.default_background = self.background;
        settings.color_table = self.table();
    }

    /// Read a scheme from its JSON object.
    pub fn from_json(json: &Value) -> Result<Self, SettingsError> {
        if !json.is_object() {
            return Err(SettingsError::NotAnObject {
                found: crate::error::json_type_name(json),
            });
        }
        Ok(Self::deserialize(json)?)
    }

    /// Serialize this scheme to its JSON object.
    pub fn to_json(&self) -> Result<Value, SettingsError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Campbell, the default palette.
    pub fn campbell() -> Self {
        Self {
            name: "Campbell".to_string(),
            foreground: Color::from_rgb(0xCCCCCC),
            background: Color::from_rgb(0x0C0C0C),
            black: Color::from_rgb(0x0C0C0C),
            red: Color::from_rgb(0xC50F1F),
            green: Color::from_rgb(0x13A10E),
            yellow: Color::from_rgb(0xC19C00),
            blue: Color::from_rgb(0x0037DA),
            purple: Color::from_rgb(0x881798),
            cyan: Color::from_rgb(0x3A96DD),
            white: Color::from_rgb(0xCCCCCC),
            bright_black: Color::from_rgb(0x767676),
            bright_red: Color::from_rgb(0xE74856),
            bright_green: Color::from_rgb(0x16C60C),
            bright_yellow: Color::from_rgb(0xF9F1A5),
            bright_blue: Color::from_rgb(0x3B78FF),
            bright_purple: Color::from_rgb(0xB4009E),
            bright_cyan: Color::from_rgb(0x61D6D6),
            bright_white: Color::from_rgb(0xF2F2F2),
        }
    }

    /// One Half Dark
    pub fn one_half_dark() -> Self {
        Self {
            name: "One Half Dark".to_string(),
            foreground: Color::from_rgb(0xDCDFE4),
            background: Color::from_rgb(0x282C34),
            black: Color::from_rgb(0x282C34),
            red: Color::from_rgb(0xE06C75),
            green: Color::from_rgb(0x98C379),
            yellow: Color::from_rgb(0xE5C07B),
            blue: Color::from_rgb(0x61AFEF),
            purple: Color::from_rgb(0xC678DD),
            cyan: Color::from_rgb(0x56B6C2),
            white: Color::from_rgb(0xDCDFE4),
            bright_black: Color::from_rgb(0x5A6374),
            bright_red: Color::from_rgb(0xE06C75),
            bright_green: Color::from_rgb(0x98C379),
            bright_yellow: Color::from_rgb(0xE5C07B),
            bright_blue: Color::from_rgb(0x61AFEF),
            bright_purple: Color::from_rgb(0xC678DD),
            bright_cyan: Color::from_rgb(0x56B6C2),
            bright_white: Color::from_rgb(0xDCDFE4),
        }
    }

    /// Solarized Dark
    pub fn solarized_dark() -> Self {
        Self {
            name: "Solarized Dark".to_string(),
            foreground: Color::from_rgb(0x839496),
            background: Color::from_rgb(0x002B36),
            black: Color::from_rgb(0x002B36),
            red: Color::from_rgb(0xDC322F),
            green: Color::from_rgb(0x859900),
            yellow: Color::from_rgb(0xB58900),
            blue: Color::from_rgb(0x268BD2),
            purple: Color::from_rgb(0xD33682),
            cyan: Color::from_rgb(0x2AA198),
            white: Color::from_rgb(0xEEE8D5),
            bright_black: Color::from_rgb(0x073642),
            bright_red: Color::from_rgb(0xCB4B16),
            bright_green: Color::from_rgb(0x586E75),
            bright_yellow: Color::from_rgb(0x657B83),
            bright_blue: Color::from_rgb(0x839496),
            bright_purple: Color::from_rgb(0x6C71C4),
            bright_cyan: Color::from_rgb(0x93A1A1),
            bright_white: Color::from_rgb(0xFDF6E3),
        }
    }

    /// All built-in schemes, Campbell first.
    pub fn builtin() -> Vec<Self> {
        vec![Self::campbell(), Self::one_half_dark(), Self::solarized_dark()]
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::campbell()
    }
}
