//! Light/dark theming and colour parsing

use lightningcss::traits::Parse;
use lightningcss::values::color::{CssColor, FloatColor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Active colour theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Resolve an optional theme; an unset theme is dark
    pub fn resolve(theme: Option<Theme>) -> Theme {
        theme.unwrap_or_default()
    }

    /// The other theme
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// RGBA colour, sRGB-encoded, with components in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from 8-bit channels
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Same colour with its alpha scaled by `opacity`
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { a: self.a * opacity, ..self }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parse a CSS colour
    ///
    /// Hex notation (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) is decoded
    /// directly. Named colours, `transparent` and the functional forms
    /// (`rgb()`, `hsl()` and friends) go through lightningcss.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ColorParseError::new(input));
        }

        let color = match s.strip_prefix('#') {
            Some(hex) => Self::parse_hex(hex),
            None => Self::parse_css(s),
        };
        color.ok_or_else(|| ColorParseError::new(input))
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let (r, g, b, a) = match hex.len() {
            3 => (nibble(0)?, nibble(1)?, nibble(2)?, 255),
            4 => (nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?),
            6 => (byte(0)?, byte(2)?, byte(4)?, 255),
            8 => (byte(0)?, byte(2)?, byte(4)?, byte(6)?),
            _ => return None,
        };
        Some(Self::from_rgba8(r, g, b, a))
    }

    fn parse_css(s: &str) -> Option<Self> {
        let color = CssColor::parse_string(s).ok()?;
        match color.to_rgb().ok()? {
            CssColor::RGBA(rgba) => Some(Self::from_rgba8(rgba.red, rgba.green, rgba.blue, rgba.alpha)),
            CssColor::Float(float) => match float.as_ref() {
                FloatColor::RGB(rgb) => Some(Self::rgba(rgb.r, rgb.g, rgb.b, rgb.alpha)),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// Error returned when a colour string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    value: String,
}

impl ColorParseError {
    fn new(value: &str) -> Self {
        Self { value: value.to_string() }
    }

    /// The rejected input
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid colour '{}'", self.value)
    }
}

impl std::error::Error for ColorParseError {}

/// Background and particle colours for both themes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background_light: Color,
    pub background_dark: Color,
    pub particle_light: Color,
    pub particle_dark: Color,
}

impl Palette {
    pub fn background(&self, theme: Theme) -> Color {
        match theme {
            Theme::Light => self.background_light,
            Theme::Dark => self.background_dark,
        }
    }

    pub fn particle(&self, theme: Theme) -> Color {
        match theme {
            Theme::Light => self.particle_light,
            Theme::Dark => self.particle_dark,
        }
    }
}
