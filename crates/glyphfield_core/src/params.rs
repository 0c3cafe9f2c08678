//! Field parameters
//!
//! [`FieldOptions`] is the user-facing form: every knob is optional and most
//! accept two names (e.g. `particle_density` and `density`). It is resolved
//! exactly once into [`FieldParams`], which the engine reads every frame.
//!
//! Precedence per knob: explicit primary name, then explicit alias, then the
//! default. `font_size` is a legacy knob that overrides both size bounds.

use crate::theme::{Color, Palette};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_ID: &str = "glyphfield";
pub const DEFAULT_BACKGROUND: Color = Color::TRANSPARENT;
/// `#1a1a1a`
pub const DEFAULT_PARTICLE_COLOR_LIGHT: Color = Color::rgba(26.0 / 255.0, 26.0 / 255.0, 26.0 / 255.0, 1.0);
/// `#e0e0e0`
pub const DEFAULT_PARTICLE_COLOR_DARK: Color = Color::rgba(224.0 / 255.0, 224.0 / 255.0, 224.0 / 255.0, 1.0);
pub const DEFAULT_DENSITY: f32 = 30.0;
pub const DEFAULT_MIN_SIZE: f32 = 10.0;
pub const DEFAULT_MAX_SIZE: f32 = 14.0;
pub const DEFAULT_SPEED: f32 = 1.0;
pub const DEFAULT_REPULSE_DISTANCE: f32 = 150.0;
pub const DEFAULT_REPULSE_DURATION: f32 = 0.6;
pub const DEFAULT_REPULSION_STRENGTH: f32 = 5.0;
pub const DEFAULT_RETURN_SPEED: f32 = 0.1;

/// Ratio between the largest and smallest glyph when sized via `font_size`
pub const FONT_SIZE_SPREAD: f32 = 1.4;

/// Unresolved field configuration, as read from TOML or the environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    /// Surface identifier (used for logging and the window title)
    pub id: Option<String>,
    /// Background colour in the light theme
    pub background: Option<String>,
    /// Background colour in the dark theme
    pub background_dark: Option<String>,
    pub particle_color_light: Option<String>,
    pub particle_color_dark: Option<String>,
    /// Alias of `particle_color_light`
    pub color_light: Option<String>,
    /// Alias of `particle_color_dark`
    pub color_dark: Option<String>,
    pub particle_density: Option<f32>,
    /// Alias of `particle_density`
    pub density: Option<f32>,
    pub min_size: Option<f32>,
    pub max_size: Option<f32>,
    /// Legacy sizing: min = font_size, max = font_size * 1.4
    pub font_size: Option<f32>,
    /// Drift speed factor
    pub speed: Option<f32>,
    pub repulse_distance: Option<f32>,
    /// Alias of `repulse_distance`
    pub repulsion_radius: Option<f32>,
    /// Repulsion duration in seconds
    pub repulse_duration: Option<f32>,
    pub repulsion_strength: Option<f32>,
    /// Fraction of the distance to origin recovered each frame
    pub return_speed: Option<f32>,
    /// Fixed opacity for every particle (random when unset)
    pub particle_opacity: Option<f32>,
    /// Alias of `particle_opacity`
    pub opacity: Option<f32>,
    /// Suppress the welcome overlay
    pub hide_welcome: Option<bool>,
}

impl FieldOptions {
    /// Resolve aliases and defaults into engine parameters
    ///
    /// Fails on the first colour knob that does not parse.
    pub fn resolve(&self) -> Result<FieldParams, ParamsError> {
        let (params, errors) = self.resolve_lenient();
        match errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(params),
        }
    }

    /// Resolve like [`resolve`](Self::resolve), but replace each bad colour
    /// with its default and keep every other knob
    ///
    /// Returns the parameters together with the rejected colours.
    pub fn resolve_lenient(&self) -> (FieldParams, Vec<ParamsError>) {
        let mut errors = Vec::new();
        let mut color = |field: &'static str, value: Option<&String>, default: Color| {
            let Some(value) = value else {
                return default;
            };
            Color::parse(value).unwrap_or_else(|e| {
                errors.push(ParamsError::InvalidColor {
                    field,
                    value: e.value().to_string(),
                });
                default
            })
        };

        let palette = Palette {
            background_light: color("background", self.background.as_ref(), DEFAULT_BACKGROUND),
            background_dark: color("background_dark", self.background_dark.as_ref(), DEFAULT_BACKGROUND),
            particle_light: color(
                "particle_color_light",
                self.particle_color_light.as_ref().or(self.color_light.as_ref()),
                DEFAULT_PARTICLE_COLOR_LIGHT,
            ),
            particle_dark: color(
                "particle_color_dark",
                self.particle_color_dark.as_ref().or(self.color_dark.as_ref()),
                DEFAULT_PARTICLE_COLOR_DARK,
            ),
        };

        let (min_size, max_size) = match self.font_size {
            Some(font_size) => (font_size, font_size * FONT_SIZE_SPREAD),
            None => (
                self.min_size.unwrap_or(DEFAULT_MIN_SIZE),
                self.max_size.unwrap_or(DEFAULT_MAX_SIZE),
            ),
        };

        let params = FieldParams {
            id: self.id.clone().unwrap_or_else(|| DEFAULT_ID.to_string()),
            palette,
            density: self.particle_density.or(self.density).unwrap_or(DEFAULT_DENSITY),
            min_size,
            max_size,
            speed: self.speed.unwrap_or(DEFAULT_SPEED),
            repulse_distance: self
                .repulse_distance
                .or(self.repulsion_radius)
                .unwrap_or(DEFAULT_REPULSE_DISTANCE),
            repulse_duration: seconds(self.repulse_duration.unwrap_or(DEFAULT_REPULSE_DURATION)),
            repulsion_strength: self.repulsion_strength.unwrap_or(DEFAULT_REPULSION_STRENGTH),
            return_speed: self.return_speed.unwrap_or(DEFAULT_RETURN_SPEED),
            opacity: self.particle_opacity.or(self.opacity),
            hide_welcome: self.hide_welcome.unwrap_or(false),
        };
        (params, errors)
    }
}

// Negative or non-finite durations collapse to zero, which disables repulsion.
fn seconds(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs).unwrap_or(Duration::ZERO)
}

/// Resolved parameters read by [`ParticleField`](crate::ParticleField)
#[derive(Debug, Clone, PartialEq)]
pub struct FieldParams {
    pub id: String,
    pub palette: Palette,
    pub density: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub speed: f32,
    pub repulse_distance: f32,
    pub repulse_duration: Duration,
    pub repulsion_strength: f32,
    pub return_speed: f32,
    pub opacity: Option<f32>,
    pub hide_welcome: bool,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID.to_string(),
            palette: Palette {
                background_light: DEFAULT_BACKGROUND,
                background_dark: DEFAULT_BACKGROUND,
                particle_light: DEFAULT_PARTICLE_COLOR_LIGHT,
                particle_dark: DEFAULT_PARTICLE_COLOR_DARK,
            },
            density: DEFAULT_DENSITY,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            speed: DEFAULT_SPEED,
            repulse_distance: DEFAULT_REPULSE_DISTANCE,
            repulse_duration: seconds(DEFAULT_REPULSE_DURATION),
            repulsion_strength: DEFAULT_REPULSION_STRENGTH,
            return_speed: DEFAULT_RETURN_SPEED,
            opacity: None,
            hide_welcome: false,
        }
    }
}

impl FieldParams {
    /// Builder: set density
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Builder: set the fixed opacity override
    pub fn with_opacity(mut self, opacity: Option<f32>) -> Self {
        self.opacity = opacity;
        self
    }

    /// Builder: set repulsion radius, duration and strength
    pub fn with_repulsion(mut self, distance: f32, duration: Duration, strength: f32) -> Self {
        self.repulse_distance = distance;
        self.repulse_duration = duration;
        self.repulsion_strength = strength;
        self
    }
}

/// Parameter resolution error
#[derive(Debug, Clone, PartialEq)]
pub enum ParamsError {
    /// A colour knob did not parse
    InvalidColor { field: &'static str, value: String },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::InvalidColor { field, value } => {
                write!(f, "Invalid colour for '{}': '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ParamsError {}
