//! Construction-time attributes and the parsers used to fill them in.

use crate::error::ConfigError;
use crate::style::{Density, Dp};
use druid::{Color, Insets};

/// When a measure pass rewinds the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RestartPolicy {
    /// Every measure pass restarts both animations from their start values
    #[default]
    EveryMeasure,
    /// Only a change of the resolved side restarts them
    OnResize,
}

/// Attributes the indicator is constructed from.
///
/// Unset values fall back to opaque white and the minimum stroke width.
#[derive(Debug, Clone)]
pub struct LoadingViewAttrs {
    pub color: Option<Color>,
    pub stroke_width: Option<Dp>,
    /// Per-side padding in pixels
    pub padding: Insets,
    pub density: Density,
    pub restart: RestartPolicy,
}

impl Default for LoadingViewAttrs {
    fn default() -> Self {
        LoadingViewAttrs {
            color: None,
            stroke_width: None,
            padding: Insets::ZERO,
            density: Density::default(),
            restart: RestartPolicy::default(),
        }
    }
}

impl LoadingViewAttrs {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_stroke_width(mut self, width: Dp) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_padding(mut self, padding: impl Into<Insets>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn with_restart(mut self, restart: RestartPolicy) -> Self {
        self.restart = restart;
        self
    }
}

/// Parses `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`; the `#` is optional
pub fn parse_color(input: &str) -> Result<Color, ConfigError> {
    let invalid = |reason| ConfigError::InvalidColor {
        input: input.to_string(),
        reason,
    };

    let hex = input.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("expected hexadecimal digits"));
    }

    let digits: Vec<u8> = match hex.len() {
        3 | 4 => hex
            .chars()
            .map(|c| {
                let nibble = c.to_digit(16).unwrap_or(0) as u8;
                nibble << 4 | nibble
            })
            .collect(),
        6 | 8 => (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
            .collect::<Result<_, _>>()
            .map_err(|_| invalid("expected hexadecimal digits"))?,
        _ => return Err(invalid("expected 3, 4, 6 or 8 hex digits")),
    };

    let alpha = digits.get(3).copied().unwrap_or(u8::MAX);
    Ok(Color::rgba8(digits[0], digits[1], digits[2], alpha))
}

/// Accepts only positive finite values
pub fn positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive {
            name,
            input: value.to_string(),
        })
    }
}
