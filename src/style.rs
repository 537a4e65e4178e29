use crate::math::clamp_finite;
use druid::Color;

/// Ratio between the glow radius and the stroke width
pub const GLOW_RATIO: f64 = 1.25;

/// Thinnest stroke the indicator draws, in device-independent units
pub const MIN_STROKE_DP: Dp = Dp(2.0);
/// Thickest stroke the indicator draws, in device-independent units
pub const MAX_STROKE_DP: Dp = Dp(8.0);

/// A device-independent length
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

/// Display density: pixels per device-independent unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(f64);

impl Density {
    /// Creates a density, falling back to 1.0 for non-positive or non-finite factors
    pub fn new(factor: f64) -> Self {
        if factor.is_finite() && factor > 0.0 {
            Density(factor)
        } else {
            Density(1.0)
        }
    }

    /// Converts to whole pixels, truncating the fractional part
    pub fn to_px(self, dp: Dp) -> f64 {
        (dp.0 * self.0).trunc()
    }
}

impl Default for Density {
    fn default() -> Self {
        Density(1.0)
    }
}

/// Inclusive pixel bounds for the stroke width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeLimits {
    min: f64,
    max: f64,
}

impl StrokeLimits {
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            StrokeLimits { min, max }
        } else {
            StrokeLimits { min: max, max: min }
        }
    }

    /// The fixed 2dp..8dp range at the given density
    pub fn for_density(density: Density) -> Self {
        StrokeLimits::new(density.to_px(MIN_STROKE_DP), density.to_px(MAX_STROKE_DP))
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn clamp(&self, width: f64) -> f64 {
        clamp_finite(width, self.min, self.max)
    }
}

impl Default for StrokeLimits {
    fn default() -> Self {
        StrokeLimits::for_density(Density::default())
    }
}

/// A pending change to the stroke style; unset fields are left as they are
#[derive(Debug, Clone, Default)]
pub struct StyleUpdate {
    pub color: Option<Color>,
    pub width: Option<f64>,
}

/// Stroke paint shared by the three arcs and their glow.
///
/// The glow has no color of its own: it is always drawn in [`StrokeStyle::color`],
/// and its radius is recomputed whenever the width changes.
#[derive(Debug, Clone)]
pub struct StrokeStyle {
    color: Color,
    width: f64,
    glow_radius: f64,
    limits: StrokeLimits,
}

impl StrokeStyle {
    pub fn new(color: Color, width: f64, limits: StrokeLimits) -> Self {
        let width = limits.clamp(width);
        StrokeStyle {
            color,
            width,
            glow_radius: width * GLOW_RATIO,
            limits,
        }
    }

    /// Applies every field of `update` together with its derived values
    pub fn apply(&mut self, update: StyleUpdate) {
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(width) = update.width {
            self.width = self.limits.clamp(width);
            self.glow_radius = self.width * GLOW_RATIO;
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.apply(StyleUpdate {
            color: Some(color),
            width: None,
        });
    }

    /// Sets the width, clamped into the stroke limits
    pub fn set_width(&mut self, width: f64) {
        self.apply(StyleUpdate {
            color: None,
            width: Some(width),
        });
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn glow_color(&self) -> &Color {
        &self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn glow_radius(&self) -> f64 {
        self.glow_radius
    }

    pub fn limits(&self) -> StrokeLimits {
        self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn density_truncates_to_whole_pixels() {
        let density = Density::new(2.625);
        assert_eq!(density.to_px(MIN_STROKE_DP), 5.0);
        assert_eq!(density.to_px(MAX_STROKE_DP), 21.0);
        assert_eq!(Density::new(0.0), Density::default());
        assert_eq!(Density::new(f64::NAN), Density::default());
        assert_eq!(Density::new(2.0).to_px(Dp(1.5)), 3.0);
    }

    #[test]
    fn limits_follow_density() {
        let limits = StrokeLimits::for_density(Density::new(3.0));
        assert_eq!((limits.min(), limits.max()), (6.0, 24.0));
        assert_eq!(StrokeLimits::new(9.0, 1.0), StrokeLimits::new(1.0, 9.0));
    }

    #[test]
    fn width_is_clamped_and_glow_follows() {
        let mut style = StrokeStyle::new(Color::WHITE, 0.5, StrokeLimits::default());
        assert_eq!(style.width(), 2.0);
        assert_eq!(style.glow_radius(), 2.5);

        for requested in [-4.0, 0.0, 3.0, 7.5, 8.0, 100.0, f64::NAN, f64::INFINITY] {
            style.set_width(requested);
            assert!((2.0..=8.0).contains(&style.width()), "{requested}");
            assert_eq!(style.glow_radius(), style.width() * GLOW_RATIO);
        }
    }

    #[test]
    fn glow_color_tracks_stroke_color() {
        let mut style = StrokeStyle::new(Color::WHITE, 4.0, StrokeLimits::default());
        for color in [
            Color::rgb8(255, 0, 0),
            Color::rgba8(0, 128, 255, 40),
            Color::BLACK,
        ] {
            style.set_color(color.clone());
            assert_eq!(style.color().as_rgba8(), color.as_rgba8());
            assert_eq!(style.glow_color().as_rgba8(), style.color().as_rgba8());
        }
    }

    #[test]
    fn apply_updates_color_and_width_together() {
        let mut style = StrokeStyle::new(Color::WHITE, 2.0, StrokeLimits::default());
        style.apply(StyleUpdate {
            color: Some(Color::rgb8(10, 20, 30)),
            width: Some(6.0),
        });
        assert_eq!(style.color().as_rgba8(), (10, 20, 30, 255));
        assert_eq!(style.width(), 6.0);
        assert_eq!(style.glow_radius(), 7.5);

        style.apply(StyleUpdate::default());
        assert_eq!(style.width(), 6.0);
    }
}
