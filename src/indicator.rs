use crate::animation::{AnimationGroup, GroupFrame, RunState, MIN_SWEEP};
use crate::config::{LoadingViewAttrs, RestartPolicy};
use crate::geometry::{self, DrawBounds};
use crate::graphics::{self, ArcFrame, SweepState};
use crate::style::{StrokeLimits, StrokeStyle, StyleUpdate};
use druid::{Color, Insets, Point, Size};
use std::time::Duration;
use tracing::{debug, info};

/// Host-independent state of the three-arc loading indicator.
///
/// The host feeds it measure passes and frame intervals, and paints the
/// [`ArcFrame`] it returns rotated by [`LoadingIndicator::rotation`].
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    style: StrokeStyle,
    padding: Insets,
    restart: RestartPolicy,
    proposed: Option<(f64, f64)>,
    side: Option<f64>,
    bounds: DrawBounds,
    rotation: f64,
    sweeps: SweepState,
    group: AnimationGroup,
}

impl LoadingIndicator {
    pub fn new(attrs: &LoadingViewAttrs) -> Self {
        let limits = StrokeLimits::for_density(attrs.density);
        let color = attrs.color.clone().unwrap_or(Color::WHITE);
        let width = attrs
            .stroke_width
            .map(|dp| attrs.density.to_px(dp))
            .unwrap_or(limits.min());

        LoadingIndicator {
            style: StrokeStyle::new(color, width, limits),
            padding: attrs.padding,
            restart: attrs.restart,
            proposed: None,
            side: None,
            bounds: DrawBounds::ZERO,
            rotation: 0.0,
            sweeps: SweepState::new(MIN_SWEEP),
            group: AnimationGroup::default(),
        }
    }

    /// Resolves the proposed size to a square and recomputes the draw bounds.
    ///
    /// The stroke width is auto-sized from the side, and the animation
    /// restarts according to the restart policy. Measuring the same proposed
    /// size again changes nothing.
    pub fn measure(&mut self, width: f64, height: f64) -> Size {
        if self.proposed == Some((width, height)) {
            return Size::new(self.side(), self.side());
        }
        self.proposed = Some((width, height));

        let measurement = geometry::measure(width, height, &self.style.limits());
        self.style.set_width(measurement.stroke_width);
        self.bounds = DrawBounds::compute(measurement.side, self.padding, self.style.width());

        let resized = self.side != Some(measurement.side);
        self.side = Some(measurement.side);
        if resized || self.restart == RestartPolicy::EveryMeasure {
            self.restart_animation();
        }

        debug!(
            side = measurement.side,
            stroke = self.style.width(),
            resized,
            "measured loading indicator"
        );
        measurement.size()
    }

    /// Advances the animation clock; returns true when a new frame needs painting
    pub fn advance(&mut self, dt: Duration) -> bool {
        match self.group.tick(dt) {
            Some(frame) => {
                self.apply_frame(frame);
                true
            }
            None => false,
        }
    }

    /// Pauses a running animation or resumes a paused one
    pub fn toggle_animation(&mut self) {
        let state = self.group.toggle();
        info!(?state, elapsed = ?self.group.elapsed(), "toggled loading animation");
    }

    pub fn is_animating(&self) -> bool {
        self.group.is_running()
    }

    pub fn run_state(&self) -> RunState {
        self.group.state()
    }

    pub fn set_color(&mut self, color: Color) {
        self.configure(StyleUpdate {
            color: Some(color),
            width: None,
        });
    }

    /// Overrides the stroke width in pixels, clamped into the stroke limits
    pub fn set_stroke_width(&mut self, width: f64) {
        self.configure(StyleUpdate {
            color: None,
            width: Some(width),
        });
    }

    /// Applies a style change and refreshes everything derived from it
    pub fn configure(&mut self, update: StyleUpdate) {
        self.style.apply(update);
        if let Some(side) = self.side {
            self.bounds = DrawBounds::compute(side, self.padding, self.style.width());
        }
        debug!(
            color = ?self.style.color().as_rgba8(),
            stroke = self.style.width(),
            glow = self.style.glow_radius(),
            "configured loading indicator"
        );
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
        if let Some(side) = self.side {
            self.bounds = DrawBounds::compute(side, self.padding, self.style.width());
        }
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn bounds(&self) -> DrawBounds {
        self.bounds
    }

    /// Side of the last resolved square, zero before the first measure
    pub fn side(&self) -> f64 {
        self.side.unwrap_or(0.0)
    }

    /// Pivot for the whole-view rotation
    pub fn pivot(&self) -> Point {
        let half = self.side() / 2.0;
        Point::new(half, half)
    }

    /// Whole-view rotation in degrees
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn sweeps(&self) -> SweepState {
        self.sweeps
    }

    /// How far the painted strokes can reach past the square on any side,
    /// at any rotation about [`LoadingIndicator::pivot`]
    pub fn paint_overhang(&self) -> f64 {
        let pivot = self.pivot();
        let half = self.side() / 2.0;
        self.frame()
            .layers
            .iter()
            .map(|layer| {
                let radius = layer.arc.radii.x.max(layer.arc.radii.y);
                (layer.arc.center - pivot).hypot() + radius + layer.width / 2.0 - half
            })
            .fold(0.0, f64::max)
    }

    /// The strokes to paint for the current state, before rotation
    pub fn frame(&self) -> ArcFrame {
        graphics::build_frame(&self.bounds, &self.style, &self.sweeps)
    }

    fn restart_animation(&mut self) {
        self.group.restart();
        self.apply_frame(self.group.current());
    }

    fn apply_frame(&mut self, frame: GroupFrame) {
        self.rotation = frame.rotation;
        self.sweeps.set_all(frame.sweep);
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        LoadingIndicator::new(&LoadingViewAttrs::default())
    }
}
