//! Square sizing, stroke auto-sizing and the oval the arcs are drawn on.

use crate::style::StrokeLimits;
use druid::{Insets, Point, Rect, Size};

/// The auto-sized stroke is the resolved side divided by this
pub const STROKE_DIVISOR: f64 = 24.0;

/// Result of a measure pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Side of the resolved square
    pub side: f64,
    /// Auto-sized stroke width, already clamped
    pub stroke_width: f64,
}

impl Measurement {
    pub fn size(&self) -> Size {
        Size::new(self.side, self.side)
    }
}

/// Resolves a proposed size to the side of a square.
///
/// The smaller dimension wins. Negative and NaN dimensions degrade to zero.
pub fn resolve_side(width: f64, height: f64) -> f64 {
    let side = width.min(height);
    if side > 0.0 {
        side
    } else {
        0.0
    }
}

/// Stroke width that scales with the widget but stays within `limits`
pub fn auto_stroke_width(side: f64, limits: &StrokeLimits) -> f64 {
    limits.clamp(side / STROKE_DIVISOR)
}

pub fn measure(width: f64, height: f64, limits: &StrokeLimits) -> Measurement {
    let side = resolve_side(width, height);
    Measurement {
        side,
        stroke_width: auto_stroke_width(side, limits),
    }
}

/// The box the three arcs are drawn on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawBounds(Rect);

impl DrawBounds {
    pub const ZERO: DrawBounds = DrawBounds(Rect::ZERO);

    /// Insets the `side` square by `padding + stroke_width` on every side.
    ///
    /// When the insets overlap, the affected axis collapses to its midpoint.
    pub fn compute(side: f64, padding: Insets, stroke_width: f64) -> Self {
        let (x0, x1) = collapse(
            padding.x0 + stroke_width,
            side - padding.x1 - stroke_width,
        );
        let (y0, y1) = collapse(
            padding.y0 + stroke_width,
            side - padding.y1 - stroke_width,
        );
        DrawBounds(Rect::new(x0, y0, x1, y1))
    }

    pub fn rect(&self) -> Rect {
        self.0
    }

    pub fn center(&self) -> Point {
        self.0.center()
    }

    /// True when there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.0.width() <= 0.0 || self.0.height() <= 0.0
    }
}

fn collapse(start: f64, end: f64) -> (f64, f64) {
    if start <= end {
        (start, end)
    } else {
        let mid = (start + end) / 2.0;
        (mid, mid)
    }
}
