/// Linear interpolation between `from` and `to`
pub fn lerp(from: f64, to: f64, fraction: f64) -> f64 {
    from + (to - from) * fraction
}

/// Clamps `value` into `[min, max]`, mapping NaN to `min`
pub fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// A unit cubic Bézier timing curve anchored at (0, 0) and (1, 1).
///
/// The two control points are given as (x1, y1) and (x2, y2). Both x
/// coordinates must lie in `[0, 1]` so that x(t) is monotonic and the curve
/// maps every input fraction to exactly one output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    const ITERATIONS: usize = 48;

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        CubicBezier { x1, y1, x2, y2 }
    }

    /// Evaluates the curve at the input fraction `x`
    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 || x.is_nan() {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        // x'(t) reaches zero for steep curves such as (1, 0, 0, 1), so
        // Newton steps are unreliable; bisection always converges.
        let (mut lo, mut hi) = (0.0, 1.0);
        let mut t = x;
        for _ in 0..Self::ITERATIONS {
            t = (lo + hi) / 2.0;
            let sample = bezier_component(self.x1, self.x2, t);
            if sample == x {
                break;
            }
            if sample < x {
                lo = t;
            } else {
                hi = t;
            }
        }
        bezier_component(self.y1, self.y2, t)
    }
}

/// One coordinate of a cubic Bézier with fixed end points 0 and 1
fn bezier_component(p1: f64, p2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}
