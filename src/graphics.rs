use crate::geometry::DrawBounds;
use crate::style::StrokeStyle;
use druid::kurbo::Arc;
use druid::piet::{LineCap, StrokeStyle as PietStrokeStyle};
use druid::{Color, RenderContext, Vec2};

/// Start angles of the three arcs, in degrees clockwise from 3 o'clock
pub const ARC_START_ANGLES: [f64; 3] = [0.0, 120.0, 240.0];

/// Number of translucent strokes used to fake the blurred glow
pub const GLOW_LAYERS: usize = 4;

/// Combined opacity of the glow layers relative to the stroke color
const GLOW_OPACITY: f64 = 0.6;

/// Sweep angles of the three arcs.
///
/// They are stored per arc but are only ever written together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepState([f64; 3]);

impl SweepState {
    pub fn new(sweep: f64) -> Self {
        SweepState([sweep; 3])
    }

    pub fn set_all(&mut self, sweep: f64) {
        self.0 = [sweep; 3];
    }

    pub fn angles(&self) -> [f64; 3] {
        self.0
    }
}

/// A single stroked arc
#[derive(Debug, Clone)]
pub struct StrokeLayer {
    pub arc: Arc,
    pub width: f64,
    pub color: Color,
}

/// Everything painted in one frame, back to front
#[derive(Debug, Clone, Default)]
pub struct ArcFrame {
    pub layers: Vec<StrokeLayer>,
}

impl ArcFrame {
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Lays out the glow and solid strokes for the three arcs
pub fn build_frame(bounds: &DrawBounds, style: &StrokeStyle, sweeps: &SweepState) -> ArcFrame {
    if bounds.is_empty() {
        return ArcFrame::default();
    }

    let rect = bounds.rect();
    let arcs: Vec<Arc> = ARC_START_ANGLES
        .iter()
        .zip(sweeps.angles())
        .map(|(&start, sweep)| Arc {
            center: rect.center(),
            radii: Vec2::new(rect.width() / 2.0, rect.height() / 2.0),
            start_angle: start.to_radians(),
            sweep_angle: sweep.to_radians(),
            x_rotation: 0.0,
        })
        .collect();

    let mut layers = Vec::with_capacity(arcs.len() * (GLOW_LAYERS + 1));

    // Widest and faintest glow first
    let glow_color = style.glow_color();
    for layer in (1..=GLOW_LAYERS).rev() {
        let spread = style.glow_radius() * layer as f64 / GLOW_LAYERS as f64;
        let color = fade(glow_color, GLOW_OPACITY / GLOW_LAYERS as f64);
        for arc in &arcs {
            layers.push(StrokeLayer {
                arc: *arc,
                width: style.width() + 2.0 * spread,
                color: color.clone(),
            });
        }
    }

    for arc in arcs {
        layers.push(StrokeLayer {
            arc,
            width: style.width(),
            color: style.color().clone(),
        });
    }

    ArcFrame { layers }
}

/// Strokes every layer of `frame` with round caps
pub fn paint(rc: &mut impl RenderContext, frame: &ArcFrame) {
    let stroke_style = PietStrokeStyle::new().line_cap(LineCap::Round);
    for layer in &frame.layers {
        rc.stroke_styled(layer.arc, &layer.color, layer.width, &stroke_style);
    }
}

/// Scales the alpha channel of `color` by `opacity`
fn fade(color: &Color, opacity: f64) -> Color {
    let (r, g, b, a) = color.as_rgba8();
    Color::rgba8(r, g, b, (a as f64 * opacity).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StrokeLimits;
    use druid::{Insets, Rect};
    use pretty_assertions::assert_eq;

    fn style(width: f64) -> StrokeStyle {
        StrokeStyle::new(Color::rgb8(0, 200, 255), width, StrokeLimits::default())
    }

    fn bounds() -> DrawBounds {
        DrawBounds::compute(100.0, Insets::ZERO, 4.0)
    }

    #[test]
    fn sweeps_move_in_lockstep() {
        let mut sweeps = SweepState::new(5.0);
        sweeps.set_all(42.0);
        assert_eq!(sweeps.angles(), [42.0; 3]);
    }

    #[test]
    fn solid_arcs_start_at_fixed_offsets() {
        let frame = build_frame(&bounds(), &style(4.0), &SweepState::new(30.0));
        assert_eq!(frame.layers.len(), 3 * (GLOW_LAYERS + 1));

        let solid = &frame.layers[frame.layers.len() - 3..];
        for (layer, start) in solid.iter().zip(ARC_START_ANGLES) {
            assert_eq!(layer.arc.start_angle, start.to_radians());
            assert_eq!(layer.arc.sweep_angle, 30f64.to_radians());
            assert_eq!(layer.width, 4.0);
            assert_eq!(layer.color.as_rgba8(), (0, 200, 255, 255));
        }
    }

    #[test]
    fn arcs_share_the_oval() {
        let frame = build_frame(&bounds(), &style(4.0), &SweepState::new(30.0));
        for layer in &frame.layers {
            assert_eq!(layer.arc.center, Rect::new(4.0, 4.0, 96.0, 96.0).center());
            assert_eq!(layer.arc.radii, Vec2::new(46.0, 46.0));
        }
    }

    #[test]
    fn glow_uses_stroke_color_and_reaches_glow_radius() {
        let style = style(8.0);
        let frame = build_frame(&bounds(), &style, &SweepState::new(30.0));
        let glow = &frame.layers[..3 * GLOW_LAYERS];

        let widest = glow.iter().map(|l| l.width).fold(0.0, f64::max);
        assert_eq!(widest, 8.0 + 2.0 * style.glow_radius());
        assert_eq!(glow[0].width, widest);

        for layer in glow {
            let (r, g, b, a) = layer.color.as_rgba8();
            assert_eq!((r, g, b), (0, 200, 255));
            assert!(a < 255);
        }
    }

    #[test]
    fn empty_bounds_draw_nothing() {
        let frame = build_frame(&DrawBounds::ZERO, &style(2.0), &SweepState::new(5.0));
        assert!(frame.is_empty());
    }
}
