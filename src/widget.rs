use crate::config::LoadingViewAttrs;
use crate::graphics;
use crate::indicator::LoadingIndicator;
use crate::style::{Density, Dp};
use druid::widget::prelude::*;
use druid::{Affine, Color, Insets, Selector};
use std::time::Duration;

/// Pauses a running indicator or resumes a paused one
pub const TOGGLE_ANIMATION: Selector = Selector::new("loading-view.toggle-animation");
/// Replaces the stroke and glow color
pub const SET_STROKE_COLOR: Selector<Color> = Selector::new("loading-view.set-stroke-color");
/// Overrides the stroke width, in pixels
pub const SET_STROKE_WIDTH: Selector<f64> = Selector::new("loading-view.set-stroke-width");

/// Side used when the parent leaves an axis unbounded
pub const DEFAULT_SIDE: Dp = Dp(48.0);

/// Three glowing arcs spinning inside a square
pub struct LoadingView {
    indicator: LoadingIndicator,
    density: Density,
}

impl LoadingView {
    pub fn new(attrs: LoadingViewAttrs) -> Self {
        LoadingView {
            indicator: LoadingIndicator::new(&attrs),
            density: attrs.density,
        }
    }

    pub fn indicator(&self) -> &LoadingIndicator {
        &self.indicator
    }

    fn toggle_animation(&mut self, ctx: &mut EventCtx) {
        self.indicator.toggle_animation();
        if self.indicator.is_animating() {
            ctx.request_anim_frame();
        }
    }

    /// The size offered by `bc`, with unbounded axes replaced by [`DEFAULT_SIDE`]
    fn proposed_size(&self, bc: &BoxConstraints) -> Size {
        let max = bc.max();
        let fallback = self.density.to_px(DEFAULT_SIDE);
        let width = if max.width.is_finite() { max.width } else { fallback };
        let height = if max.height.is_finite() { max.height } else { fallback };
        Size::new(width, height)
    }

    /// Turns the whole painted output about the centre of the square
    fn rotation_transform(&self) -> Affine {
        let pivot = self.indicator.pivot().to_vec2();
        Affine::translate(pivot)
            * Affine::rotate(self.indicator.rotation().to_radians())
            * Affine::translate(-pivot)
    }
}

impl Default for LoadingView {
    fn default() -> Self {
        LoadingView::new(LoadingViewAttrs::default())
    }
}

impl<T: Data> Widget<T> for LoadingView {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, _data: &mut T, _env: &Env) {
        match event {
            Event::AnimFrame(interval) => {
                if self.indicator.advance(Duration::from_nanos(*interval)) {
                    ctx.request_paint();
                }
                if self.indicator.is_animating() {
                    ctx.request_anim_frame();
                }
            }
            Event::Command(cmd) if cmd.is(TOGGLE_ANIMATION) => {
                self.toggle_animation(ctx);
                ctx.set_handled();
            }
            Event::Command(cmd) => {
                if let Some(color) = cmd.get(SET_STROKE_COLOR) {
                    self.indicator.set_color(color.clone());
                    ctx.request_paint();
                    ctx.set_handled();
                } else if let Some(width) = cmd.get(SET_STROKE_WIDTH) {
                    self.indicator.set_stroke_width(*width);
                    // the glow overhang depends on the width
                    ctx.request_layout();
                    ctx.set_handled();
                }
            }
            _ => {}
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, _data: &T, _env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            ctx.request_anim_frame();
        }
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &T, _data: &T, _env: &Env) {}

    /// Forces a square no larger than the smaller available dimension
    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &T, _env: &Env) -> Size {
        let proposed = self.proposed_size(bc);
        let size = self.indicator.measure(proposed.width, proposed.height);
        ctx.set_paint_insets(Insets::uniform(self.indicator.paint_overhang()));
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &T, _env: &Env) {
        let frame = self.indicator.frame();
        if frame.is_empty() {
            return;
        }

        let rotation = self.rotation_transform();
        ctx.with_save(|ctx| {
            ctx.transform(rotation);
            graphics::paint(&mut *ctx.render_ctx, &frame);
        });
    }
}
