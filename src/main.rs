use clap::Parser;
use druid::widget::{Button, Flex, Label};
use druid::{AppLauncher, Color, Insets, Target, Widget, WidgetExt, WidgetId, WindowDesc};
use loading_view::config::{parse_color, positive};
use loading_view::state::AppState;
use loading_view::{
    AppError, Density, Dp, LoadingView, LoadingViewAttrs, RestartPolicy, TOGGLE_ANIMATION,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Shows the three-arc loading indicator in a window
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Stroke and glow color as #RGB, #RGBA, #RRGGBB or #RRGGBBAA
    #[arg(long, value_parser = parse_color)]
    color: Option<Color>,

    /// Initial stroke width in device-independent units, clamped to 2..8.
    /// Layout auto-sizes the stroke from the indicator's side and replaces it.
    #[arg(long)]
    stroke_width: Option<f64>,

    /// Padding around the indicator, in pixels
    #[arg(long, default_value_t = 16.0)]
    padding: f64,

    /// Pixels per device-independent unit
    #[arg(long, default_value_t = 1.0)]
    density: f64,

    /// Side of the window, in pixels
    #[arg(long, default_value_t = 320.0)]
    size: f64,

    /// When a layout pass restarts the animation
    #[arg(long, value_enum, default_value_t = RestartPolicy::EveryMeasure)]
    restart: RestartPolicy,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log: String,
}

impl Args {
    fn attrs(&self) -> Result<LoadingViewAttrs, AppError> {
        let mut attrs = LoadingViewAttrs::default()
            .with_padding(Insets::uniform(self.padding.max(0.0)))
            .with_density(Density::new(positive("density", self.density)?))
            .with_restart(self.restart);
        if let Some(color) = &self.color {
            attrs = attrs.with_color(color.clone());
        }
        if let Some(width) = self.stroke_width {
            attrs = attrs.with_stroke_width(Dp(positive("stroke width", width)?));
        }
        Ok(attrs)
    }
}

fn build_ui(attrs: LoadingViewAttrs) -> impl Widget<AppState> {
    let view_id = WidgetId::next();
    let view = WidgetExt::<AppState>::with_id(LoadingView::new(attrs), view_id);

    let status = Label::dynamic(|data: &AppState, _env| data.status());
    let toggle = Button::new("Toggle").on_click(move |ctx, data: &mut AppState, _env| {
        ctx.submit_command(TOGGLE_ANIMATION.to(Target::Widget(view_id)));
        data.toggle();
    });

    Flex::column()
        .with_flex_child(view.center(), 1.0)
        .with_spacer(8.0)
        .with_child(status)
        .with_spacer(8.0)
        .with_child(toggle)
        .padding(12.0)
        .background(Color::rgb8(0x12, 0x14, 0x1c))
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let attrs = args.attrs()?;
    let size = positive("size", args.size)?;
    info!(?attrs, size, "starting loading view demo");

    let main_window = WindowDesc::new(build_ui(attrs))
        .title("Loading View")
        .window_size((size, size + 80.0));

    AppLauncher::with_window(main_window).launch(AppState::new())?;

    Ok(())
}
