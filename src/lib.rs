//! A loading indicator made of three glowing arcs.
//!
//! The arcs start 120° apart, their shared sweep pulses between 5° and 105°
//! and the whole indicator spins once every 1.6 seconds. [`LoadingIndicator`]
//! holds the geometry, style and animation state independent of any toolkit;
//! [`LoadingView`] hosts it as a druid widget.

pub mod animation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod indicator;
pub mod math;
pub mod state;
pub mod style;
pub mod widget;

pub use config::{LoadingViewAttrs, RestartPolicy};
pub use error::{AppError, ConfigError};
pub use indicator::LoadingIndicator;
pub use style::{Density, Dp, StrokeStyle};
pub use widget::{LoadingView, SET_STROKE_COLOR, SET_STROKE_WIDTH, TOGGLE_ANIMATION};
