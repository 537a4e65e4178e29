use druid::PlatformError;
use thiserror::Error;

/// Rejected configuration values coming from outside the widget
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid color {input:?}: {reason}")]
    InvalidColor { input: String, reason: &'static str },

    #[error("{name} must be a positive finite number, got {input:?}")]
    NotPositive { name: &'static str, input: String },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to launch window: {0}")]
    Platform(#[from] PlatformError),
}
