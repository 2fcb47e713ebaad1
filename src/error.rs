use thiserror::Error;

/// Structured error hierarchy for the widget core.
///
/// Configuration problems surface at construction time, rendering problems
/// at render time. Errors raised inside user callbacks pass through the
/// `Callback` variant unmodified so the dialog dispatcher sees exactly what
/// the callback raised.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("widget config: {0}")]
    Config(String),

    #[error("text render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Callback(#[from] anyhow::Error),
}

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, WidgetError>;
