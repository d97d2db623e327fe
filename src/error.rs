//! Error types surfaced by the kinetic graphic and its configuration.

use std::error::Error;
use std::path::PathBuf;

use thiserror::Error;

/// Error produced by a caller-supplied draw strategy.
pub type DrawFailure = Box<dyn Error + Send + Sync>;

/// Failures reported by [`crate::KineticGraphic`] and [`crate::MotionParams`].
#[derive(Debug, Error)]
pub enum GraphicError {
    /// `draw` was called after the caller dropped the draw strategy.
    #[error("draw strategy is no longer available")]
    MissingDrawStrategy,
    /// The draw strategy reported a failure while rendering.
    #[error("draw strategy failed: {0}")]
    Draw(#[source] DrawFailure),
    /// A motion parameter document could not be parsed.
    #[error("invalid motion parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),
    /// A motion parameter file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
