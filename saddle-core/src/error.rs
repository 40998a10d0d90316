//! Errors of the core library.
use thiserror::Error;

/// Error type of the core library.
///
/// Backend failures (device errors, resource exhaustion) are not wrapped
/// here; they propagate unmodified through [`anyhow::Error`].
#[derive(Debug, Error)]
pub enum SaddleError {
    /// The observation batch and the recurrent state batch disagree in size.
    ///
    /// Raised by stateful policy models in
    /// [`ActorCritic::step`](crate::ActorCritic::step). Sizes are never
    /// silently broadcast or truncated.
    #[error("observation batch size ({obs}) does not match state batch size ({state})")]
    StateBatchMismatch {
        /// Number of observations passed to `step`.
        obs: usize,
        /// Number of per-trajectory states passed to `step`.
        state: usize,
    },

    /// An observation does not have the shape the vectorizer produces.
    #[error("observation shape {actual:?} does not match vectorizer shape {expected:?}")]
    ObsShapeMismatch {
        /// Shape of one vectorized observation.
        expected: Vec<usize>,
        /// Shape of the offending observation.
        actual: Vec<usize>,
    },
}
