//! Segment construction errors.

/// Errors that can prevent a segment from ever activating.
///
/// The hosting framework is free to ignore these: a segment that cannot be
/// built simply never plays anything. Nothing at runtime returns an error;
/// once a segment exists, every operation on it either succeeds or is a
/// local no-op.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("no playable sources were configured")]
    NoSources,

    #[error("could not determine a media kind for the configured sources")]
    UnknownMediaKind,

    #[error("media surface construction failed: {0}")]
    Factory(#[from] anyhow::Error),
}
