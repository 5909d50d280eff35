//! Playable-window clamping for the nested player.

use crate::config::SegmentConfig;

/// The effective playable window `[from, to]` in nested-player seconds.
///
/// `to` starts at the configured bound (or unbounded) and is refined once,
/// when the nested media's metadata loads, to
/// `min(configured to, duration, from + (end - start))`. It only ever
/// shrinks, and after the first refinement it is final for the segment's
/// lifetime.
#[derive(Debug, Clone, Copy)]
pub struct PlayWindow {
    /// Lower bound; never negative.
    pub from: f64,
    /// Effective upper bound; `f64::INFINITY` while unbounded.
    pub to: f64,
    /// Host-side segment length, `end - start`.
    span: f64,
    clamped: bool,
}

impl PlayWindow {
    /// Compute the initial window from the configuration snapshot.
    ///
    /// A configured `to` only takes effect when it lies strictly beyond
    /// `from`; anything else (absent, zero, or inside the lower bound)
    /// leaves the window open until metadata arrives.
    pub fn new(config: &SegmentConfig) -> Self {
        let from = if config.from > 0.0 { config.from } else { 0.0 };
        let to = match config.to {
            Some(t) if t > from => t,
            _ => f64::INFINITY,
        };

        Self {
            from,
            to,
            span: config.end - config.start,
            clamped: false,
        }
    }

    /// Whether a finite upper bound is currently in effect.
    pub fn is_bounded(&self) -> bool {
        self.to.is_finite()
    }

    /// Refine the upper bound now that the media duration is known.
    ///
    /// Caps the window so the nested segment never plays past its own
    /// media, past the host's allotted segment length, or past an explicit
    /// configured bound. Only the first call has any effect.
    pub fn clamp_to_duration(&mut self, duration: f64) {
        if self.clamped {
            return;
        }
        self.to = self.to.min(duration).min(self.from + self.span);
        self.clamped = true;
    }
}
