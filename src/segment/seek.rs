//! Deferred seeking for a nested player whose metadata may not be loaded.

use tracing::debug;

use crate::surface::MediaSurface;

/// Hides the asynchronous "metadata not yet loaded" case behind a single
/// seek call.
///
/// While the surface reports no usable duration, seek requests are recorded
/// instead of applied; each new request overwrites the last, and a single
/// armed listener applies the surviving target when metadata loads. No
/// request issued before metadata is available is ever lost, and only the
/// most recent one is honored.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredSeek {
    target: Option<f64>,
    armed: bool,
}

impl DeferredSeek {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seek now if the duration is known, otherwise queue the target.
    ///
    /// A reported duration of zero counts as not yet usable, the same as no
    /// metadata at all.
    pub fn request<S: MediaSurface>(&mut self, surface: &mut S, time: f64) {
        if surface.duration().map_or(false, |d| d > 0.0) {
            surface.set_current_time(time);
        } else {
            self.armed = true;
            self.target = Some(time);
            debug!(target_time = time, "deferring seek until metadata loads");
        }
    }

    /// Apply the pending target, if one was queued.
    ///
    /// Invoked when the surface delivers `loadedmetadata`. Fires at most
    /// once per arming: the listener disarms itself before seeking.
    pub fn resolve<S: MediaSurface>(&mut self, surface: &mut S) {
        if !self.armed {
            return;
        }
        self.armed = false;
        if let Some(time) = self.target.take() {
            surface.set_current_time(time);
        }
    }

    /// Drop any pending target and disarm the listener.
    ///
    /// Teardown path: leaves nothing behind even when metadata never
    /// arrived.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.target = None;
    }

    /// Whether a metadata listener is currently armed.
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
