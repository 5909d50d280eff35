//! Nested-player collaborator interfaces.
//!
//! The hosting framework owns the actual media element; this crate only
//! drives it through [`MediaSurface`]. A [`SurfaceFactory`] builds the
//! surface from a source list and doubles as the framework's plugin
//! registry for bulk-event configuration.

use serde_json::{Map, Value};

use crate::config::MediaKind;

/// Lifecycle events emitted by the nested player itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// The media's metadata (notably its duration) has finished loading.
    /// Fires at most once per surface.
    LoadedMetadata,
}

/// One-shot action scheduled at a nested-player time via
/// [`MediaSurface::cue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueAction {
    /// Pause the nested player when the cue point is reached.
    Pause,
}

/// A playable media surface: the handle this crate drives.
///
/// Implementations wrap whatever the hosting framework created (a media
/// element, a wrapped sub-player instance). All methods are expected to be
/// cheap and non-blocking; the surface reports readiness asynchronously by
/// having the host deliver [`MediaEvent::LoadedMetadata`] to the segment.
pub trait MediaSurface {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Move playback to `time` immediately.
    ///
    /// Only called once the duration is known; callers that may run before
    /// metadata loads go through the deferred seek controller instead.
    fn set_current_time(&mut self, time: f64);

    /// Media duration in seconds, or `None` until metadata has loaded.
    fn duration(&self) -> Option<f64>;

    fn play(&mut self);

    fn pause(&mut self);

    /// Schedule `action` to run once when playback reaches `time`.
    fn cue(&mut self, time: f64, action: CueAction);

    /// Release the underlying media element. Called at most once, at
    /// segment teardown; the surface is never used afterwards.
    fn destroy(&mut self);
}

/// Builds media surfaces and applies bulk-event registrations.
pub trait SurfaceFactory {
    type Surface: MediaSurface;

    /// Construct a surface for the given sources.
    ///
    /// `options` is the host's player option set with the segment's
    /// overrides already merged in. Errors are reported to the caller
    /// building the segment; the hosting framework typically reacts by not
    /// activating the segment at all.
    fn create(
        &mut self,
        sources: &[String],
        kind: MediaKind,
        options: &Map<String, Value>,
    ) -> anyhow::Result<Self::Surface>;

    /// Whether the framework's registry knows this bulk-event kind.
    fn supports_event(&self, kind: &str) -> bool;

    /// Register one bulk event of a supported kind on the surface.
    fn apply_event(&mut self, surface: &mut Self::Surface, kind: &str, params: &Map<String, Value>);
}
