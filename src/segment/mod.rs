//! The segment sync state machine.
//!
//! An [`InsetSegment`] owns one nested player for one activation interval
//! on the host timeline. The hosting framework feeds it lifecycle calls
//! (`start`, `end`, `teardown`), host transport events, and the nested
//! player's own metadata event; the segment answers with transport
//! commands on the surface, clamped to the playable window and routed
//! through the deferred seek controller when the media is not yet loaded.

mod seek;
mod window;

pub use seek::DeferredSeek;
pub use window::PlayWindow;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::config::{guess_media_kind, merge_options, SegmentConfig, SegmentOptions};
use crate::error::SetupError;
use crate::host::{Container, HostEvent, HostTransport, Subscriptions};
use crate::surface::{CueAction, MediaEvent, MediaSurface, SurfaceFactory};

/// Lifecycle phase of a segment.
///
/// `Idle` and `Active` alternate as the host enters and leaves the
/// segment's interval; `Destroyed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
    Destroyed,
}

/// One nested player embedded in a host timeline segment.
///
/// Construction builds the surface and primes the initial window; the
/// hosting framework then drives the segment:
///
/// - [`start`](Self::start) / [`end`](Self::end) when the host timeline
///   enters and leaves `[start, end]`,
/// - [`host_event`](Self::host_event) for host transport events,
/// - [`media_event`](Self::media_event) when the nested media reports its
///   metadata,
/// - [`teardown`](Self::teardown) exactly once when the segment is removed.
pub struct InsetSegment<S: MediaSurface> {
    surface: S,
    config: SegmentConfig,
    window: PlayWindow,
    pending: DeferredSeek,
    subs: Subscriptions,
    /// Nested media duration; `None` until metadata loads.
    duration: Option<f64>,
    /// Snapshot of the `sync` option, taken at each activation.
    sync: bool,
    phase: Phase,
}

impl<S: MediaSurface> InsetSegment<S> {
    /// Build the nested player for a segment.
    ///
    /// `host_options` is the host's own player option set; the segment's
    /// `options` overlay is merged over it before the surface is created.
    /// Bulk event entries with a missing or unrecognized kind are skipped.
    ///
    /// If the configured `from` is positive, an initial (possibly
    /// deferred) seek to `from` is issued here; if the initial window has
    /// a finite bound, a cue is scheduled so the nested player pauses at
    /// its window end even when free-running.
    pub fn new<F>(
        options: &SegmentOptions,
        host_options: &Map<String, Value>,
        factory: &mut F,
    ) -> Result<Self, SetupError>
    where
        F: SurfaceFactory<Surface = S>,
    {
        let sources = options.source.to_vec();
        if sources.is_empty() {
            return Err(SetupError::NoSources);
        }

        let kind = options
            .media_kind
            .or_else(|| guess_media_kind(&sources))
            .ok_or(SetupError::UnknownMediaKind)?;

        let surface_options = merge_options(host_options, &options.options);
        let mut surface = factory.create(&sources, kind, &surface_options)?;

        for spec in &options.events {
            match spec.kind.as_deref() {
                Some(kind) if factory.supports_event(kind) => {
                    factory.apply_event(&mut surface, kind, &spec.params);
                }
                Some(kind) => debug!(kind, "skipping unrecognized event entry"),
                None => debug!("skipping event entry without a type"),
            }
        }

        let config = SegmentConfig::capture(options);
        let window = PlayWindow::new(&config);
        let mut pending = DeferredSeek::new();

        if window.from > 0.0 {
            pending.request(&mut surface, window.from);
        }
        if window.is_bounded() {
            surface.cue(window.to, CueAction::Pause);
        }

        Ok(Self {
            surface,
            config,
            window,
            pending,
            subs: Subscriptions::default(),
            duration: None,
            sync: false,
            phase: Phase::Idle,
        })
    }

    /// Activate the segment: the host timeline has reached `start`.
    ///
    /// Snapshots `sync` from the live options, marks the container active
    /// and subscribes to the host events this activation needs. If the
    /// host is already playing, the nested player starts immediately.
    pub fn start<H, C>(&mut self, host: &H, container: &mut C, options: &SegmentOptions)
    where
        H: HostTransport + ?Sized,
        C: Container + ?Sized,
    {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.phase = Phase::Active;
        self.sync = options.sync;

        container.set_active(true);

        if self.sync {
            self.subs.subscribe(HostEvent::Pause);
            self.subs.subscribe(HostEvent::Seeking);
            self.subs.subscribe(HostEvent::Seeked);
        }
        self.subs.subscribe(HostEvent::Play);
        debug!(sync = self.sync, "segment activated");

        if !host.paused() {
            self.play_resume(host);
        }
    }

    /// Deactivate the segment: the host timeline has passed `end`.
    ///
    /// Pauses the nested player and removes every host subscription. All
    /// four removals are attempted unconditionally, so a `sync` toggle
    /// between activations cannot leak a listener.
    pub fn end<C>(&mut self, container: &mut C)
    where
        C: Container + ?Sized,
    {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.surface.pause();
        for event in HostEvent::ALL {
            self.subs.unsubscribe(event);
        }
        container.set_active(false);
        self.phase = Phase::Idle;
        debug!("segment deactivated");
    }

    /// Release the nested player. Terminal: every later call on this
    /// segment is a no-op.
    ///
    /// Safe to invoke at any point, including before metadata ever loaded;
    /// a still-pending deferred seek is cancelled so nothing stays armed.
    pub fn teardown(&mut self) {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.pending.cancel();
        for event in HostEvent::ALL {
            self.subs.unsubscribe(event);
        }
        self.surface.destroy();
        self.phase = Phase::Destroyed;
        debug!("segment destroyed");
    }

    /// Deliver one host transport event.
    ///
    /// Events arriving while the segment is inactive, or that the current
    /// activation did not subscribe to, are ignored.
    pub fn host_event<H>(&mut self, host: &H, event: HostEvent)
    where
        H: HostTransport + ?Sized,
    {
        if self.phase != Phase::Active || !self.subs.contains(event) {
            return;
        }
        trace!(?event, "host event");

        match event {
            HostEvent::Play => self.play_resume(host),
            HostEvent::Pause => self.surface.pause(),
            HostEvent::Seeking => self.host_seeking(host),
            HostEvent::Seeked => {
                if !host.paused() {
                    self.play_resume(host);
                }
            }
        }
    }

    /// Deliver one nested-player lifecycle event.
    pub fn media_event(&mut self, event: MediaEvent) {
        if self.phase == Phase::Destroyed {
            return;
        }
        match event {
            MediaEvent::LoadedMetadata => {
                if let Some(duration) = self.surface.duration() {
                    self.duration = Some(duration);
                    self.window.clamp_to_duration(duration);
                    debug!(duration, effective_to = self.window.to, "metadata loaded");
                }
                self.pending.resolve(&mut self.surface);
            }
        }
    }

    /// Seek the nested player to the host-derived position and resume it,
    /// unless that position already lies past the window.
    ///
    /// Invoked on host `play`, on `seeked` while the host is playing, and
    /// at activation when the host is already playing. Past the window the
    /// nested player is parked at the window end without playing.
    fn play_resume<H>(&mut self, host: &H)
    where
        H: HostTransport + ?Sized,
    {
        let time = if self.sync {
            self.projected(host.current_time())
        } else {
            0.0
        };

        if time < self.window.to {
            self.pending.request(&mut self.surface, time);
            self.surface.play();
        } else {
            let parked = self.window.to.min(self.duration.unwrap_or(f64::INFINITY));
            self.pending.request(&mut self.surface, parked);
        }
    }

    /// Host scrub in progress: hold the nested player still and track the
    /// scrub position, clamped into the window.
    fn host_seeking<H>(&mut self, host: &H)
    where
        H: HostTransport + ?Sized,
    {
        self.surface.pause();

        let mut time = if self.sync {
            self.projected(host.current_time())
        } else {
            0.0
        };
        if time >= self.window.to {
            time = self.window.to.min(self.duration.unwrap_or(f64::INFINITY));
        }
        self.pending.request(&mut self.surface, time);
    }

    /// Project a host-timeline position into nested-player coordinates.
    ///
    /// Host scrubs that land before the segment's own `start` project to a
    /// negative position; those clamp to zero.
    fn projected(&self, host_time: f64) -> f64 {
        (host_time - self.config.start + self.window.from).max(0.0)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether this activation subscribed to `event`.
    pub fn is_subscribed(&self, event: HostEvent) -> bool {
        self.subs.contains(event)
    }

    /// Whether a deferred seek is waiting on metadata.
    pub fn has_pending_seek(&self) -> bool {
        self.pending.is_armed()
    }

    /// The effective playable window.
    pub fn window(&self) -> &PlayWindow {
        &self.window
    }

    /// The nested player handle.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
