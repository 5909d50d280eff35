//! Nested media playback synchronized to a host player's timeline.
//!
//! `inset` embeds an independently created media element (the "nested
//! player") inside one segment `[start, end]` of a host player's timeline
//! and keeps its playback position in step with the host, across host
//! play/pause/seek activity and the nested media's own asynchronous load
//! lifecycle.
//!
//! The crate owns only the synchronization core. Everything that touches
//! real media elements belongs to the hosting framework and is reached
//! through the collaborator traits in [`host`] and [`surface`].
//!
//! # Architecture
//!
//! - [`config`]: segment options as hosts deliver them (serde), the
//!   immutable timing snapshot, source-list coercion and media-kind
//!   guessing
//! - [`host`]: host transport and container traits, host events, the
//!   subscription ledger
//! - [`surface`]: the nested-player trait, its factory, media events
//! - [`segment`]: the sync state machine, the deferred seek controller
//!   and the playable-window clamp
//!
//! # Usage
//!
//! ```no_run
//! use inset::{
//!     Container, CueAction, HostEvent, HostTransport, InsetSegment, MediaKind,
//!     MediaSurface, SegmentOptions, SurfaceFactory,
//! };
//! use serde_json::{Map, Value};
//!
//! // A real host wires these traits to its media elements.
//! struct Surface;
//! impl MediaSurface for Surface {
//!     fn current_time(&self) -> f64 { 0.0 }
//!     fn set_current_time(&mut self, _time: f64) {}
//!     fn duration(&self) -> Option<f64> { None }
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn cue(&mut self, _time: f64, _action: CueAction) {}
//!     fn destroy(&mut self) {}
//! }
//!
//! struct Factory;
//! impl SurfaceFactory for Factory {
//!     type Surface = Surface;
//!     fn create(
//!         &mut self,
//!         _sources: &[String],
//!         _kind: MediaKind,
//!         _options: &Map<String, Value>,
//!     ) -> anyhow::Result<Surface> {
//!         Ok(Surface)
//!     }
//!     fn supports_event(&self, _kind: &str) -> bool { false }
//!     fn apply_event(&mut self, _s: &mut Surface, _kind: &str, _p: &Map<String, Value>) {}
//! }
//!
//! struct Host;
//! impl HostTransport for Host {
//!     fn current_time(&self) -> f64 { 12.0 }
//!     fn paused(&self) -> bool { false }
//! }
//!
//! struct Marker;
//! impl Container for Marker {
//!     fn set_active(&mut self, _active: bool) {}
//! }
//!
//! let options: SegmentOptions = serde_json::from_str(
//!     r#"{ "source": "clip.mp4", "start": 10, "end": 20, "to": 5, "sync": true }"#,
//! )?;
//!
//! let mut factory = Factory;
//! let mut segment = InsetSegment::new(&options, &Map::new(), &mut factory)?;
//!
//! // The hosting framework drives the segment from its dispatch loop.
//! segment.start(&Host, &mut Marker, &options);
//! segment.host_event(&Host, HostEvent::Seeking);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod segment;
pub mod surface;


pub use config::{
    guess_media_kind, merge_options, EventSpec, MediaKind, SegmentConfig, SegmentOptions,
    SourceList,
};
pub use error::SetupError;
pub use host::{Container, HostEvent, HostTransport, Subscriptions};
pub use segment::{DeferredSeek, InsetSegment, Phase, PlayWindow};
pub use surface::{CueAction, MediaEvent, MediaSurface, SurfaceFactory};
