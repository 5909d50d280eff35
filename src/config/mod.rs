//! Segment configuration as delivered by the hosting framework.
//!
//! The host owns the live options object and may mutate it between
//! lifecycle calls. The timing fields are therefore snapshotted into an
//! immutable [`SegmentConfig`] when the segment is built; `sync` is
//! re-snapshotted at each activation.

mod sources;

pub use sources::{guess_media_kind, MediaKind, SourceList};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One bulk-event entry: an event of the hosting framework's plugin
/// registry, registered on the nested player at construction.
///
/// Entries with a missing or unrecognized kind are skipped rather than
/// failing the whole configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventSpec {
    /// Registry name of the event plugin.
    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Remaining fields, passed through to the registry untouched.
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

/// Live segment options, owned by the host.
///
/// The full host-side option set also carries container, styling and poster
/// fields; those never reach this crate and are ignored by deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    /// One URL or a list of alternate URLs for the nested media.
    pub source: SourceList,
    /// Explicit media kind; guessed from the sources when absent.
    #[serde(rename = "type")]
    pub media_kind: Option<MediaKind>,
    /// Host-timeline position (seconds) at which the segment activates.
    pub start: f64,
    /// Host-timeline position (seconds) at which the segment deactivates.
    pub end: f64,
    /// Nested-player position corresponding to `start`. Defaults to 0.
    pub from: f64,
    /// Nested-player position corresponding to `end`. `None` is unbounded.
    pub to: Option<f64>,
    /// Continuously derive the nested position from the host position.
    /// When false the nested player free-runs from 0 once started.
    pub sync: bool,
    /// Bulk events to register on the nested player (array form).
    pub events: Vec<EventSpec>,
    /// Nested-player option overrides, merged over the host's options.
    pub options: Map<String, Value>,
}

/// Immutable snapshot of the timing fields, captured once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentConfig {
    pub start: f64,
    pub end: f64,
    pub from: f64,
    pub to: Option<f64>,
}

impl SegmentConfig {
    /// Copy the timing fields out of the live options object.
    pub fn capture(options: &SegmentOptions) -> Self {
        Self {
            start: options.start,
            end: options.end,
            from: options.from,
            to: options.to,
        }
    }
}

/// Shallow-merge the host's player options with a segment's overrides.
///
/// Overlay keys win; base keys without an override are preserved.
pub fn merge_options(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
