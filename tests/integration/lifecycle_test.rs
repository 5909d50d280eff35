//! Deferred-load and teardown scenarios.

use serde_json::{json, Map};

use super::helpers::{options_from_json, Command, RecordingFactory, RecordingSurface, ScriptedHost, StageMarker};
use inset::{HostEvent, InsetSegment, MediaEvent, Phase};

#[test]
fn seeks_before_metadata_collapse_to_the_last_target() {
    let options = options_from_json(json!({
        "source": "clip.mp4",
        "start": 10, "end": 20,
        "from": 3,
        "sync": true
    }));

    let surface = RecordingSurface::new();
    let mut factory = RecordingFactory::new(surface.clone());
    let mut segment = InsetSegment::new(&options, &Map::new(), &mut factory).unwrap();

    // The initial seek to `from` had to queue: metadata is not in yet.
    assert!(segment.has_pending_seek());
    assert!(surface.seeks().is_empty());

    let host = ScriptedHost::new(10.0, true);
    let mut stage = StageMarker::default();
    segment.start(&host, &mut stage, &options);

    // Two scrubs while the media is still loading; each overwrites the
    // queued target, none reaches the surface.
    host.set_time(14.0);
    segment.host_event(&host, HostEvent::Seeking);
    host.set_time(11.0);
    segment.host_event(&host, HostEvent::Seeking);
    assert!(surface.seeks().is_empty());

    // Metadata lands: exactly one seek fires, to the last projection
    // (11 - 10 + 3 = 4), and the window clamps to the real duration.
    surface.load(6.0);
    segment.media_event(MediaEvent::LoadedMetadata);

    assert_eq!(surface.seeks(), vec![4.0]);
    assert!(!segment.has_pending_seek());
    assert_eq!(segment.window().to, 6.0);

    // Later seeks apply synchronously, nothing re-arms.
    host.set_time(12.0);
    segment.host_event(&host, HostEvent::Seeking);
    assert_eq!(surface.seeks(), vec![4.0, 5.0]);
    assert!(!segment.has_pending_seek());
}

#[test]
fn teardown_before_metadata_leaves_nothing_armed() {
    let options = options_from_json(json!({
        "source": "clip.mp4",
        "start": 10, "end": 20,
        "from": 3
    }));

    let surface = RecordingSurface::new();
    let mut factory = RecordingFactory::new(surface.clone());
    let mut segment = InsetSegment::new(&options, &Map::new(), &mut factory).unwrap();
    assert!(segment.has_pending_seek());

    let mut stage = StageMarker::default();
    segment.end(&mut stage);
    segment.teardown();

    assert_eq!(segment.phase(), Phase::Destroyed);
    assert!(!segment.has_pending_seek());
    for event in HostEvent::ALL {
        assert!(!segment.is_subscribed(event));
    }

    // Metadata arriving after destruction is ignored entirely.
    surface.load(30.0);
    segment.media_event(MediaEvent::LoadedMetadata);
    assert!(surface.seeks().is_empty());
}

#[test]
fn media_that_never_loads_is_an_accepted_degenerate_case() {
    let options = options_from_json(json!({
        "source": "clip.mp4",
        "start": 10, "end": 20,
        "from": 2, "sync": true
    }));

    let surface = RecordingSurface::new();
    let mut factory = RecordingFactory::new(surface.clone());
    let mut segment = InsetSegment::new(&options, &Map::new(), &mut factory).unwrap();

    let host = ScriptedHost::new(12.0, false);
    let mut stage = StageMarker::default();

    // A full activation cycle with metadata never arriving: the nested
    // player gets play/pause commands but no seek ever lands.
    segment.start(&host, &mut stage, &options);
    host.set_time(15.0);
    segment.host_event(&host, HostEvent::Seeking);
    segment.host_event(&host, HostEvent::Seeked);
    segment.end(&mut stage);

    assert!(surface.seeks().is_empty());
    assert!(!surface.playing());

    segment.teardown();
    assert!(!segment.has_pending_seek());
    assert_eq!(surface.commands().last(), Some(&Command::Destroy));
}

#[test]
fn segment_reactivates_cleanly_after_end() {
    let options = options_from_json(json!({
        "source": "clip.mp4",
        "start": 10, "end": 20,
        "to": 5, "sync": true
    }));

    let surface = RecordingSurface::with_duration(30.0);
    let mut factory = RecordingFactory::new(surface.clone());
    let mut segment = InsetSegment::new(&options, &Map::new(), &mut factory).unwrap();
    segment.media_event(MediaEvent::LoadedMetadata);

    let host = ScriptedHost::new(12.0, false);
    let mut stage = StageMarker::default();

    segment.start(&host, &mut stage, &options);
    segment.end(&mut stage);
    assert_eq!(segment.phase(), Phase::Idle);
    surface.clear_commands();

    // Host loops back into the interval; the segment replays from the
    // new projection with fresh subscriptions.
    host.set_time(11.0);
    segment.start(&host, &mut stage, &options);
    assert!(stage.active);
    assert_eq!(surface.commands(), vec![Command::Seek(1.0), Command::Play]);
    for event in HostEvent::ALL {
        assert!(segment.is_subscribed(event));
    }
}

#[test]
fn destroyed_segment_ignores_every_call() {
    let options = options_from_json(json!({
        "source": "clip.mp4",
        "start": 10, "end": 20, "sync": true
    }));

    let surface = RecordingSurface::with_duration(30.0);
    let mut factory = RecordingFactory::new(surface.clone());
    let mut segment = InsetSegment::new(&options, &Map::new(), &mut factory).unwrap();

    segment.teardown();
    surface.clear_commands();

    let host = ScriptedHost::new(12.0, false);
    let mut stage = StageMarker::default();
    segment.start(&host, &mut stage, &options);
    segment.host_event(&host, HostEvent::Play);
    segment.media_event(MediaEvent::LoadedMetadata);
    segment.end(&mut stage);
    segment.teardown();

    assert!(surface.commands().is_empty());
    assert!(!stage.active);
    assert_eq!(segment.phase(), Phase::Destroyed);
}
