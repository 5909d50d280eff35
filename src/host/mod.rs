//! Host-player collaborator interfaces and the subscription ledger.
//!
//! The segment never sees a concrete host implementation; it reads the
//! transport through [`HostTransport`] and receives lifecycle events from
//! whatever dispatch loop the hosting framework runs. The
//! [`Subscriptions`] ledger records which events the segment is currently
//! listening for, so deactivation can remove exactly what was added.

/// Transport lifecycle events emitted by the host player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    Play,
    Pause,
    Seeking,
    Seeked,
}

impl HostEvent {
    /// Every event the segment may subscribe to.
    pub const ALL: [HostEvent; 4] = [
        HostEvent::Play,
        HostEvent::Pause,
        HostEvent::Seeking,
        HostEvent::Seeked,
    ];
}

/// Read-only view of the host player's transport.
pub trait HostTransport {
    /// Current host-timeline position in seconds.
    fn current_time(&self) -> f64;

    /// Whether the host player is paused.
    fn paused(&self) -> bool;
}

/// The container element owned by the host, marked active while the
/// segment is on screen.
pub trait Container {
    fn set_active(&mut self, active: bool);
}

/// Ledger of host events the segment is currently subscribed to.
///
/// Subscribe and unsubscribe are idempotent: removing an event that was
/// never added is a no-op, so deactivation can always attempt all four
/// removals regardless of how the segment was configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Subscriptions {
    play: bool,
    pause: bool,
    seeking: bool,
    seeked: bool,
}

impl Subscriptions {
    pub fn subscribe(&mut self, event: HostEvent) {
        *self.slot(event) = true;
    }

    pub fn unsubscribe(&mut self, event: HostEvent) {
        *self.slot(event) = false;
    }

    pub fn contains(&self, event: HostEvent) -> bool {
        match event {
            HostEvent::Play => self.play,
            HostEvent::Pause => self.pause,
            HostEvent::Seeking => self.seeking,
            HostEvent::Seeked => self.seeked,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.play && !self.pause && !self.seeking && !self.seeked
    }

    fn slot(&mut self, event: HostEvent) -> &mut bool {
        match event {
            HostEvent::Play => &mut self.play,
            HostEvent::Pause => &mut self.pause,
            HostEvent::Seeking => &mut self.seeking,
            HostEvent::Seeked => &mut self.seeked,
        }
    }
}
