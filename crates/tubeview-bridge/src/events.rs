//! Typed events decoded from the player page's pseudo-navigation callbacks.

use crate::codes::{PlaybackQuality, PlayerError, PlayerState};

/// An event the embedded player signalled through the bridge scheme.
///
/// Events are ephemeral: parsed from a callback URL, dispatched to the
/// listener, discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackEvent {
    /// Player object constructed and ready for commands.
    Ready,
    /// Playback state transition.
    StateChange(PlayerState),
    /// Quality level changed (user or adaptive).
    QualityChange(PlaybackQuality),
    /// Player reported an error. Always surfaced to the listener.
    Error(PlayerError),
    /// Elapsed playback time in seconds, ticked by the page while playing.
    PlayTime(f64),
    /// The external player library failed to load inside the page.
    IframeApiFailed,
}
