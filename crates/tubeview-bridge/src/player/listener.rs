use tubeview_common::Color;

use crate::codes::{PlaybackQuality, PlayerError, PlayerState};

/// Handle to a temporary view shown over the surface until the player
/// reports ready.
pub trait LoadingOverlay {
    fn remove(&mut self);
}

/// Receiver for player events and provider of optional embedding hooks.
pub trait PlayerListener {
    fn on_ready(&mut self);
    fn on_state_change(&mut self, state: PlayerState);
    fn on_quality_change(&mut self, quality: PlaybackQuality);
    fn on_error(&mut self, error: PlayerError);
    /// Elapsed playback seconds, ticked by the page while playing.
    fn on_play_time(&mut self, seconds: f64);

    /// Overlay to show until the player is ready. `None` shows nothing.
    fn loading_overlay(&mut self) -> Option<Box<dyn LoadingOverlay>> {
        None
    }

    /// Background color for the surface behind the player.
    fn surface_background(&mut self) -> Color {
        Color::BLACK
    }
}
