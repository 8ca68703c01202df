//! Wire-code tables for the embedded player's script API.
//!
//! The player page reports states, qualities, and errors as raw string
//! tokens. Each enum here maps both ways through a static table:
//! `as_wire` is total, `from_wire` falls back to `Unknown` so new tokens
//! from the player never break the bridge.

use serde::{Deserialize, Serialize};

// =============================================================================
// PLAYER STATE
// =============================================================================

/// Playback state of the embedded player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Queued,
    Unknown,
}

const STATE_CODES: &[(PlayerState, &str)] = &[
    (PlayerState::Unstarted, "-1"),
    (PlayerState::Ended, "0"),
    (PlayerState::Playing, "1"),
    (PlayerState::Paused, "2"),
    (PlayerState::Buffering, "3"),
    (PlayerState::Queued, "5"),
    (PlayerState::Unknown, "unknown"),
];

impl PlayerState {
    pub fn as_wire(&self) -> &'static str {
        STATE_CODES
            .iter()
            .find(|(state, _)| state == self)
            .map(|(_, code)| *code)
            .unwrap_or("unknown")
    }

    pub fn from_wire(code: &str) -> Self {
        STATE_CODES
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(state, _)| *state)
            .unwrap_or(PlayerState::Unknown)
    }
}

// =============================================================================
// PLAYBACK QUALITY
// =============================================================================

/// Video quality level. `Auto` is `"default"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackQuality {
    Small,
    Medium,
    Large,
    Hd720,
    Hd1080,
    HighRes,
    Auto,
    Unknown,
}

const QUALITY_CODES: &[(PlaybackQuality, &str)] = &[
    (PlaybackQuality::Small, "small"),
    (PlaybackQuality::Medium, "medium"),
    (PlaybackQuality::Large, "large"),
    (PlaybackQuality::Hd720, "hd720"),
    (PlaybackQuality::Hd1080, "hd1080"),
    (PlaybackQuality::HighRes, "highres"),
    (PlaybackQuality::Auto, "default"),
    (PlaybackQuality::Unknown, "unknown"),
];

impl PlaybackQuality {
    pub fn as_wire(&self) -> &'static str {
        QUALITY_CODES
            .iter()
            .find(|(quality, _)| quality == self)
            .map(|(_, code)| *code)
            .unwrap_or("unknown")
    }

    pub fn from_wire(code: &str) -> Self {
        QUALITY_CODES
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(quality, _)| *quality)
            .unwrap_or(PlaybackQuality::Unknown)
    }
}

// =============================================================================
// PLAYER ERROR
// =============================================================================

/// Error kinds the embedded player reports in `onError` callbacks.
///
/// Not 1:1 with wire codes: `VideoNotFound` and `NotEmbeddable` each
/// carry a legacy alias code. The primary code comes first in the table
/// and is what `as_wire` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerError {
    InvalidParam,
    Html5Error,
    NotEmbeddable,
    VideoNotFound,
    Unknown,
}

const ERROR_CODES: &[(PlayerError, &str)] = &[
    (PlayerError::InvalidParam, "2"),
    (PlayerError::Html5Error, "5"),
    (PlayerError::VideoNotFound, "100"),
    (PlayerError::NotEmbeddable, "101"),
    // Legacy aliases still emitted by older player revisions.
    (PlayerError::VideoNotFound, "105"),
    (PlayerError::NotEmbeddable, "150"),
];

impl PlayerError {
    pub fn as_wire(&self) -> &'static str {
        ERROR_CODES
            .iter()
            .find(|(error, _)| error == self)
            .map(|(_, code)| *code)
            .unwrap_or("unknown")
    }

    pub fn from_wire(code: &str) -> Self {
        ERROR_CODES
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(error, _)| *error)
            .unwrap_or(PlayerError::Unknown)
    }
}

// =============================================================================
// TESTS
// =============================================================================
