//! Decoding of pseudo-navigation callback URLs.
//!
//! The player page signals events by navigating to
//! `ytplayer://<action>?data=<value>`, where `<value>` is a bare token.
//! Parsing is deliberately forgiving: a malformed query degrades to an
//! empty value, wire-code lookups fall back to `Unknown`, and unknown
//! actions yield no event at all so future callback kinds pass through
//! harmlessly.

use crate::codes::{PlaybackQuality, PlayerError, PlayerState};
use crate::events::CallbackEvent;

/// Private scheme reserved for bridge callbacks.
pub const CALLBACK_SCHEME: &str = "ytplayer";

/// Decode a pseudo-navigation URL into a typed event.
///
/// Returns `None` for URLs outside the bridge scheme and for actions the
/// bridge does not recognize. Session-level side effects (overlay
/// removal, state-change suppression) are the controller's business, not
/// the parser's.
pub fn parse(url: &str) -> Option<CallbackEvent> {
    let rest = url.strip_prefix(CALLBACK_SCHEME)?.strip_prefix("://")?;

    let (action, query) = match rest.split_once('?') {
        Some((action, query)) => (action, query),
        None => (rest, ""),
    };
    let data = data_value(query);

    match action {
        "onReady" => Some(CallbackEvent::Ready),
        "onStateChange" => Some(CallbackEvent::StateChange(PlayerState::from_wire(data))),
        "onPlaybackQualityChange" => Some(CallbackEvent::QualityChange(
            PlaybackQuality::from_wire(data),
        )),
        "onError" => Some(CallbackEvent::Error(PlayerError::from_wire(data))),
        "onPlayTime" => Some(CallbackEvent::PlayTime(data.parse().unwrap_or(0.0))),
        "onYouTubeIframeAPIFailedToLoad" => Some(CallbackEvent::IframeApiFailed),
        _ => None,
    }
}

/// Extract the `data` parameter from a query string. The value is a bare
/// token, not URL-encoded. Missing or malformed pairs yield `""`.
fn data_value(query: &str) -> &str {
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("data="))
        .unwrap_or("")
}

// =============================================================================
// TESTS
// =============================================================================
