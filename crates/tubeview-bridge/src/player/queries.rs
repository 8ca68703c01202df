//! Query operations: getters evaluated against the page's player object.
//!
//! The engine hands results back as JSON text. Decoding is lenient the
//! same way callback parsing is: bad or missing payloads degrade to a
//! defined fallback instead of failing the call.

use crate::codes::{PlaybackQuality, PlayerState};
use crate::commands;

use super::PlayerBridge;

impl PlayerBridge {
    pub fn player_state(&mut self) -> PlayerState {
        let raw = self.submit(commands::GET_PLAYER_STATE).unwrap_or_default();
        PlayerState::from_wire(raw.trim())
    }

    pub fn playback_quality(&mut self) -> PlaybackQuality {
        let raw = self
            .submit(commands::GET_PLAYBACK_QUALITY)
            .unwrap_or_default();
        PlaybackQuality::from_wire(decode_string(&raw).as_deref().unwrap_or(""))
    }

    pub fn available_quality_levels(&mut self) -> Vec<PlaybackQuality> {
        let raw = self
            .submit(commands::GET_AVAILABLE_QUALITY_LEVELS)
            .unwrap_or_default();
        decode_string_array(&raw)
            .iter()
            .map(|code| PlaybackQuality::from_wire(code))
            .collect()
    }

    /// Current playback rate; `1.0` (the player default) when the engine
    /// reports nothing usable.
    pub fn playback_rate(&mut self) -> f64 {
        let raw = self.submit(commands::GET_PLAYBACK_RATE).unwrap_or_default();
        serde_json::from_str(raw.trim()).unwrap_or(1.0)
    }

    pub fn available_playback_rates(&mut self) -> Vec<f64> {
        let raw = self
            .submit(commands::GET_AVAILABLE_PLAYBACK_RATES)
            .unwrap_or_default();
        serde_json::from_str(raw.trim()).unwrap_or_default()
    }

    /// Elapsed seconds into the current video.
    pub fn current_time(&mut self) -> f64 {
        let raw = self.submit(commands::GET_CURRENT_TIME).unwrap_or_default();
        decode_f64(&raw)
    }

    /// Total duration in seconds. Zero until the player has metadata.
    pub fn duration(&mut self) -> f64 {
        let raw = self.submit(commands::GET_DURATION).unwrap_or_default();
        decode_f64(&raw)
    }

    /// Fraction of the video the player has buffered, `0.0..=1.0`.
    pub fn video_loaded_fraction(&mut self) -> f64 {
        let raw = self
            .submit(commands::GET_VIDEO_LOADED_FRACTION)
            .unwrap_or_default();
        decode_f64(&raw)
    }

    pub fn video_url(&mut self) -> Option<String> {
        let raw = self.submit(commands::GET_VIDEO_URL)?;
        decode_string(&raw)
    }

    pub fn video_embed_code(&mut self) -> Option<String> {
        let raw = self.submit(commands::GET_VIDEO_EMBED_CODE)?;
        decode_string(&raw)
    }

    /// Video IDs in the current playlist, in playback order. Empty when
    /// nothing playlist-shaped is loaded.
    pub fn playlist(&mut self) -> Vec<String> {
        let raw = self.submit(commands::GET_PLAYLIST).unwrap_or_default();
        decode_string_array(&raw)
    }

    /// Index of the playing playlist entry; `0` when unavailable.
    pub fn playlist_index(&mut self) -> i32 {
        let raw = self.submit(commands::GET_PLAYLIST_INDEX).unwrap_or_default();
        serde_json::from_str(raw.trim()).unwrap_or(0)
    }

    pub fn is_muted(&mut self) -> bool {
        let raw = self.submit(commands::IS_MUTED).unwrap_or_default();
        serde_json::from_str(raw.trim()).unwrap_or(false)
    }
}

fn decode_f64(raw: &str) -> f64 {
    serde_json::from_str(raw.trim()).unwrap_or(0.0)
}

fn decode_string(raw: &str) -> Option<String> {
    serde_json::from_str(raw.trim()).ok()
}

fn decode_string_array(raw: &str) -> Vec<String> {
    serde_json::from_str(raw.trim()).unwrap_or_default()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use serde_json::Map;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use tubeview_common::{Color, Result};

    use super::super::{EmbeddedSurface, PlayerBridge, PlayerHost, PlayerListener};
    use crate::codes::{PlaybackQuality, PlayerError, PlayerState};

    type Responses = Rc<RefCell<HashMap<&'static str, &'static str>>>;

    struct CannedSurface {
        responses: Responses,
    }

    impl EmbeddedSurface for CannedSurface {
        fn load_page(&mut self, _html: &str) -> Result<()> {
            Ok(())
        }

        fn evaluate(&mut self, script: &str) -> Result<String> {
            Ok(self
                .responses
                .borrow()
                .get(script)
                .map(|s| s.to_string())
                .unwrap_or_else(|| "null".to_string()))
        }
    }

    struct CannedHost {
        responses: Responses,
    }

    impl PlayerHost for CannedHost {
        fn create_surface(
            &mut self,
            _background: Color,
            _origin: &str,
        ) -> Result<Box<dyn EmbeddedSurface>> {
            Ok(Box::new(CannedSurface {
                responses: Rc::clone(&self.responses),
            }))
        }

        fn open_external(&mut self, _url: &str) {}
    }

    struct NullListener;

    impl PlayerListener for NullListener {
        fn on_ready(&mut self) {}
        fn on_state_change(&mut self, _state: PlayerState) {}
        fn on_quality_change(&mut self, _quality: PlaybackQuality) {}
        fn on_error(&mut self, _error: PlayerError) {}
        fn on_play_time(&mut self, _seconds: f64) {}
    }

    fn bridge_with(entries: &[(&'static str, &'static str)]) -> PlayerBridge {
        let responses: Responses = Rc::new(RefCell::new(entries.iter().copied().collect()));
        let mut bridge = PlayerBridge::new(
            Box::new(CannedHost { responses }),
            Box::new(NullListener),
        );
        assert!(bridge.load_video_id("abc", Map::new()));
        bridge
    }

    #[test]
    fn player_state_decodes_wire_code() {
        let mut bridge = bridge_with(&[("player.getPlayerState();", "1")]);
        assert_eq!(bridge.player_state(), PlayerState::Playing);
    }

    #[test]
    fn player_state_degrades_to_unknown() {
        let mut bridge = bridge_with(&[]);
        assert_eq!(bridge.player_state(), PlayerState::Unknown);
    }

    #[test]
    fn playback_quality_decodes_json_string() {
        let mut bridge = bridge_with(&[("player.getPlaybackQuality();", "\"hd720\"")]);
        assert_eq!(bridge.playback_quality(), PlaybackQuality::Hd720);
    }

    #[test]
    fn available_quality_levels_decode_and_fall_back() {
        let mut bridge = bridge_with(&[(
            "player.getAvailableQualityLevels();",
            "[\"hd1080\",\"large\",\"something-new\"]",
        )]);
        assert_eq!(
            bridge.available_quality_levels(),
            vec![
                PlaybackQuality::Hd1080,
                PlaybackQuality::Large,
                PlaybackQuality::Unknown
            ]
        );
    }

    #[test]
    fn numeric_getters_decode() {
        let mut bridge = bridge_with(&[
            ("player.getCurrentTime();", "12.5"),
            ("player.getDuration();", "212"),
            ("player.getVideoLoadedFraction();", "0.75"),
        ]);
        assert_eq!(bridge.current_time(), 12.5);
        assert_eq!(bridge.duration(), 212.0);
        assert_eq!(bridge.video_loaded_fraction(), 0.75);
    }

    #[test]
    fn numeric_getters_degrade_to_zero() {
        let mut bridge = bridge_with(&[("player.getCurrentTime();", "garbage")]);
        assert_eq!(bridge.current_time(), 0.0);
        assert_eq!(bridge.duration(), 0.0);
    }

    #[test]
    fn playback_rate_defaults_to_one() {
        let mut bridge = bridge_with(&[]);
        assert_eq!(bridge.playback_rate(), 1.0);

        let mut bridge = bridge_with(&[("player.getPlaybackRate();", "0.25")]);
        assert_eq!(bridge.playback_rate(), 0.25);
    }

    #[test]
    fn available_playback_rates_decode() {
        let mut bridge = bridge_with(&[(
            "player.getAvailablePlaybackRates();",
            "[0.25,0.5,1,1.5,2]",
        )]);
        assert_eq!(
            bridge.available_playback_rates(),
            vec![0.25, 0.5, 1.0, 1.5, 2.0]
        );
    }

    #[test]
    fn string_getters_decode_or_none() {
        let mut bridge = bridge_with(&[(
            "player.getVideoUrl();",
            "\"https://www.youtube.com/watch?v=abc\"",
        )]);
        assert_eq!(
            bridge.video_url().as_deref(),
            Some("https://www.youtube.com/watch?v=abc")
        );
        // null result: nothing loaded yet.
        assert_eq!(bridge.video_embed_code(), None);
    }

    #[test]
    fn playlist_getters_decode() {
        let mut bridge = bridge_with(&[
            ("player.getPlaylist();", "[\"a\",\"b\",\"c\"]"),
            ("player.getPlaylistIndex();", "2"),
        ]);
        assert_eq!(bridge.playlist(), vec!["a", "b", "c"]);
        assert_eq!(bridge.playlist_index(), 2);
    }

    #[test]
    fn playlist_degrades_to_empty() {
        let mut bridge = bridge_with(&[]);
        assert!(bridge.playlist().is_empty());
        assert_eq!(bridge.playlist_index(), 0);
    }

    #[test]
    fn is_muted_decodes_bool() {
        let mut bridge = bridge_with(&[("player.isMuted();", "true")]);
        assert!(bridge.is_muted());

        let mut bridge = bridge_with(&[]);
        assert!(!bridge.is_muted());
    }
}
