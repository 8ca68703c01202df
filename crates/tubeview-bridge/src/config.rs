//! Player configuration: the JSON blob handed to the player constructor
//! inside the hosted page.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use tubeview_common::{BridgeError, Result};

/// Width/height used when the caller leaves them unset. The page styles
/// the player to the full viewport anyway.
pub const DEFAULT_DIMENSION: &str = "100%";

/// Trusted origin used when `playerVars.origin` is absent. It carries no
/// authority component, so the same-origin comparison can never match a
/// network URL against it.
pub const DEFAULT_ORIGIN: &str = "about:blank";

/// The callback functions the hosted page defines. Injected into the
/// `events` mapping on every load so the player always reports back
/// through the bridge scheme.
pub const EVENT_CALLBACKS: &[(&str, &str)] = &[
    ("onReady", "onReady"),
    ("onStateChange", "onStateChange"),
    ("onPlaybackQualityChange", "onPlaybackQualityChange"),
    ("onError", "onError"),
    ("onPlayTime", "onPlayTime"),
];

/// Configuration for one player load. Constructed fresh on every (re)load;
/// it fully replaces prior state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
    pub width: String,
    pub height: String,
    /// Always serialized, even when empty: the hosted page interpolates
    /// this object verbatim and requires syntactically valid JSON.
    pub player_vars: Map<String, Value>,
    pub events: BTreeMap<String, String>,
}

impl Default for PlayerConfiguration {
    fn default() -> Self {
        Self {
            video_id: None,
            playlist_id: None,
            width: DEFAULT_DIMENSION.to_string(),
            height: DEFAULT_DIMENSION.to_string(),
            player_vars: Map::new(),
            events: BTreeMap::new(),
        }
    }
}

impl PlayerConfiguration {
    /// Configuration loading a single video.
    pub fn for_video(video_id: impl Into<String>) -> Self {
        Self {
            video_id: Some(video_id.into()),
            ..Default::default()
        }
    }

    /// Configuration loading a playlist.
    pub fn for_playlist(playlist_id: impl Into<String>) -> Self {
        Self {
            playlist_id: Some(playlist_id.into()),
            ..Default::default()
        }
    }

    pub fn with_player_vars(mut self, player_vars: Map<String, Value>) -> Self {
        self.player_vars = player_vars;
        self
    }

    /// Fill defaults and force the fixed event-callback set. Every load
    /// goes through this before serialization.
    pub fn normalized(mut self) -> Self {
        if self.width.is_empty() {
            self.width = DEFAULT_DIMENSION.to_string();
        }
        if self.height.is_empty() {
            self.height = DEFAULT_DIMENSION.to_string();
        }
        self.events = EVENT_CALLBACKS
            .iter()
            .map(|(event, function)| (event.to_string(), function.to_string()))
            .collect();
        self
    }

    /// The origin used as the base for same-origin navigation checks.
    pub fn trusted_origin(&self) -> &str {
        self.player_vars
            .get("origin")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ORIGIN)
    }

    /// Serialize to the JSON object literal interpolated into the page.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| BridgeError::ConfigEncoding(e.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_configuration_always_serializes_player_vars() {
        let json = PlayerConfiguration::default().to_json().unwrap();
        assert!(
            json.contains("\"playerVars\":{}"),
            "playerVars must be present even when empty: {json}"
        );
    }

    #[test]
    fn video_id_serializes_camel_case() {
        let json = PlayerConfiguration::for_video("abc123").to_json().unwrap();
        assert!(json.contains("\"videoId\":\"abc123\""));
        assert!(!json.contains("playlistId"), "absent id stays absent");
    }

    #[test]
    fn playlist_id_serializes_camel_case() {
        let json = PlayerConfiguration::for_playlist("PL42").to_json().unwrap();
        assert!(json.contains("\"playlistId\":\"PL42\""));
        assert!(!json.contains("videoId"));
    }

    #[test]
    fn normalized_fills_dimensions() {
        let mut config = PlayerConfiguration::for_video("abc");
        config.width = String::new();
        config.height = String::new();
        let config = config.normalized();
        assert_eq!(config.width, "100%");
        assert_eq!(config.height, "100%");
    }

    #[test]
    fn normalized_injects_the_five_event_callbacks() {
        let config = PlayerConfiguration::default().normalized();
        assert_eq!(config.events.len(), 5);
        for (event, function) in EVENT_CALLBACKS {
            assert_eq!(config.events.get(*event).map(String::as_str), Some(*function));
        }
    }

    #[test]
    fn trusted_origin_from_player_vars() {
        let mut vars = Map::new();
        vars.insert("origin".into(), json!("https://host.example"));
        let config = PlayerConfiguration::for_video("abc").with_player_vars(vars);
        assert_eq!(config.trusted_origin(), "https://host.example");
    }

    #[test]
    fn trusted_origin_defaults_to_placeholder() {
        let config = PlayerConfiguration::default();
        assert_eq!(config.trusted_origin(), DEFAULT_ORIGIN);

        // A non-string origin is ignored rather than trusted.
        let mut vars = Map::new();
        vars.insert("origin".into(), json!(42));
        let config = PlayerConfiguration::default().with_player_vars(vars);
        assert_eq!(config.trusted_origin(), DEFAULT_ORIGIN);
    }

    #[test]
    fn player_vars_serialize_verbatim() {
        let mut vars = Map::new();
        vars.insert("playsinline".into(), json!(1));
        vars.insert("controls".into(), json!(0));
        let json = PlayerConfiguration::for_video("abc")
            .with_player_vars(vars)
            .to_json()
            .unwrap();
        assert!(json.contains("\"playsinline\":1"));
        assert!(json.contains("\"controls\":0"));
    }
}
