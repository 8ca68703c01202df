//! The hosted page skeleton.
//!
//! A fixed HTML template with exactly one placeholder: the configuration
//! JSON handed to the player constructor. The page loads the external
//! player library, mounts the player full-viewport, and signals every
//! event back to the host by navigating to the bridge scheme.

/// Placeholder replaced by the serialized `PlayerConfiguration`.
const CONFIG_PLACEHOLDER: &str = "__PLAYER_CONFIG__";

pub const PLAYER_PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta name="viewport" content="initial-scale=1.0, user-scalable=no">
<style>
  html, body { margin: 0; padding: 0; width: 100%; height: 100%; background: #000; overflow: hidden; }
  #player { width: 100%; height: 100%; }
</style>
</head>
<body>
<div id="player"></div>
<script>
  var player = null;
  var timeTicker = null;

  var tag = document.createElement('script');
  tag.src = 'https://www.youtube.com/iframe_api';
  tag.onerror = function() {
    window.location.href = 'ytplayer://onYouTubeIframeAPIFailedToLoad';
  };
  document.body.appendChild(tag);

  function onYouTubeIframeAPIReady() {
    player = new YT.Player('player', __PLAYER_CONFIG__);
    player.setSize(window.innerWidth, window.innerHeight);
  }

  function onReady(event) {
    window.location.href = 'ytplayer://onReady?data=' + event.data;
  }

  function onStateChange(event) {
    window.location.href = 'ytplayer://onStateChange?data=' + event.data;
    if (event.data === YT.PlayerState.PLAYING) {
      startTimeTicker();
    } else {
      stopTimeTicker();
    }
  }

  function onPlaybackQualityChange(event) {
    window.location.href = 'ytplayer://onPlaybackQualityChange?data=' + event.data;
  }

  function onError(event) {
    window.location.href = 'ytplayer://onError?data=' + event.data;
  }

  function onPlayTime() {
    window.location.href = 'ytplayer://onPlayTime?data=' + player.getCurrentTime();
  }

  function startTimeTicker() {
    if (timeTicker) { return; }
    timeTicker = setInterval(onPlayTime, 500);
  }

  function stopTimeTicker() {
    if (timeTicker) {
      clearInterval(timeTicker);
      timeTicker = null;
    }
  }

  window.onresize = function() {
    if (player) {
      player.setSize(window.innerWidth, window.innerHeight);
    }
  };
</script>
</body>
</html>
"#;

/// Interpolate the configuration JSON into the page skeleton.
pub fn render_player_page(config_json: &str) -> String {
    PLAYER_PAGE_TEMPLATE.replace(CONFIG_PLACEHOLDER, config_json)
}

// =============================================================================
// TESTS
// =============================================================================
