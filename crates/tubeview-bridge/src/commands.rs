//! Script-text serialization for player commands and queries.
//!
//! Every control or query operation on the bridge boils down to one line
//! of JavaScript invoking a method on the `player` object in the page's
//! global scope. The builders here produce that line; submitting it is
//! the controller's job.

use std::fmt::Write;

use crate::codes::PlaybackQuality;

// =============================================================================
// ARGUMENT RENDERING
// =============================================================================

/// A single already-validated argument in a player API invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptArg {
    /// Rendered single-quoted, with `\` and `'` escaped.
    Str(String),
    /// Rendered as decimal; whole values carry no fractional part.
    Num(f64),
    Int(i64),
    Bool(bool),
    /// Rendered as a bracketed list of single-quoted strings.
    StrList(Vec<String>),
}

impl ScriptArg {
    pub fn quality(quality: PlaybackQuality) -> Self {
        ScriptArg::Str(quality.as_wire().to_string())
    }

    fn render(&self, out: &mut String) {
        match self {
            ScriptArg::Str(s) => {
                out.push('\'');
                out.push_str(&escape_single_quoted(s));
                out.push('\'');
            }
            ScriptArg::Num(n) => {
                let _ = write!(out, "{n}");
            }
            ScriptArg::Int(i) => {
                let _ = write!(out, "{i}");
            }
            ScriptArg::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            ScriptArg::StrList(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push('\'');
                    out.push_str(&escape_single_quoted(item));
                    out.push('\'');
                }
                out.push(']');
            }
        }
    }
}

/// Escape for a JS single-quoted string literal — `\` and `'`.
fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Render one invocation of a method on the page's player object.
pub fn invoke(function: &str, args: &[ScriptArg]) -> String {
    let mut script = String::from("player.");
    script.push_str(function);
    script.push('(');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            script.push_str(", ");
        }
        arg.render(&mut script);
    }
    script.push_str(");");
    script
}

// =============================================================================
// CONTROL COMMANDS
// =============================================================================

pub fn play_video() -> String {
    invoke("playVideo", &[])
}

pub fn pause_video() -> String {
    invoke("pauseVideo", &[])
}

pub fn stop_video() -> String {
    invoke("stopVideo", &[])
}

pub fn seek_to(seconds: f64, allow_seek_ahead: bool) -> String {
    invoke(
        "seekTo",
        &[ScriptArg::Num(seconds), ScriptArg::Bool(allow_seek_ahead)],
    )
}

pub fn mute() -> String {
    invoke("mute", &[])
}

pub fn unmute() -> String {
    invoke("unMute", &[])
}

// -- Cue / load single videos --

pub fn cue_video_by_id(video_id: &str, start_seconds: f64, quality: PlaybackQuality) -> String {
    invoke(
        "cueVideoById",
        &[
            ScriptArg::Str(video_id.to_string()),
            ScriptArg::Num(start_seconds),
            ScriptArg::quality(quality),
        ],
    )
}

pub fn cue_video_by_id_range(
    video_id: &str,
    start_seconds: f64,
    end_seconds: f64,
    quality: PlaybackQuality,
) -> String {
    invoke(
        "cueVideoById",
        &[
            ScriptArg::Str(video_id.to_string()),
            ScriptArg::Num(start_seconds),
            ScriptArg::Num(end_seconds),
            ScriptArg::quality(quality),
        ],
    )
}

pub fn load_video_by_id(video_id: &str, start_seconds: f64, quality: PlaybackQuality) -> String {
    invoke(
        "loadVideoById",
        &[
            ScriptArg::Str(video_id.to_string()),
            ScriptArg::Num(start_seconds),
            ScriptArg::quality(quality),
        ],
    )
}

pub fn load_video_by_id_range(
    video_id: &str,
    start_seconds: f64,
    end_seconds: f64,
    quality: PlaybackQuality,
) -> String {
    invoke(
        "loadVideoById",
        &[
            ScriptArg::Str(video_id.to_string()),
            ScriptArg::Num(start_seconds),
            ScriptArg::Num(end_seconds),
            ScriptArg::quality(quality),
        ],
    )
}

pub fn cue_video_by_url(video_url: &str, start_seconds: f64, quality: PlaybackQuality) -> String {
    invoke(
        "cueVideoByUrl",
        &[
            ScriptArg::Str(video_url.to_string()),
            ScriptArg::Num(start_seconds),
            ScriptArg::quality(quality),
        ],
    )
}

pub fn cue_video_by_url_range(
    video_url: &str,
    start_seconds: f64,
    end_seconds: f64,
    quality: PlaybackQuality,
) -> String {
    invoke(
        "cueVideoByUrl",
        &[
            ScriptArg::Str(video_url.to_string()),
            ScriptArg::Num(start_seconds),
            ScriptArg::Num(end_seconds),
            ScriptArg::quality(quality),
        ],
    )
}

pub fn load_video_by_url(video_url: &str, start_seconds: f64, quality: PlaybackQuality) -> String {
    invoke(
        "loadVideoByUrl",
        &[
            ScriptArg::Str(video_url.to_string()),
            ScriptArg::Num(start_seconds),
            ScriptArg::quality(quality),
        ],
    )
}

pub fn load_video_by_url_range(
    video_url: &str,
    start_seconds: f64,
    end_seconds: f64,
    quality: PlaybackQuality,
) -> String {
    invoke(
        "loadVideoByUrl",
        &[
            ScriptArg::Str(video_url.to_string()),
            ScriptArg::Num(start_seconds),
            ScriptArg::Num(end_seconds),
            ScriptArg::quality(quality),
        ],
    )
}

// -- Playlists --

pub fn cue_playlist_by_id(
    playlist_id: &str,
    index: u32,
    start_seconds: f64,
    quality: PlaybackQuality,
) -> String {
    invoke(
        "cuePlaylist",
        &[
            ScriptArg::Str(playlist_id.to_string()),
            ScriptArg::Int(index as i64),
            ScriptArg::Num(start_seconds),
            ScriptArg::quality(quality),
        ],
    )
}

pub fn cue_playlist_videos(
    video_ids: &[String],
    index: u32,
    start_seconds: f64,
    quality: PlaybackQuality,
) -> String {
    invoke(
        "cuePlaylist",
        &[
            ScriptArg::StrList(video_ids.to_vec()),
            ScriptArg::Int(index as i64),
            ScriptArg::Num(start_seconds),
            ScriptArg::quality(quality),
        ],
    )
}

pub fn load_playlist_by_id(
    playlist_id: &str,
    index: u32,
    start_seconds: f64,
    quality: PlaybackQuality,
) -> String {
    invoke(
        "loadPlaylist",
        &[
            ScriptArg::Str(playlist_id.to_string()),
            ScriptArg::Int(index as i64),
            ScriptArg::Num(start_seconds),
            ScriptArg::quality(quality),
        ],
    )
}

pub fn load_playlist_videos(
    video_ids: &[String],
    index: u32,
    start_seconds: f64,
    quality: PlaybackQuality,
) -> String {
    invoke(
        "loadPlaylist",
        &[
            ScriptArg::StrList(video_ids.to_vec()),
            ScriptArg::Int(index as i64),
            ScriptArg::Num(start_seconds),
            ScriptArg::quality(quality),
        ],
    )
}

pub fn play_next_video() -> String {
    invoke("nextVideo", &[])
}

pub fn play_previous_video() -> String {
    invoke("previousVideo", &[])
}

pub fn play_video_at(index: u32) -> String {
    invoke("playVideoAt", &[ScriptArg::Int(index as i64)])
}

pub fn set_loop(loop_playlists: bool) -> String {
    invoke("setLoop", &[ScriptArg::Bool(loop_playlists)])
}

pub fn set_shuffle(shuffle: bool) -> String {
    invoke("setShuffle", &[ScriptArg::Bool(shuffle)])
}

pub fn set_playback_rate(rate: f64) -> String {
    invoke("setPlaybackRate", &[ScriptArg::Num(rate)])
}

// =============================================================================
// QUERY SCRIPTS
// =============================================================================

pub const GET_PLAYER_STATE: &str = "player.getPlayerState();";
pub const GET_PLAYBACK_QUALITY: &str = "player.getPlaybackQuality();";
pub const GET_AVAILABLE_QUALITY_LEVELS: &str = "player.getAvailableQualityLevels();";
pub const GET_PLAYBACK_RATE: &str = "player.getPlaybackRate();";
pub const GET_AVAILABLE_PLAYBACK_RATES: &str = "player.getAvailablePlaybackRates();";
pub const GET_CURRENT_TIME: &str = "player.getCurrentTime();";
pub const GET_DURATION: &str = "player.getDuration();";
pub const GET_VIDEO_LOADED_FRACTION: &str = "player.getVideoLoadedFraction();";
pub const GET_VIDEO_URL: &str = "player.getVideoUrl();";
pub const GET_VIDEO_EMBED_CODE: &str = "player.getVideoEmbedCode();";
pub const GET_PLAYLIST: &str = "player.getPlaylist();";
pub const GET_PLAYLIST_INDEX: &str = "player.getPlaylistIndex();";
pub const IS_MUTED: &str = "player.isMuted();";

// =============================================================================
// TESTS
// =============================================================================
