//! Control operations: one method per player command, each rendered by
//! the command serializer and pushed through `submit`. Results are
//! discarded; commands have no meaningful return value.

use crate::codes::PlaybackQuality;
use crate::commands;

use super::PlayerBridge;

impl PlayerBridge {
    pub fn play_video(&mut self) {
        self.submit(&commands::play_video());
    }

    pub fn pause_video(&mut self) {
        self.submit(&commands::pause_video());
    }

    pub fn stop_video(&mut self) {
        self.submit(&commands::stop_video());
    }

    pub fn seek_to(&mut self, seconds: f64, allow_seek_ahead: bool) {
        self.submit(&commands::seek_to(seconds, allow_seek_ahead));
    }

    pub fn mute(&mut self) {
        self.submit(&commands::mute());
    }

    pub fn unmute(&mut self) {
        self.submit(&commands::unmute());
    }

    // -- Cue / load single videos --

    pub fn cue_video_by_id(&mut self, video_id: &str, start_seconds: f64, quality: PlaybackQuality) {
        self.submit(&commands::cue_video_by_id(video_id, start_seconds, quality));
    }

    pub fn cue_video_by_id_range(
        &mut self,
        video_id: &str,
        start_seconds: f64,
        end_seconds: f64,
        quality: PlaybackQuality,
    ) {
        self.submit(&commands::cue_video_by_id_range(
            video_id,
            start_seconds,
            end_seconds,
            quality,
        ));
    }

    pub fn load_video_by_id(
        &mut self,
        video_id: &str,
        start_seconds: f64,
        quality: PlaybackQuality,
    ) {
        self.submit(&commands::load_video_by_id(video_id, start_seconds, quality));
    }

    pub fn load_video_by_id_range(
        &mut self,
        video_id: &str,
        start_seconds: f64,
        end_seconds: f64,
        quality: PlaybackQuality,
    ) {
        self.submit(&commands::load_video_by_id_range(
            video_id,
            start_seconds,
            end_seconds,
            quality,
        ));
    }

    pub fn cue_video_by_url(
        &mut self,
        video_url: &str,
        start_seconds: f64,
        quality: PlaybackQuality,
    ) {
        self.submit(&commands::cue_video_by_url(video_url, start_seconds, quality));
    }

    pub fn cue_video_by_url_range(
        &mut self,
        video_url: &str,
        start_seconds: f64,
        end_seconds: f64,
        quality: PlaybackQuality,
    ) {
        self.submit(&commands::cue_video_by_url_range(
            video_url,
            start_seconds,
            end_seconds,
            quality,
        ));
    }

    pub fn load_video_by_url(
        &mut self,
        video_url: &str,
        start_seconds: f64,
        quality: PlaybackQuality,
    ) {
        self.submit(&commands::load_video_by_url(video_url, start_seconds, quality));
    }

    pub fn load_video_by_url_range(
        &mut self,
        video_url: &str,
        start_seconds: f64,
        end_seconds: f64,
        quality: PlaybackQuality,
    ) {
        self.submit(&commands::load_video_by_url_range(
            video_url,
            start_seconds,
            end_seconds,
            quality,
        ));
    }

    // -- Playlists --

    pub fn cue_playlist_by_id(
        &mut self,
        playlist_id: &str,
        index: u32,
        start_seconds: f64,
        quality: PlaybackQuality,
    ) {
        self.submit(&commands::cue_playlist_by_id(
            playlist_id,
            index,
            start_seconds,
            quality,
        ));
    }

    pub fn cue_playlist_videos(
        &mut self,
        video_ids: &[String],
        index: u32,
        start_seconds: f64,
        quality: PlaybackQuality,
    ) {
        self.submit(&commands::cue_playlist_videos(
            video_ids,
            index,
            start_seconds,
            quality,
        ));
    }

    pub fn load_playlist_by_id(
        &mut self,
        playlist_id: &str,
        index: u32,
        start_seconds: f64,
        quality: PlaybackQuality,
    ) {
        self.submit(&commands::load_playlist_by_id(
            playlist_id,
            index,
            start_seconds,
            quality,
        ));
    }

    pub fn load_playlist_videos(
        &mut self,
        video_ids: &[String],
        index: u32,
        start_seconds: f64,
        quality: PlaybackQuality,
    ) {
        self.submit(&commands::load_playlist_videos(
            video_ids,
            index,
            start_seconds,
            quality,
        ));
    }

    pub fn play_next_video(&mut self) {
        self.submit(&commands::play_next_video());
    }

    pub fn play_previous_video(&mut self) {
        self.submit(&commands::play_previous_video());
    }

    pub fn play_video_at(&mut self, index: u32) {
        self.submit(&commands::play_video_at(index));
    }

    pub fn set_loop(&mut self, loop_playlists: bool) {
        self.submit(&commands::set_loop(loop_playlists));
    }

    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.submit(&commands::set_shuffle(shuffle));
    }

    pub fn set_playback_rate(&mut self, rate: f64) {
        self.submit(&commands::set_playback_rate(rate));
    }
}

// =============================================================================
// TESTS
// =============================================================================
