//! Bridge controller.
//!
//! `PlayerBridge` owns the embedded surface session, serializes outbound
//! commands, routes inbound pseudo-navigation callbacks, and keeps the
//! transient loading overlay and the origin-validation policy honest.

use serde_json::{Map, Value};
use tracing::{debug, warn};

mod control;
mod listener;
mod queries;
mod session;
mod surface;

pub use listener::{LoadingOverlay, PlayerListener};
pub use surface::{EmbeddedSurface, PlayerHost};

use crate::callback;
use crate::codes::PlayerError;
use crate::config::{PlayerConfiguration, DEFAULT_ORIGIN};
use crate::events::CallbackEvent;
use crate::navigation::{self, NavigationOutcome};
use crate::template;

use session::BridgeSession;

/// The host-side player bridge. One instance per embedded player view.
pub struct PlayerBridge {
    host: Box<dyn PlayerHost>,
    listener: Box<dyn PlayerListener>,
    session: Option<BridgeSession>,
}

impl PlayerBridge {
    pub fn new(host: Box<dyn PlayerHost>, listener: Box<dyn PlayerListener>) -> Self {
        Self {
            host,
            listener,
            session: None,
        }
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Load a single video, replacing whatever was loaded before.
    pub fn load_video_id(&mut self, video_id: &str, player_vars: Map<String, Value>) -> bool {
        self.load(PlayerConfiguration::for_video(video_id).with_player_vars(player_vars))
    }

    /// Load a playlist, replacing whatever was loaded before.
    pub fn load_playlist_id(&mut self, playlist_id: &str, player_vars: Map<String, Value>) -> bool {
        self.load(PlayerConfiguration::for_playlist(playlist_id).with_player_vars(player_vars))
    }

    /// Load a raw configuration. Returns `false` only when the
    /// configuration cannot be encoded or the surface cannot be set up;
    /// an encoding failure leaves no surface behind.
    pub fn load(&mut self, config: PlayerConfiguration) -> bool {
        let config = config.normalized();
        let origin = config.trusted_origin().to_string();

        // A new load always discards the previous surface.
        self.teardown();

        let config_json = match config.to_json() {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "player configuration rejected");
                return false;
            }
        };
        let html = template::render_player_page(&config_json);

        let background = self.listener.surface_background();
        let mut surface = match self.host.create_surface(background, &origin) {
            Ok(surface) => surface,
            Err(e) => {
                warn!(error = %e, "embedded surface creation failed");
                return false;
            }
        };
        if let Err(e) = surface.load_page(&html) {
            warn!(error = %e, "player page load failed");
            return false;
        }

        let overlay = self.listener.loading_overlay();
        debug!(origin = %origin, "player page submitted to embedded surface");
        self.session = Some(BridgeSession {
            surface,
            origin,
            overlay,
            suppress_next_state_change: false,
        });
        true
    }

    /// Whether a page is currently loaded.
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Discard the surface and the overlay. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.remove_overlay();
            debug!("embedded surface discarded");
        }
    }

    // -------------------------------------------------------------------------
    // Command submission
    // -------------------------------------------------------------------------

    /// Execute an already-serialized script against the live surface.
    /// `None` when no page is loaded or the engine fails.
    pub fn submit(&mut self, script: &str) -> Option<String> {
        let session = self.session.as_mut()?;
        match session.surface.evaluate(script) {
            Ok(result) => Some(result),
            Err(e) => {
                warn!(script, error = %e, "script evaluation failed");
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Callback intake
    // -------------------------------------------------------------------------

    /// Route one navigation request from the surface. Returns whether
    /// the surface should proceed with the navigation itself.
    pub fn on_navigation_attempt(&mut self, url: &str) -> bool {
        let origin = self
            .session
            .as_ref()
            .map(|s| s.origin.clone())
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());

        match navigation::classify(url, &origin) {
            NavigationOutcome::BridgeCallback => {
                if let Some(event) = callback::parse(url) {
                    self.dispatch(event);
                } else {
                    debug!(url, "unrecognized bridge callback ignored");
                }
                false
            }
            NavigationOutcome::SameOrigin | NavigationOutcome::EmbeddedPlayerAsset => true,
            NavigationOutcome::External => {
                debug!(url, "handing navigation to the external browser");
                self.host.open_external(url);
                false
            }
        }
    }

    /// Drain navigation requests the surface adapter queued because its
    /// hook could not call back into the controller synchronously. The
    /// embedding event loop calls this each tick.
    pub fn process_navigations(&mut self) {
        let pending = match self.session.as_mut() {
            Some(session) => session.surface.drain_navigation_requests(),
            None => return,
        };
        for url in pending {
            self.on_navigation_attempt(&url);
        }
    }

    /// The surface reported a page-level load failure. Overlay comes
    /// down; recovery is the caller's business.
    pub fn on_load_failure(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.remove_overlay();
        }
    }

    fn dispatch(&mut self, event: CallbackEvent) {
        match event {
            CallbackEvent::Ready => {
                if let Some(session) = self.session.as_mut() {
                    session.remove_overlay();
                }
                self.listener.on_ready();
            }
            CallbackEvent::StateChange(state) => {
                if let Some(session) = self.session.as_mut() {
                    if session.suppress_next_state_change {
                        session.suppress_next_state_change = false;
                        debug!(?state, "state change swallowed after invalid-parameter error");
                        return;
                    }
                }
                self.listener.on_state_change(state);
            }
            CallbackEvent::QualityChange(quality) => self.listener.on_quality_change(quality),
            CallbackEvent::Error(error) => {
                if error == PlayerError::InvalidParam {
                    if let Some(session) = self.session.as_mut() {
                        session.suppress_next_state_change = true;
                    }
                }
                self.listener.on_error(error);
            }
            CallbackEvent::PlayTime(seconds) => self.listener.on_play_time(seconds),
            CallbackEvent::IframeApiFailed => {
                warn!("external player library failed to load");
                if let Some(session) = self.session.as_mut() {
                    session.remove_overlay();
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
