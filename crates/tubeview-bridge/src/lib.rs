//! Host-side bridge embedding a web-based video player in a native view.
//!
//! Translates between typed control/query calls and the player page's
//! JavaScript API:
//! - Outbound: commands serialized to script text and executed in the
//!   embedded web surface
//! - Inbound: pseudo-navigation callback URLs decoded into typed events
//!   for a listener
//! - Navigation policy deciding, per request, between same-origin,
//!   bridge callback, known player asset, and external-browser handoff

pub mod callback;
pub mod codes;
pub mod commands;
pub mod config;
pub mod events;
pub mod navigation;
pub mod player;
pub mod template;
pub mod webview;

pub use codes::{PlaybackQuality, PlayerError, PlayerState};
pub use config::PlayerConfiguration;
pub use events::CallbackEvent;
pub use navigation::NavigationOutcome;
pub use player::{EmbeddedSurface, LoadingOverlay, PlayerBridge, PlayerHost, PlayerListener};
pub use webview::{WryHost, WrySurface};
