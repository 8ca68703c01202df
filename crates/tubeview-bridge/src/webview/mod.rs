//! `wry` adapter: the production `EmbeddedSurface` / `PlayerHost`.
//!
//! The webview is built as a child of the embedder's window, one fresh
//! instance per page load. wry's navigation hook must answer
//! synchronously and cannot reach back into the controller, so the
//! closure decides allow/block with the pure policy and queues
//! everything else for `PlayerBridge::process_navigations` to route on
//! the next event-loop tick.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::raw_window_handle::HasWindowHandle;
use wry::{WebView, WebViewBuilder};

use tubeview_common::{BridgeError, Color, Result};

use crate::navigation::{self, NavigationOutcome};
use crate::player::{EmbeddedSurface, PlayerHost};

/// Whether the surface may perform a navigation without consulting the
/// controller. `about:blank` is the in-memory page load itself.
fn proceeds_in_surface(url: &str, origin: &str) -> bool {
    if url == "about:blank" {
        return true;
    }
    matches!(
        navigation::classify(url, origin),
        NavigationOutcome::SameOrigin | NavigationOutcome::EmbeddedPlayerAsset
    )
}

/// `PlayerHost` over a window of the embedding application.
pub struct WryHost<W: HasWindowHandle> {
    window: W,
    bounds: wry::Rect,
    launcher: Box<dyn FnMut(&str)>,
}

impl<W: HasWindowHandle> WryHost<W> {
    /// `launcher` opens a URL in the platform's external browser.
    pub fn new(window: W, bounds: wry::Rect, launcher: Box<dyn FnMut(&str)>) -> Self {
        Self {
            window,
            bounds,
            launcher,
        }
    }

    /// Reposition subsequent surfaces within the parent window.
    pub fn set_bounds(&mut self, bounds: wry::Rect) {
        self.bounds = bounds;
    }
}

impl<W: HasWindowHandle> PlayerHost for WryHost<W> {
    fn create_surface(
        &mut self,
        background: Color,
        origin: &str,
    ) -> Result<Box<dyn EmbeddedSurface>> {
        let pending: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&pending);
        let trusted_origin = origin.to_string();

        let webview = WebViewBuilder::new()
            .with_bounds(self.bounds)
            .with_background_color(background.to_rgba_tuple())
            .with_autoplay(true)
            .with_focused(false)
            .with_navigation_handler(move |url| {
                if proceeds_in_surface(&url, &trusted_origin) {
                    return true;
                }
                // Bridge callbacks and external handoffs are routed by
                // the controller on the next drain.
                if let Ok(mut queue) = sink.lock() {
                    queue.push(url);
                }
                false
            })
            .build_as_child(&self.window)
            .map_err(|e| BridgeError::Surface(e.to_string()))?;

        debug!(origin = %origin, "embedded surface created");
        Ok(Box::new(WrySurface { webview, pending }))
    }

    fn open_external(&mut self, url: &str) {
        (self.launcher)(url);
    }
}

/// One live webview hosting the player page.
pub struct WrySurface {
    webview: WebView,
    pending: Arc<Mutex<Vec<String>>>,
}

impl EmbeddedSurface for WrySurface {
    fn load_page(&mut self, html: &str) -> Result<()> {
        self.webview
            .load_html(html)
            .map_err(|e| BridgeError::Surface(e.to_string()))
    }

    fn evaluate(&mut self, script: &str) -> Result<String> {
        let (tx, rx) = mpsc::channel();
        self.webview
            .evaluate_script_with_callback(script, move |result| {
                if tx.send(result).is_err() {
                    warn!("script result arrived after the caller gave up");
                }
            })
            .map_err(|e| BridgeError::Evaluation(e.to_string()))?;

        // Single-flight façade: block until the engine reports the one
        // pending result. No timeout.
        rx.recv()
            .map_err(|_| BridgeError::Evaluation("engine dropped the result channel".into()))
    }

    fn drain_navigation_requests(&mut self) -> Vec<String> {
        match self.pending.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(_) => Vec::new(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
