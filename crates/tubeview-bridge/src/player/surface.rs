use tubeview_common::{Color, Result};

/// The in-process web rendering/script-execution context hosting the
/// player page. Implemented by the `wry` adapter in production and by
/// plain mocks in tests.
pub trait EmbeddedSurface {
    /// Load the rendered player page into the surface.
    fn load_page(&mut self, html: &str) -> Result<()>;

    /// Execute script in the page's engine and block until it returns
    /// its result as text. No timeout: a wedged engine wedges the caller.
    fn evaluate(&mut self, script: &str) -> Result<String>;

    /// Navigation requests the surface intercepted but could not route
    /// synchronously. Drained by `PlayerBridge::process_navigations`.
    fn drain_navigation_requests(&mut self) -> Vec<String> {
        Vec::new()
    }
}

/// Platform services the bridge needs from its embedder.
pub trait PlayerHost {
    /// Create a fresh surface for one page load. The previous surface,
    /// if any, has already been discarded.
    fn create_surface(&mut self, background: Color, origin: &str)
        -> Result<Box<dyn EmbeddedSurface>>;

    /// Open a URL in the platform's external browser.
    fn open_external(&mut self, url: &str);
}
