use super::listener::LoadingOverlay;
use super::surface::EmbeddedSurface;

/// State tied to one loaded page. Recreated wholesale on every load;
/// never mutated concurrently (the bridge runs on the embedder's UI
/// thread).
pub(crate) struct BridgeSession {
    pub surface: Box<dyn EmbeddedSurface>,
    pub origin: String,
    pub overlay: Option<Box<dyn LoadingOverlay>>,
    /// One-shot filter armed by an invalid-parameter error; the player
    /// emits one spurious state change right after it.
    pub suppress_next_state_change: bool,
}

impl BridgeSession {
    pub fn remove_overlay(&mut self) {
        if let Some(mut overlay) = self.overlay.take() {
            overlay.remove();
        }
    }
}
