#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("configuration encoding error: {0}")]
    ConfigEncoding(String),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("script evaluation error: {0}")]
    Evaluation(String),
}
