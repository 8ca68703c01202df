pub mod errors;
pub mod types;

pub use errors::BridgeError;
pub use types::Color;

pub type Result<T> = std::result::Result<T, BridgeError>;
