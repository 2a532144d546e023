use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RevealError {
    #[error("no window available")]
    NoWindow,

    #[error("failed to register {0}")]
    ListenerRegistration(String),

    #[error("failed to load asset: {0}")]
    AssetLoad(String),

    #[error("failed to decode asset: {0}")]
    AssetDecode(String),

    #[error("invalid reveal config: {0}")]
    InvalidConfig(String),
}

impl RevealError {
    /// Wraps a JS exception raised while registering `what`.
    pub fn registration(what: &str, err: JsValue) -> Self {
        RevealError::ListenerRegistration(format!("{}: {:?}", what, err))
    }
}
