//! Browser binding errors.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors attaching to the page.
#[derive(Debug, Error)]
pub enum WebError {
    /// No global `window` (not running in a browser page).
    #[error("no window")]
    NoWindow,

    /// Window without a document.
    #[error("no document")]
    NoDocument,

    /// Document without a body to host notices.
    #[error("no document body")]
    NoBody,

    /// Config JSON did not parse.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// A DOM call threw.
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
