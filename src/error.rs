// Errors raised while wiring the effect into its host page. The particle
// math itself can't fail; only registering callbacks with the host can.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The host refused to schedule the per-frame callback.
    FrameScheduling(String),
    /// The host refused to register the viewport resize listener.
    ResizeListener(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FrameScheduling(msg) => write!(f, "Failed to schedule animation frame: {}", msg),
            Error::ResizeListener(msg) => write!(f, "Failed to register resize listener: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for JsValue {
    fn from(err: Error) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

// Best effort description of a thrown JS value
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
