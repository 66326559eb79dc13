//! Crate-wide error type.

/// Errors surfaced by the browser glue and the tool panes.
///
/// Gesture handlers never return these to their caller; they are logged at the
/// point of failure. Registration helpers such as
/// [`crate::resize::web::attach`] return them when the browser refuses a call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// A container reported a `flex-direction` the resizer has no mapping for.
    #[error("internal error: unimplemented resizer for {0}")]
    UnknownDirection(String),
    /// A DOM call failed or a required browser object was missing.
    #[error("dom error: {0}")]
    Dom(String),
    /// The receiving half of a forwarding channel was dropped.
    #[error("channel closed")]
    ChannelClosed,
    /// Tool input was expected to be hex digits.
    #[error("invalid hex input: {0}")]
    InvalidHex(String),
    /// Tool input was expected to be standard Base64.
    #[error("invalid base64 input: {0}")]
    InvalidBase64(String),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
