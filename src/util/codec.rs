//! Base64 encode/decode helpers behind the Base64 tool panes.
//!
//! Input can be taken as UTF-8 text or as hex digits (spaces and tabs are
//! ignored). Decoded bytes can be shown as text, pretty-printed JSON, a plain
//! hex listing, or a classic hex dump.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};

use crate::error::UiError;

/// How a text field's content is turned into bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Utf8,
    Hex,
}

impl InputKind {
    pub const ALL: [Self; 2] = [Self::Utf8, Self::Hex];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Hex => "Hex",
        }
    }

    /// Stable suffix for element ids.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Hex => "hex",
        }
    }

    /// Bytes for `input` under this interpretation.
    pub fn to_bytes(self, input: &str) -> Result<Vec<u8>, UiError> {
        match self {
            Self::Utf8 => Ok(input.as_bytes().to_vec()),
            Self::Hex => {
                let digits = input.replace([' ', '\t'], "");
                hex::decode(digits).map_err(|err| UiError::InvalidHex(err.to_string()))
            }
        }
    }
}

/// Base64 alphabet for encoded output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EncodeOutput {
    #[default]
    Standard,
    UrlSafe,
}

impl EncodeOutput {
    pub const ALL: [Self; 2] = [Self::Standard, Self::UrlSafe];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::UrlSafe => "URL",
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::UrlSafe => "urlsafe",
        }
    }
}

/// Presentation of decoded bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodeOutput {
    #[default]
    Utf8,
    Json,
    SimpleHex,
    PrettyHex,
}

impl DecodeOutput {
    pub const ALL: [Self; 4] = [Self::Utf8, Self::Json, Self::SimpleHex, Self::PrettyHex];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Json => "JSON",
            Self::SimpleHex => "Hex",
            Self::PrettyHex => "Pretty Hex",
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Json => "json",
            Self::SimpleHex => "simplehex",
            Self::PrettyHex => "prettyhex",
        }
    }

    /// Render `bytes` in this presentation.
    #[must_use]
    pub fn render(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Json => pretty_json(&String::from_utf8_lossy(bytes)),
            Self::SimpleHex => {
                let mut cfg = pretty_hex::HexConfig::simple();
                cfg.group = 0;
                pretty_hex::config_hex(&bytes, cfg)
            }
            Self::PrettyHex => pretty_hex::pretty_hex(&bytes),
        }
    }
}

/// Pretty-print `text` as JSON, or return it unchanged when it isn't JSON.
#[must_use]
pub fn pretty_json(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| text.to_owned())
}

/// Base64-encode `input`, read as `input_kind`, in the `output` alphabet.
pub fn encode(input: &str, input_kind: InputKind, output: EncodeOutput) -> Result<String, UiError> {
    let bytes = input_kind.to_bytes(input)?;
    Ok(match output {
        EncodeOutput::Standard => STANDARD.encode(bytes),
        EncodeOutput::UrlSafe => URL_SAFE.encode(bytes),
    })
}

/// Decode standard (padded) Base64 and render it as `output`.
pub fn decode(input: &str, output: DecodeOutput) -> Result<String, UiError> {
    let bytes = STANDARD
        .decode(input)
        .map_err(|err| UiError::InvalidBase64(err.to_string()))?;
    Ok(output.render(&bytes))
}
