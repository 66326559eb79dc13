//! Tool selection and per-tool form state.
//!
//! DESIGN
//! ======
//! Every tool keeps its own form so switching tools and back preserves what
//! was typed. Outputs are derived from the form on each read; nothing derived
//! is stored.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;

use crate::util::codec::{self, DecodeOutput, EncodeOutput, InputKind};
use crate::util::hash::{self, HashRow};

/// Tools offered in the selector pane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Base64Encode,
    Base64Decode,
    Hash,
}

impl Tool {
    pub const ALL: [Self; 3] = [Self::Base64Encode, Self::Base64Decode, Self::Hash];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Base64Encode => "Base64 Encode",
            Self::Base64Decode => "Base64 Decode",
            Self::Hash => "Hash",
        }
    }
}

/// Result shown under a tool's input: the rendered output and whether the
/// input could be read. Invalid input yields an empty output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub text: String,
    pub input_valid: bool,
}

impl From<Result<String, crate::error::UiError>> for ToolOutput {
    fn from(result: Result<String, crate::error::UiError>) -> Self {
        match result {
            Ok(text) => Self { text, input_valid: true },
            Err(_) => Self::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeForm {
    pub input: String,
    pub input_kind: InputKind,
    pub output_kind: EncodeOutput,
}

impl EncodeForm {
    #[must_use]
    pub fn output(&self) -> ToolOutput {
        codec::encode(&self.input, self.input_kind, self.output_kind).into()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeForm {
    pub input: String,
    pub output_kind: DecodeOutput,
}

impl DecodeForm {
    #[must_use]
    pub fn output(&self) -> ToolOutput {
        codec::decode(&self.input, self.output_kind).into()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HashForm {
    pub input: String,
    pub input_kind: InputKind,
}

impl HashForm {
    #[must_use]
    pub fn input_valid(&self) -> bool {
        self.input_kind.to_bytes(&self.input).is_ok()
    }

    #[must_use]
    pub fn rows(&self) -> Vec<HashRow> {
        let bytes = self.input_kind.to_bytes(&self.input);
        hash::hash_table(bytes.as_deref().ok())
    }
}

/// State behind the tool panes, provided as `RwSignal<ToolsState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToolsState {
    pub selected: Tool,
    pub encode: EncodeForm,
    pub decode: DecodeForm,
    pub hash: HashForm,
}
