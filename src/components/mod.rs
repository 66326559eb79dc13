//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the two-pane layout chrome and the tool panes, and
//! read/write shared state from Leptos context providers.

pub mod base64_tools;
pub mod hash_tool;
pub mod resize_scope;
pub mod status_bar;
pub mod tool_selector;
