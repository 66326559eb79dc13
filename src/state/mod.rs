//! Reactive state provided through Leptos context.

pub mod ui;
pub mod tools;
