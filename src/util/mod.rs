//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (document attributes, storage,
//! global key listeners) from component logic. Each keeps its pure part
//! target-independent so it can be unit tested natively.

pub mod codec;
pub mod hash;
pub mod keyboard;
pub mod predicates;
pub mod theme;
pub mod zoom;
