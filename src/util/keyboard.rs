//! Document-level `keydown` forwarding.
//!
//! Key events are flattened into [`KeyPress`] records and pushed onto an
//! unbounded channel, so shortcut handling can run as an ordinary async loop
//! instead of inside a DOM callback. Field names serialize exactly like the
//! DOM `KeyboardEvent` properties they mirror.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

use serde::{Deserialize, Serialize};

#[cfg(feature = "csr")]
use crate::error::UiError;

/// A snapshot of one `keydown` event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyPress {
    pub alt_key: bool,
    /// Physical key code, e.g. `"KeyA"` or `"Equal"`.
    pub code: String,
    pub ctrl_key: bool,
    pub is_composing: bool,
    /// Produced character or named key, e.g. `"="` or `"Escape"`.
    pub key: String,
    pub location: u32,
    pub meta_key: bool,
    pub repeat: bool,
    pub shift_key: bool,
}

/// Host platform family, which decides the primary shortcut modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// macOS / iOS: shortcuts use Command.
    Apple,
    /// Everything else: shortcuts use Ctrl.
    Other,
}

impl Platform {
    /// Classify a navigator user-agent string.
    #[must_use]
    pub fn from_user_agent(user_agent: &str) -> Self {
        if ["Macintosh", "Mac OS", "iPhone", "iPad"]
            .iter()
            .any(|needle| user_agent.contains(needle))
        {
            Self::Apple
        } else {
            Self::Other
        }
    }

    /// Platform of the running program.
    pub fn detect() -> Self {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.navigator().user_agent().ok())
                .map_or(Self::Other, |ua| Self::from_user_agent(&ua))
        }
        #[cfg(not(feature = "csr"))]
        {
            if cfg!(target_os = "macos") { Self::Apple } else { Self::Other }
        }
    }
}

impl KeyPress {
    /// Whether the platform's primary shortcut modifier is held.
    #[must_use]
    pub fn ctrl_or_command(&self, platform: Platform) -> bool {
        match platform {
            Platform::Apple => self.meta_key,
            Platform::Other => self.ctrl_key,
        }
    }

    #[cfg(feature = "csr")]
    #[must_use]
    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            alt_key: ev.alt_key(),
            code: ev.code(),
            ctrl_key: ev.ctrl_key(),
            is_composing: ev.is_composing(),
            key: ev.key(),
            location: ev.location(),
            meta_key: ev.meta_key(),
            repeat: ev.repeat(),
            shift_key: ev.shift_key(),
        }
    }
}

/// Forward every document `keydown` to `tx` for the lifetime of the page.
///
/// Once the receiver is gone, events are dropped and a single warning is logged.
#[cfg(feature = "csr")]
pub fn forward_keydown(tx: futures::channel::mpsc::UnboundedSender<KeyPress>) -> Result<(), UiError> {
    use std::cell::Cell;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| UiError::Dom("document unavailable".to_owned()))?;

    let warned = Cell::new(false);
    let on_keydown = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
        if tx.unbounded_send(KeyPress::from_event(&ev)).is_err() && !warned.replace(true) {
            leptos::logging::warn!("{}; keydown events dropped", UiError::ChannelClosed);
        }
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

    document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();
    Ok(())
}
