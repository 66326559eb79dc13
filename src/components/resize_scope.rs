//! Drag-resize container and handle components.
//!
//! `ResizeScope` wires a [`crate::resize::web`] controller to its root element
//! once mounted; any descendant [`Resizer`] then drags the flex siblings on
//! either side of it.

use leptos::prelude::*;

use crate::consts::{RESIZER_CLASS, RESIZER_HORIZONTAL_CLASS, RESIZER_VERTICAL_CLASS};
#[cfg(feature = "csr")]
use crate::resize::controller::Eligibility;

/// Container whose `.lv-resizer` descendants resize their neighbouring panes.
#[component]
pub fn ResizeScope(
    children: Children,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let scope_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        let attached = StoredValue::new(false);
        Effect::new(move || {
            let Some(div) = scope_ref.get() else {
                return;
            };
            if attached.get_value() {
                return;
            }
            attached.set_value(true);

            let is_handle: Eligibility<web_sys::Element> =
                Box::new(|el: &web_sys::Element| el.class_list().contains(RESIZER_CLASS));
            if let Err(err) = crate::resize::web::attach(&div, Some(is_handle)) {
                leptos::logging::error!("resize scope not attached: {err}");
            }
        });
    }

    view! {
        <div class=format!("lv-resize-scope {class}") node_ref=scope_ref>
            {children()}
        </div>
    }
}

/// Drag handle placed between two flex panes.
///
/// `vertical` selects the stacked-pane styling; the drag axis itself always
/// follows the parent's `flex-direction`.
#[component]
pub fn Resizer(#[prop(optional)] vertical: bool) -> impl IntoView {
    let modifier = if vertical { RESIZER_VERTICAL_CLASS } else { RESIZER_HORIZONTAL_CLASS };
    view! { <div class=format!("{RESIZER_CLASS} {modifier}") role="separator"></div> }
}
