//! `web_sys` binding for [`ResizeController`].
//!
//! ARCHITECTURE
//! ============
//! [`attach`] installs one delegated `mousedown` listener on the container.
//! The `mousemove`/`mouseup` closures are created once per container as well,
//! but they are only registered on the window while a session is active:
//! [`GestureBinding`] asks [`WindowHost`] for a [`WindowListeners`] on session
//! start and drops it on `mouseup`, wherever the pointer is released.
//! Closures are never dropped while the browser may still call them.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, MouseEvent, Window};

use crate::consts::RESIZER_SELECTOR;
use crate::error::UiError;
use crate::resize::axis::SizeAxis;
use crate::resize::binding::{GestureBinding, ListenerHost};
use crate::resize::controller::{Eligibility, ResizeController};
use crate::resize::cursor::CursorSurface;
use crate::resize::layout::{ComputedStyle, LayoutTree, PointerSample};

type MouseHandler = Closure<dyn FnMut(MouseEvent)>;

/// The live document as a [`LayoutTree`].
pub struct DomTree {
    window: Window,
}

impl DomTree {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl LayoutTree for DomTree {
    type Node = Element;
    type Surface = BodyCursor;

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn previous_sibling(&self, node: &Element) -> Option<Element> {
        node.previous_element_sibling()
    }

    fn next_sibling(&self, node: &Element) -> Option<Element> {
        node.next_element_sibling()
    }

    fn computed_style(&self, node: &Element) -> ComputedStyle {
        let Ok(Some(declaration)) = self.window.get_computed_style(node) else {
            return ComputedStyle::default();
        };
        let read = |name: &str| declaration.get_property_value(name).unwrap_or_default();
        ComputedStyle {
            display: read("display"),
            flex_direction: read("flex-direction"),
            cursor: read("cursor"),
        }
    }

    fn offset_size(&self, node: &Element, axis: SizeAxis) -> f64 {
        node.dyn_ref::<HtmlElement>().map_or(0.0, |el| match axis {
            SizeAxis::Width => f64::from(el.offset_width()),
            SizeAxis::Height => f64::from(el.offset_height()),
        })
    }

    fn grow(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .and_then(|el| el.style().get_property_value("flex-grow").ok())
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .unwrap_or(0.0)
    }

    fn set_grow(&self, node: &Element, grow: f64) {
        let Some(el) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(err) = el.style().set_property("flex-grow", &grow.to_string()) {
            leptos::logging::warn!("set flex-grow failed: {err:?}");
        }
    }

    fn cursor_surface(&self) -> Option<BodyCursor> {
        self.window.document().and_then(|doc| doc.body()).map(BodyCursor)
    }
}

/// The document body as a cursor override target.
pub struct BodyCursor(HtmlElement);

impl CursorSurface for BodyCursor {
    fn set_cursor(&self, cursor: &str) {
        let _ = self.0.style().set_property("cursor", cursor);
    }

    fn clear_cursor(&self) {
        let _ = self.0.style().remove_property("cursor");
    }
}

/// Adds the window-level move/up listeners for a session.
pub struct WindowHost {
    window: Window,
    on_move: js_sys::Function,
    on_up: js_sys::Function,
}

impl ListenerHost for WindowHost {
    type Registration = WindowListeners;

    fn register(&self) -> Result<WindowListeners, UiError> {
        self.window.add_event_listener_with_callback("mousemove", &self.on_move)?;
        if let Err(err) = self.window.add_event_listener_with_callback("mouseup", &self.on_up) {
            let _ = self.window.remove_event_listener_with_callback("mousemove", &self.on_move);
            return Err(err.into());
        }
        Ok(WindowListeners {
            window: self.window.clone(),
            on_move: self.on_move.clone(),
            on_up: self.on_up.clone(),
        })
    }
}

/// Registered move/up listeners of one session. Removed on drop.
pub struct WindowListeners {
    window: Window,
    on_move: js_sys::Function,
    on_up: js_sys::Function,
}

impl Drop for WindowListeners {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback("mousemove", &self.on_move);
        let _ = self.window.remove_event_listener_with_callback("mouseup", &self.on_up);
    }
}

type DomBinding = GestureBinding<DomTree, WindowHost>;

fn page_point(ev: &MouseEvent) -> PointerSample {
    PointerSample::new(f64::from(ev.page_x()), f64::from(ev.page_y()))
}

fn as_function(handler: &MouseHandler) -> js_sys::Function {
    handler.as_ref().unchecked_ref::<js_sys::Function>().clone()
}

/// The resizer handle an event landed on, if it belongs to `container`.
fn resolve_handle(container: &Element, ev: &MouseEvent) -> Option<Element> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let handle = target.closest(RESIZER_SELECTOR).ok().flatten()?;
    container.contains(Some(&*handle)).then_some(handle)
}

/// Make every resizer handle inside `container` draggable.
///
/// `is_eligible` further restricts which handles may start a resize; `None`
/// accepts all of them. It is called with the resolved handle, so a press on
/// a child of the handle counts as a press on the handle. The listeners stay
/// installed for the lifetime of the page. Only a failed listener
/// registration is reported; gesture problems are logged and swallowed.
pub fn attach(container: &Element, is_eligible: Option<Eligibility<Element>>) -> Result<(), UiError> {
    let window = web_sys::window().ok_or_else(|| UiError::Dom("window unavailable".to_owned()))?;
    let controller = ResizeController::new(DomTree::new(window.clone()), is_eligible);

    let binding: Rc<RefCell<DomBinding>> = Rc::new_cyclic(|weak: &Weak<RefCell<DomBinding>>| {
        let on_move = {
            let weak = weak.clone();
            Closure::wrap(Box::new(move |ev: MouseEvent| {
                let Some(binding) = weak.upgrade() else {
                    return;
                };
                ev.prevent_default();
                binding.borrow_mut().pointer_move(page_point(&ev));
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let on_up = {
            let weak = weak.clone();
            Closure::wrap(Box::new(move |_ev: MouseEvent| {
                if let Some(binding) = weak.upgrade() {
                    binding.borrow_mut().pointer_up();
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        let host = WindowHost {
            window,
            on_move: as_function(&on_move),
            on_up: as_function(&on_up),
        };
        on_move.forget();
        on_up.forget();
        RefCell::new(GestureBinding::new(controller, host))
    });

    let scope = container.clone();
    let on_down = Closure::wrap(Box::new(move |ev: MouseEvent| {
        let Some(handle) = resolve_handle(&scope, &ev) else {
            return;
        };
        if binding.borrow_mut().pointer_down(&handle, page_point(&ev)) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    container.add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())?;
    on_down.forget();
    Ok(())
}
