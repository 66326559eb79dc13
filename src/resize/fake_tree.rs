//! In-memory layout tree shared by the resize unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::resize::axis::SizeAxis;
use crate::resize::controller::{Eligibility, ResizeController};
use crate::resize::cursor::CursorSurface;
use crate::resize::layout::{ComputedStyle, LayoutTree};

pub(crate) const EPS: f64 = 1e-9;

#[derive(Default)]
pub(crate) struct FakeNode {
    pub(crate) parent: Option<usize>,
    pub(crate) children: Vec<usize>,
    pub(crate) style: ComputedStyle,
    pub(crate) size: f64,
    pub(crate) grow: f64,
    pub(crate) is_handle: bool,
}

#[derive(Default)]
pub(crate) struct FakeDomInner {
    pub(crate) nodes: Vec<FakeNode>,
    pub(crate) has_body: bool,
    pub(crate) body_cursor: Option<String>,
    pub(crate) grow_writes: usize,
}

#[derive(Clone, Default)]
pub(crate) struct FakeDom {
    pub(crate) inner: Rc<RefCell<FakeDomInner>>,
}

pub(crate) struct FakeBody {
    inner: Rc<RefCell<FakeDomInner>>,
}

impl CursorSurface for FakeBody {
    fn set_cursor(&self, cursor: &str) {
        self.inner.borrow_mut().body_cursor = Some(cursor.to_owned());
    }

    fn clear_cursor(&self) {
        self.inner.borrow_mut().body_cursor = None;
    }
}

impl FakeDom {
    pub(crate) fn add(&self, parent: Option<usize>, node: FakeNode) -> usize {
        let mut inner = self.inner.borrow_mut();
        let id = inner.nodes.len();
        inner.nodes.push(FakeNode { parent, ..node });
        if let Some(p) = parent {
            inner.nodes[p].children.push(id);
        }
        id
    }

    pub(crate) fn container(&self, display: &str, direction: &str) -> usize {
        self.add(
            None,
            FakeNode {
                style: ComputedStyle {
                    display: display.to_owned(),
                    flex_direction: direction.to_owned(),
                    cursor: "auto".to_owned(),
                },
                ..FakeNode::default()
            },
        )
    }

    pub(crate) fn pane(&self, parent: usize, size: f64, grow: f64) -> usize {
        self.add(Some(parent), FakeNode { size, grow, ..FakeNode::default() })
    }

    pub(crate) fn handle(&self, parent: Option<usize>, cursor: &str) -> usize {
        self.add(
            parent,
            FakeNode {
                style: ComputedStyle {
                    display: "block".to_owned(),
                    flex_direction: "row".to_owned(),
                    cursor: cursor.to_owned(),
                },
                is_handle: true,
                ..FakeNode::default()
            },
        )
    }

    pub(crate) fn grow_of(&self, node: usize) -> f64 {
        self.inner.borrow().nodes[node].grow
    }

    pub(crate) fn body_cursor(&self) -> Option<String> {
        self.inner.borrow().body_cursor.clone()
    }

    pub(crate) fn grow_writes(&self) -> usize {
        self.inner.borrow().grow_writes
    }

    pub(crate) fn sibling_at(&self, node: usize, offset: isize) -> Option<usize> {
        let inner = self.inner.borrow();
        let parent = inner.nodes[node].parent?;
        let siblings = &inner.nodes[parent].children;
        let index = siblings.iter().position(|&n| n == node)?;
        let target = index.checked_add_signed(offset)?;
        siblings.get(target).copied()
    }
}

impl LayoutTree for FakeDom {
    type Node = usize;
    type Surface = FakeBody;

    fn parent(&self, node: &usize) -> Option<usize> {
        self.inner.borrow().nodes[*node].parent
    }

    fn previous_sibling(&self, node: &usize) -> Option<usize> {
        self.sibling_at(*node, -1)
    }

    fn next_sibling(&self, node: &usize) -> Option<usize> {
        self.sibling_at(*node, 1)
    }

    fn computed_style(&self, node: &usize) -> ComputedStyle {
        self.inner.borrow().nodes[*node].style.clone()
    }

    fn offset_size(&self, node: &usize, _axis: SizeAxis) -> f64 {
        self.inner.borrow().nodes[*node].size
    }

    fn grow(&self, node: &usize) -> f64 {
        self.inner.borrow().nodes[*node].grow
    }

    fn set_grow(&self, node: &usize, grow: f64) {
        let mut inner = self.inner.borrow_mut();
        inner.nodes[*node].grow = grow;
        inner.grow_writes += 1;
    }

    fn cursor_surface(&self) -> Option<FakeBody> {
        let has_body = self.inner.borrow().has_body;
        has_body.then(|| FakeBody { inner: Rc::clone(&self.inner) })
    }
}

pub(crate) struct Fixture {
    pub(crate) dom: FakeDom,
    pub(crate) handle: usize,
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

/// `[prev(40, grow 3)] [handle] [next(60, grow 7)]` inside a flex container.
pub(crate) fn fixture(display: &str, direction: &str) -> Fixture {
    let dom = FakeDom::default();
    dom.inner.borrow_mut().has_body = true;
    let container = dom.container(display, direction);
    let prev = dom.pane(container, 40.0, 3.0);
    let handle = dom.handle(Some(container), "col-resize");
    let next = dom.pane(container, 60.0, 7.0);
    Fixture { dom, handle, prev, next }
}

pub(crate) fn accept_all() -> Option<Eligibility<usize>> {
    Some(Box::new(|_| true))
}

/// Controller that only accepts nodes built with [`FakeDom::handle`].
pub(crate) fn controller(fx: &Fixture) -> ResizeController<FakeDom> {
    let tree = fx.dom.clone();
    ResizeController::new(
        fx.dom.clone(),
        Some(Box::new(move |node: &usize| tree.inner.borrow().nodes[*node].is_handle)),
    )
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < EPS, "expected {expected}, got {actual}");
}
