//! Pointer drag to normalized position.
//!
//! A [`PointerDragController`] tracks one rectangular region (a saturation /
//! value square, or a horizontal slider track). A pointer-down inside the
//! region starts a drag; from then on every move anywhere in the
//! [`PointerScope`] is mapped into the region's unit square and reported
//! synchronously until the pointer goes up or the gesture is cancelled.
//!
//! The document-scope listener exists only for the duration of a drag. It
//! is attached on pointer-down and released on up, cancel,
//! [`PointerDragController::release`] or when the controller is dropped.
//! Only the pointer that started the drag moves or ends it; other fingers
//! are ignored until it lifts.
//!
//! A controller starts with an empty region and takes no presses until
//! [`PointerDragController::set_bounds`] gives it one with positive area.

use crate::nodes::input::dispatcher::{PointerScope, Subscription};
use crate::nodes::input::types::{PointerEvent, PointerEventKind, PointerId};
use chromakit_ui_graphics::{Point, Rect};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragAxis {
    /// Both axes; reports `(x, y)` in `0.0..=1.0`.
    Plane,
    /// Horizontal only; reports `(x, 0.0)`.
    Horizontal,
}

impl DragAxis {
    fn normalize(self, bounds: Rect, position: Point) -> Point {
        let x = bounds.fraction_x(position.x);
        match self {
            DragAxis::Plane => Point::new(x, bounds.fraction_y(position.y)),
            DragAxis::Horizontal => Point::new(x, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    /// `bounds` is the region as it was when the drag started; `pointer`
    /// is the id of the pointer that started it.
    Dragging { bounds: Rect, pointer: PointerId },
}

struct DragInner {
    axis: DragAxis,
    bounds: Rect,
    state: DragState,
    subscription: Option<Subscription>,
}

impl DragInner {
    /// Returns to idle, handing back the listener guard so the caller can
    /// drop it outside this borrow.
    fn end(&mut self) -> Option<Subscription> {
        self.state = DragState::Idle;
        self.subscription.take()
    }
}

type ChangeCallback = Rc<RefCell<dyn FnMut(Point)>>;

pub struct PointerDragController {
    inner: Rc<RefCell<DragInner>>,
    on_change: ChangeCallback,
    scope: PointerScope,
}

impl PointerDragController {
    pub fn new<F>(axis: DragAxis, scope: &PointerScope, on_change: F) -> Self
    where
        F: FnMut(Point) + 'static,
    {
        let on_change: ChangeCallback = Rc::new(RefCell::new(on_change));
        Self {
            inner: Rc::new(RefCell::new(DragInner {
                axis,
                bounds: Rect::default(),
                state: DragState::Idle,
                subscription: None,
            })),
            on_change,
            scope: scope.clone(),
        }
    }

    pub fn with_bounds(self, bounds: Rect) -> Self {
        self.set_bounds(bounds);
        self
    }

    /// Updates the tracked region. A drag in progress keeps the bounds it
    /// captured at pointer-down.
    pub fn set_bounds(&self, bounds: Rect) {
        self.inner.borrow_mut().bounds = bounds;
    }

    pub fn bounds(&self) -> Rect {
        self.inner.borrow().bounds
    }

    pub fn axis(&self) -> DragAxis {
        self.inner.borrow().axis
    }

    pub fn state(&self) -> DragState {
        self.inner.borrow().state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state(), DragState::Dragging { .. })
    }

    /// Region-level pointer-down handler.
    ///
    /// Starts a drag when `event` is a down inside the region and no drag is
    /// already running. The down position is reported as the first value.
    /// Returns whether the event started a drag.
    pub fn on_pointer_down(&self, event: &PointerEvent) -> bool {
        if event.kind != PointerEventKind::Down {
            return false;
        }

        let value = {
            let mut inner = self.inner.borrow_mut();
            if inner.state != DragState::Idle {
                return false;
            }
            let bounds = inner.bounds;
            if !bounds.contains(event.position.x, event.position.y) {
                return false;
            }
            inner.state = DragState::Dragging {
                bounds,
                pointer: event.id,
            };
            inner.axis.normalize(bounds, event.position)
        };
        event.consume();

        let subscription = self.scope.subscribe(document_listener(
            Rc::downgrade(&self.inner),
            Rc::clone(&self.on_change),
        ));
        self.inner.borrow_mut().subscription = Some(subscription);
        log::debug!("drag started at {:?}", event.position);

        emit(&self.on_change, value);
        true
    }

    /// Ends any drag in progress without reporting a value.
    pub fn release(&self) {
        let subscription = self.inner.borrow_mut().end();
        if subscription.is_some() {
            log::debug!("drag released");
        }
    }
}

impl Drop for PointerDragController {
    fn drop(&mut self) {
        self.release();
    }
}

fn emit(on_change: &ChangeCallback, value: Point) {
    match on_change.try_borrow_mut() {
        Ok(mut callback) => callback(value),
        Err(_) => log::warn!("drag callback re-entered, dropping value {value:?}"),
    }
}

/// The listener attached to the document while a drag runs.
///
/// Holds the controller state weakly so a dropped controller never keeps
/// its own listener alive.
fn document_listener(
    inner: Weak<RefCell<DragInner>>,
    on_change: ChangeCallback,
) -> impl FnMut(&PointerEvent) + 'static {
    move |event: &PointerEvent| {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        let bounds = match inner.borrow().state {
            DragState::Dragging { bounds, pointer } if pointer == event.id => bounds,
            _ => return,
        };
        match event.kind {
            PointerEventKind::Move => {
                let value = inner.borrow().axis.normalize(bounds, event.position);
                event.consume();
                emit(&on_change, value);
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                let subscription = inner.borrow_mut().end();
                drop(subscription);
                log::debug!("drag ended by {:?}", event.kind);
            }
            PointerEventKind::Down => {}
        }
    }
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
