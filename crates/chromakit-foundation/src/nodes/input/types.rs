use chromakit_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Where the coordinates came from. Mouse and touch are handled the same
/// once a position has been extracted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Pointer event in client coordinates with consumption tracking.
///
/// A drag controller consumes the events it acts on so the host can skip
/// default handling (text selection, page scroll under a finger).
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub source: PointerSource,
    pub position: Point,
    /// Shared via Rc<Cell> so consumption can be tracked across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            source: PointerSource::Mouse,
            position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn mouse(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self::new(kind, Point::new(x, y))
    }

    /// Builds an event from the active touch list, using the first touch.
    ///
    /// Down and Move need a touch to take coordinates from and return `None`
    /// for an empty list. Up and Cancel carry no useful position, since the
    /// lifted finger is no longer in the list.
    pub fn from_touches(kind: PointerEventKind, touches: &[Point]) -> Option<Self> {
        let position = match (kind, touches.first()) {
            (_, Some(first)) => *first,
            (PointerEventKind::Up | PointerEventKind::Cancel, None) => Point::ZERO,
            _ => return None,
        };
        Some(Self {
            source: PointerSource::Touch,
            ..Self::new(kind, position)
        })
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Mark this event as consumed so the host skips its default action.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
