pub mod dispatcher;
pub mod gestures;
pub mod types;

pub use dispatcher::{PointerScope, Subscription};
pub use gestures::{DragAxis, DragState, PointerDragController};
pub use types::{PointerEvent, PointerEventKind, PointerId, PointerSource};

pub mod prelude {
    pub use super::dispatcher::{PointerScope, Subscription};
    pub use super::gestures::{DragAxis, DragState, PointerDragController};
    pub use super::types::{PointerEvent, PointerEventKind, PointerId, PointerSource};
}
