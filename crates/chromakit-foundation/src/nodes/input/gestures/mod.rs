pub mod drag;

pub use drag::{DragAxis, DragState, PointerDragController};
