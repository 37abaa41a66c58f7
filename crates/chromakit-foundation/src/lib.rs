//! Pointer input and drag gestures for Chromakit
//!
//! Hosts translate mouse and touch events into [`PointerEvent`]s, route
//! pointer-down to the region under the pointer and broadcast everything to
//! the document-wide [`PointerScope`].

pub mod nodes;

pub use nodes::input::*;
