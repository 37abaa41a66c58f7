//! Testing utilities and harness for Chromakit

pub mod fakes;
pub mod robot;
pub mod robot_assertions;

// Re-export testing utilities
pub use fakes::*;
pub use robot::*;
pub use robot_assertions::*;

pub mod prelude {
    pub use crate::fakes::{FixedSampler, RecordingClipboard};
    pub use crate::robot::DragRobot;
    pub use crate::robot_assertions::*;
}
