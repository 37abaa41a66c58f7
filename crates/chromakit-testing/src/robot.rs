//! Robot testing framework for end-to-end shell testing
//!
//! This module provides a robot-style testing API that allows developers to:
//! - Build a shell with a recording clipboard
//! - Perform pointer interactions (clicks, moves, drags) with mouse or touch
//! - Inspect the resulting picker and toast state
//!
//! # Example
//!
//! ```
//! use chromakit_testing::robot::DragRobot;
//! use chromakit_ui_graphics::Rect;
//!
//! let mut robot = DragRobot::with_defaults();
//! robot
//!     .shell()
//!     .picker()
//!     .set_regions(Rect::new(0.0, 0.0, 100.0, 100.0), Rect::new(0.0, 110.0, 360.0, 10.0));
//!
//! robot.drag(50.0, 50.0, 0.0, 0.0);
//! assert_eq!(robot.shell().picker().hex(), "#FFFFFF");
//! ```

use crate::fakes::RecordingClipboard;
use chromakit_app_shell::{AppShell, Catalog, ColorSampler, ShellConfig};
use chromakit_foundation::{PointerEvent, PointerEventKind};
use chromakit_ui_graphics::Point;

/// Number of intermediate moves a drag is split into.
const DRAG_STEPS: usize = 10;

/// Programmatic pointer control over an [`AppShell`].
pub struct DragRobot {
    shell: AppShell,
    clipboard: RecordingClipboard,
    cursor: Point,
}

impl DragRobot {
    pub fn new(config: ShellConfig, catalog: Catalog) -> Self {
        let clipboard = RecordingClipboard::new();
        let shell = AppShell::new(config, catalog).with_clipboard(clipboard.clone());
        Self {
            shell,
            clipboard,
            cursor: Point::ZERO,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ShellConfig::default(), Catalog::builtin())
    }

    pub fn with_sampler(self, sampler: impl ColorSampler + 'static) -> Self {
        Self {
            shell: self.shell.with_sampler(sampler),
            ..self
        }
    }

    pub fn shell(&self) -> &AppShell {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut AppShell {
        &mut self.shell
    }

    /// Handle on everything the shell copied.
    pub fn clipboard(&self) -> &RecordingClipboard {
        &self.clipboard
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Move the mouse cursor to the given coordinates.
    ///
    /// Returns true if a drag consumed the move.
    pub fn mouse_move(&mut self, x: f32, y: f32) -> bool {
        self.cursor = Point::new(x, y);
        self.send(PointerEvent::mouse(PointerEventKind::Move, x, y))
    }

    /// Press the mouse button at the current cursor.
    pub fn mouse_down(&mut self) -> bool {
        self.send(PointerEvent::mouse(
            PointerEventKind::Down,
            self.cursor.x,
            self.cursor.y,
        ))
    }

    /// Release the mouse button at the current cursor.
    pub fn mouse_up(&mut self) -> bool {
        self.send(PointerEvent::mouse(
            PointerEventKind::Up,
            self.cursor.x,
            self.cursor.y,
        ))
    }

    /// The host took the pointer away mid-gesture.
    pub fn cancel(&mut self) -> bool {
        self.send(PointerEvent::mouse(
            PointerEventKind::Cancel,
            self.cursor.x,
            self.cursor.y,
        ))
    }

    /// Perform a click at the given coordinates.
    ///
    /// Returns true if the press landed on a drag region.
    pub fn click_at(&mut self, x: f32, y: f32) -> bool {
        self.cursor = Point::new(x, y);
        let hit = self.mouse_down();
        self.mouse_up();
        hit
    }

    /// Perform a drag from one point to another.
    ///
    /// This simulates a pointer down, a series of moves and an up.
    pub fn drag(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) {
        self.cursor = Point::new(from_x, from_y);
        self.mouse_down();
        for (x, y) in path(from_x, from_y, to_x, to_y) {
            self.mouse_move(x, y);
        }
        self.mouse_up();
    }

    /// Same as [`DragRobot::drag`] with a single finger. The gesture ends
    /// with an empty touch list, as touchend reports it.
    pub fn touch_drag(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) {
        let mut touch = |kind, touches: &[Point]| {
            if let Some(event) = PointerEvent::from_touches(kind, touches) {
                if let Some(first) = touches.first() {
                    self.cursor = *first;
                }
                self.send(event);
            }
        };
        touch(PointerEventKind::Down, &[Point::new(from_x, from_y)]);
        for (x, y) in path(from_x, from_y, to_x, to_y) {
            touch(PointerEventKind::Move, &[Point::new(x, y)]);
        }
        touch(PointerEventKind::Up, &[]);
    }

    fn send(&mut self, event: PointerEvent) -> bool {
        self.shell.pointer_event(&event)
    }
}

fn path(from_x: f32, from_y: f32, to_x: f32, to_y: f32) -> impl Iterator<Item = (f32, f32)> {
    (1..=DRAG_STEPS).map(move |i| {
        let t = i as f32 / DRAG_STEPS as f32;
        (from_x + (to_x - from_x) * t, from_y + (to_y - from_y) * t)
    })
}
