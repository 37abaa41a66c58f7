//! Shell configuration.

use chromakit_ui_graphics::Color;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct ShellConfig {
    /// Members per tonal family.
    pub family_steps: usize,
    /// Swatches per palette row.
    pub palette_columns: usize,
    pub initial_picker_color: Color,
    /// How long the "copied" toast stays up.
    pub toast_duration: Duration,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            family_steps: 5,
            palette_columns: 10,
            initial_picker_color: Color(0xFF, 0x6B, 0x00),
            toast_duration: Duration::from_millis(900),
        }
    }
}

impl ShellConfig {
    pub fn with_family_steps(mut self, steps: usize) -> Self {
        self.family_steps = steps;
        self
    }

    /// Zero columns is treated as one.
    pub fn with_palette_columns(mut self, columns: usize) -> Self {
        self.palette_columns = columns.max(1);
        self
    }

    pub fn with_initial_picker_color(mut self, color: Color) -> Self {
        self.initial_picker_color = color;
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }
}
