//! Geometric primitives: Point, Rect

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

/// Axis-aligned rectangle in client coordinates, like a bounding client rect.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when both width and height are positive.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Inclusive on every edge. A rect without area contains nothing.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.has_area()
            && x >= self.x
            && y >= self.y
            && x <= self.x + self.width
            && y <= self.y + self.height
    }

    /// Fraction of the way across the rect, clamped to `0.0..=1.0`.
    ///
    /// A rect with no width maps every x to `0.0`.
    pub fn fraction_x(&self, x: f32) -> f32 {
        fraction(x - self.x, self.width)
    }

    /// Fraction of the way down the rect, clamped to `0.0..=1.0`.
    pub fn fraction_y(&self, y: f32) -> f32 {
        fraction(y - self.y, self.height)
    }
}

fn fraction(offset: f32, extent: f32) -> f32 {
    if extent.is_nan() || extent <= 0.0 {
        return 0.0;
    }
    offset.clamp(0.0, extent) / extent
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
