//! Brush definitions for painting (solid colors, linear gradients)

use crate::color::Color;
use crate::error::ColorError;
use std::fmt;
use std::str::FromStr;

/// One color stop of a gradient, positioned in percent along the axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub color: Color,
    pub position: f32,
}

impl GradientStop {
    pub const fn new(color: Color, position: f32) -> Self {
        Self { color, position }
    }

    /// The position as written after the color, e.g. `50%`.
    pub fn position_label(&self) -> String {
        format!("{}%", self.position)
    }
}

impl fmt::Display for GradientStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.color, self.position)
    }
}

/// Parses `#RRGGBB 50%`. The first whitespace-separated token is the color;
/// a missing position is an error.
impl FromStr for GradientStop {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidGradientStop(s.to_string());
        let mut parts = s.split_whitespace();
        let color = parts.next().ok_or_else(invalid)?;
        let position = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        let color = Color::from_hex(color)?;
        let position = position
            .strip_suffix('%')
            .and_then(|p| p.parse::<f32>().ok())
            .filter(|p| p.is_finite())
            .ok_or_else(invalid)?;
        Ok(Self { color, position })
    }
}

/// An angled linear gradient; stops render in list order.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    angle_degrees: f32,
    stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(angle_degrees: f32, stops: Vec<GradientStop>) -> Result<Self, ColorError> {
        if stops.is_empty() {
            return Err(ColorError::EmptyGradient);
        }
        Ok(Self {
            angle_degrees,
            stops,
        })
    }

    /// Builds a gradient from stop strings such as `"#F44336 0%"`.
    pub fn parse<S: AsRef<str>>(angle_degrees: f32, stops: &[S]) -> Result<Self, ColorError> {
        let stops = stops
            .iter()
            .map(|stop| stop.as_ref().parse())
            .collect::<Result<Vec<GradientStop>, _>>()?;
        Self::new(angle_degrees, stops)
    }

    pub fn angle_degrees(&self) -> f32 {
        self.angle_degrees
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// CSS value, e.g. `linear-gradient(90deg, #F44336 0%, #FFC107 100%)`.
    pub fn to_css(&self) -> String {
        let stops = self
            .stops
            .iter()
            .map(GradientStop::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("linear-gradient({}deg, {})", self.angle_degrees, stops)
    }

    /// Full declaration for pasting into a stylesheet.
    pub fn css_declaration(&self) -> String {
        format!("background-image: {};", self.to_css())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn linear_gradient(gradient: LinearGradient) -> Self {
        Brush::LinearGradient(gradient)
    }

    /// The horizontal hue spectrum drawn behind a hue slider.
    pub fn hue_spectrum() -> Self {
        let stops = [
            (Color::RED, 0.0),
            (Color(255, 255, 0), 17.0),
            (Color::GREEN, 33.0),
            (Color(0, 255, 255), 50.0),
            (Color::BLUE, 67.0),
            (Color(255, 0, 255), 83.0),
            (Color::RED, 100.0),
        ];
        Brush::LinearGradient(LinearGradient {
            angle_degrees: 90.0,
            stops: stops
                .into_iter()
                .map(|(color, position)| GradientStop::new(color, position))
                .collect(),
        })
    }

    pub fn to_css(&self) -> String {
        match self {
            Brush::Solid(color) => color.to_hex(),
            Brush::LinearGradient(gradient) => gradient.to_css(),
        }
    }
}

#[cfg(test)]
#[path = "tests/brush_tests.rs"]
mod tests;
