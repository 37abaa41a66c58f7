//! Pure color math and drawing data for Chromakit
//!
//! This crate contains the color model (hex, RGB, HSV, HSL), WCAG contrast
//! math, tonal family generation, lenient color query parsing, gradients and
//! the geometry primitives the pointer layer works in.

mod brush;
mod color;
mod color_space;
mod contrast;
mod error;
mod family;
mod geometry;
mod query;

pub use brush::*;
pub use color::*;
pub use color_space::*;
pub use contrast::*;
pub use error::*;
pub use family::*;
pub use geometry::*;
pub use query::*;

pub mod prelude {
    pub use crate::brush::{Brush, GradientStop, LinearGradient};
    pub use crate::color::Color;
    pub use crate::color_space::{Hsl, Hsv};
    pub use crate::contrast::{best_text_color, contrast_ratio, ContrastLevel, ContrastRatio};
    pub use crate::error::ColorError;
    pub use crate::family::{generate_family, FamilyMember};
    pub use crate::geometry::{Point, Rect};
    pub use crate::query::parse_color_tokens;
}
