//! Error type shared by the color and gradient primitives.

use thiserror::Error;

/// Failures raised by strict color constructors and parsers.
///
/// Free-text search input never produces these; it is parsed leniently by
/// [`crate::parse_color_tokens`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The string is not a 3- or 6-digit hex color.
    #[error("invalid hex color: {0:?}")]
    InvalidFormat(String),

    /// A color-space component fell outside its allowed range.
    #[error("{component} out of range: {value} (expected {min}..{max})")]
    OutOfRange {
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A gradient needs at least one stop.
    #[error("gradient has no stops")]
    EmptyGradient,

    /// A gradient stop was not of the form `#RRGGBB <pos>%`.
    #[error("invalid gradient stop: {0:?}")]
    InvalidGradientStop(String),
}
