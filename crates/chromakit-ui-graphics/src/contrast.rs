//! WCAG relative luminance and contrast ratio.

use crate::color::Color;
use std::fmt;

/// Ratio at or above which a pair earns the AAA badge.
pub const AAA_THRESHOLD: f64 = 7.0;
/// Ratio at or above which a pair earns the AA badge.
pub const AA_THRESHOLD: f64 = 4.5;

fn linearize(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `0.0..=1.0`.
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * linearize(color.r()) + 0.7152 * linearize(color.g()) + 0.0722 * linearize(color.b())
}

/// Contrast between two colors, always in `1.0..=21.0`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ContrastRatio(f64);

impl ContrastRatio {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn level(&self) -> ContrastLevel {
        ContrastLevel::for_ratio(self.0)
    }

    pub fn passes_aa(&self) -> bool {
        self.0 >= AA_THRESHOLD
    }
}

impl fmt::Display for ContrastRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}:1", self.0)
    }
}

/// Badge tier for a contrast ratio. The thresholds are fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContrastLevel {
    Aaa,
    Aa,
    Fail,
}

impl ContrastLevel {
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio >= AAA_THRESHOLD {
            ContrastLevel::Aaa
        } else if ratio >= AA_THRESHOLD {
            ContrastLevel::Aa
        } else {
            ContrastLevel::Fail
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContrastLevel::Aaa => "AAA",
            ContrastLevel::Aa => "AA",
            ContrastLevel::Fail => "fail",
        }
    }
}

pub fn contrast_ratio(a: Color, b: Color) -> ContrastRatio {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    ContrastRatio((lighter + 0.05) / (darker + 0.05))
}

/// Black or white, whichever reads better on `background`.
///
/// When both ratios are equal black is returned; the tie-break is part of
/// the contract.
pub fn best_text_color(background: Color) -> Color {
    text_color_for(
        contrast_ratio(background, Color::BLACK),
        contrast_ratio(background, Color::WHITE),
    )
}

fn text_color_for(on_black: ContrastRatio, on_white: ContrastRatio) -> Color {
    if on_black >= on_white {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

impl Color {
    pub fn relative_luminance(&self) -> f64 {
        relative_luminance(*self)
    }

    pub fn contrast_with(&self, other: Color) -> ContrastRatio {
        contrast_ratio(*self, other)
    }
}

#[cfg(test)]
#[path = "tests/contrast_tests.rs"]
mod tests;
