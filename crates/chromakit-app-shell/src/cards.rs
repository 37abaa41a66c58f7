use crate::ContrastPair;
use chromakit_ui_graphics::{Color, ContrastLevel, ContrastRatio, LinearGradient};

/// A contrast sample: text in `foreground` over `background`.
#[derive(Clone, Debug, PartialEq)]
pub struct ContrastCard {
    pub label: String,
    pub foreground: Color,
    pub background: Color,
    ratio: ContrastRatio,
}

impl ContrastCard {
    pub fn new(label: impl Into<String>, foreground: Color, background: Color) -> Self {
        Self {
            label: label.into(),
            foreground,
            background,
            ratio: foreground.contrast_with(background),
        }
    }

    pub fn ratio(&self) -> ContrastRatio {
        self.ratio
    }

    pub fn level(&self) -> ContrastLevel {
        self.ratio.level()
    }

    /// `"4.52:1"`
    pub fn ratio_label(&self) -> String {
        self.ratio.to_string()
    }
}

impl From<&ContrastPair> for ContrastCard {
    fn from(pair: &ContrastPair) -> Self {
        Self::new(pair.label.clone(), pair.foreground, pair.background)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GradientCard {
    gradient: LinearGradient,
}

impl GradientCard {
    pub fn new(gradient: LinearGradient) -> Self {
        Self { gradient }
    }

    pub fn gradient(&self) -> &LinearGradient {
        &self.gradient
    }

    pub fn css(&self) -> String {
        self.gradient.to_css()
    }

    /// What the "copy CSS" action puts on the clipboard.
    pub fn css_declaration(&self) -> String {
        self.gradient.css_declaration()
    }

    pub fn swatch_hexes(&self) -> Vec<String> {
        self.gradient
            .stops()
            .iter()
            .map(|stop| stop.color.to_hex())
            .collect()
    }

    pub fn position_labels(&self) -> Vec<String> {
        self.gradient
            .stops()
            .iter()
            .map(|stop| stop.position_label())
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/cards_tests.rs"]
mod tests;
