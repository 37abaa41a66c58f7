//! Static seed data shown by the palette, contrast and gradient views.
//!
//! Entries are validated once here. A malformed entry is logged and left out,
//! so the views never see a color they cannot render.

use chromakit_ui_graphics::{Color, LinearGradient};

const PALETTE_SEEDS: &[&str] = &[
    "#E35342", "#FFB11E", "#FF4966", "#9E2997", // reds and magentas
    "#9C93E5", "#C7A3D2", "#BA8CBE", "#7F4EA8", // purples
    "#F5EDF0", "#DCBDDF", "#9A99E1", "#008BD0", // lilacs into blues
    "#201C57", "#201C6D", "#1E1A84", "#2D198E", "#411A8D", // dark blues
    "#E0AA00", "#FFA61D", // oranges
    "#0084C7", "#00BCD4", "#03A9F4", "#2196F3", // blues
    "#4CAF50", "#8BC34A", "#CDDC39", // greens
    "#795548", "#607D8B", "#9E9E9E", // neutrals
    "#000000", "#FFFFFF", "#FF007A", "#00FF88", "#222222", "#f0f0f0",
];

const CONTRAST_PAIRS: &[(&str, &str, &str)] = &[
    ("Az", "#0AEF48", "#0531CB"),
    ("Az", "#964D1E", "#0AFE57"),
    ("Az", "#7C28D0", "#A9D4C2"),
    ("Az", "#1E4527", "#81C5F9"),
    ("Az", "#BFE756", "#2B675D"),
    ("Az", "#A2BFD5", "#9D0815"),
    ("Az", "#0E42F7", "#8EFDB7"),
    ("Az", "#A8D9C8", "#3A1CDB"),
];

const GRADIENT_PRESETS: &[(f32, &[&str])] = &[
    (90.0, &["#F44336 0%", "#FFC107 100%"]),
    (90.0, &["#6A38C2 0%", "#6A38C2 50%", "#6A38C2 100%"]),
    (90.0, &["#E8ED92 0%", "#A8E6CF 100%"]),
    (90.0, &["#3A6073 0%", "#16222A 100%"]),
    (90.0, &["#8E2DE2 0%", "#4A00E0 50%", "#00BCD4 100%"]),
    (90.0, &["#00C6FF 0%", "#0072FF 100%"]),
];

/// A foreground/background pair rendered as a contrast sample.
#[derive(Clone, Debug, PartialEq)]
pub struct ContrastPair {
    pub label: String,
    pub foreground: Color,
    pub background: Color,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    palette: Vec<Color>,
    contrast_pairs: Vec<ContrastPair>,
    gradients: Vec<LinearGradient>,
}

impl Catalog {
    /// The lists the application ships with.
    pub fn builtin() -> Self {
        Self::new(PALETTE_SEEDS, CONTRAST_PAIRS, GRADIENT_PRESETS)
    }

    /// Builds a catalog from raw hex strings, dropping entries that do not parse.
    ///
    /// Duplicate palette seeds are kept: the grid shows what it was given.
    pub fn new<S>(palette: &[S], contrast_pairs: &[(S, S, S)], gradients: &[(f32, &[S])]) -> Self
    where
        S: AsRef<str>,
    {
        let palette = palette
            .iter()
            .filter_map(|seed| match Color::from_hex(seed.as_ref()) {
                Ok(color) => Some(color),
                Err(err) => {
                    log::warn!("Dropping palette seed {:?}: {err}", seed.as_ref());
                    None
                }
            })
            .collect();

        let contrast_pairs = contrast_pairs
            .iter()
            .filter_map(|(label, fg, bg)| {
                let parsed = Color::from_hex(fg.as_ref())
                    .and_then(|fg| Color::from_hex(bg.as_ref()).map(|bg| (fg, bg)));
                match parsed {
                    Ok((foreground, background)) => Some(ContrastPair {
                        label: label.as_ref().to_string(),
                        foreground,
                        background,
                    }),
                    Err(err) => {
                        log::warn!("Dropping contrast pair {:?}: {err}", label.as_ref());
                        None
                    }
                }
            })
            .collect();

        let gradients = gradients
            .iter()
            .filter_map(|&(angle, stops)| match LinearGradient::parse(angle, stops) {
                Ok(gradient) => Some(gradient),
                Err(err) => {
                    log::warn!("Dropping gradient preset at {angle}deg: {err}");
                    None
                }
            })
            .collect();

        Self {
            palette,
            contrast_pairs,
            gradients,
        }
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn contrast_pairs(&self) -> &[ContrastPair] {
        &self.contrast_pairs
    }

    pub fn gradients(&self) -> &[LinearGradient] {
        &self.gradients
    }

    /// Palette seeds split into grid rows of `columns` swatches.
    pub fn palette_rows(&self, columns: usize) -> Vec<&[Color]> {
        self.palette.chunks(columns.max(1)).collect()
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
