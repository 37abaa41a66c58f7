//! Search box and family dialog state for the palette view.

use chromakit_ui_graphics::{
    best_text_color, generate_family, parse_color_tokens, Color, ContrastRatio, FamilyMember,
};

/// One row of an open family: the swatch plus the label styling it needs.
#[derive(Clone, Debug, PartialEq)]
pub struct FamilyRow {
    pub member: FamilyMember,
    pub text_color: Color,
    pub ratio: ContrastRatio,
    /// Even the better of black and white misses AA, so the label needs a plate.
    pub needs_backplate: bool,
}

impl FamilyRow {
    pub fn for_member(member: FamilyMember) -> Self {
        let text_color = best_text_color(member.hex);
        let ratio = member.hex.contrast_with(text_color);
        Self {
            member,
            text_color,
            ratio,
            needs_backplate: !ratio.passes_aa(),
        }
    }
}

pub fn family_rows(seed: Color, steps: usize) -> Vec<FamilyRow> {
    generate_family(seed, steps)
        .into_iter()
        .map(FamilyRow::for_member)
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct PaletteSearch {
    query: String,
    results: Vec<Color>,
    open: Option<Color>,
    family_steps: usize,
}

impl PaletteSearch {
    pub fn new(family_steps: usize) -> Self {
        Self {
            family_steps,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Parses the query and replaces the result swatches.
    pub fn search(&mut self) -> &[Color] {
        self.results = parse_color_tokens(&self.query);
        log::debug!("Search {:?} matched {} colors", self.query, self.results.len());
        &self.results
    }

    pub fn results(&self) -> &[Color] {
        &self.results
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
    }

    pub fn open_family(&mut self, seed: Color) {
        self.open = Some(seed);
    }

    pub fn close_family(&mut self) {
        self.open = None;
    }

    pub fn open_seed(&self) -> Option<Color> {
        self.open
    }

    pub fn family_steps(&self) -> usize {
        self.family_steps
    }

    /// Rows of the open family dialog, empty when no family is open.
    pub fn family_rows(&self) -> Vec<FamilyRow> {
        self.open
            .map(|seed| family_rows(seed, self.family_steps))
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "tests/palette_tests.rs"]
mod tests;
