//! Lenient parsing of free-text color queries.
//!
//! Search input such as `#FFF, rgb(0,0,0) #123456` is split into tokens and
//! every token that looks like a hex or `rgb()` literal becomes a color.
//! Anything else is dropped without complaint.

use crate::color::Color;
use indexmap::IndexSet;
use regex::Regex;
use std::sync::LazyLock;

/// A parenthesised `rgb(...)` group, or a run of non-separator characters.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)rgb\([^)]*\)|[^\s,;]+").expect("Invalid token regex")
});

static HEX_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#([0-9a-f]{3}|[0-9a-f]{6})$").expect("Invalid hex token regex")
});

static RGB_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*\)$")
        .expect("Invalid rgb token regex")
});

/// Parses every color literal in `input`, de-duplicated in first-seen order.
///
/// Tokens are separated by runs of whitespace, commas and semicolons. An
/// `rgb(...)` group is kept whole, so `rgb(255, 87, 51)` is one token.
pub fn parse_color_tokens(input: &str) -> Vec<Color> {
    let mut colors = IndexSet::new();
    for token in TOKEN.find_iter(input).map(|m| m.as_str()) {
        match parse_token(token) {
            Some(color) => {
                colors.insert(color);
            }
            None => log::trace!("ignoring non-color token {token:?}"),
        }
    }
    colors.into_iter().collect()
}

fn parse_token(token: &str) -> Option<Color> {
    if HEX_TOKEN.is_match(token) {
        return Color::from_hex(token).ok();
    }
    let caps = RGB_TOKEN.captures(token)?;
    let channel = |i: usize| caps[i].parse::<i32>().ok();
    Some(Color::from_rgb_clamped(channel(1)?, channel(2)?, channel(3)?))
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
