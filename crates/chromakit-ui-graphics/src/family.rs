//! Tonal families: lightness-shifted variants of a seed color.

use crate::color::Color;
use crate::color_space::Hsl;

/// Lightness offsets used for the five-step family.
///
/// The spacing is deliberately not uniform; other step counts interpolate
/// over `FAMILY_SPREAD` instead.
pub const FIVE_STEP_DELTAS: [f64; 5] = [-28.0, -14.0, 0.0, 14.0, 28.0];

/// Half-width of the uniform lightness spread for non-preset step counts.
pub const FAMILY_SPREAD: f64 = 30.0;

const MIN_LIGHTNESS: f64 = 8.0;
const MAX_LIGHTNESS: f64 = 92.0;
const MIN_SATURATION: f64 = 28.0;
const SATURATION_FALLOFF: f64 = 0.2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FamilyMember {
    pub hex: Color,
    pub rgb_string: String,
}

impl FamilyMember {
    fn new(color: Color) -> Self {
        Self {
            hex: color,
            rgb_string: color.rgb_string(),
        }
    }
}

/// Lightness deltas for a family of `steps` members, darkest first.
pub fn family_deltas(steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![0.0],
        5 => FIVE_STEP_DELTAS.to_vec(),
        n => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| -FAMILY_SPREAD + 2.0 * FAMILY_SPREAD * i as f64 / last)
                .collect()
        }
    }
}

/// Generates `steps` variants of `seed`, holding hue constant.
///
/// Each member's lightness is the seed's (rounded) lightness plus the delta,
/// clamped to `8..=92`; saturation drops by a fifth of the delta's magnitude
/// but never below 28.
pub fn generate_family(seed: Color, steps: usize) -> Vec<FamilyMember> {
    let base = seed.to_hsl().rounded();
    family_deltas(steps)
        .into_iter()
        .map(|delta| {
            let l = (base.l() + delta).clamp(MIN_LIGHTNESS, MAX_LIGHTNESS);
            let s = (base.s() - delta.abs() * SATURATION_FALLOFF).max(MIN_SATURATION);
            FamilyMember::new(Hsl::normalized(base.h(), s, l).to_color())
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/family_tests.rs"]
mod tests;
