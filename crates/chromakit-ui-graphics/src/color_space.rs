//! HSV and HSL editing representations.
//!
//! Both types hold hue in degrees `[0, 360)` and the other two components in
//! percent `[0, 100]`. The strict constructors reject anything outside those
//! ranges; `normalized` wraps hue and clamps the rest, which is what pointer
//! driven editing wants.

use crate::color::Color;
use crate::error::ColorError;

fn check_hue(h: f64) -> Result<f64, ColorError> {
    if h.is_finite() && (0.0..360.0).contains(&h) {
        Ok(h)
    } else {
        Err(ColorError::OutOfRange {
            component: "hue",
            value: h,
            min: 0.0,
            max: 360.0,
        })
    }
}

fn check_percent(component: &'static str, value: f64) -> Result<f64, ColorError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::OutOfRange {
            component,
            value,
            min: 0.0,
            max: 100.0,
        })
    }
}

fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Hue shared by HSV and HSL, in degrees, from the max-channel branch.
fn hue_of(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    wrap_hue(sector * 60.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    h: f64,
    s: f64,
    v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Result<Self, ColorError> {
        Ok(Self {
            h: check_hue(h)?,
            s: check_percent("saturation", s)?,
            v: check_percent("value", v)?,
        })
    }

    pub fn normalized(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp_percent(s),
            v: clamp_percent(v),
        }
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    pub fn v(&self) -> f64 {
        self.v
    }

    pub fn with_hue(&self, h: f64) -> Self {
        Self::normalized(h, self.s, self.v)
    }

    pub fn with_saturation_value(&self, s: f64, v: f64) -> Self {
        Self::normalized(self.h, s, v)
    }

    pub fn to_color(&self) -> Color {
        hsv_to_rgb(*self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    h: f64,
    s: f64,
    l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Result<Self, ColorError> {
        Ok(Self {
            h: check_hue(h)?,
            s: check_percent("saturation", s)?,
            l: check_percent("lightness", l)?,
        })
    }

    pub fn normalized(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    pub fn l(&self) -> f64 {
        self.l
    }

    /// Rounds every component to a whole number, keeping the hue in range.
    pub fn rounded(&self) -> Self {
        Self::normalized(self.h.round(), self.s.round(), self.l.round())
    }

    pub fn to_color(&self) -> Color {
        hsl_to_rgb(*self)
    }
}

pub fn rgb_to_hsv(color: Color) -> Hsv {
    let (r, g, b) = color.to_unit_rgb();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    Hsv {
        h: hue_of(r, g, b, max, delta),
        s: s * 100.0,
        v: max * 100.0,
    }
}

pub fn hsv_to_rgb(hsv: Hsv) -> Color {
    let h = wrap_hue(hsv.h);
    let s = clamp_percent(hsv.s) / 100.0;
    let v = clamp_percent(hsv.v) / 100.0;

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Color::from_unit_rgb(r + m, g + m, b + m)
}

pub fn rgb_to_hsl(color: Color) -> Hsl {
    let (r, g, b) = color.to_unit_rgb();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let s = if delta == 0.0 {
        0.0
    } else if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    Hsl {
        h: hue_of(r, g, b, max, delta),
        s: s * 100.0,
        l: l * 100.0,
    }
}

pub fn hsl_to_rgb(hsl: Hsl) -> Color {
    let h = wrap_hue(hsl.h) / 360.0;
    let s = clamp_percent(hsl.s) / 100.0;
    let l = clamp_percent(hsl.l) / 100.0;

    if s == 0.0 {
        let gray = (l * 255.0).round() as u8;
        return Color(gray, gray, gray);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Color::from_unit_rgb(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl Color {
    pub fn to_hsv(&self) -> Hsv {
        rgb_to_hsv(*self)
    }

    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(*self)
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        hsv_to_rgb(hsv)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl)
    }
}

#[cfg(test)]
#[path = "tests/color_space_tests.rs"]
mod tests;
