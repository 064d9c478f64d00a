//! RGBA colors parsed from CSS-style strings
//!
//! Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;

/// Straight (non-premultiplied) RGBA color, alpha in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same color with alpha replaced
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Same color with alpha multiplied by `factor`
    pub fn fade(self, factor: f32) -> Self {
        self.with_alpha(self.a * factor)
    }

    /// Per-channel linear blend, `t = 0` is `self`
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// CSS `rgba(...)` form, as understood by canvas fill/stroke styles
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Rgba {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ConfigError::InvalidColor(s.to_string());

        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        let lower = trimmed.to_ascii_lowercase();
        let (body, expects_alpha) = if let Some(rest) = lower.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = lower.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();

        let channel = |p: &str| p.parse::<u8>().ok();
        match (parts.as_slice(), expects_alpha) {
            ([r, g, b], false) => Ok(Rgba::rgb(
                channel(r).ok_or_else(invalid)?,
                channel(g).ok_or_else(invalid)?,
                channel(b).ok_or_else(invalid)?,
            )),
            ([r, g, b, a], true) => {
                let a = a.parse::<f32>().ok().filter(|a| (0.0..=1.0).contains(a));
                Ok(Rgba::new(
                    channel(r).ok_or_else(invalid)?,
                    channel(g).ok_or_else(invalid)?,
                    channel(b).ok_or_else(invalid)?,
                    a.ok_or_else(invalid)?,
                ))
            }
            _ => Err(invalid()),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);

    match hex.len() {
        3 => Some(Rgba::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)? as f32 / 255.0)),
        _ => None,
    }
}

impl TryFrom<String> for Rgba {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_css()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#FF5E5B".parse::<Rgba>().unwrap(), Rgba::rgb(0xFF, 0x5E, 0x5B));
        assert_eq!("#fff".parse::<Rgba>().unwrap(), Rgba::WHITE);
        let translucent: Rgba = "#00000080".parse().unwrap();
        assert_eq!((translucent.r, translucent.g, translucent.b), (0, 0, 0));
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn parses_functional_forms() {
        let c: Rgba = "rgba(210, 230, 255, 0.9)".parse().unwrap();
        assert_eq!(c, Rgba::new(210, 230, 255, 0.9));
        let c: Rgba = " RGB(1,2,3) ".parse().unwrap();
        assert_eq!(c, Rgba::rgb(1, 2, 3));
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["", "#12", "#gggggg", "rgb(1,2)", "rgba(1,2,3)", "rgba(1,2,3,2)", "rgb(300,0,0)", "teal"] {
            assert!(bad.parse::<Rgba>().is_err(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn fade_and_alpha_are_clamped() {
        let c = Rgba::new(10, 20, 30, 0.8);
        assert_eq!(c.fade(0.5).a, 0.4);
        assert_eq!(c.with_alpha(3.0).a, 1.0);
        assert_eq!(c.with_alpha(-1.0).a, 0.0);
    }

    #[test]
    fn css_output_reparses() {
        let c = Rgba::new(57, 160, 237, 0.25);
        assert_eq!(c.to_css(), "rgba(57, 160, 237, 0.25)");
        assert_eq!(c.to_css().parse::<Rgba>().unwrap(), c);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rgba::rgb(0, 0, 0);
        let b = Rgba::new(200, 100, 50, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgba::new(100, 50, 25, 0.5));
    }
}
