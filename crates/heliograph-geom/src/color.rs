//! RGBA color value used for every display style in heliograph.

use serde::{Deserialize, Serialize};

/// An RGBA color with 8-bit channels. Alpha defaults to fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

pub const BLACK: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

pub const GREY: Color = Color {
    r: 128,
    g: 128,
    b: 128,
    a: 255,
};

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Hex string in `#rrggbb` form (alpha is carried separately as opacity).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn is_black(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Linear interpolation between two colors in RGB space.
    pub fn lerp(&self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Color {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
            a: ch(self.a, other.a),
        }
    }

    /// Channel-wise average of a non-empty slice of colors.
    pub fn average(colors: &[Color]) -> Color {
        if colors.is_empty() {
            return BLACK;
        }
        let n = colors.len() as f64;
        let sum = |f: fn(&Color) -> u8| {
            (colors.iter().map(|c| f64::from(f(c))).sum::<f64>() / n).round() as u8
        };
        Color {
            r: sum(|c| c.r),
            g: sum(|c| c.g),
            b: sum(|c| c.b),
            a: sum(|c| c.a),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_rgb() {
        assert_eq!(Color::new(255, 0, 128).to_hex(), "#ff0080");
    }

    #[test]
    fn average_of_red_and_green() {
        let avg = Color::average(&[Color::new(255, 0, 0), Color::new(0, 255, 0)]);
        assert_eq!(avg, Color::new(128, 128, 0));
    }

    #[test]
    fn alpha_defaults_to_opaque_in_dicts() {
        let c: Color = serde_json::from_str(r#"{"r":10,"g":20,"b":30}"#).unwrap();
        assert_eq!(c.a, 255);
    }
}
