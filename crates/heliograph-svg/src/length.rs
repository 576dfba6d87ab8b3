//! Unit-carrying lengths and the small viewport helper types.

use std::fmt;
use std::str::FromStr;

use crate::fmt::fmt_f64_into;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Em,
    Ex,
    Px,
    Pt,
    Pc,
    Cm,
    Mm,
    In,
    Percent,
}

impl LengthUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            LengthUnit::Em => "em",
            LengthUnit::Ex => "ex",
            LengthUnit::Px => "px",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::In => "in",
            LengthUnit::Percent => "%",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "em" => Ok(LengthUnit::Em),
            "ex" => Ok(LengthUnit::Ex),
            "px" => Ok(LengthUnit::Px),
            "pt" => Ok(LengthUnit::Pt),
            "pc" => Ok(LengthUnit::Pc),
            "cm" => Ok(LengthUnit::Cm),
            "mm" => Ok(LengthUnit::Mm),
            "in" => Ok(LengthUnit::In),
            "%" => Ok(LengthUnit::Percent),
            other => Err(Error::UnknownVariant {
                got: other.to_string(),
                allowed: "em, ex, px, pt, pc, cm, mm, in, %",
            }),
        }
    }
}

/// A number with a display unit, e.g. `40%` or `12px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn percent(value: f64) -> Self {
        Self::new(value, LengthUnit::Percent)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        fmt_f64_into(&mut out, self.value);
        out.push_str(self.unit.as_str());
        f.write_str(&out)
    }
}

impl FromStr for Length {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_digit() || *c == '.' || *c == '-' || *c == '+'))
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        let (num, unit) = s.split_at(split);
        let value = num.parse::<f64>().map_err(|_| Error::InvalidLength {
            name: "length",
            got: s.to_string(),
        })?;
        let unit = if unit.is_empty() {
            LengthUnit::Px
        } else {
            unit.parse()?
        };
        Ok(Self { value, unit })
    }
}

/// Either a bare user-space number or a unit-carrying length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberOrLength {
    Number(f64),
    Length(Length),
}

impl NumberOrLength {
    /// Resolve to user-space pixels; percent values resolve against `extent`.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            NumberOrLength::Number(v) => v,
            NumberOrLength::Length(l) => match l.unit {
                LengthUnit::Percent => l.value / 100.0 * extent,
                _ => l.value,
            },
        }
    }

    pub fn is_percent(self) -> bool {
        matches!(
            self,
            NumberOrLength::Length(Length {
                unit: LengthUnit::Percent,
                ..
            })
        )
    }
}

impl fmt::Display for NumberOrLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberOrLength::Number(v) => {
                let mut out = String::new();
                fmt_f64_into(&mut out, *v);
                f.write_str(&out)
            }
            NumberOrLength::Length(l) => l.fmt(f),
        }
    }
}

impl From<f64> for NumberOrLength {
    fn from(v: f64) -> Self {
        NumberOrLength::Number(v)
    }
}

impl From<Length> for NumberOrLength {
    fn from(l: Length) -> Self {
        NumberOrLength::Length(l)
    }
}

/// The four numbers of a `viewBox` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        fmt_f64_into(&mut out, self.min_x);
        out.push(' ');
        fmt_f64_into(&mut out, self.min_y);
        out.push(' ');
        fmt_f64_into(&mut out, self.width);
        out.push(' ');
        fmt_f64_into(&mut out, self.height);
        f.write_str(&out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    None,
    XMinYMin,
    XMidYMin,
    XMaxYMin,
    XMinYMid,
    #[default]
    XMidYMid,
    XMaxYMid,
    XMinYMax,
    XMidYMax,
    XMaxYMax,
}

impl Align {
    fn as_str(self) -> &'static str {
        match self {
            Align::None => "none",
            Align::XMinYMin => "xMinYMin",
            Align::XMidYMin => "xMidYMin",
            Align::XMaxYMin => "xMaxYMin",
            Align::XMinYMid => "xMinYMid",
            Align::XMidYMid => "xMidYMid",
            Align::XMaxYMid => "xMaxYMid",
            Align::XMinYMax => "xMinYMax",
            Align::XMidYMax => "xMidYMax",
            Align::XMaxYMax => "xMaxYMax",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleType {
    #[default]
    Meet,
    Slice,
}

/// The `preserveAspectRatio` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreserveAspectRatio {
    pub align: Align,
    pub scale: ScaleType,
}

impl fmt::Display for PreserveAspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.align.as_str())?;
        if self.align != Align::None {
            f.write_str(match self.scale {
                ScaleType::Meet => " meet",
                ScaleType::Slice => " slice",
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_parses_and_displays() {
        let l: Length = "40%".parse().unwrap();
        assert_eq!(l, Length::percent(40.0));
        assert_eq!(l.to_string(), "40%");
        let l: Length = "12px".parse().unwrap();
        assert_eq!(l.to_string(), "12px");
    }

    #[test]
    fn unknown_unit_lists_accepted_set() {
        let err = "3yd".parse::<Length>().unwrap_err();
        assert!(err.to_string().contains("em, ex, px"));
    }

    #[test]
    fn percent_resolves_against_extent() {
        assert_eq!(NumberOrLength::Length(Length::percent(50.0)).resolve(800.0), 400.0);
        assert_eq!(NumberOrLength::Number(7.0).resolve(800.0), 7.0);
    }

    #[test]
    fn viewbox_text() {
        assert_eq!(ViewBox::new(0.0, 0.0, 10.0, 5.5).to_string(), "0 0 10 5.5");
    }
}
