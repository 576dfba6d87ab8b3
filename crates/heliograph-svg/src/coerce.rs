//! Attribute coercion.
//!
//! Element setters accept a [`Raw`] value and run it through one of the pure
//! functions here. Each function names the attribute in its error so a bad
//! assignment points straight at the offending field.

use crate::length::{Length, NumberOrLength};
use crate::{Error, Result};

/// An attribute value before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Raw {
    Number(f64),
    Int(i64),
    Text(String),
    Bool(bool),
    Length(Length),
}

impl From<f64> for Raw {
    fn from(v: f64) -> Self {
        Raw::Number(v)
    }
}

impl From<i64> for Raw {
    fn from(v: i64) -> Self {
        Raw::Int(v)
    }
}

impl From<i32> for Raw {
    fn from(v: i32) -> Self {
        Raw::Int(v as i64)
    }
}

impl From<&str> for Raw {
    fn from(v: &str) -> Self {
        Raw::Text(v.to_string())
    }
}

impl From<String> for Raw {
    fn from(v: String) -> Self {
        Raw::Text(v)
    }
}

impl From<bool> for Raw {
    fn from(v: bool) -> Self {
        Raw::Bool(v)
    }
}

impl From<Length> for Raw {
    fn from(v: Length) -> Self {
        Raw::Length(v)
    }
}

/// Coerce to a float. Numeric text like `"3.5"` parses; anything else fails.
pub fn number(value: impl Into<Raw>, name: &'static str) -> Result<f64> {
    match value.into() {
        Raw::Number(v) => Ok(v),
        Raw::Int(v) => Ok(v as f64),
        Raw::Text(s) => s.trim().parse::<f64>().map_err(|_| Error::InvalidNumber {
            name,
            got: s,
        }),
        Raw::Bool(v) => Err(Error::InvalidNumber {
            name,
            got: v.to_string(),
        }),
        Raw::Length(l) => Err(Error::InvalidNumber {
            name,
            got: l.to_string(),
        }),
    }
}

/// Coerce to an integer. Floats with a fractional part fail.
pub fn integer(value: impl Into<Raw>, name: &'static str) -> Result<i64> {
    match value.into() {
        Raw::Int(v) => Ok(v),
        Raw::Number(v) if v.fract() == 0.0 && v.is_finite() => Ok(v as i64),
        Raw::Number(v) => Err(Error::InvalidInteger {
            name,
            got: v.to_string(),
        }),
        Raw::Text(s) => s.trim().parse::<i64>().map_err(|_| Error::InvalidInteger {
            name,
            got: s,
        }),
        Raw::Bool(v) => Err(Error::InvalidInteger {
            name,
            got: v.to_string(),
        }),
        Raw::Length(l) => Err(Error::InvalidInteger {
            name,
            got: l.to_string(),
        }),
    }
}

/// Coerce to text. Every raw value stringifies, so this never fails.
pub fn string(value: impl Into<Raw>) -> String {
    match value.into() {
        Raw::Text(s) => s,
        Raw::Number(v) => crate::fmt::fmt_f64(v),
        Raw::Int(v) => v.to_string(),
        Raw::Bool(v) => v.to_string(),
        Raw::Length(l) => l.to_string(),
    }
}

/// Coerce to a bare number or a unit-carrying length.
pub fn number_or_length(value: impl Into<Raw>, name: &'static str) -> Result<NumberOrLength> {
    match value.into() {
        Raw::Length(l) => Ok(NumberOrLength::Length(l)),
        Raw::Number(v) => Ok(NumberOrLength::Number(v)),
        Raw::Int(v) => Ok(NumberOrLength::Number(v as f64)),
        Raw::Text(s) => {
            if let Ok(v) = s.trim().parse::<f64>() {
                return Ok(NumberOrLength::Number(v));
            }
            s.parse::<Length>()
                .map(NumberOrLength::Length)
                .map_err(|_| Error::InvalidLength { name, got: s })
        }
        Raw::Bool(v) => Err(Error::InvalidLength {
            name,
            got: v.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::LengthUnit;

    #[test]
    fn numeric_text_parses() {
        assert_eq!(number("3.5", "x").unwrap(), 3.5);
        assert_eq!(number(" 2 ", "x").unwrap(), 2.0);
    }

    #[test]
    fn non_numeric_text_names_the_attribute() {
        let err = number("wide", "stroke_width").unwrap_err();
        assert!(err.to_string().contains("stroke_width"));
        assert!(err.to_string().contains("wide"));
    }

    #[test]
    fn integer_rejects_fractions() {
        assert_eq!(integer(4.0, "n").unwrap(), 4);
        assert!(integer(4.5, "n").is_err());
    }

    #[test]
    fn string_accepts_everything() {
        assert_eq!(string(5.0), "5");
        assert_eq!(string(true), "true");
        assert_eq!(string("id"), "id");
    }

    #[test]
    fn length_text_parses_with_unit() {
        let got = number_or_length("40%", "width").unwrap();
        assert_eq!(
            got,
            NumberOrLength::Length(Length::new(40.0, LengthUnit::Percent))
        );
        let got = number_or_length("12", "width").unwrap();
        assert_eq!(got, NumberOrLength::Number(12.0));
    }
}
