//! Shared display enumerations.
//!
//! These are declared once and imported by every wrapper so the accepted
//! value sets and the dash-array table exist in exactly one place.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// The line pattern for curve-like display objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineType {
    #[default]
    Continuous,
    Dashed,
    Dotted,
    DashDot,
}

impl LineType {
    /// Dash pattern for the `stroke-dasharray` attribute. Continuous lines
    /// carry no pattern.
    pub fn dash_array(self) -> Option<&'static [f64]> {
        match self {
            LineType::Continuous => None,
            LineType::Dashed => Some(&[6.0, 6.0]),
            LineType::Dotted => Some(&[2.0, 2.0]),
            LineType::DashDot => Some(&[6.0, 6.0, 2.0, 6.0]),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineType::Continuous => "Continuous",
            LineType::Dashed => "Dashed",
            LineType::Dotted => "Dotted",
            LineType::DashDot => "DashDot",
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Continuous" => Ok(LineType::Continuous),
            "Dashed" => Ok(LineType::Dashed),
            "Dotted" => Ok(LineType::Dotted),
            "DashDot" => Ok(LineType::DashDot),
            other => Err(Error::TypeMismatch {
                expected: "line_type in {Continuous, Dashed, Dotted, DashDot}",
                got: other.to_string(),
            }),
        }
    }
}

/// How an area or volume geometry degrades to 2D markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Surface,
    SurfaceWithEdges,
    Wireframe,
    Points,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Surface => "Surface",
            DisplayMode::SurfaceWithEdges => "SurfaceWithEdges",
            DisplayMode::Wireframe => "Wireframe",
            DisplayMode::Points => "Points",
        }
    }

    /// Whether faces render filled in this mode.
    pub fn has_fill(self) -> bool {
        matches!(self, DisplayMode::Surface | DisplayMode::SurfaceWithEdges)
    }

    /// Whether face boundaries render with a visible stroke.
    pub fn has_edges(self) -> bool {
        matches!(self, DisplayMode::Wireframe | DisplayMode::SurfaceWithEdges)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Surface" => Ok(DisplayMode::Surface),
            "SurfaceWithEdges" => Ok(DisplayMode::SurfaceWithEdges),
            "Wireframe" => Ok(DisplayMode::Wireframe),
            "Points" => Ok(DisplayMode::Points),
            other => Err(Error::TypeMismatch {
                expected: "display_mode in {Surface, SurfaceWithEdges, Wireframe, Points}",
                got: other.to_string(),
            }),
        }
    }
}

/// Text alignment relative to the anchor point, mapping to `text-anchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            HorizontalAlignment::Left => "Left",
            HorizontalAlignment::Center => "Center",
            HorizontalAlignment::Right => "Right",
        }
    }
}

impl FromStr for HorizontalAlignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Left" => Ok(HorizontalAlignment::Left),
            "Center" => Ok(HorizontalAlignment::Center),
            "Right" => Ok(HorizontalAlignment::Right),
            other => Err(Error::TypeMismatch {
                expected: "horizontal_alignment in {Left, Center, Right}",
                got: other.to_string(),
            }),
        }
    }
}

/// Text alignment mapping to `dominant-baseline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    Top,
    Middle,
    #[default]
    Bottom,
}

impl VerticalAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            VerticalAlignment::Top => "Top",
            VerticalAlignment::Middle => "Middle",
            VerticalAlignment::Bottom => "Bottom",
        }
    }
}

impl FromStr for VerticalAlignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Top" => Ok(VerticalAlignment::Top),
            "Middle" => Ok(VerticalAlignment::Middle),
            "Bottom" => Ok(VerticalAlignment::Bottom),
            other => Err(Error::TypeMismatch {
                expected: "vertical_alignment in {Top, Middle, Bottom}",
                got: other.to_string(),
            }),
        }
    }
}

pub(crate) mod dict {
    //! Helpers shared by every wrapper's dictionary round-trip.

    use indexmap::IndexMap;
    use serde_json::{Map, Value, json};

    use heliograph_geom::{Color, Geometry, color::BLACK, dict::geometry_from_value};

    use crate::{Error, Result};

    /// Check the `"type"` discriminator before any field decoding.
    pub fn check_type(value: &Value, expected: &'static str) -> Result<()> {
        match value.get("type").and_then(Value::as_str) {
            None => Err(Error::MissingType),
            Some(got) if got == expected => Ok(()),
            Some(got) => Err(Error::TypeMismatch {
                expected,
                got: got.to_string(),
            }),
        }
    }

    pub fn geometry_field(value: &Value, expected: &'static str) -> Result<Geometry> {
        let geo = value.get("geometry").ok_or(Error::TypeMismatch {
            expected,
            got: "a dictionary without a \"geometry\" key".to_string(),
        })?;
        Ok(geometry_from_value(geo)?)
    }

    pub fn color_to_dict(color: Color) -> Value {
        json!({
            "type": "Color",
            "r": color.r,
            "g": color.g,
            "b": color.b,
            "a": color.a,
        })
    }

    /// Absent or null color keys fall back to opaque black.
    pub fn color_from_dict(value: Option<&Value>) -> Result<Color> {
        match value {
            None | Some(Value::Null) => Ok(BLACK),
            Some(v) => {
                let channel = |name: &str, default: u8| -> Result<u8> {
                    match v.get(name) {
                        None => Ok(default),
                        Some(c) => c
                            .as_u64()
                            .and_then(|n| u8::try_from(n).ok())
                            .ok_or_else(|| Error::TypeMismatch {
                                expected: "Color channel in 0..=255",
                                got: c.to_string(),
                            }),
                    }
                };
                Ok(Color::with_alpha(
                    channel("r", 0)?,
                    channel("g", 0)?,
                    channel("b", 0)?,
                    channel("a", 255)?,
                ))
            }
        }
    }

    /// The interface-default sentinel for `line_width` persists as a
    /// `{"type": "Default"}` dictionary.
    pub fn line_width_to_dict(line_width: Option<f64>) -> Value {
        match line_width {
            Some(w) => json!(w),
            None => json!({"type": "Default"}),
        }
    }

    pub fn line_width_from_dict(value: Option<&Value>) -> Option<f64> {
        value.and_then(Value::as_f64)
    }

    pub fn user_data_from_dict(value: &Value) -> IndexMap<String, Value> {
        match value.get("user_data") {
            Some(Value::Object(map)) => map
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            _ => IndexMap::new(),
        }
    }

    pub fn display_name_from_dict(value: &Value) -> Option<String> {
        value
            .get("display_name")
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Append `display_name` and `user_data` only when they are non-default.
    pub fn push_base_fields(
        base: &mut Map<String, Value>,
        display_name: &Option<String>,
        user_data: &IndexMap<String, Value>,
    ) {
        if let Some(name) = display_name {
            base.insert("display_name".to_string(), json!(name));
        }
        if !user_data.is_empty() {
            let map: Map<String, Value> = user_data
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            base.insert("user_data".to_string(), Value::Object(map));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_arrays() {
        assert_eq!(LineType::Dashed.dash_array(), Some(&[6.0, 6.0][..]));
        assert_eq!(LineType::Dotted.dash_array(), Some(&[2.0, 2.0][..]));
        assert_eq!(
            LineType::DashDot.dash_array(),
            Some(&[6.0, 6.0, 2.0, 6.0][..])
        );
        assert_eq!(LineType::Continuous.dash_array(), None);
    }

    #[test]
    fn unknown_variant_lists_accepted_set() {
        let err = "Solid".parse::<LineType>().unwrap_err();
        assert!(err.to_string().contains("Continuous, Dashed, Dotted, DashDot"));
        assert!(err.to_string().contains("Solid"));
    }

    #[test]
    fn mode_queries() {
        assert!(DisplayMode::Surface.has_fill());
        assert!(!DisplayMode::Surface.has_edges());
        assert!(DisplayMode::SurfaceWithEdges.has_edges());
        assert!(!DisplayMode::Wireframe.has_fill());
    }
}
