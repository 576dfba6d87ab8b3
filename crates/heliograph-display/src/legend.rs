//! Value-to-color classification and legend layout.
//!
//! [`LegendParameters`] holds everything a legend needs that does not depend
//! on the data: the color ramp, segmentation, text styling, and both the 3D
//! (world-space, on a base plane) and 2D (screen-space, `px` or `%` lengths)
//! layout inputs. [`Legend`] binds a value list to parameters and derives
//! the colors, label strings, and placements the composition layer draws.

use indexmap::IndexMap;
use serde_json::{Map, Value, json};

use heliograph_geom::{Color, Geometry, Mesh3, Plane, Point3, dict::geometry_to_value, point3};
use heliograph_svg::{Length, LengthUnit, NumberOrLength};

use crate::base::dict;
use crate::{Error, Result};

/// Default color ramp running from cool blues to hot reds.
pub const DEFAULT_COLORS: [Color; 10] = [
    Color::new(75, 107, 169),
    Color::new(115, 147, 202),
    Color::new(170, 200, 247),
    Color::new(193, 213, 208),
    Color::new(245, 239, 103),
    Color::new(252, 230, 74),
    Color::new(239, 156, 21),
    Color::new(234, 123, 0),
    Color::new(234, 74, 0),
    Color::new(234, 38, 0),
];

/// Configuration for a legend, independent of any particular value list.
///
/// The base plane and 2D origins carry default-tracking flags: composition
/// assigns concrete positions to defaulted legends so several legends in one
/// canvas never overlap, without the assignment counting as a user override.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendParameters {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub segment_count: usize,
    colors: Vec<Color>,
    pub continuous_legend: bool,
    pub title: String,
    pub ordinal_dictionary: Option<IndexMap<i64, String>>,
    pub decimal_count: usize,
    pub vertical: bool,
    pub font: String,
    pub base_plane: Plane,
    pub is_base_plane_default: bool,
    pub segment_height: f64,
    pub segment_width: f64,
    pub text_height: f64,
    pub origin_x: Length,
    pub is_origin_x_default: bool,
    pub origin_y: Length,
    pub is_origin_y_default: bool,
    pub segment_height_2d: Length,
    pub segment_width_2d: Length,
    pub text_height_2d: Length,
}

impl Default for LegendParameters {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            segment_count: 11,
            colors: DEFAULT_COLORS.to_vec(),
            continuous_legend: false,
            title: String::new(),
            ordinal_dictionary: None,
            decimal_count: 2,
            vertical: true,
            font: "Arial".to_string(),
            base_plane: Plane::world_xy(point3(0.0, 0.0, 0.0)),
            is_base_plane_default: true,
            segment_height: 1.0,
            segment_width: 0.5,
            text_height: 1.0 / 3.0,
            origin_x: Length::new(10.0, LengthUnit::Px),
            is_origin_x_default: true,
            origin_y: Length::new(50.0, LengthUnit::Px),
            is_origin_y_default: true,
            segment_height_2d: Length::new(25.0, LengthUnit::Px),
            segment_width_2d: Length::new(36.0, LengthUnit::Px),
            text_height_2d: Length::new(12.0, LengthUnit::Px),
        }
    }
}

impl LegendParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// A ramp needs at least two colors to interpolate between.
    pub fn set_colors(&mut self, colors: Vec<Color>) -> Result<()> {
        if colors.len() < 2 {
            return Err(Error::LegendColorCount { got: colors.len() });
        }
        self.colors = colors;
        Ok(())
    }

    pub fn set_base_plane(&mut self, plane: Plane) {
        self.base_plane = plane;
        self.is_base_plane_default = false;
    }

    pub fn set_origin_x(&mut self, origin: Length) {
        self.origin_x = origin;
        self.is_origin_x_default = false;
    }

    pub fn set_origin_y(&mut self, origin: Length) {
        self.origin_y = origin;
        self.is_origin_y_default = false;
    }

    pub fn to_dict(&self) -> Value {
        let mut base = Map::new();
        base.insert("type".to_string(), json!("LegendParameters"));
        base.insert("min".to_string(), optional_number(self.min));
        base.insert("max".to_string(), optional_number(self.max));
        base.insert("segment_count".to_string(), json!(self.segment_count));
        base.insert(
            "colors".to_string(),
            Value::Array(self.colors.iter().map(|c| dict::color_to_dict(*c)).collect()),
        );
        base.insert(
            "continuous_legend".to_string(),
            json!(self.continuous_legend),
        );
        if !self.title.is_empty() {
            base.insert("title".to_string(), json!(self.title));
        }
        if let Some(ordinal) = &self.ordinal_dictionary {
            let map: Map<String, Value> = ordinal
                .iter()
                .map(|(k, v)| (k.to_string(), json!(v)))
                .collect();
            base.insert("ordinal_dictionary".to_string(), Value::Object(map));
        }
        base.insert("decimal_count".to_string(), json!(self.decimal_count));
        base.insert("vertical".to_string(), json!(self.vertical));
        base.insert("font".to_string(), json!(self.font));
        base.insert(
            "base_plane".to_string(),
            if self.is_base_plane_default {
                json!({"type": "Default"})
            } else {
                geometry_to_value(&Geometry::Plane(self.base_plane.clone()))
            },
        );
        base.insert("segment_height".to_string(), json!(self.segment_height));
        base.insert("segment_width".to_string(), json!(self.segment_width));
        base.insert("text_height".to_string(), json!(self.text_height));
        base.insert(
            "origin_x".to_string(),
            if self.is_origin_x_default {
                json!({"type": "Default"})
            } else {
                json!(self.origin_x.to_string())
            },
        );
        base.insert(
            "origin_y".to_string(),
            if self.is_origin_y_default {
                json!({"type": "Default"})
            } else {
                json!(self.origin_y.to_string())
            },
        );
        base.insert(
            "segment_height_2d".to_string(),
            json!(self.segment_height_2d.to_string()),
        );
        base.insert(
            "segment_width_2d".to_string(),
            json!(self.segment_width_2d.to_string()),
        );
        base.insert(
            "text_height_2d".to_string(),
            json!(self.text_height_2d.to_string()),
        );
        Value::Object(base)
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "LegendParameters")?;
        let mut params = Self::default();
        params.min = value.get("min").and_then(Value::as_f64);
        params.max = value.get("max").and_then(Value::as_f64);
        if let Some(count) = value.get("segment_count").and_then(Value::as_u64) {
            params.segment_count = count as usize;
        }
        if let Some(Value::Array(items)) = value.get("colors") {
            let colors = items
                .iter()
                .map(|c| dict::color_from_dict(Some(c)))
                .collect::<Result<Vec<Color>>>()?;
            params.set_colors(colors)?;
        }
        if let Some(c) = value.get("continuous_legend").and_then(Value::as_bool) {
            params.continuous_legend = c;
        }
        if let Some(title) = value.get("title").and_then(Value::as_str) {
            params.title = title.to_string();
        }
        if let Some(Value::Object(map)) = value.get("ordinal_dictionary") {
            let mut ordinal = IndexMap::new();
            for (k, v) in map {
                let key = k.parse::<i64>().map_err(|_| Error::TypeMismatch {
                    expected: "integer ordinal key",
                    got: k.clone(),
                })?;
                let text = v.as_str().unwrap_or_default().to_string();
                ordinal.insert(key, text);
            }
            params.ordinal_dictionary = Some(ordinal);
        }
        if let Some(d) = value.get("decimal_count").and_then(Value::as_u64) {
            params.decimal_count = d as usize;
        }
        if let Some(v) = value.get("vertical").and_then(Value::as_bool) {
            params.vertical = v;
        }
        if let Some(font) = value.get("font").and_then(Value::as_str) {
            params.font = font.to_string();
        }
        if let Some(plane) = value.get("base_plane") {
            if plane.get("type").and_then(Value::as_str) == Some("Plane") {
                match heliograph_geom::dict::geometry_from_value(plane)? {
                    Geometry::Plane(p) => params.set_base_plane(p),
                    _ => {}
                }
            }
        }
        if let Some(h) = value.get("segment_height").and_then(Value::as_f64) {
            params.segment_height = h;
        }
        if let Some(w) = value.get("segment_width").and_then(Value::as_f64) {
            params.segment_width = w;
        }
        if let Some(t) = value.get("text_height").and_then(Value::as_f64) {
            params.text_height = t;
        }
        if let Some(x) = value.get("origin_x").and_then(Value::as_str) {
            params.set_origin_x(x.parse::<Length>()?);
        }
        if let Some(y) = value.get("origin_y").and_then(Value::as_str) {
            params.set_origin_y(y.parse::<Length>()?);
        }
        if let Some(h) = value.get("segment_height_2d").and_then(Value::as_str) {
            params.segment_height_2d = h.parse::<Length>()?;
        }
        if let Some(w) = value.get("segment_width_2d").and_then(Value::as_str) {
            params.segment_width_2d = w.parse::<Length>()?;
        }
        if let Some(t) = value.get("text_height_2d").and_then(Value::as_str) {
            params.text_height_2d = t.parse::<Length>()?;
        }
        Ok(params)
    }
}

fn optional_number(value: Option<f64>) -> Value {
    match value {
        Some(v) => json!(v),
        None => json!({"type": "Default"}),
    }
}

/// Screen-space legend dimensions, resolved to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelDims {
    pub origin_x: f64,
    pub origin_y: f64,
    pub segment_height: f64,
    pub segment_width: f64,
    pub text_height: f64,
}

/// A value list bound to legend parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub values: Vec<f64>,
    pub parameters: LegendParameters,
}

impl Legend {
    pub fn new(values: Vec<f64>, parameters: LegendParameters) -> Self {
        Self { values, parameters }
    }

    /// Lower bound of the color mapping, from the parameters or the data.
    pub fn min(&self) -> f64 {
        self.parameters.min.unwrap_or_else(|| {
            self.values
                .iter()
                .copied()
                .fold(f64::INFINITY, f64::min)
        })
    }

    pub fn max(&self) -> f64 {
        self.parameters.max.unwrap_or_else(|| {
            self.values
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max)
        })
    }

    /// Interpolate one color along the ramp for a normalized position.
    fn color_at(&self, t: f64) -> Color {
        let colors = self.parameters.colors();
        let t = t.clamp(0.0, 1.0);
        let position = t * (colors.len() - 1) as f64;
        let i = (position.floor() as usize).min(colors.len() - 2);
        colors[i].lerp(colors[i + 1], position - i as f64)
    }

    /// One color per value, linearly interpolated along the ramp.
    pub fn value_colors(&self) -> Vec<Color> {
        let (min, max) = (self.min(), self.max());
        let span = max - min;
        self.values
            .iter()
            .map(|&v| {
                let t = if span == 0.0 { 0.0 } else { (v - min) / span };
                self.color_at(t)
            })
            .collect()
    }

    /// One color per legend segment, evenly sampled along the ramp.
    pub fn segment_colors(&self) -> Vec<Color> {
        let count = self.parameters.segment_count;
        if count < 2 {
            return vec![self.color_at(0.0)];
        }
        (0..count)
            .map(|i| self.color_at(i as f64 / (count - 1) as f64))
            .collect()
    }

    /// The value each legend segment denotes, evenly spaced over min..max.
    pub fn segment_values(&self) -> Vec<f64> {
        let count = self.parameters.segment_count;
        let (min, max) = (self.min(), self.max());
        if count < 2 {
            return vec![min];
        }
        (0..count)
            .map(|i| min + (max - min) * i as f64 / (count - 1) as f64)
            .collect()
    }

    /// Formatted label per segment: ordinal text when configured, otherwise
    /// the value at the configured decimal count.
    pub fn segment_text(&self) -> Vec<String> {
        let decimals = self.parameters.decimal_count;
        self.segment_values()
            .iter()
            .map(|&v| match &self.parameters.ordinal_dictionary {
                Some(ordinal) => ordinal
                    .get(&(v.round() as i64))
                    .cloned()
                    .unwrap_or_default(),
                None => format!("{v:.decimals$}"),
            })
            .collect()
    }

    /// The colored segment bar as a mesh on the base plane, one quad per
    /// segment, growing along the plane's Y axis when vertical.
    pub fn segment_mesh(&self) -> Mesh3 {
        let params = &self.parameters;
        let count = params.segment_count;
        let (sw, sh) = (params.segment_width, params.segment_height);
        let mut vertices = Vec::with_capacity((count + 1) * 2);
        let mut faces = Vec::with_capacity(count);
        for i in 0..=count {
            if params.vertical {
                let y = i as f64 * sh;
                vertices.push(self.base_point(0.0, y));
                vertices.push(self.base_point(sw, y));
            } else {
                let x = i as f64 * sw;
                vertices.push(self.base_point(x, 0.0));
                vertices.push(self.base_point(x, sh));
            }
        }
        for i in 0..count {
            let a = i * 2;
            faces.push(vec![a, a + 1, a + 3, a + 2]);
        }
        // The vertex grid guarantees every index is in range.
        Mesh3 { vertices, faces }
    }

    /// Anchor point per segment label on the base plane: left of a vertical
    /// bar, below a horizontal one.
    pub fn segment_text_location_3d(&self) -> Vec<Point3> {
        let params = &self.parameters;
        let offset = 0.25 * params.text_height;
        (0..params.segment_count)
            .map(|i| {
                if params.vertical {
                    self.base_point(params.segment_width + offset, i as f64 * params.segment_height)
                } else {
                    self.base_point(
                        i as f64 * params.segment_width,
                        -params.text_height - offset,
                    )
                }
            })
            .collect()
    }

    /// Anchor point for the legend title, above the bar.
    pub fn title_location_3d(&self) -> Point3 {
        let params = &self.parameters;
        if params.vertical {
            self.base_point(
                0.0,
                params.segment_count as f64 * params.segment_height + 0.5 * params.text_height,
            )
        } else {
            self.base_point(0.0, params.segment_height + 0.5 * params.text_height)
        }
    }

    fn base_point(&self, u: f64, v: f64) -> Point3 {
        let plane = &self.parameters.base_plane;
        plane.o + plane.x * u + plane.y() * v
    }

    /// Resolve the 2D layout lengths against a canvas size in pixels.
    pub fn pixel_dims_2d(&self, width: f64, height: f64) -> PixelDims {
        let params = &self.parameters;
        PixelDims {
            origin_x: resolve(params.origin_x, width),
            origin_y: resolve(params.origin_y, height),
            segment_height: resolve(params.segment_height_2d, height),
            segment_width: resolve(params.segment_width_2d, width),
            text_height: resolve(params.text_height_2d, height),
        }
    }

    /// Screen position of the 2D legend title.
    pub fn title_location_2d(&self, width: f64, height: f64) -> (f64, f64) {
        let dims = self.pixel_dims_2d(width, height);
        (dims.origin_x, dims.origin_y - dims.text_height)
    }

    /// Screen position per 2D segment label: right of a vertical bar running
    /// bottom-up, below a horizontal bar running left-to-right.
    pub fn segment_text_location_2d(&self, width: f64, height: f64) -> Vec<(f64, f64)> {
        let params = &self.parameters;
        let dims = self.pixel_dims_2d(width, height);
        let count = params.segment_count;
        let bar_segments = if params.continuous_legend {
            count.saturating_sub(1)
        } else {
            count
        };
        let bar_height = dims.segment_height * bar_segments as f64;
        (0..count)
            .map(|i| {
                if params.vertical {
                    // Values ascend bottom-up along a vertical bar.
                    let x = dims.origin_x + dims.segment_width + 0.25 * dims.text_height;
                    let y = dims.origin_y + bar_height - dims.segment_height * i as f64;
                    (x, y)
                } else {
                    let x = dims.origin_x + dims.segment_width * i as f64;
                    let y = dims.origin_y + dims.segment_height + 0.25 * dims.text_height;
                    (x, y)
                }
            })
            .collect()
    }
}

fn resolve(length: Length, extent: f64) -> f64 {
    NumberOrLength::Length(length).resolve(extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_colors_span_the_ramp() {
        let legend = Legend::new(vec![0.0, 5.0, 10.0], LegendParameters::default());
        let colors = legend.value_colors();
        assert_eq!(colors[0], DEFAULT_COLORS[0]);
        assert_eq!(colors[2], DEFAULT_COLORS[9]);
    }

    #[test]
    fn constant_values_take_the_ramp_start() {
        let legend = Legend::new(vec![3.0, 3.0], LegendParameters::default());
        assert_eq!(legend.value_colors(), vec![DEFAULT_COLORS[0]; 2]);
    }

    #[test]
    fn parameter_bounds_override_data_bounds() {
        let mut params = LegendParameters::default();
        params.min = Some(0.0);
        params.max = Some(100.0);
        let legend = Legend::new(vec![50.0], params);
        assert_eq!(legend.min(), 0.0);
        assert_eq!(legend.max(), 100.0);
    }

    #[test]
    fn segment_text_formats_to_decimal_count() {
        let mut params = LegendParameters::default();
        params.segment_count = 3;
        params.decimal_count = 1;
        let legend = Legend::new(vec![0.0, 1.0], params);
        assert_eq!(legend.segment_text(), vec!["0.0", "0.5", "1.0"]);
    }

    #[test]
    fn ordinal_dictionary_replaces_numbers() {
        let mut params = LegendParameters::default();
        params.segment_count = 2;
        let mut ordinal = IndexMap::new();
        ordinal.insert(0, "Low".to_string());
        ordinal.insert(1, "High".to_string());
        params.ordinal_dictionary = Some(ordinal);
        let legend = Legend::new(vec![0.0, 1.0], params);
        assert_eq!(legend.segment_text(), vec!["Low", "High"]);
    }

    #[test]
    fn ramp_requires_two_colors() {
        let mut params = LegendParameters::default();
        let err = params.set_colors(vec![Color::new(0, 0, 0)]).unwrap_err();
        assert!(matches!(err, Error::LegendColorCount { got: 1 }));
    }

    #[test]
    fn percent_lengths_resolve_against_canvas() {
        let mut params = LegendParameters::default();
        params.set_origin_x(Length::percent(50.0));
        params.segment_height_2d = Length::percent(10.0);
        let legend = Legend::new(vec![0.0, 1.0], params);
        let dims = legend.pixel_dims_2d(800.0, 600.0);
        assert_eq!(dims.origin_x, 400.0);
        assert_eq!(dims.segment_height, 60.0);
    }

    #[test]
    fn vertical_segment_mesh_has_one_quad_per_segment() {
        let mut params = LegendParameters::default();
        params.segment_count = 4;
        let legend = Legend::new(vec![0.0, 1.0], params);
        let mesh = legend.segment_mesh();
        assert_eq!(mesh.faces.len(), 4);
        assert_eq!(mesh.vertices.len(), 10);
        assert_eq!(mesh.vertices[0], point3(0.0, 0.0, 0.0));
        assert_eq!(mesh.vertices[9], point3(0.5, 4.0, 0.0));
    }

    #[test]
    fn parameter_dict_round_trip_keeps_default_flags() {
        let mut params = LegendParameters::default();
        params.title = "UDI".to_string();
        params.set_origin_x(Length::percent(5.0));
        let dict = params.to_dict();
        assert_eq!(dict["origin_y"]["type"], "Default");
        let back = LegendParameters::from_dict(&dict).unwrap();
        assert_eq!(back, params);
        assert!(back.is_origin_y_default);
        assert!(!back.is_origin_x_default);
    }
}
