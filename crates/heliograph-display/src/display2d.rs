//! Decorated 2D geometry.
//!
//! Each wrapper pairs one 2D geometry value with the display style its kind
//! supports: a single color for points, vectors and rays; color plus line
//! weight and dash pattern for curves; color plus a display mode for areas.
//! Affine methods replace the wrapped geometry in place and take angles in
//! degrees.

use indexmap::IndexMap;
use serde_json::{Map, Value, json};

use heliograph_geom::{
    Arc2, Color, LineSegment2, Mesh2, Point2, Polygon2, Polyline2, Ray2, Vector2, color::BLACK,
    dict::geometry_to_value, geom,
};
use heliograph_svg::Element;

use crate::base::dict;
use crate::translate;
use crate::{DisplayMode, Error, LineType, Result};

macro_rules! base_methods {
    () => {
        pub fn duplicate(&self) -> Self {
            self.clone()
        }
    };
}

/// Push `"geometry"` plus the shared optional keys onto a wrapper dict.
fn finish_dict(
    mut base: Map<String, Value>,
    geometry: Value,
    display_name: &Option<String>,
    user_data: &IndexMap<String, Value>,
) -> Value {
    base.insert("geometry".to_string(), geometry);
    dict::push_base_fields(&mut base, display_name, user_data);
    Value::Object(base)
}

fn type_entry(name: &str) -> Map<String, Value> {
    let mut base = Map::new();
    base.insert("type".to_string(), json!(name));
    base
}

/// A vector decorated with a color. Vectors have a direction but no
/// position, so they carry no SVG form and no move method.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayVector2D {
    pub geometry: Vector2,
    pub color: Color,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl DisplayVector2D {
    pub fn new(geometry: Vector2, color: Option<Color>) -> Self {
        Self {
            geometry,
            color: color.unwrap_or(BLACK),
            display_name: None,
            user_data: IndexMap::new(),
        }
    }

    base_methods!();

    pub fn rotate(&mut self, angle: f64) {
        self.geometry = geom::rotate_vector2(self.geometry, angle.to_radians());
    }

    pub fn scale(&mut self, factor: f64) {
        self.geometry = self.geometry * factor;
    }

    pub fn reflect(&mut self, normal: Vector2) {
        self.geometry = geom::reflect_vector2(self.geometry, normal);
    }

    pub fn to_dict(&self) -> Value {
        let mut base = type_entry("DisplayVector2D");
        base.insert("color".to_string(), dict::color_to_dict(self.color));
        finish_dict(
            base,
            json!({"type": "Vector2D", "x": self.geometry.x, "y": self.geometry.y}),
            &self.display_name,
            &self.user_data,
        )
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "DisplayVector2D")?;
        let geo = value.get("geometry").ok_or(Error::TypeMismatch {
            expected: "DisplayVector2D",
            got: "a dictionary without a \"geometry\" key".to_string(),
        })?;
        let x = geo.get("x").and_then(Value::as_f64).unwrap_or(0.0);
        let y = geo.get("y").and_then(Value::as_f64).unwrap_or(0.0);
        let mut obj = Self::new(
            Vector2::new(x, y),
            Some(dict::color_from_dict(value.get("color"))?),
        );
        obj.display_name = dict::display_name_from_dict(value);
        obj.user_data = dict::user_data_from_dict(value);
        Ok(obj)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPoint2D {
    pub geometry: Point2,
    pub color: Color,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl DisplayPoint2D {
    pub fn new(geometry: Point2, color: Option<Color>) -> Self {
        Self {
            geometry,
            color: color.unwrap_or(BLACK),
            display_name: None,
            user_data: IndexMap::new(),
        }
    }

    base_methods!();

    pub fn translate(&mut self, moving_vec: Vector2) {
        self.geometry += moving_vec;
    }

    pub fn rotate(&mut self, angle: f64, origin: Point2) {
        self.geometry = geom::rotate_point2(self.geometry, angle.to_radians(), origin);
    }

    pub fn scale(&mut self, factor: f64, origin: Option<Point2>) {
        self.geometry = geom::scale_point2(self.geometry, factor, origin);
    }

    pub fn reflect(&mut self, normal: Vector2, origin: Point2) {
        self.geometry = geom::reflect_point2(self.geometry, normal, origin);
    }

    pub fn to_dict(&self) -> Value {
        let mut base = type_entry("DisplayPoint2D");
        base.insert("color".to_string(), dict::color_to_dict(self.color));
        finish_dict(
            base,
            geometry_to_value(&heliograph_geom::Geometry::Point2(self.geometry)),
            &self.display_name,
            &self.user_data,
        )
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "DisplayPoint2D")?;
        let geometry = match dict::geometry_field(value, "Point2D")? {
            heliograph_geom::Geometry::Point2(p) => p,
            other => {
                return Err(Error::TypeMismatch {
                    expected: "Point2D",
                    got: other.type_name().to_string(),
                });
            }
        };
        let mut obj = Self::new(geometry, Some(dict::color_from_dict(value.get("color"))?));
        obj.display_name = dict::display_name_from_dict(value);
        obj.user_data = dict::user_data_from_dict(value);
        Ok(obj)
    }

    pub fn to_svg(&self) -> Element {
        let mut circle = translate::point2_to_svg(self.geometry);
        circle.presentation.fill = Some(self.color.to_hex());
        if self.color.a != 255 {
            circle.presentation.opacity = Some(f64::from(self.color.a) / 255.0);
        }
        circle.into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRay2D {
    pub geometry: Ray2,
    pub color: Color,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl DisplayRay2D {
    pub fn new(geometry: Ray2, color: Option<Color>) -> Self {
        Self {
            geometry,
            color: color.unwrap_or(BLACK),
            display_name: None,
            user_data: IndexMap::new(),
        }
    }

    base_methods!();

    pub fn translate(&mut self, moving_vec: Vector2) {
        self.geometry = self.geometry.translate(moving_vec);
    }

    pub fn rotate(&mut self, angle: f64, origin: Point2) {
        self.geometry = self.geometry.rotate(angle.to_radians(), origin);
    }

    pub fn scale(&mut self, factor: f64, origin: Option<Point2>) {
        self.geometry = self.geometry.scale(factor, origin);
    }

    pub fn reflect(&mut self, normal: Vector2, origin: Point2) {
        self.geometry = self.geometry.reflect(normal, origin);
    }

    pub fn to_dict(&self) -> Value {
        let mut base = type_entry("DisplayRay2D");
        base.insert("color".to_string(), dict::color_to_dict(self.color));
        finish_dict(
            base,
            geometry_to_value(&heliograph_geom::Geometry::Ray2(self.geometry.clone())),
            &self.display_name,
            &self.user_data,
        )
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "DisplayRay2D")?;
        let geometry = match dict::geometry_field(value, "Ray2D")? {
            heliograph_geom::Geometry::Ray2(r) => r,
            other => {
                return Err(Error::TypeMismatch {
                    expected: "Ray2D",
                    got: other.type_name().to_string(),
                });
            }
        };
        let mut obj = Self::new(geometry, Some(dict::color_from_dict(value.get("color"))?));
        obj.display_name = dict::display_name_from_dict(value);
        obj.user_data = dict::user_data_from_dict(value);
        Ok(obj)
    }

    pub fn to_svg(&self) -> Element {
        let group = translate::ray2_to_svg(&self.geometry);
        style_ray_group(group, self.color).into()
    }
}

/// Recolor a ray group: the line's stroke and the arrowhead's fill take the
/// display color, translucency lands on the group.
pub(crate) fn style_ray_group(mut group: heliograph_svg::G, color: Color) -> heliograph_svg::G {
    for child in &mut group.children {
        match child {
            Element::Line(line) => line.presentation.stroke = Some(color.to_hex()),
            Element::Marker(marker) => {
                for head in &mut marker.children {
                    if let Element::Path(path) = head {
                        path.presentation.fill = Some(color.to_hex());
                    }
                }
            }
            _ => {}
        }
    }
    if color.a != 255 {
        group.presentation.opacity = Some(f64::from(color.a) / 255.0);
    }
    group
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayLineSegment2D {
    pub geometry: LineSegment2,
    pub color: Color,
    /// `None` keeps the rendering interface's default width.
    pub line_width: Option<f64>,
    pub line_type: LineType,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl DisplayLineSegment2D {
    pub fn new(geometry: LineSegment2, color: Option<Color>) -> Self {
        Self::with_style(geometry, color, None, LineType::Continuous)
    }

    pub fn with_style(
        geometry: LineSegment2,
        color: Option<Color>,
        line_width: Option<f64>,
        line_type: LineType,
    ) -> Self {
        Self {
            geometry,
            color: color.unwrap_or(BLACK),
            line_width,
            line_type,
            display_name: None,
            user_data: IndexMap::new(),
        }
    }

    base_methods!();

    pub fn translate(&mut self, moving_vec: Vector2) {
        self.geometry = self.geometry.translate(moving_vec);
    }

    pub fn rotate(&mut self, angle: f64, origin: Point2) {
        self.geometry = self.geometry.rotate(angle.to_radians(), origin);
    }

    pub fn scale(&mut self, factor: f64, origin: Option<Point2>) {
        self.geometry = self.geometry.scale(factor, origin);
    }

    pub fn reflect(&mut self, normal: Vector2, origin: Point2) {
        self.geometry = self.geometry.reflect(normal, origin);
    }

    pub fn to_dict(&self) -> Value {
        let mut base = type_entry("DisplayLineSegment2D");
        base.insert("color".to_string(), dict::color_to_dict(self.color));
        base.insert(
            "line_width".to_string(),
            dict::line_width_to_dict(self.line_width),
        );
        base.insert("line_type".to_string(), json!(self.line_type.as_str()));
        finish_dict(
            base,
            geometry_to_value(&heliograph_geom::Geometry::LineSegment2(
                self.geometry.clone(),
            )),
            &self.display_name,
            &self.user_data,
        )
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "DisplayLineSegment2D")?;
        let geometry = match dict::geometry_field(value, "LineSegment2D")? {
            heliograph_geom::Geometry::LineSegment2(s) => s,
            other => {
                return Err(Error::TypeMismatch {
                    expected: "LineSegment2D",
                    got: other.type_name().to_string(),
                });
            }
        };
        let mut obj = Self::with_style(
            geometry,
            Some(dict::color_from_dict(value.get("color"))?),
            dict::line_width_from_dict(value.get("line_width")),
            line_type_from_dict(value)?,
        );
        obj.display_name = dict::display_name_from_dict(value);
        obj.user_data = dict::user_data_from_dict(value);
        Ok(obj)
    }

    pub fn to_svg(&self) -> Element {
        let mut line = translate::line2_to_svg(&self.geometry);
        translate::style_stroke(
            &mut line.presentation,
            self.color,
            self.line_width,
            self.line_type,
        );
        line.into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPolyline2D {
    pub geometry: Polyline2,
    pub color: Color,
    pub line_width: Option<f64>,
    pub line_type: LineType,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl DisplayPolyline2D {
    pub fn new(geometry: Polyline2, color: Option<Color>) -> Self {
        Self::with_style(geometry, color, None, LineType::Continuous)
    }

    pub fn with_style(
        geometry: Polyline2,
        color: Option<Color>,
        line_width: Option<f64>,
        line_type: LineType,
    ) -> Self {
        Self {
            geometry,
            color: color.unwrap_or(BLACK),
            line_width,
            line_type,
            display_name: None,
            user_data: IndexMap::new(),
        }
    }

    base_methods!();

    pub fn translate(&mut self, moving_vec: Vector2) {
        self.geometry = self.geometry.translate(moving_vec);
    }

    pub fn rotate(&mut self, angle: f64, origin: Point2) {
        self.geometry = self.geometry.rotate(angle.to_radians(), origin);
    }

    pub fn scale(&mut self, factor: f64, origin: Option<Point2>) {
        self.geometry = self.geometry.scale(factor, origin);
    }

    pub fn reflect(&mut self, normal: Vector2, origin: Point2) {
        self.geometry = self.geometry.reflect(normal, origin);
    }

    pub fn to_dict(&self) -> Value {
        let mut base = type_entry("DisplayPolyline2D");
        base.insert("color".to_string(), dict::color_to_dict(self.color));
        base.insert(
            "line_width".to_string(),
            dict::line_width_to_dict(self.line_width),
        );
        base.insert("line_type".to_string(), json!(self.line_type.as_str()));
        finish_dict(
            base,
            geometry_to_value(&heliograph_geom::Geometry::Polyline2(self.geometry.clone())),
            &self.display_name,
            &self.user_data,
        )
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "DisplayPolyline2D")?;
        let geometry = match dict::geometry_field(value, "Polyline2D")? {
            heliograph_geom::Geometry::Polyline2(p) => p,
            other => {
                return Err(Error::TypeMismatch {
                    expected: "Polyline2D",
                    got: other.type_name().to_string(),
                });
            }
        };
        let mut obj = Self::with_style(
            geometry,
            Some(dict::color_from_dict(value.get("color"))?),
            dict::line_width_from_dict(value.get("line_width")),
            line_type_from_dict(value)?,
        );
        obj.display_name = dict::display_name_from_dict(value);
        obj.user_data = dict::user_data_from_dict(value);
        Ok(obj)
    }

    pub fn to_svg(&self) -> Element {
        let mut element = translate::polyline2_to_svg(&self.geometry);
        if let Some(presentation) = translate::presentation_mut(&mut element) {
            translate::style_stroke(presentation, self.color, self.line_width, self.line_type);
        }
        element
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayArc2D {
    pub geometry: Arc2,
    pub color: Color,
    pub line_width: Option<f64>,
    pub line_type: LineType,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl DisplayArc2D {
    pub fn new(geometry: Arc2, color: Option<Color>) -> Self {
        Self::with_style(geometry, color, None, LineType::Continuous)
    }

    pub fn with_style(
        geometry: Arc2,
        color: Option<Color>,
        line_width: Option<f64>,
        line_type: LineType,
    ) -> Self {
        Self {
            geometry,
            color: color.unwrap_or(BLACK),
            line_width,
            line_type,
            display_name: None,
            user_data: IndexMap::new(),
        }
    }

    base_methods!();

    pub fn translate(&mut self, moving_vec: Vector2) {
        self.geometry = self.geometry.translate(moving_vec);
    }

    pub fn rotate(&mut self, angle: f64, origin: Point2) {
        self.geometry = self.geometry.rotate(angle.to_radians(), origin);
    }

    pub fn scale(&mut self, factor: f64, origin: Option<Point2>) {
        self.geometry = self.geometry.scale(factor, origin);
    }

    pub fn to_dict(&self) -> Value {
        let mut base = type_entry("DisplayArc2D");
        base.insert("color".to_string(), dict::color_to_dict(self.color));
        base.insert(
            "line_width".to_string(),
            dict::line_width_to_dict(self.line_width),
        );
        base.insert("line_type".to_string(), json!(self.line_type.as_str()));
        finish_dict(
            base,
            geometry_to_value(&heliograph_geom::Geometry::Arc2(self.geometry.clone())),
            &self.display_name,
            &self.user_data,
        )
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "DisplayArc2D")?;
        let geometry = match dict::geometry_field(value, "Arc2D")? {
            heliograph_geom::Geometry::Arc2(a) => a,
            other => {
                return Err(Error::TypeMismatch {
                    expected: "Arc2D",
                    got: other.type_name().to_string(),
                });
            }
        };
        let mut obj = Self::with_style(
            geometry,
            Some(dict::color_from_dict(value.get("color"))?),
            dict::line_width_from_dict(value.get("line_width")),
            line_type_from_dict(value)?,
        );
        obj.display_name = dict::display_name_from_dict(value);
        obj.user_data = dict::user_data_from_dict(value);
        Ok(obj)
    }

    pub fn to_svg(&self) -> Element {
        let mut element = translate::arc2_to_svg(&self.geometry);
        if let Some(presentation) = translate::presentation_mut(&mut element) {
            translate::style_stroke(presentation, self.color, self.line_width, self.line_type);
        }
        element
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPolygon2D {
    pub geometry: Polygon2,
    pub color: Color,
    pub display_mode: DisplayMode,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl DisplayPolygon2D {
    pub fn new(geometry: Polygon2, color: Option<Color>) -> Self {
        Self::with_mode(geometry, color, DisplayMode::Surface)
    }

    pub fn with_mode(geometry: Polygon2, color: Option<Color>, display_mode: DisplayMode) -> Self {
        Self {
            geometry,
            color: color.unwrap_or(BLACK),
            display_mode,
            display_name: None,
            user_data: IndexMap::new(),
        }
    }

    base_methods!();

    pub fn translate(&mut self, moving_vec: Vector2) {
        self.geometry = self.geometry.translate(moving_vec);
    }

    pub fn rotate(&mut self, angle: f64, origin: Point2) {
        self.geometry = self.geometry.rotate(angle.to_radians(), origin);
    }

    pub fn scale(&mut self, factor: f64, origin: Option<Point2>) {
        self.geometry = self.geometry.scale(factor, origin);
    }

    pub fn reflect(&mut self, normal: Vector2, origin: Point2) {
        self.geometry = self.geometry.reflect(normal, origin);
    }

    pub fn to_dict(&self) -> Value {
        let mut base = type_entry("DisplayPolygon2D");
        base.insert("color".to_string(), dict::color_to_dict(self.color));
        base.insert(
            "display_mode".to_string(),
            json!(self.display_mode.as_str()),
        );
        finish_dict(
            base,
            geometry_to_value(&heliograph_geom::Geometry::Polygon2(self.geometry.clone())),
            &self.display_name,
            &self.user_data,
        )
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "DisplayPolygon2D")?;
        let geometry = match dict::geometry_field(value, "Polygon2D")? {
            heliograph_geom::Geometry::Polygon2(p) => p,
            other => {
                return Err(Error::TypeMismatch {
                    expected: "Polygon2D",
                    got: other.type_name().to_string(),
                });
            }
        };
        let mut obj = Self::with_mode(
            geometry,
            Some(dict::color_from_dict(value.get("color"))?),
            display_mode_from_dict(value)?,
        );
        obj.display_name = dict::display_name_from_dict(value);
        obj.user_data = dict::user_data_from_dict(value);
        Ok(obj)
    }

    pub fn to_svg(&self) -> Element {
        let mut polygon = translate::polygon2_to_svg(&self.geometry);
        match self.display_mode {
            DisplayMode::Points => {
                // Degrade to the boundary vertices as point markers.
                let mut group = heliograph_svg::G::new();
                for v in &self.geometry.vertices {
                    let mut circle = translate::point2_to_svg(*v);
                    circle.presentation.fill = Some(self.color.to_hex());
                    group.children.push(circle.into());
                }
                if self.color.a != 255 {
                    group.presentation.opacity = Some(f64::from(self.color.a) / 255.0);
                }
                return group.into();
            }
            DisplayMode::Wireframe => {
                polygon.presentation.stroke = Some(self.color.to_hex());
            }
            DisplayMode::Surface => {
                polygon.presentation.fill = Some(self.color.to_hex());
                polygon.presentation.stroke = None;
                polygon.presentation.stroke_width = Some(0.0);
            }
            DisplayMode::SurfaceWithEdges => {
                polygon.presentation.fill = Some(self.color.to_hex());
            }
        }
        if self.color.a != 255 {
            polygon.presentation.opacity = Some(f64::from(self.color.a) / 255.0);
        }
        polygon.into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayMesh2D {
    pub geometry: Mesh2,
    /// One color per face, one per vertex, or a single uniform color.
    pub colors: Vec<Color>,
    pub display_mode: DisplayMode,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl DisplayMesh2D {
    pub fn new(geometry: Mesh2, colors: Vec<Color>) -> Self {
        Self::with_mode(geometry, colors, DisplayMode::Surface)
    }

    pub fn with_mode(geometry: Mesh2, colors: Vec<Color>, display_mode: DisplayMode) -> Self {
        Self {
            geometry,
            colors,
            display_mode,
            display_name: None,
            user_data: IndexMap::new(),
        }
    }

    base_methods!();

    pub fn translate(&mut self, moving_vec: Vector2) {
        self.geometry = self.geometry.translate(moving_vec);
    }

    pub fn rotate(&mut self, angle: f64, origin: Point2) {
        self.geometry = self.geometry.rotate(angle.to_radians(), origin);
    }

    pub fn scale(&mut self, factor: f64, origin: Option<Point2>) {
        self.geometry = self.geometry.scale(factor, origin);
    }

    pub fn reflect(&mut self, normal: Vector2, origin: Point2) {
        self.geometry = self.geometry.reflect(normal, origin);
    }

    pub fn to_dict(&self) -> Value {
        let mut base = type_entry("DisplayMesh2D");
        base.insert(
            "colors".to_string(),
            Value::Array(self.colors.iter().map(|c| dict::color_to_dict(*c)).collect()),
        );
        base.insert(
            "display_mode".to_string(),
            json!(self.display_mode.as_str()),
        );
        finish_dict(
            base,
            geometry_to_value(&heliograph_geom::Geometry::Mesh2(self.geometry.clone())),
            &self.display_name,
            &self.user_data,
        )
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "DisplayMesh2D")?;
        let geometry = match dict::geometry_field(value, "Mesh2D")? {
            heliograph_geom::Geometry::Mesh2(m) => m,
            other => {
                return Err(Error::TypeMismatch {
                    expected: "Mesh2D",
                    got: other.type_name().to_string(),
                });
            }
        };
        let mut obj = Self::with_mode(
            geometry,
            colors_from_dict(value)?,
            display_mode_from_dict(value)?,
        );
        obj.display_name = dict::display_name_from_dict(value);
        obj.user_data = dict::user_data_from_dict(value);
        Ok(obj)
    }

    pub fn to_svg(&self) -> Element {
        translate::mesh2_to_svg(&self.geometry, self.display_mode, &self.colors).into()
    }
}

pub(crate) fn line_type_from_dict(value: &Value) -> Result<LineType> {
    match value.get("line_type").and_then(Value::as_str) {
        None => Ok(LineType::Continuous),
        Some(s) => s.parse(),
    }
}

pub(crate) fn display_mode_from_dict(value: &Value) -> Result<DisplayMode> {
    match value.get("display_mode").and_then(Value::as_str) {
        None => Ok(DisplayMode::Surface),
        Some(s) => s.parse(),
    }
}

pub(crate) fn colors_from_dict(value: &Value) -> Result<Vec<Color>> {
    match value.get("colors") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|c| dict::color_from_dict(Some(c)))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heliograph_geom::{point2, vector2};

    #[test]
    fn segment_dict_round_trip() {
        let seg = LineSegment2::from_end_points(point2(0.0, 0.0), point2(4.0, 2.0));
        let mut display = DisplayLineSegment2D::with_style(
            seg,
            Some(Color::with_alpha(255, 0, 0, 128)),
            Some(2.5),
            LineType::Dashed,
        );
        display.display_name = Some("edge".to_string());
        let dict = display.to_dict();
        let back = DisplayLineSegment2D::from_dict(&dict).unwrap();
        assert_eq!(back, display);
        assert_eq!(back.to_dict(), dict);
    }

    #[test]
    fn default_line_width_round_trips_as_sentinel() {
        let seg = LineSegment2::from_end_points(point2(0.0, 0.0), point2(1.0, 0.0));
        let display = DisplayLineSegment2D::new(seg, None);
        let dict = display.to_dict();
        assert_eq!(dict["line_width"]["type"], "Default");
        let back = DisplayLineSegment2D::from_dict(&dict).unwrap();
        assert_eq!(back.line_width, None);
    }

    #[test]
    fn wrong_type_discriminator_is_rejected() {
        let seg = LineSegment2::from_end_points(point2(0.0, 0.0), point2(1.0, 0.0));
        let dict = DisplayLineSegment2D::new(seg, None).to_dict();
        let err = DisplayArc2D::from_dict(&dict).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn colored_segment_svg_carries_stroke_and_dashes() {
        let seg = LineSegment2::from_end_points(point2(0.0, 0.0), point2(4.0, 2.0));
        let display = DisplayLineSegment2D::with_style(
            seg,
            Some(Color::new(255, 0, 0)),
            Some(2.0),
            LineType::Dotted,
        );
        let markup = display.to_svg().to_string();
        assert!(markup.contains("stroke=\"#ff0000\""));
        assert!(markup.contains("stroke-width=\"2\""));
        assert!(markup.contains("stroke-dasharray=\"2 2\""));
        assert!(markup.contains("y2=\"-2\""));
    }

    #[test]
    fn translucent_point_sets_opacity() {
        let display = DisplayPoint2D::new(point2(1.0, 3.0), Some(Color::with_alpha(0, 0, 255, 51)));
        let markup = display.to_svg().to_string();
        assert!(markup.contains("cy=\"-3\""));
        assert!(markup.contains("fill=\"#0000ff\""));
        assert!(markup.contains("opacity=\"0.2\""));
    }

    #[test]
    fn translating_geometry_shifts_svg_by_flipped_y() {
        let mut display =
            DisplayPoint2D::new(point2(1.0, 2.0), Some(Color::new(0, 0, 0)));
        display.translate(vector2(3.0, 4.0));
        let markup = display.to_svg().to_string();
        assert!(markup.contains("cx=\"4\""));
        assert!(markup.contains("cy=\"-6\""));
    }

    #[test]
    fn surface_polygon_fills_without_visible_edge() {
        let polygon = Polygon2::new(vec![
            point2(0.0, 0.0),
            point2(2.0, 0.0),
            point2(2.0, 2.0),
        ]);
        let display =
            DisplayPolygon2D::with_mode(polygon, Some(Color::new(0, 128, 0)), DisplayMode::Surface);
        let markup = display.to_svg().to_string();
        assert!(markup.contains("fill=\"#008000\""));
        assert!(markup.contains("stroke-width=\"0\""));
        assert!(!markup.contains("stroke=\"black\""));
    }

    #[test]
    fn ray_recolors_line_and_arrowhead() {
        let ray = Ray2::new(point2(0.0, 0.0), vector2(1.0, 0.0));
        let display = DisplayRay2D::new(ray, Some(Color::new(255, 0, 0)));
        let markup = display.to_svg().to_string();
        assert!(markup.contains("stroke=\"#ff0000\""));
        assert!(markup.contains("fill=\"#ff0000\""));
    }
}
