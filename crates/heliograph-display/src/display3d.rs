//! Decorated 3D geometry.
//!
//! The 3D wrappers mirror their 2D counterparts plus the solid kinds (face,
//! polyface, sphere, cone, cylinder) and planar text. Solids degrade to 2D
//! silhouettes on output; planes and vectors carry style for other interfaces
//! but have no SVG form.

use indexmap::IndexMap;
use serde_json::{Map, Value, json};

use heliograph_geom::{
    Arc3, Color, Cone, Cylinder, Face3, Geometry, LineSegment3, Mesh3, Plane, Point3, Polyface3,
    Polyline3, Ray3, Sphere, Vector3, color::BLACK, dict::geometry_to_value, geom,
};
use heliograph_svg::{DominantBaseline, Element, G, Text, TextAnchor, Transform};

use crate::base::dict;
use crate::display2d::{colors_from_dict, display_mode_from_dict, line_type_from_dict};
use crate::translate;
use crate::{DisplayMode, Error, HorizontalAlignment, LineType, Result, VerticalAlignment};

/// Extra baseline spacing between the lines of a multi-line text block,
/// as a multiple of the text height.
const LINE_SPACING: f64 = 1.25;

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

/// Replace the stroke of every drawable element in a tree.
fn stroke_tree(element: &mut Element, hex: &str) {
    if let Some(p) = translate::presentation_mut(element) {
        p.stroke = Some(hex.to_string());
    }
    if let Element::G(g) = element {
        for child in &mut g.children {
            stroke_tree(child, hex);
        }
    }
}

/// Replace the fill of every element in a tree that already carries one.
fn refill_tree(element: &mut Element, hex: &str) {
    if let Some(p) = translate::presentation_mut(element) {
        if matches!(&p.fill, Some(f) if f != "none") {
            p.fill = Some(hex.to_string());
        }
    }
    if let Element::G(g) = element {
        for child in &mut g.children {
            refill_tree(child, hex);
        }
    }
}

/// Color policy shared by the solid kinds: wireframe recolors every edge,
/// filled modes recolor the filled silhouette, and translucency lands on the
/// group as a whole.
fn style_solid_group(mut group: G, color: Color, mode: DisplayMode) -> G {
    if !color.is_black() {
        let hex = color.to_hex();
        if mode == DisplayMode::Wireframe {
            for child in &mut group.children {
                stroke_tree(child, &hex);
            }
        } else {
            for child in &mut group.children {
                refill_tree(child, &hex);
            }
        }
    }
    if color.a != 255 {
        group.presentation.opacity = Some(f64::from(color.a) / 255.0);
    }
    group
}

macro_rules! affine3_methods {
    () => {
        pub fn duplicate(&self) -> Self {
            self.clone()
        }

        pub fn translate(&mut self, moving_vec: Vector3) {
            self.geometry = self.geometry.translate(moving_vec);
        }

        pub fn rotate(&mut self, axis: Vector3, angle: f64, origin: Point3) {
            self.geometry = self.geometry.rotate(axis, angle.to_radians(), origin);
        }

        pub fn rotate_xy(&mut self, angle: f64, origin: Point3) {
            self.geometry = self.geometry.rotate_xy(angle.to_radians(), origin);
        }

        pub fn scale(&mut self, factor: f64, origin: Option<Point3>) {
            self.geometry = self.geometry.scale(factor, origin);
        }

        pub fn reflect(&mut self, normal: Vector3, origin: Point3) {
            self.geometry = self.geometry.reflect(normal, origin);
        }
    };
}

/// Decode the `"geometry"` key into one expected kind.
macro_rules! expect_geometry {
    ($value:expr, $variant:ident, $name:literal) => {
        match dict::geometry_field($value, $name)? {
            Geometry::$variant(g) => g,
            other => {
                return Err(Error::TypeMismatch {
                    expected: $name,
                    got: other.type_name().to_string(),
                });
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayVector3D {
    pub geometry: Vector3,
    pub color: Color,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl DisplayVector3D {
    pub fn new(geometry: Vector3, color: Option<Color>) -> Self {
        Self {
            geometry,
            color: color.unwrap_or(BLACK),
            display_name: None,
            user_data: IndexMap::new(),
        }
    }

    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub fn rotate(&mut self, axis: Vector3, angle: f64) {
        self.geometry = geom::rotate_vector3(self.geometry, axis, angle.to_radians());
    }

    pub fn rotate_xy(&mut self, angle: f64) {
        self.geometry = geom::rotate_xy_vector3(self.geometry, angle.to_radians());
    }

    pub fn scale(&mut self, factor: f64) {
        self.geometry = self.geometry * factor;
    }

    pub fn reflect(&mut self, normal: Vector3) {
        self.geometry = geom::reflect_vector3(self.geometry, normal);
    }

    pub fn to_dict(&self) -> Value {
        let mut base = type_entry("DisplayVector3D");
        base.insert("color".to_string(), dict::color_to_dict(self.color));
        finish_dict(
            base,
            json!({
                "type": "Vector3D",
                "x": self.geometry.x,
                "y": self.geometry.y,
                "z": self.geometry.z,
            }),
            &self.display_name,
            &self.user_data,
        )
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "DisplayVector3D")?;
        let geo = value.get("geometry").ok_or(Error::TypeMismatch {
            expected: "DisplayVector3D",
            got: "a dictionary without a \"geometry\" key".to_string(),
        })?;
        let x = geo.get("x").and_then(Value::as_f64).unwrap_or(0.0);
        let y = geo.get("y").and_then(Value::as_f64).unwrap_or(0.0);
        let z = geo.get("z").and_then(Value::as_f64).unwrap_or(0.0);
        let mut obj = Self::new(
            Vector3::new(x, y, z),
            Some(dict::color_from_dict(value.get("color"))?),
        );
        obj.display_name = dict::display_name_from_dict(value);
        obj.user_data = dict::user_data_from_dict(value);
        Ok(obj)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPoint3D {
    pub geometry: Point3,
    pub color: Color,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl DisplayPoint3D {
    pub fn new(geometry: Point3, color: Option<Color>) -> Self {
        Self {
            geometry,
            color: color.unwrap_or(BLACK),
            display_name: None,
            user_data: IndexMap::new(),
        }
    }

    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub fn translate(&mut self, moving_vec: Vector3) {
        self.geometry += moving_vec;
    }

    pub fn rotate(&mut self, axis: Vector3, angle: f64, origin: Point3) {
        self.geometry = geom::rotate_point3(self.geometry, axis, angle.to_radians(), origin);
    }

    pub fn rotate_xy(&mut self, angle: f64, origin: Point3) {
        self.geometry = geom::rotate_xy_point3(self.geometry, angle.to_radians(), origin);
    }

    pub fn scale(&mut self, factor: f64, origin: Option<Point3>) {
        self.geometry = geom::scale_point3(self.geometry, factor, origin);
    }

    pub fn reflect(&mut self, normal: Vector3, origin: Point3) {
        self.geometry = geom::reflect_point3(self.geometry, normal, origin);
    }

    pub fn to_dict(&self) -> Value {
        let mut base = type_entry("DisplayPoint3D");
        base.insert("color".to_string(), dict::color_to_dict(self.color));
        finish_dict(
            base,
            geometry_to_value(&Geometry::Point3(self.geometry)),
            &self.display_name,
            &self.user_data,
        )
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "DisplayPoint3D")?;
        let geometry = expect_geometry!(value, Point3, "Point3D");
        let mut obj = Self::new(geometry, Some(dict::color_from_dict(value.get("color"))?));
        obj.display_name = dict::display_name_from_dict(value);
        obj.user_data = dict::user_data_from_dict(value);
        Ok(obj)
    }

    pub fn to_svg(&self) -> Element {
        let mut circle = translate::point3_to_svg(self.geometry);
        circle.presentation.fill = Some(self.color.to_hex());
        if self.color.a != 255 {
            circle.presentation.opacity = Some(f64::from(self.color.a) / 255.0);
        }
        circle.into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRay3D {
    pub geometry: Ray3,
    pub color: Color,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl DisplayRay3D {
    pub fn new(geometry: Ray3, color: Option<Color>) -> Self {
        Self {
            geometry,
            color: color.unwrap_or(BLACK),
            display_name: None,
            user_data: IndexMap::new(),
        }
    }

    affine3_methods!();

    pub fn to_dict(&self) -> Value {
        let mut base = type_entry("DisplayRay3D");
        base.insert("color".to_string(), dict::color_to_dict(self.color));
        finish_dict(
            base,
            geometry_to_value(&Geometry::Ray3(self.geometry.clone())),
            &self.display_name,
            &self.user_data,
        )
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "DisplayRay3D")?;
        let geometry = expect_geometry!(value, Ray3, "Ray3D");
        let mut obj = Self::new(geometry, Some(dict::color_from_dict(value.get("color"))?));
        obj.display_name = dict::display_name_from_dict(value);
        obj.user_data = dict::user_data_from_dict(value);
        Ok(obj)
    }

    pub fn to_svg(&self) -> Element {
        let group = translate::ray3_to_svg(&self.geometry);
        crate::display2d::style_ray_group(group, self.color).into()
    }
}

/// A plane decorated for interfaces that can draw construction planes. It has
/// no SVG form.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPlane {
    pub geometry: Plane,
    pub color: Color,
    pub show_axes: bool,
    pub show_grid: bool,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl DisplayPlane {
    pub fn new(geometry: Plane, color: Option<Color>) -> Self {
        Self {
            geometry,
            color: color.unwrap_or(BLACK),
            show_axes: false,
            show_grid: false,
            display_name: None,
            user_data: IndexMap::new(),
        }
    }

    affine3_methods!();

    pub fn to_dict(&self) -> Value {
        let mut base = type_entry("DisplayPlane");
        base.insert("color".to_string(), dict::color_to_dict(self.color));
        base.insert("show_axes".to_string(), json!(self.show_axes));
        base.insert("show_grid".to_string(), json!(self.show_grid));
        finish_dict(
            base,
            geometry_to_value(&Geometry::Plane(self.geometry.clone())),
            &self.display_name,
            &self.user_data,
        )
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "DisplayPlane")?;
        let geometry = expect_geometry!(value, Plane, "Plane");
        let mut obj = Self::new(geometry, Some(dict::color_from_dict(value.get("color"))?));
        obj.show_axes = value
            .get("show_axes")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        obj.show_grid = value
            .get("show_grid")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        obj.display_name = dict::display_name_from_dict(value);
        obj.user_data = dict::user_data_from_dict(value);
        Ok(obj)
    }
}

macro_rules! curve3_wrapper {
    ($name:ident, $geometry:ty, $variant:ident, $type_name:literal, $geo_name:literal, $to_svg:path) => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub geometry: $geometry,
            pub color: Color,
            /// `None` keeps the rendering interface's default width.
            pub line_width: Option<f64>,
            pub line_type: LineType,
            pub display_name: Option<String>,
            pub user_data: IndexMap<String, Value>,
        }

        impl $name {
            pub fn new(geometry: $geometry, color: Option<Color>) -> Self {
                Self::with_style(geometry, color, None, LineType::Continuous)
            }

            pub fn with_style(
                geometry: $geometry,
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

            affine3_methods!();

            pub fn to_dict(&self) -> Value {
                let mut base = type_entry($type_name);
                base.insert("color".to_string(), dict::color_to_dict(self.color));
                base.insert(
                    "line_width".to_string(),
                    dict::line_width_to_dict(self.line_width),
                );
                base.insert("line_type".to_string(), json!(self.line_type.as_str()));
                finish_dict(
                    base,
                    geometry_to_value(&Geometry::$variant(self.geometry.clone())),
                    &self.display_name,
                    &self.user_data,
                )
            }

            pub fn from_dict(value: &Value) -> Result<Self> {
                dict::check_type(value, $type_name)?;
                let geometry = expect_geometry!(value, $variant, $geo_name);
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
                let mut element: Element = $to_svg(&self.geometry).into();
                if let Some(presentation) = translate::presentation_mut(&mut element) {
                    translate::style_stroke(
                        presentation,
                        self.color,
                        self.line_width,
                        self.line_type,
                    );
                }
                element
            }
        }
    };
}

curve3_wrapper!(
    DisplayLineSegment3D,
    LineSegment3,
    LineSegment3,
    "DisplayLineSegment3D",
    "LineSegment3D",
    translate::line3_to_svg
);
curve3_wrapper!(
    DisplayPolyline3D,
    Polyline3,
    Polyline3,
    "DisplayPolyline3D",
    "Polyline3D",
    polyline3_element
);
curve3_wrapper!(
    DisplayArc3D,
    Arc3,
    Arc3,
    "DisplayArc3D",
    "Arc3D",
    translate::arc3_to_svg
);

fn polyline3_element(polyline: &Polyline3) -> Element {
    translate::polyline2_to_svg(&heliograph_geom::geometry3d::polyline3_to_2d(polyline))
}

macro_rules! solid_wrapper {
    ($name:ident, $geometry:ty, $variant:ident, $type_name:literal, $geo_name:literal, $to_svg:path) => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub geometry: $geometry,
            pub color: Color,
            pub display_mode: DisplayMode,
            pub display_name: Option<String>,
            pub user_data: IndexMap<String, Value>,
        }

        impl $name {
            pub fn new(geometry: $geometry, color: Option<Color>) -> Self {
                Self::with_mode(geometry, color, DisplayMode::Surface)
            }

            pub fn with_mode(
                geometry: $geometry,
                color: Option<Color>,
                display_mode: DisplayMode,
            ) -> Self {
                Self {
                    geometry,
                    color: color.unwrap_or(BLACK),
                    display_mode,
                    display_name: None,
                    user_data: IndexMap::new(),
                }
            }

            affine3_methods!();

            pub fn to_dict(&self) -> Value {
                let mut base = type_entry($type_name);
                base.insert("color".to_string(), dict::color_to_dict(self.color));
                base.insert(
                    "display_mode".to_string(),
                    json!(self.display_mode.as_str()),
                );
                finish_dict(
                    base,
                    geometry_to_value(&Geometry::$variant(self.geometry.clone())),
                    &self.display_name,
                    &self.user_data,
                )
            }

            pub fn from_dict(value: &Value) -> Result<Self> {
                dict::check_type(value, $type_name)?;
                let geometry = expect_geometry!(value, $variant, $geo_name);
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
                let group = $to_svg(&self.geometry, self.display_mode);
                style_solid_group(group, self.color, self.display_mode).into()
            }
        }
    };
}

solid_wrapper!(
    DisplayFace3D,
    Face3,
    Face3,
    "DisplayFace3D",
    "Face3D",
    translate::face3_to_svg
);
solid_wrapper!(
    DisplayPolyface3D,
    Polyface3,
    Polyface3,
    "DisplayPolyface3D",
    "Polyface3D",
    translate::polyface3_to_svg
);
solid_wrapper!(
    DisplaySphere,
    Sphere,
    Sphere,
    "DisplaySphere",
    "Sphere",
    translate::sphere_to_svg
);
solid_wrapper!(
    DisplayCone,
    Cone,
    Cone,
    "DisplayCone",
    "Cone",
    translate::cone_to_svg
);
solid_wrapper!(
    DisplayCylinder,
    Cylinder,
    Cylinder,
    "DisplayCylinder",
    "Cylinder",
    translate::cylinder_to_svg
);

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayMesh3D {
    pub geometry: Mesh3,
    /// One color per face, one per vertex, or a single uniform color.
    pub colors: Vec<Color>,
    pub display_mode: DisplayMode,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl DisplayMesh3D {
    pub fn new(geometry: Mesh3, colors: Vec<Color>) -> Self {
        Self::with_mode(geometry, colors, DisplayMode::Surface)
    }

    pub fn with_mode(geometry: Mesh3, colors: Vec<Color>, display_mode: DisplayMode) -> Self {
        Self {
            geometry,
            colors,
            display_mode,
            display_name: None,
            user_data: IndexMap::new(),
        }
    }

    affine3_methods!();

    pub fn to_dict(&self) -> Value {
        let mut base = type_entry("DisplayMesh3D");
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
            geometry_to_value(&Geometry::Mesh3(self.geometry.clone())),
            &self.display_name,
            &self.user_data,
        )
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "DisplayMesh3D")?;
        let geometry = expect_geometry!(value, Mesh3, "Mesh3D");
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
        translate::mesh3_to_svg(&self.geometry, self.display_mode, &self.colors).into()
    }
}

/// Planar text. The plane's origin anchors the text and the plane's X axis
/// sets its rotation; only rotation within the world XY plane survives the
/// projection to SVG.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayText3D {
    pub text: String,
    pub plane: Plane,
    pub height: f64,
    pub color: Color,
    pub font: String,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl DisplayText3D {
    pub fn new(text: String, plane: Plane, height: f64, color: Option<Color>) -> Self {
        Self {
            text,
            plane,
            height,
            color: color.unwrap_or(BLACK),
            font: "Arial".to_string(),
            horizontal_alignment: HorizontalAlignment::default(),
            vertical_alignment: VerticalAlignment::default(),
            display_name: None,
            user_data: IndexMap::new(),
        }
    }

    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub fn translate(&mut self, moving_vec: Vector3) {
        self.plane = self.plane.translate(moving_vec);
    }

    pub fn rotate(&mut self, axis: Vector3, angle: f64, origin: Point3) {
        self.plane = self.plane.rotate(axis, angle.to_radians(), origin);
    }

    pub fn rotate_xy(&mut self, angle: f64, origin: Point3) {
        self.plane = self.plane.rotate_xy(angle.to_radians(), origin);
    }

    /// Scaling text scales its height along with its anchor plane.
    pub fn scale(&mut self, factor: f64, origin: Option<Point3>) {
        self.plane = self.plane.scale(factor, origin);
        self.height *= factor;
    }

    pub fn reflect(&mut self, normal: Vector3, origin: Point3) {
        self.plane = self.plane.reflect(normal, origin);
    }

    pub fn to_dict(&self) -> Value {
        let mut base = type_entry("DisplayText3D");
        base.insert("text".to_string(), json!(self.text));
        base.insert(
            "plane".to_string(),
            geometry_to_value(&Geometry::Plane(self.plane.clone())),
        );
        base.insert("height".to_string(), json!(self.height));
        base.insert("color".to_string(), dict::color_to_dict(self.color));
        base.insert("font".to_string(), json!(self.font));
        base.insert(
            "horizontal_alignment".to_string(),
            json!(self.horizontal_alignment.as_str()),
        );
        base.insert(
            "vertical_alignment".to_string(),
            json!(self.vertical_alignment.as_str()),
        );
        dict::push_base_fields(&mut base, &self.display_name, &self.user_data);
        Value::Object(base)
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "DisplayText3D")?;
        let text = value
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let plane = match value.get("plane") {
            Some(p) => match heliograph_geom::dict::geometry_from_value(p)? {
                Geometry::Plane(plane) => plane,
                other => {
                    return Err(Error::TypeMismatch {
                        expected: "Plane",
                        got: other.type_name().to_string(),
                    });
                }
            },
            None => Plane::world_xy(Point3::new(0.0, 0.0, 0.0)),
        };
        let height = value.get("height").and_then(Value::as_f64).unwrap_or(1.0);
        let mut obj = Self::new(
            text,
            plane,
            height,
            Some(dict::color_from_dict(value.get("color"))?),
        );
        if let Some(font) = value.get("font").and_then(Value::as_str) {
            obj.font = font.to_string();
        }
        if let Some(h) = value.get("horizontal_alignment").and_then(Value::as_str) {
            obj.horizontal_alignment = h.parse()?;
        }
        if let Some(v) = value.get("vertical_alignment").and_then(Value::as_str) {
            obj.vertical_alignment = v.parse()?;
        }
        obj.display_name = dict::display_name_from_dict(value);
        obj.user_data = dict::user_data_from_dict(value);
        Ok(obj)
    }

    pub fn to_svg(&self) -> Element {
        let anchor = match self.horizontal_alignment {
            HorizontalAlignment::Left => TextAnchor::Start,
            HorizontalAlignment::Center => TextAnchor::Middle,
            HorizontalAlignment::Right => TextAnchor::End,
        };
        let baseline = match self.vertical_alignment {
            VerticalAlignment::Top => DominantBaseline::Hanging,
            VerticalAlignment::Middle => DominantBaseline::Middle,
            VerticalAlignment::Bottom => DominantBaseline::Auto,
        };
        let origin = self.plane.o;
        // Rotation within the XY plane, flipped along with the Y axis.
        let angle = self.plane.x.y.atan2(self.plane.x.x).to_degrees();
        let rotation = (angle.abs() > 1.0)
            .then(|| Transform::rotate_about(-angle, origin.x, -origin.y));

        let mut lines = Vec::new();
        for (i, line) in self.text.split('\n').enumerate() {
            let mut text = Text::new();
            text.x = Some(origin.x);
            text.y = Some(-origin.y + i as f64 * LINE_SPACING * self.height);
            text.fill = Some(self.color.to_hex());
            if self.color.a != 255 {
                text.opacity = Some(f64::from(self.color.a) / 255.0);
            }
            text.font_size = Some(self.height.into());
            text.font_family = Some(self.font.clone());
            text.text_anchor = Some(anchor);
            text.dominant_baseline = Some(baseline);
            text.text = Some(line.to_string());
            lines.push(text);
        }
        if lines.len() == 1 {
            let mut text = lines.remove(0);
            if let Some(rotation) = rotation {
                text.transform.push(rotation);
            }
            text.into()
        } else {
            let mut group = G::new();
            if let Some(rotation) = rotation {
                group.transform.push(rotation);
            }
            group.children = lines.into_iter().map(Element::from).collect();
            group.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heliograph_geom::{point3, vector3};

    fn world_xy() -> Plane {
        Plane::world_xy(point3(0.0, 0.0, 0.0))
    }

    #[test]
    fn face_dict_round_trip() {
        let face = Face3::new(
            vec![
                point3(0.0, 0.0, 0.0),
                point3(4.0, 0.0, 0.0),
                point3(4.0, 4.0, 0.0),
            ],
            Vec::new(),
        );
        let mut display =
            DisplayFace3D::with_mode(face, Some(Color::new(0, 0, 255)), DisplayMode::Wireframe);
        display.user_data.insert("zone".to_string(), json!("atrium"));
        let dict = display.to_dict();
        let back = DisplayFace3D::from_dict(&dict).unwrap();
        assert_eq!(back, display);
        assert_eq!(back.to_dict(), dict);
    }

    #[test]
    fn wireframe_face_strokes_with_display_color() {
        let face = Face3::new(
            vec![
                point3(0.0, 0.0, 0.0),
                point3(4.0, 0.0, 0.0),
                point3(4.0, 4.0, 0.0),
            ],
            Vec::new(),
        );
        let display =
            DisplayFace3D::with_mode(face, Some(Color::new(255, 0, 0)), DisplayMode::Wireframe);
        let markup = display.to_svg().to_string();
        assert!(markup.contains("stroke=\"#ff0000\""));
        assert!(!markup.contains("fill=\"#ff0000\""));
    }

    #[test]
    fn surface_face_fills_with_display_color() {
        let face = Face3::new(
            vec![
                point3(0.0, 0.0, 0.0),
                point3(4.0, 0.0, 0.0),
                point3(4.0, 4.0, 0.0),
            ],
            Vec::new(),
        );
        let display =
            DisplayFace3D::with_mode(face, Some(Color::new(255, 0, 0)), DisplayMode::Surface);
        let markup = display.to_svg().to_string();
        assert!(markup.contains("fill=\"#ff0000\""));
    }

    #[test]
    fn flat_arc_becomes_circle_element() {
        let arc = Arc3::circle(world_xy(), 2.0);
        let display = DisplayArc3D::new(arc, Some(Color::new(0, 0, 0)));
        let markup = display.to_svg().to_string();
        assert!(markup.starts_with("<circle"));
        assert!(markup.contains("r=\"2\""));
    }

    #[test]
    fn half_arc_becomes_path_element() {
        let arc = Arc3::new(world_xy(), 2.0, 0.0, std::f64::consts::PI);
        let display = DisplayArc3D::new(arc, Some(Color::new(0, 0, 0)));
        let markup = display.to_svg().to_string();
        assert!(markup.starts_with("<path"));
        assert!(markup.contains("A 2 2 0 0 0"));
    }

    #[test]
    fn multi_line_text_groups_with_baseline_offsets() {
        let display = DisplayText3D::new(
            "Net Energy\nkWh/m2".to_string(),
            Plane::world_xy(point3(10.0, 20.0, 0.0)),
            4.0,
            Some(Color::new(0, 0, 0)),
        );
        let markup = display.to_svg().to_string();
        assert!(markup.starts_with("<g"));
        assert!(markup.contains("y=\"-20\""));
        assert!(markup.contains("y=\"-15\""));
        assert!(markup.contains("font-size=\"4\""));
        assert!(markup.contains("font-family=\"Arial\""));
    }

    #[test]
    fn rotated_text_carries_compensating_transform() {
        let plane = Plane::new(
            vector3(0.0, 0.0, 1.0),
            point3(5.0, 5.0, 0.0),
            vector3(0.0, 1.0, 0.0),
        );
        let display = DisplayText3D::new("label".to_string(), plane, 2.0, None);
        let markup = display.to_svg().to_string();
        assert!(markup.contains("transform=\"rotate(-90 5 -5)\""));
    }

    #[test]
    fn text_scale_scales_height() {
        let mut display = DisplayText3D::new(
            "x".to_string(),
            Plane::world_xy(point3(1.0, 1.0, 0.0)),
            2.0,
            None,
        );
        display.scale(3.0, None);
        assert_eq!(display.height, 6.0);
        assert_eq!(display.plane.o, point3(3.0, 3.0, 0.0));
    }

    #[test]
    fn cylinder_surface_mode_recolors_fill_only() {
        let cylinder = Cylinder::new(point3(0.0, 0.0, 0.0), vector3(0.0, 0.0, 4.0), 2.0);
        let display = DisplayCylinder::with_mode(
            cylinder,
            Some(Color::with_alpha(0, 255, 0, 128)),
            DisplayMode::Surface,
        );
        let markup = display.to_svg().to_string();
        assert!(markup.contains("fill=\"#00ff00\""));
        assert!(markup.starts_with("<g opacity="));
    }
}
