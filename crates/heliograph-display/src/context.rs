//! Un-analyzed geometry layers.

use indexmap::IndexMap;
use serde_json::{Map, Value, json};

use heliograph_geom::{Color, Geometry, Point3, Vector3, bounding_box};
use heliograph_svg::Svg;

use crate::base::dict;
use crate::dictutil::{DisplayGeometry, geometry_to_display};
use crate::{DisplayMode, Result};

/// A layer of display objects that provide visual context rather than carry
/// data. Raw geometry is auto-wrapped as wireframe display objects.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextGeometry {
    pub identifier: String,
    pub geometry: Vec<DisplayGeometry>,
    pub hidden: bool,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl ContextGeometry {
    pub fn new(identifier: impl Into<String>, geometry: Vec<DisplayGeometry>) -> Self {
        Self {
            identifier: identifier.into(),
            geometry,
            hidden: false,
            display_name: None,
            user_data: IndexMap::new(),
        }
    }

    /// Wrap raw geometry as black wireframe display objects.
    pub fn from_geometry(
        identifier: impl Into<String>,
        geometry: Vec<Geometry>,
        color: Option<Color>,
    ) -> Self {
        let display = geometry
            .into_iter()
            .map(|geo| geometry_to_display(geo, color, DisplayMode::Wireframe))
            .collect();
        Self::new(identifier, display)
    }

    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub fn translate(&mut self, moving_vec: Vector3) {
        for geo in &mut self.geometry {
            geo.translate(moving_vec);
        }
    }

    /// Rotate in the world XY plane; `angle` in degrees.
    pub fn rotate_xy(&mut self, angle: f64, origin: Point3) {
        for geo in &mut self.geometry {
            geo.rotate_xy(angle, origin);
        }
    }

    pub fn scale(&mut self, factor: f64, origin: Option<Point3>) {
        for geo in &mut self.geometry {
            geo.scale(factor, origin);
        }
    }

    pub fn to_dict(&self) -> Value {
        let mut base = Map::new();
        base.insert("type".to_string(), json!("ContextGeometry"));
        base.insert("identifier".to_string(), json!(self.identifier));
        base.insert(
            "geometry".to_string(),
            Value::Array(self.geometry.iter().map(DisplayGeometry::to_dict).collect()),
        );
        base.insert("hidden".to_string(), json!(self.hidden));
        dict::push_base_fields(&mut base, &self.display_name, &self.user_data);
        Value::Object(base)
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "ContextGeometry")?;
        let identifier = value
            .get("identifier")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let geometry = match value.get("geometry") {
            Some(Value::Array(items)) => items
                .iter()
                .map(DisplayGeometry::from_dict)
                .collect::<Result<Vec<DisplayGeometry>>>()?,
            _ => Vec::new(),
        };
        let mut layer = Self::new(identifier, geometry);
        layer.hidden = value
            .get("hidden")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        layer.display_name = dict::display_name_from_dict(value);
        layer.user_data = dict::user_data_from_dict(value);
        Ok(layer)
    }

    /// Minimum corner of the box around all wrapped geometry, skipping kinds
    /// without an extent.
    pub fn min(&self) -> Option<Point3> {
        bounding_box(self.raw_geometry().iter()).map(|(min, _)| min)
    }

    pub fn max(&self) -> Option<Point3> {
        bounding_box(self.raw_geometry().iter()).map(|(_, max)| max)
    }

    fn raw_geometry(&self) -> Vec<Geometry> {
        self.geometry
            .iter()
            .filter_map(|geo| match geo {
                DisplayGeometry::Point2D(g) => Some(Geometry::Point2(g.geometry)),
                DisplayGeometry::Ray2D(g) => Some(Geometry::Ray2(g.geometry)),
                DisplayGeometry::LineSegment2D(g) => Some(Geometry::LineSegment2(g.geometry)),
                DisplayGeometry::Polyline2D(g) => Some(Geometry::Polyline2(g.geometry.clone())),
                DisplayGeometry::Arc2D(g) => Some(Geometry::Arc2(g.geometry)),
                DisplayGeometry::Polygon2D(g) => Some(Geometry::Polygon2(g.geometry.clone())),
                DisplayGeometry::Mesh2D(g) => Some(Geometry::Mesh2(g.geometry.clone())),
                DisplayGeometry::Point3D(g) => Some(Geometry::Point3(g.geometry)),
                DisplayGeometry::Ray3D(g) => Some(Geometry::Ray3(g.geometry)),
                DisplayGeometry::Plane(g) => Some(Geometry::Plane(g.geometry)),
                DisplayGeometry::LineSegment3D(g) => Some(Geometry::LineSegment3(g.geometry)),
                DisplayGeometry::Polyline3D(g) => Some(Geometry::Polyline3(g.geometry.clone())),
                DisplayGeometry::Arc3D(g) => Some(Geometry::Arc3(g.geometry)),
                DisplayGeometry::Face3D(g) => Some(Geometry::Face3(g.geometry.clone())),
                DisplayGeometry::Mesh3D(g) => Some(Geometry::Mesh3(g.geometry.clone())),
                DisplayGeometry::Polyface3D(g) => Some(Geometry::Polyface3(g.geometry.clone())),
                DisplayGeometry::Sphere(g) => Some(Geometry::Sphere(g.geometry)),
                DisplayGeometry::Cone(g) => Some(Geometry::Cone(g.geometry)),
                DisplayGeometry::Cylinder(g) => Some(Geometry::Cylinder(g.geometry)),
                DisplayGeometry::Vector2D(_)
                | DisplayGeometry::Vector3D(_)
                | DisplayGeometry::Text3D(_) => None,
            })
            .collect()
    }

    /// Render the layer to a standalone canvas, skipping kinds with no SVG
    /// form.
    pub fn to_svg(&self, width: f64, height: f64) -> Svg {
        let mut svg = Svg::new();
        svg.width = Some(width.into());
        svg.height = Some(height.into());
        svg.children = self.to_svg_elements();
        svg
    }

    pub(crate) fn to_svg_elements(&self) -> Vec<heliograph_svg::Element> {
        self.geometry
            .iter()
            .filter_map(DisplayGeometry::to_svg)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heliograph_geom::{LineSegment2, point2, point3, vector3};

    #[test]
    fn raw_geometry_wraps_to_wireframe() {
        let segment = LineSegment2::from_end_points(point2(0.0, 0.0), point2(1.0, 1.0));
        let layer = ContextGeometry::from_geometry(
            "site",
            vec![Geometry::LineSegment2(segment)],
            None,
        );
        assert!(matches!(
            layer.geometry[0],
            DisplayGeometry::LineSegment2D(_)
        ));
    }

    #[test]
    fn context_dict_round_trip() {
        let segment = LineSegment2::from_end_points(point2(0.0, 0.0), point2(1.0, 1.0));
        let mut layer = ContextGeometry::from_geometry(
            "site",
            vec![Geometry::LineSegment2(segment)],
            None,
        );
        layer.display_name = Some("Site Outline".to_string());
        let dict = layer.to_dict();
        let back = ContextGeometry::from_dict(&dict).unwrap();
        assert_eq!(back, layer);
        assert_eq!(back.to_dict(), dict);
    }

    #[test]
    fn canvas_contains_the_layer_elements() {
        let segment = LineSegment2::from_end_points(point2(0.0, 0.0), point2(4.0, 2.0));
        let layer = ContextGeometry::from_geometry(
            "site",
            vec![Geometry::LineSegment2(segment)],
            None,
        );
        let markup = layer.to_svg(800.0, 600.0).to_string();
        assert!(markup.starts_with("<svg width=\"800\" height=\"600\""));
        assert!(markup.contains("<line"));
        assert!(markup.contains("y2=\"-2\""));
    }

    #[test]
    fn translate_moves_every_member() {
        let layer_geometry = vec![Geometry::Point2(point2(0.0, 0.0))];
        let mut layer = ContextGeometry::from_geometry("pts", layer_geometry, None);
        layer.translate(vector3(2.0, 5.0, 0.0));
        assert_eq!(layer.min(), Some(point3(2.0, 5.0, 0.0)));
    }
}
