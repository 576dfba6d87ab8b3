//! Dictionary-driven dispatch across every display and visualization type.

use serde_json::Value;

use heliograph_geom::{Color, Geometry, Point3, Vector3};
use heliograph_svg::Element;

use crate::analysis::{AnalysisGeometry, VisualizationData};
use crate::context::ContextGeometry;
use crate::display2d::{
    DisplayArc2D, DisplayLineSegment2D, DisplayMesh2D, DisplayPoint2D, DisplayPolygon2D,
    DisplayPolyline2D, DisplayRay2D, DisplayVector2D,
};
use crate::display3d::{
    DisplayArc3D, DisplayCone, DisplayCylinder, DisplayFace3D, DisplayLineSegment3D,
    DisplayMesh3D, DisplayPlane, DisplayPoint3D, DisplayPolyface3D, DisplayPolyline3D,
    DisplayRay3D, DisplaySphere, DisplayText3D, DisplayVector3D,
};
use crate::visualization::VisualizationSet;
use crate::{DisplayMode, Error, Result};

/// Any single decorated geometry object.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayGeometry {
    Vector2D(DisplayVector2D),
    Point2D(DisplayPoint2D),
    Ray2D(DisplayRay2D),
    LineSegment2D(DisplayLineSegment2D),
    Polyline2D(DisplayPolyline2D),
    Arc2D(DisplayArc2D),
    Polygon2D(DisplayPolygon2D),
    Mesh2D(DisplayMesh2D),
    Vector3D(DisplayVector3D),
    Point3D(DisplayPoint3D),
    Ray3D(DisplayRay3D),
    Plane(DisplayPlane),
    LineSegment3D(DisplayLineSegment3D),
    Polyline3D(DisplayPolyline3D),
    Arc3D(DisplayArc3D),
    Face3D(DisplayFace3D),
    Mesh3D(DisplayMesh3D),
    Polyface3D(DisplayPolyface3D),
    Sphere(DisplaySphere),
    Cone(DisplayCone),
    Cylinder(DisplayCylinder),
    Text3D(DisplayText3D),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            DisplayGeometry::Vector2D($inner) => $body,
            DisplayGeometry::Point2D($inner) => $body,
            DisplayGeometry::Ray2D($inner) => $body,
            DisplayGeometry::LineSegment2D($inner) => $body,
            DisplayGeometry::Polyline2D($inner) => $body,
            DisplayGeometry::Arc2D($inner) => $body,
            DisplayGeometry::Polygon2D($inner) => $body,
            DisplayGeometry::Mesh2D($inner) => $body,
            DisplayGeometry::Vector3D($inner) => $body,
            DisplayGeometry::Point3D($inner) => $body,
            DisplayGeometry::Ray3D($inner) => $body,
            DisplayGeometry::Plane($inner) => $body,
            DisplayGeometry::LineSegment3D($inner) => $body,
            DisplayGeometry::Polyline3D($inner) => $body,
            DisplayGeometry::Arc3D($inner) => $body,
            DisplayGeometry::Face3D($inner) => $body,
            DisplayGeometry::Mesh3D($inner) => $body,
            DisplayGeometry::Polyface3D($inner) => $body,
            DisplayGeometry::Sphere($inner) => $body,
            DisplayGeometry::Cone($inner) => $body,
            DisplayGeometry::Cylinder($inner) => $body,
            DisplayGeometry::Text3D($inner) => $body,
        }
    };
}

impl DisplayGeometry {
    pub fn from_dict(value: &Value) -> Result<Self> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(Error::MissingType)?;
        Ok(match kind {
            "DisplayVector2D" => Self::Vector2D(DisplayVector2D::from_dict(value)?),
            "DisplayPoint2D" => Self::Point2D(DisplayPoint2D::from_dict(value)?),
            "DisplayRay2D" => Self::Ray2D(DisplayRay2D::from_dict(value)?),
            "DisplayLineSegment2D" => {
                Self::LineSegment2D(DisplayLineSegment2D::from_dict(value)?)
            }
            "DisplayPolyline2D" => Self::Polyline2D(DisplayPolyline2D::from_dict(value)?),
            "DisplayArc2D" => Self::Arc2D(DisplayArc2D::from_dict(value)?),
            "DisplayPolygon2D" => Self::Polygon2D(DisplayPolygon2D::from_dict(value)?),
            "DisplayMesh2D" => Self::Mesh2D(DisplayMesh2D::from_dict(value)?),
            "DisplayVector3D" => Self::Vector3D(DisplayVector3D::from_dict(value)?),
            "DisplayPoint3D" => Self::Point3D(DisplayPoint3D::from_dict(value)?),
            "DisplayRay3D" => Self::Ray3D(DisplayRay3D::from_dict(value)?),
            "DisplayPlane" => Self::Plane(DisplayPlane::from_dict(value)?),
            "DisplayLineSegment3D" => {
                Self::LineSegment3D(DisplayLineSegment3D::from_dict(value)?)
            }
            "DisplayPolyline3D" => Self::Polyline3D(DisplayPolyline3D::from_dict(value)?),
            "DisplayArc3D" => Self::Arc3D(DisplayArc3D::from_dict(value)?),
            "DisplayFace3D" => Self::Face3D(DisplayFace3D::from_dict(value)?),
            "DisplayMesh3D" => Self::Mesh3D(DisplayMesh3D::from_dict(value)?),
            "DisplayPolyface3D" => Self::Polyface3D(DisplayPolyface3D::from_dict(value)?),
            "DisplaySphere" => Self::Sphere(DisplaySphere::from_dict(value)?),
            "DisplayCone" => Self::Cone(DisplayCone::from_dict(value)?),
            "DisplayCylinder" => Self::Cylinder(DisplayCylinder::from_dict(value)?),
            "DisplayText3D" => Self::Text3D(DisplayText3D::from_dict(value)?),
            other => {
                return Err(Error::UnknownType {
                    got: other.to_string(),
                });
            }
        })
    }

    pub fn to_dict(&self) -> Value {
        dispatch!(self, inner => inner.to_dict())
    }

    /// The SVG form, or `None` for kinds that have no drawable projection
    /// (vectors and planes).
    pub fn to_svg(&self) -> Option<Element> {
        match self {
            DisplayGeometry::Vector2D(_)
            | DisplayGeometry::Vector3D(_)
            | DisplayGeometry::Plane(_) => None,
            DisplayGeometry::Point2D(g) => Some(g.to_svg()),
            DisplayGeometry::Ray2D(g) => Some(g.to_svg()),
            DisplayGeometry::LineSegment2D(g) => Some(g.to_svg()),
            DisplayGeometry::Polyline2D(g) => Some(g.to_svg()),
            DisplayGeometry::Arc2D(g) => Some(g.to_svg()),
            DisplayGeometry::Polygon2D(g) => Some(g.to_svg()),
            DisplayGeometry::Mesh2D(g) => Some(g.to_svg()),
            DisplayGeometry::Point3D(g) => Some(g.to_svg()),
            DisplayGeometry::Ray3D(g) => Some(g.to_svg()),
            DisplayGeometry::LineSegment3D(g) => Some(g.to_svg()),
            DisplayGeometry::Polyline3D(g) => Some(g.to_svg()),
            DisplayGeometry::Arc3D(g) => Some(g.to_svg()),
            DisplayGeometry::Face3D(g) => Some(g.to_svg()),
            DisplayGeometry::Mesh3D(g) => Some(g.to_svg()),
            DisplayGeometry::Polyface3D(g) => Some(g.to_svg()),
            DisplayGeometry::Sphere(g) => Some(g.to_svg()),
            DisplayGeometry::Cone(g) => Some(g.to_svg()),
            DisplayGeometry::Cylinder(g) => Some(g.to_svg()),
            DisplayGeometry::Text3D(g) => Some(g.to_svg()),
        }
    }

    /// Move by a 3D vector; 2D kinds use its XY components and vectors are
    /// position-free.
    pub fn translate(&mut self, moving_vec: Vector3) {
        let v2 = heliograph_geom::vector2(moving_vec.x, moving_vec.y);
        match self {
            DisplayGeometry::Vector2D(_) | DisplayGeometry::Vector3D(_) => {}
            DisplayGeometry::Point2D(g) => g.translate(v2),
            DisplayGeometry::Ray2D(g) => g.translate(v2),
            DisplayGeometry::LineSegment2D(g) => g.translate(v2),
            DisplayGeometry::Polyline2D(g) => g.translate(v2),
            DisplayGeometry::Arc2D(g) => g.translate(v2),
            DisplayGeometry::Polygon2D(g) => g.translate(v2),
            DisplayGeometry::Mesh2D(g) => g.translate(v2),
            DisplayGeometry::Point3D(g) => g.translate(moving_vec),
            DisplayGeometry::Ray3D(g) => g.translate(moving_vec),
            DisplayGeometry::Plane(g) => g.translate(moving_vec),
            DisplayGeometry::LineSegment3D(g) => g.translate(moving_vec),
            DisplayGeometry::Polyline3D(g) => g.translate(moving_vec),
            DisplayGeometry::Arc3D(g) => g.translate(moving_vec),
            DisplayGeometry::Face3D(g) => g.translate(moving_vec),
            DisplayGeometry::Mesh3D(g) => g.translate(moving_vec),
            DisplayGeometry::Polyface3D(g) => g.translate(moving_vec),
            DisplayGeometry::Sphere(g) => g.translate(moving_vec),
            DisplayGeometry::Cone(g) => g.translate(moving_vec),
            DisplayGeometry::Cylinder(g) => g.translate(moving_vec),
            DisplayGeometry::Text3D(g) => g.translate(moving_vec),
        }
    }

    /// Rotate in the world XY plane; `angle` in degrees.
    pub fn rotate_xy(&mut self, angle: f64, origin: Point3) {
        let o2 = heliograph_geom::point2(origin.x, origin.y);
        match self {
            DisplayGeometry::Vector2D(g) => g.rotate(angle),
            DisplayGeometry::Vector3D(g) => g.rotate_xy(angle),
            DisplayGeometry::Point2D(g) => g.rotate(angle, o2),
            DisplayGeometry::Ray2D(g) => g.rotate(angle, o2),
            DisplayGeometry::LineSegment2D(g) => g.rotate(angle, o2),
            DisplayGeometry::Polyline2D(g) => g.rotate(angle, o2),
            DisplayGeometry::Arc2D(g) => g.rotate(angle, o2),
            DisplayGeometry::Polygon2D(g) => g.rotate(angle, o2),
            DisplayGeometry::Mesh2D(g) => g.rotate(angle, o2),
            DisplayGeometry::Point3D(g) => g.rotate_xy(angle, origin),
            DisplayGeometry::Ray3D(g) => g.rotate_xy(angle, origin),
            DisplayGeometry::Plane(g) => g.rotate_xy(angle, origin),
            DisplayGeometry::LineSegment3D(g) => g.rotate_xy(angle, origin),
            DisplayGeometry::Polyline3D(g) => g.rotate_xy(angle, origin),
            DisplayGeometry::Arc3D(g) => g.rotate_xy(angle, origin),
            DisplayGeometry::Face3D(g) => g.rotate_xy(angle, origin),
            DisplayGeometry::Mesh3D(g) => g.rotate_xy(angle, origin),
            DisplayGeometry::Polyface3D(g) => g.rotate_xy(angle, origin),
            DisplayGeometry::Sphere(g) => g.rotate_xy(angle, origin),
            DisplayGeometry::Cone(g) => g.rotate_xy(angle, origin),
            DisplayGeometry::Cylinder(g) => g.rotate_xy(angle, origin),
            DisplayGeometry::Text3D(g) => g.rotate_xy(angle, origin),
        }
    }

    pub fn scale(&mut self, factor: f64, origin: Option<Point3>) {
        let o2 = origin.map(|o| heliograph_geom::point2(o.x, o.y));
        match self {
            DisplayGeometry::Vector2D(g) => g.scale(factor),
            DisplayGeometry::Vector3D(g) => g.scale(factor),
            DisplayGeometry::Point2D(g) => g.scale(factor, o2),
            DisplayGeometry::Ray2D(g) => g.scale(factor, o2),
            DisplayGeometry::LineSegment2D(g) => g.scale(factor, o2),
            DisplayGeometry::Polyline2D(g) => g.scale(factor, o2),
            DisplayGeometry::Arc2D(g) => g.scale(factor, o2),
            DisplayGeometry::Polygon2D(g) => g.scale(factor, o2),
            DisplayGeometry::Mesh2D(g) => g.scale(factor, o2),
            DisplayGeometry::Point3D(g) => g.scale(factor, origin),
            DisplayGeometry::Ray3D(g) => g.scale(factor, origin),
            DisplayGeometry::Plane(g) => g.scale(factor, origin),
            DisplayGeometry::LineSegment3D(g) => g.scale(factor, origin),
            DisplayGeometry::Polyline3D(g) => g.scale(factor, origin),
            DisplayGeometry::Arc3D(g) => g.scale(factor, origin),
            DisplayGeometry::Face3D(g) => g.scale(factor, origin),
            DisplayGeometry::Mesh3D(g) => g.scale(factor, origin),
            DisplayGeometry::Polyface3D(g) => g.scale(factor, origin),
            DisplayGeometry::Sphere(g) => g.scale(factor, origin),
            DisplayGeometry::Cone(g) => g.scale(factor, origin),
            DisplayGeometry::Cylinder(g) => g.scale(factor, origin),
            DisplayGeometry::Text3D(g) => g.scale(factor, origin),
        }
    }
}

/// Decorate a raw geometry value with one color and display mode.
pub(crate) fn geometry_to_display(
    geometry: Geometry,
    color: Option<Color>,
    mode: DisplayMode,
) -> DisplayGeometry {
    match geometry {
        Geometry::Point2(g) => DisplayGeometry::Point2D(DisplayPoint2D::new(g, color)),
        Geometry::Ray2(g) => DisplayGeometry::Ray2D(DisplayRay2D::new(g, color)),
        Geometry::LineSegment2(g) => {
            DisplayGeometry::LineSegment2D(DisplayLineSegment2D::new(g, color))
        }
        Geometry::Polyline2(g) => DisplayGeometry::Polyline2D(DisplayPolyline2D::new(g, color)),
        Geometry::Arc2(g) => DisplayGeometry::Arc2D(DisplayArc2D::new(g, color)),
        Geometry::Polygon2(g) => {
            DisplayGeometry::Polygon2D(DisplayPolygon2D::with_mode(g, color, mode))
        }
        Geometry::Mesh2(g) => DisplayGeometry::Mesh2D(DisplayMesh2D::with_mode(
            g,
            color.map_or_else(Vec::new, |c| vec![c]),
            mode,
        )),
        Geometry::Point3(g) => DisplayGeometry::Point3D(DisplayPoint3D::new(g, color)),
        Geometry::Ray3(g) => DisplayGeometry::Ray3D(DisplayRay3D::new(g, color)),
        Geometry::Plane(g) => DisplayGeometry::Plane(DisplayPlane::new(g, color)),
        Geometry::LineSegment3(g) => {
            DisplayGeometry::LineSegment3D(DisplayLineSegment3D::new(g, color))
        }
        Geometry::Polyline3(g) => DisplayGeometry::Polyline3D(DisplayPolyline3D::new(g, color)),
        Geometry::Arc3(g) => DisplayGeometry::Arc3D(DisplayArc3D::new(g, color)),
        Geometry::Face3(g) => DisplayGeometry::Face3D(DisplayFace3D::with_mode(g, color, mode)),
        Geometry::Mesh3(g) => DisplayGeometry::Mesh3D(DisplayMesh3D::with_mode(
            g,
            color.map_or_else(Vec::new, |c| vec![c]),
            mode,
        )),
        Geometry::Polyface3(g) => {
            DisplayGeometry::Polyface3D(DisplayPolyface3D::with_mode(g, color, mode))
        }
        Geometry::Sphere(g) => DisplayGeometry::Sphere(DisplaySphere::with_mode(g, color, mode)),
        Geometry::Cone(g) => DisplayGeometry::Cone(DisplayCone::with_mode(g, color, mode)),
        Geometry::Cylinder(g) => {
            DisplayGeometry::Cylinder(DisplayCylinder::with_mode(g, color, mode))
        }
    }
}

/// Any object the dictionary dispatcher can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum VisObject {
    Display(DisplayGeometry),
    VisualizationData(VisualizationData),
    AnalysisGeometry(AnalysisGeometry),
    ContextGeometry(ContextGeometry),
    VisualizationSet(VisualizationSet),
}

/// Map a dictionary to the object its `"type"` names.
///
/// A missing discriminator always errors. An unrecognized one errors when
/// `raise_exception` is set and otherwise yields `None`, for best-effort
/// decoding of mixed collections.
pub fn dict_to_object(value: &Value, raise_exception: bool) -> Result<Option<VisObject>> {
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or(Error::MissingType)?;
    let object = match kind {
        "VisualizationData" => VisObject::VisualizationData(VisualizationData::from_dict(value)?),
        "AnalysisGeometry" => VisObject::AnalysisGeometry(AnalysisGeometry::from_dict(value)?),
        "ContextGeometry" => VisObject::ContextGeometry(ContextGeometry::from_dict(value)?),
        "VisualizationSet" => VisObject::VisualizationSet(VisualizationSet::from_dict(value)?),
        _ => match DisplayGeometry::from_dict(value) {
            Ok(display) => VisObject::Display(display),
            Err(Error::UnknownType { got }) => {
                if raise_exception {
                    return Err(Error::UnknownType { got });
                }
                return Ok(None);
            }
            Err(other) => return Err(other),
        },
    };
    Ok(Some(object))
}

#[cfg(test)]
mod tests {
    use super::*;
    use heliograph_geom::{point2, point3, vector3};
    use serde_json::json;

    #[test]
    fn dispatcher_round_trips_a_display_object() {
        let display = crate::DisplayPoint3D::new(point3(1.0, 2.0, 3.0), None);
        let dict = display.to_dict();
        match dict_to_object(&dict, true).unwrap() {
            Some(VisObject::Display(DisplayGeometry::Point3D(back))) => {
                assert_eq!(back, display);
            }
            other => panic!("unexpected object: {other:?}"),
        }
    }

    #[test]
    fn unknown_type_errors_or_yields_none() {
        let dict = json!({"type": "Hologram"});
        assert!(matches!(
            dict_to_object(&dict, true),
            Err(Error::UnknownType { .. })
        ));
        assert!(dict_to_object(&dict, false).unwrap().is_none());
    }

    #[test]
    fn missing_type_always_errors() {
        let dict = json!({"geometry": {}});
        assert!(matches!(
            dict_to_object(&dict, false),
            Err(Error::MissingType)
        ));
    }

    #[test]
    fn wrapped_geometry_translates_with_flipped_output() {
        let mut display = geometry_to_display(
            Geometry::Point2(point2(1.0, 1.0)),
            None,
            DisplayMode::Wireframe,
        );
        display.translate(vector3(2.0, 3.0, 0.0));
        let markup = display.to_svg().unwrap().to_string();
        assert!(markup.contains("cx=\"3\""));
        assert!(markup.contains("cy=\"-4\""));
    }
}
