//! Serialized dictionary forms for geometry values.
//!
//! Every geometry dictionary carries a `"type"` discriminator string that is
//! checked before any field decoding happens.

use serde_json::{Map, Value, json};

use crate::geom::{point2, point3};
use crate::{Error, Geometry, Result};

/// Serialize any geometry value to its tagged dictionary form.
pub fn geometry_to_value(geometry: &Geometry) -> Value {
    match geometry {
        Geometry::Point2(p) => json!({"type": "Point2D", "x": p.x, "y": p.y}),
        Geometry::Point3(p) => json!({"type": "Point3D", "x": p.x, "y": p.y, "z": p.z}),
        other => {
            let mut value = match other {
                Geometry::Ray2(g) => serde_json::to_value(g),
                Geometry::LineSegment2(g) => serde_json::to_value(g),
                Geometry::Polyline2(g) => serde_json::to_value(g),
                Geometry::Arc2(g) => serde_json::to_value(g),
                Geometry::Polygon2(g) => serde_json::to_value(g),
                Geometry::Mesh2(g) => serde_json::to_value(g),
                Geometry::Ray3(g) => serde_json::to_value(g),
                Geometry::Plane(g) => serde_json::to_value(g),
                Geometry::LineSegment3(g) => serde_json::to_value(g),
                Geometry::Polyline3(g) => serde_json::to_value(g),
                Geometry::Arc3(g) => serde_json::to_value(g),
                Geometry::Face3(g) => serde_json::to_value(g),
                Geometry::Mesh3(g) => serde_json::to_value(g),
                Geometry::Polyface3(g) => serde_json::to_value(g),
                Geometry::Sphere(g) => serde_json::to_value(g),
                Geometry::Cone(g) => serde_json::to_value(g),
                Geometry::Cylinder(g) => serde_json::to_value(g),
                Geometry::Point2(_) | Geometry::Point3(_) => unreachable!(),
            }
            // Plain structs of numbers and points always serialize.
            .unwrap_or(Value::Null);
            if let Value::Object(map) = &mut value {
                let mut tagged = Map::with_capacity(map.len() + 1);
                tagged.insert(
                    "type".to_string(),
                    Value::String(geometry.type_name().to_string()),
                );
                tagged.append(map);
                return Value::Object(tagged);
            }
            value
        }
    }
}

/// Deserialize a tagged geometry dictionary into a [`Geometry`] value.
pub fn geometry_from_value(value: &Value) -> Result<Geometry> {
    let type_name = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or(Error::MissingType)?;
    let field = |name: &str| -> Result<f64> {
        value.get(name).and_then(Value::as_f64).ok_or_else(|| {
            Error::TypeMismatch {
                expected: "numeric coordinate",
                got: format!("missing \"{name}\""),
            }
        })
    };
    let geo = match type_name {
        "Point2D" => Geometry::Point2(point2(field("x")?, field("y")?)),
        "Point3D" => Geometry::Point3(point3(field("x")?, field("y")?, field("z")?)),
        "Ray2D" => Geometry::Ray2(serde_json::from_value(value.clone())?),
        "LineSegment2D" => Geometry::LineSegment2(serde_json::from_value(value.clone())?),
        "Polyline2D" => Geometry::Polyline2(serde_json::from_value(value.clone())?),
        "Arc2D" => Geometry::Arc2(serde_json::from_value(value.clone())?),
        "Polygon2D" => Geometry::Polygon2(serde_json::from_value(value.clone())?),
        "Mesh2D" => {
            let mesh: crate::geometry2d::Mesh2 = serde_json::from_value(value.clone())?;
            Geometry::Mesh2(crate::geometry2d::Mesh2::new(mesh.vertices, mesh.faces)?)
        }
        "Ray3D" => Geometry::Ray3(serde_json::from_value(value.clone())?),
        "Plane" => Geometry::Plane(serde_json::from_value(value.clone())?),
        "LineSegment3D" => Geometry::LineSegment3(serde_json::from_value(value.clone())?),
        "Polyline3D" => Geometry::Polyline3(serde_json::from_value(value.clone())?),
        "Arc3D" => Geometry::Arc3(serde_json::from_value(value.clone())?),
        "Face3D" => Geometry::Face3(serde_json::from_value(value.clone())?),
        "Mesh3D" => {
            let mesh: crate::geometry3d::Mesh3 = serde_json::from_value(value.clone())?;
            Geometry::Mesh3(crate::geometry3d::Mesh3::new(mesh.vertices, mesh.faces)?)
        }
        "Polyface3D" => Geometry::Polyface3(serde_json::from_value(value.clone())?),
        "Sphere" => Geometry::Sphere(serde_json::from_value(value.clone())?),
        "Cone" => Geometry::Cone(serde_json::from_value(value.clone())?),
        "Cylinder" => Geometry::Cylinder(serde_json::from_value(value.clone())?),
        other => {
            return Err(Error::UnknownType {
                got: other.to_string(),
            });
        }
    };
    Ok(geo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::vector3;
    use crate::geometry3d::LineSegment3;

    #[test]
    fn point_dicts_use_named_coordinates() {
        let value = geometry_to_value(&Geometry::Point3(point3(1.0, 2.0, 3.0)));
        assert_eq!(value["type"], "Point3D");
        assert_eq!(value["z"], 3.0);
        let back = geometry_from_value(&value).unwrap();
        assert_eq!(back, Geometry::Point3(point3(1.0, 2.0, 3.0)));
    }

    #[test]
    fn segment_round_trips_through_value() {
        let seg = LineSegment3::new(point3(0.0, 1.0, 2.0), vector3(1.0, 0.0, 0.0));
        let value = geometry_to_value(&Geometry::LineSegment3(seg));
        assert_eq!(value["type"], "LineSegment3D");
        let back = geometry_from_value(&value).unwrap();
        assert_eq!(back, Geometry::LineSegment3(seg));
    }

    #[test]
    fn unknown_type_is_an_error() {
        let err = geometry_from_value(&json!({"type": "Blob"})).unwrap_err();
        assert!(matches!(err, Error::UnknownType { .. }));
    }

    #[test]
    fn missing_type_is_an_error() {
        let err = geometry_from_value(&json!({"x": 1.0})).unwrap_err();
        assert!(matches!(err, Error::MissingType));
    }
}
