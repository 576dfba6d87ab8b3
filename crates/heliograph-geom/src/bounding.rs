//! Mixed geometry collections and bounding-box queries.

use crate::geom::{Point2, Point3, Vector2, Vector3, point3, vector2};
use crate::geometry2d::{Arc2, LineSegment2, Mesh2, Polygon2, Polyline2, Ray2};
use crate::geometry3d::{
    Arc3, Cone, Cylinder, Face3, LineSegment3, Mesh3, Plane, Polyface3, Polyline3, Ray3, Sphere,
};

/// Any geometry value heliograph can carry in a visualization layer.
///
/// 2D variants live in the world XY plane at `z = 0` for bounding purposes.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point2(Point2),
    Ray2(Ray2),
    LineSegment2(LineSegment2),
    Polyline2(Polyline2),
    Arc2(Arc2),
    Polygon2(Polygon2),
    Mesh2(Mesh2),
    Point3(Point3),
    Ray3(Ray3),
    Plane(Plane),
    LineSegment3(LineSegment3),
    Polyline3(Polyline3),
    Arc3(Arc3),
    Face3(Face3),
    Mesh3(Mesh3),
    Polyface3(Polyface3),
    Sphere(Sphere),
    Cone(Cone),
    Cylinder(Cylinder),
}

impl Geometry {
    /// The serialized `"type"` discriminator for this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point2(_) => "Point2D",
            Geometry::Ray2(_) => "Ray2D",
            Geometry::LineSegment2(_) => "LineSegment2D",
            Geometry::Polyline2(_) => "Polyline2D",
            Geometry::Arc2(_) => "Arc2D",
            Geometry::Polygon2(_) => "Polygon2D",
            Geometry::Mesh2(_) => "Mesh2D",
            Geometry::Point3(_) => "Point3D",
            Geometry::Ray3(_) => "Ray3D",
            Geometry::Plane(_) => "Plane",
            Geometry::LineSegment3(_) => "LineSegment3D",
            Geometry::Polyline3(_) => "Polyline3D",
            Geometry::Arc3(_) => "Arc3D",
            Geometry::Face3(_) => "Face3D",
            Geometry::Mesh3(_) => "Mesh3D",
            Geometry::Polyface3(_) => "Polyface3D",
            Geometry::Sphere(_) => "Sphere",
            Geometry::Cone(_) => "Cone",
            Geometry::Cylinder(_) => "Cylinder",
        }
    }

    /// Mesh face count, or 0 for non-mesh kinds.
    pub fn face_count(&self) -> usize {
        match self {
            Geometry::Mesh2(m) => m.faces.len(),
            Geometry::Mesh3(m) => m.faces.len(),
            _ => 0,
        }
    }

    /// Mesh vertex count, or 0 for non-mesh kinds.
    pub fn vertex_count(&self) -> usize {
        match self {
            Geometry::Mesh2(m) => m.vertices.len(),
            Geometry::Mesh3(m) => m.vertices.len(),
            _ => 0,
        }
    }

    pub fn is_mesh(&self) -> bool {
        matches!(self, Geometry::Mesh2(_) | Geometry::Mesh3(_))
    }

    /// Move by a 3D vector; 2D kinds use the vector's XY components.
    pub fn translate(&self, moving_vec: Vector3) -> Self {
        let v2 = vector2(moving_vec.x, moving_vec.y);
        match self {
            Geometry::Point2(p) => Geometry::Point2(*p + v2),
            Geometry::Ray2(g) => Geometry::Ray2(g.translate(v2)),
            Geometry::LineSegment2(g) => Geometry::LineSegment2(g.translate(v2)),
            Geometry::Polyline2(g) => Geometry::Polyline2(g.translate(v2)),
            Geometry::Arc2(g) => Geometry::Arc2(g.translate(v2)),
            Geometry::Polygon2(g) => Geometry::Polygon2(g.translate(v2)),
            Geometry::Mesh2(g) => Geometry::Mesh2(g.translate(v2)),
            Geometry::Point3(p) => Geometry::Point3(*p + moving_vec),
            Geometry::Ray3(g) => Geometry::Ray3(g.translate(moving_vec)),
            Geometry::Plane(g) => Geometry::Plane(g.translate(moving_vec)),
            Geometry::LineSegment3(g) => Geometry::LineSegment3(g.translate(moving_vec)),
            Geometry::Polyline3(g) => Geometry::Polyline3(g.translate(moving_vec)),
            Geometry::Arc3(g) => Geometry::Arc3(g.translate(moving_vec)),
            Geometry::Face3(g) => Geometry::Face3(g.translate(moving_vec)),
            Geometry::Mesh3(g) => Geometry::Mesh3(g.translate(moving_vec)),
            Geometry::Polyface3(g) => Geometry::Polyface3(g.translate(moving_vec)),
            Geometry::Sphere(g) => Geometry::Sphere(g.translate(moving_vec)),
            Geometry::Cone(g) => Geometry::Cone(g.translate(moving_vec)),
            Geometry::Cylinder(g) => Geometry::Cylinder(g.translate(moving_vec)),
        }
    }

    /// Rotate counterclockwise in the world XY plane about `origin`.
    pub fn rotate_xy(&self, angle: f64, origin: Point3) -> Self {
        let o2 = crate::geom::point2(origin.x, origin.y);
        match self {
            Geometry::Point2(p) => Geometry::Point2(crate::geom::rotate_point2(*p, angle, o2)),
            Geometry::Ray2(g) => Geometry::Ray2(g.rotate(angle, o2)),
            Geometry::LineSegment2(g) => Geometry::LineSegment2(g.rotate(angle, o2)),
            Geometry::Polyline2(g) => Geometry::Polyline2(g.rotate(angle, o2)),
            Geometry::Arc2(g) => Geometry::Arc2(g.rotate(angle, o2)),
            Geometry::Polygon2(g) => Geometry::Polygon2(g.rotate(angle, o2)),
            Geometry::Mesh2(g) => Geometry::Mesh2(g.rotate(angle, o2)),
            Geometry::Point3(p) => {
                Geometry::Point3(crate::geom::rotate_xy_point3(*p, angle, origin))
            }
            Geometry::Ray3(g) => Geometry::Ray3(g.rotate_xy(angle, origin)),
            Geometry::Plane(g) => Geometry::Plane(g.rotate_xy(angle, origin)),
            Geometry::LineSegment3(g) => Geometry::LineSegment3(g.rotate_xy(angle, origin)),
            Geometry::Polyline3(g) => Geometry::Polyline3(g.rotate_xy(angle, origin)),
            Geometry::Arc3(g) => Geometry::Arc3(g.rotate_xy(angle, origin)),
            Geometry::Face3(g) => Geometry::Face3(g.rotate_xy(angle, origin)),
            Geometry::Mesh3(g) => Geometry::Mesh3(g.rotate_xy(angle, origin)),
            Geometry::Polyface3(g) => Geometry::Polyface3(g.rotate_xy(angle, origin)),
            Geometry::Sphere(g) => Geometry::Sphere(g.rotate_xy(angle, origin)),
            Geometry::Cone(g) => Geometry::Cone(g.rotate_xy(angle, origin)),
            Geometry::Cylinder(g) => Geometry::Cylinder(g.rotate_xy(angle, origin)),
        }
    }

    pub fn scale(&self, factor: f64, origin: Option<Point3>) -> Self {
        let o2: Option<Point2> = origin.map(|o| crate::geom::point2(o.x, o.y));
        match self {
            Geometry::Point2(p) => Geometry::Point2(crate::geom::scale_point2(*p, factor, o2)),
            Geometry::Ray2(g) => Geometry::Ray2(g.scale(factor, o2)),
            Geometry::LineSegment2(g) => Geometry::LineSegment2(g.scale(factor, o2)),
            Geometry::Polyline2(g) => Geometry::Polyline2(g.scale(factor, o2)),
            Geometry::Arc2(g) => Geometry::Arc2(g.scale(factor, o2)),
            Geometry::Polygon2(g) => Geometry::Polygon2(g.scale(factor, o2)),
            Geometry::Mesh2(g) => Geometry::Mesh2(g.scale(factor, o2)),
            Geometry::Point3(p) => Geometry::Point3(crate::geom::scale_point3(*p, factor, origin)),
            Geometry::Ray3(g) => Geometry::Ray3(g.scale(factor, origin)),
            Geometry::Plane(g) => Geometry::Plane(g.scale(factor, origin)),
            Geometry::LineSegment3(g) => Geometry::LineSegment3(g.scale(factor, origin)),
            Geometry::Polyline3(g) => Geometry::Polyline3(g.scale(factor, origin)),
            Geometry::Arc3(g) => Geometry::Arc3(g.scale(factor, origin)),
            Geometry::Face3(g) => Geometry::Face3(g.scale(factor, origin)),
            Geometry::Mesh3(g) => Geometry::Mesh3(g.scale(factor, origin)),
            Geometry::Polyface3(g) => Geometry::Polyface3(g.scale(factor, origin)),
            Geometry::Sphere(g) => Geometry::Sphere(g.scale(factor, origin)),
            Geometry::Cone(g) => Geometry::Cone(g.scale(factor, origin)),
            Geometry::Cylinder(g) => Geometry::Cylinder(g.scale(factor, origin)),
        }
    }

    /// World-space corner points that bound this geometry.
    pub fn corner_points(&self) -> Vec<Point3> {
        let lift = |p: &Point2| point3(p.x, p.y, 0.0);
        match self {
            Geometry::Point2(p) => vec![lift(p)],
            Geometry::Ray2(g) => vec![lift(&g.p), lift(&(g.p + g.v))],
            Geometry::LineSegment2(g) => vec![lift(&g.p1()), lift(&g.p2())],
            Geometry::Polyline2(g) => g.vertices.iter().map(|p| lift(p)).collect(),
            Geometry::Arc2(g) => vec![
                point3(g.c.x - g.r, g.c.y - g.r, 0.0),
                point3(g.c.x + g.r, g.c.y + g.r, 0.0),
            ],
            Geometry::Polygon2(g) => g.vertices.iter().map(|p| lift(p)).collect(),
            Geometry::Mesh2(g) => g.vertices.iter().map(|p| lift(p)).collect(),
            Geometry::Point3(p) => vec![*p],
            Geometry::Ray3(g) => vec![g.p, g.p + g.v],
            Geometry::Plane(g) => vec![g.o],
            Geometry::LineSegment3(g) => vec![g.p1(), g.p2()],
            Geometry::Polyline3(g) => g.vertices.clone(),
            Geometry::Arc3(g) => g.subdivide_evenly(12),
            Geometry::Face3(g) => g.vertices(),
            Geometry::Mesh3(g) => g.vertices.clone(),
            Geometry::Polyface3(g) => g.faces.iter().flat_map(|f| f.vertices()).collect(),
            Geometry::Sphere(g) => vec![
                g.center + crate::geom::vector3(-g.radius, -g.radius, -g.radius),
                g.center + crate::geom::vector3(g.radius, g.radius, g.radius),
            ],
            Geometry::Cone(g) => {
                let mut pts = g.base().subdivide_evenly(12);
                pts.push(g.vertex);
                pts
            }
            Geometry::Cylinder(g) => {
                let mut pts = g.base_bottom().subdivide_evenly(12);
                pts.extend(g.base_top().subdivide_evenly(12));
                pts
            }
        }
    }
}

macro_rules! impl_from_geometry {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(impl From<$ty> for Geometry {
            fn from(value: $ty) -> Self {
                Geometry::$variant(value)
            }
        })*
    };
}

impl_from_geometry! {
    Point2 => Point2,
    Ray2 => Ray2,
    LineSegment2 => LineSegment2,
    Polyline2 => Polyline2,
    Arc2 => Arc2,
    Polygon2 => Polygon2,
    Mesh2 => Mesh2,
    Point3 => Point3,
    Ray3 => Ray3,
    Plane => Plane,
    LineSegment3 => LineSegment3,
    Polyline3 => Polyline3,
    Arc3 => Arc3,
    Face3 => Face3,
    Mesh3 => Mesh3,
    Polyface3 => Polyface3,
    Sphere => Sphere,
    Cone => Cone,
    Cylinder => Cylinder,
}

/// Minimum and maximum corner of the axis-aligned box around mixed geometry.
///
/// Returns `None` for an empty collection.
pub fn bounding_box<'a>(
    geometry: impl IntoIterator<Item = &'a Geometry>,
) -> Option<(Point3, Point3)> {
    let mut min: Option<Point3> = None;
    let mut max: Option<Point3> = None;
    for geo in geometry {
        for p in geo.corner_points() {
            min = Some(match min {
                None => p,
                Some(m) => point3(m.x.min(p.x), m.y.min(p.y), m.z.min(p.z)),
            });
            max = Some(match max {
                None => p,
                Some(m) => point3(m.x.max(p.x), m.y.max(p.y), m.z.max(p.z)),
            });
        }
    }
    Some((min?, max?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{point2, vector3};

    #[test]
    fn bounding_box_spans_mixed_dimensions() {
        let geos = vec![
            Geometry::Point2(point2(-1.0, 2.0)),
            Geometry::Point3(point3(4.0, 0.0, 3.0)),
        ];
        let (min, max) = bounding_box(&geos).unwrap();
        assert_eq!(min, point3(-1.0, 0.0, 0.0));
        assert_eq!(max, point3(4.0, 2.0, 3.0));
    }

    #[test]
    fn bounding_box_of_nothing_is_none() {
        assert!(bounding_box(&[]).is_none());
    }

    #[test]
    fn translate_moves_2d_kinds_in_plane() {
        let geo = Geometry::Point2(point2(1.0, 1.0));
        let moved = geo.translate(vector3(2.0, -1.0, 9.0));
        assert_eq!(moved, Geometry::Point2(point2(3.0, 0.0)));
    }
}
