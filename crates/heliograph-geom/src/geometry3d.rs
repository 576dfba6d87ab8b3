//! 3D geometry value types.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::geom::{
    Point2, Point3, Vector3, point2, point3, reflect_point3, reflect_vector3, rotate_point3,
    rotate_vector3, rotate_xy_point3, rotate_xy_vector3, scale_point3, vector3,
};
use crate::geometry2d::validate_faces;
use crate::{Polyline2, Result};

/// An oriented plane with an explicit local X axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Unit normal.
    pub n: Vector3,
    /// Origin of the plane's coordinate system.
    pub o: Point3,
    /// Local X axis; must be perpendicular to `n`.
    pub x: Vector3,
}

impl Plane {
    pub fn new(n: Vector3, o: Point3, x: Vector3) -> Self {
        Self {
            n: n.normalize(),
            o,
            x: x.normalize(),
        }
    }

    /// World XY plane at the given origin.
    pub fn world_xy(o: Point3) -> Self {
        Self::new(vector3(0.0, 0.0, 1.0), o, vector3(1.0, 0.0, 0.0))
    }

    /// Local Y axis, completing the right-handed frame.
    pub fn y(&self) -> Vector3 {
        self.n.cross(self.x)
    }

    /// Map a point in the plane's 2D coordinates to world space.
    pub fn xy_to_xyz(&self, p: Point2) -> Point3 {
        self.o + self.x * p.x + self.y() * p.y
    }

    /// Project a world point into the plane's 2D coordinates.
    pub fn xyz_to_xy(&self, p: Point3) -> Point2 {
        let d = p - self.o;
        point2(d.dot(self.x), d.dot(self.y()))
    }

    pub fn translate(&self, moving_vec: Vector3) -> Self {
        Self {
            n: self.n,
            o: self.o + moving_vec,
            x: self.x,
        }
    }

    pub fn rotate(&self, axis: Vector3, angle: f64, origin: Point3) -> Self {
        Self {
            n: rotate_vector3(self.n, axis, angle),
            o: rotate_point3(self.o, axis, angle, origin),
            x: rotate_vector3(self.x, axis, angle),
        }
    }

    pub fn rotate_xy(&self, angle: f64, origin: Point3) -> Self {
        Self {
            n: rotate_xy_vector3(self.n, angle),
            o: rotate_xy_point3(self.o, angle, origin),
            x: rotate_xy_vector3(self.x, angle),
        }
    }

    pub fn scale(&self, factor: f64, origin: Option<Point3>) -> Self {
        Self {
            n: self.n,
            o: scale_point3(self.o, factor, origin),
            x: self.x,
        }
    }

    pub fn reflect(&self, normal: Vector3, origin: Point3) -> Self {
        Self {
            n: reflect_vector3(self.n, normal),
            o: reflect_point3(self.o, normal, origin),
            x: reflect_vector3(self.x, normal),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray3 {
    pub p: Point3,
    pub v: Vector3,
}

impl Ray3 {
    pub fn new(p: Point3, v: Vector3) -> Self {
        Self { p, v }
    }

    pub fn translate(&self, moving_vec: Vector3) -> Self {
        Self::new(self.p + moving_vec, self.v)
    }

    pub fn rotate(&self, axis: Vector3, angle: f64, origin: Point3) -> Self {
        Self::new(
            rotate_point3(self.p, axis, angle, origin),
            rotate_vector3(self.v, axis, angle),
        )
    }

    pub fn rotate_xy(&self, angle: f64, origin: Point3) -> Self {
        Self::new(
            rotate_xy_point3(self.p, angle, origin),
            rotate_xy_vector3(self.v, angle),
        )
    }

    pub fn scale(&self, factor: f64, origin: Option<Point3>) -> Self {
        Self::new(scale_point3(self.p, factor, origin), self.v * factor)
    }

    pub fn reflect(&self, normal: Vector3, origin: Point3) -> Self {
        Self::new(
            reflect_point3(self.p, normal, origin),
            reflect_vector3(self.v, normal),
        )
    }
}

/// A bounded line segment stored as base point plus direction vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment3 {
    pub p: Point3,
    pub v: Vector3,
}

impl LineSegment3 {
    pub fn new(p: Point3, v: Vector3) -> Self {
        Self { p, v }
    }

    pub fn from_end_points(p1: Point3, p2: Point3) -> Self {
        Self::new(p1, p2 - p1)
    }

    pub fn p1(&self) -> Point3 {
        self.p
    }

    pub fn p2(&self) -> Point3 {
        self.p + self.v
    }

    pub fn length(&self) -> f64 {
        self.v.length()
    }

    pub fn translate(&self, moving_vec: Vector3) -> Self {
        Self::new(self.p + moving_vec, self.v)
    }

    pub fn rotate(&self, axis: Vector3, angle: f64, origin: Point3) -> Self {
        Self::new(
            rotate_point3(self.p, axis, angle, origin),
            rotate_vector3(self.v, axis, angle),
        )
    }

    pub fn rotate_xy(&self, angle: f64, origin: Point3) -> Self {
        Self::new(
            rotate_xy_point3(self.p, angle, origin),
            rotate_xy_vector3(self.v, angle),
        )
    }

    pub fn scale(&self, factor: f64, origin: Option<Point3>) -> Self {
        Self::new(scale_point3(self.p, factor, origin), self.v * factor)
    }

    pub fn reflect(&self, normal: Vector3, origin: Point3) -> Self {
        Self::new(
            reflect_point3(self.p, normal, origin),
            reflect_vector3(self.v, normal),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline3 {
    pub vertices: Vec<Point3>,
    #[serde(default)]
    pub interpolated: bool,
}

impl Polyline3 {
    pub fn new(vertices: Vec<Point3>, interpolated: bool) -> Self {
        Self {
            vertices,
            interpolated,
        }
    }

    pub fn length(&self) -> f64 {
        self.vertices
            .windows(2)
            .map(|w| (w[1] - w[0]).length())
            .sum()
    }

    pub fn translate(&self, moving_vec: Vector3) -> Self {
        self.map(|p| p + moving_vec)
    }

    pub fn rotate(&self, axis: Vector3, angle: f64, origin: Point3) -> Self {
        self.map(|p| rotate_point3(p, axis, angle, origin))
    }

    pub fn rotate_xy(&self, angle: f64, origin: Point3) -> Self {
        self.map(|p| rotate_xy_point3(p, angle, origin))
    }

    pub fn scale(&self, factor: f64, origin: Option<Point3>) -> Self {
        self.map(|p| scale_point3(p, factor, origin))
    }

    pub fn reflect(&self, normal: Vector3, origin: Point3) -> Self {
        self.map(|p| reflect_point3(p, normal, origin))
    }

    fn map(&self, f: impl Fn(Point3) -> Point3) -> Self {
        Self {
            vertices: self.vertices.iter().copied().map(f).collect(),
            interpolated: self.interpolated,
        }
    }
}

/// A circular arc in an oriented plane, swept counterclockwise from `a1` to
/// `a2` in the plane's own coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc3 {
    pub plane: Plane,
    pub radius: f64,
    pub a1: f64,
    pub a2: f64,
}

impl Arc3 {
    pub fn new(plane: Plane, radius: f64, a1: f64, a2: f64) -> Self {
        Self {
            plane,
            radius,
            a1,
            a2,
        }
    }

    pub fn circle(plane: Plane, radius: f64) -> Self {
        Self::new(plane, radius, 0.0, TAU)
    }

    pub fn is_circle(&self) -> bool {
        (self.a2 - self.a1).abs() >= TAU - 1e-9
    }

    pub fn angle(&self) -> f64 {
        if self.is_circle() {
            TAU
        } else {
            (self.a2 - self.a1).rem_euclid(TAU)
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.a1 > self.a2
    }

    pub fn point_at_angle(&self, angle: f64) -> Point3 {
        self.plane.xy_to_xyz(point2(
            self.radius * angle.cos(),
            self.radius * angle.sin(),
        ))
    }

    pub fn p1(&self) -> Point3 {
        self.point_at_angle(self.a1)
    }

    pub fn p2(&self) -> Point3 {
        self.point_at_angle(self.a2)
    }

    pub fn length(&self) -> f64 {
        self.radius * self.angle()
    }

    /// Evenly spaced points along the arc, including both ends.
    pub fn subdivide_evenly(&self, count: usize) -> Vec<Point3> {
        let count = count.max(1);
        let step = self.angle() / count as f64;
        (0..=count)
            .map(|i| self.point_at_angle(self.a1 + step * i as f64))
            .collect()
    }

    /// Flatten the arc into an interpolated polyline for rendering.
    pub fn to_polyline(&self, subdivisions: usize) -> Polyline3 {
        Polyline3::new(self.subdivide_evenly(subdivisions), true)
    }

    /// The arc's footprint in the world XY plane, dropping the Z dimension.
    pub fn to_arc2(&self) -> crate::Arc2 {
        crate::Arc2::new(
            point2(self.plane.o.x, self.plane.o.y),
            self.radius,
            self.a1,
            self.a2,
        )
    }

    pub fn translate(&self, moving_vec: Vector3) -> Self {
        Self::new(self.plane.translate(moving_vec), self.radius, self.a1, self.a2)
    }

    pub fn rotate(&self, axis: Vector3, angle: f64, origin: Point3) -> Self {
        Self::new(
            self.plane.rotate(axis, angle, origin),
            self.radius,
            self.a1,
            self.a2,
        )
    }

    pub fn rotate_xy(&self, angle: f64, origin: Point3) -> Self {
        Self::new(
            self.plane.rotate_xy(angle, origin),
            self.radius,
            self.a1,
            self.a2,
        )
    }

    pub fn scale(&self, factor: f64, origin: Option<Point3>) -> Self {
        Self::new(
            self.plane.scale(factor, origin),
            self.radius * factor,
            self.a1,
            self.a2,
        )
    }

    pub fn reflect(&self, normal: Vector3, origin: Point3) -> Self {
        Self::new(
            self.plane.reflect(normal, origin),
            self.radius,
            self.a1,
            self.a2,
        )
    }
}

/// A planar face with an outer boundary and optional holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face3 {
    pub boundary: Vec<Point3>,
    #[serde(default)]
    pub holes: Vec<Vec<Point3>>,
}

impl Face3 {
    pub fn new(boundary: Vec<Point3>, holes: Vec<Vec<Point3>>) -> Self {
        Self { boundary, holes }
    }

    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Boundary and hole vertices chained together.
    pub fn vertices(&self) -> Vec<Point3> {
        let mut verts = self.boundary.clone();
        for hole in &self.holes {
            verts.extend(hole.iter().copied());
        }
        verts
    }

    /// Area via the Newell normal; holes subtract from the boundary.
    pub fn area(&self) -> f64 {
        let ring_area = |ring: &[Point3]| -> f64 {
            let n = ring.len();
            if n < 3 {
                return 0.0;
            }
            let mut normal = vector3(0.0, 0.0, 0.0);
            for i in 0..n {
                let a = ring[i];
                let b = ring[(i + 1) % n];
                normal += (a - point3(0.0, 0.0, 0.0)).cross(b - point3(0.0, 0.0, 0.0));
            }
            normal.length() / 2.0
        };
        let hole_area: f64 = self.holes.iter().map(|h| ring_area(h)).sum();
        (ring_area(&self.boundary) - hole_area).max(0.0)
    }

    pub fn translate(&self, moving_vec: Vector3) -> Self {
        self.map(|p| p + moving_vec)
    }

    pub fn rotate(&self, axis: Vector3, angle: f64, origin: Point3) -> Self {
        self.map(|p| rotate_point3(p, axis, angle, origin))
    }

    pub fn rotate_xy(&self, angle: f64, origin: Point3) -> Self {
        self.map(|p| rotate_xy_point3(p, angle, origin))
    }

    pub fn scale(&self, factor: f64, origin: Option<Point3>) -> Self {
        self.map(|p| scale_point3(p, factor, origin))
    }

    pub fn reflect(&self, normal: Vector3, origin: Point3) -> Self {
        self.map(|p| reflect_point3(p, normal, origin))
    }

    fn map(&self, f: impl Fn(Point3) -> Point3) -> Self {
        Self {
            boundary: self.boundary.iter().copied().map(&f).collect(),
            holes: self
                .holes
                .iter()
                .map(|h| h.iter().copied().map(&f).collect())
                .collect(),
        }
    }
}

/// A face-vertex mesh. Faces are triangles or quads indexing into `vertices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh3 {
    pub vertices: Vec<Point3>,
    pub faces: Vec<Vec<usize>>,
}

impl Mesh3 {
    pub fn new(vertices: Vec<Point3>, faces: Vec<Vec<usize>>) -> Result<Self> {
        validate_faces(&faces, vertices.len())?;
        Ok(Self { vertices, faces })
    }

    pub fn face_vertices(&self, face: usize) -> Vec<Point3> {
        self.faces[face].iter().map(|&i| self.vertices[i]).collect()
    }

    pub fn face_centroids(&self) -> Vec<Point3> {
        self.faces
            .iter()
            .map(|f| {
                let n = f.len() as f64;
                let sum = f.iter().fold(vector3(0.0, 0.0, 0.0), |acc, &i| {
                    acc + (self.vertices[i] - point3(0.0, 0.0, 0.0))
                });
                point3(sum.x / n, sum.y / n, sum.z / n)
            })
            .collect()
    }

    pub fn translate(&self, moving_vec: Vector3) -> Self {
        self.map(|p| p + moving_vec)
    }

    pub fn rotate(&self, axis: Vector3, angle: f64, origin: Point3) -> Self {
        self.map(|p| rotate_point3(p, axis, angle, origin))
    }

    pub fn rotate_xy(&self, angle: f64, origin: Point3) -> Self {
        self.map(|p| rotate_xy_point3(p, angle, origin))
    }

    pub fn scale(&self, factor: f64, origin: Option<Point3>) -> Self {
        self.map(|p| scale_point3(p, factor, origin))
    }

    pub fn reflect(&self, normal: Vector3, origin: Point3) -> Self {
        self.map(|p| reflect_point3(p, normal, origin))
    }

    fn map(&self, f: impl Fn(Point3) -> Point3) -> Self {
        Self {
            vertices: self.vertices.iter().copied().map(f).collect(),
            faces: self.faces.clone(),
        }
    }
}

/// A closed solid made of faces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyface3 {
    pub faces: Vec<Face3>,
}

impl Polyface3 {
    pub fn new(faces: Vec<Face3>) -> Self {
        Self { faces }
    }

    pub fn translate(&self, moving_vec: Vector3) -> Self {
        Self::new(self.faces.iter().map(|f| f.translate(moving_vec)).collect())
    }

    pub fn rotate(&self, axis: Vector3, angle: f64, origin: Point3) -> Self {
        Self::new(
            self.faces
                .iter()
                .map(|f| f.rotate(axis, angle, origin))
                .collect(),
        )
    }

    pub fn rotate_xy(&self, angle: f64, origin: Point3) -> Self {
        Self::new(
            self.faces
                .iter()
                .map(|f| f.rotate_xy(angle, origin))
                .collect(),
        )
    }

    pub fn scale(&self, factor: f64, origin: Option<Point3>) -> Self {
        Self::new(self.faces.iter().map(|f| f.scale(factor, origin)).collect())
    }

    pub fn reflect(&self, normal: Vector3, origin: Point3) -> Self {
        Self::new(
            self.faces
                .iter()
                .map(|f| f.reflect(normal, origin))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// The great circle in the world XY plane through the center.
    pub fn equator(&self) -> Arc3 {
        Arc3::circle(Plane::world_xy(self.center), self.radius)
    }

    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * std::f64::consts::PI * self.radius.powi(3)
    }

    pub fn translate(&self, moving_vec: Vector3) -> Self {
        Self::new(self.center + moving_vec, self.radius)
    }

    pub fn rotate(&self, axis: Vector3, angle: f64, origin: Point3) -> Self {
        Self::new(rotate_point3(self.center, axis, angle, origin), self.radius)
    }

    pub fn rotate_xy(&self, angle: f64, origin: Point3) -> Self {
        Self::new(rotate_xy_point3(self.center, angle, origin), self.radius)
    }

    pub fn scale(&self, factor: f64, origin: Option<Point3>) -> Self {
        Self::new(
            scale_point3(self.center, factor, origin),
            self.radius * factor,
        )
    }

    pub fn reflect(&self, normal: Vector3, origin: Point3) -> Self {
        Self::new(reflect_point3(self.center, normal, origin), self.radius)
    }
}

/// A right cone: apex at `vertex`, axis pointing to the base center,
/// `angle` the half-angle between axis and slant in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cone {
    pub vertex: Point3,
    pub axis: Vector3,
    pub angle: f64,
}

impl Cone {
    pub fn new(vertex: Point3, axis: Vector3, angle: f64) -> Self {
        Self {
            vertex,
            axis,
            angle,
        }
    }

    pub fn height(&self) -> f64 {
        self.axis.length()
    }

    pub fn radius(&self) -> f64 {
        self.height() * self.angle.tan()
    }

    pub fn base_center(&self) -> Point3 {
        self.vertex + self.axis
    }

    /// The base circle, oriented perpendicular to the axis.
    pub fn base(&self) -> Arc3 {
        Arc3::circle(axis_plane(self.base_center(), self.axis), self.radius())
    }

    pub fn translate(&self, moving_vec: Vector3) -> Self {
        Self::new(self.vertex + moving_vec, self.axis, self.angle)
    }

    pub fn rotate(&self, axis: Vector3, angle: f64, origin: Point3) -> Self {
        Self::new(
            rotate_point3(self.vertex, axis, angle, origin),
            rotate_vector3(self.axis, axis, angle),
            self.angle,
        )
    }

    pub fn rotate_xy(&self, angle: f64, origin: Point3) -> Self {
        Self::new(
            rotate_xy_point3(self.vertex, angle, origin),
            rotate_xy_vector3(self.axis, angle),
            self.angle,
        )
    }

    pub fn scale(&self, factor: f64, origin: Option<Point3>) -> Self {
        Self::new(
            scale_point3(self.vertex, factor, origin),
            self.axis * factor,
            self.angle,
        )
    }

    pub fn reflect(&self, normal: Vector3, origin: Point3) -> Self {
        Self::new(
            reflect_point3(self.vertex, normal, origin),
            reflect_vector3(self.axis, normal),
            self.angle,
        )
    }
}

/// A right cylinder: bottom base center, axis to the top base, radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    pub center: Point3,
    pub axis: Vector3,
    pub radius: f64,
}

impl Cylinder {
    pub fn new(center: Point3, axis: Vector3, radius: f64) -> Self {
        Self {
            center,
            axis,
            radius,
        }
    }

    pub fn height(&self) -> f64 {
        self.axis.length()
    }

    pub fn base_bottom(&self) -> Arc3 {
        Arc3::circle(axis_plane(self.center, self.axis), self.radius)
    }

    pub fn base_top(&self) -> Arc3 {
        Arc3::circle(axis_plane(self.center + self.axis, self.axis), self.radius)
    }

    pub fn translate(&self, moving_vec: Vector3) -> Self {
        Self::new(self.center + moving_vec, self.axis, self.radius)
    }

    pub fn rotate(&self, axis: Vector3, angle: f64, origin: Point3) -> Self {
        Self::new(
            rotate_point3(self.center, axis, angle, origin),
            rotate_vector3(self.axis, axis, angle),
            self.radius,
        )
    }

    pub fn rotate_xy(&self, angle: f64, origin: Point3) -> Self {
        Self::new(
            rotate_xy_point3(self.center, angle, origin),
            rotate_xy_vector3(self.axis, angle),
            self.radius,
        )
    }

    pub fn scale(&self, factor: f64, origin: Option<Point3>) -> Self {
        Self::new(
            scale_point3(self.center, factor, origin),
            self.axis * factor,
            self.radius * factor,
        )
    }

    pub fn reflect(&self, normal: Vector3, origin: Point3) -> Self {
        Self::new(
            reflect_point3(self.center, normal, origin),
            reflect_vector3(self.axis, normal),
            self.radius,
        )
    }
}

/// Build a plane perpendicular to `axis`, picking a stable local X axis.
fn axis_plane(origin: Point3, axis: Vector3) -> Plane {
    let n = axis.normalize();
    let fallback = if n.x.abs() < 0.9 {
        vector3(1.0, 0.0, 0.0)
    } else {
        vector3(0.0, 1.0, 0.0)
    };
    let x = fallback.cross(n).cross(n).normalize() * -1.0;
    // Degenerate cross products only occur when axis is parallel to the
    // fallback, which the fallback choice above rules out.
    Plane::new(n, origin, x)
}

/// Drop a 3D polyline onto the world XY plane.
pub fn polyline3_to_2d(polyline: &Polyline3) -> Polyline2 {
    Polyline2::new(
        polyline
            .vertices
            .iter()
            .map(|p| point2(p.x, p.y))
            .collect(),
        polyline.interpolated,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_round_trips_points() {
        let plane = Plane::new(
            vector3(0.0, 0.0, 1.0),
            point3(2.0, 3.0, 0.0),
            vector3(1.0, 0.0, 0.0),
        );
        let p = point2(1.5, -2.0);
        let world = plane.xy_to_xyz(p);
        assert_eq!(world, point3(3.5, 1.0, 0.0));
        let back = plane.xyz_to_xy(world);
        assert!((back - p).length() < 1e-12);
    }

    #[test]
    fn arc3_subdivision_ends_on_endpoints() {
        let arc = Arc3::new(
            Plane::world_xy(point3(0.0, 0.0, 0.0)),
            1.0,
            0.0,
            std::f64::consts::PI,
        );
        let pts = arc.subdivide_evenly(4);
        assert_eq!(pts.len(), 5);
        assert!((pts[0] - arc.p1()).length() < 1e-12);
        assert!((pts[4] - arc.p2()).length() < 1e-12);
    }

    #[test]
    fn cone_base_radius_from_half_angle() {
        let cone = Cone::new(
            point3(0.0, 0.0, 10.0),
            vector3(0.0, 0.0, -10.0),
            std::f64::consts::FRAC_PI_4,
        );
        assert!((cone.radius() - 10.0).abs() < 1e-9);
        assert_eq!(cone.base_center(), point3(0.0, 0.0, 0.0));
        assert!(cone.base().is_circle());
    }

    #[test]
    fn cylinder_bases_are_axis_normal_circles() {
        let cyl = Cylinder::new(point3(1.0, 1.0, 0.0), vector3(0.0, 0.0, 5.0), 2.0);
        let bottom = cyl.base_bottom();
        let top = cyl.base_top();
        assert!((bottom.plane.o.z - 0.0).abs() < 1e-12);
        assert!((top.plane.o.z - 5.0).abs() < 1e-12);
        assert!((bottom.plane.n.dot(vector3(1.0, 0.0, 0.0))).abs() < 1e-12);
    }

    #[test]
    fn face_area_subtracts_holes() {
        let face = Face3::new(
            vec![
                point3(0.0, 0.0, 0.0),
                point3(4.0, 0.0, 0.0),
                point3(4.0, 4.0, 0.0),
                point3(0.0, 4.0, 0.0),
            ],
            vec![vec![
                point3(1.0, 1.0, 0.0),
                point3(2.0, 1.0, 0.0),
                point3(2.0, 2.0, 0.0),
                point3(1.0, 2.0, 0.0),
            ]],
        );
        assert!((face.area() - 15.0).abs() < 1e-9);
        assert_eq!(face.vertices().len(), 8);
    }
}
