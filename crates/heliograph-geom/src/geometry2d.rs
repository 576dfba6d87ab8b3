//! 2D geometry value types.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::geom::{
    Point2, Vector2, point2, reflect_point2, reflect_vector2, rotate_point2, rotate_vector2,
    scale_point2,
};
use crate::{Error, Result};

/// A ray with a base point and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray2 {
    pub p: Point2,
    pub v: Vector2,
}

impl Ray2 {
    pub fn new(p: Point2, v: Vector2) -> Self {
        Self { p, v }
    }

    pub fn translate(&self, moving_vec: Vector2) -> Self {
        Self::new(self.p + moving_vec, self.v)
    }

    pub fn rotate(&self, angle: f64, origin: Point2) -> Self {
        Self::new(
            rotate_point2(self.p, angle, origin),
            rotate_vector2(self.v, angle),
        )
    }

    pub fn scale(&self, factor: f64, origin: Option<Point2>) -> Self {
        Self::new(scale_point2(self.p, factor, origin), self.v * factor)
    }

    pub fn reflect(&self, normal: Vector2, origin: Point2) -> Self {
        Self::new(
            reflect_point2(self.p, normal, origin),
            reflect_vector2(self.v, normal),
        )
    }
}

/// A bounded line segment stored as base point plus direction vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment2 {
    pub p: Point2,
    pub v: Vector2,
}

impl LineSegment2 {
    pub fn new(p: Point2, v: Vector2) -> Self {
        Self { p, v }
    }

    pub fn from_end_points(p1: Point2, p2: Point2) -> Self {
        Self::new(p1, p2 - p1)
    }

    pub fn p1(&self) -> Point2 {
        self.p
    }

    pub fn p2(&self) -> Point2 {
        self.p + self.v
    }

    pub fn length(&self) -> f64 {
        self.v.length()
    }

    pub fn translate(&self, moving_vec: Vector2) -> Self {
        Self::new(self.p + moving_vec, self.v)
    }

    pub fn rotate(&self, angle: f64, origin: Point2) -> Self {
        Self::new(
            rotate_point2(self.p, angle, origin),
            rotate_vector2(self.v, angle),
        )
    }

    pub fn scale(&self, factor: f64, origin: Option<Point2>) -> Self {
        Self::new(scale_point2(self.p, factor, origin), self.v * factor)
    }

    pub fn reflect(&self, normal: Vector2, origin: Point2) -> Self {
        Self::new(
            reflect_point2(self.p, normal, origin),
            reflect_vector2(self.v, normal),
        )
    }
}

/// An open polyline. `interpolated` marks a curve that should render smoothly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline2 {
    pub vertices: Vec<Point2>,
    #[serde(default)]
    pub interpolated: bool,
}

impl Polyline2 {
    pub fn new(vertices: Vec<Point2>, interpolated: bool) -> Self {
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

    pub fn translate(&self, moving_vec: Vector2) -> Self {
        self.map(|p| p + moving_vec)
    }

    pub fn rotate(&self, angle: f64, origin: Point2) -> Self {
        self.map(|p| rotate_point2(p, angle, origin))
    }

    pub fn scale(&self, factor: f64, origin: Option<Point2>) -> Self {
        self.map(|p| scale_point2(p, factor, origin))
    }

    pub fn reflect(&self, normal: Vector2, origin: Point2) -> Self {
        self.map(|p| reflect_point2(p, normal, origin))
    }

    fn map(&self, f: impl Fn(Point2) -> Point2) -> Self {
        Self {
            vertices: self.vertices.iter().copied().map(f).collect(),
            interpolated: self.interpolated,
        }
    }
}

/// A circular arc swept counterclockwise from `a1` to `a2` about `c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc2 {
    pub c: Point2,
    pub r: f64,
    pub a1: f64,
    pub a2: f64,
}

impl Arc2 {
    pub fn new(c: Point2, r: f64, a1: f64, a2: f64) -> Self {
        Self { c, r, a1, a2 }
    }

    pub fn circle(c: Point2, r: f64) -> Self {
        Self::new(c, r, 0.0, TAU)
    }

    pub fn is_circle(&self) -> bool {
        (self.a2 - self.a1).abs() >= TAU - 1e-9
    }

    /// Total swept angle; a full circle reports `2π`.
    pub fn angle(&self) -> f64 {
        if self.is_circle() {
            TAU
        } else {
            (self.a2 - self.a1).rem_euclid(TAU)
        }
    }

    /// True when the stored angles run clockwise.
    pub fn is_inverted(&self) -> bool {
        self.a1 > self.a2
    }

    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        point2(
            self.c.x + self.r * angle.cos(),
            self.c.y + self.r * angle.sin(),
        )
    }

    pub fn p1(&self) -> Point2 {
        self.point_at_angle(self.a1)
    }

    pub fn p2(&self) -> Point2 {
        self.point_at_angle(self.a2)
    }

    pub fn length(&self) -> f64 {
        self.r * self.angle()
    }

    pub fn translate(&self, moving_vec: Vector2) -> Self {
        Self::new(self.c + moving_vec, self.r, self.a1, self.a2)
    }

    pub fn rotate(&self, angle: f64, origin: Point2) -> Self {
        Self::new(
            rotate_point2(self.c, angle, origin),
            self.r,
            self.a1 + angle,
            self.a2 + angle,
        )
    }

    pub fn scale(&self, factor: f64, origin: Option<Point2>) -> Self {
        Self::new(
            scale_point2(self.c, factor, origin),
            self.r * factor,
            self.a1,
            self.a2,
        )
    }
}

/// A closed polygon defined by an ordered boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon2 {
    pub vertices: Vec<Point2>,
}

impl Polygon2 {
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Signed shoelace area, absolute value.
    pub fn area(&self) -> f64 {
        let v = &self.vertices;
        let n = v.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        for i in 0..n {
            let a = v[i];
            let b = v[(i + 1) % n];
            twice += a.x * b.y - b.x * a.y;
        }
        (twice / 2.0).abs()
    }

    pub fn translate(&self, moving_vec: Vector2) -> Self {
        self.map(|p| p + moving_vec)
    }

    pub fn rotate(&self, angle: f64, origin: Point2) -> Self {
        self.map(|p| rotate_point2(p, angle, origin))
    }

    pub fn scale(&self, factor: f64, origin: Option<Point2>) -> Self {
        self.map(|p| scale_point2(p, factor, origin))
    }

    pub fn reflect(&self, normal: Vector2, origin: Point2) -> Self {
        self.map(|p| reflect_point2(p, normal, origin))
    }

    fn map(&self, f: impl Fn(Point2) -> Point2) -> Self {
        Self {
            vertices: self.vertices.iter().copied().map(f).collect(),
        }
    }
}

/// A face-vertex mesh. Faces are triangles or quads indexing into `vertices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh2 {
    pub vertices: Vec<Point2>,
    pub faces: Vec<Vec<usize>>,
}

impl Mesh2 {
    pub fn new(vertices: Vec<Point2>, faces: Vec<Vec<usize>>) -> Result<Self> {
        validate_faces(&faces, vertices.len())?;
        Ok(Self { vertices, faces })
    }

    pub fn face_vertices(&self, face: usize) -> Vec<Point2> {
        self.faces[face].iter().map(|&i| self.vertices[i]).collect()
    }

    pub fn face_centroids(&self) -> Vec<Point2> {
        self.faces
            .iter()
            .map(|f| {
                let n = f.len() as f64;
                let (sx, sy) = f.iter().fold((0.0, 0.0), |(sx, sy), &i| {
                    (sx + self.vertices[i].x, sy + self.vertices[i].y)
                });
                point2(sx / n, sy / n)
            })
            .collect()
    }

    pub fn area(&self) -> f64 {
        (0..self.faces.len())
            .map(|f| Polygon2::new(self.face_vertices(f)).area())
            .sum()
    }

    pub fn translate(&self, moving_vec: Vector2) -> Self {
        self.map(|p| p + moving_vec)
    }

    pub fn rotate(&self, angle: f64, origin: Point2) -> Self {
        self.map(|p| rotate_point2(p, angle, origin))
    }

    pub fn scale(&self, factor: f64, origin: Option<Point2>) -> Self {
        self.map(|p| scale_point2(p, factor, origin))
    }

    pub fn reflect(&self, normal: Vector2, origin: Point2) -> Self {
        self.map(|p| reflect_point2(p, normal, origin))
    }

    fn map(&self, f: impl Fn(Point2) -> Point2) -> Self {
        Self {
            vertices: self.vertices.iter().copied().map(f).collect(),
            faces: self.faces.clone(),
        }
    }
}

pub(crate) fn validate_faces(faces: &[Vec<usize>], vertex_count: usize) -> Result<()> {
    for (fi, face) in faces.iter().enumerate() {
        if face.len() < 3 || face.len() > 4 {
            return Err(Error::InvalidFace {
                index: fi,
                len: face.len(),
            });
        }
        for &vi in face {
            if vi >= vertex_count {
                return Err(Error::FaceIndexOutOfRange {
                    face: fi,
                    vertex: vi,
                    count: vertex_count,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::vector2;

    #[test]
    fn segment_endpoints_and_length() {
        let seg = LineSegment2::from_end_points(point2(1.0, 1.0), point2(4.0, 5.0));
        assert_eq!(seg.p1(), point2(1.0, 1.0));
        assert_eq!(seg.p2(), point2(4.0, 5.0));
        assert!((seg.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn half_circle_has_pi_sweep() {
        let arc = Arc2::new(point2(0.0, 0.0), 2.0, 0.0, std::f64::consts::PI);
        assert!(!arc.is_circle());
        assert!((arc.angle() - std::f64::consts::PI).abs() < 1e-12);
        assert!((arc.p2().x + 2.0).abs() < 1e-12);
    }

    #[test]
    fn circle_constructor_reports_circle() {
        assert!(Arc2::circle(point2(1.0, 1.0), 3.0).is_circle());
    }

    #[test]
    fn mesh_rejects_bad_faces() {
        let verts = vec![point2(0.0, 0.0), point2(1.0, 0.0), point2(1.0, 1.0)];
        assert!(Mesh2::new(verts.clone(), vec![vec![0, 1]]).is_err());
        assert!(Mesh2::new(verts.clone(), vec![vec![0, 1, 7]]).is_err());
        assert!(Mesh2::new(verts, vec![vec![0, 1, 2]]).is_ok());
    }

    #[test]
    fn unit_square_mesh_area() {
        let mesh = Mesh2::new(
            vec![
                point2(0.0, 0.0),
                point2(1.0, 0.0),
                point2(1.0, 1.0),
                point2(0.0, 1.0),
            ],
            vec![vec![0, 1, 2, 3]],
        )
        .unwrap();
        assert!((mesh.area() - 1.0).abs() < 1e-12);
        assert_eq!(mesh.face_centroids()[0], point2(0.5, 0.5));
    }

    #[test]
    fn polyline_length_sums_segments() {
        let pl = Polyline2::new(
            vec![point2(0.0, 0.0), point2(3.0, 0.0), point2(3.0, 4.0)],
            false,
        );
        assert!((pl.length() - 7.0).abs() < 1e-12);
        let moved = pl.translate(vector2(1.0, 1.0));
        assert_eq!(moved.vertices[0], point2(1.0, 1.0));
    }
}
