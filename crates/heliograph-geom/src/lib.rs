#![forbid(unsafe_code)]

//! Immutable geometry value types for the heliograph renderer.
//!
//! Every type here is a plain value: affine operations (`translate`, `rotate`,
//! `rotate_xy`, `scale`, `reflect`) return a new value and never mutate the
//! receiver. Angles are radians throughout. Serialized dictionary forms carry
//! a `"type"` discriminator string (see [`dict`]).

pub mod color;
pub mod dict;
pub mod geom;
pub mod geometry2d;
pub mod geometry3d;

mod bounding;

pub use bounding::{Geometry, bounding_box};
pub use color::Color;
pub use geom::{Point2, Point3, Vector2, Vector3, point2, point3, vector2, vector3};
pub use geometry2d::{Arc2, LineSegment2, Mesh2, Polygon2, Polyline2, Ray2};
pub use geometry3d::{
    Arc3, Cone, Cylinder, Face3, LineSegment3, Mesh3, Plane, Polyface3, Polyline3, Ray3, Sphere,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("geometry dictionary lacks the required \"type\" key")]
    MissingType,
    #[error("\"{got}\" is not a recognized geometry type")]
    UnknownType { got: String },
    #[error("expected a {expected} dictionary, got {got}")]
    TypeMismatch { expected: &'static str, got: String },
    #[error("mesh face {index} has {len} vertices; only triangles and quads are supported")]
    InvalidFace { index: usize, len: usize },
    #[error("mesh face {face} references vertex {vertex} but the mesh has {count} vertices")]
    FaceIndexOutOfRange {
        face: usize,
        vertex: usize,
        count: usize,
    },
    #[error("geometry JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
