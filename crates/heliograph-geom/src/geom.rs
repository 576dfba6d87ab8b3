//! Shared `euclid` type aliases and low-level transform helpers.

pub type Unit = euclid::UnknownUnit;

pub type Point2 = euclid::Point2D<f64, Unit>;
pub type Vector2 = euclid::Vector2D<f64, Unit>;
pub type Point3 = euclid::Point3D<f64, Unit>;
pub type Vector3 = euclid::Vector3D<f64, Unit>;

pub fn point2(x: f64, y: f64) -> Point2 {
    euclid::point2(x, y)
}

pub fn vector2(x: f64, y: f64) -> Vector2 {
    euclid::vec2(x, y)
}

pub fn point3(x: f64, y: f64, z: f64) -> Point3 {
    euclid::point3(x, y, z)
}

pub fn vector3(x: f64, y: f64, z: f64) -> Vector3 {
    euclid::vec3(x, y, z)
}

/// Rotate a vector about an arbitrary axis (Rodrigues' formula).
pub fn rotate_vector3(v: Vector3, axis: Vector3, angle: f64) -> Vector3 {
    let k = axis.normalize();
    let (sin, cos) = angle.sin_cos();
    v * cos + k.cross(v) * sin + k * (k.dot(v) * (1.0 - cos))
}

/// Rotate a point about an axis anchored at `origin`.
pub fn rotate_point3(p: Point3, axis: Vector3, angle: f64, origin: Point3) -> Point3 {
    origin + rotate_vector3(p - origin, axis, angle)
}

/// Rotate a vector counterclockwise in the world XY plane.
pub fn rotate_xy_vector3(v: Vector3, angle: f64) -> Vector3 {
    let (sin, cos) = angle.sin_cos();
    vector3(v.x * cos - v.y * sin, v.x * sin + v.y * cos, v.z)
}

pub fn rotate_xy_point3(p: Point3, angle: f64, origin: Point3) -> Point3 {
    origin + rotate_xy_vector3(p - origin, angle)
}

pub fn rotate_vector2(v: Vector2, angle: f64) -> Vector2 {
    let (sin, cos) = angle.sin_cos();
    vector2(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

pub fn rotate_point2(p: Point2, angle: f64, origin: Point2) -> Point2 {
    origin + rotate_vector2(p - origin, angle)
}

/// Reflect a point across the plane through `origin` with unit normal `normal`.
pub fn reflect_point3(p: Point3, normal: Vector3, origin: Point3) -> Point3 {
    let n = normal.normalize();
    let d = (p - origin).dot(n);
    p - n * (2.0 * d)
}

pub fn reflect_vector3(v: Vector3, normal: Vector3) -> Vector3 {
    let n = normal.normalize();
    v - n * (2.0 * v.dot(n))
}

/// Reflect a point across the line through `origin` with 2D normal `normal`.
pub fn reflect_point2(p: Point2, normal: Vector2, origin: Point2) -> Point2 {
    let n = normal.normalize();
    let d = (p - origin).dot(n);
    p - n * (2.0 * d)
}

pub fn reflect_vector2(v: Vector2, normal: Vector2) -> Vector2 {
    let n = normal.normalize();
    v - n * (2.0 * v.dot(n))
}

pub fn scale_point3(p: Point3, factor: f64, origin: Option<Point3>) -> Point3 {
    let origin = origin.unwrap_or_else(|| point3(0.0, 0.0, 0.0));
    origin + (p - origin) * factor
}

pub fn scale_point2(p: Point2, factor: f64, origin: Option<Point2>) -> Point2 {
    let origin = origin.unwrap_or_else(|| point2(0.0, 0.0));
    origin + (p - origin) * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_about_z_axis_matches_xy_rotation() {
        let v = vector3(1.0, 0.0, 0.0);
        let by_axis = rotate_vector3(v, vector3(0.0, 0.0, 1.0), std::f64::consts::FRAC_PI_2);
        let by_xy = rotate_xy_vector3(v, std::f64::consts::FRAC_PI_2);
        assert!((by_axis - by_xy).length() < 1e-12);
        assert!((by_axis.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn reflect_across_xy_plane_negates_z() {
        let p = point3(1.0, 2.0, 3.0);
        let r = reflect_point3(p, vector3(0.0, 0.0, 1.0), point3(0.0, 0.0, 0.0));
        assert!((r.z + 3.0).abs() < 1e-12);
        assert!((r.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn scale_about_custom_origin() {
        let p = point2(3.0, 1.0);
        let s = scale_point2(p, 2.0, Some(point2(1.0, 1.0)));
        assert_eq!(s, point2(5.0, 1.0));
    }
}
