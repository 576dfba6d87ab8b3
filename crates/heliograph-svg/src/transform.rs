//! Transform functions for the `transform` attribute.

use std::fmt;

use crate::fmt::fmt_f64_into;

/// One SVG transform function. A `transform` attribute holds an ordered list
/// and applies them left to right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Matrix { a: f64, b: f64, c: f64, d: f64, e: f64, f: f64 },
    Translate { x: f64, y: Option<f64> },
    Scale { x: f64, y: Option<f64> },
    Rotate { angle: f64, center: Option<(f64, f64)> },
    SkewX { angle: f64 },
    SkewY { angle: f64 },
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Transform::Translate { x, y: Some(y) }
    }

    pub fn rotate(angle: f64) -> Self {
        Transform::Rotate {
            angle,
            center: None,
        }
    }

    pub fn rotate_about(angle: f64, cx: f64, cy: f64) -> Self {
        Transform::Rotate {
            angle,
            center: Some((cx, cy)),
        }
    }

    pub fn scale_uniform(factor: f64) -> Self {
        Transform::Scale { x: factor, y: None }
    }

    /// Join a transform sequence into attribute text.
    pub fn join(transforms: &[Transform]) -> String {
        let mut out = String::new();
        for (i, t) in transforms.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            t.write_into(&mut out);
        }
        out
    }

    fn write_into(&self, out: &mut String) {
        let args = |out: &mut String, name: &str, values: &[f64]| {
            out.push_str(name);
            out.push('(');
            for (i, &v) in values.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                fmt_f64_into(out, v);
            }
            out.push(')');
        };
        match *self {
            Transform::Matrix { a, b, c, d, e, f } => args(out, "matrix", &[a, b, c, d, e, f]),
            Transform::Translate { x, y: Some(y) } => args(out, "translate", &[x, y]),
            Transform::Translate { x, y: None } => args(out, "translate", &[x]),
            Transform::Scale { x, y: Some(y) } => args(out, "scale", &[x, y]),
            Transform::Scale { x, y: None } => args(out, "scale", &[x]),
            Transform::Rotate {
                angle,
                center: Some((cx, cy)),
            } => args(out, "rotate", &[angle, cx, cy]),
            Transform::Rotate {
                angle,
                center: None,
            } => args(out, "rotate", &[angle]),
            Transform::SkewX { angle } => args(out, "skewX", &[angle]),
            Transform::SkewY { angle } => args(out, "skewY", &[angle]),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_into(&mut out);
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_with_center() {
        assert_eq!(Transform::rotate_about(30.0, 10.0, 20.0).to_string(), "rotate(30 10 20)");
        assert_eq!(Transform::rotate(45.0).to_string(), "rotate(45)");
    }

    #[test]
    fn sequences_join_with_spaces() {
        let t = Transform::join(&[
            Transform::translate(1.0, 2.0),
            Transform::scale_uniform(0.5),
        ]);
        assert_eq!(t, "translate(1 2) scale(0.5)");
    }
}
