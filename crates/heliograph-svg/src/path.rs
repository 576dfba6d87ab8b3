//! Path data commands for the `d` attribute.

use std::fmt;

use crate::fmt::fmt_f64_into;

/// One command of SVG path data. Uppercase variants are absolute, the
/// `*Rel` variants are the lowercase relative forms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    MoveToRel { dx: f64, dy: f64 },
    LineTo { x: f64, y: f64 },
    LineToRel { dx: f64, dy: f64 },
    HorizontalTo { x: f64 },
    HorizontalToRel { dx: f64 },
    VerticalTo { y: f64 },
    VerticalToRel { dy: f64 },
    CubicTo { x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64 },
    CubicToRel { dx1: f64, dy1: f64, dx2: f64, dy2: f64, dx: f64, dy: f64 },
    SmoothCubicTo { x2: f64, y2: f64, x: f64, y: f64 },
    SmoothCubicToRel { dx2: f64, dy2: f64, dx: f64, dy: f64 },
    QuadraticTo { x1: f64, y1: f64, x: f64, y: f64 },
    QuadraticToRel { dx1: f64, dy1: f64, dx: f64, dy: f64 },
    SmoothQuadraticTo { x: f64, y: f64 },
    SmoothQuadraticToRel { dx: f64, dy: f64 },
    ArcTo {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    ArcToRel {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        dx: f64,
        dy: f64,
    },
    Close,
}

impl PathCommand {
    /// Join a command sequence into path-data text.
    pub fn join(commands: &[PathCommand]) -> String {
        let mut out = String::new();
        for (i, c) in commands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            c.write_into(&mut out);
        }
        out
    }

    fn write_into(&self, out: &mut String) {
        let mut nums = |out: &mut String, letter: char, values: &[f64]| {
            out.push(letter);
            for &v in values {
                out.push(' ');
                fmt_f64_into(out, v);
            }
        };
        match *self {
            PathCommand::MoveTo { x, y } => nums(out, 'M', &[x, y]),
            PathCommand::MoveToRel { dx, dy } => nums(out, 'm', &[dx, dy]),
            PathCommand::LineTo { x, y } => nums(out, 'L', &[x, y]),
            PathCommand::LineToRel { dx, dy } => nums(out, 'l', &[dx, dy]),
            PathCommand::HorizontalTo { x } => nums(out, 'H', &[x]),
            PathCommand::HorizontalToRel { dx } => nums(out, 'h', &[dx]),
            PathCommand::VerticalTo { y } => nums(out, 'V', &[y]),
            PathCommand::VerticalToRel { dy } => nums(out, 'v', &[dy]),
            PathCommand::CubicTo { x1, y1, x2, y2, x, y } => nums(out, 'C', &[x1, y1, x2, y2, x, y]),
            PathCommand::CubicToRel { dx1, dy1, dx2, dy2, dx, dy } => {
                nums(out, 'c', &[dx1, dy1, dx2, dy2, dx, dy])
            }
            PathCommand::SmoothCubicTo { x2, y2, x, y } => nums(out, 'S', &[x2, y2, x, y]),
            PathCommand::SmoothCubicToRel { dx2, dy2, dx, dy } => {
                nums(out, 's', &[dx2, dy2, dx, dy])
            }
            PathCommand::QuadraticTo { x1, y1, x, y } => nums(out, 'Q', &[x1, y1, x, y]),
            PathCommand::QuadraticToRel { dx1, dy1, dx, dy } => {
                nums(out, 'q', &[dx1, dy1, dx, dy])
            }
            PathCommand::SmoothQuadraticTo { x, y } => nums(out, 'T', &[x, y]),
            PathCommand::SmoothQuadraticToRel { dx, dy } => nums(out, 't', &[dx, dy]),
            PathCommand::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                nums(out, 'A', &[rx, ry, x_axis_rotation]);
                out.push(' ');
                out.push(if large_arc { '1' } else { '0' });
                out.push(' ');
                out.push(if sweep { '1' } else { '0' });
                out.push(' ');
                fmt_f64_into(out, x);
                out.push(' ');
                fmt_f64_into(out, y);
            }
            PathCommand::ArcToRel {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                dx,
                dy,
            } => {
                nums(out, 'a', &[rx, ry, x_axis_rotation]);
                out.push(' ');
                out.push(if large_arc { '1' } else { '0' });
                out.push(' ');
                out.push(if sweep { '1' } else { '0' });
                out.push(' ');
                fmt_f64_into(out, dx);
                out.push(' ');
                fmt_f64_into(out, dy);
            }
            PathCommand::Close => out.push('Z'),
        }
    }
}

impl fmt::Display for PathCommand {
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
    fn commands_join_with_spaces() {
        let d = PathCommand::join(&[
            PathCommand::MoveTo { x: 0.0, y: -1.5 },
            PathCommand::LineTo { x: 4.0, y: 2.0 },
            PathCommand::Close,
        ]);
        assert_eq!(d, "M 0 -1.5 L 4 2 Z");
    }

    #[test]
    fn arc_flags_render_as_digits() {
        let a = PathCommand::ArcTo {
            rx: 3.0,
            ry: 3.0,
            x_axis_rotation: 0.0,
            large_arc: true,
            sweep: false,
            x: 1.0,
            y: 2.0,
        };
        assert_eq!(a.to_string(), "A 3 3 0 1 0 1 2");
    }
}
