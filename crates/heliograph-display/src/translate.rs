//! Pure geometry-to-element translators.
//!
//! Each function maps one geometry value to a default-styled SVG element; the
//! display wrappers restyle the result with their own color and line
//! properties. The Y flip (`svg_y = -geometry_y`) happens here and nowhere
//! else; 3D geometry projects onto the world XY plane.

use heliograph_geom::{
    Arc2, Arc3, Color, Cone, Cylinder, Face3, LineSegment2, LineSegment3, Mesh2, Mesh3, Point2,
    Point3, Polyface3, Polygon2, Polyline2, Ray2, Ray3, Sphere, point2,
};
use heliograph_svg::{
    Circle, Element, G, Line, Marker, Path, PathCommand, Polygon, Polyline, ViewBox, fmt::fmt_f64,
};

/// Radius in pixels for point markers.
pub const POINT_RADIUS: f64 = 5.0;
/// Radius in pixels for mesh face-centroid markers.
pub const CENTROID_RADIUS: f64 = 3.0;
/// Arc subdivisions used when a tilted 3D curve degrades to a polyline.
pub const CURVE_SUBDIVISIONS: usize = 30;
/// Subdivision edge count for cone and cylinder silhouettes.
pub const EDGE_SUBDIVISIONS: usize = 30;

const DEFAULT_FILL: &str = "grey";

pub fn point2_to_svg(point: Point2) -> Circle {
    let mut c = Circle::new();
    c.cx = Some(point.x);
    c.cy = Some(-point.y);
    c.r = Some(POINT_RADIUS);
    c.presentation.fill = Some("black".to_string());
    c
}

pub fn point3_to_svg(point: Point3) -> Circle {
    point2_to_svg(point2(point.x, point.y))
}

pub fn line2_to_svg(segment: &LineSegment2) -> Line {
    let mut line = Line::new();
    line.x1 = Some(segment.p.x);
    line.y1 = Some(-segment.p.y);
    line.x2 = Some(segment.p.x + segment.v.x);
    line.y2 = Some(-segment.p.y - segment.v.y);
    line.presentation.stroke = Some("black".to_string());
    line.presentation.stroke_width = Some(1.0);
    line
}

pub fn line3_to_svg(segment: &LineSegment3) -> Line {
    let mut line = Line::new();
    line.x1 = Some(segment.p.x);
    line.y1 = Some(-segment.p.y);
    line.x2 = Some(segment.p.x + segment.v.x);
    line.y2 = Some(-segment.p.y - segment.v.y);
    line.presentation.stroke = Some("black".to_string());
    line.presentation.stroke_width = Some(1.0);
    line
}

/// Group of an arrow marker definition and the stroked line referencing it.
pub fn ray2_to_svg(ray: &Ray2) -> G {
    ray_group(ray.p.x, ray.p.y, ray.v.x, ray.v.y)
}

pub fn ray3_to_svg(ray: &Ray3) -> G {
    ray_group(ray.p.x, ray.p.y, ray.v.x, ray.v.y)
}

fn ray_group(px: f64, py: f64, vx: f64, vy: f64) -> G {
    let id = arrow_marker_id(px, py, vx, vy);
    let mut marker = Marker::new();
    marker.id = Some(id.clone());
    marker.view_box = Some(ViewBox::new(0.0, 0.0, 10.0, 10.0));
    marker.ref_x = Some(5.0);
    marker.ref_y = Some(5.0);
    marker.marker_width = Some(6.0);
    marker.marker_height = Some(6.0);
    marker.orient = Some("auto-start-reverse".to_string());
    let arrow = Path::with_commands(vec![
        PathCommand::MoveTo { x: 0.0, y: 0.0 },
        PathCommand::LineTo { x: 10.0, y: 5.0 },
        PathCommand::LineTo { x: 0.0, y: 10.0 },
        PathCommand::Close,
    ]);
    marker.children.push(arrow.into());

    let mut line = Line::new();
    line.x1 = Some(px);
    line.y1 = Some(-py);
    line.x2 = Some(px + vx);
    line.y2 = Some(-py - vy);
    line.presentation.stroke = Some("black".to_string());
    line.presentation.stroke_width = Some(1.0);
    line.marker_end = Some(format!("url('#{id}')"));

    G::with_children(vec![marker.into(), line.into()])
}

/// Marker ids derive from the ray's own coordinates so re-rendering the same
/// document never changes its text.
fn arrow_marker_id(px: f64, py: f64, vx: f64, vy: f64) -> String {
    let mut id = format!(
        "arrow_{}_{}_{}_{}",
        fmt_f64(px),
        fmt_f64(py),
        fmt_f64(vx),
        fmt_f64(vy)
    );
    id = id.replace('-', "n").replace('.', "d");
    id
}

pub fn polyline2_to_svg(polyline: &Polyline2) -> Element {
    if !polyline.interpolated {
        let mut element = Polyline::new();
        element.points = flat_points_2d(&polyline.vertices);
        element.presentation.fill = Some("none".to_string());
        element.presentation.stroke = Some("black".to_string());
        element.presentation.stroke_width = Some(1.0);
        return element.into();
    }
    let mut d = Vec::with_capacity(polyline.vertices.len());
    let mut verts = polyline.vertices.iter();
    if let Some(start) = verts.next() {
        d.push(PathCommand::MoveTo {
            x: start.x,
            y: -start.y,
        });
    }
    for v in verts {
        d.push(PathCommand::SmoothQuadraticTo { x: v.x, y: -v.y });
    }
    let mut element = Path::with_commands(d);
    element.presentation.fill = Some("none".to_string());
    element.presentation.stroke = Some("black".to_string());
    element.presentation.stroke_width = Some(1.0);
    element.into()
}

pub fn polygon2_to_svg(polygon: &Polygon2) -> Polygon {
    let mut element = Polygon::new();
    element.points = flat_points_2d(&polygon.vertices);
    element.presentation.fill = Some("none".to_string());
    element.presentation.stroke = Some("black".to_string());
    element.presentation.stroke_width = Some(1.0);
    element
}

/// A full circle becomes a `circle` element; anything less is an elliptical
/// arc path whose flags derive from the swept angle and orientation.
pub fn arc2_to_svg(arc: &Arc2) -> Element {
    let mut element: Element = if arc.is_circle() {
        let mut c = Circle::new();
        c.cx = Some(arc.c.x);
        c.cy = Some(-arc.c.y);
        c.r = Some(arc.r);
        c.into()
    } else {
        let (p1, p2) = (arc.p1(), arc.p2());
        let d = vec![
            PathCommand::MoveTo { x: p1.x, y: -p1.y },
            PathCommand::ArcTo {
                rx: arc.r,
                ry: arc.r,
                x_axis_rotation: 0.0,
                large_arc: arc.angle() > std::f64::consts::PI,
                sweep: arc.is_inverted(),
                x: p2.x,
                y: -p2.y,
            },
        ];
        Path::with_commands(d).into()
    };
    set_curve_defaults(&mut element);
    element
}

/// Arcs lying within a degree of the world XY plane keep their circular
/// form; tilted arcs degrade to an interpolated projected polyline.
pub fn arc3_to_svg(arc: &Arc3) -> Element {
    let cos = (arc.plane.n.z / arc.plane.n.length()).clamp(-1.0, 1.0);
    let tilt = cos.acos().to_degrees();
    if tilt < 1.0 || tilt > 179.0 {
        arc2_to_svg(&arc.to_arc2())
    } else {
        let flat = arc.to_polyline(CURVE_SUBDIVISIONS);
        polyline2_to_svg(&heliograph_geom::geometry3d::polyline3_to_2d(&flat))
    }
}

fn set_curve_defaults(element: &mut Element) {
    match element {
        Element::Circle(c) => {
            c.presentation.fill = Some("none".to_string());
            c.presentation.stroke = Some("black".to_string());
            c.presentation.stroke_width = Some(1.0);
        }
        Element::Path(p) => {
            p.presentation.fill = Some("none".to_string());
            p.presentation.stroke = Some("black".to_string());
            p.presentation.stroke_width = Some(1.0);
        }
        _ => {}
    }
}

/// Group of face polygons (or centroid markers) for a 2D mesh. `colors`
/// resolves against the mesh's face and vertex counts: one color per face
/// applies directly, one per vertex averages the incident vertices for each
/// face, a single color paints every face, and an empty list falls back to
/// the default grey.
pub fn mesh2_to_svg(mesh: &Mesh2, mode: crate::DisplayMode, colors: &[Color]) -> G {
    let vertices: Vec<(f64, f64)> = mesh.vertices.iter().map(|p| (p.x, p.y)).collect();
    mesh_group(&vertices, &mesh.faces, mode, colors)
}

pub fn mesh3_to_svg(mesh: &Mesh3, mode: crate::DisplayMode, colors: &[Color]) -> G {
    let vertices: Vec<(f64, f64)> = mesh.vertices.iter().map(|p| (p.x, p.y)).collect();
    mesh_group(&vertices, &mesh.faces, mode, colors)
}

fn mesh_group(
    vertices: &[(f64, f64)],
    faces: &[Vec<usize>],
    mode: crate::DisplayMode,
    colors: &[Color],
) -> G {
    let mut group = G::new();
    if mode == crate::DisplayMode::Points {
        for face in faces {
            let n = face.len() as f64;
            let (cx, cy) = face.iter().fold((0.0, 0.0), |(x, y), &i| {
                (x + vertices[i].0, y + vertices[i].1)
            });
            let mut c = Circle::new();
            c.cx = Some(cx / n);
            c.cy = Some(-cy / n);
            c.r = Some(CENTROID_RADIUS);
            c.presentation.fill = Some("black".to_string());
            group.children.push(c.into());
        }
        return group;
    }
    let face_fills = face_fills(faces, vertices.len(), colors);
    for (i, face) in faces.iter().enumerate() {
        let mut polygon = Polygon::new();
        polygon.points = Vec::with_capacity(face.len() * 2);
        for &vi in face {
            polygon.points.push(vertices[vi].0);
            polygon.points.push(-vertices[vi].1);
        }
        if mode.has_fill() {
            polygon.presentation.fill = Some(match &face_fills {
                Some(fills) => fills[i].to_hex(),
                None => DEFAULT_FILL.to_string(),
            });
        } else {
            polygon.presentation.fill = Some("none".to_string());
        }
        if mode.has_edges() {
            polygon.presentation.stroke = Some("black".to_string());
            polygon.presentation.stroke_width = Some(1.0);
        }
        group.children.push(polygon.into());
    }
    group
}

/// Resolve a color list to one fill per face, or `None` for the grey default.
fn face_fills(faces: &[Vec<usize>], vertex_count: usize, colors: &[Color]) -> Option<Vec<Color>> {
    if colors.is_empty() {
        return None;
    }
    if colors.len() == faces.len() {
        return Some(colors.to_vec());
    }
    if colors.len() == vertex_count {
        // Vertex colors average across each face's incident vertices.
        return Some(
            faces
                .iter()
                .map(|face| {
                    let incident: Vec<Color> = face.iter().map(|&vi| colors[vi]).collect();
                    Color::average(&incident)
                })
                .collect(),
        );
    }
    Some(vec![colors[0]; faces.len()])
}

/// Group of boundary and hole polygons (or vertex markers) for a face.
pub fn face3_to_svg(face: &Face3, mode: crate::DisplayMode) -> G {
    let mut group = G::new();
    if mode == crate::DisplayMode::Points {
        for point in face.vertices() {
            group.children.push(point3_to_svg(point).into());
        }
        return group;
    }
    if mode.has_fill() {
        let mut fp = Polygon::new();
        fp.points = flat_points_3d(face.vertices());
        fp.presentation.fill = Some(DEFAULT_FILL.to_string());
        group.children.push(fp.into());
    }
    if mode.has_edges() {
        let mut bnd = Polygon::new();
        bnd.points = flat_points_3d(face.boundary.iter().copied());
        bnd.presentation.fill = Some("none".to_string());
        bnd.presentation.stroke = Some("black".to_string());
        bnd.presentation.stroke_width = Some(1.0);
        group.children.push(bnd.into());
        for hole in &face.holes {
            let mut hp = Polygon::new();
            hp.points = flat_points_3d(hole.iter().copied());
            hp.presentation.fill = Some("none".to_string());
            hp.presentation.stroke = Some("black".to_string());
            hp.presentation.stroke_width = Some(1.0);
            group.children.push(hp.into());
        }
    }
    group
}

/// Group of per-face groups in face order.
pub fn polyface3_to_svg(polyface: &Polyface3, mode: crate::DisplayMode) -> G {
    let mut group = G::new();
    for face in &polyface.faces {
        group.children.push(face3_to_svg(face, mode).into());
    }
    group
}

/// Silhouette circle for a sphere, or a center marker in Points mode.
pub fn sphere_to_svg(sphere: &Sphere, mode: crate::DisplayMode) -> G {
    let mut group = G::new();
    if mode == crate::DisplayMode::Points {
        group.children.push(point3_to_svg(sphere.center).into());
        return group;
    }
    let mut c = Circle::new();
    c.cx = Some(sphere.center.x);
    c.cy = Some(-sphere.center.y);
    c.r = Some(sphere.radius);
    style_silhouette_circle(&mut c, mode);
    group.children.push(c.into());
    group
}

/// Base curve plus subdivision edge lines running to the apex.
pub fn cone_to_svg(cone: &Cone, mode: crate::DisplayMode) -> G {
    let mut group = G::new();
    let base = cone.base();
    let mut base_svg = arc3_to_svg(&base);
    style_silhouette_element(&mut base_svg, mode);
    group.children.push(base_svg);
    if mode == crate::DisplayMode::Points {
        group.children.push(point3_to_svg(cone.vertex).into());
        return group;
    }
    let apex = cone.vertex;
    for pt in base.subdivide_evenly(EDGE_SUBDIVISIONS) {
        let edge = LineSegment3::from_end_points(pt, apex);
        let mut line = line3_to_svg(&edge);
        style_silhouette_edge(&mut line, mode);
        group.children.push(line.into());
    }
    group
}

/// Both base curves plus subdivision edge lines between them.
pub fn cylinder_to_svg(cylinder: &Cylinder, mode: crate::DisplayMode) -> G {
    let mut group = G::new();
    let (bottom, top) = (cylinder.base_bottom(), cylinder.base_top());
    let mut bottom_svg = arc3_to_svg(&bottom);
    let mut top_svg = arc3_to_svg(&top);
    style_silhouette_element(&mut bottom_svg, mode);
    style_silhouette_element(&mut top_svg, mode);
    group.children.push(bottom_svg);
    group.children.push(top_svg);
    if mode == crate::DisplayMode::Points {
        return group;
    }
    for (p1, p2) in bottom
        .subdivide_evenly(EDGE_SUBDIVISIONS)
        .into_iter()
        .zip(top.subdivide_evenly(EDGE_SUBDIVISIONS))
    {
        let edge = LineSegment3::from_end_points(p1, p2);
        let mut line = line3_to_svg(&edge);
        style_silhouette_edge(&mut line, mode);
        group.children.push(line.into());
    }
    group
}

fn style_silhouette_circle(c: &mut Circle, mode: crate::DisplayMode) {
    if mode.has_fill() {
        c.presentation.fill = Some(DEFAULT_FILL.to_string());
        if mode == crate::DisplayMode::Surface {
            c.presentation.stroke_width = Some(0.0);
        } else {
            c.presentation.stroke = Some("black".to_string());
            c.presentation.stroke_width = Some(1.0);
        }
    } else {
        c.presentation.fill = Some("none".to_string());
        c.presentation.stroke = Some("black".to_string());
        c.presentation.stroke_width = Some(1.0);
    }
}

fn style_silhouette_element(element: &mut Element, mode: crate::DisplayMode) {
    if !mode.has_fill() {
        return;
    }
    match element {
        Element::Circle(c) => {
            c.presentation.fill = Some(DEFAULT_FILL.to_string());
            if mode == crate::DisplayMode::Surface {
                c.presentation.stroke_width = Some(0.0);
            }
        }
        Element::Path(p) => {
            p.presentation.fill = Some(DEFAULT_FILL.to_string());
            if mode == crate::DisplayMode::Surface {
                p.presentation.stroke_width = Some(0.0);
            }
        }
        _ => {}
    }
}

fn style_silhouette_edge(line: &mut Line, mode: crate::DisplayMode) {
    line.presentation.stroke_width = Some(1.0);
    line.presentation.stroke = Some(if mode.has_edges() {
        "black".to_string()
    } else {
        DEFAULT_FILL.to_string()
    });
}

/// Mutable access to the paint attributes of any drawable element.
pub(crate) fn presentation_mut(element: &mut Element) -> Option<&mut heliograph_svg::Presentation> {
    match element {
        Element::G(e) => Some(&mut e.presentation),
        Element::Circle(e) => Some(&mut e.presentation),
        Element::Ellipse(e) => Some(&mut e.presentation),
        Element::Line(e) => Some(&mut e.presentation),
        Element::Polyline(e) => Some(&mut e.presentation),
        Element::Polygon(e) => Some(&mut e.presentation),
        Element::Path(e) => Some(&mut e.presentation),
        Element::Rect(e) => Some(&mut e.presentation),
        _ => None,
    }
}

/// Stroke styling shared by every curve-like wrapper: color hex, opacity for
/// translucent alpha, explicit width when set, dash pattern for the line type.
pub(crate) fn style_stroke(
    presentation: &mut heliograph_svg::Presentation,
    color: Color,
    line_width: Option<f64>,
    line_type: crate::LineType,
) {
    presentation.stroke = Some(color.to_hex());
    if color.a != 255 {
        presentation.opacity = Some(f64::from(color.a) / 255.0);
    }
    if let Some(width) = line_width {
        presentation.stroke_width = Some(width);
    }
    if let Some(dashes) = line_type.dash_array() {
        presentation.stroke_dasharray = dashes.to_vec();
    }
}

fn flat_points_2d(vertices: &[Point2]) -> Vec<f64> {
    let mut points = Vec::with_capacity(vertices.len() * 2);
    for v in vertices {
        points.push(v.x);
        points.push(-v.y);
    }
    points
}

fn flat_points_3d(vertices: impl IntoIterator<Item = Point3>) -> Vec<f64> {
    let mut points = Vec::new();
    for v in vertices {
        points.push(v.x);
        points.push(-v.y);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use heliograph_geom::vector2;
    use std::f64::consts::PI;

    #[test]
    fn point_flips_y() {
        let c = point2_to_svg(point2(3.0, 4.0));
        assert_eq!(c.cx, Some(3.0));
        assert_eq!(c.cy, Some(-4.0));
        assert_eq!(c.r, Some(POINT_RADIUS));
    }

    #[test]
    fn half_circle_arc_is_small_arc_path() {
        let arc = Arc2::new(point2(0.0, 0.0), 2.0, 0.0, PI);
        let element = arc2_to_svg(&arc);
        let Element::Path(path) = element else {
            panic!("expected a path");
        };
        match path.d[1] {
            PathCommand::ArcTo {
                large_arc, sweep, x, y, ..
            } => {
                assert!(!large_arc);
                assert!(!sweep);
                assert!((x - -2.0).abs() < 1e-9);
                assert!(y.abs() < 1e-9);
            }
            _ => panic!("expected an arc command"),
        }
    }

    #[test]
    fn full_circle_arc_is_circle_element() {
        let arc = Arc2::circle(point2(1.0, 2.0), 3.0);
        let element = arc2_to_svg(&arc);
        let Element::Circle(c) = element else {
            panic!("expected a circle");
        };
        assert_eq!(c.cx, Some(1.0));
        assert_eq!(c.cy, Some(-2.0));
        assert_eq!(c.r, Some(3.0));
    }

    #[test]
    fn vertex_colors_average_per_face() {
        let red = Color::new(255, 0, 0);
        let green = Color::new(0, 255, 0);
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
        let group = mesh2_to_svg(
            &mesh,
            crate::DisplayMode::Surface,
            &[red, red, green, green],
        );
        let Element::Polygon(face) = &group.children[0] else {
            panic!("expected a polygon");
        };
        // Average of two reds and two greens on every channel, rounded.
        assert_eq!(face.presentation.fill.as_deref(), Some("#808000"));
    }

    #[test]
    fn wireframe_mesh_is_unfilled_regardless_of_colors() {
        let red = Color::new(255, 0, 0);
        let mesh = Mesh2::new(
            vec![point2(0.0, 0.0), point2(1.0, 0.0), point2(0.0, 1.0)],
            vec![vec![0, 1, 2]],
        )
        .unwrap();
        let group = mesh2_to_svg(&mesh, crate::DisplayMode::Wireframe, &[red]);
        let Element::Polygon(face) = &group.children[0] else {
            panic!("expected a polygon");
        };
        assert_eq!(face.presentation.fill.as_deref(), Some("none"));
        assert_eq!(face.presentation.stroke.as_deref(), Some("black"));
    }

    #[test]
    fn ray_marker_ids_are_stable() {
        let ray = Ray2::new(point2(1.5, -2.0), vector2(0.0, 3.0));
        let a = ray2_to_svg(&ray).to_string();
        let b = ray2_to_svg(&ray).to_string();
        assert_eq!(a, b);
        assert!(a.contains("marker-end=\"url('#arrow_1d5_n2_0_3')\""));
    }
}
