//! Whole-document serialization checks.

use heliograph_svg::{
    Circle, Defs, Desc, Element, G, Length, LinearGradient, NumberOrLength, PathCommand, Polygon,
    Rect, Stop, Svg, Text, TextAnchor, Transform,
};

#[test]
fn document_serializes_depth_first_in_insertion_order() {
    let mut root = Svg::new();
    root.set_width(800.0).unwrap();
    root.set_height(600.0).unwrap();

    let mut grad = LinearGradient::new();
    grad.id = Some("ramp0".to_string());
    grad.children
        .push(Stop::new(NumberOrLength::Length(Length::percent(0.0)), "#0000ff").into());
    grad.children
        .push(Stop::new(NumberOrLength::Length(Length::percent(100.0)), "#ff0000").into());
    let mut defs = Defs::new();
    defs.children.push(grad.into());
    root.children.push(defs.into());

    let mut layer = G::new();
    layer.transform = vec![Transform::translate(10.0, 20.0)];
    let mut face = Polygon::new();
    face.points = vec![0.0, 0.0, 10.0, 0.0, 10.0, -10.0];
    face.presentation.fill = Some("#808080".to_string());
    layer.children.push(face.into());
    let mut dot = Circle::new();
    dot.set_r(5.0).unwrap();
    layer.children.push(dot.into());
    root.children.push(layer.into());

    root.children.push(Desc::new("[0, 0, 10]").into());

    let markup = root.to_string();
    assert_eq!(
        markup,
        "<svg width=\"800\" height=\"600\" xmlns=\"http://www.w3.org/2000/svg\">\
         <defs><linearGradient id=\"ramp0\">\
         <stop offset=\"0%\" stop-color=\"#0000ff\"/>\
         <stop offset=\"100%\" stop-color=\"#ff0000\"/>\
         </linearGradient></defs>\
         <g transform=\"translate(10 20)\">\
         <polygon points=\"0 0 10 0 10 -10\" fill=\"#808080\"/>\
         <circle r=\"5\"/>\
         </g>\
         <desc>[0, 0, 10]</desc>\
         </svg>"
    );
    // No mutation between calls, so a second render is byte-identical.
    assert_eq!(root.to_string(), markup);
}

#[test]
fn numeric_text_coerces_on_assignment() {
    let mut c = Circle::new();
    c.set_r("3.5").unwrap();
    assert_eq!(c.r, Some(3.5));
    assert!(c.set_r("five").is_err());
}

#[test]
fn text_and_children_never_co_serialize_into_attributes() {
    let mut t = Text::new();
    t.set_x(5.0).unwrap();
    t.set_y(-7.0).unwrap();
    t.text_anchor = Some(TextAnchor::Start);
    t.text = Some("title".to_string());
    assert_eq!(
        t.to_string(),
        "<text x=\"5\" y=\"-7\" text-anchor=\"start\">title</text>"
    );
}

#[test]
fn element_enum_dispatches_rendering() {
    let mut rect = Rect::new();
    rect.set_width(4.0).unwrap();
    rect.set_height(2.0).unwrap();
    let e: Element = rect.into();
    assert_eq!(e.to_string(), "<rect width=\"4\" height=\"2\"/>");

    let p = heliograph_svg::Path::with_commands(vec![
        PathCommand::MoveTo { x: 0.0, y: 0.0 },
        PathCommand::ArcTo {
            rx: 2.0,
            ry: 2.0,
            x_axis_rotation: 0.0,
            large_arc: false,
            sweep: true,
            x: 4.0,
            y: 0.0,
        },
    ]);
    let e: Element = p.into();
    assert_eq!(e.to_string(), "<path d=\"M 0 0 A 2 2 0 0 1 4 0\"/>");
}
