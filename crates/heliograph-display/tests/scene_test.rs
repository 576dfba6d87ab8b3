use heliograph_display::{
    AnalysisGeometry, ContextGeometry, DisplayArc3D, DisplayGeometry, DisplayMesh3D, DisplayMode,
    VisualizationData, VisualizationLayer, VisualizationSet, dict_to_object,
};
use heliograph_geom::{
    Arc3, Color, Geometry, LineSegment2, Mesh3, Plane, point2, point3, vector3,
};
use serde_json::json;

fn square_mesh() -> Mesh3 {
    Mesh3::new(
        vec![
            point3(0.0, 0.0, 0.0),
            point3(2.0, 0.0, 0.0),
            point3(2.0, 2.0, 0.0),
            point3(0.0, 2.0, 0.0),
        ],
        vec![vec![0, 1, 2, 3]],
    )
    .unwrap()
}

#[test]
fn vertex_colored_square_renders_surface_and_wireframe() {
    let red = Color::new(255, 0, 0);
    let green = Color::new(0, 255, 0);
    let colors = vec![red, red, green, green];

    let surface = DisplayMesh3D::with_mode(square_mesh(), colors.clone(), DisplayMode::Surface);
    let markup = surface.to_svg().to_string();
    // The face fill averages its four incident vertex colors.
    assert!(markup.contains("fill=\"#808000\""));
    assert!(!markup.contains("stroke=\"black\""));

    let wireframe = DisplayMesh3D::with_mode(square_mesh(), colors, DisplayMode::Wireframe);
    let markup = wireframe.to_svg().to_string();
    assert!(markup.contains("fill=\"none\""));
    assert!(markup.contains("stroke=\"black\""));
    assert!(!markup.contains("#808000"));
}

#[test]
fn arc_rendering_special_cases_full_circles() {
    let plane = Plane::world_xy(point3(0.0, 0.0, 0.0));
    let full = DisplayArc3D::new(Arc3::circle(plane, 3.0), None);
    let markup = full.to_svg().to_string();
    assert!(markup.starts_with("<circle"));
    assert!(markup.contains("r=\"3\""));

    let half = DisplayArc3D::new(Arc3::new(plane, 3.0, 0.0, std::f64::consts::PI), None);
    let markup = half.to_svg().to_string();
    assert!(markup.starts_with("<path"));
    assert!(markup.contains("M 3 0 A 3 3 0 0 0 -3 0"));
}

#[test]
fn whole_scene_document_round_trips_through_dicts() {
    let analysis = AnalysisGeometry::new(
        "roof_irradiance",
        vec![Geometry::Mesh3(square_mesh())],
        vec![VisualizationData::new(vec![0.0, 250.0, 500.0, 750.0], None)],
    )
    .unwrap();
    let segment = LineSegment2::from_end_points(point2(-5.0, 0.0), point2(5.0, 0.0));
    let context = ContextGeometry::from_geometry(
        "site_boundary",
        vec![Geometry::LineSegment2(segment)],
        None,
    );
    let mut set = VisualizationSet::new(
        "scene",
        vec![
            VisualizationLayer::Analysis(analysis),
            VisualizationLayer::Context(context),
        ],
    );
    set.units = Some("Meters".to_string());
    set.user_data.insert("project".to_string(), json!("north wing"));

    let dict = set.to_dict();
    let back = VisualizationSet::from_dict(&dict).unwrap();
    assert_eq!(back, set);
    assert_eq!(back.to_dict(), dict);

    match dict_to_object(&dict, true).unwrap() {
        Some(heliograph_display::VisObject::VisualizationSet(obj)) => assert_eq!(obj, set),
        other => panic!("unexpected object: {other:?}"),
    }
}

#[test]
fn rendering_is_deterministic() {
    let analysis = AnalysisGeometry::new(
        "roof",
        vec![Geometry::Mesh3(square_mesh())],
        vec![VisualizationData::new(vec![1.0, 2.0, 3.0, 4.0], None)],
    )
    .unwrap();
    let set = VisualizationSet::new("scene", vec![VisualizationLayer::Analysis(analysis)]);
    let first = set.to_svg(800.0, 600.0, true, true).to_string();
    let second = set.to_svg(800.0, 600.0, true, true).to_string();
    assert_eq!(first, second);
}

#[test]
fn translation_shifts_output_by_flipped_y() {
    let segment = LineSegment2::from_end_points(point2(0.0, 0.0), point2(1.0, 1.0));
    let mut layer = ContextGeometry::from_geometry(
        "site",
        vec![Geometry::LineSegment2(segment)],
        None,
    );
    let before = layer.to_svg(100.0, 100.0).to_string();
    assert!(before.contains("x2=\"1\""));
    assert!(before.contains("y2=\"-1\""));

    layer.translate(vector3(2.0, 3.0, 0.0));
    let after = layer.to_svg(100.0, 100.0).to_string();
    assert!(after.contains("x2=\"3\""));
    assert!(after.contains("y2=\"-4\""));
}

#[test]
fn two_layer_2d_legends_occupy_disjoint_screen_bands() {
    let make_layer = |id: &str| {
        AnalysisGeometry::new(
            id,
            vec![Geometry::Mesh3(square_mesh())],
            vec![VisualizationData::new(vec![1.0, 2.0, 3.0, 4.0], None)],
        )
        .unwrap()
    };
    let set = VisualizationSet::new(
        "scene",
        vec![
            VisualizationLayer::Analysis(make_layer("a")),
            VisualizationLayer::Analysis(make_layer("b")),
        ],
    );
    let markup = set.to_svg(800.0, 600.0, false, true).to_string();
    // Default origins: 10px for the first legend, shifted past the first
    // bar (36px) and six label text heights (72px) for the second.
    assert!(markup.contains("x=\"10\""));
    assert!(markup.contains("x=\"118\""));
}

#[test]
fn display_dicts_survive_the_generic_dispatcher() {
    let display = DisplayMesh3D::with_mode(
        square_mesh(),
        vec![Color::new(200, 10, 10)],
        DisplayMode::SurfaceWithEdges,
    );
    let dict = display.to_dict();
    match dict_to_object(&dict, true).unwrap() {
        Some(heliograph_display::VisObject::Display(DisplayGeometry::Mesh3D(back))) => {
            assert_eq!(back, display);
        }
        other => panic!("unexpected object: {other:?}"),
    }
}
