//! Data-bound geometry layers.
//!
//! An [`AnalysisGeometry`] pairs a list of geometry with one or more
//! [`VisualizationData`] sets whose values color that geometry. The number of
//! values in a data set must align with the number of geometries, the total
//! mesh face count, or the total mesh vertex count; the first data set fixes
//! which of the three applies and every later set must match it.

use indexmap::IndexMap;
use serde_json::{Map, Value, json};

use heliograph_geom::{
    Color, Geometry, Point3, bounding_box, dict::geometry_to_value, vector3,
};
use heliograph_svg::{
    Desc, DominantBaseline, Element, Length, LengthUnit, LinearGradient, Rect, Stop, Svg, Text,
    TextAnchor, Transform, fmt::fmt_f64,
};
use tracing::debug;

use crate::base::dict;
use crate::dictutil::geometry_to_display;
use crate::display3d::DisplayText3D;
use crate::legend::{Legend, LegendParameters};
use crate::translate;
use crate::{
    DisplayMesh3D, DisplayMode, Error, HorizontalAlignment, Result, VerticalAlignment,
};

/// Starting offsets for defaulted legend positions: world X for 3D legends,
/// screen X and Y in pixels for 2D legends.
pub const DEFAULT_LEGEND_OFFSETS: [f64; 3] = [0.0, 10.0, 50.0];

/// How a data set's values align with the layer's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchingMethod {
    Geometries,
    Faces,
    Vertices,
}

impl MatchingMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchingMethod::Geometries => "geometries",
            MatchingMethod::Faces => "faces",
            MatchingMethod::Vertices => "vertices",
        }
    }
}

/// A value list plus the legend configuration that colors it.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizationData {
    pub values: Vec<f64>,
    pub legend_parameters: LegendParameters,
    pub data_type: Option<String>,
    pub unit: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl VisualizationData {
    pub fn new(values: Vec<f64>, legend_parameters: Option<LegendParameters>) -> Self {
        Self {
            values,
            legend_parameters: legend_parameters.unwrap_or_default(),
            data_type: None,
            unit: None,
            user_data: IndexMap::new(),
        }
    }

    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Bind the values to the parameters for color and layout queries.
    pub fn legend(&self) -> Legend {
        Legend::new(self.values.clone(), self.legend_parameters.clone())
    }

    pub fn value_colors(&self) -> Vec<Color> {
        self.legend().value_colors()
    }

    pub fn to_dict(&self) -> Value {
        let mut base = Map::new();
        base.insert("type".to_string(), json!("VisualizationData"));
        base.insert("values".to_string(), json!(self.values));
        base.insert(
            "legend_parameters".to_string(),
            self.legend_parameters.to_dict(),
        );
        if let Some(data_type) = &self.data_type {
            base.insert("data_type".to_string(), json!(data_type));
        }
        if let Some(unit) = &self.unit {
            base.insert("unit".to_string(), json!(unit));
        }
        dict::push_base_fields(&mut base, &None, &self.user_data);
        Value::Object(base)
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "VisualizationData")?;
        let values = match value.get("values") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| {
                    v.as_f64().ok_or_else(|| Error::TypeMismatch {
                        expected: "numeric value",
                        got: v.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>>>()?,
            _ => Vec::new(),
        };
        let legend_parameters = match value.get("legend_parameters") {
            Some(params) => Some(LegendParameters::from_dict(params)?),
            None => None,
        };
        let mut data = Self::new(values, legend_parameters);
        data.data_type = value
            .get("data_type")
            .and_then(Value::as_str)
            .map(str::to_string);
        data.unit = value
            .get("unit")
            .and_then(Value::as_str)
            .map(str::to_string);
        data.user_data = dict::user_data_from_dict(value);
        Ok(data)
    }

    /// Screen-space legend: a bar of segment colors (discrete rectangles, or
    /// one gradient-filled rectangle when continuous), a black border, the
    /// title, and one label per segment.
    pub fn legend_2d_to_svg(legend: &Legend, width: f64, height: f64) -> Vec<Element> {
        let params = &legend.parameters;
        let dims = legend.pixel_dims_2d(width, height);
        let count = params.segment_count;
        let bar_segments = if params.continuous_legend {
            count.saturating_sub(1)
        } else {
            count
        };
        let (bar_width, bar_height) = if params.vertical {
            (dims.segment_width, dims.segment_height * bar_segments as f64)
        } else {
            (dims.segment_width * bar_segments as f64, dims.segment_height)
        };
        let mut colors = legend.segment_colors();
        if params.vertical {
            // Highest value at the top of the bar.
            colors.reverse();
        }

        let mut elements = Vec::new();
        let mut border = Rect::new();
        border.x = Some(dims.origin_x);
        border.y = Some(dims.origin_y);
        border.width = Some(bar_width);
        border.height = Some(bar_height);
        border.presentation.fill = Some("none".to_string());
        border.presentation.stroke = Some("black".to_string());
        border.presentation.stroke_width = Some(1.0);

        if params.continuous_legend {
            let id = gradient_id(dims.origin_x, dims.origin_y);
            let mut gradient = LinearGradient::default();
            gradient.id = Some(id.clone());
            gradient.gradient_units = Some("objectBoundingBox".to_string());
            if params.vertical {
                gradient.gradient_transform.push(Transform::rotate(90.0));
            }
            for (i, color) in colors.iter().enumerate() {
                let offset = ((i as f64 / colors.len() as f64) * 100.0) as i64;
                gradient.children.push(
                    Stop::new(Length::percent(offset as f64).into(), color.to_hex()).into(),
                );
            }
            elements.push(gradient.into());
            border.presentation.fill = Some(format!("url('#{id}')"));
        } else {
            for (i, color) in colors.iter().enumerate() {
                let mut segment = Rect::new();
                segment.x = Some(dims.origin_x);
                segment.y = Some(dims.origin_y);
                segment.width = Some(dims.segment_width);
                segment.height = Some(dims.segment_height);
                segment.presentation.fill = Some(color.to_hex());
                segment.transform.push(if params.vertical {
                    Transform::translate(0.0, dims.segment_height * i as f64)
                } else {
                    Transform::translate(dims.segment_width * i as f64, 0.0)
                });
                elements.push(segment.into());
            }
        }
        elements.push(border.into());

        if !params.title.is_empty() {
            let (tx, ty) = legend.title_location_2d(width, height);
            let mut title = Text::new();
            title.x = Some(tx);
            title.y = Some(ty);
            title.font_size = Some(dims.text_height.into());
            title.font_family = Some(params.font.clone());
            title.text_anchor = Some(TextAnchor::Start);
            title.dominant_baseline = Some(DominantBaseline::Middle);
            title.text = Some(params.title.clone());
            elements.push(title.into());
        }

        let labels = legend.segment_text();
        for (label, (x, y)) in labels
            .iter()
            .zip(legend.segment_text_location_2d(width, height))
        {
            let mut text = Text::new();
            text.x = Some(x);
            text.y = Some(y);
            text.font_size = Some(dims.text_height.into());
            text.font_family = Some(params.font.clone());
            if !params.vertical {
                text.text_anchor = Some(TextAnchor::Middle);
            }
            text.dominant_baseline = Some(DominantBaseline::Hanging);
            text.text = Some(label.clone());
            elements.push(text.into());
        }
        elements
    }
}

/// Gradient ids derive from the legend's screen origin so re-rendering the
/// same document never changes its text.
fn gradient_id(x: f64, y: f64) -> String {
    format!("legend_{}_{}", fmt_f64(x), fmt_f64(y))
        .replace('-', "n")
        .replace('.', "d")
}

/// Geometry colored by one or more aligned data sets.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisGeometry {
    pub identifier: String,
    pub geometry: Vec<Geometry>,
    data_sets: Vec<VisualizationData>,
    active_data: usize,
    matching_method: MatchingMethod,
    pub display_mode: DisplayMode,
    pub hidden: bool,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl AnalysisGeometry {
    pub fn new(
        identifier: impl Into<String>,
        geometry: Vec<Geometry>,
        data_sets: Vec<VisualizationData>,
    ) -> Result<Self> {
        let mut layer = Self {
            identifier: identifier.into(),
            geometry,
            data_sets: Vec::new(),
            active_data: 0,
            matching_method: MatchingMethod::Geometries,
            display_mode: DisplayMode::Surface,
            hidden: false,
            display_name: None,
            user_data: IndexMap::new(),
        };
        let mut sets = data_sets.into_iter();
        match sets.next() {
            Some(first) => {
                layer.matching_method = layer.check_first_data_set(&first)?;
                layer.data_sets.push(first);
            }
            None => {
                return Err(Error::DataLengthMismatch {
                    got: 0,
                    geometries: layer.geometry.len(),
                    faces: layer.total_faces(),
                    vertices: layer.total_vertices(),
                });
            }
        }
        for set in sets {
            layer.add_data_set(set)?;
        }
        Ok(layer)
    }

    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub fn data_sets(&self) -> &[VisualizationData] {
        &self.data_sets
    }

    pub fn matching_method(&self) -> MatchingMethod {
        self.matching_method
    }

    pub fn active_data(&self) -> usize {
        self.active_data
    }

    pub fn set_active_data(&mut self, index: usize) -> Result<()> {
        if index >= self.data_sets.len() {
            return Err(Error::ActiveDataOutOfRange {
                index,
                count: self.data_sets.len(),
            });
        }
        self.active_data = index;
        Ok(())
    }

    /// Later data sets must align the same way the first one did.
    pub fn add_data_set(&mut self, data: VisualizationData) -> Result<()> {
        let expected = self.expected_count(self.matching_method);
        if data.values.len() != expected {
            return Err(Error::DataSetArityMismatch {
                got: data.values.len(),
                method: self.matching_method.as_str(),
                expected,
            });
        }
        self.data_sets.push(data);
        Ok(())
    }

    pub fn remove_data_set(&mut self, index: usize) -> Result<VisualizationData> {
        if index >= self.data_sets.len() || self.data_sets.len() == 1 {
            return Err(Error::ActiveDataOutOfRange {
                index,
                count: self.data_sets.len(),
            });
        }
        if self.active_data >= index && self.active_data > 0 {
            self.active_data -= 1;
        }
        Ok(self.data_sets.remove(index))
    }

    fn total_faces(&self) -> usize {
        self.geometry.iter().map(Geometry::face_count).sum()
    }

    fn total_vertices(&self) -> usize {
        self.geometry.iter().map(Geometry::vertex_count).sum()
    }

    fn expected_count(&self, method: MatchingMethod) -> usize {
        match method {
            MatchingMethod::Geometries => self.geometry.len(),
            MatchingMethod::Faces => self.total_faces(),
            MatchingMethod::Vertices => self.total_vertices(),
        }
    }

    fn check_first_data_set(&self, data: &VisualizationData) -> Result<MatchingMethod> {
        let (geometries, faces, vertices) =
            (self.geometry.len(), self.total_faces(), self.total_vertices());
        let got = data.values.len();
        if got == geometries {
            Ok(MatchingMethod::Geometries)
        } else if got == faces && faces > 0 {
            Ok(MatchingMethod::Faces)
        } else if got == vertices && vertices > 0 {
            Ok(MatchingMethod::Vertices)
        } else {
            Err(Error::DataLengthMismatch {
                got,
                geometries,
                faces,
                vertices,
            })
        }
    }

    /// Minimum corner of the box around all geometry.
    pub fn min(&self) -> Option<Point3> {
        bounding_box(self.geometry.iter()).map(|(min, _)| min)
    }

    pub fn max(&self) -> Option<Point3> {
        bounding_box(self.geometry.iter()).map(|(_, max)| max)
    }

    pub fn translate(&mut self, moving_vec: heliograph_geom::Vector3) {
        for geo in &mut self.geometry {
            *geo = geo.translate(moving_vec);
        }
        for data in &mut self.data_sets {
            let plane = data.legend_parameters.base_plane.translate(moving_vec);
            data.legend_parameters.base_plane = plane;
        }
    }

    /// Rotate in the world XY plane; `angle` in degrees.
    pub fn rotate_xy(&mut self, angle: f64, origin: Point3) {
        let radians = angle.to_radians();
        for geo in &mut self.geometry {
            *geo = geo.rotate_xy(radians, origin);
        }
        for data in &mut self.data_sets {
            let plane = data.legend_parameters.base_plane.rotate_xy(radians, origin);
            data.legend_parameters.base_plane = plane;
        }
    }

    pub fn scale(&mut self, factor: f64, origin: Option<Point3>) {
        for geo in &mut self.geometry {
            *geo = geo.scale(factor, origin);
        }
        for data in &mut self.data_sets {
            let plane = data.legend_parameters.base_plane.scale(factor, origin);
            data.legend_parameters.base_plane = plane;
        }
    }

    pub fn to_dict(&self) -> Value {
        let mut base = Map::new();
        base.insert("type".to_string(), json!("AnalysisGeometry"));
        base.insert("identifier".to_string(), json!(self.identifier));
        base.insert(
            "geometry".to_string(),
            Value::Array(self.geometry.iter().map(geometry_to_value).collect()),
        );
        base.insert(
            "data_sets".to_string(),
            Value::Array(self.data_sets.iter().map(VisualizationData::to_dict).collect()),
        );
        base.insert("active_data".to_string(), json!(self.active_data));
        base.insert(
            "display_mode".to_string(),
            json!(self.display_mode.as_str()),
        );
        base.insert("hidden".to_string(), json!(self.hidden));
        dict::push_base_fields(&mut base, &self.display_name, &self.user_data);
        Value::Object(base)
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "AnalysisGeometry")?;
        let identifier = value
            .get("identifier")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let geometry = match value.get("geometry") {
            Some(Value::Array(items)) => items
                .iter()
                .map(heliograph_geom::dict::geometry_from_value)
                .collect::<std::result::Result<Vec<Geometry>, heliograph_geom::Error>>()?,
            _ => Vec::new(),
        };
        let data_sets = match value.get("data_sets") {
            Some(Value::Array(items)) => items
                .iter()
                .map(VisualizationData::from_dict)
                .collect::<Result<Vec<VisualizationData>>>()?,
            _ => Vec::new(),
        };
        let mut layer = Self::new(identifier, geometry, data_sets)?;
        if let Some(active) = value.get("active_data").and_then(Value::as_u64) {
            layer.set_active_data(active as usize)?;
        }
        if let Some(mode) = value.get("display_mode").and_then(Value::as_str) {
            layer.display_mode = mode.parse()?;
        }
        layer.hidden = value
            .get("hidden")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        layer.display_name = dict::display_name_from_dict(value);
        layer.user_data = dict::user_data_from_dict(value);
        Ok(layer)
    }

    /// Render the layer to a standalone canvas. A trailing `desc` records the
    /// accumulated default-legend offsets so later renders onto the same
    /// canvas can continue from them.
    pub fn to_svg(
        &self,
        width: f64,
        height: f64,
        render_3d_legend: bool,
        render_2d_legend: bool,
        default_leg_pos: Option<[f64; 3]>,
    ) -> Svg {
        let mut leg_pos = default_leg_pos.unwrap_or(DEFAULT_LEGEND_OFFSETS);
        let mut children =
            self.to_svg_elements(width, height, render_3d_legend, render_2d_legend, &mut leg_pos);
        children.push(
            Desc::new(format!(
                "[{}, {}, {}]",
                fmt_f64(leg_pos[0]),
                fmt_f64(leg_pos[1]),
                fmt_f64(leg_pos[2])
            ))
            .into(),
        );
        let mut svg = Svg::new();
        svg.width = Some(width.into());
        svg.height = Some(height.into());
        svg.children = children;
        svg
    }

    /// The layer's elements without the enclosing canvas. `leg_pos` carries
    /// the running offsets assigned to defaulted legend positions and is
    /// advanced past any legend drawn here.
    pub(crate) fn to_svg_elements(
        &self,
        width: f64,
        height: f64,
        render_3d_legend: bool,
        render_2d_legend: bool,
        leg_pos: &mut [f64; 3],
    ) -> Vec<Element> {
        let data = &self.data_sets[self.active_data];
        let legend = data.legend();
        let mut elements = self.colored_geometry_elements(&legend);
        debug!(
            layer = %self.identifier,
            elements = elements.len(),
            "rendered analysis geometry"
        );

        if render_3d_legend {
            let mut legend = legend.clone();
            let params = &mut legend.parameters;
            if params.is_base_plane_default {
                params.base_plane = params
                    .base_plane
                    .translate(vector3(leg_pos[0], 0.0, 0.0));
                let leg_width = if params.vertical {
                    params.segment_width + 6.0 * params.text_height
                } else {
                    params.segment_width * (params.segment_count as f64 + 2.0)
                };
                leg_pos[0] += leg_width;
            }
            elements.extend(legend_3d_to_svg(&legend));
        }

        if render_2d_legend {
            let mut legend = legend;
            let dims = legend.pixel_dims_2d(width, height);
            let params = &mut legend.parameters;
            if params.vertical && params.is_origin_x_default {
                params.origin_x = Length::new(leg_pos[1], LengthUnit::Px);
                leg_pos[1] += dims.segment_width + 6.0 * dims.text_height;
            } else if !params.vertical && params.is_origin_y_default {
                params.origin_y = Length::new(leg_pos[2], LengthUnit::Px);
                leg_pos[2] += dims.segment_height + 4.0 * dims.text_height;
            }
            elements.extend(VisualizationData::legend_2d_to_svg(&legend, width, height));
        }
        elements
    }

    /// The geometry with the active data set's colors applied.
    fn colored_geometry_elements(&self, legend: &Legend) -> Vec<Element> {
        let colors = legend.value_colors();
        let mut elements = Vec::new();
        match self.matching_method {
            MatchingMethod::Geometries => {
                for (geo, color) in self.geometry.iter().zip(colors) {
                    let display =
                        geometry_to_display(geo.clone(), Some(color), self.display_mode);
                    if let Some(element) = display.to_svg() {
                        elements.push(element);
                    }
                }
            }
            MatchingMethod::Faces | MatchingMethod::Vertices => {
                let mut offset = 0;
                for geo in &self.geometry {
                    let count = match self.matching_method {
                        MatchingMethod::Faces => geo.face_count(),
                        _ => geo.vertex_count(),
                    };
                    let slice = &colors[offset..offset + count];
                    offset += count;
                    match geo {
                        Geometry::Mesh2(mesh) => elements.push(
                            translate::mesh2_to_svg(mesh, self.display_mode, slice).into(),
                        ),
                        Geometry::Mesh3(mesh) => elements.push(
                            translate::mesh3_to_svg(mesh, self.display_mode, slice).into(),
                        ),
                        other => {
                            let display = geometry_to_display(
                                other.clone(),
                                None,
                                self.display_mode,
                            );
                            if let Some(element) = display.to_svg() {
                                elements.push(element);
                            }
                        }
                    }
                }
            }
        }
        elements
    }
}

/// World-space legend: the colored segment bar as a mesh plus the title and
/// per-segment labels placed on the legend's base plane.
pub fn legend_3d_to_svg(legend: &Legend) -> Vec<Element> {
    let params = &legend.parameters;
    let mut elements = Vec::new();

    let bar = DisplayMesh3D::with_mode(
        legend.segment_mesh(),
        legend.segment_colors(),
        DisplayMode::SurfaceWithEdges,
    );
    elements.push(bar.to_svg());

    if !params.title.is_empty() {
        let plane = plane_at(params, legend.title_location_3d());
        let mut title = DisplayText3D::new(params.title.clone(), plane, params.text_height, None);
        title.font = params.font.clone();
        elements.push(title.to_svg());
    }

    let (horizontal, vertical) = if params.continuous_legend {
        if params.vertical {
            (HorizontalAlignment::Left, VerticalAlignment::Middle)
        } else {
            (HorizontalAlignment::Center, VerticalAlignment::Bottom)
        }
    } else {
        (HorizontalAlignment::Left, VerticalAlignment::Bottom)
    };
    for (label, location) in legend
        .segment_text()
        .into_iter()
        .zip(legend.segment_text_location_3d())
    {
        if label.is_empty() {
            continue;
        }
        let mut text =
            DisplayText3D::new(label, plane_at(params, location), params.text_height, None);
        text.font = params.font.clone();
        text.horizontal_alignment = horizontal;
        text.vertical_alignment = vertical;
        elements.push(text.to_svg());
    }
    elements
}

/// The base plane's orientation anchored at a new origin.
fn plane_at(params: &LegendParameters, origin: Point3) -> heliograph_geom::Plane {
    heliograph_geom::Plane::new(params.base_plane.n, origin, params.base_plane.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use heliograph_geom::{Mesh3, point3};

    fn square_mesh() -> Mesh3 {
        Mesh3::new(
            vec![
                point3(0.0, 0.0, 0.0),
                point3(1.0, 0.0, 0.0),
                point3(1.0, 1.0, 0.0),
                point3(0.0, 1.0, 0.0),
            ],
            vec![vec![0, 1, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn first_data_set_fixes_matching_method() {
        let geometry = vec![Geometry::Mesh3(square_mesh())];
        let data = VisualizationData::new(vec![1.0, 2.0, 3.0, 4.0], None);
        let layer = AnalysisGeometry::new("vertices", geometry, vec![data]).unwrap();
        assert_eq!(layer.matching_method(), MatchingMethod::Vertices);
    }

    #[test]
    fn later_data_sets_must_match_the_method() {
        let geometry = vec![Geometry::Mesh3(square_mesh())];
        let data = VisualizationData::new(vec![1.0, 2.0, 3.0, 4.0], None);
        let mut layer = AnalysisGeometry::new("vertices", geometry, vec![data]).unwrap();
        let err = layer
            .add_data_set(VisualizationData::new(vec![9.0], None))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DataSetArityMismatch {
                got: 1,
                method: "vertices",
                expected: 4,
            }
        ));
    }

    #[test]
    fn mismatched_first_data_set_is_rejected() {
        let geometry = vec![Geometry::Mesh3(square_mesh())];
        let data = VisualizationData::new(vec![1.0, 2.0], None);
        let err = AnalysisGeometry::new("bad", geometry, vec![data]).unwrap_err();
        assert!(matches!(err, Error::DataLengthMismatch { got: 2, .. }));
    }

    #[test]
    fn active_data_index_is_bounded() {
        let geometry = vec![Geometry::Mesh3(square_mesh())];
        let data = VisualizationData::new(vec![1.0], None);
        let mut layer = AnalysisGeometry::new("one", geometry, vec![data]).unwrap();
        assert!(matches!(
            layer.set_active_data(1),
            Err(Error::ActiveDataOutOfRange { index: 1, count: 1 })
        ));
    }

    #[test]
    fn analysis_dict_round_trip() {
        let geometry = vec![Geometry::Mesh3(square_mesh())];
        let mut data = VisualizationData::new(vec![0.0, 1.0, 2.0, 3.0], None);
        data.unit = Some("kWh/m2".to_string());
        let mut layer = AnalysisGeometry::new("roof", geometry, vec![data]).unwrap();
        layer.display_mode = DisplayMode::SurfaceWithEdges;
        let dict = layer.to_dict();
        let back = AnalysisGeometry::from_dict(&dict).unwrap();
        assert_eq!(back, layer);
        assert_eq!(back.to_dict(), dict);
    }

    #[test]
    fn vertex_matched_surface_mesh_interpolates_face_colors() {
        let geometry = vec![Geometry::Mesh3(square_mesh())];
        let mut data = VisualizationData::new(vec![0.0, 0.0, 10.0, 10.0], None);
        data.legend_parameters
            .set_colors(vec![Color::new(255, 0, 0), Color::new(0, 255, 0)])
            .unwrap();
        let layer = AnalysisGeometry::new("grad", geometry, vec![data]).unwrap();
        let markup = layer.to_svg(800.0, 600.0, false, false, None).to_string();
        // Average of two reds and two greens.
        assert!(markup.contains("fill=\"#808000\""));
    }

    #[test]
    fn trailing_desc_records_offsets() {
        let geometry = vec![Geometry::Mesh3(square_mesh())];
        let data = VisualizationData::new(vec![1.0], None);
        let layer = AnalysisGeometry::new("one", geometry, vec![data]).unwrap();
        let markup = layer.to_svg(800.0, 600.0, false, false, None).to_string();
        assert!(markup.contains("<desc>[0, 10, 50]</desc>"));
    }

    #[test]
    fn rendered_2d_legends_do_not_overlap() {
        let geometry = vec![Geometry::Mesh3(square_mesh())];
        let data = VisualizationData::new(vec![1.0], None);
        let layer = AnalysisGeometry::new("one", geometry, vec![data]).unwrap();
        let mut leg_pos = DEFAULT_LEGEND_OFFSETS;
        let first = layer.to_svg_elements(800.0, 600.0, false, true, &mut leg_pos);
        let second = layer.to_svg_elements(800.0, 600.0, false, true, &mut leg_pos);
        let rect_x = |elements: &[Element]| -> f64 {
            elements
                .iter()
                .find_map(|e| match e {
                    Element::Rect(r) => r.x,
                    _ => None,
                })
                .unwrap()
        };
        let (x1, x2) = (rect_x(&first), rect_x(&second));
        // The second legend starts past the first bar and its labels.
        assert!(x2 >= x1 + 36.0);
    }

    #[test]
    fn legend_2d_gradient_used_when_continuous() {
        let mut params = LegendParameters::default();
        params.continuous_legend = true;
        params.title = "UDI".to_string();
        let legend = Legend::new(vec![0.0, 1.0], params);
        let markup: String = VisualizationData::legend_2d_to_svg(&legend, 800.0, 600.0)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert!(markup.contains("<linearGradient id=\"legend_10_50\""));
        assert!(markup.contains("gradientUnits=\"objectBoundingBox\""));
        assert!(markup.contains("gradientTransform=\"rotate(90)\""));
        assert!(markup.contains("fill=\"url('#legend_10_50')\""));
    }
}
