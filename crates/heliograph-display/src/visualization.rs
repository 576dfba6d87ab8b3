//! The top-level visualization document.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::{Map, Value, json};

use heliograph_geom::{Point3, Vector3, point3};
use heliograph_svg::Svg;
use tracing::debug;

use crate::analysis::{AnalysisGeometry, DEFAULT_LEGEND_OFFSETS};
use crate::base::dict;
use crate::context::ContextGeometry;
use crate::{Error, Result};

/// One ordered member of a visualization set.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualizationLayer {
    Analysis(AnalysisGeometry),
    Context(ContextGeometry),
}

impl VisualizationLayer {
    pub fn identifier(&self) -> &str {
        match self {
            VisualizationLayer::Analysis(layer) => &layer.identifier,
            VisualizationLayer::Context(layer) => &layer.identifier,
        }
    }

    pub fn hidden(&self) -> bool {
        match self {
            VisualizationLayer::Analysis(layer) => layer.hidden,
            VisualizationLayer::Context(layer) => layer.hidden,
        }
    }

    pub fn to_dict(&self) -> Value {
        match self {
            VisualizationLayer::Analysis(layer) => layer.to_dict(),
            VisualizationLayer::Context(layer) => layer.to_dict(),
        }
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        match value.get("type").and_then(Value::as_str) {
            Some("AnalysisGeometry") => {
                Ok(VisualizationLayer::Analysis(AnalysisGeometry::from_dict(value)?))
            }
            Some("ContextGeometry") => {
                Ok(VisualizationLayer::Context(ContextGeometry::from_dict(value)?))
            }
            Some(other) => Err(Error::UnknownType {
                got: other.to_string(),
            }),
            None => Err(Error::MissingType),
        }
    }

    fn min(&self) -> Option<Point3> {
        match self {
            VisualizationLayer::Analysis(layer) => layer.min(),
            VisualizationLayer::Context(layer) => layer.min(),
        }
    }

    fn max(&self) -> Option<Point3> {
        match self {
            VisualizationLayer::Analysis(layer) => layer.max(),
            VisualizationLayer::Context(layer) => layer.max(),
        }
    }
}

/// An ordered collection of analysis and context layers that renders as one
/// SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizationSet {
    pub identifier: String,
    pub geometry: Vec<VisualizationLayer>,
    pub units: Option<String>,
    pub display_name: Option<String>,
    pub user_data: IndexMap<String, Value>,
}

impl VisualizationSet {
    pub fn new(identifier: impl Into<String>, geometry: Vec<VisualizationLayer>) -> Self {
        Self {
            identifier: identifier.into(),
            geometry,
            units: None,
            display_name: None,
            user_data: IndexMap::new(),
        }
    }

    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub fn add_geometry(&mut self, layer: VisualizationLayer) {
        self.geometry.push(layer);
    }

    pub fn insert_geometry(&mut self, index: usize, layer: VisualizationLayer) {
        let index = index.min(self.geometry.len());
        self.geometry.insert(index, layer);
    }

    pub fn remove_geometry(&mut self, index: usize) -> Result<VisualizationLayer> {
        if index >= self.geometry.len() {
            return Err(Error::ActiveDataOutOfRange {
                index,
                count: self.geometry.len(),
            });
        }
        Ok(self.geometry.remove(index))
    }

    /// Minimum corner of the box around every layer.
    pub fn min(&self) -> Option<Point3> {
        self.geometry
            .iter()
            .filter_map(VisualizationLayer::min)
            .reduce(|a, b| point3(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)))
    }

    pub fn max(&self) -> Option<Point3> {
        self.geometry
            .iter()
            .filter_map(VisualizationLayer::max)
            .reduce(|a, b| point3(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)))
    }

    pub fn translate(&mut self, moving_vec: Vector3) {
        for layer in &mut self.geometry {
            match layer {
                VisualizationLayer::Analysis(layer) => layer.translate(moving_vec),
                VisualizationLayer::Context(layer) => layer.translate(moving_vec),
            }
        }
    }

    /// Rotate in the world XY plane; `angle` in degrees.
    pub fn rotate_xy(&mut self, angle: f64, origin: Point3) {
        for layer in &mut self.geometry {
            match layer {
                VisualizationLayer::Analysis(layer) => layer.rotate_xy(angle, origin),
                VisualizationLayer::Context(layer) => layer.rotate_xy(angle, origin),
            }
        }
    }

    pub fn scale(&mut self, factor: f64, origin: Option<Point3>) {
        for layer in &mut self.geometry {
            match layer {
                VisualizationLayer::Analysis(layer) => layer.scale(factor, origin),
                VisualizationLayer::Context(layer) => layer.scale(factor, origin),
            }
        }
    }

    pub fn to_dict(&self) -> Value {
        let mut base = Map::new();
        base.insert("type".to_string(), json!("VisualizationSet"));
        base.insert("identifier".to_string(), json!(self.identifier));
        base.insert(
            "geometry".to_string(),
            Value::Array(self.geometry.iter().map(VisualizationLayer::to_dict).collect()),
        );
        if let Some(units) = &self.units {
            base.insert("units".to_string(), json!(units));
        }
        dict::push_base_fields(&mut base, &self.display_name, &self.user_data);
        Value::Object(base)
    }

    pub fn from_dict(value: &Value) -> Result<Self> {
        dict::check_type(value, "VisualizationSet")?;
        let identifier = value
            .get("identifier")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let geometry = match value.get("geometry") {
            Some(Value::Array(items)) => items
                .iter()
                .map(VisualizationLayer::from_dict)
                .collect::<Result<Vec<VisualizationLayer>>>()?,
            _ => Vec::new(),
        };
        let mut set = Self::new(identifier, geometry);
        set.units = value
            .get("units")
            .and_then(Value::as_str)
            .map(str::to_string);
        set.display_name = dict::display_name_from_dict(value);
        set.user_data = dict::user_data_from_dict(value);
        Ok(set)
    }

    /// Compose every non-hidden layer, in order, into one canvas. Defaulted
    /// legend positions share one running offset triple so legends from
    /// different layers never overlap.
    pub fn to_svg(
        &self,
        width: f64,
        height: f64,
        render_3d_legend: bool,
        render_2d_legend: bool,
    ) -> Svg {
        let mut leg_pos = DEFAULT_LEGEND_OFFSETS;
        let mut svg = Svg::new();
        svg.width = Some(width.into());
        svg.height = Some(height.into());
        for layer in &self.geometry {
            if layer.hidden() {
                continue;
            }
            match layer {
                VisualizationLayer::Analysis(layer) => svg.children.extend(layer.to_svg_elements(
                    width,
                    height,
                    render_3d_legend,
                    render_2d_legend,
                    &mut leg_pos,
                )),
                VisualizationLayer::Context(layer) => {
                    svg.children.extend(layer.to_svg_elements());
                }
            }
        }
        debug!(
            set = %self.identifier,
            layers = self.geometry.len(),
            elements = svg.children.len(),
            "composed visualization set"
        );
        svg
    }

    /// Render and write the document to a file.
    pub fn to_svg_file(
        &self,
        path: impl AsRef<Path>,
        width: f64,
        height: f64,
        render_3d_legend: bool,
        render_2d_legend: bool,
    ) -> Result<()> {
        let markup = self
            .to_svg(width, height, render_3d_legend, render_2d_legend)
            .to_string();
        fs::write(path.as_ref(), markup)?;
        debug!(path = %path.as_ref().display(), "wrote svg file");
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_dict())?)
    }

    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path.as_ref(), self.to_json()?)?;
        debug!(path = %path.as_ref().display(), "wrote json file");
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_dict(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::VisualizationData;
    use crate::context::ContextGeometry;
    use heliograph_geom::{Geometry, LineSegment2, Mesh3, point2, point3};

    fn analysis_layer(identifier: &str) -> AnalysisGeometry {
        let mesh = Mesh3::new(
            vec![
                point3(0.0, 0.0, 0.0),
                point3(1.0, 0.0, 0.0),
                point3(1.0, 1.0, 0.0),
                point3(0.0, 1.0, 0.0),
            ],
            vec![vec![0, 1, 2, 3]],
        )
        .unwrap();
        AnalysisGeometry::new(
            identifier,
            vec![Geometry::Mesh3(mesh)],
            vec![VisualizationData::new(vec![1.0], None)],
        )
        .unwrap()
    }

    fn context_layer(identifier: &str) -> ContextGeometry {
        let segment = LineSegment2::from_end_points(point2(0.0, 0.0), point2(4.0, 2.0));
        ContextGeometry::from_geometry(identifier, vec![Geometry::LineSegment2(segment)], None)
    }

    #[test]
    fn layers_compose_in_insertion_order() {
        let set = VisualizationSet::new(
            "scene",
            vec![
                VisualizationLayer::Analysis(analysis_layer("roof")),
                VisualizationLayer::Context(context_layer("site")),
            ],
        );
        let markup = set.to_svg(800.0, 600.0, false, false).to_string();
        let polygon = markup.find("<polygon").unwrap();
        let line = markup.find("<line").unwrap();
        assert!(polygon < line);
    }

    #[test]
    fn hidden_layers_are_skipped() {
        let mut context = context_layer("site");
        context.hidden = true;
        let set = VisualizationSet::new("scene", vec![VisualizationLayer::Context(context)]);
        let markup = set.to_svg(800.0, 600.0, false, false).to_string();
        assert!(!markup.contains("<line"));
    }

    #[test]
    fn two_analysis_layers_get_distinct_legend_origins() {
        let set = VisualizationSet::new(
            "scene",
            vec![
                VisualizationLayer::Analysis(analysis_layer("a")),
                VisualizationLayer::Analysis(analysis_layer("b")),
            ],
        );
        let markup = set.to_svg(800.0, 600.0, false, true).to_string();
        assert!(markup.contains("x=\"10\""));
        assert!(markup.contains("x=\"118\""));
    }

    #[test]
    fn set_dict_round_trip() {
        let mut set = VisualizationSet::new(
            "scene",
            vec![
                VisualizationLayer::Analysis(analysis_layer("roof")),
                VisualizationLayer::Context(context_layer("site")),
            ],
        );
        set.units = Some("Meters".to_string());
        let dict = set.to_dict();
        let back = VisualizationSet::from_dict(&dict).unwrap();
        assert_eq!(back, set);
        assert_eq!(back.to_dict(), dict);
    }

    #[test]
    fn json_round_trip() {
        let set = VisualizationSet::new(
            "scene",
            vec![VisualizationLayer::Context(context_layer("site"))],
        );
        let json = set.to_json().unwrap();
        let back = VisualizationSet::from_json(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn set_bounds_cover_all_layers() {
        let set = VisualizationSet::new(
            "scene",
            vec![
                VisualizationLayer::Analysis(analysis_layer("roof")),
                VisualizationLayer::Context(context_layer("site")),
            ],
        );
        assert_eq!(set.min(), Some(point3(0.0, 0.0, 0.0)));
        assert_eq!(set.max(), Some(point3(4.0, 2.0, 0.0)));
    }
}
