#![forbid(unsafe_code)]

//! Decorated geometry and visualization documents.
//!
//! A decorated geometry object pairs one immutable geometry value with
//! display style (color, line style, display mode). Decorated objects and
//! data-bound [`AnalysisGeometry`] layers collect into a
//! [`VisualizationSet`], which composes every layer into one SVG document.
//!
//! The screen convention throughout: geometry is expected in quadrant four of
//! the world XY plane and the Y axis flips on output (`svg_y = -geometry_y`),
//! applied exactly once at the leaf coordinate level.

pub mod analysis;
pub mod base;
pub mod context;
pub mod dictutil;
pub mod display2d;
pub mod display3d;
pub mod legend;
pub mod translate;
pub mod visualization;

pub use analysis::{AnalysisGeometry, MatchingMethod, VisualizationData};
pub use base::{DisplayMode, HorizontalAlignment, LineType, VerticalAlignment};
pub use context::ContextGeometry;
pub use dictutil::{DisplayGeometry, VisObject, dict_to_object};
pub use display2d::{
    DisplayArc2D, DisplayLineSegment2D, DisplayMesh2D, DisplayPoint2D, DisplayPolygon2D,
    DisplayPolyline2D, DisplayRay2D, DisplayVector2D,
};
pub use display3d::{
    DisplayArc3D, DisplayCone, DisplayCylinder, DisplayFace3D, DisplayLineSegment3D,
    DisplayMesh3D, DisplayPlane, DisplayPoint3D, DisplayPolyface3D, DisplayPolyline3D,
    DisplayRay3D, DisplaySphere, DisplayText3D, DisplayVector3D,
};
pub use legend::{Legend, LegendParameters};
pub use visualization::{VisualizationLayer, VisualizationSet};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("dictionary lacks the required \"type\" key")]
    MissingType,
    #[error("expected a {expected} dictionary, got \"{got}\"")]
    TypeMismatch { expected: &'static str, got: String },
    #[error("\"{got}\" is not a recognized object type")]
    UnknownType { got: String },
    #[error(
        "expected the number of data set values ({got}) to align with the number of \
         geometries ({geometries}), geometry faces ({faces}), or geometry vertices ({vertices})"
    )]
    DataLengthMismatch {
        got: usize,
        geometries: usize,
        faces: usize,
        vertices: usize,
    },
    #[error(
        "expected the number of data set values ({got}) to align with the number of \
         {method} ({expected})"
    )]
    DataSetArityMismatch {
        got: usize,
        method: &'static str,
        expected: usize,
    },
    #[error("active data index {index} is out of range for {count} data sets")]
    ActiveDataOutOfRange { index: usize, count: usize },
    #[error("a legend color ramp needs at least 2 colors, got {got}")]
    LegendColorCount { got: usize },
    #[error(transparent)]
    Geom(#[from] heliograph_geom::Error),
    #[error(transparent)]
    Svg(#[from] heliograph_svg::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
