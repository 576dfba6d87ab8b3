#![forbid(unsafe_code)]

//! Typed SVG element model with validated attributes.
//!
//! Every concrete element owns a fixed set of typed attribute fields. Setting
//! an attribute goes through the coercion layer in [`coerce`], so a stored
//! value is always valid by construction. Serialization via
//! [`Element::to_string`](element::Element) is deterministic: declared
//! attributes appear in declaration order, `data-*` pairs follow, and child
//! elements serialize in insertion order.

pub mod coerce;
pub mod element;
pub mod fmt;
pub mod length;
pub mod path;
pub mod transform;

pub use coerce::Raw;
pub use element::{
    Circle, Defs, Desc, DominantBaseline, Element, Ellipse, G, Line, LinearGradient, Marker,
    Path, Polygon, Polyline, Presentation, RadialGradient, Rect, Stop, Style, Svg, TSpan, Text,
    TextAnchor, Title,
};
pub use length::{Align, Length, LengthUnit, NumberOrLength, PreserveAspectRatio, ScaleType, ViewBox};
pub use path::PathCommand;
pub use transform::Transform;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("attribute \"{name}\" expects a number, got \"{got}\"")]
    InvalidNumber { name: &'static str, got: String },
    #[error("attribute \"{name}\" expects an integer, got \"{got}\"")]
    InvalidInteger { name: &'static str, got: String },
    #[error("attribute \"{name}\" expects a number or length, got \"{got}\"")]
    InvalidLength { name: &'static str, got: String },
    #[error("\"{got}\" is not an accepted value; choose from {allowed}")]
    UnknownVariant { got: String, allowed: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
