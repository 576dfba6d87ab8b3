//! Concrete SVG elements and their shared serializer.
//!
//! Each element struct declares its full attribute list as typed fields. The
//! serialized attribute name for every field is a pre-hyphenated literal
//! (`stroke_width` stores as `stroke-width`, namespaced names carry their
//! colon), so no name mangling happens at render time. One central writer
//! implements the markup contract for every element:
//!
//! 1. declared attributes, in declaration order, values XML-escaped;
//! 2. free-form `data-*` pairs after the declared attributes;
//! 3. literal text content renders `<tag ...>text</tag>`;
//! 4. otherwise children render recursively inside an open/close pair;
//! 5. otherwise the tag self-closes.

use std::fmt;

use indexmap::IndexMap;

use crate::coerce::{self, Raw};
use crate::fmt::{escape_xml_into, fmt_f64};
use crate::length::{NumberOrLength, PreserveAspectRatio, ViewBox};
use crate::path::PathCommand;
use crate::transform::Transform;
use crate::Result;

const SVG_XMLNS: &str = "http://www.w3.org/2000/svg";

/// Any element, for heterogeneous child lists.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Svg(Svg),
    G(G),
    Defs(Defs),
    Circle(Circle),
    Ellipse(Ellipse),
    Line(Line),
    Polyline(Polyline),
    Polygon(Polygon),
    Path(Path),
    Rect(Rect),
    Text(Text),
    TSpan(TSpan),
    Title(Title),
    Desc(Desc),
    Style(Style),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
    Stop(Stop),
    Marker(Marker),
}

impl Element {
    fn as_node(&self) -> &dyn Node {
        match self {
            Element::Svg(e) => e,
            Element::G(e) => e,
            Element::Defs(e) => e,
            Element::Circle(e) => e,
            Element::Ellipse(e) => e,
            Element::Line(e) => e,
            Element::Polyline(e) => e,
            Element::Polygon(e) => e,
            Element::Path(e) => e,
            Element::Rect(e) => e,
            Element::Text(e) => e,
            Element::TSpan(e) => e,
            Element::Title(e) => e,
            Element::Desc(e) => e,
            Element::Style(e) => e,
            Element::LinearGradient(e) => e,
            Element::RadialGradient(e) => e,
            Element::Stop(e) => e,
            Element::Marker(e) => e,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_node(&mut out, self.as_node());
        f.write_str(&out)
    }
}

macro_rules! impl_element_conversions {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Element {
                fn from(e: $variant) -> Self {
                    Element::$variant(e)
                }
            }

            impl fmt::Display for $variant {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let mut out = String::new();
                    write_node(&mut out, self);
                    f.write_str(&out)
                }
            }
        )+
    };
}

impl_element_conversions!(
    Svg, G, Defs, Circle, Ellipse, Line, Polyline, Polygon, Path, Rect, Text, TSpan, Title,
    Desc, Style, LinearGradient, RadialGradient, Stop, Marker,
);

/// What the writer needs from one element.
trait Node {
    fn name(&self) -> &'static str;
    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>);
    fn data(&self) -> Option<&IndexMap<String, String>> {
        None
    }
    fn text(&self) -> Option<&str> {
        None
    }
    fn children(&self) -> &[Element] {
        &[]
    }
}

fn write_node(out: &mut String, node: &dyn Node) {
    out.push('<');
    out.push_str(node.name());
    let mut attrs = Vec::new();
    node.push_attrs(&mut attrs);
    for (name, value) in &attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_xml_into(out, value);
        out.push('"');
    }
    if let Some(data) = node.data() {
        for (key, value) in data {
            out.push_str(" data-");
            out.push_str(key);
            out.push_str("=\"");
            escape_xml_into(out, value);
            out.push('"');
        }
    }
    if let Some(text) = node.text() {
        out.push('>');
        escape_xml_into(out, text);
        out.push_str("</");
        out.push_str(node.name());
        out.push('>');
    } else if !node.children().is_empty() {
        out.push('>');
        for child in node.children() {
            write_node(out, child.as_node());
        }
        out.push_str("</");
        out.push_str(node.name());
        out.push('>');
    } else {
        out.push_str("/>");
    }
}

fn push_num(attrs: &mut Vec<(&'static str, String)>, name: &'static str, v: Option<f64>) {
    if let Some(v) = v {
        attrs.push((name, fmt_f64(v)));
    }
}

fn push_display<T: fmt::Display>(
    attrs: &mut Vec<(&'static str, String)>,
    name: &'static str,
    v: &Option<T>,
) {
    if let Some(v) = v {
        attrs.push((name, v.to_string()));
    }
}

fn push_text(attrs: &mut Vec<(&'static str, String)>, name: &'static str, v: &Option<String>) {
    if let Some(v) = v {
        attrs.push((name, v.clone()));
    }
}

fn push_number_list(attrs: &mut Vec<(&'static str, String)>, name: &'static str, values: &[f64]) {
    if values.is_empty() {
        return;
    }
    let mut out = String::new();
    for (i, &v) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        crate::fmt::fmt_f64_into(&mut out, v);
    }
    attrs.push((name, out));
}

fn push_transforms(attrs: &mut Vec<(&'static str, String)>, name: &'static str, v: &[Transform]) {
    if !v.is_empty() {
        attrs.push((name, Transform::join(v)));
    }
}

/// Paint and opacity attributes shared by every drawable element. Serializes
/// in a fixed order after the element's geometry attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presentation {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_dasharray: Vec<f64>,
    pub fill_opacity: Option<f64>,
    pub stroke_opacity: Option<f64>,
    pub opacity: Option<f64>,
}

impl Presentation {
    pub fn set_stroke_width(&mut self, value: impl Into<Raw>) -> Result<()> {
        self.stroke_width = Some(coerce::number(value, "stroke_width")?);
        Ok(())
    }

    pub fn set_opacity(&mut self, value: impl Into<Raw>) -> Result<()> {
        self.opacity = Some(coerce::number(value, "opacity")?);
        Ok(())
    }

    fn push_onto(&self, attrs: &mut Vec<(&'static str, String)>) {
        push_text(attrs, "fill", &self.fill);
        push_text(attrs, "stroke", &self.stroke);
        push_num(attrs, "stroke-width", self.stroke_width);
        push_number_list(attrs, "stroke-dasharray", &self.stroke_dasharray);
        push_num(attrs, "fill-opacity", self.fill_opacity);
        push_num(attrs, "stroke-opacity", self.stroke_opacity);
        push_num(attrs, "opacity", self.opacity);
    }
}

/// The root document element. Declares the SVG namespace unless overridden.
#[derive(Debug, Clone, PartialEq)]
pub struct Svg {
    pub width: Option<NumberOrLength>,
    pub height: Option<NumberOrLength>,
    pub view_box: Option<ViewBox>,
    pub preserve_aspect_ratio: Option<PreserveAspectRatio>,
    pub xmlns: String,
    pub children: Vec<Element>,
    pub data: IndexMap<String, String>,
}

impl Svg {
    pub fn new() -> Self {
        Self {
            width: None,
            height: None,
            view_box: None,
            preserve_aspect_ratio: None,
            xmlns: SVG_XMLNS.to_string(),
            children: Vec::new(),
            data: IndexMap::new(),
        }
    }

    pub fn set_width(&mut self, value: impl Into<Raw>) -> Result<()> {
        self.width = Some(coerce::number_or_length(value, "width")?);
        Ok(())
    }

    pub fn set_height(&mut self, value: impl Into<Raw>) -> Result<()> {
        self.height = Some(coerce::number_or_length(value, "height")?);
        Ok(())
    }
}

impl Default for Svg {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for Svg {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>) {
        push_display(attrs, "width", &self.width);
        push_display(attrs, "height", &self.height);
        push_display(attrs, "viewBox", &self.view_box);
        push_display(attrs, "preserveAspectRatio", &self.preserve_aspect_ratio);
        attrs.push(("xmlns", self.xmlns.clone()));
    }

    fn data(&self) -> Option<&IndexMap<String, String>> {
        Some(&self.data)
    }

    fn children(&self) -> &[Element] {
        &self.children
    }
}

/// A group container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct G {
    pub id: Option<String>,
    pub transform: Vec<Transform>,
    pub presentation: Presentation,
    pub children: Vec<Element>,
    pub data: IndexMap<String, String>,
}

impl G {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(children: Vec<Element>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }
}

impl Node for G {
    fn name(&self) -> &'static str {
        "g"
    }

    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>) {
        push_text(attrs, "id", &self.id);
        push_transforms(attrs, "transform", &self.transform);
        self.presentation.push_onto(attrs);
    }

    fn data(&self) -> Option<&IndexMap<String, String>> {
        Some(&self.data)
    }

    fn children(&self) -> &[Element] {
        &self.children
    }
}

/// Container for referenced definitions such as gradients and markers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Defs {
    pub id: Option<String>,
    pub children: Vec<Element>,
}

impl Defs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for Defs {
    fn name(&self) -> &'static str {
        "defs"
    }

    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>) {
        push_text(attrs, "id", &self.id);
    }

    fn children(&self) -> &[Element] {
        &self.children
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    pub cx: Option<f64>,
    pub cy: Option<f64>,
    pub r: Option<f64>,
    pub presentation: Presentation,
    pub transform: Vec<Transform>,
    pub id: Option<String>,
    pub data: IndexMap<String, String>,
}

impl Circle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cx(&mut self, value: impl Into<Raw>) -> Result<()> {
        self.cx = Some(coerce::number(value, "cx")?);
        Ok(())
    }

    pub fn set_cy(&mut self, value: impl Into<Raw>) -> Result<()> {
        self.cy = Some(coerce::number(value, "cy")?);
        Ok(())
    }

    pub fn set_r(&mut self, value: impl Into<Raw>) -> Result<()> {
        self.r = Some(coerce::number(value, "r")?);
        Ok(())
    }
}

impl Node for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>) {
        push_num(attrs, "cx", self.cx);
        push_num(attrs, "cy", self.cy);
        push_num(attrs, "r", self.r);
        self.presentation.push_onto(attrs);
        push_transforms(attrs, "transform", &self.transform);
        push_text(attrs, "id", &self.id);
    }

    fn data(&self) -> Option<&IndexMap<String, String>> {
        Some(&self.data)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ellipse {
    pub cx: Option<f64>,
    pub cy: Option<f64>,
    pub rx: Option<f64>,
    pub ry: Option<f64>,
    pub presentation: Presentation,
    pub transform: Vec<Transform>,
    pub id: Option<String>,
}

impl Ellipse {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for Ellipse {
    fn name(&self) -> &'static str {
        "ellipse"
    }

    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>) {
        push_num(attrs, "cx", self.cx);
        push_num(attrs, "cy", self.cy);
        push_num(attrs, "rx", self.rx);
        push_num(attrs, "ry", self.ry);
        self.presentation.push_onto(attrs);
        push_transforms(attrs, "transform", &self.transform);
        push_text(attrs, "id", &self.id);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub x1: Option<f64>,
    pub y1: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
    pub presentation: Presentation,
    pub transform: Vec<Transform>,
    pub marker_end: Option<String>,
    pub id: Option<String>,
    pub data: IndexMap<String, String>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_x1(&mut self, value: impl Into<Raw>) -> Result<()> {
        self.x1 = Some(coerce::number(value, "x1")?);
        Ok(())
    }

    pub fn set_y1(&mut self, value: impl Into<Raw>) -> Result<()> {
        self.y1 = Some(coerce::number(value, "y1")?);
        Ok(())
    }

    pub fn set_x2(&mut self, value: impl Into<Raw>) -> Result<()> {
        self.x2 = Some(coerce::number(value, "x2")?);
        Ok(())
    }

    pub fn set_y2(&mut self, value: impl Into<Raw>) -> Result<()> {
        self.y2 = Some(coerce::number(value, "y2")?);
        Ok(())
    }
}

impl Node for Line {
    fn name(&self) -> &'static str {
        "line"
    }

    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>) {
        push_num(attrs, "x1", self.x1);
        push_num(attrs, "y1", self.y1);
        push_num(attrs, "x2", self.x2);
        push_num(attrs, "y2", self.y2);
        self.presentation.push_onto(attrs);
        push_transforms(attrs, "transform", &self.transform);
        push_text(attrs, "marker-end", &self.marker_end);
        push_text(attrs, "id", &self.id);
    }

    fn data(&self) -> Option<&IndexMap<String, String>> {
        Some(&self.data)
    }
}

/// An open run of connected straight segments. `points` alternates x and y.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<f64>,
    pub presentation: Presentation,
    pub transform: Vec<Transform>,
    pub id: Option<String>,
    pub data: IndexMap<String, String>,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for Polyline {
    fn name(&self) -> &'static str {
        "polyline"
    }

    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>) {
        push_number_list(attrs, "points", &self.points);
        self.presentation.push_onto(attrs);
        push_transforms(attrs, "transform", &self.transform);
        push_text(attrs, "id", &self.id);
    }

    fn data(&self) -> Option<&IndexMap<String, String>> {
        Some(&self.data)
    }
}

/// A closed run of connected straight segments. `points` alternates x and y.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub points: Vec<f64>,
    pub presentation: Presentation,
    pub transform: Vec<Transform>,
    pub id: Option<String>,
    pub data: IndexMap<String, String>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for Polygon {
    fn name(&self) -> &'static str {
        "polygon"
    }

    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>) {
        push_number_list(attrs, "points", &self.points);
        self.presentation.push_onto(attrs);
        push_transforms(attrs, "transform", &self.transform);
        push_text(attrs, "id", &self.id);
    }

    fn data(&self) -> Option<&IndexMap<String, String>> {
        Some(&self.data)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub d: Vec<PathCommand>,
    pub presentation: Presentation,
    pub transform: Vec<Transform>,
    pub marker_end: Option<String>,
    pub id: Option<String>,
    pub data: IndexMap<String, String>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commands(d: Vec<PathCommand>) -> Self {
        Self {
            d,
            ..Self::default()
        }
    }
}

impl Node for Path {
    fn name(&self) -> &'static str {
        "path"
    }

    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>) {
        if !self.d.is_empty() {
            attrs.push(("d", PathCommand::join(&self.d)));
        }
        self.presentation.push_onto(attrs);
        push_transforms(attrs, "transform", &self.transform);
        push_text(attrs, "marker-end", &self.marker_end);
        push_text(attrs, "id", &self.id);
    }

    fn data(&self) -> Option<&IndexMap<String, String>> {
        Some(&self.data)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rect {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rx: Option<f64>,
    pub ry: Option<f64>,
    pub presentation: Presentation,
    pub transform: Vec<Transform>,
    pub id: Option<String>,
    pub data: IndexMap<String, String>,
}

impl Rect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_width(&mut self, value: impl Into<Raw>) -> Result<()> {
        self.width = Some(coerce::number(value, "width")?);
        Ok(())
    }

    pub fn set_height(&mut self, value: impl Into<Raw>) -> Result<()> {
        self.height = Some(coerce::number(value, "height")?);
        Ok(())
    }
}

impl Node for Rect {
    fn name(&self) -> &'static str {
        "rect"
    }

    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>) {
        push_num(attrs, "x", self.x);
        push_num(attrs, "y", self.y);
        push_num(attrs, "width", self.width);
        push_num(attrs, "height", self.height);
        push_num(attrs, "rx", self.rx);
        push_num(attrs, "ry", self.ry);
        self.presentation.push_onto(attrs);
        push_transforms(attrs, "transform", &self.transform);
        push_text(attrs, "id", &self.id);
    }

    fn data(&self) -> Option<&IndexMap<String, String>> {
        Some(&self.data)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TextAnchor {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "start" => Ok(TextAnchor::Start),
            "middle" => Ok(TextAnchor::Middle),
            "end" => Ok(TextAnchor::End),
            other => Err(crate::Error::UnknownVariant {
                got: other.to_string(),
                allowed: "start, middle, end",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominantBaseline {
    Auto,
    Middle,
    Hanging,
}

impl DominantBaseline {
    fn as_str(self) -> &'static str {
        match self {
            DominantBaseline::Auto => "auto",
            DominantBaseline::Middle => "middle",
            DominantBaseline::Hanging => "hanging",
        }
    }
}

impl fmt::Display for DominantBaseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DominantBaseline {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(DominantBaseline::Auto),
            "middle" => Ok(DominantBaseline::Middle),
            "hanging" => Ok(DominantBaseline::Hanging),
            other => Err(crate::Error::UnknownVariant {
                got: other.to_string(),
                allowed: "auto, middle, hanging",
            }),
        }
    }
}

/// A single run of rendered text. Holds either literal text or `tspan`
/// children, never both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub fill: Option<String>,
    pub font_size: Option<NumberOrLength>,
    pub font_family: Option<String>,
    pub text_anchor: Option<TextAnchor>,
    pub dominant_baseline: Option<DominantBaseline>,
    pub opacity: Option<f64>,
    pub transform: Vec<Transform>,
    pub id: Option<String>,
    pub text: Option<String>,
    pub children: Vec<Element>,
    pub data: IndexMap<String, String>,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_x(&mut self, value: impl Into<Raw>) -> Result<()> {
        self.x = Some(coerce::number(value, "x")?);
        Ok(())
    }

    pub fn set_y(&mut self, value: impl Into<Raw>) -> Result<()> {
        self.y = Some(coerce::number(value, "y")?);
        Ok(())
    }

    pub fn set_font_size(&mut self, value: impl Into<Raw>) -> Result<()> {
        self.font_size = Some(coerce::number_or_length(value, "font_size")?);
        Ok(())
    }
}

impl Node for Text {
    fn name(&self) -> &'static str {
        "text"
    }

    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>) {
        push_num(attrs, "x", self.x);
        push_num(attrs, "y", self.y);
        push_text(attrs, "fill", &self.fill);
        push_display(attrs, "font-size", &self.font_size);
        push_text(attrs, "font-family", &self.font_family);
        push_display(attrs, "text-anchor", &self.text_anchor);
        push_display(attrs, "dominant-baseline", &self.dominant_baseline);
        push_num(attrs, "opacity", self.opacity);
        push_transforms(attrs, "transform", &self.transform);
        push_text(attrs, "id", &self.id);
    }

    fn data(&self) -> Option<&IndexMap<String, String>> {
        Some(&self.data)
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn children(&self) -> &[Element] {
        &self.children
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TSpan {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub dx: Option<f64>,
    pub dy: Option<f64>,
    pub text: Option<String>,
}

impl TSpan {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for TSpan {
    fn name(&self) -> &'static str {
        "tspan"
    }

    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>) {
        push_num(attrs, "x", self.x);
        push_num(attrs, "y", self.y);
        push_num(attrs, "dx", self.dx);
        push_num(attrs, "dy", self.dy);
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Title {
    pub text: Option<String>,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl Node for Title {
    fn name(&self) -> &'static str {
        "title"
    }

    fn push_attrs(&self, _attrs: &mut Vec<(&'static str, String)>) {}

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Machine-readable description text, used for diagnostic payloads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Desc {
    pub text: Option<String>,
}

impl Desc {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl Node for Desc {
    fn name(&self) -> &'static str {
        "desc"
    }

    fn push_attrs(&self, _attrs: &mut Vec<(&'static str, String)>) {}

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Inline CSS carried as literal text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub text: Option<String>,
}

impl Style {
    pub fn new(css: impl Into<String>) -> Self {
        Self {
            text: Some(css.into()),
        }
    }
}

impl Node for Style {
    fn name(&self) -> &'static str {
        "style"
    }

    fn push_attrs(&self, _attrs: &mut Vec<(&'static str, String)>) {}

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearGradient {
    pub id: Option<String>,
    pub x1: Option<NumberOrLength>,
    pub y1: Option<NumberOrLength>,
    pub x2: Option<NumberOrLength>,
    pub y2: Option<NumberOrLength>,
    pub gradient_units: Option<String>,
    pub gradient_transform: Vec<Transform>,
    pub children: Vec<Element>,
}

impl LinearGradient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for LinearGradient {
    fn name(&self) -> &'static str {
        "linearGradient"
    }

    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>) {
        push_text(attrs, "id", &self.id);
        push_display(attrs, "x1", &self.x1);
        push_display(attrs, "y1", &self.y1);
        push_display(attrs, "x2", &self.x2);
        push_display(attrs, "y2", &self.y2);
        push_text(attrs, "gradientUnits", &self.gradient_units);
        push_transforms(attrs, "gradientTransform", &self.gradient_transform);
    }

    fn children(&self) -> &[Element] {
        &self.children
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadialGradient {
    pub id: Option<String>,
    pub cx: Option<NumberOrLength>,
    pub cy: Option<NumberOrLength>,
    pub r: Option<NumberOrLength>,
    pub children: Vec<Element>,
}

impl RadialGradient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for RadialGradient {
    fn name(&self) -> &'static str {
        "radialGradient"
    }

    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>) {
        push_text(attrs, "id", &self.id);
        push_display(attrs, "cx", &self.cx);
        push_display(attrs, "cy", &self.cy);
        push_display(attrs, "r", &self.r);
    }

    fn children(&self) -> &[Element] {
        &self.children
    }
}

/// One color stop inside a gradient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stop {
    pub offset: Option<NumberOrLength>,
    pub stop_color: Option<String>,
    pub stop_opacity: Option<f64>,
}

impl Stop {
    pub fn new(offset: NumberOrLength, color: impl Into<String>) -> Self {
        Self {
            offset: Some(offset),
            stop_color: Some(color.into()),
            stop_opacity: None,
        }
    }
}

impl Node for Stop {
    fn name(&self) -> &'static str {
        "stop"
    }

    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>) {
        push_display(attrs, "offset", &self.offset);
        push_text(attrs, "stop-color", &self.stop_color);
        push_num(attrs, "stop-opacity", self.stop_opacity);
    }
}

/// A reusable marker, referenced from `marker-end` attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Marker {
    pub id: Option<String>,
    pub view_box: Option<ViewBox>,
    pub ref_x: Option<f64>,
    pub ref_y: Option<f64>,
    pub marker_width: Option<f64>,
    pub marker_height: Option<f64>,
    pub orient: Option<String>,
    pub children: Vec<Element>,
}

impl Marker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for Marker {
    fn name(&self) -> &'static str {
        "marker"
    }

    fn push_attrs(&self, attrs: &mut Vec<(&'static str, String)>) {
        push_text(attrs, "id", &self.id);
        push_display(attrs, "viewBox", &self.view_box);
        push_num(attrs, "refX", self.ref_x);
        push_num(attrs, "refY", self.ref_y);
        push_num(attrs, "markerWidth", self.marker_width);
        push_num(attrs, "markerHeight", self.marker_height);
        push_text(attrs, "orient", &self.orient);
    }

    fn children(&self) -> &[Element] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Length;

    #[test]
    fn self_closing_leaf() {
        let mut c = Circle::new();
        c.set_cx(4.0).unwrap();
        c.set_cy(-2.5).unwrap();
        c.set_r(5.0).unwrap();
        assert_eq!(c.to_string(), "<circle cx=\"4\" cy=\"-2.5\" r=\"5\"/>");
    }

    #[test]
    fn attribute_order_is_declaration_order() {
        let mut line = Line::new();
        line.set_x1(0.0).unwrap();
        line.set_y1(1.0).unwrap();
        line.set_x2(2.0).unwrap();
        line.set_y2(3.0).unwrap();
        line.presentation.stroke = Some("#ff0000".to_string());
        line.presentation.stroke_width = Some(2.0);
        line.presentation.stroke_dasharray = vec![6.0, 6.0];
        assert_eq!(
            line.to_string(),
            "<line x1=\"0\" y1=\"1\" x2=\"2\" y2=\"3\" stroke=\"#ff0000\" \
             stroke-width=\"2\" stroke-dasharray=\"6 6\"/>"
        );
    }

    #[test]
    fn data_pairs_come_after_declared_attributes() {
        let mut rect = Rect::new();
        rect.set_width(10.0).unwrap();
        rect.data.insert("layer".to_string(), "context".to_string());
        rect.data.insert("kind".to_string(), "border".to_string());
        assert_eq!(
            rect.to_string(),
            "<rect width=\"10\" data-layer=\"context\" data-kind=\"border\"/>"
        );
    }

    #[test]
    fn text_content_is_escaped() {
        let mut t = Text::new();
        t.set_x(1.0).unwrap();
        t.text = Some("a < b".to_string());
        assert_eq!(t.to_string(), "<text x=\"1\">a &lt; b</text>");
    }

    #[test]
    fn children_render_in_insertion_order() {
        let mut g = G::new();
        let mut a = Circle::new();
        a.set_r(1.0).unwrap();
        let mut b = Circle::new();
        b.set_r(2.0).unwrap();
        g.children.push(a.into());
        g.children.push(b.into());
        assert_eq!(g.to_string(), "<g><circle r=\"1\"/><circle r=\"2\"/></g>");
    }

    #[test]
    fn svg_root_carries_namespace() {
        let mut root = Svg::new();
        root.set_width(100.0).unwrap();
        root.set_height(Length::percent(50.0)).unwrap();
        assert_eq!(
            root.to_string(),
            "<svg width=\"100\" height=\"50%\" xmlns=\"http://www.w3.org/2000/svg\"/>"
        );
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let mut p = Path::with_commands(vec![
            PathCommand::MoveTo { x: 0.0, y: 0.0 },
            PathCommand::LineTo { x: 3.0, y: 4.0 },
        ]);
        p.presentation.stroke = Some("#000000".to_string());
        assert_eq!(p.to_string(), p.to_string());
    }

    #[test]
    fn gradient_with_stops() {
        let mut grad = LinearGradient::new();
        grad.id = Some("leg1".to_string());
        grad.children.push(
            Stop::new(NumberOrLength::Length(Length::percent(0.0)), "#0000ff").into(),
        );
        grad.children.push(
            Stop::new(NumberOrLength::Length(Length::percent(100.0)), "#ff0000").into(),
        );
        assert_eq!(
            grad.to_string(),
            "<linearGradient id=\"leg1\">\
             <stop offset=\"0%\" stop-color=\"#0000ff\"/>\
             <stop offset=\"100%\" stop-color=\"#ff0000\"/>\
             </linearGradient>"
        );
    }
}
