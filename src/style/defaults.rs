//! Per-primitive fallback styles

use super::Style;

/// The kinds of element the image can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Line,
    Rect,
    Circle,
    Arc,
    Ellipse,
    Polygon,
    Polyline,
    Text,
    Group,
}

impl PrimitiveKind {
    /// SVG element name
    pub fn tag(self) -> &'static str {
        match self {
            PrimitiveKind::Line => "line",
            PrimitiveKind::Rect => "rect",
            PrimitiveKind::Circle => "circle",
            PrimitiveKind::Arc => "path",
            PrimitiveKind::Ellipse => "ellipse",
            PrimitiveKind::Polygon => "polygon",
            PrimitiveKind::Polyline => "polyline",
            PrimitiveKind::Text => "text",
            PrimitiveKind::Group => "g",
        }
    }

    /// Fallback style used when a call supplies no explicit style
    ///
    /// Text defaults to a black fill, every outline shape to a black stroke.
    /// Groups have no fallback.
    pub fn default_style(self) -> Style {
        match self {
            PrimitiveKind::Text => Style::new().with("fill", "black"),
            PrimitiveKind::Group => Style::new(),
            PrimitiveKind::Line
            | PrimitiveKind::Rect
            | PrimitiveKind::Circle
            | PrimitiveKind::Arc
            | PrimitiveKind::Ellipse
            | PrimitiveKind::Polygon
            | PrimitiveKind::Polyline => Style::new().with("stroke", "black"),
        }
    }
}
