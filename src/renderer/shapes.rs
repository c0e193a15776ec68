//! Shape emitters
//!
//! One method per primitive. Geometry comes first, then an optional
//! explicit style. Each call validates its arguments, builds the whole
//! element, and appends it in one piece.

use crate::error::SvgError;
use crate::style::{PrimitiveKind, Style};

use super::geometry::{points_to_attr, ArcSpec, Coordinates, Point, Rounding};
use super::image::{escape_xml, style_attr, SvgImage};
use super::sink::Sink;

impl<S: Sink> SvgImage<S> {
    /// Draw a straight line between two end points
    pub fn line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: Option<&Style>,
    ) -> Result<(), SvgError> {
        let attrs = format!(r#" x1="{}" y1="{}" x2="{}" y2="{}""#, x1, y1, x2, y2);
        self.emit_element(PrimitiveKind::Line, &attrs, style)
    }

    /// Draw a circle given a center and a radius
    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, style: Option<&Style>) -> Result<(), SvgError> {
        let attrs = format!(r#" cx="{}" cy="{}" r="{}""#, cx, cy, r);
        self.emit_element(PrimitiveKind::Circle, &attrs, style)
    }

    /// Draw an ellipse given a center and two radii
    pub fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        style: Option<&Style>,
    ) -> Result<(), SvgError> {
        let attrs = format!(r#" cx="{}" cy="{}" rx="{}" ry="{}""#, cx, cy, rx, ry);
        self.emit_element(PrimitiveKind::Ellipse, &attrs, style)
    }

    /// Draw a rectangle, optionally with rounded corners
    ///
    /// `rx`/`ry` are written only when both radii are non-zero.
    pub fn rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rounding: Rounding,
        style: Option<&Style>,
    ) -> Result<(), SvgError> {
        let mut attrs = format!(
            r#" x="{}" y="{}" width="{}" height="{}""#,
            x, y, width, height
        );
        if let Some((rx, ry)) = rounding.radii() {
            attrs.push_str(&format!(r#" rx="{}" ry="{}""#, rx, ry));
        }
        self.emit_element(PrimitiveKind::Rect, &attrs, style)
    }

    /// Draw a closed polygon through the given points
    pub fn polygon(
        &mut self,
        points: impl Into<Coordinates>,
        style: Option<&Style>,
    ) -> Result<(), SvgError> {
        self.poly(PrimitiveKind::Polygon, points.into(), style)
    }

    /// Draw an open polyline through the given points
    pub fn polyline(
        &mut self,
        points: impl Into<Coordinates>,
        style: Option<&Style>,
    ) -> Result<(), SvgError> {
        self.poly(PrimitiveKind::Polyline, points.into(), style)
    }

    /// Draw a circular arc as a path
    ///
    /// The arc starts `start_degrees` counter-clockwise from the positive
    /// x axis and runs `sweep_degrees` further (negative sweeps run
    /// clockwise). Sweeps of zero or whole turns produce a degenerate path.
    pub fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_degrees: f64,
        sweep_degrees: f64,
        style: Option<&Style>,
    ) -> Result<(), SvgError> {
        let arc = ArcSpec::new(Point::new(cx, cy), radius, start_degrees, sweep_degrees);
        let attrs = format!(r#" d="{}""#, arc.to_path_d());
        self.emit_element(PrimitiveKind::Arc, &attrs, style)
    }

    /// Draw the upper half of a circle: start 0°, sweep 180°
    pub fn half_circle_arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        style: Option<&Style>,
    ) -> Result<(), SvgError> {
        self.arc(cx, cy, radius, 0.0, 180.0, style)
    }

    /// Draw text, one `<tspan>` per line
    ///
    /// Each line after the first advances one line-height (`dy="1em"`).
    /// `font-family` and `font-size` are written as attributes of the
    /// `<text>` element instead of inside `style`.
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        style: Option<&Style>,
    ) -> Result<(), SvgError> {
        let mut style = self.resolve_style(PrimitiveKind::Text, style);

        let mut markup = format!(r#"<text x="{}" y="{}""#, x, y);
        for attr in ["font-family", "font-size"] {
            if let Some(value) = style.remove(attr) {
                markup.push_str(&format!(r#" {}="{}""#, attr, escape_xml(&value.to_string())));
            }
        }
        markup.push_str(&style_attr(&style));
        markup.push('>');

        for (i, line) in content.lines().enumerate() {
            let dy = if i == 0 { 0 } else { 1 };
            markup.push_str(&format!(
                r#"<tspan x="{}" dy="{}em">{}</tspan>"#,
                x,
                dy,
                escape_xml(line.trim_end())
            ));
        }
        markup.push_str("</text>\n");

        self.emit(&markup)
    }

    fn poly(
        &mut self,
        kind: PrimitiveKind,
        coordinates: Coordinates,
        style: Option<&Style>,
    ) -> Result<(), SvgError> {
        let points = coordinates.to_points()?;
        if points.is_empty() {
            return Ok(());
        }
        let attrs = format!(r#" points="{}""#, points_to_attr(&points));
        self.emit_element(kind, &attrs, style)
    }

    /// Emit a self-closing element with its resolved style
    fn emit_element(
        &mut self,
        kind: PrimitiveKind,
        attrs: &str,
        style: Option<&Style>,
    ) -> Result<(), SvgError> {
        let resolved = self.resolve_style(kind, style);
        let markup = format!("<{}{}{}/>\n", kind.tag(), attrs, style_attr(&resolved));
        self.emit(&markup)
    }
}
