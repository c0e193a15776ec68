//! svg-scribe - incremental SVG document builder
//!
//! Draw lines, circles, ellipses, rectangles, polygons, polylines, arcs
//! and text into an SVG 1.1 document. Default styles are inherited
//! through lexically scoped style frames: `with_style` and `group` push a
//! frame for the duration of a closure and pop it afterwards.
//!
//! # Example
//!
//! ```rust
//! use svg_scribe::{draw, Rounding, Style, Transform};
//!
//! let image = draw(200.0, 100.0, |img| {
//!     img.with_style(&Style::new().with("stroke_width", 2), |img| {
//!         img.circle(50.0, 50.0, 20.0, None)?;
//!         img.rectangle(100.0, 30.0, 60.0, 40.0, Rounding::Uniform(5.0), None)
//!     })?;
//!     img.group(None, &Transform::new().translate(10.0, 10.0), |img| {
//!         img.text(0.0, 0.0, "Hello\nworld", None)
//!     })
//! })
//! .unwrap();
//!
//! let svg = image.output();
//! assert!(svg.contains("stroke-width:2;"));
//! assert!(svg.ends_with("</svg>"));
//! ```

use std::fmt;

pub mod error;
pub mod renderer;
pub mod style;
pub mod stylesheet;

pub use error::SvgError;
pub use renderer::{
    ArcSpec, Coordinates, Point, RewritableSink, Rounding, Scale, Sink, SvgImage, Transform,
    WriteSink,
};
pub use style::{normalize, normalize_key, PrimitiveKind, Style, StyleStack, StyleValue};
pub use stylesheet::{Stylesheet, StylesheetError};

/// Build an in-memory image: run `f` against it, then close it
///
/// # Example
///
/// ```rust
/// use svg_scribe::draw;
///
/// let image = draw(100.0, 100.0, |img| img.line(0.0, 0.0, 100.0, 100.0, None)).unwrap();
/// assert!(image.is_closed());
/// assert!(image.output().contains(r#"<line x1="0" y1="0" x2="100" y2="100""#));
/// ```
pub fn draw<F>(
    width: impl fmt::Display,
    height: impl fmt::Display,
    f: F,
) -> Result<SvgImage, SvgError>
where
    F: FnOnce(&mut SvgImage) -> Result<(), SvgError>,
{
    SvgImage::build(String::new(), width, height, f)
}
