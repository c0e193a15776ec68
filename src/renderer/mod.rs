//! SVG document writer and shape emitters
//!
//! This module appends SVG markup to a [`Sink`] as drawing calls are made,
//! resolving each element's inline style from the style stack.

pub mod geometry;
pub mod image;
pub mod shapes;
pub mod sink;

pub use geometry::{ArcSpec, Coordinates, Point, Rounding, Scale, Transform};
pub use image::SvgImage;
pub use sink::{RewritableSink, Sink, WriteSink};
