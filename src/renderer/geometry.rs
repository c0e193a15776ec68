//! Geometry arguments for shape emitters
//!
//! These types replace loosely typed trailing arguments with explicit
//! values: rectangle corner rounding, polygon point lists, group
//! transforms, and the center/angle description of a circular arc.

use std::fmt;

use crate::error::SvgError;

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Corner rounding for rectangles
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Rounding {
    /// Square corners
    #[default]
    None,
    /// Same radius on both axes
    Uniform(f64),
    /// Independent x and y radii
    Axes(f64, f64),
}

impl Rounding {
    /// Build a rounding from a dynamic list of trailing radii
    ///
    /// Zero radii mean square corners, one is used for both axes, two are
    /// `rx` and `ry`. Anything longer is rejected.
    pub fn from_radii(radii: &[f64]) -> Result<Self, SvgError> {
        match *radii {
            [] => Ok(Rounding::None),
            [r] => Ok(Rounding::Uniform(r)),
            [rx, ry] => Ok(Rounding::Axes(rx, ry)),
            _ => Err(SvgError::IllegalArgumentCount {
                count: radii.len(),
            }),
        }
    }

    /// The `(rx, ry)` pair to emit, if both radii are non-zero
    pub fn radii(self) -> Option<(f64, f64)> {
        let (rx, ry) = match self {
            Rounding::None => return None,
            Rounding::Uniform(r) => (r, r),
            Rounding::Axes(rx, ry) => (rx, ry),
        };
        (rx != 0.0 && ry != 0.0).then_some((rx, ry))
    }
}

/// Point list for polygons and polylines
///
/// Either explicit pairs or a flat, interleaved `x, y, x, y, ...` list.
#[derive(Debug, Clone, PartialEq)]
pub enum Coordinates {
    Pairs(Vec<Point>),
    Flat(Vec<f64>),
}

impl Coordinates {
    /// Wrap a flat interleaved list without validating it yet
    pub fn from_flat(values: impl Into<Vec<f64>>) -> Self {
        Coordinates::Flat(values.into())
    }

    /// Resolve into points
    ///
    /// Fails if a flat list has an odd number of values.
    pub fn to_points(&self) -> Result<Vec<Point>, SvgError> {
        match self {
            Coordinates::Pairs(points) => Ok(points.clone()),
            Coordinates::Flat(values) => {
                if values.len() % 2 != 0 {
                    return Err(SvgError::IllegalCoordinateCount {
                        count: values.len(),
                    });
                }
                Ok(values
                    .chunks_exact(2)
                    .map(|pair| Point::new(pair[0], pair[1]))
                    .collect())
            }
        }
    }
}

impl From<Vec<Point>> for Coordinates {
    fn from(points: Vec<Point>) -> Self {
        Coordinates::Pairs(points)
    }
}

impl From<&[[f64; 2]]> for Coordinates {
    fn from(pairs: &[[f64; 2]]) -> Self {
        Coordinates::Pairs(pairs.iter().map(|[x, y]| Point::new(*x, *y)).collect())
    }
}

impl<const N: usize> From<[[f64; 2]; N]> for Coordinates {
    fn from(pairs: [[f64; 2]; N]) -> Self {
        Coordinates::from(&pairs[..])
    }
}

impl From<Vec<[f64; 2]>> for Coordinates {
    fn from(pairs: Vec<[f64; 2]>) -> Self {
        Coordinates::from(pairs.as_slice())
    }
}

impl From<&[f64]> for Coordinates {
    fn from(values: &[f64]) -> Self {
        Coordinates::Flat(values.to_vec())
    }
}

impl From<Vec<f64>> for Coordinates {
    fn from(values: Vec<f64>) -> Self {
        Coordinates::Flat(values)
    }
}

/// Format points as an SVG `points` attribute value: `x1,y1 x2,y2 ...`
pub fn points_to_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Scale factor for a group transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    Uniform(f64),
    Axes(f64, f64),
}

impl From<f64> for Scale {
    fn from(s: f64) -> Self {
        Scale::Uniform(s)
    }
}

impl From<(f64, f64)> for Scale {
    fn from((sx, sy): (f64, f64)) -> Self {
        Scale::Axes(sx, sy)
    }
}

/// Group-level transform convenience
///
/// Renders as a single `transform` value with the supplied parts in
/// fixed order: translate, rotate, scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub translate: Option<(f64, f64)>,
    /// Rotation in degrees
    pub rotate: Option<f64>,
    pub scale: Option<Scale>,
}

impl Transform {
    /// Identity transform
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.translate = Some((x, y));
        self
    }

    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }

    pub fn scale(mut self, scale: impl Into<Scale>) -> Self {
        self.scale = Some(scale.into());
        self
    }

    /// True when no part was supplied
    pub fn is_identity(&self) -> bool {
        self.translate.is_none() && self.rotate.is_none() && self.scale.is_none()
    }

    /// The `transform` attribute value, or None when nothing was supplied
    pub fn to_attr(&self) -> Option<String> {
        if self.is_identity() {
            return None;
        }
        let mut parts = vec![];
        if let Some((x, y)) = self.translate {
            parts.push(format!("translate({}, {})", x, y));
        }
        if let Some(degrees) = self.rotate {
            parts.push(format!("rotate({})", degrees));
        }
        match self.scale {
            Some(Scale::Uniform(s)) => parts.push(format!("scale({})", s)),
            Some(Scale::Axes(sx, sy)) => parts.push(format!("scale({}, {})", sx, sy)),
            None => {}
        }
        Some(parts.join(" "))
    }
}

/// A circular arc described by center, radius, start angle and sweep
///
/// Angles are in degrees, counter-clockwise on screen (the y axis points
/// down, so positive angles go up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub center: Point,
    pub radius: f64,
    pub start_degrees: f64,
    pub sweep_degrees: f64,
}

impl ArcSpec {
    pub fn new(center: Point, radius: f64, start_degrees: f64, sweep_degrees: f64) -> Self {
        Self {
            center,
            radius,
            start_degrees,
            sweep_degrees,
        }
    }

    /// Point on the circle at the given angle
    fn point_at(&self, degrees: f64) -> Point {
        let theta = degrees.to_radians();
        Point::new(
            self.center.x + self.radius * theta.cos(),
            self.center.y - self.radius * theta.sin(),
        )
    }

    pub fn start(&self) -> Point {
        self.point_at(self.start_degrees)
    }

    /// End point relative to the start point
    pub fn end_offset(&self) -> Point {
        let start = self.start();
        let end = self.point_at(self.start_degrees + self.sweep_degrees);
        Point::new(end.x - start.x, end.y - start.y)
    }

    pub fn large_arc(&self) -> bool {
        self.sweep_degrees.abs() > 180.0
    }

    /// SVG sweep flag: set for clockwise (negative) sweeps
    pub fn sweep_flag(&self) -> bool {
        self.sweep_degrees < 0.0
    }

    /// Path data: a move to the start, then one relative elliptical arc
    ///
    /// A zero sweep (or a full turn) yields a degenerate arc whose end
    /// equals its start; renderers draw nothing for it.
    pub fn to_path_d(&self) -> String {
        let start = self.start();
        let offset = self.end_offset();
        format!(
            "M{},{} a{},{} 0 {},{} {},{}",
            start.x,
            start.y,
            self.radius,
            self.radius,
            self.large_arc() as u8,
            self.sweep_flag() as u8,
            offset.x,
            offset.y
        )
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_attr().unwrap_or_default())
    }
}
