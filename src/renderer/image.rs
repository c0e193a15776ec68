//! Incremental SVG document writer
//!
//! [`SvgImage`] writes the prolog and root `<svg>` tag as soon as it is
//! created, then appends one fragment per drawing call. Style scopes are
//! kept on a [`StyleStack`]; groups and `with_style` scopes push a frame
//! for the duration of a closure so nested calls inherit it.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SvgError;
use crate::style::{PrimitiveKind, Style, StyleStack};
use crate::stylesheet::Stylesheet;

use super::geometry::Transform;
use super::sink::Sink;

static SVG_WIDTH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<svg width="[^"]*""#).unwrap());
static SVG_HEIGHT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(<svg width="[^"]*") height="[^"]*""#).unwrap());

/// An SVG document being written into a sink
///
/// Drawing methods take `&mut self` and append immediately. Once
/// [`close`](SvgImage::close) has been called, every further drawing or
/// mutation call fails with [`SvgError::DocumentClosed`]; a second `close`
/// is a no-op.
#[derive(Debug)]
pub struct SvgImage<S: Sink = String> {
    sink: S,
    styles: StyleStack,
    closed: bool,
}

impl SvgImage<String> {
    /// Create an image backed by an in-memory buffer
    ///
    /// Width and height are written as given, so plain numbers and SVG
    /// lengths with units (`"100%"`, `"10cm"`) both work.
    pub fn new(width: impl fmt::Display, height: impl fmt::Display) -> Result<Self, SvgError> {
        Self::with_sink(String::new(), width, height)
    }
}

impl<S: Sink> SvgImage<S> {
    /// Create an image writing into `sink`; the header is written immediately
    pub fn with_sink(
        sink: S,
        width: impl fmt::Display,
        height: impl fmt::Display,
    ) -> Result<Self, SvgError> {
        let mut image = Self {
            sink,
            styles: StyleStack::new(),
            closed: false,
        };
        let (width, height) = (length(width), length(height));
        image.sink.append(&header(&width, &height))?;
        tracing::debug!(%width, %height, "opened svg document");
        Ok(image)
    }

    /// Create an image, run `draw` against it and close it
    pub fn build<F>(
        sink: S,
        width: impl fmt::Display,
        height: impl fmt::Display,
        draw: F,
    ) -> Result<Self, SvgError>
    where
        F: FnOnce(&mut Self) -> Result<(), SvgError>,
    {
        let mut image = Self::with_sink(sink, width, height)?;
        draw(&mut image)?;
        image.close()?;
        Ok(image)
    }

    /// Rewrite the `width` attribute of the root element
    pub fn set_width(&mut self, width: impl fmt::Display) -> Result<(), SvgError> {
        self.ensure_open()?;
        let width = length(width);
        let sink = self
            .sink
            .as_rewritable()
            .ok_or_else(|| SvgError::unsupported_mutation("width"))?;
        let replacement = format!(r#"<svg width="{}""#, width.replace('$', "$$"));
        sink.replace_first(&SVG_WIDTH_RE, &replacement);
        tracing::debug!(%width, "rewrote document width");
        Ok(())
    }

    /// Rewrite the `height` attribute of the root element
    pub fn set_height(&mut self, height: impl fmt::Display) -> Result<(), SvgError> {
        self.ensure_open()?;
        let height = length(height);
        let sink = self
            .sink
            .as_rewritable()
            .ok_or_else(|| SvgError::unsupported_mutation("height"))?;
        let replacement = format!(r#"${{1}} height="{}""#, height.replace('$', "$$"));
        sink.replace_first(&SVG_HEIGHT_RE, &replacement);
        tracing::debug!(%height, "rewrote document height");
        Ok(())
    }

    /// Write the closing tag and flush the sink
    pub fn close(&mut self) -> Result<(), SvgError> {
        if self.closed {
            tracing::warn!("svg document closed twice");
            return Ok(());
        }
        if self.styles.depth() > 0 {
            tracing::warn!(depth = self.styles.depth(), "closing with open style scopes");
        }
        self.sink.append("</svg>")?;
        self.sink.flush()?;
        self.closed = true;
        tracing::debug!("closed svg document");
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Snapshot of everything written so far
    pub fn output(&self) -> String {
        self.sink.contents().into_owned()
    }

    /// Give back the sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// The style nested calls currently inherit
    pub fn effective_style(&self) -> Style {
        self.styles.effective()
    }

    /// Push a default style without a closure; pair with [`unset_style`](Self::unset_style)
    pub fn set_style(&mut self, style: &Style) {
        self.styles.push(style);
    }

    /// Pop the last default style; a no-op returning `None` if none is set
    pub fn unset_style(&mut self) -> Option<Style> {
        self.styles.pop()
    }

    /// Run `draw` with `style` merged into the default style
    pub fn with_style<T, F>(&mut self, style: &Style, draw: F) -> Result<T, SvgError>
    where
        F: FnOnce(&mut Self) -> Result<T, SvgError>,
    {
        self.styles.push(style);
        let result = draw(self);
        self.styles.pop();
        result
    }

    /// Run `draw` with a stylesheet preset merged into the default style
    pub fn with_named_style<T, F>(
        &mut self,
        stylesheet: &Stylesheet,
        name: &str,
        draw: F,
    ) -> Result<T, SvgError>
    where
        F: FnOnce(&mut Self) -> Result<T, SvgError>,
    {
        let style = stylesheet
            .style(name)
            .ok_or_else(|| SvgError::unknown_style(name))?;
        self.with_style(style, draw)
    }

    /// Open a `<g>` element
    pub fn start_group(
        &mut self,
        style: Option<&Style>,
        transform: &Transform,
    ) -> Result<(), SvgError> {
        let mut markup = String::from("<g");
        if let Some(value) = transform.to_attr() {
            markup.push_str(&format!(r#" transform="{}""#, value));
        }
        markup.push_str(&style_attr(&self.resolve_style(PrimitiveKind::Group, style)));
        markup.push_str(">\n");
        self.emit(&markup)?;
        tracing::debug!(transform = %transform, "opened group");
        Ok(())
    }

    /// Close the innermost `<g>` element
    pub fn end_group(&mut self) -> Result<(), SvgError> {
        self.emit("</g>\n")
    }

    /// Emit a group whose children, drawn by `draw`, inherit `style`
    ///
    /// The style scope and the `</g>` are closed even if `draw` fails;
    /// its error is returned afterwards.
    pub fn group<T, F>(
        &mut self,
        style: Option<&Style>,
        transform: &Transform,
        draw: F,
    ) -> Result<T, SvgError>
    where
        F: FnOnce(&mut Self) -> Result<T, SvgError>,
    {
        self.start_group(style, transform)?;
        let scope = style.cloned().unwrap_or_default();
        let result = self.with_style(&scope, draw);
        let closed = self.end_group();
        let value = result?;
        closed?;
        Ok(value)
    }

    /// Final style for one element of `kind`
    pub(crate) fn resolve_style(&self, kind: PrimitiveKind, explicit: Option<&Style>) -> Style {
        self.styles.resolve(kind, explicit)
    }

    /// Append a complete fragment
    pub(crate) fn emit(&mut self, fragment: &str) -> Result<(), SvgError> {
        self.ensure_open()?;
        self.sink.append(fragment)
    }

    fn ensure_open(&self) -> Result<(), SvgError> {
        if self.closed {
            Err(SvgError::DocumentClosed)
        } else {
            Ok(())
        }
    }
}

/// A header length as attribute text
fn length(value: impl fmt::Display) -> String {
    escape_xml(&value.to_string())
}

/// XML prolog, doctype and the unclosed root element
fn header(width: &str, height: &str) -> String {
    format!(
        r#"<?xml version="1.0" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN"
  "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg width="{width}" height="{height}" version="1.1"
  xmlns="http://www.w3.org/2000/svg">
"#
    )
}

/// Format a resolved style as an inline `style` attribute, or nothing if empty
pub(crate) fn style_attr(style: &Style) -> String {
    if style.is_empty() {
        String::new()
    } else {
        format!(r#" style="{}""#, escape_xml(&style.to_string()))
    }
}

/// Escape special XML characters
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
