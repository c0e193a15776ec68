//! Error types for document construction

use thiserror::Error;

use crate::stylesheet::StylesheetError;

/// Errors that can occur while building an SVG document
///
/// Every variant is a caller-contract violation reported at the call site.
/// A call that fails never leaves a partially written element in the sink.
#[derive(Debug, Error)]
pub enum SvgError {
    /// The output target could not be opened as a sink
    #[error("invalid output target '{target}': {source}")]
    InvalidOutputTarget {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// Width or height rewrite requested on a sink that cannot edit its text
    #[error("cannot change {attribute} after initialization for this output")]
    UnsupportedMutation { attribute: &'static str },

    /// Rectangle given more than two rounding radii
    #[error("illegal number of arguments to rectangle: {count} radii (at most 2)")]
    IllegalArgumentCount { count: usize },

    /// Flattened polygon/polyline coordinate list has odd length
    #[error("illegal number of coordinates: {count} (should be even)")]
    IllegalCoordinateCount { count: usize },

    /// Drawing or mutation attempted after the document was closed
    #[error("document is already closed")]
    DocumentClosed,

    /// Named style not present in the stylesheet
    #[error("undefined style '{name}'")]
    UnknownStyle { name: String },

    /// Stylesheet could not be loaded
    #[error("stylesheet error: {0}")]
    Stylesheet(#[from] StylesheetError),

    /// Write failure on a streaming sink
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl SvgError {
    /// Create an invalid output target error
    pub fn invalid_target(target: impl Into<String>, source: std::io::Error) -> Self {
        Self::InvalidOutputTarget {
            target: target.into(),
            source,
        }
    }

    /// Create an unsupported mutation error for the given header attribute
    pub fn unsupported_mutation(attribute: &'static str) -> Self {
        Self::UnsupportedMutation { attribute }
    }

    /// Create an unknown style error
    pub fn unknown_style(name: impl Into<String>) -> Self {
        Self::UnknownStyle { name: name.into() }
    }
}
