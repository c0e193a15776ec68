//! Output sinks for incremental SVG emission
//!
//! A [`Sink`] receives markup fragments in order. In-memory sinks also
//! implement [`RewritableSink`], which lets the image edit header
//! attributes that were already written. Streaming sinks cannot do that,
//! and the image reports [`SvgError::UnsupportedMutation`] for them.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use regex::Regex;

use crate::error::SvgError;

/// An append-only text destination
pub trait Sink {
    /// Append a markup fragment
    fn append(&mut self, fragment: &str) -> Result<(), SvgError>;

    /// Full text written so far
    ///
    /// Streaming sinks keep nothing and return an empty string.
    fn contents(&self) -> Cow<'_, str>;

    /// Push buffered output to its destination
    fn flush(&mut self) -> Result<(), SvgError> {
        Ok(())
    }

    /// Access the in-place rewrite capability, if this sink has one
    fn as_rewritable(&mut self) -> Option<&mut dyn RewritableSink> {
        None
    }
}

/// A sink whose buffered text can be edited after it was appended
pub trait RewritableSink {
    /// Replace the first match of `pattern` with `replacement`
    ///
    /// `replacement` may refer to capture groups (`${1}`). Returns whether
    /// a match was found.
    fn replace_first(&mut self, pattern: &Regex, replacement: &str) -> bool;
}

impl Sink for String {
    fn append(&mut self, fragment: &str) -> Result<(), SvgError> {
        self.push_str(fragment);
        Ok(())
    }

    fn contents(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }

    fn as_rewritable(&mut self) -> Option<&mut dyn RewritableSink> {
        Some(self)
    }
}

impl RewritableSink for String {
    fn replace_first(&mut self, pattern: &Regex, replacement: &str) -> bool {
        let replaced = match pattern.replacen(self, 1, replacement) {
            Cow::Borrowed(_) => return false,
            Cow::Owned(text) => text,
        };
        *self = replaced;
        true
    }
}

/// A streaming sink over any writer
///
/// Fragments go straight to the writer, so nothing can be rewritten and
/// [`Sink::contents`] is always empty.
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    writer: W,
    bytes_written: usize,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            bytes_written: 0,
        }
    }

    /// Number of bytes appended so far
    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriteSink<BufWriter<File>> {
    /// Create (or truncate) a file and stream into it
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SvgError> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| SvgError::invalid_target(path.display().to_string(), e))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Sink for WriteSink<W> {
    fn append(&mut self, fragment: &str) -> Result<(), SvgError> {
        self.writer.write_all(fragment.as_bytes())?;
        self.bytes_written += fragment.len();
        Ok(())
    }

    fn contents(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn flush(&mut self) -> Result<(), SvgError> {
        self.writer.flush()?;
        Ok(())
    }
}
