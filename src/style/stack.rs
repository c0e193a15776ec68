//! Lexically scoped default styles

use super::{normalize, PrimitiveKind, Style};

/// A stack of default-style frames
///
/// Each frame is the merge of everything pushed beneath it with the
/// override it was pushed with, so the top frame alone is the effective
/// default style.
#[derive(Debug, Clone, Default)]
pub struct StyleStack {
    frames: Vec<Style>,
}

impl StyleStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new frame: the current effective style with `over` merged on top
    pub fn push(&mut self, over: &Style) {
        let frame = self.effective().merge(&normalize(over));
        tracing::debug!(depth = self.frames.len() + 1, style = %frame, "push style frame");
        self.frames.push(frame);
    }

    /// Pop the top frame
    ///
    /// Popping an empty stack is a no-op and returns `None`.
    pub fn pop(&mut self) -> Option<Style> {
        let frame = self.frames.pop();
        match &frame {
            Some(_) => tracing::debug!(depth = self.frames.len(), "pop style frame"),
            None => tracing::warn!("unbalanced style pop on an empty stack"),
        }
        frame
    }

    /// The effective default style: the top frame, or empty
    pub fn effective(&self) -> Style {
        self.frames.last().cloned().unwrap_or_default()
    }

    /// Number of open frames
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Resolve the final style for one element
    ///
    /// Without an explicit style the primitive's fallback is used beneath
    /// the effective style, except for text whose `fill:black` fallback
    /// sits on top of it. An explicit style replaces the fallback and is
    /// merged over the effective style.
    pub fn resolve(&self, kind: PrimitiveKind, explicit: Option<&Style>) -> Style {
        match (kind, explicit) {
            (_, Some(style)) => self.effective().merge(&normalize(style)),
            (PrimitiveKind::Text, None) => self.effective().merge(&kind.default_style()),
            (_, None) => kind.default_style().merge(&self.effective()),
        }
    }
}
