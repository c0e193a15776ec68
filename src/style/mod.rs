//! Style model: values, ordered style mappings and attribute normalization
//!
//! A [`Style`] is a small insertion-ordered mapping from SVG presentation
//! attribute names to scalar values. Callers may spell keys with either
//! `_` or `-` as the word separator (`stroke_width` / `stroke-width`);
//! [`normalize`] folds them into the hyphenated SVG spelling before any
//! merge or emission, so both spellings name the same attribute.

mod defaults;
mod stack;

pub use defaults::PrimitiveKind;
pub use stack::StyleStack;

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

/// A scalar style value
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<i64> for StyleValue {
    fn from(n: i64) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Number(n as f64)
    }
}

/// An insertion-ordered mapping from attribute name to value
///
/// Inserting a key that is already present replaces its value but keeps
/// its original position, so serialized output stays stable across merges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    entries: Vec<(String, StyleValue)>,
}

impl Style {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace an entry, returning the previous value
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove an entry, returning its value
    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge `over` on top of this style; keys of `over` win on collision
    pub fn merge(&self, over: &Style) -> Style {
        let mut merged = self.clone();
        for (key, value) in &over.entries {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}

/// Serializes as the body of an inline `style` attribute: `k1:v1;k2:v2;`
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            write!(f, "{}:{};", key, value)?;
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for Style
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (key, value) in iter {
            style.insert(key, value);
        }
        style
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Style
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Deserializes from a map in document order, normalizing keys on the way in
impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StyleVisitor;

        impl<'de> Visitor<'de> for StyleVisitor {
            type Value = Style;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of style attributes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Style, A::Error> {
                let mut style = Style::new();
                while let Some((key, value)) = map.next_entry::<String, StyleValue>()? {
                    style.insert(normalize_key(&key), value);
                }
                Ok(style)
            }
        }

        deserializer.deserialize_map(StyleVisitor)
    }
}

/// Convert a caller-facing attribute name to its hyphenated SVG spelling
pub fn normalize_key(key: &str) -> String {
    key.replace('_', "-")
}

/// Return a copy of `style` with every key normalized
///
/// If two spellings of the same attribute are present, the later one wins.
pub fn normalize(style: &Style) -> Style {
    style
        .iter()
        .map(|(key, value)| (normalize_key(key), value.clone()))
        .collect()
}
