//! Inline style maps with last-wins merging.

use crate::{FadeletError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// CSS property carrying the animation start delay.
pub const ANIMATION_DELAY: &str = "animation-delay";

/// CSS property carrying the animation duration.
pub const ANIMATION_DURATION: &str = "animation-duration";

/// CSS property carrying the easing curve.
pub const ANIMATION_TIMING_FUNCTION: &str = "animation-timing-function";

/// CSS property toggling whether the element receives pointer input.
pub const POINTER_EVENTS: &str = "pointer-events";

/// CSS property for element opacity.
pub const OPACITY: &str = "opacity";

/// An inline style mapping of CSS property names to values.
///
/// Merging is last-wins: properties from a later merge replace earlier
/// ones. The container composes its computed styles into a fresh map and
/// merges caller-supplied overrides on top, so caller-owned maps are never
/// mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InlineStyle {
    properties: BTreeMap<String, String>,
}

impl InlineStyle {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self {
            properties: BTreeMap::new(),
        }
    }

    /// Parse a style map from CSS declaration text, e.g.
    /// `"opacity: 0; pointer-events: none"`.
    pub fn from_css_text(text: &str) -> Result<Self> {
        let mut style = InlineStyle::new();
        for declaration in text.split(';') {
            let declaration = declaration.trim();
            if declaration.is_empty() {
                continue;
            }
            let (property, value) = declaration.split_once(':').ok_or_else(|| {
                FadeletError::StyleParse(format!("declaration without ':': {declaration:?}"))
            })?;
            style.set(property.trim(), value.trim());
        }
        Ok(style)
    }

    /// Set one property, replacing any existing value.
    pub fn set(&mut self, property: &str, value: &str) {
        self.properties.insert(property.to_string(), value.to_string());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, property: &str, value: &str) -> Self {
        self.set(property, value);
        self
    }

    /// Look up a property value.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    /// Whether the map holds a value for `property`.
    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Merge `other` over this map; `other`'s properties win.
    pub fn merge(&mut self, other: &InlineStyle) {
        for (property, value) in &other.properties {
            self.properties.insert(property.clone(), value.clone());
        }
    }

    /// Iterate the properties in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    /// Number of properties in the map.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the map holds no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl fmt::Display for InlineStyle {
    /// Render as CSS declaration text in property-name order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (property, value) in &self.properties {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{property}: {value}")?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for InlineStyle {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut style = InlineStyle::new();
        for (property, value) in iter {
            style.set(property, value);
        }
        style
    }
}
