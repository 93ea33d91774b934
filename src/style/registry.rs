//! Animation-name to CSS-class registry.
//!
//! The registry is a layered mapping: the bundled animate.css name table at
//! the bottom, the bundled extra animations above it, and any caller-supplied
//! custom mapping on top. Later layers shadow earlier ones. The bundled
//! layers map each name to itself, matching the plain (non-hashed) class
//! names the stylesheet ships; hosts using hashed class names (CSS modules)
//! shadow them through the custom layer.

use crate::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Animation names defined by the bundled animate.css 3.x stylesheet.
const ANIMATE_CSS_NAMES: &[&str] = &[
    "bounce",
    "flash",
    "pulse",
    "rubberBand",
    "shake",
    "headShake",
    "swing",
    "tada",
    "wobble",
    "jello",
    "heartBeat",
    "bounceIn",
    "bounceInDown",
    "bounceInLeft",
    "bounceInRight",
    "bounceInUp",
    "bounceOut",
    "bounceOutDown",
    "bounceOutLeft",
    "bounceOutRight",
    "bounceOutUp",
    "fadeIn",
    "fadeInDown",
    "fadeInDownBig",
    "fadeInLeft",
    "fadeInLeftBig",
    "fadeInRight",
    "fadeInRightBig",
    "fadeInUp",
    "fadeInUpBig",
    "fadeOut",
    "fadeOutDown",
    "fadeOutDownBig",
    "fadeOutLeft",
    "fadeOutLeftBig",
    "fadeOutRight",
    "fadeOutRightBig",
    "fadeOutUp",
    "fadeOutUpBig",
    "flip",
    "flipInX",
    "flipInY",
    "flipOutX",
    "flipOutY",
    "lightSpeedIn",
    "lightSpeedOut",
    "rotateIn",
    "rotateInDownLeft",
    "rotateInDownRight",
    "rotateInUpLeft",
    "rotateInUpRight",
    "rotateOut",
    "rotateOutDownLeft",
    "rotateOutDownRight",
    "rotateOutUpLeft",
    "rotateOutUpRight",
    "hinge",
    "jackInTheBox",
    "rollIn",
    "rollOut",
    "zoomIn",
    "zoomInDown",
    "zoomInLeft",
    "zoomInRight",
    "zoomInUp",
    "zoomOut",
    "zoomOutDown",
    "zoomOutLeft",
    "zoomOutRight",
    "zoomOutUp",
    "slideInDown",
    "slideInLeft",
    "slideInRight",
    "slideInUp",
    "slideOutDown",
    "slideOutLeft",
    "slideOutRight",
    "slideOutUp",
];

/// Extra animations shipped alongside the animate.css table.
const EXTRA_ANIMATION_NAMES: &[&str] = &["popIn", "popOut"];

static BUNDLED: Lazy<ClassRegistry> = Lazy::new(|| {
    let mut registry = ClassRegistry::new();
    for name in ANIMATE_CSS_NAMES.iter().chain(EXTRA_ANIMATION_NAMES) {
        registry.insert(name, name);
    }
    registry
});

/// A mapping from animation names to the CSS classes that run them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassRegistry {
    classes: BTreeMap<String, String>,
}

impl ClassRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            classes: BTreeMap::new(),
        }
    }

    /// The bundled registry: the animate.css table plus the extra
    /// animations, extras taking precedence.
    pub fn bundled() -> Self {
        BUNDLED.clone()
    }

    /// Merge registries low-to-high precedence into a new registry.
    pub fn layered(layers: &[&ClassRegistry]) -> Self {
        let mut merged = ClassRegistry::new();
        for layer in layers {
            merged.overlay(layer);
        }
        merged
    }

    /// Parse a registry from a JSON object of name→class pairs.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add or replace a single mapping.
    pub fn insert(&mut self, name: &str, class: &str) {
        self.classes.insert(name.to_string(), class.to_string());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_class(mut self, name: &str, class: &str) -> Self {
        self.insert(name, class);
        self
    }

    /// Copy every mapping of `other` over this registry, replacing
    /// existing entries.
    pub fn overlay(&mut self, other: &ClassRegistry) {
        for (name, class) in &other.classes {
            self.classes.insert(name.clone(), class.clone());
        }
    }

    /// Look up the CSS class for an animation name.
    ///
    /// Unrecognized names yield `None`; callers render no animation class
    /// for them.
    pub fn class_for(&self, name: &str) -> Option<&str> {
        self.classes.get(name).map(String::as_str)
    }

    /// Number of mappings in the registry.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the registry holds no mappings.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
