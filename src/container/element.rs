//! Host-facing render output.

use crate::container::props::{ClickHandler, RefCallback};
use crate::style::inline::InlineStyle;

/// The rendered container: a single element for the host to mount.
///
/// Borrowed from the container that produced it; the host reads the class
/// list and style map, mounts the children, and wires the forwarded
/// callbacks.
pub struct Element<'a, C> {
    /// Space-joined class list
    pub class_name: String,
    /// Computed inline styles, caller overrides already merged
    pub style: InlineStyle,
    /// Forwarded content
    pub children: Option<&'a C>,
    /// Forwarded click handler
    pub on_click: Option<&'a ClickHandler>,
    /// Forwarded element-reference callback
    pub inner_ref: Option<&'a RefCallback>,
}

impl<C> Element<'_, C> {
    /// Whether the class list contains `token` as a whole class.
    pub fn has_class(&self, token: &str) -> bool {
        self.class_name.split_whitespace().any(|class| class == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(class_name: &str) -> Element<'static, ()> {
        Element {
            class_name: class_name.to_string(),
            style: InlineStyle::new(),
            children: None,
            on_click: None,
            inner_ref: None,
        }
    }

    #[test]
    fn test_has_class_matches_whole_tokens() {
        let rendered = element("menu animated fadeIn");
        assert!(rendered.has_class("fadeIn"));
        assert!(rendered.has_class("animated"));
        assert!(!rendered.has_class("fade"));
    }
}
