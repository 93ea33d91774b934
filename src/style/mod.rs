//! Class registry, class-list joining, and inline style composition.

pub mod classes;
pub mod inline;
pub mod registry;

pub use classes::class_names;
pub use inline::InlineStyle;
pub use registry::ClassRegistry;
