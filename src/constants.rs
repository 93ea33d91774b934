//! Crate-wide defaults mirroring common animate.css-style conventions.
//! Keeping them in a single place makes it easier to tweak library-wide
//! defaults.

/// Animation name used when becoming visible and none is configured.
pub const DEFAULT_ANIMATION_IN: &str = "fadeIn";

/// Animation name used when becoming hidden and none is configured.
pub const DEFAULT_ANIMATION_OUT: &str = "fadeOut";

/// Default animation delay in milliseconds.
pub const DEFAULT_DELAY_MS: u32 = 0;

/// Default animation duration in milliseconds.
pub const DEFAULT_DURATION_MS: u32 = 300;

/// Default CSS easing keyword.
pub const DEFAULT_EASING: &str = "ease";

/// Base class token carried by every rendered container.
pub const BASE_CLASS: &str = "animated";
