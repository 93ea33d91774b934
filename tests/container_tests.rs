use fadelet::{
    AnimatedContainer, AnimatedProps, AnimationSettings, ClassRegistry, InlineStyle, TimeParam,
};

/// Integration tests for real show/hide scenarios
/// These tests drive the container the way a host rendering loop would
#[cfg(test)]
mod scenario_tests {
    use super::*;

    /// Helper to initialize logging once for test output
    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Helper to build props for a hidden container with no mount animation
    fn hidden_props() -> AnimatedProps<&'static str> {
        AnimatedProps::new().with_visibility(false)
    }

    /// Test the static first render: hidden, no mount animation
    #[test]
    fn test_hidden_mount_renders_opacity_fallback() {
        init_logging();
        println!("🧪 [TEST] Testing hidden mount fallback");

        let container = AnimatedContainer::new(hidden_props());
        let rendered = container.render();

        assert_eq!(rendered.style.get("opacity"), Some("0"));
        assert_eq!(rendered.style.get("pointer-events"), Some("none"));
        assert!(!rendered.style.contains("animation-duration"));
        assert!(!rendered.style.contains("animation-delay"));
        assert_eq!(rendered.class_name, "animated");
        println!("✅ [TEST] Hidden mount fallback test passed");
    }

    /// Test a full reveal: flip hidden -> visible with custom timing
    #[test]
    fn test_reveal_end_to_end() {
        init_logging();
        println!("🧪 [TEST] Testing end-to-end reveal");

        let mut container = AnimatedContainer::new(hidden_props());
        container.update(
            AnimatedProps::new()
                .with_visibility(true)
                .with_animation_in("fadeIn")
                .with_duration(500u32)
                .with_delay(TimeParam::per_direction(Some(100), Some(50)))
                .with_easing("linear"),
        );

        let descriptor = container.descriptor().expect("flip resolves a descriptor");
        assert_eq!(descriptor.name, "fadeIn");
        assert_eq!(descriptor.delay_ms, 100);
        assert_eq!(descriptor.duration_ms, 500);
        assert_eq!(descriptor.easing, "linear");

        let rendered = container.render();
        assert_eq!(rendered.style.get("animation-delay"), Some("100ms"));
        assert_eq!(rendered.style.get("animation-duration"), Some("500ms"));
        assert_eq!(rendered.style.get("animation-timing-function"), Some("linear"));
        assert_eq!(rendered.style.get("pointer-events"), Some("all"));
        // the keyframes own the opacity once an animation is resolved
        assert!(!rendered.style.contains("opacity"));
        assert!(rendered.has_class("animated"));
        assert!(rendered.has_class("fadeIn"));
        println!("✅ [TEST] End-to-end reveal test passed");
    }

    /// Test that a repeated update with the same visibility is a no-op
    #[test]
    fn test_update_idempotence() {
        init_logging();
        println!("🧪 [TEST] Testing update idempotence");

        let mut container = AnimatedContainer::new(hidden_props());
        container.set_visible(true);
        let resolved = container.descriptor().cloned();

        // same flag, new animation props: stored state must not move
        container.update(
            AnimatedProps::new()
                .with_visibility(true)
                .with_animation_in("bounceIn")
                .with_duration(50u32),
        );
        assert_eq!(container.descriptor().cloned(), resolved);

        // the next real flip picks up the new configuration
        container.set_visible(false);
        assert_eq!(container.descriptor().unwrap().name, "fadeOut");
        println!("✅ [TEST] Update idempotence test passed");
    }

    /// Test the descriptor round-trip across both directions
    #[test]
    fn test_direction_round_trip() {
        init_logging();
        println!("🧪 [TEST] Testing direction round trip");

        let mut container = AnimatedContainer::new(
            AnimatedProps::<&str>::new()
                .with_visibility(false)
                .with_animation_in("slideInLeft")
                .with_animation_out("slideOutRight"),
        );

        container.set_visible(true);
        assert_eq!(container.descriptor().unwrap().name, "slideInLeft");

        container.set_visible(false);
        assert_eq!(container.descriptor().unwrap().name, "slideOutRight");
        println!("✅ [TEST] Direction round trip test passed");
    }

    /// Test zero-delay overrides and default fallbacks through a flip
    #[test]
    fn test_per_direction_timing_rules() {
        init_logging();
        println!("🧪 [TEST] Testing per-direction timing rules");

        let mut container = AnimatedContainer::new(
            AnimatedProps::<&str>::new()
                .with_visibility(false)
                .with_delay(TimeParam::per_direction(Some(0), Some(500)))
                .with_duration(TimeParam::per_direction(Some(500), None)),
        );

        // entering: delay 0 is honored, duration comes from the in side
        container.set_visible(true);
        let entering = container.descriptor().unwrap();
        assert_eq!(entering.delay_ms, 0);
        assert_eq!(entering.duration_ms, 500);

        // exiting: delay from the out side, duration falls back to 300
        container.set_visible(false);
        let exiting = container.descriptor().unwrap();
        assert_eq!(exiting.delay_ms, 500);
        assert_eq!(exiting.duration_ms, 300);
        println!("✅ [TEST] Per-direction timing rules test passed");
    }

    /// Test that caller styles merge last and caller data stays untouched
    #[test]
    fn test_caller_style_precedence_without_mutation() {
        init_logging();
        println!("🧪 [TEST] Testing caller style precedence");

        let caller_style = InlineStyle::new().with("opacity", "0.5").with("color", "red");
        let container = AnimatedContainer::new(
            AnimatedProps::<&str>::new()
                .with_visibility(false)
                .with_style(caller_style.clone()),
        );

        let rendered = container.render();
        // caller opacity wins over the computed fallback of 0
        assert_eq!(rendered.style.get("opacity"), Some("0.5"));
        assert_eq!(rendered.style.get("color"), Some("red"));
        assert_eq!(rendered.style.get("pointer-events"), Some("none"));

        // the caller's map is untouched by rendering
        assert_eq!(container.props().style, caller_style);
        println!("✅ [TEST] Caller style precedence test passed");
    }

    /// Test custom registry layering and unknown-name degradation
    #[test]
    fn test_custom_registry_and_unknown_names() {
        init_logging();
        println!("🧪 [TEST] Testing custom registry layering");

        let custom = ClassRegistry::new()
            .with_class("fadeIn", "fadeIn_h4sh")
            .with_class("teleport", "teleport_x1");

        let mut container = AnimatedContainer::new(
            AnimatedProps::<&str>::new()
                .with_visibility(false)
                .with_animations(custom)
                .with_animation_in("teleport")
                .with_animation_out("warpOut"),
        );

        // custom entry shadows nothing here but resolves a class
        container.set_visible(true);
        assert!(container.render().has_class("teleport_x1"));

        // unknown name degrades to no animation class, render still works
        container.set_visible(false);
        let rendered = container.render();
        assert_eq!(rendered.class_name, "animated");
        assert!(!rendered.style.contains("opacity"));
        println!("✅ [TEST] Custom registry layering test passed");
    }

    /// Test class composition with a caller class name
    #[test]
    fn test_class_composition_order() {
        init_logging();
        println!("🧪 [TEST] Testing class composition");

        let mut container = AnimatedContainer::new(
            AnimatedProps::<&str>::new()
                .with_class_name("menu")
                .with_visibility(false),
        );
        container.set_visible(true);

        assert_eq!(container.render().class_name, "menu animated fadeIn");
        println!("✅ [TEST] Class composition test passed");
    }

    /// Test driving the container from JSON-loaded settings
    #[test]
    fn test_settings_loaded_from_json() {
        init_logging();
        println!("🧪 [TEST] Testing JSON-loaded settings");

        let settings = AnimationSettings::from_json(
            r#"{
                "animation_in": "zoomIn",
                "animation_out": "zoomOut",
                "duration": {"in": 400},
                "easing": {"in": "", "out": "ease-in"},
                "animate_on_mount": true
            }"#,
        )
        .unwrap();

        let container =
            AnimatedContainer::new(AnimatedProps::<&str>::new().with_settings(settings));
        let descriptor = container.descriptor().expect("animate_on_mount resolves");

        assert_eq!(descriptor.name, "zoomIn");
        assert_eq!(descriptor.duration_ms, 400);
        // empty in-side easing falls back to the default
        assert_eq!(descriptor.easing, "ease");
        println!("✅ [TEST] JSON-loaded settings test passed");
    }

    /// Test the rendered style's CSS text form for host frameworks that
    /// take a style string
    #[test]
    fn test_style_css_text() {
        init_logging();
        println!("🧪 [TEST] Testing CSS text rendering");

        let container = AnimatedContainer::new(hidden_props());
        let css = container.render().style.to_string();
        assert_eq!(css, "opacity: 0; pointer-events: none");
        println!("✅ [TEST] CSS text rendering test passed");
    }
}
