//! Toggle a container and print what the host would render.
//!
//! Run with: cargo run --example toggle

use fadelet::{AnimatedContainer, AnimatedProps, TimeParam};

fn print_render(label: &str, container: &AnimatedContainer<&str>) {
    let rendered = container.render();
    println!("{label}:");
    println!("  class: {:?}", rendered.class_name);
    println!("  style: {:?}", rendered.style.to_string());
    println!("  children: {:?}", rendered.children);
}

fn main() {
    env_logger::init();

    let mut container = AnimatedContainer::new(
        AnimatedProps::new()
            .with_class_name("menu")
            .with_visibility(false)
            .with_animation_in("slideInLeft")
            .with_animation_out("slideOutRight")
            .with_duration(400u32)
            .with_delay(TimeParam::per_direction(Some(100), Some(0)))
            .with_easing("ease-out")
            .with_children("menu items go here")
            .on_click(|| println!("  (click forwarded)")),
    );

    print_render("mounted hidden", &container);

    container.set_visible(true);
    print_render("after reveal", &container);

    container.set_visible(false);
    print_render("after dismiss", &container);
}
