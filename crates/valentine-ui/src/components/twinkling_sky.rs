//! Twinkling Sky Background
//!
//! Tiny white dots that pulse forever behind the nickname stars. Placement
//! comes from `valentine_core::twinkles`; each dot gets its own cycle length
//! and start delay so they never pulse in unison.

use dioxus::prelude::*;
use valentine_core::Twinkle;

#[component]
pub fn TwinklingSky(twinkles: Vec<Twinkle>) -> Element {
    rsx! {
        div { class: "twinkling-sky", "aria-hidden": "true",
            for (index, star) in twinkles.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "twinkle",
                    style: "{twinkle_style(star)}",
                }
            }
        }
    }
}

/// Inline style positioning one dot and timing its pulse.
pub fn twinkle_style(star: &Twinkle) -> String {
    format!(
        "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
        star.left, star.top, star.duration_s, star.delay_s
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn style_carries_position_and_timing() {
        let star = Twinkle {
            left: 12.5,
            top: 80.0,
            duration_s: 1.25,
            delay_s: 0.5,
        };
        assert_eq!(
            twinkle_style(&star),
            "left: 12.50%; top: 80.00%; animation-duration: 1.25s; animation-delay: 0.50s;"
        );
    }

    #[test]
    fn generated_twinkles_render_as_percentages() {
        let stars = valentine_core::twinkles(3, &mut StdRng::seed_from_u64(9));
        for star in &stars {
            let style = twinkle_style(star);
            assert!(style.starts_with("left: "));
            assert!(style.contains("%; top: "));
        }
    }
}
