//! Star Map Section
//!
//! "Nicknames Dictionary": five stars, each hiding a nickname, and a moon
//! hiding the special one. Hovering shows the message inside a heart;
//! leaving hides it again. Star and moon overlays are independent, so
//! sweeping from one to the other can briefly show both.

use dioxus::prelude::*;
use valentine_core::{twinkles, Nickname, NICKNAMES, SPECIAL_NICKNAME};
use valentine_ui::{HeartMessage, HeartSize, MoonIcon, StarIcon, TwinklingSky};

use crate::context::{use_greeting, use_page_config};
use crate::theme::colors::{MOON_FILL, STAR_FILL};

/// Seconds between neighbouring stars' pulses.
const STAR_PULSE_STAGGER_S: f32 = 0.2;

#[component]
pub fn StarMap() -> Element {
    let mut greeting = use_greeting();
    let config = use_page_config();
    let background = use_hook(|| twinkles(config.twinkle_count, &mut rand::rng()));

    let sky = greeting.read().sky;

    rsx! {
        section { class: "snap-section star-map",
            div { class: "star-map-header",
                h2 { class: "star-map-title font-handwriting", "Nicknames Dictionary" }
                p { class: "star-map-hint",
                    "Hover over the stars to discover your special nicknames ✨"
                }
            }

            TwinklingSky { twinkles: background.clone() }

            for (index, nickname) in NICKNAMES.iter().enumerate() {
                div {
                    key: "{nickname.name}",
                    class: "nickname-star",
                    style: "{star_position(nickname)}",
                    onmouseenter: move |_| {
                        if let Err(e) = greeting.write().sky.enter_star(index) {
                            tracing::warn!("Ignoring hover: {}", e);
                        }
                    },
                    onmouseleave: move |_| greeting.write().sky.leave_star(),

                    div { class: "pulse", style: "{star_delay(index)}",
                        StarIcon { size: 32, fill: STAR_FILL.to_string() }
                    }
                }
            }

            div {
                class: "moon",
                onmouseenter: move |_| greeting.write().sky.enter_moon(),
                onmouseleave: move |_| greeting.write().sky.leave_moon(),
                MoonIcon { size: 64, fill: MOON_FILL.to_string() }
            }

            if let Some(nickname) = sky.selected_star() {
                HeartMessage {
                    title: nickname.name.to_string(),
                    body: nickname.reason.to_string(),
                }
            }

            if sky.moon_message_visible() {
                HeartMessage {
                    title: SPECIAL_NICKNAME.name.to_string(),
                    body: SPECIAL_NICKNAME.message.to_string(),
                    size: HeartSize::Large,
                }
            }
        }
    }
}

fn star_position(nickname: &Nickname) -> String {
    format!("left: {}%; top: {}%;", nickname.position.x, nickname.position.y)
}

fn star_delay(index: usize) -> String {
    format!("--star-delay: {:.1}s;", index as f32 * STAR_PULSE_STAGGER_S)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_sit_at_their_percentages() {
        assert_eq!(star_position(&NICKNAMES[0]), "left: 20%; top: 30%;");
        assert_eq!(star_position(&NICKNAMES[4]), "left: 70%; top: 70%;");
    }

    #[test]
    fn pulses_are_staggered() {
        assert_eq!(star_delay(0), "--star-delay: 0.0s;");
        assert_eq!(star_delay(3), "--star-delay: 0.6s;");
    }
}
