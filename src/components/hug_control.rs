//! Hug Meter Section
//!
//! A 1 to 10 slider and a heart that beats harder as it goes up. Moving the
//! slider hides the message; it reappears once the slider has been left
//! alone for the reveal delay.

use dioxus::prelude::*;
use valentine_core::HugStrength;
use valentine_ui::HeartIcon;

use crate::context::{use_greeting, use_page_config};

#[component]
pub fn HugControl() -> Element {
    let mut greeting = use_greeting();
    let config = use_page_config();
    let delay = config.hug_reveal_delay();
    let policy = config.reveal_policy;
    let (min, max) = (HugStrength::MIN, HugStrength::MAX);

    let (strength, message_visible) = {
        let state = greeting.read();
        (state.hug.strength(), state.hug.message_visible())
    };

    let on_input = move |event: FormEvent| match event.value().parse::<HugStrength>() {
        Ok(strength) => {
            let ticket = greeting.write().hug.set_strength(strength);
            spawn(async move {
                tokio::time::sleep(delay).await;
                greeting.write().hug.reveal(ticket, policy);
            });
        }
        Err(e) => tracing::warn!("Ignoring hug slider value: {}", e),
    };

    rsx! {
        section { class: "snap-section hug-section",
            div { class: "hug-panel",
                h2 { class: "hug-title", "Tell Me How Tight You Want Your Hug!" }

                div { class: "hug-control",
                    input {
                        class: "hug-slider",
                        r#type: "range",
                        min: "{min}",
                        max: "{max}",
                        value: "{strength}",
                        "aria-label": "Hug strength",
                        oninput: on_input,
                    }
                    div { class: "hug-heart", style: "{heart_scale(strength)}",
                        HeartIcon {
                            size: 64,
                            fill: heart_fill(strength),
                            stroke: "#ffffff".to_string(),
                        }
                    }
                }

                if message_visible {
                    div { class: "hug-message font-handwriting appear",
                        "Jaldi se aa jao, khud ke!"
                    }
                }
            }
        }
    }
}

fn heart_scale(strength: HugStrength) -> String {
    format!("--hug-scale: {};", strength.scale())
}

fn heart_fill(strength: HugStrength) -> String {
    format!("rgba(236, 72, 153, {})", strength.fill_opacity())
}
