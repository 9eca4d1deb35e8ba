//! Love Letter Section
//!
//! The letter types itself out once, character by character, when the page
//! mounts. After the last character it is shown in full and gently pulses;
//! later renders never start the typist again.

use dioxus::prelude::*;
use valentine_core::{type_out, Typewriter, LOVE_LETTER};

use crate::context::{use_greeting, use_page_config};
use crate::theme::assets::LETTER_BACKGROUND;

#[component]
pub fn LoveLetter() -> Element {
    let mut greeting = use_greeting();
    let cadence = use_page_config().typing_delay();
    let mut shown = use_signal(String::new);

    use_future(move || async move {
        if greeting.peek().letter.is_typed() {
            return;
        }
        type_out(Typewriter::new(LOVE_LETTER), cadence, |typed| {
            shown.set(typed.to_string());
        })
        .await;
        greeting.write().letter.finish();
    });

    let typed = greeting.read().letter.is_typed();

    rsx! {
        section { class: "snap-section letter-section",
            div {
                class: "backdrop",
                style: "background-image: url('{LETTER_BACKGROUND}');",
            }

            div { class: "letter-paper font-handwriting",
                if typed {
                    div { class: "letter-typed", "{LOVE_LETTER}" }
                } else {
                    div { class: "letter-typing", "{shown}" }
                }
            }
        }
    }
}
