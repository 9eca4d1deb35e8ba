//! Forever Section
//!
//! Closing card: the special nickname written out for good, so it can be
//! read without finding the moon.

use dioxus::prelude::*;
use valentine_core::SPECIAL_NICKNAME;
use valentine_ui::HeartIcon;

use crate::theme::colors::PINK;

#[component]
pub fn Forever() -> Element {
    rsx! {
        section { class: "snap-section forever-section",
            div { class: "pulse",
                HeartIcon { size: 96, fill: PINK.to_string(), stroke: PINK.to_string() }
            }
            h2 { class: "forever-title font-handwriting glow", "{SPECIAL_NICKNAME.name}" }
            p { class: "forever-message", "{SPECIAL_NICKNAME.message}" }
        }
    }
}
