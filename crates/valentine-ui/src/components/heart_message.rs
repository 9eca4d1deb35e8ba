//! Heart Message Overlay
//!
//! A big pink heart fixed at the center of the viewport with a title and a
//! line of text written inside it. Pops in when mounted.

use dioxus::prelude::*;

use super::HeartIcon;

/// Overlay sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HeartSize {
    /// Nickname reveal
    #[default]
    Regular,
    /// Moon reveal, room for a longer message
    Large,
}

impl HeartSize {
    pub fn pixels(&self) -> u32 {
        match self {
            HeartSize::Regular => 192,
            HeartSize::Large => 256,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            HeartSize::Regular => "heart-message",
            HeartSize::Large => "heart-message large",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct HeartMessageProps {
    pub title: String,
    pub body: String,
    #[props(default)]
    pub size: HeartSize,
}

#[component]
pub fn HeartMessage(props: HeartMessageProps) -> Element {
    rsx! {
        div {
            class: "{props.size.class()} pop-in",
            role: "status",
            "aria-live": "polite",

            div { class: "heart-message-inner",
                HeartIcon {
                    size: props.size.pixels(),
                    fill: "#ec4899".to_string(),
                    stroke: "#ec4899".to_string(),
                }
                div { class: "heart-message-text",
                    h3 { class: "heart-message-title", "{props.title}" }
                    p { class: "heart-message-body", "{props.body}" }
                }
            }
        }
    }
}
