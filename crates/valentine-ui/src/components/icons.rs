//! Lucide icons as inline SVG.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    /// Rendered width and height in pixels
    #[props(default = 32)]
    pub size: u32,
    /// SVG fill; Lucide icons are outline-only by default
    #[props(default = "none".to_string())]
    pub fill: String,
    /// Stroke color
    #[props(default = "currentColor".to_string())]
    pub stroke: String,
    #[props(default)]
    pub class: Option<String>,
}

/// Lucide heart
#[component]
pub fn HeartIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            class: props.class.clone().unwrap_or_default(),
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "{props.fill}",
            stroke: "{props.stroke}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        }
    }
}

/// Lucide star
#[component]
pub fn StarIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            class: props.class.clone().unwrap_or_default(),
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "{props.fill}",
            stroke: "{props.stroke}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            polygon { points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" }
        }
    }
}

/// Lucide moon
#[component]
pub fn MoonIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            class: props.class.clone().unwrap_or_default(),
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "{props.fill}",
            stroke: "{props.stroke}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        }
    }
}
