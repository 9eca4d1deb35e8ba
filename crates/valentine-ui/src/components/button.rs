//! Button Components
//!
//! Pill buttons for the proposal panel:
//! - Valentine: filled pink, grows on hover
//! - Ghost: outlined, for secondary actions

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled pink pill with a soft shadow
    #[default]
    Valentine,
    /// Transparent with a white outline
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Valentine => "btn-valentine",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled pill button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         onclick: move |_| accept(),
///         "Yes, of course!"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", variant.class(), extra),
        _ => variant.class().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Valentine.class(), "btn-valentine");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Valentine);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(button_class(ButtonVariant::Valentine, None), "btn-valentine");
        assert_eq!(button_class(ButtonVariant::Ghost, Some("")), "btn-ghost");
        assert_eq!(
            button_class(ButtonVariant::Valentine, Some("wide")),
            "btn-valentine wide"
        );
    }
}
