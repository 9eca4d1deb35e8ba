//! Stylesheet host backed by the webview document.

use dioxus::prelude::*;
use valentine_core::StyleHost;

/// Adds and removes `<style>` elements in the webview's `<head>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomStyleHost;

impl StyleHost for DomStyleHost {
    fn inject(&mut self, id: &str, css: &str) {
        let _ = document::eval(&inject_script(id, css));
    }

    fn remove(&mut self, id: &str) {
        let _ = document::eval(&remove_script(id));
    }
}

/// Script that (re)places the stylesheet, so at most one per id exists.
fn inject_script(id: &str, css: &str) -> String {
    let id = js_string(id);
    let css = js_string(css);
    format!(
        "{{document.getElementById({id})?.remove();\
         const el = document.createElement('style');\
         el.id = {id};\
         el.textContent = {css};\
         document.head.appendChild(el);}}"
    )
}

fn remove_script(id: &str) -> String {
    format!("document.getElementById({})?.remove();", js_string(id))
}

/// Quote text as a JavaScript string literal.
fn js_string(text: &str) -> String {
    // A JSON string is a valid JS string literal.
    serde_json::Value::from(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use valentine_core::{HEART_CURSOR_CSS, HEART_CURSOR_STYLE_ID};

    #[test]
    fn css_is_escaped_into_the_script() {
        let script = inject_script(HEART_CURSOR_STYLE_ID, HEART_CURSOR_CSS);
        assert!(script.contains(r#"el.id = "valentine-heart-cursor""#));
        assert!(script.contains(r#"url(\"data:image/svg+xml"#));
        assert!(!script.contains('\n'), "newlines in css must be escaped");
    }

    #[test]
    fn removal_targets_the_same_id() {
        assert_eq!(
            remove_script("a\"b"),
            r#"document.getElementById("a\"b")?.remove();"#
        );
    }
}
