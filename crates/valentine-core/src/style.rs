//! Scoped global stylesheet.
//!
//! The page swaps the pointer for a pink heart while it is mounted. The
//! stylesheet is a resource: injected once when the page mounts and removed
//! exactly once when it unmounts, through [`ScopedStyle`].

/// Somewhere a stylesheet can be attached to and detached from.
pub trait StyleHost {
    /// Attach `css` under `id`, replacing any stylesheet with the same id.
    fn inject(&mut self, id: &str, css: &str);
    /// Detach the stylesheet registered under `id`.
    fn remove(&mut self, id: &str);
}

pub const HEART_CURSOR_STYLE_ID: &str = "valentine-heart-cursor";

pub const HEART_CURSOR_CSS: &str = r#"
* {
  cursor: url("data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24' viewBox='0 0 24 24' fill='%23ff69b4'><path d='M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z'/></svg>") 12 12, auto !important;
}
"#;

/// A stylesheet held for the lifetime of this value.
///
/// Removed on [`release`](Self::release) or on drop, whichever comes first.
pub struct ScopedStyle<H: StyleHost> {
    host: H,
    id: &'static str,
    active: bool,
}

impl<H: StyleHost> ScopedStyle<H> {
    pub fn acquire(mut host: H, id: &'static str, css: &str) -> Self {
        host.inject(id, css);
        tracing::debug!(id, "scoped style injected");
        Self {
            host,
            id,
            active: true,
        }
    }

    pub fn release(mut self) {
        self.detach();
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    fn detach(&mut self) {
        if std::mem::take(&mut self.active) {
            self.host.remove(self.id);
            tracing::debug!(id = self.id, "scoped style removed");
        }
    }
}

impl<H: StyleHost> Drop for ScopedStyle<H> {
    fn drop(&mut self) {
        self.detach();
    }
}
