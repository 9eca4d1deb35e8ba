//! Log setup for the greeting binary.
//!
//! Console output through `tracing_subscriber::fmt`, filtered by `RUST_LOG`
//! when it is set and by `default_directive` otherwise.
//!
//! ```bash
//! # Watch hover and hug events
//! RUST_LOG=valentine_core=debug valentine-desktop
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_refused() {
        // The first call may already have happened in another test.
        let _ = init("warn");
        assert!(!init("debug"));
    }
}
