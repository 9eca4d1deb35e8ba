#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use valentine_core::{PageConfig, RevealPolicy};

/// Global page config, set from command line
static PAGE_CONFIG: OnceLock<PageConfig> = OnceLock::new();

/// Get the page config (set from command line or default)
pub fn get_page_config() -> PageConfig {
    PAGE_CONFIG.get().cloned().unwrap_or_default()
}

/// Valentine's Day greeting
#[derive(Parser, Debug)]
#[command(name = "valentine-desktop")]
#[command(about = "An animated Valentine's Day greeting")]
struct Args {
    /// JSON file with page settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Milliseconds between letter characters
    #[arg(long)]
    typing_delay_ms: Option<u64>,

    /// Milliseconds before the hug message shows
    #[arg(long)]
    hug_delay_ms: Option<u64>,

    /// Which hug reveals may fire after a newer change: latest or every
    #[arg(long)]
    reveal_policy: Option<RevealPolicy>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

impl Args {
    fn page_config(&self) -> anyhow::Result<PageConfig> {
        let mut config = match &self.config {
            Some(path) => PageConfig::from_json_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => PageConfig::default(),
        };
        if let Some(ms) = self.typing_delay_ms {
            config.typing_delay_ms = ms;
        }
        if let Some(ms) = self.hug_delay_ms {
            config.hug_reveal_delay_ms = ms;
        }
        if let Some(policy) = self.reveal_policy {
            config.reveal_policy = policy;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    valentine_core::logging::init("info");

    let args = Args::parse();
    let config = args.page_config()?;

    tracing::info!(
        typing_delay_ms = config.typing_delay_ms,
        hug_reveal_delay_ms = config.hug_reveal_delay_ms,
        reveal_policy = ?config.reveal_policy,
        "Starting Valentine greeting"
    );

    // Store page config globally
    let _ = PAGE_CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Happy Valentine's Day")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "valentine-desktop",
            "--typing-delay-ms",
            "10",
            "--reveal-policy",
            "every",
        ]);
        let config = args.page_config().unwrap();
        assert_eq!(config.typing_delay_ms, 10);
        assert_eq!(config.hug_reveal_delay_ms, 2000);
        assert_eq!(config.reveal_policy, RevealPolicy::Every);
    }

    #[test]
    fn missing_config_file_fails_startup() {
        let args = Args::parse_from(["valentine-desktop", "--config", "/nonexistent/valentine.json"]);
        let err = args.page_config().unwrap_err();
        assert!(err.to_string().contains("failed to load config"));
    }

    #[test]
    fn window_defaults() {
        let args = Args::parse_from(["valentine-desktop"]);
        assert_eq!(args.width, 1200.0);
        assert_eq!(args.height, 800.0);
        assert!(args.config.is_none());
    }
}
