use std::{fs, path::Path};

use anyhow::Context;
use rotation_core::CarouselSettings;
use tracing::warn;

const DEFAULT_CONFIG_FILE: &str = "carousel.toml";

/// Defaults, then `carousel.toml` (or the explicit `path`), then environment.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<CarouselSettings> {
    load_settings_with(path, |key| std::env::var(key).ok())
}

fn load_settings_with(
    path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<CarouselSettings> {
    let mut settings: CarouselSettings = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?
        }
        None => match fs::read_to_string(DEFAULT_CONFIG_FILE) {
            Ok(raw) => toml::from_str(&raw).unwrap_or_else(|err| {
                warn!(error = %err, file = DEFAULT_CONFIG_FILE, "ignoring unparseable config file");
                CarouselSettings::default()
            }),
            Err(_) => CarouselSettings::default(),
        },
    };

    if let Some(v) = env_override(
        &env,
        &["CAROUSEL_ROTATION_INTERVAL_MS", "APP__ROTATION_INTERVAL_MS"],
    ) {
        settings.rotation_interval_ms = v;
    }
    if let Some(v) = env_override(
        &env,
        &["CAROUSEL_TRANSITION_WINDOW_MS", "APP__TRANSITION_WINDOW_MS"],
    ) {
        settings.transition_window_ms = v;
    }
    if let Some(v) = env_override(&env, &["CAROUSEL_EVENT_BUFFER", "APP__EVENT_BUFFER"]) {
        settings.event_buffer = v;
    }

    Ok(settings)
}

/// Later keys win. Values that do not parse are ignored.
fn env_override<T: std::str::FromStr>(
    env: &impl Fn(&str) -> Option<String>,
    keys: &[&str],
) -> Option<T> {
    keys.iter()
        .filter_map(|key| env(key).and_then(|v| v.trim().parse().ok()))
        .last()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
