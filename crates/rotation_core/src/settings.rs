use std::time::Duration;

use serde::Deserialize;

use crate::error::SettingsError;

pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 5_000;
pub const DEFAULT_TRANSITION_WINDOW_MS: u64 = 500;
pub const DEFAULT_EVENT_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Delay between autonomous forward advances when nobody navigates.
    pub rotation_interval_ms: u64,
    /// How long `transitioning` stays set after an accepted navigation.
    pub transition_window_ms: u64,
    /// Capacity of the rotation event channel handed to subscribers.
    pub event_buffer: usize,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            rotation_interval_ms: DEFAULT_ROTATION_INTERVAL_MS,
            transition_window_ms: DEFAULT_TRANSITION_WINDOW_MS,
            event_buffer: DEFAULT_EVENT_BUFFER,
        }
    }
}

impl CarouselSettings {
    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }

    pub fn transition_window(&self) -> Duration {
        Duration::from_millis(self.transition_window_ms)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.rotation_interval_ms == 0 {
            return Err(SettingsError::ZeroRotationInterval);
        }
        if self.transition_window_ms == 0 {
            return Err(SettingsError::ZeroTransitionWindow);
        }
        // An autoplay fire landing inside an open window would be dropped.
        if self.transition_window_ms >= self.rotation_interval_ms {
            return Err(SettingsError::WindowNotShorterThanInterval {
                window_ms: self.transition_window_ms,
                interval_ms: self.rotation_interval_ms,
            });
        }
        if self.event_buffer == 0 {
            return Err(SettingsError::ZeroEventBuffer);
        }
        Ok(())
    }
}
