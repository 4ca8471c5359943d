use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("carousel controller must be started inside a tokio runtime")]
    NoRuntime,
    #[error("invalid carousel settings: {0}")]
    InvalidSettings(#[from] SettingsError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("rotation interval must be greater than zero")]
    ZeroRotationInterval,
    #[error("transition window must be greater than zero")]
    ZeroTransitionWindow,
    #[error("transition window ({window_ms}ms) must be shorter than the rotation interval ({interval_ms}ms)")]
    WindowNotShorterThanInterval { window_ms: u64, interval_ms: u64 },
    #[error("event buffer must hold at least one event")]
    ZeroEventBuffer,
}
