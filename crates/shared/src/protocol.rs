use serde::{Deserialize, Serialize};

use crate::domain::NavigationOrigin;

/// What the view layer reads on every render tick.
///
/// `current_index` is `None` for a carousel built over zero items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationSnapshot {
    pub current_index: Option<usize>,
    pub transitioning: bool,
    pub item_count: usize,
}

impl RotationSnapshot {
    pub fn inactive() -> Self {
        Self {
            current_index: None,
            transitioning: false,
            item_count: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.current_index.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum RotationEvent {
    Moved {
        from: usize,
        to: usize,
        origin: NavigationOrigin,
    },
    Settled {
        index: usize,
    },
    Stopped,
}
