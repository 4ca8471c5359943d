//! Position bookkeeping for a rotation: current index, item count and the
//! transition flag. No timing lives here.

use shared::{domain::Direction, protocol::RotationSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationState {
    item_count: usize,
    current_index: usize,
    transitioning: bool,
}

impl RotationState {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            current_index: 0,
            transitioning: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.item_count > 0
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn current_index(&self) -> Option<usize> {
        self.is_active().then_some(self.current_index)
    }

    /// Steps one position with wrap-around and opens a transition.
    /// Returns `(from, to)` when accepted.
    pub fn advance(&mut self, direction: Direction) -> Option<(usize, usize)> {
        if !self.is_active() || self.transitioning {
            return None;
        }
        let to = match direction {
            Direction::Forward => (self.current_index + 1) % self.item_count,
            Direction::Backward if self.current_index == 0 => self.item_count - 1,
            Direction::Backward => self.current_index - 1,
        };
        Some(self.move_to(to))
    }

    pub fn jump_to(&mut self, index: usize) -> Option<(usize, usize)> {
        if self.transitioning || index >= self.item_count || index == self.current_index {
            return None;
        }
        Some(self.move_to(index))
    }

    /// Closes the transition window. Always succeeds.
    pub fn settle(&mut self) {
        self.transitioning = false;
    }

    pub fn snapshot(&self) -> RotationSnapshot {
        RotationSnapshot {
            current_index: self.current_index(),
            transitioning: self.transitioning,
            item_count: self.item_count,
        }
    }

    fn move_to(&mut self, to: usize) -> (usize, usize) {
        let from = self.current_index;
        self.current_index = to;
        self.transitioning = true;
        (from, to)
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
