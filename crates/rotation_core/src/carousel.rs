use shared::protocol::RotationSnapshot;

use crate::{controller::CarouselController, error::CarouselError, settings::CarouselSettings};

/// Items paired with the controller that rotates over them.
pub struct Carousel<T> {
    items: Vec<T>,
    controller: CarouselController,
}

impl<T> Carousel<T> {
    pub fn start(
        items: impl IntoIterator<Item = T>,
        settings: CarouselSettings,
    ) -> Result<Self, CarouselError> {
        let items: Vec<T> = items.into_iter().collect();
        let controller = CarouselController::start(items.len(), settings)?;
        Ok(Self { items, controller })
    }

    pub fn current(&self) -> Option<&T> {
        self.controller
            .observe()
            .current_index
            .and_then(|index| self.items.get(index))
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn controller(&self) -> &CarouselController {
        &self.controller
    }

    pub fn observe(&self) -> RotationSnapshot {
        self.controller.observe()
    }

    pub fn next(&self) -> bool {
        self.controller.next()
    }

    pub fn previous(&self) -> bool {
        self.controller.previous()
    }

    pub fn go_to(&self, index: usize) -> bool {
        self.controller.go_to(index)
    }

    pub fn stop(&self) {
        self.controller.stop();
    }
}
